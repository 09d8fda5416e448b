//! # Block Relay Benchmarks
//!
//! | Path | Target |
//! |------|--------|
//! | Canonical block encoding (1 MB block) | < 1ms |
//! | Receive loop, 1000 blocks, accept-all verifier | < 50ms |

use block_relay::adapters::{InMemoryStream, RecordingGossip};
use block_relay::{
    encode_block, Block, BlockRelay, BlockVerifier, BlocksProvider, ChannelId, DeliverResponse,
    RelayError, Status,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;

struct AcceptAll;

impl BlockVerifier for AcceptAll {
    fn verify_block(&self, _: &ChannelId, _: u64, _: &[u8]) -> Result<(), RelayError> {
        Ok(())
    }
}

fn bench_encode_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("block-encoding");

    for size_kb in [1usize, 64, 1024] {
        let block = Block::new(1, [0u8; 32], vec![vec![0xAB; 1024]; size_kb]);
        group.throughput(Throughput::Bytes((size_kb * 1024) as u64));
        group.bench_with_input(BenchmarkId::new("encode", size_kb), &block, |b, block| {
            b.iter(|| black_box(encode_block(block, u64::MAX).unwrap()))
        });
    }

    group.finish();
}

fn bench_receive_loop(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let blocks: Vec<Block> = (1..=1_000)
        .map(|seq| Block::new(seq, [0u8; 32], vec![vec![0u8; 256]]))
        .collect();

    let mut group = c.benchmark_group("receive-loop");
    group.throughput(Throughput::Elements(blocks.len() as u64));
    group.bench_function("deliver_1000_blocks", |b| {
        b.iter(|| {
            let mut script: Vec<_> = blocks
                .iter()
                .cloned()
                .map(|block| Ok(DeliverResponse::Block(block)))
                .collect();
            script.push(Ok(DeliverResponse::Status(Status::Success)));

            let relay = BlockRelay::new(
                ChannelId::from("bench"),
                Arc::new(InMemoryStream::scripted(script)),
                Arc::new(RecordingGossip::new()),
                Arc::new(AcceptAll),
            );
            black_box(runtime.block_on(relay.deliver_blocks()))
        })
    });
    group.finish();
}

criterion_group!(benches, bench_encode_block, bench_receive_loop);
criterion_main!(benches);
