//! # Trust Boundary Scenarios
//!
//! Bytes from the ordering service only become gossip after verification.
//! These scenarios feed forged and tampered blocks through a verifier that
//! re-checks the canonical encoding the relay hands it.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use block_relay::adapters::{InMemoryStream, RecordingGossip};
    use block_relay::{
        decode_block, Block, BlockRelay, BlockVerifier, BlocksProvider, ChannelId,
        DeliverResponse, DeliveryOutcome, RelayError, Status,
    };

    use crate::init_test_logging;

    /// Accepts a block only for its trusted channel, when the encoded header
    /// number matches the claimed sequence number and the data hash matches
    /// the data.
    struct ContentVerifier {
        trusted: ChannelId,
    }

    impl BlockVerifier for ContentVerifier {
        fn verify_block(
            &self,
            channel: &ChannelId,
            seq_num: u64,
            bytes: &[u8],
        ) -> Result<(), RelayError> {
            let reject = |reason: &str| RelayError::VerificationFailed {
                seq_num,
                reason: reason.to_string(),
            };
            if channel != &self.trusted {
                return Err(reject("untrusted channel"));
            }
            let block = decode_block(bytes)?;
            if block.header.number != seq_num {
                return Err(reject("sequence number mismatch"));
            }
            if block.header.data_hash != block.data.hash() {
                return Err(reject("data hash mismatch"));
            }
            Ok(())
        }
    }

    fn honest(seq_num: u64) -> Block {
        Block::new(seq_num, [1u8; 32], vec![format!("honest-{seq_num}").into_bytes()])
    }

    fn tampered(seq_num: u64) -> Block {
        let mut block = honest(seq_num);
        block.data.data.push(b"injected".to_vec());
        block
    }

    fn run_relay(
        channel: &str,
        script: Vec<Result<DeliverResponse, RelayError>>,
    ) -> (
        BlockRelay<InMemoryStream, RecordingGossip, ContentVerifier>,
        Arc<RecordingGossip>,
    ) {
        let gossip = Arc::new(RecordingGossip::new());
        let relay = BlockRelay::new(
            ChannelId::from(channel),
            Arc::new(InMemoryStream::scripted(script)),
            gossip.clone(),
            Arc::new(ContentVerifier {
                trusted: ChannelId::from("trusted"),
            }),
        );
        (relay, gossip)
    }

    #[tokio::test]
    async fn test_tampered_block_is_dropped() {
        init_test_logging();

        let (relay, gossip) = run_relay(
            "trusted",
            vec![
                Ok(DeliverResponse::Block(honest(1))),
                Ok(DeliverResponse::Block(tampered(2))),
                Ok(DeliverResponse::Block(honest(3))),
                Ok(DeliverResponse::Status(Status::Success)),
            ],
        );

        let outcome = relay.deliver_blocks().await;

        assert!(matches!(outcome, DeliveryOutcome::SeekCompleted));
        assert_eq!(gossip.gossiped_seq_nums(), vec![1, 3]);
        assert_eq!(gossip.added_seq_nums(), vec![1, 3]);

        // What was gossiped decodes back to the honest blocks.
        for msg in gossip.gossiped() {
            let block = decode_block(&msg.payload().data).unwrap();
            assert_eq!(block, honest(msg.payload().seq_num));
        }
    }

    #[tokio::test]
    async fn test_untrusted_channel_disseminates_nothing() {
        init_test_logging();

        let (relay, gossip) = run_relay(
            "intruder",
            vec![
                Ok(DeliverResponse::Block(honest(1))),
                Ok(DeliverResponse::Block(honest(2))),
            ],
        );

        let outcome = relay.deliver_blocks().await;

        assert!(matches!(
            outcome,
            DeliveryOutcome::ReceiveFailed(RelayError::StreamClosed)
        ));
        assert!(gossip.records().is_empty());
        assert_eq!(relay.metrics().verification_failures, 2);
    }

    /// A flood of forged blocks does not stop the relay from delivering the
    /// next honest block.
    #[tokio::test]
    async fn test_forged_flood_does_not_stall_relay() {
        init_test_logging();

        let mut script: Vec<_> = (1..=200)
            .map(|seq| Ok(DeliverResponse::Block(tampered(seq))))
            .collect();
        script.push(Ok(DeliverResponse::Block(honest(201))));
        script.push(Ok(DeliverResponse::Status(Status::Success)));

        let (relay, gossip) = run_relay("trusted", script);

        let outcome = relay.deliver_blocks().await;

        assert!(matches!(outcome, DeliveryOutcome::SeekCompleted));
        assert_eq!(gossip.gossiped_seq_nums(), vec![201]);
        assert_eq!(relay.metrics().verification_failures, 200);
    }
}
