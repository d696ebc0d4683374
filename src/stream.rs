//! Raw relay of a streamed response body.

use crate::error::Error;
use bytes::Bytes;
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;

/// Forward every chunk of `body` to `sink` as it arrives.
///
/// Chunks are relayed verbatim in transport order, with no buffering of the
/// full body and no framing — whatever the server emits (typically
/// newline-delimited JSON event fragments) reaches the sink as-is. A dropped
/// receiver ends the relay early with Ok; a transport failure surfaces as
/// [`Error::Transport`], with already-forwarded bytes left with the receiver.
pub(crate) async fn forward_body<S>(body: S, sink: &mpsc::Sender<Bytes>) -> Result<(), Error>
where
    S: Stream<Item = Result<Bytes, reqwest::Error>>,
{
    futures::pin_mut!(body);

    while let Some(chunk) = body.next().await {
        let chunk = chunk?;
        if sink.send(chunk).await.is_err() {
            tracing::debug!("sink receiver dropped, abandoning stream");
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(parts: &[&str]) -> Vec<Result<Bytes, reqwest::Error>> {
        parts
            .iter()
            .map(|p| Ok(Bytes::copy_from_slice(p.as_bytes())))
            .collect()
    }

    #[tokio::test]
    async fn test_chunks_arrive_in_order_unframed() {
        let (tx, mut rx) = mpsc::channel(8);
        forward_body(futures::stream::iter(chunks(&["a", "b", "c"])), &tx)
            .await
            .unwrap();
        drop(tx);

        let mut received = Vec::new();
        while let Some(chunk) = rx.recv().await {
            received.extend_from_slice(&chunk);
        }
        assert_eq!(received, b"abc");
    }

    #[tokio::test]
    async fn test_empty_body_sends_nothing() {
        let (tx, mut rx) = mpsc::channel(8);
        forward_body(futures::stream::iter(chunks(&[])), &tx)
            .await
            .unwrap();
        drop(tx);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_dropped_receiver_ends_relay() {
        let (tx, rx) = mpsc::channel(8);
        drop(rx);
        let result = forward_body(futures::stream::iter(chunks(&["a", "b"])), &tx).await;
        assert!(result.is_ok());
    }
}
