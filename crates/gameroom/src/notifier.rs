use super::*;
use tokio::sync::mpsc::Receiver;

/// Sink for table notifications: formats and delivers them to chat.
///
/// Delivery is best effort. A failure is logged and the message is gone;
/// the table has already moved on and never retries or rolls back.
#[async_trait::async_trait]
pub trait Notifier: Send {
    async fn deliver(&mut self, message: &Message) -> anyhow::Result<()>;
}

/// Drains the outbound queue into a notifier until the dispatcher stops,
/// then hands the notifier back.
pub async fn relay<N>(mut outbox: Receiver<Message>, mut notifier: N) -> N
where
    N: Notifier,
{
    while let Some(ref message) = outbox.recv().await {
        if let Err(e) = notifier.deliver(message).await {
            log::warn!("[notifier] delivery of {} failed: {}", message, e);
        }
    }
    log::debug!("[notifier] outbox closed");
    notifier
}
