use super::*;
use hg_cards::Catalog;
use hg_core::*;
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;
use tokio::sync::mpsc::Sender;
use tokio::sync::mpsc::channel;
use tokio::task::JoinHandle;

/// Endpoints of a running dispatcher.
///
/// Producers clone `events`; dropping every clone stops the loop. The
/// notifier side drains `messages`.
pub struct Handle {
    pub events: Sender<Event>,
    pub messages: Receiver<Message>,
    pub task: JoinHandle<()>,
}

impl Handle {
    /// Validates the setup and spawns the dispatcher with bounded queues.
    /// Must be called inside a tokio runtime.
    pub fn spawn(rule: Rule, catalog: Arc<Catalog>) -> Result<Self, SetupError> {
        let (events, inbox) = channel(EVENT_CAPACITY);
        let (outbox, messages) = channel(MESSAGE_CAPACITY);
        let dispatcher = Dispatcher::new(rule, catalog, outbox)?;
        log::debug!("[handle] spawning dispatcher with {:?}", dispatcher.rule());
        let task = tokio::spawn(dispatcher.run(inbox));
        Ok(Self {
            events,
            messages,
            task,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hg_cards::Card;
    #[tokio::test(start_paused = true)]
    async fn spawn_and_shutdown() {
        let catalog = Arc::new(Catalog::default().with_card(Card::animal("a", 1)));
        let Handle {
            events,
            mut messages,
            task,
        } = Handle::spawn(Rule::default(), catalog).unwrap();
        events.send(Event::new("x", Action::Initiate)).await.unwrap();
        assert_eq!(messages.recv().await, Some(Message::new("x", Notice::ShowRule)));
        drop(events);
        assert!(task.await.is_ok());
        assert_eq!(messages.recv().await, None);
    }
    #[tokio::test]
    async fn spawn_rejects_empty_catalog() {
        assert!(Handle::spawn(Rule::default(), Arc::new(Catalog::default())).is_err());
    }
}
