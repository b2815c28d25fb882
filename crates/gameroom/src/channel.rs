use tokio::sync::mpsc::Receiver;
use tokio::sync::mpsc::Sender;

/// Coupled bounded sender/receiver pair.
/// Lets an owner hand out senders while keeping the receiving end, and
/// keeps the queue open for as long as the owner lives.
#[derive(Debug)]
pub struct Channel<T> {
    tx: Sender<T>,
    rx: Receiver<T>,
}

impl<T> Channel<T> {
    pub fn bounded(capacity: usize) -> Self {
        let (tx, rx) = tokio::sync::mpsc::channel(capacity);
        Self { tx, rx }
    }
    pub fn tx(&self) -> &Sender<T> {
        &self.tx
    }
    pub fn rx(&mut self) -> &mut Receiver<T> {
        &mut self.rx
    }
}
