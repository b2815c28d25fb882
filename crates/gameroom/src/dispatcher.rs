use super::*;
use hg_cards::*;
use hg_core::*;
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;
use tokio::sync::mpsc::Sender;
use tokio::sync::mpsc::error::SendTimeoutError;

/// Single coordination loop for every table in the process.
///
/// Imperative shell around [`Session`]: owns the registry, the tick queue,
/// and the outbound queue, and is the only writer of session state. Events
/// and timer ticks are handled one at a time, so a ring or terminate is
/// always ordered against a tick for the same table.
pub struct Dispatcher {
    rule: Rule,
    catalog: Arc<Catalog>,
    registry: Registry,
    ticks: Channel<Tick>,
    outbox: Sender<Message>,
    open: bool,
}

impl Dispatcher {
    pub fn new(
        rule: Rule,
        catalog: Arc<Catalog>,
        outbox: Sender<Message>,
    ) -> Result<Self, SetupError> {
        let rule = rule.validate()?;
        let registry = Registry::new(catalog.templates().to_vec())?;
        Ok(Self {
            rule,
            catalog,
            registry,
            ticks: Channel::bounded(TICK_CAPACITY),
            outbox,
            open: true,
        })
    }
    pub fn rule(&self) -> &Rule {
        &self.rule
    }
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl Dispatcher {
    /// Runs until every event producer hangs up or the notifier goes away.
    /// Timers still armed at exit are cancelled.
    pub async fn run(mut self, mut inbox: Receiver<Event>) {
        log::info!("[dispatcher] accepting events");
        while self.open {
            tokio::select! {
                biased;
                event = inbox.recv() => match event {
                    Some(event) => self.handle(event).await,
                    None => break,
                },
                Some(tick) = self.ticks.rx().recv() => self.tick(tick).await,
            }
        }
        self.registry.disarm_all();
        log::info!("[dispatcher] stopped with {} tables", self.registry.len());
    }
    /// Applies one chat event, opening the channel's table if needed.
    pub async fn handle(&mut self, event: Event) {
        log::trace!("[dispatcher] #{} received {}", event.channel, event.action);
        self.dispatch(event.channel, Signal::from(event.action)).await;
    }
    async fn tick(&mut self, tick: Tick) {
        log::trace!("[dispatcher] #{} tick #{}", tick.channel, tick.epoch);
        if self.registry.get(&tick.channel).is_some() {
            self.dispatch(tick.channel, Signal::Tick(tick.epoch)).await;
        }
    }
    async fn dispatch(&mut self, channel: ChannelId, signal: Signal) {
        let session = self.registry.entry(&channel);
        let before = session.state();
        let effects = session.apply(signal, &self.rule, &self.catalog);
        if effects.is_empty() {
            log::trace!("[dispatcher] #{} nothing to do in {:?}", channel, before);
            return;
        }
        log::debug!("[dispatcher] #{} {:?} -> {:?}", channel, before, session.state());
        for effect in effects {
            match effect {
                Effect::Arm => session.arm(&channel, self.rule.interval, self.ticks.tx().clone()),
                Effect::Disarm => session.disarm(),
                Effect::Emit(notice) => {
                    let message = Message::new(channel.clone(), notice);
                    self.open &= deliver(&self.outbox, message).await;
                }
            }
        }
    }
}

/// Hands a message to the notifier, waiting at most [`DELIVERY_TIMEOUT`].
/// A stalled notifier costs the message, never the game state.
/// Returns false once the notifier has hung up.
async fn deliver(outbox: &Sender<Message>, message: Message) -> bool {
    log::debug!("[dispatcher] emit {}", message);
    match outbox.send_timeout(message, DELIVERY_TIMEOUT).await {
        Ok(()) => true,
        Err(SendTimeoutError::Timeout(message)) => {
            log::warn!("[dispatcher] notifier stalled, dropped {}", message);
            true
        }
        Err(SendTimeoutError::Closed(_)) => {
            log::warn!("[dispatcher] notifier hung up");
            false
        }
    }
}
