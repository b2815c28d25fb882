use super::*;
use hg_cards::*;
use hg_core::*;
use std::time::Duration;
use tokio::sync::mpsc::Sender;

/// Lifecycle of a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum State {
    #[default]
    Closed,
    WaitingForStart,
    Paused,
    Running,
}

/// Side effect requested by a transition, carried out by the dispatcher
/// in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Emit(Notice),
    Arm,
    Disarm,
}

/// One channel's table: deck, round history, lifecycle, and reveal timer.
///
/// Functional core of the game. [`Session::apply`] decides the transition
/// and the effects; the dispatcher owns the queues and executes them.
/// State pairs outside the transition table are ignored without effect.
#[derive(Debug)]
pub struct Session {
    state: State,
    round: u64,
    deck: Deck,
    revealed: Vec<Card>,
    timer: Timer,
}

impl Session {
    pub fn new(deck: Deck) -> Self {
        Self {
            state: State::Closed,
            round: 0,
            deck,
            revealed: Vec::new(),
            timer: Timer::default(),
        }
    }
    pub fn state(&self) -> State {
        self.state
    }
    /// Rounds started since the table was created.
    pub fn round(&self) -> u64 {
        self.round
    }
    /// Cards revealed in the current round, oldest first.
    pub fn revealed(&self) -> &[Card] {
        &self.revealed
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn timer(&self) -> &Timer {
        &self.timer
    }
    pub fn arm(&mut self, channel: &ChannelId, interval: Duration, ticks: Sender<Tick>) {
        self.timer.arm(channel, interval, ticks);
    }
    pub fn disarm(&mut self) {
        self.timer.disarm();
    }
}

impl Session {
    /// Applies one signal under the transition table.
    pub fn apply(&mut self, signal: Signal, rule: &Rule, catalog: &Catalog) -> Vec<Effect> {
        match (self.state, signal) {
            (State::Closed | State::WaitingForStart, Signal::Event(Action::Initiate)) => {
                self.state = State::WaitingForStart;
                vec![Effect::Emit(Notice::ShowRule)]
            }
            (State::WaitingForStart, Signal::Event(Action::Start)) => {
                self.state = State::Running;
                self.new_round();
                vec![self.reveal(), Effect::Arm]
            }
            (State::Running, Signal::Event(Action::RingTheBell(player))) => {
                self.state = State::Paused;
                let verdict = self.judge(rule, catalog);
                let status = RoundStatus::new(verdict, player, catalog);
                match verdict.is_win() {
                    true => {
                        self.new_round();
                        vec![Effect::Disarm, Effect::Emit(Notice::PlayerWin(status))]
                    }
                    false => vec![Effect::Disarm, Effect::Emit(Notice::FakeRing(status))],
                }
            }
            (State::Paused, Signal::Event(Action::Continue)) => {
                self.state = State::Running;
                vec![self.reveal(), Effect::Arm]
            }
            (
                State::WaitingForStart | State::Running | State::Paused,
                Signal::Event(Action::Terminate),
            ) => {
                self.state = State::Closed;
                vec![Effect::Disarm, Effect::Emit(Notice::Terminated)]
            }
            (State::Running | State::Paused, Signal::Event(Action::Explain)) => {
                let tally = Tally::from(window(&self.revealed, rule.window));
                vec![Effect::Emit(Notice::Explain(tally))]
            }
            (State::Running, Signal::Tick(epoch)) if epoch == self.timer.epoch() => {
                vec![self.reveal(), Effect::Arm]
            }
            (_, _) => Vec::new(),
        }
    }
    fn reveal(&mut self) -> Effect {
        let card = self.deck.draw();
        self.revealed.push(card.clone());
        Effect::Emit(Notice::CardRevealed(card))
    }
    fn new_round(&mut self) {
        self.round += 1;
        self.revealed.clear();
    }
    fn judge(&self, rule: &Rule, catalog: &Catalog) -> Verdict {
        let verdict = Verdict::evaluate(&self.revealed, rule);
        log::debug!(
            "[session] round {} window {} -> {:?}",
            self.round,
            window(&self.revealed, rule.window)
                .iter()
                .map(|c| catalog.describe(c))
                .collect::<Vec<_>>()
                .join(" "),
            verdict
        );
        verdict
    }
}
