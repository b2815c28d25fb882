use super::*;
use hg_core::*;

/// What a chat message asked the table to do.
/// Classification from free text happens before an event reaches the room.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Open the table and show the rules.
    Initiate,
    /// Deal the first card of a round.
    Start,
    /// A player claims the table shows a winning window.
    RingTheBell(Player),
    /// Resume dealing after a ring.
    Continue,
    /// Close the table.
    Terminate,
    /// Ask for a breakdown of the current window.
    Explain,
}

/// Inbound chat event addressed to one channel's table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub channel: ChannelId,
    pub action: Action,
}

impl Event {
    pub fn new(channel: impl Into<ChannelId>, action: Action) -> Self {
        Self {
            channel: channel.into(),
            action,
        }
    }
    /// The player behind the event, when the action carries one.
    pub fn actor(&self) -> Option<&Player> {
        match &self.action {
            Action::RingTheBell(player) => Some(player),
            _ => None,
        }
    }
}

/// Wake-up from a table's reveal timer.
/// Only meaningful while the epoch matches the timer's live arming.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tick {
    pub channel: ChannelId,
    pub epoch: Epoch,
}

/// Anything the dispatcher applies to a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Signal {
    Event(Action),
    Tick(Epoch),
}

impl From<Action> for Signal {
    fn from(action: Action) -> Self {
        Self::Event(action)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Initiate => write!(f, "initiate"),
            Action::Start => write!(f, "start"),
            Action::RingTheBell(player) => write!(f, "ring by {}", player),
            Action::Continue => write!(f, "continue"),
            Action::Terminate => write!(f, "terminate"),
            Action::Explain => write!(f, "explain"),
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Signal::Event(action) => write!(f, "{}", action),
            Signal::Tick(epoch) => write!(f, "tick #{}", epoch),
        }
    }
}
