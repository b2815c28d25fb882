use super::*;
use hg_cards::*;
use hg_core::*;
use std::collections::HashMap;

/// Every table the process has seen, keyed by channel.
///
/// Tables are created lazily in [`State::Closed`] with a freshly shuffled
/// deck and are never removed. Owned by the dispatcher alone.
#[derive(Debug)]
pub struct Registry {
    templates: Vec<Card>,
    sessions: HashMap<ChannelId, Session>,
}

impl Registry {
    /// Fails when there are no cards to build decks from.
    pub fn new(templates: Vec<Card>) -> Result<Self, SetupError> {
        if templates.is_empty() {
            return Err(SetupError::EmptyDeck);
        }
        Ok(Self {
            templates,
            sessions: HashMap::new(),
        })
    }
    /// The table for a channel, created on first sight.
    pub fn entry(&mut self, channel: &str) -> &mut Session {
        let templates = &self.templates;
        self.sessions
            .entry(channel.to_string())
            .or_insert_with(|| {
                log::debug!("[registry] opening table for channel {}", channel);
                Session::new(Deck::new(templates))
            })
    }
    pub fn get(&self, channel: &str) -> Option<&Session> {
        self.sessions.get(channel)
    }
    pub fn len(&self) -> usize {
        self.sessions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
    /// Tables whose timer is currently live.
    pub fn armed(&self) -> usize {
        self.sessions.values().filter(|s| s.timer().is_armed()).count()
    }
    /// Stops every timer, e.g. on shutdown.
    pub fn disarm_all(&mut self) {
        self.sessions.values_mut().for_each(Session::disarm);
    }
}
