use hg_core::*;
use std::time::Duration;

/// Errors that make a dispatcher impossible to construct.
/// Surfaced to the process owner before any session exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    EmptyDeck,
    InvalidRule(&'static str),
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDeck => write!(f, "template card set is empty"),
            Self::InvalidRule(s) => write!(f, "invalid rule: {}", s),
        }
    }
}

impl std::error::Error for SetupError {}

/// Rule parameters shared by every table for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Most recent cards considered when the bell rings.
    pub window: usize,
    /// Exact fruit tally that wins.
    pub target: Count,
    /// Delay between automatic reveals.
    pub interval: Duration,
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            window: WINDOW_SIZE,
            target: WIN_COUNT,
            interval: Duration::from_secs(DEAL_INTERVAL),
        }
    }
}

impl Rule {
    pub fn validate(self) -> Result<Self, SetupError> {
        if self.window == 0 {
            return Err(SetupError::InvalidRule("window must be positive"));
        }
        if self.target == 0 {
            return Err(SetupError::InvalidRule("target must be positive"));
        }
        if self.interval.is_zero() {
            return Err(SetupError::InvalidRule("interval must be positive"));
        }
        Ok(self)
    }
}
