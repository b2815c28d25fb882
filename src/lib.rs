//! Halli Galli over chat.
//!
//! Re-exports the workspace crates and adds the console collaborators:
//! an [`Intent`] classifier for free-text chat lines, a [`Console`]
//! notifier that renders messages as English, and command-line [`Args`].
pub use hg_cards as cards;
pub use hg_core as core;
pub use hg_gameroom as gameroom;

mod console;
mod intent;
pub use console::*;
pub use intent::*;

#[cfg(feature = "server")]
mod args;
#[cfg(feature = "server")]
pub use args::*;
