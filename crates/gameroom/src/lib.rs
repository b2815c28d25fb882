//! Async runtime for live Halli Galli tables.
//!
//! One table runs per chat channel. A single dispatcher task owns every
//! table and applies chat events and timer ticks strictly one at a time;
//! per-table timers only ever signal it through a queue.
//!
//! ## Architecture
//!
//! - [`Dispatcher`]: Coordination loop owning the registry and the queues
//! - [`Session`]: Functional core of one table: state machine, deck, history
//! - [`Timer`]: Per-table reveal scheduler, a pure signal source
//! - [`Verdict`]: Sliding-window win evaluation
//! - [`Registry`]: Channel to table mapping, created lazily, never pruned
//!
//! ## Boundaries
//!
//! - [`Event`]: Classified chat input (initiate, start, ring, continue, terminate)
//! - [`Message`]: Typed notifications for the chat side
//! - [`Notifier`]: Trait for pluggable delivery, driven by [`relay`]
//! - [`Handle`]: Spawns a dispatcher with bounded queues
mod channel;
mod dispatcher;
mod event;
mod handle;
mod message;
mod notifier;
mod player;
mod registry;
mod rule;
mod session;
mod timer;
mod verdict;

pub use channel::*;
pub use dispatcher::*;
pub use event::*;
pub use handle::*;
pub use message::*;
pub use notifier::*;
pub use player::*;
pub use registry::*;
pub use rule::*;
pub use session::*;
pub use timer::*;
pub use verdict::*;
