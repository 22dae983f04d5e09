// src/core/mod.rs

pub mod activity;
pub mod board;
pub mod clock;
pub mod sequence;
pub mod session;
pub mod store;

pub use board::{Board, IgnoreReason, Intent, Outcome};
pub use clock::{Clock, FixedClock, SystemClock};
pub use sequence::IdSequence;
pub use session::{Committed, EditSession};
pub use store::EventStore;
