//! Background actors bound to one round of a [`crate::Session`].

pub mod automated;
pub mod signal;
pub mod watchdog;

pub use automated::take_turn;
pub use signal::{Handoff, Shutdown};
