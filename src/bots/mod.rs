pub mod basic;
pub mod console;
pub mod random;
pub mod registry;

pub use basic::BasicStrategy;
pub use console::ConsoleStrategy;
pub use random::RandomStrategy;
pub use registry::{create_strategy_from_spec, label_for_spec};
