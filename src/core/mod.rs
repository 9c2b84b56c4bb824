//! Core building blocks: sides, RNG, configuration.

pub mod config;
pub mod rng;
pub mod side;

pub use config::{ConfigError, DuelConfig, DEFAULT_HAND_SIZE};
pub use rng::GameRng;
pub use side::{Side, Sides};
