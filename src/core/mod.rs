//! Core engine types: players, phases, RNG, configuration.

pub mod config;
pub mod phase;
pub mod player;
pub mod rng;

pub use config::{HandLayout, SessionConfig, MIN_PLAYERS};
pub use phase::Phase;
pub use player::PlayerRecord;
pub use rng::GameRng;
