//! Session orchestration: roster, turns, voting, ranking.
//!
//! ## Key Types
//!
//! - `SessionState`: The engine's public API
//! - `SessionSignal`: Zero-payload phase notifications
//! - `TurnOutcome`: Result of an accepted tweet or vote
//! - `RankedEntry`: One line of the final standings

pub mod ranking;
pub mod signal;
pub mod state;

pub use ranking::{rank_players, RankedEntry};
pub use signal::{SessionSignal, TurnOutcome};
pub use state::{DealReport, PlayerDeal, SessionState};
