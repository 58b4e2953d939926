//! Completion signals and turn outcomes.
//!
//! Signals carry no payload. Whoever receives one re-reads the session
//! through its accessors.

use serde::{Deserialize, Serialize};

/// A phase-level notification raised by the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionSignal {
    /// Every player has submitted a tweet.
    TweetingComplete,
    /// Every player has voted.
    VotingComplete,
    /// The session went back to Setup.
    GameReset,
}

impl std::fmt::Display for SessionSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionSignal::TweetingComplete => "TweetingComplete",
            SessionSignal::VotingComplete => "VotingComplete",
            SessionSignal::GameReset => "GameReset",
        };
        f.write_str(name)
    }
}

/// What an accepted tweet or vote did to the turn cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The cursor moved on to this player index.
    Next(usize),
    /// The cursor reached the end of the roster.
    PhaseComplete(SessionSignal),
}

impl TurnOutcome {
    /// The signal to relay, if the phase just completed.
    #[must_use]
    pub fn signal(self) -> Option<SessionSignal> {
        match self {
            TurnOutcome::Next(_) => None,
            TurnOutcome::PhaseComplete(signal) => Some(signal),
        }
    }
}
