//! Error types shared across the engine.
//!
//! - `InputRejected`: a player-facing rejection. The call was a no-op.
//! - `CatalogError`: the card catalog could not be built.
//! - `ConfigError`: a session config was unreadable or out of bounds.
//! - `FlowError`: what a `PhaseController` trigger can return.

use thiserror::Error;

use crate::cards::CardId;
use crate::core::Phase;

/// A player input the engine refused. State is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputRejected {
    #[error("composition is blank")]
    BlankComposition,

    #[error("player {voter} cannot vote for themself")]
    SelfVote { voter: usize },

    #[error("vote target {target} is outside the roster of {player_count}")]
    TargetOutOfRange { target: usize, player_count: usize },

    #[error("player {voter} has already voted")]
    AlreadyVoted { voter: usize },

    #[error("every player has already taken this turn")]
    TurnsExhausted,

    #[error("roster of {count} is outside {min}..={max} players")]
    RosterSize { count: usize, min: usize, max: usize },

    #[error("player name {0:?} is used more than once")]
    DuplicateName(String),
}

/// Failure to build a card catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("card id {0} registered twice")]
    DuplicateId(CardId),

    #[error("card {0} has no text")]
    BlankText(CardId),
}

/// Failure to load or validate a `SessionConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("player range {min}..={max} is invalid; a vote needs at least {floor} players")]
    PlayerRange { min: usize, max: usize, floor: usize },
}

/// Result of a rejected `PhaseController` trigger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error(transparent)]
    Rejected(#[from] InputRejected),

    /// The trigger arrived in the wrong phase. Player input cannot cause
    /// this; it points at a defect in whatever drives the controller.
    #[error("trigger expects phase {expected} but session is in {actual}")]
    PhaseMismatch { expected: Phase, actual: Phase },

    /// The phase matches but its turns are still running.
    #[error("phase {phase} still has turns outstanding")]
    TurnsOutstanding { phase: Phase },
}
