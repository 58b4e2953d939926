//! Session phases.
//!
//! Valid transitions:
//!
//! ```text
//! Setup --initialize_game--> Tweeting --start_voting_phase--> Voting
//!   ^                                                            |
//!   +------------------reset------------ Result <--show_results--+
//! ```

use serde::{Deserialize, Serialize};

/// Top-level state of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a roster.
    #[default]
    Setup,
    /// Players compose tweets in roster order.
    Tweeting,
    /// Players vote in roster order.
    Voting,
    /// Ranking is final.
    Result,
}

impl Phase {
    /// Whether `self -> next` is an edge of the phase machine.
    #[must_use]
    pub fn can_transition_to(self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Phase::Setup, Phase::Tweeting)
                | (Phase::Tweeting, Phase::Voting)
                | (Phase::Voting, Phase::Result)
                | (Phase::Result, Phase::Setup)
        )
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Setup => "Setup",
            Phase::Tweeting => "Tweeting",
            Phase::Voting => "Voting",
            Phase::Result => "Result",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Phase; 4] = [Phase::Setup, Phase::Tweeting, Phase::Voting, Phase::Result];

    #[test]
    fn test_default_is_setup() {
        assert_eq!(Phase::default(), Phase::Setup);
    }

    #[test]
    fn test_only_cycle_edges_are_valid() {
        let valid: Vec<_> = ALL
            .iter()
            .flat_map(|&a| ALL.iter().map(move |&b| (a, b)))
            .filter(|&(a, b)| a.can_transition_to(b))
            .collect();

        assert_eq!(
            valid,
            vec![
                (Phase::Setup, Phase::Tweeting),
                (Phase::Tweeting, Phase::Voting),
                (Phase::Voting, Phase::Result),
                (Phase::Result, Phase::Setup),
            ]
        );
    }
}
