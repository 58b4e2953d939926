//! Headless full-game driver.
//!
//! Plays a started game to the end through a `PhaseController`: every
//! player builds a tweet from their own hand, then every voter picks a
//! random tweet other than their own.

use super::controller::{PhaseController, Presenter};
use crate::cards::Category;
use crate::core::{GameRng, Phase, PlayerRecord};
use crate::error::FlowError;
use crate::session::{RankedEntry, SessionState};

/// Compose a tweet from one card of each category in the player's hand.
///
/// Falls back to any hand card when a category was short, and to a stock
/// line when the hand is empty.
#[must_use]
pub fn compose_from_hand(player: &PlayerRecord) -> String {
    let mut parts: Vec<&str> = Category::ALL
        .iter()
        .filter_map(|&category| player.cards_in(category).next())
        .map(|card| card.text.as_str())
        .collect();
    if parts.is_empty() {
        parts.extend(player.hand().first().map(|card| card.text.as_str()));
    }
    if parts.is_empty() {
        return format!("{} is speechless.", player.name());
    }
    parts.join(" ")
}

/// Run a game in the Tweeting phase through to Result.
pub fn run_automatic<P: Presenter>(
    controller: &mut PhaseController<P>,
    session: &mut SessionState,
    rng: &mut GameRng,
) -> Result<Vec<RankedEntry>, FlowError> {
    loop {
        let Some(tweet) = session.current_player().map(compose_from_hand) else {
            break;
        };
        controller.post_tweet(session, &tweet)?;
    }
    controller.begin_voting(session)?;

    while !session.turns_exhausted() {
        let candidates: Vec<usize> = session.votable_entries().map(|(i, _)| i).collect();
        let Some(pick) = rng.choose_index(candidates.len()) else {
            return Err(FlowError::TurnsOutstanding {
                phase: Phase::Voting,
            });
        };
        controller.cast_vote(session, candidates[pick])?;
    }

    controller.show_results(session)
}
