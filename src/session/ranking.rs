//! Competition ranking.
//!
//! Players are ordered by score, highest first. Equal scores keep roster
//! order and share a rank; the next distinct score resumes at its 1-based
//! position, so four players scoring 2, 2, 1, 0 rank 1, 1, 3, 4.

use serde::{Deserialize, Serialize};

use crate::core::PlayerRecord;

/// One line of the final standings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// Competition rank, starting at 1.
    pub rank: usize,
    /// Position in the roster.
    pub player_index: usize,
    pub name: String,
    pub score: u32,
    pub composition: Option<String>,
}

/// Rank `players` (given in roster order).
#[must_use]
pub fn rank_players(players: &[PlayerRecord]) -> Vec<RankedEntry> {
    let mut order: Vec<usize> = (0..players.len()).collect();
    // Stable sort keeps roster order among equal scores.
    order.sort_by(|&a, &b| players[b].score().cmp(&players[a].score()));

    let mut entries: Vec<RankedEntry> = Vec::with_capacity(order.len());
    for (position, &index) in order.iter().enumerate() {
        let player = &players[index];
        let rank = match entries.last() {
            Some(prev) if prev.score == player.score() => prev.rank,
            _ => position + 1,
        };
        entries.push(RankedEntry {
            rank,
            player_index: index,
            name: player.name().to_string(),
            score: player.score(),
            composition: player.composition().map(str::to_string),
        });
    }
    entries
}
