//! Per-participant state.
//!
//! `PlayerRecord` is a passive data holder. It never validates: the session
//! decides whether a card may be added or a vote recorded, then calls in.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardId, Category};

/// One participant's hand, composition, score and votes.
///
/// The hand is append-only so it remains an audit trail of what was dealt
/// even after the player has composed a tweet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    name: String,
    hand: Vec<Card>,
    /// Ids of category-dealt cards, indexed by `Category::index`.
    by_category: [SmallVec<[CardId; 4]>; 3],
    /// Ids of cards dealt from the mixed pool.
    extras: SmallVec<[CardId; 4]>,
    composition: Option<String>,
    score: u32,
    outbound_votes: Vec<String>,
}

impl PlayerRecord {
    /// Create an empty record with score 0.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            by_category: Default::default(),
            extras: SmallVec::new(),
            composition: None,
            score: 0,
            outbound_votes: Vec::new(),
        }
    }

    /// Append a card to the hand and to its category sub-list.
    pub fn add_card(&mut self, card: Card) {
        self.by_category[card.category.index()].push(card.id.clone());
        self.hand.push(card);
    }

    /// Append a card to the hand as an uncategorized extra.
    pub fn add_extra(&mut self, card: Card) {
        self.extras.push(card.id.clone());
        self.hand.push(card);
    }

    /// Store the player's tweet, replacing any earlier one.
    pub fn submit_composition(&mut self, text: impl Into<String>) {
        self.composition = Some(text.into());
    }

    /// Record a vote this player cast.
    pub fn record_vote(&mut self, target_name: impl Into<String>) {
        self.outbound_votes.push(target_name.into());
    }

    /// Add received votes to the score.
    pub fn add_score(&mut self, n: u32) {
        self.score += n;
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every card dealt to this player, in deal order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Cards dealt under a category constraint.
    pub fn cards_in(&self, category: Category) -> impl Iterator<Item = &Card> {
        let ids = &self.by_category[category.index()];
        self.hand.iter().filter(move |c| ids.contains(&c.id))
    }

    /// Cards dealt from the mixed pool.
    pub fn extras(&self) -> impl Iterator<Item = &Card> {
        self.hand.iter().filter(move |c| self.extras.contains(&c.id))
    }

    #[must_use]
    pub fn composition(&self) -> Option<&str> {
        self.composition.as_deref()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Names this player voted for.
    #[must_use]
    pub fn outbound_votes(&self) -> &[String] {
        &self.outbound_votes
    }

    #[must_use]
    pub fn has_voted(&self) -> bool {
        !self.outbound_votes.is_empty()
    }
}
