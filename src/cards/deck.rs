//! The undealt cards of a session.
//!
//! ## Dealing
//!
//! A hand is dealt by drawing `per_category` cards from each of Opening,
//! Middle and Ending (each draw takes the last matching card), then
//! `extras` cards uniformly from whatever remains. A category running dry
//! is a [`Shortfall`]: the hand is simply smaller. Nothing is backfilled
//! from other categories.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::catalog::CardCatalog;
use super::definition::{Card, Category};
use crate::core::{GameRng, HandLayout};

/// Cards a deal could not supply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    /// The exhausted category, or `None` for the mixed extras pool.
    pub category: Option<Category>,
    /// How many cards were missing.
    pub missing: usize,
}

/// The cards drawn for one player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DealtHand {
    /// Category-constrained draws, in draw order.
    pub categorized: Vec<Card>,
    /// Draws from the mixed pool.
    pub extras: Vec<Card>,
    /// Draws that came up empty.
    pub shortfalls: SmallVec<[Shortfall; 2]>,
}

impl DealtHand {
    /// Total cards dealt.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categorized.len() + self.extras.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered collection of undealt cards.
#[derive(Clone, Debug)]
pub struct Deck {
    source: Vec<Card>,
    cards: Vec<Card>,
    rng: GameRng,
}

impl Deck {
    /// Create a deck holding the full catalog, unshuffled.
    #[must_use]
    pub fn new(catalog: &CardCatalog, rng: GameRng) -> Self {
        let mut deck = Self {
            source: Vec::new(),
            cards: Vec::new(),
            rng,
        };
        deck.load_all(catalog);
        deck
    }

    /// Replace the deck's contents with the whole catalog.
    ///
    /// Calling this twice, or after `reset`, leaves the same set of cards.
    pub fn load_all(&mut self, catalog: &CardCatalog) {
        self.source = catalog.iter().cloned().collect();
        self.cards = self.source.clone();
        tracing::debug!(cards = self.cards.len(), "deck loaded");
    }

    /// Fisher-Yates shuffle with the deck's RNG.
    pub fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.cards);
    }

    /// Remove and return the last card of `category`.
    pub fn draw_by_category(&mut self, category: Category) -> Option<Card> {
        let pos = self.cards.iter().rposition(|c| c.category == category)?;
        Some(self.cards.remove(pos))
    }

    /// Remove and return a card chosen uniformly from the remaining
    /// Opening, Middle and Ending cards.
    ///
    /// Every card carries one of the three categories, so the pool is the
    /// whole remaining deck.
    pub fn draw_any(&mut self) -> Option<Card> {
        let pos = self.rng.choose_index(self.cards.len())?;
        Some(self.cards.remove(pos))
    }

    /// Reload the full catalog and reshuffle.
    pub fn reset(&mut self) {
        self.cards = self.source.clone();
        self.shuffle();
        tracing::debug!(cards = self.cards.len(), "deck reset");
    }

    /// Deal one player's hand.
    pub fn deal_hand(&mut self, layout: &HandLayout) -> DealtHand {
        let mut hand = DealtHand::default();

        for category in Category::ALL {
            let before = hand.categorized.len();
            for _ in 0..layout.per_category {
                match self.draw_by_category(category) {
                    Some(card) => hand.categorized.push(card),
                    None => break,
                }
            }
            let dealt = hand.categorized.len() - before;
            if dealt < layout.per_category {
                hand.shortfalls.push(Shortfall {
                    category: Some(category),
                    missing: layout.per_category - dealt,
                });
            }
        }

        for _ in 0..layout.extras {
            match self.draw_any() {
                Some(card) => hand.extras.push(card),
                None => break,
            }
        }
        if hand.extras.len() < layout.extras {
            hand.shortfalls.push(Shortfall {
                category: None,
                missing: layout.extras - hand.extras.len(),
            });
        }

        hand
    }

    /// Cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Size of the catalog this deck was loaded from.
    #[must_use]
    pub fn catalog_len(&self) -> usize {
        self.source.len()
    }

    /// Remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Remaining cards of one category.
    #[must_use]
    pub fn remaining(&self, category: Category) -> usize {
        self.cards.iter().filter(|c| c.category == category).count()
    }
}
