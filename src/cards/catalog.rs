//! Static card catalog.
//!
//! The `CardCatalog` holds every card a session can deal, in load order.
//! It provides lookup by `CardId`, per-category views, and JSON loading.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardId, Category};
use crate::error::CatalogError;

/// Registry of all cards available to a session.
///
/// ## Example
///
/// ```
/// use tweet_party::cards::{Card, CardCatalog, Category};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(Card::new("opening_01", "Good morning,", Category::Opening)).unwrap();
///
/// let found = catalog.get(&"opening_01".into()).unwrap();
/// assert_eq!(found.text, "Good morning,");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<Card>,
    index: FxHashMap<CardId, usize>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from cards, rejecting duplicate ids.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for card in cards {
            catalog.register(card)?;
        }
        Ok(catalog)
    }

    /// Parse a catalog from a JSON array of `{ id, text, category }` objects.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        let catalog = Self::from_cards(cards)?;
        tracing::debug!(cards = catalog.len(), "loaded card catalog from json");
        Ok(catalog)
    }

    /// Register a card.
    pub fn register(&mut self, card: Card) -> Result<(), CatalogError> {
        if self.index.contains_key(&card.id) {
            return Err(CatalogError::DuplicateId(card.id));
        }
        if card.text.trim().is_empty() {
            return Err(CatalogError::BlankText(card.id));
        }
        self.index.insert(card.id.clone(), self.cards.len());
        self.cards.push(card);
        Ok(())
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.index.get(id).map(|&i| &self.cards[i])
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.index.contains_key(id)
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Cards of one category, in load order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.category == category)
    }

    /// Number of cards in a category.
    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        self.by_category(category).count()
    }

    /// The bundled fragment set: twenty-two cards per category.
    ///
    /// Six default hands take twelve cards from each category, and the
    /// first five players' extras can take ten more from a single one, so
    /// no default game up to six players runs short.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        let sets: [(Category, &str, &[&str]); 3] = [
            (Category::Opening, "opening", &BUILTIN_OPENINGS),
            (Category::Middle, "middle", &BUILTIN_MIDDLES),
            (Category::Ending, "ending", &BUILTIN_ENDINGS),
        ];
        for (category, prefix, texts) in sets {
            for (i, text) in texts.iter().enumerate() {
                let card = Card::new(format!("{}_{:02}", prefix, i + 1), *text, category);
                catalog.cards.push(card);
            }
        }
        catalog.index = catalog
            .cards
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();
        catalog
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        CardId::new(id)
    }
}

const BUILTIN_OPENINGS: [&str; 22] = [
    "Good morning,",
    "Hot take:",
    "Nobody asked, but",
    "Just realized",
    "Breaking news:",
    "Unpopular opinion:",
    "Day 3 of",
    "Me at 2am:",
    "Can we talk about how",
    "PSA:",
    "Honestly,",
    "My therapist says",
    "Update:",
    "Not to brag, but",
    "Thread:",
    "Quick reminder that",
    "Confession:",
    "Live footage of",
    "Sources confirm",
    "In this economy,",
    "Weird flex, but",
    "Plot summary:",
];

const BUILTIN_MIDDLES: [&str; 22] = [
    "my cat has started a podcast",
    "the office microwave is sentient",
    "I tried to parallel park for an hour",
    "the group chat voted me snack captain",
    "my houseplant filed a complaint",
    "I accidentally replied-all to the CEO",
    "the bus driver waved at me personally",
    "I am learning the accordion",
    "my toaster only works on weekends",
    "someone stole my lunch again",
    "I ran a marathon in my dreams",
    "my neighbor's dog outranks me",
    "I bought a boat on a whim",
    "the wifi went down during my speech",
    "I found my childhood diary",
    "pineapple belongs everywhere",
    "my smart fridge unfollowed me",
    "I taught my grandma to meme",
    "the elevator played my ringtone",
    "I got lost in IKEA for a day",
    "my alarm clock is on strike",
    "I won an argument with autocorrect",
];

const BUILTIN_ENDINGS: [&str; 22] = [
    "and that's the tea.",
    "#blessed",
    "send help.",
    "no further questions.",
    "anyway, hydrate.",
    "10/10 would do again.",
    "this is fine.",
    "#mood",
    "ratio me, I dare you.",
    "stay tuned.",
    "I regret nothing.",
    "living my best life.",
    "you heard it here first.",
    "that's all, goodnight.",
    "plot twist incoming.",
    "love that for me.",
    "big if true.",
    "we move.",
    "thoughts?",
    "manifesting it.",
    "that's the post.",
    "don't @ me.",
];
