//! Card definitions - immutable tweet fragments.
//!
//! A `Card` is one fragment of a composition: an opening line, a middle
//! phrase, or an ending. Cards come from the static catalog and never
//! change after load.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card, e.g. `"opening_01"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Position a fragment takes in a composition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// How a tweet starts.
    Opening,
    /// The body of a tweet.
    Middle,
    /// How a tweet signs off.
    Ending,
}

impl Category {
    /// All categories in dealing order.
    pub const ALL: [Category; 3] = [Category::Opening, Category::Middle, Category::Ending];

    /// Dense index, used for per-category storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Category::Opening => 0,
            Category::Middle => 1,
            Category::Ending => 2,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Opening => "Opening",
            Category::Middle => "Middle",
            Category::Ending => "Ending",
        };
        f.write_str(name)
    }
}

/// An immutable content fragment.
///
/// ## Example
///
/// ```
/// use tweet_party::cards::{Card, Category};
///
/// let card = Card::new("opening_01", "Good morning,", Category::Opening);
/// assert_eq!(card.category, Category::Opening);
/// assert_eq!(card.id.as_str(), "opening_01");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier.
    pub id: CardId,

    /// Fragment text shown to players.
    pub text: String,

    /// Where this fragment belongs in a composition.
    pub category: Category,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, category: Category) -> Self {
        Self {
            id: CardId::new(id),
            text: text.into(),
            category,
        }
    }
}
