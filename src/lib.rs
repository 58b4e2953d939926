//! # tweet-party
//!
//! Session engine for a party card game: players are dealt fragment cards,
//! compose a "tweet" from them, then vote for each other's tweets.
//!
//! ## Design Principles
//!
//! 1. **One explicit session**: A single `SessionState`, owned by the
//!    caller, holds the roster, deck, phase and turn cursor. Nothing is
//!    global.
//!
//! 2. **Deterministic dealing**: The deck shuffles with a seeded ChaCha8
//!    RNG, so a fixed seed reproduces every hand.
//!
//! 3. **Typed rejections**: Bad player input returns `InputRejected` and
//!    leaves state untouched. No player-input path panics.
//!
//! ## Flow
//!
//! ```
//! use tweet_party::{CardCatalog, PhaseController, SessionConfig, SessionState, SessionSignal};
//!
//! let mut session = SessionState::new(&CardCatalog::builtin(), SessionConfig::default().with_seed(7));
//! let mut controller = PhaseController::new(Vec::<SessionSignal>::new());
//!
//! controller.start_game(&mut session, &["Ada", "Grace", "Linus"]).unwrap();
//! for tweet in ["hello", "hi", "hey"] {
//!     controller.post_tweet(&mut session, tweet).unwrap();
//! }
//! controller.begin_voting(&mut session).unwrap();
//! for target in [2, 2, 0] {
//!     controller.cast_vote(&mut session, target).unwrap();
//! }
//! let ranking = controller.show_results(&mut session).unwrap();
//! assert_eq!(ranking[0].name, "Linus");
//! ```
//!
//! ## Modules
//!
//! - `core`: Players, phases, RNG, configuration
//! - `cards`: Card definitions, catalog, deck and dealing
//! - `session`: The orchestrator, signals and ranking
//! - `flow`: Phase controller and automatic play
//! - `error`: Rejection and failure types

pub mod cards;
pub mod core;
pub mod error;
pub mod flow;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameRng, HandLayout, Phase, PlayerRecord, SessionConfig};

pub use crate::cards::{Card, CardCatalog, CardId, Category, DealtHand, Deck, Shortfall};

pub use crate::session::{
    DealReport, PlayerDeal, RankedEntry, SessionSignal, SessionState, TurnOutcome,
};

pub use crate::flow::{run_automatic, NullPresenter, PhaseController, Presenter};

pub use crate::error::{CatalogError, ConfigError, FlowError, InputRejected};
