//! Game flow: trigger gating and the automatic driver.
//!
//! - `PhaseController`: checks each trigger against the current phase and
//!   relays completion signals to a `Presenter`
//! - `run_automatic`: plays a started game to the end without a UI

pub mod autoplay;
pub mod controller;

pub use autoplay::{compose_from_hand, run_automatic};
pub use controller::{normalize_names, NullPresenter, PhaseController, Presenter};
