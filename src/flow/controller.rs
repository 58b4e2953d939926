//! Phase controller: gates external triggers and relays signals.
//!
//! The controller sits between whatever produces button presses and the
//! `SessionState`. For each trigger it checks the session is in the phase
//! that trigger belongs to, calls the matching session operation, and
//! forwards any completion signal to its `Presenter`.
//!
//! It holds no game data. The composition root owns the one
//! `SessionState` and lends it to every trigger call.

use rustc_hash::FxHashSet;

use crate::core::{Phase, MIN_PLAYERS};
use crate::error::{FlowError, InputRejected};
use crate::session::{DealReport, RankedEntry, SessionSignal, SessionState, TurnOutcome};

/// Receiver of session signals, typically the presentation layer.
///
/// Signals carry no payload; implementations read whatever they need from
/// `session`.
pub trait Presenter {
    fn on_signal(&mut self, signal: SessionSignal, session: &SessionState);
}

/// A presenter that ignores every signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn on_signal(&mut self, _signal: SessionSignal, _session: &SessionState) {}
}

/// Collects signals in arrival order.
impl Presenter for Vec<SessionSignal> {
    fn on_signal(&mut self, signal: SessionSignal, _session: &SessionState) {
        self.push(signal);
    }
}

/// Stateless translation from triggers to session operations.
#[derive(Debug, Default)]
pub struct PhaseController<P> {
    presenter: P,
}

impl<P: Presenter> PhaseController<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Start a game from the setup form's name fields.
    ///
    /// Blank fields become `Player N` (1-based). The roster must fit the
    /// configured size range and have no repeated names. Rosters below
    /// `MIN_PLAYERS` are refused whatever the config says.
    pub fn start_game<S: AsRef<str>>(
        &mut self,
        session: &mut SessionState,
        inputs: &[S],
    ) -> Result<DealReport, FlowError> {
        expect_phase(session, Phase::Setup)?;

        let names = normalize_names(inputs);
        let min = session.config().min_players.max(MIN_PLAYERS);
        let max = session.config().max_players;
        if names.len() < min || names.len() > max {
            return Err(InputRejected::RosterSize {
                count: names.len(),
                min,
                max,
            }
            .into());
        }
        let mut seen = FxHashSet::default();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(InputRejected::DuplicateName(name.clone()).into());
            }
        }

        Ok(session.initialize_game(names))
    }

    /// Submit the compose box text for the current player.
    ///
    /// The configured placeholder prompt, submitted untouched, counts as
    /// blank.
    pub fn post_tweet(
        &mut self,
        session: &mut SessionState,
        text: &str,
    ) -> Result<TurnOutcome, FlowError> {
        expect_phase(session, Phase::Tweeting)?;

        let mut tweet = text.trim();
        if session.config().compose_placeholder.as_deref().map(str::trim) == Some(tweet) {
            tweet = "";
        }
        let outcome = session.submit_tweet(tweet)?;
        self.relay(outcome, session);
        Ok(outcome)
    }

    /// Move from Tweeting to Voting once every tweet is in.
    pub fn begin_voting(&mut self, session: &mut SessionState) -> Result<(), FlowError> {
        expect_phase(session, Phase::Tweeting)?;
        expect_exhausted(session)?;
        session.start_voting_phase();
        Ok(())
    }

    /// Vote for the tweet at roster position `target`.
    pub fn cast_vote(
        &mut self,
        session: &mut SessionState,
        target: usize,
    ) -> Result<TurnOutcome, FlowError> {
        expect_phase(session, Phase::Voting)?;
        let outcome = session.submit_vote(target)?;
        self.relay(outcome, session);
        Ok(outcome)
    }

    /// Move from Voting to Result once every vote is in.
    pub fn show_results(
        &mut self,
        session: &mut SessionState,
    ) -> Result<Vec<RankedEntry>, FlowError> {
        expect_phase(session, Phase::Voting)?;
        expect_exhausted(session)?;
        session.show_results();
        Ok(session.ranking())
    }

    /// Return to Setup.
    ///
    /// Normally pressed from Result; from any other phase it abandons the
    /// game in progress.
    pub fn restart(&mut self, session: &mut SessionState) {
        if session.phase() != Phase::Result {
            tracing::info!(phase = %session.phase(), "abandoning game in progress");
        }
        let signal = session.reset();
        self.presenter.on_signal(signal, session);
    }

    fn relay(&mut self, outcome: TurnOutcome, session: &SessionState) {
        if let Some(signal) = outcome.signal() {
            self.presenter.on_signal(signal, session);
        }
    }
}

/// Trim each name, substituting `Player N` for blanks.
#[must_use]
pub fn normalize_names<S: AsRef<str>>(inputs: &[S]) -> Vec<String> {
    inputs
        .iter()
        .enumerate()
        .map(|(i, input)| match input.as_ref().trim() {
            "" => format!("Player {}", i + 1),
            name => name.to_string(),
        })
        .collect()
}

fn expect_phase(session: &SessionState, expected: Phase) -> Result<(), FlowError> {
    let actual = session.phase();
    if actual == expected {
        Ok(())
    } else {
        tracing::error!(%expected, %actual, "trigger arrived in the wrong phase");
        Err(FlowError::PhaseMismatch { expected, actual })
    }
}

fn expect_exhausted(session: &SessionState) -> Result<(), FlowError> {
    if session.turns_exhausted() {
        Ok(())
    } else {
        Err(FlowError::TurnsOutstanding {
            phase: session.phase(),
        })
    }
}
