//! The session orchestrator.
//!
//! `SessionState` owns the roster, the deck, the active phase and the turn
//! cursor. It is the only thing that mutates players or the deck.
//!
//! ## Turn cursor
//!
//! The cursor indexes the roster. Tweeting and voting both walk it from 0
//! to `player_count`; a cursor equal to `player_count` means the phase's
//! turns are exhausted and no further tweet or vote is accepted.
//!
//! ## Phase gating
//!
//! The session records the phase but does not check it before acting.
//! `PhaseController` owns that check.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ranking::{rank_players, RankedEntry};
use super::signal::{SessionSignal, TurnOutcome};
use crate::cards::{CardCatalog, Deck, Shortfall};
use crate::core::{GameRng, Phase, PlayerRecord, SessionConfig};
use crate::error::InputRejected;

/// What one player received when hands were dealt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDeal {
    pub player_index: usize,
    pub cards_dealt: usize,
    pub shortfalls: SmallVec<[Shortfall; 2]>,
}

/// Outcome of dealing every hand at game start.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealReport {
    pub players: Vec<PlayerDeal>,
}

impl DealReport {
    /// Whether any player got a short hand.
    #[must_use]
    pub fn has_shortfall(&self) -> bool {
        self.players.iter().any(|p| !p.shortfalls.is_empty())
    }

    /// Total cards that could not be dealt.
    #[must_use]
    pub fn missing_cards(&self) -> usize {
        self.players
            .iter()
            .flat_map(|p| p.shortfalls.iter())
            .map(|s| s.missing)
            .sum()
    }
}

/// A single game session.
#[derive(Clone, Debug)]
pub struct SessionState {
    config: SessionConfig,
    players: Vec<PlayerRecord>,
    deck: Deck,
    phase: Phase,
    cursor: usize,
}

impl SessionState {
    /// Load the catalog into a freshly shuffled deck. The session starts in
    /// Setup with an empty roster.
    #[must_use]
    pub fn new(catalog: &CardCatalog, config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        tracing::info!(seed = rng.seed(), cards = catalog.len(), "session created");

        let mut deck = Deck::new(catalog, rng.for_context("deck"));
        deck.shuffle();

        Self {
            config,
            players: Vec::new(),
            deck,
            phase: Phase::Setup,
            cursor: 0,
        }
    }

    // === Lifecycle ===

    /// Build the roster in the given order, deal every hand, and enter
    /// Tweeting with the cursor on the first player.
    ///
    /// `names` are expected to be distinct; `PhaseController::start_game`
    /// checks that before calling in.
    pub fn initialize_game<I, S>(&mut self, names: I) -> DealReport
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players = names.into_iter().map(PlayerRecord::new).collect();
        self.cursor = 0;

        let layout = self.config.hand;
        let mut report = DealReport::default();
        for (index, player) in self.players.iter_mut().enumerate() {
            let hand = self.deck.deal_hand(&layout);
            for shortfall in &hand.shortfalls {
                match shortfall.category {
                    Some(category) => tracing::warn!(
                        player = %player.name(),
                        %category,
                        missing = shortfall.missing,
                        "deck ran out of category while dealing"
                    ),
                    None => tracing::warn!(
                        player = %player.name(),
                        missing = shortfall.missing,
                        "deck ran out of extra cards while dealing"
                    ),
                }
            }

            let cards_dealt = hand.len();
            for card in hand.categorized {
                player.add_card(card);
            }
            for card in hand.extras {
                player.add_extra(card);
            }
            report.players.push(PlayerDeal {
                player_index: index,
                cards_dealt,
                shortfalls: hand.shortfalls,
            });
        }

        self.enter(Phase::Tweeting);
        tracing::info!(
            players = self.players.len(),
            deck_remaining = self.deck.len(),
            "game initialized"
        );
        report
    }

    /// Store a tweet for the current player and move the cursor on.
    ///
    /// Returns `PhaseComplete(TweetingComplete)` for the submission that
    /// exhausts the roster. The phase itself does not change.
    pub fn submit_tweet(&mut self, text: &str) -> Result<TurnOutcome, InputRejected> {
        let index = self.active_index()?;
        if text.trim().is_empty() {
            tracing::debug!(player = %self.players[index].name(), "blank tweet rejected");
            return Err(InputRejected::BlankComposition);
        }

        let player = &mut self.players[index];
        player.submit_composition(text);
        tracing::info!(player = %player.name(), tweet = %text, "tweet submitted");

        Ok(self.advance(SessionSignal::TweetingComplete))
    }

    /// Reset the cursor for voting and enter the Voting phase. Scores,
    /// hands and roster are untouched.
    pub fn start_voting_phase(&mut self) {
        self.cursor = 0;
        self.enter(Phase::Voting);
        tracing::info!(players = self.players.len(), "voting started");
    }

    /// Cast the current player's vote for `target`.
    ///
    /// Returns `PhaseComplete(VotingComplete)` for the vote that exhausts
    /// the roster.
    pub fn submit_vote(&mut self, target: usize) -> Result<TurnOutcome, InputRejected> {
        let voter = self.active_index()?;
        if target == voter {
            return Err(InputRejected::SelfVote { voter });
        }
        if target >= self.players.len() {
            return Err(InputRejected::TargetOutOfRange {
                target,
                player_count: self.players.len(),
            });
        }
        if self.players[voter].has_voted() {
            return Err(InputRejected::AlreadyVoted { voter });
        }

        let target_name = self.players[target].name().to_string();
        self.players[voter].record_vote(target_name.as_str());
        self.players[target].add_score(1);
        tracing::info!(
            voter = %self.players[voter].name(),
            target = %target_name,
            score = self.players[target].score(),
            "vote cast"
        );

        Ok(self.advance(SessionSignal::VotingComplete))
    }

    /// Enter the Result phase.
    pub fn show_results(&mut self) {
        self.enter(Phase::Result);
        for entry in self.ranking() {
            tracing::info!(rank = entry.rank, player = %entry.name, score = entry.score, "final standing");
        }
    }

    /// Drop the roster, rebuild and reshuffle the deck, and return to Setup.
    pub fn reset(&mut self) -> SessionSignal {
        self.players.clear();
        self.cursor = 0;
        self.deck.reset();
        self.enter(Phase::Setup);
        tracing::info!(deck = self.deck.len(), "session reset");
        SessionSignal::GameReset
    }

    // === Accessors ===

    /// The player whose action is expected next.
    #[must_use]
    pub fn current_player(&self) -> Option<&PlayerRecord> {
        self.players.get(self.cursor)
    }

    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.cursor
    }

    /// Every player, in roster order.
    #[must_use]
    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether every player has acted in the current phase.
    #[must_use]
    pub fn turns_exhausted(&self) -> bool {
        self.cursor >= self.players.len()
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Tweets the current voter may choose from: everyone else's, without
    /// author names.
    pub fn votable_entries(&self) -> impl Iterator<Item = (usize, Option<&str>)> + '_ {
        let voter = self.cursor;
        self.players
            .iter()
            .enumerate()
            .filter(move |&(i, _)| i != voter)
            .map(|(i, p)| (i, p.composition()))
    }

    /// Standings with competition ranks.
    #[must_use]
    pub fn ranking(&self) -> Vec<RankedEntry> {
        rank_players(&self.players)
    }

    /// The earliest player in roster order holding the top score.
    #[must_use]
    pub fn winner(&self) -> Option<&PlayerRecord> {
        let mut best: Option<&PlayerRecord> = None;
        for player in &self.players {
            if best.map_or(true, |b| player.score() > b.score()) {
                best = Some(player);
            }
        }
        best
    }

    // === Internals ===

    fn active_index(&self) -> Result<usize, InputRejected> {
        if self.turns_exhausted() {
            Err(InputRejected::TurnsExhausted)
        } else {
            Ok(self.cursor)
        }
    }

    fn enter(&mut self, next: Phase) {
        if self.phase != next && !self.phase.can_transition_to(next) {
            tracing::debug!(from = %self.phase, to = %next, "phase change outside the usual cycle");
        }
        self.phase = next;
    }

    fn advance(&mut self, on_complete: SessionSignal) -> TurnOutcome {
        self.cursor += 1;
        if self.turns_exhausted() {
            tracing::info!(signal = %on_complete, "all players have acted");
            TurnOutcome::PhaseComplete(on_complete)
        } else {
            tracing::debug!(next = %self.players[self.cursor].name(), "next turn");
            TurnOutcome::Next(self.cursor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Category;

    fn session(seed: u64) -> SessionState {
        SessionState::new(&CardCatalog::builtin(), SessionConfig::default().with_seed(seed))
    }

    fn tweeted(names: &[&str]) -> SessionState {
        let mut s = session(42);
        s.initialize_game(names.iter().copied());
        for name in names {
            s.submit_tweet(&format!("{} says hi", name)).unwrap();
        }
        s.start_voting_phase();
        s
    }

    #[test]
    fn test_new_session_is_setup() {
        let s = session(1);
        assert_eq!(s.phase(), Phase::Setup);
        assert_eq!(s.player_count(), 0);
        assert!(s.current_player().is_none());
        assert_eq!(s.deck().len(), 66);
    }

    #[test]
    fn test_initialize_preserves_order_and_deals() {
        let mut s = session(1);
        let report = s.initialize_game(["Ada", "Grace", "Linus"]);

        assert_eq!(s.phase(), Phase::Tweeting);
        assert_eq!(s.current_player_index(), 0);
        let names: Vec<_> = s.players().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Ada", "Grace", "Linus"]);
        assert!(!report.has_shortfall());
        for player in s.players() {
            assert_eq!(player.hand().len(), 8);
            assert_eq!(player.score(), 0);
            for category in Category::ALL {
                assert_eq!(player.cards_in(category).count(), 2);
            }
            assert_eq!(player.extras().count(), 2);
        }
        assert_eq!(s.deck().len(), 66 - 24);
    }

    #[test]
    fn test_initialize_replaces_roster() {
        let mut s = session(1);
        s.initialize_game(["A", "B", "C", "D"]);
        s.reset();
        s.initialize_game(["X", "Y", "Z"]);
        assert_eq!(s.player_count(), 3);
        assert_eq!(s.players()[0].name(), "X");
    }

    #[test]
    fn test_blank_tweet_rejected() {
        let mut s = session(1);
        s.initialize_game(["A", "B", "C"]);

        assert_eq!(s.submit_tweet(""), Err(InputRejected::BlankComposition));
        assert_eq!(s.submit_tweet("   \n\t"), Err(InputRejected::BlankComposition));
        assert_eq!(s.current_player_index(), 0);
        assert_eq!(s.players()[0].composition(), None);

        assert_eq!(s.submit_tweet("hello"), Ok(TurnOutcome::Next(1)));
        assert_eq!(s.players()[0].composition(), Some("hello"));
    }

    #[test]
    fn test_tweeting_complete_fires_once() {
        let mut s = session(1);
        s.initialize_game(["A", "B", "C"]);

        let outcomes: Vec<_> = ["one", "two", "three"]
            .iter()
            .map(|t| s.submit_tweet(t).unwrap())
            .collect();
        let signals: Vec<_> = outcomes.iter().filter_map(|o| o.signal()).collect();

        assert_eq!(signals, vec![SessionSignal::TweetingComplete]);
        assert_eq!(outcomes[2], TurnOutcome::PhaseComplete(SessionSignal::TweetingComplete));
        assert_eq!(s.current_player_index(), 3);
        assert!(s.current_player().is_none());
        assert_eq!(s.phase(), Phase::Tweeting);

        assert_eq!(s.submit_tweet("four"), Err(InputRejected::TurnsExhausted));
        assert_eq!(s.current_player_index(), 3);
    }

    #[test]
    fn test_self_vote_rejected() {
        let mut s = tweeted(&["A", "B", "C"]);
        assert_eq!(s.submit_vote(0), Err(InputRejected::SelfVote { voter: 0 }));
        assert_eq!(s.current_player_index(), 0);
        assert!(s.players().iter().all(|p| p.score() == 0));
    }

    #[test]
    fn test_out_of_range_vote_rejected() {
        let mut s = tweeted(&["A", "B", "C"]);
        assert_eq!(
            s.submit_vote(3),
            Err(InputRejected::TargetOutOfRange { target: 3, player_count: 3 })
        );
        assert_eq!(s.current_player_index(), 0);
        assert!(!s.players()[0].has_voted());
    }

    #[test]
    fn test_scenario_scores_and_ranking() {
        let mut s = tweeted(&["A", "B", "C"]);
        assert_eq!(s.submit_vote(2), Ok(TurnOutcome::Next(1)));
        assert_eq!(s.submit_vote(2), Ok(TurnOutcome::Next(2)));
        assert_eq!(
            s.submit_vote(0),
            Ok(TurnOutcome::PhaseComplete(SessionSignal::VotingComplete))
        );

        let scores: Vec<_> = s.players().iter().map(|p| p.score()).collect();
        assert_eq!(scores, vec![1, 0, 2]);
        assert_eq!(s.players()[0].outbound_votes(), ["C".to_string()]);

        let ranking: Vec<_> = s.ranking().into_iter().map(|e| (e.rank, e.name)).collect();
        assert_eq!(
            ranking,
            vec![(1, "C".to_string()), (2, "A".to_string()), (3, "B".to_string())]
        );
        assert_eq!(s.winner().map(|p| p.name()), Some("C"));
    }

    #[test]
    fn test_vote_twice_rejected_after_restart_of_voting() {
        let mut s = tweeted(&["A", "B", "C"]);
        s.submit_vote(1).unwrap();
        s.start_voting_phase();

        assert_eq!(s.submit_vote(2), Err(InputRejected::AlreadyVoted { voter: 0 }));
        assert_eq!(s.players()[2].score(), 0);
        assert_eq!(s.players()[1].score(), 1);
    }

    #[test]
    fn test_start_voting_keeps_scores() {
        let mut s = tweeted(&["A", "B", "C"]);
        s.submit_vote(1).unwrap();
        s.start_voting_phase();
        assert_eq!(s.current_player_index(), 0);
        assert_eq!(s.players()[1].score(), 1);
        assert_eq!(s.phase(), Phase::Voting);
    }

    #[test]
    fn test_votable_entries_exclude_voter() {
        let mut s = tweeted(&["A", "B", "C"]);
        s.submit_vote(2).unwrap();

        let entries: Vec<_> = s.votable_entries().collect();
        assert_eq!(entries, vec![(0, Some("A says hi")), (2, Some("C says hi"))]);
    }

    #[test]
    fn test_winner_prefers_roster_order() {
        let mut s = tweeted(&["A", "B", "C"]);
        s.submit_vote(1).unwrap();
        s.submit_vote(0).unwrap();
        s.submit_vote(1).unwrap();
        assert_eq!(s.winner().map(|p| p.name()), Some("B"));

        let mut tie = tweeted(&["A", "B", "C"]);
        tie.submit_vote(1).unwrap();
        tie.submit_vote(2).unwrap();
        tie.submit_vote(0).unwrap();
        assert_eq!(tie.winner().map(|p| p.name()), Some("A"));
    }

    #[test]
    fn test_show_results_and_reset() {
        let mut s = tweeted(&["A", "B", "C"]);
        for target in [1, 2, 0] {
            s.submit_vote(target).unwrap();
        }
        s.show_results();
        assert_eq!(s.phase(), Phase::Result);

        assert_eq!(s.reset(), SessionSignal::GameReset);
        assert_eq!(s.phase(), Phase::Setup);
        assert_eq!(s.player_count(), 0);
        assert_eq!(s.current_player_index(), 0);
        assert_eq!(s.deck().len(), 66);
    }

    #[test]
    fn test_deal_report_counts_shortfall() {
        let catalog = CardCatalog::from_cards(vec![
            crate::cards::Card::new("o1", "a", Category::Opening),
            crate::cards::Card::new("m1", "b", Category::Middle),
            crate::cards::Card::new("e1", "c", Category::Ending),
        ])
        .unwrap();
        let mut s = SessionState::new(&catalog, SessionConfig::default().with_seed(3));

        let report = s.initialize_game(["A", "B"]);
        assert!(report.has_shortfall());
        assert_eq!(report.players[0].cards_dealt, 3);
        assert_eq!(report.players[1].cards_dealt, 0);
        // A: 3 categories short 1 each, extras short 2. B: short everything.
        assert_eq!(report.missing_cards(), 5 + 8);
        assert_eq!(s.phase(), Phase::Tweeting);
    }
}
