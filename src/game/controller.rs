//! Match controller: the round state machine.
//!
//! The controller owns both decks and the `MatchState`. It moves only when
//! the host calls `submit_player_card` or `tick`, and every step keeps this
//! order: commit player card, commit opponent card, compare, score, reset.
//!
//! Presentation delays (`reveal_delay`, `reset_delay`) are timed phases
//! advanced by `tick`. With zero delays the whole chain from a submit to the
//! next player turn runs inside one call.

use im::Vector;

use super::phase::TurnPhase;
use super::state::MatchState;
use crate::cards::{Card, CardInstance};
use crate::core::{CardKey, GameRng, MatchConfig, Side, SideMap};
use crate::deck::Deck;
use crate::error::{DeckSignal, MatchResult};
use crate::events::{notify, MatchEvent, MatchObserver};
use crate::rules::{resolve_round, GameResult};
use crate::zones::Pile;

/// Clock slack absorbed when comparing accumulated frame times.
pub const TIME_EPSILON: f32 = 1e-4;

/// What `submit_player_card` did with the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    /// The card was committed and the turn ended.
    Accepted,
    /// Not the player's turn, or a card was already committed. Nothing changed.
    Ignored,
}

/// Serializable view of a match for display.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatchSnapshot {
    pub state: MatchState,
    /// The player's hand in display order.
    pub player_hand: Vec<CardInstance>,
    pub hand_sizes: SideMap<usize>,
    pub draw_pile_sizes: SideMap<usize>,
}

/// Builder for creating a `MatchController`.
///
/// ## Example
///
/// ```
/// use elemental_clash::core::MatchConfig;
/// use elemental_clash::game::{MatchBuilder, TurnPhase};
///
/// let game = MatchBuilder::new()
///     .config(MatchConfig::default().instant())
///     .build(42)
///     .unwrap();
///
/// assert_eq!(game.phase(), TurnPhase::PlayerTurn);
/// assert_eq!(game.round(), 1);
/// assert_eq!(game.player_hand().len(), 3);
/// ```
#[derive(Default)]
pub struct MatchBuilder {
    config: MatchConfig,
    decks: SideMap<Option<Vec<Card>>>,
    observers: Vec<Box<dyn MatchObserver>>,
}

impl MatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Give one side its own starting cards instead of the starter table.
    #[must_use]
    pub fn deck(mut self, side: Side, cards: Vec<Card>) -> Self {
        self.decks[side] = Some(cards);
        self
    }

    /// Subscribe an observer before the first draw.
    #[must_use]
    pub fn observer(mut self, observer: Box<dyn MatchObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Validate the configuration, build both decks and start round 1.
    pub fn build(self, seed: u64) -> MatchResult<MatchController> {
        self.config.validate()?;
        for cards in self.decks.iter().filter_map(|(_, cards)| cards.as_ref()) {
            for card in cards {
                Card::new(card.element(), card.power())?;
            }
        }

        let rng = GameRng::new(seed);
        let decks = SideMap::new(|side| Deck::new(side, rng.for_context(deck_context(side))));

        let mut controller = MatchController {
            state: MatchState::new(self.config.winning_score, self.config.turn_duration),
            config: self.config,
            seed,
            decks,
            history: Vector::new(),
            observers: self.observers,
        };
        controller.start(&self.decks);
        Ok(controller)
    }
}

fn deck_context(side: Side) -> &'static str {
    match side {
        Side::Player => "player-deck",
        Side::Opponent => "opponent-deck",
    }
}

/// Owns both decks and drives the rounds of one match.
pub struct MatchController {
    config: MatchConfig,
    seed: u64,
    decks: SideMap<Deck>,
    state: MatchState,
    history: Vector<MatchEvent>,
    observers: Vec<Box<dyn MatchObserver>>,
}

impl MatchController {
    /// Start a match with the starter deck on both sides.
    pub fn new(config: MatchConfig, seed: u64) -> MatchResult<Self> {
        MatchBuilder::new().config(config).build(seed)
    }

    // === Input ===

    /// Commit the player's card for this turn.
    ///
    /// Outside the player turn, or after a card was already committed this
    /// turn, the call is ignored. A key that is not in the player's hand is
    /// an error and leaves the match untouched.
    pub fn submit_player_card(&mut self, key: CardKey) -> MatchResult<Submission> {
        if self.state.phase != TurnPhase::PlayerTurn || self.state.submitted {
            return Ok(Submission::Ignored);
        }

        let card = self.decks[Side::Player].play_card(key)?;
        self.state.submitted = true;
        self.commit(Side::Player, card);
        self.end_player_turn();
        Ok(Submission::Accepted)
    }

    /// Advance timed phases by `delta` seconds.
    ///
    /// Non-positive or non-finite deltas are ignored. Time left over after a
    /// phase completes is not carried into the next phase.
    pub fn tick(&mut self, delta: f32) {
        if !(delta.is_finite() && delta > 0.0) || !self.state.phase.is_timed() {
            return;
        }

        match self.state.phase {
            TurnPhase::PlayerTurn => {
                if self.state.submitted {
                    return;
                }
                self.state.remaining_time = (self.state.remaining_time - delta).max(0.0);
                self.emit(MatchEvent::TimerTick {
                    remaining: self.state.remaining_time,
                });
                if self.state.remaining_time <= TIME_EPSILON {
                    self.state.remaining_time = 0.0;
                    self.emit(MatchEvent::TurnTimedOut);
                    self.end_player_turn();
                }
            }
            TurnPhase::Resolving => {
                self.state.phase_elapsed += delta;
                if self.state.phase_elapsed + TIME_EPSILON >= self.config.reveal_delay {
                    self.resolve();
                }
            }
            TurnPhase::RoundReset => {
                self.state.phase_elapsed += delta;
                if self.state.phase_elapsed + TIME_EPSILON >= self.config.reset_delay {
                    self.finish_reset();
                }
            }
            _ => {}
        }
    }

    /// Register an observer for all later events.
    pub fn subscribe(&mut self, observer: Box<dyn MatchObserver>) {
        self.observers.push(observer);
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.state.phase
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.state.round
    }

    #[must_use]
    pub fn score(&self, side: Side) -> u32 {
        self.state.score(side)
    }

    /// (player, opponent)
    #[must_use]
    pub fn scores(&self) -> (u32, u32) {
        (self.state.player_score(), self.state.opponent_score())
    }

    #[must_use]
    pub fn remaining_time(&self) -> f32 {
        self.state.remaining_time
    }

    /// The card a side has in the center this round.
    #[must_use]
    pub fn active_card(&self, side: Side) -> Option<CardInstance> {
        self.state.active_cards[side]
    }

    #[must_use]
    pub fn deck(&self, side: Side) -> &Deck {
        &self.decks[side]
    }

    /// Cards the player can submit right now.
    #[must_use]
    pub fn player_hand(&self) -> Vec<CardInstance> {
        self.decks[Side::Player].hand()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.state.result()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.phase.is_terminal()
    }

    /// Neither side has a card left to draw or play, so every further round
    /// is a draw. The match itself keeps going.
    #[must_use]
    pub fn is_starved(&self) -> bool {
        self.decks.iter().all(|(_, deck)| deck.is_spent())
    }

    /// Recent events, oldest first.
    ///
    /// Holds at most `history_limit` events. Timer ticks go to observers
    /// only and never enter the journal.
    #[must_use]
    pub fn history(&self) -> &Vector<MatchEvent> {
        &self.history
    }

    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            state: self.state.clone(),
            player_hand: self.player_hand(),
            hand_sizes: SideMap::new(|side| self.decks[side].pile_size(Pile::Hand)),
            draw_pile_sizes: SideMap::new(|side| self.decks[side].pile_size(Pile::DrawPile)),
        }
    }

    // === State machine ===

    fn start(&mut self, decks: &SideMap<Option<Vec<Card>>>) {
        for side in Side::ALL {
            let starter = decks[side].as_deref().unwrap_or(self.config.starter_deck.as_slice());
            self.decks[side].initialize(starter);
        }
        self.emit(MatchEvent::MatchStarted { seed: self.seed });
        self.start_player_turn();
    }

    fn start_player_turn(&mut self) {
        self.state.round += 1;
        self.state.submitted = false;
        self.state.remaining_time = self.config.turn_duration;
        self.state.phase_elapsed = 0.0;
        self.set_phase(TurnPhase::PlayerTurn);
        self.emit(MatchEvent::RoundStarted {
            round: self.state.round,
        });

        for side in Side::ALL {
            let report = self.decks[side].draw_cards(self.config.draw_per_turn);
            for card in report.drawn.iter().copied() {
                self.emit(MatchEvent::CardDrawn { side, card });
            }
            for signal in report.signals() {
                self.emit(MatchEvent::Signal(signal));
            }
        }
    }

    fn end_player_turn(&mut self) {
        self.set_phase(TurnPhase::OpponentTurn);
        self.opponent_turn();
    }

    fn opponent_turn(&mut self) {
        match self.decks[Side::Opponent].play_random_card() {
            Ok(card) => self.commit(Side::Opponent, card),
            Err(signal) => {
                self.emit(MatchEvent::Signal(signal));
                self.emit(MatchEvent::Signal(DeckSignal::OpponentSelectionFailed));
            }
        }

        self.state.phase_elapsed = 0.0;
        self.set_phase(TurnPhase::Resolving);
        if self.config.reveal_delay <= TIME_EPSILON {
            self.resolve();
        }
    }

    fn commit(&mut self, side: Side, card: CardInstance) {
        self.state.active_cards[side] = Some(card);
        self.emit(MatchEvent::CardCommitted { side, card });
    }

    fn resolve(&mut self) {
        debug_assert_eq!(self.state.phase, TurnPhase::Resolving);

        let player_card = self.state.active_cards[Side::Player];
        let opponent_card = self.state.active_cards[Side::Opponent];
        let outcome = resolve_round(
            player_card.as_ref().map(|c| &c.card),
            opponent_card.as_ref().map(|c| &c.card),
            self.config.timeout_policy,
        );

        if let Some(winner) = outcome.winner() {
            self.state.scores[winner] += 1;
        }
        self.state.last_outcome = Some(outcome);

        self.emit(MatchEvent::RoundResolved {
            player_card,
            opponent_card,
            outcome,
        });
        self.emit(MatchEvent::ScoreChanged {
            player: self.state.player_score(),
            opponent: self.state.opponent_score(),
        });

        if let Some(winner) = self.state.leader() {
            self.set_phase(TurnPhase::GameOver);
            self.emit(MatchEvent::GameOver { winner });
            return;
        }

        self.state.phase_elapsed = 0.0;
        self.set_phase(TurnPhase::RoundReset);
        if self.config.reset_delay <= TIME_EPSILON {
            self.finish_reset();
        }
    }

    fn finish_reset(&mut self) {
        // Played cards stay in their decks' discard piles
        self.state.active_cards = SideMap::with_value(None);
        self.state.last_outcome = None;
        self.emit(MatchEvent::RoundCleared);
        self.start_player_turn();
    }

    fn set_phase(&mut self, to: TurnPhase) {
        let from = self.state.phase;
        if from == to {
            return;
        }
        self.state.phase = to;
        self.emit(MatchEvent::PhaseChanged { from, to });
    }

    fn emit(&mut self, event: MatchEvent) {
        for observer in &mut self.observers {
            notify(observer.as_mut(), &event);
        }

        // Per-frame clock updates stay out of the journal
        if matches!(event, MatchEvent::TimerTick { .. }) {
            return;
        }
        self.history.push_back(event);
        while self.history.len() > self.config.history_limit {
            self.history.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Element;
    use crate::core::TimeoutPolicy;
    use crate::rules::RoundOutcome;

    fn card(element: Element, power: u8) -> Card {
        Card::new(element, power).unwrap()
    }

    fn instant() -> MatchConfig {
        MatchConfig::default().instant()
    }

    #[test]
    fn test_match_start() {
        let game = MatchController::new(MatchConfig::default(), 42).unwrap();

        assert_eq!(game.phase(), TurnPhase::PlayerTurn);
        assert_eq!(game.round(), 1);
        assert_eq!(game.scores(), (0, 0));
        assert_eq!(game.remaining_time(), 15.0);
        for side in Side::ALL {
            assert_eq!(game.deck(side).hand().len(), 3);
            assert_eq!(game.deck(side).draw_pile().len(), 3);
        }
        assert!(matches!(
            game.history().front(),
            Some(MatchEvent::MatchStarted { seed: 42 })
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = MatchController::new(MatchConfig::default().with_winning_score(0), 1);
        assert!(result.is_err());
    }

    #[test]
    fn test_submit_with_delays_waits_in_resolving() {
        let mut game = MatchController::new(MatchConfig::default(), 42).unwrap();
        let key = game.player_hand()[0].key;

        assert_eq!(game.submit_player_card(key).unwrap(), Submission::Accepted);

        assert_eq!(game.phase(), TurnPhase::Resolving);
        assert_eq!(game.active_card(Side::Player).map(|c| c.key), Some(key));
        assert!(game.active_card(Side::Opponent).is_some());
        assert_eq!(game.state().last_outcome, None);

        game.tick(0.5);
        assert_eq!(game.phase(), TurnPhase::Resolving);

        game.tick(0.5);
        assert_eq!(game.phase(), TurnPhase::RoundReset);
        assert!(game.state().last_outcome.is_some());

        game.tick(2.0);
        assert_eq!(game.phase(), TurnPhase::PlayerTurn);
        assert_eq!(game.round(), 2);
        assert!(game.active_card(Side::Player).is_none());
        assert!(game.active_card(Side::Opponent).is_none());
        assert_eq!(game.state().last_outcome, None);
    }

    #[test]
    fn test_played_cards_are_discarded() {
        let mut game = MatchController::new(instant(), 7).unwrap();
        let key = game.player_hand()[1].key;

        game.submit_player_card(key).unwrap();

        assert_eq!(game.deck(Side::Player).discarded().len(), 1);
        assert_eq!(game.deck(Side::Opponent).discarded().len(), 1);
        assert_eq!(game.deck(Side::Player).discarded()[0].key, key);
    }

    #[test]
    fn test_submit_unknown_card_is_error() {
        let mut game = MatchController::new(instant(), 7).unwrap();
        let foreign = game.deck(Side::Opponent).hand()[0].key;
        let before = game.state().clone();

        assert!(game.submit_player_card(foreign).is_err());
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_tick_ignores_bad_deltas() {
        let mut game = MatchController::new(MatchConfig::default(), 7).unwrap();
        game.tick(0.0);
        game.tick(-3.0);
        game.tick(f32::NAN);
        assert_eq!(game.remaining_time(), 15.0);
    }

    #[test]
    fn test_timer_ticks_not_journalled() {
        let mut game = MatchController::new(MatchConfig::default(), 7).unwrap();
        let before = game.history().len();

        for _ in 0..60 {
            game.tick(0.1);
        }

        assert_eq!(game.history().len(), before);
        assert!((game.remaining_time() - 9.0).abs() < 1e-3);
    }

    #[test]
    fn test_timeout_policy_draw() {
        let mut game = MatchBuilder::new()
            .config(instant().with_timeout_policy(TimeoutPolicy::Draw))
            .build(3)
            .unwrap();

        game.tick(15.0);

        assert_eq!(game.scores(), (0, 0));
        assert!(game.history().iter().any(|e| matches!(
            e,
            MatchEvent::RoundResolved { player_card: None, outcome: RoundOutcome::Draw, .. }
        )));
    }

    #[test]
    fn test_custom_decks() {
        let game = MatchBuilder::new()
            .config(instant())
            .deck(Side::Player, vec![card(Element::Fire, 9)])
            .build(1)
            .unwrap();

        assert_eq!(game.deck(Side::Player).total_cards(), 1);
        assert_eq!(game.deck(Side::Opponent).total_cards(), 6);
    }

    #[test]
    fn test_snapshot() {
        let game = MatchController::new(instant(), 11).unwrap();
        let snapshot = game.snapshot();

        assert_eq!(snapshot.player_hand.len(), 3);
        assert_eq!(snapshot.hand_sizes[Side::Opponent], 3);
        assert_eq!(snapshot.draw_pile_sizes[Side::Player], 3);

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: MatchSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, snapshot);
    }
}
