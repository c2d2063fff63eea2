//! Observer trait for the presentation layer.
//!
//! Implement only the callbacks you render; every method has an empty
//! default. `on_event` sees every event, including the ones that also have a
//! dedicated callback.

use super::event::MatchEvent;
use crate::cards::CardInstance;
use crate::core::Side;
use crate::rules::RoundOutcome;

/// Receives match notifications. Observers read, they never drive the match.
pub trait MatchObserver {
    fn on_card_drawn(&mut self, _side: Side, _card: &CardInstance) {}

    fn on_round_resolved(
        &mut self,
        _player_card: Option<&CardInstance>,
        _opponent_card: Option<&CardInstance>,
        _outcome: RoundOutcome,
    ) {
    }

    fn on_score_changed(&mut self, _player_score: u32, _opponent_score: u32) {}

    fn on_timer_tick(&mut self, _remaining: f32) {}

    fn on_game_over(&mut self, _winner: Side) {}

    /// Called first for every event.
    fn on_event(&mut self, _event: &MatchEvent) {}
}

/// Route one event to an observer's callbacks.
pub fn notify(observer: &mut dyn MatchObserver, event: &MatchEvent) {
    observer.on_event(event);

    match event {
        MatchEvent::CardDrawn { side, card } => observer.on_card_drawn(*side, card),
        MatchEvent::RoundResolved {
            player_card,
            opponent_card,
            outcome,
        } => observer.on_round_resolved(player_card.as_ref(), opponent_card.as_ref(), *outcome),
        MatchEvent::ScoreChanged { player, opponent } => {
            observer.on_score_changed(*player, *opponent);
        }
        MatchEvent::TimerTick { remaining } => observer.on_timer_tick(*remaining),
        MatchEvent::GameOver { winner } => observer.on_game_over(*winner),
        _ => {}
    }
}
