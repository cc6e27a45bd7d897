//! Simulation tick
//!
//! Advances the game by one frame. Paddles move first, then the ball, then
//! collisions are resolved against the new ball position, then scoring.

use super::collision;
use super::scoring::{check_scoring, check_winner};
use super::state::{GameEvent, GamePhase, GameState};

/// Held keys for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Player paddle up
    pub up: bool,
    /// Player paddle down
    pub down: bool,
}

/// Advance the game state by one tick
///
/// Does nothing once a match has been won; the caller ends the win pause
/// with [`super::scoring::finish_match`].
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Playing {
        return events;
    }

    state.time_ticks += 1;

    let ball_y = state.ball.pos.y;
    state.left_paddle.steer(input, ball_y);
    state.right_paddle.steer(input, ball_y);

    state.ball.advance();

    let hit = collision::resolve(
        &mut state.ball,
        &state.left_paddle,
        &state.right_paddle,
        state.field.y,
    );
    if hit.wall {
        events.push(GameEvent::WallBounce);
    }
    if let Some(side) = hit.paddle {
        log::trace!("{} paddle hit, vel {:?}", side.as_str(), state.ball.vel);
        events.push(GameEvent::PaddleHit(side));
    }

    if let Some(scorer) = check_scoring(state) {
        log::debug!(
            "{} scores ({} - {})",
            scorer.as_str(),
            state.score.left,
            state.score.right
        );
        events.push(GameEvent::Scored(scorer));

        if let Some(winner) = check_winner(&state.score, state.winning_score) {
            state.phase = GamePhase::RoundWon { winner };
            events.push(GameEvent::MatchWon(winner));
        }
    }

    events
}
