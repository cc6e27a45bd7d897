//! Points, match wins and resets

use super::state::{GamePhase, GameState, Score, Side};

/// Award a point if the ball has left the field
///
/// The ball must be entirely past the edge by its center, not just touching
/// it. Returns the side that scored.
pub fn check_scoring(state: &mut GameState) -> Option<Side> {
    let scorer = if state.ball.pos.x < 0.0 {
        Side::Right
    } else if state.ball.pos.x > state.width() {
        Side::Left
    } else {
        return None;
    };

    state.score.increment(scorer);
    state.ball.reset();
    Some(scorer)
}

/// Side that has reached the winning score, left checked first
pub fn check_winner(score: &Score, winning_score: u32) -> Option<Side> {
    if score.left >= winning_score {
        Some(Side::Left)
    } else if score.right >= winning_score {
        Some(Side::Right)
    } else {
        None
    }
}

/// Text shown while a match win is on screen
pub fn win_message(winner: Side) -> &'static str {
    match winner {
        Side::Left => "Left Player Won!",
        Side::Right => "Right Player Won!",
    }
}

/// Start the next match: ball and paddles home, scores zeroed
pub fn finish_match(state: &mut GameState) {
    state.ball.reset();
    state.left_paddle.reset();
    state.right_paddle.reset();
    state.score.reset();
    state.phase = GamePhase::Playing;
    state.matches_played += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use glam::Vec2;

    fn setup() -> GameState {
        GameState::new(&Settings::default())
    }

    #[test]
    fn test_right_scores_when_ball_exits_left() {
        let mut state = setup();
        state.ball.pos = Vec2::new(-1.0, 400.0);
        state.ball.vel = Vec2::new(-5.0, 3.0);

        assert_eq!(check_scoring(&mut state), Some(Side::Right));
        assert_eq!(state.score.right, 1);
        assert_eq!(state.score.left, 0);
        assert_eq!(state.ball.pos, Vec2::new(550.0, 400.0));
        assert_eq!(state.ball.vel, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_left_scores_when_ball_exits_right() {
        let mut state = setup();
        state.ball.pos = Vec2::new(1100.5, 20.0);

        assert_eq!(check_scoring(&mut state), Some(Side::Left));
        assert_eq!(state.score, Score { left: 1, right: 0 });
    }

    #[test]
    fn test_no_score_on_the_edge() {
        let mut state = setup();
        state.ball.pos = Vec2::new(0.0, 400.0);
        assert_eq!(check_scoring(&mut state), None);
        state.ball.pos = Vec2::new(1100.0, 400.0);
        assert_eq!(check_scoring(&mut state), None);
        assert_eq!(state.score, Score::new());
    }

    #[test]
    fn test_check_winner() {
        assert_eq!(check_winner(&Score { left: 14, right: 14 }, 15), None);
        assert_eq!(check_winner(&Score { left: 15, right: 3 }, 15), Some(Side::Left));
        assert_eq!(check_winner(&Score { left: 2, right: 16 }, 15), Some(Side::Right));
        assert_eq!(check_winner(&Score { left: 15, right: 15 }, 15), Some(Side::Left));
    }

    #[test]
    fn test_finish_match_resets_everything() {
        let mut state = setup();
        state.score = Score { left: 3, right: 15 };
        state.left_paddle.pos.y = 0.0;
        state.right_paddle.pos.y = 700.0;
        state.phase = GamePhase::RoundWon { winner: Side::Right };

        finish_match(&mut state);

        assert_eq!(state.score, Score::new());
        assert_eq!(state.left_paddle.pos, state.left_paddle.origin());
        assert_eq!(state.right_paddle.pos, state.right_paddle.origin());
        assert_eq!(state.ball.pos, state.ball.origin());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.matches_played, 1);
    }

    #[test]
    fn test_win_message() {
        assert_eq!(win_message(Side::Left), "Left Player Won!");
        assert_eq!(win_message(Side::Right), "Right Player Won!");
    }
}
