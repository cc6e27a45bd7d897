//! Game state and core simulation types
//!
//! Positions are in field pixels with the origin at the top-left corner and
//! y growing downward. Paddle positions name their top-left corner; the ball
//! position names its center.
//!
//! All lengths are assumed finite and non-negative (see
//! [`Settings::validate`]); nothing here checks them at runtime.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::tick::TickInput;
use crate::settings::Settings;

/// Which half of the field something belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Vertical paddle movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Movement policy of a paddle, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleControl {
    /// Follows the held up/down keys
    Player,
    /// Greedily tracks the ball's height, one step per tick
    Ai,
}

/// A paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
    /// Distance moved per step
    pub velocity: f32,
    pub side: Side,
    pub control: PaddleControl,
    origin: Vec2,
    field_height: f32,
}

impl Paddle {
    pub fn new(
        side: Side,
        control: PaddleControl,
        origin: Vec2,
        size: Vec2,
        velocity: f32,
        field_height: f32,
    ) -> Self {
        Self {
            pos: origin,
            size,
            velocity,
            side,
            control,
            origin,
            field_height,
        }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Vertical center
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Creation position, restored by [`Paddle::reset`]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Move one step, then clamp into the field
    pub fn move_dir(&mut self, dir: Direction) {
        match dir {
            Direction::Up => self.pos.y -= self.velocity,
            Direction::Down => self.pos.y += self.velocity,
        }
        self.pos.y = self.pos.y.min(self.field_height - self.size.y).max(0.0);
    }

    /// Step toward the ball's height; stays put when already centered on it
    pub fn ai_move(&mut self, ball_y: f32) {
        let center = self.center_y();
        if center < ball_y {
            self.move_dir(Direction::Down);
        } else if center > ball_y {
            self.move_dir(Direction::Up);
        }
    }

    /// Whether a full step in `dir` stays inside the field
    ///
    /// Checked before player moves so a key held against a wall does not
    /// nudge the paddle into the clamp every tick.
    pub fn can_step(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.pos.y - self.velocity >= 0.0,
            Direction::Down => self.pos.y + self.velocity + self.size.y <= self.field_height,
        }
    }

    /// Apply this paddle's movement policy for one tick
    pub fn steer(&mut self, input: &TickInput, ball_y: f32) {
        match self.control {
            PaddleControl::Player => {
                if input.up && self.can_step(Direction::Up) {
                    self.move_dir(Direction::Up);
                }
                if input.down && self.can_step(Direction::Down) {
                    self.move_dir(Direction::Down);
                }
            }
            PaddleControl::Ai => self.ai_move(ball_y),
        }
    }

    pub fn reset(&mut self) {
        self.pos = self.origin;
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Serve speed and the largest deflection speed off a paddle
    pub max_velocity: f32,
    origin: Vec2,
}

impl Ball {
    /// A ball at `origin`, served toward the right
    pub fn new(origin: Vec2, radius: f32, max_velocity: f32) -> Self {
        Self {
            pos: origin,
            vel: Vec2::new(max_velocity, 0.0),
            radius,
            max_velocity,
            origin,
        }
    }

    /// Serve position, restored by [`Ball::reset`]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Back to the serve position, served toward the other side
    pub fn reset(&mut self) {
        self.pos = self.origin;
        self.vel.y = 0.0;
        self.vel.x = -self.vel.x;
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks advance the simulation
    Playing,
    /// A side reached the winning score; waiting for the win pause to end
    RoundWon { winner: Side },
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallBounce,
    PaddleHit(Side),
    /// The named side scored a point
    Scored(Side),
    /// The named side reached the winning score
    MatchWon(Side),
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub phase: GamePhase,
    pub field: Vec2,
    pub winning_score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Matches completed since startup
    pub matches_played: u32,
}

impl GameState {
    /// Fresh match: human on the left, AI on the right, ball served right
    pub fn new(settings: &Settings) -> Self {
        let size = Vec2::new(settings.paddle_width, settings.paddle_height);
        Self {
            left_paddle: Paddle::new(
                Side::Left,
                PaddleControl::Player,
                settings.left_paddle_origin(),
                size,
                settings.paddle_velocity,
                settings.field_height,
            ),
            right_paddle: Paddle::new(
                Side::Right,
                PaddleControl::Ai,
                settings.right_paddle_origin(),
                size,
                settings.paddle_velocity,
                settings.field_height,
            ),
            ball: Ball::new(
                settings.ball_origin(),
                settings.ball_radius,
                settings.ball_max_velocity,
            ),
            score: Score::new(),
            phase: GamePhase::Playing,
            field: Vec2::new(settings.field_width, settings.field_height),
            winning_score: settings.winning_score,
            time_ticks: 0,
            matches_played: 0,
        }
    }

    pub fn width(&self) -> f32 {
        self.field.x
    }
}
