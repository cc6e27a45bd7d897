//! Pong - classic two-paddle Pong against a reactive AI
//!
//! Core modules:
//! - `sim`: Per-tick simulation (paddles, ball, collisions, scoring)
//! - `game_loop`: Fixed-rate loop wiring the simulation to its collaborators
//! - `renderer`: Terminal rendering of the play field
//! - `platform`: Clock and input abstractions with native implementations
//! - `settings`: Tunable constants, loaded from JSON

pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, WinPauseQuit};

/// Game configuration constants (defaults for [`Settings`])
pub mod consts {
    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 1100.0;
    pub const FIELD_HEIGHT: f32 = 800.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Vertical distance moved per tick
    pub const PADDLE_VELOCITY: f32 = 4.0;
    /// Gap between a paddle and its side wall
    pub const PADDLE_INSET: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 7.0;
    /// Horizontal serve speed, also the largest vertical deflection speed
    pub const BALL_MAX_VELOCITY: f32 = 5.0;

    /// Target loop rate
    pub const FPS: u32 = 60;
    /// First side to reach this score wins the match
    pub const WINNING_SCORE: u32 = 15;
    /// How long the win message is held before the next match
    pub const WIN_PAUSE_MS: u64 = 5000;
}
