//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module renders, sleeps or
//! reads input; it is driven one tick at a time by the game loop.

pub mod collision;
pub mod scoring;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, ball_paddle_contact, deflection_velocity, resolve};
pub use scoring::{check_scoring, check_winner, finish_match, win_message};
pub use state::{
    Ball, Direction, GameEvent, GamePhase, GameState, Paddle, PaddleControl, Score, Side,
};
pub use tick::{TickInput, tick};
