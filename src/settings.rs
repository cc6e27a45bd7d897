//! Game settings
//!
//! Every tunable of the game lives here. Settings are read from a JSON file
//! at startup; anything missing or unreadable falls back to the defaults in
//! [`crate::consts`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// What happens to a quit request made while the win message is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WinPauseQuit {
    /// Input queued during the pause is discarded; the game keeps running
    #[default]
    Drop,
    /// Input is polled once the pause ends and a quit stops the game
    Honor,
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance moved per tick
    pub paddle_velocity: f32,
    /// Gap between each paddle and its side of the field
    pub paddle_inset: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_max_velocity: f32,

    // === Pacing ===
    pub fps: u32,
    pub winning_score: u32,
    pub win_pause_ms: u64,
    pub win_pause_quit: WinPauseQuit,

    // === Diagnostics ===
    /// Log destination; the terminal is taken over by the game
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_velocity: PADDLE_VELOCITY,
            paddle_inset: PADDLE_INSET,

            ball_radius: BALL_RADIUS,
            ball_max_velocity: BALL_MAX_VELOCITY,

            fps: FPS,
            winning_score: WINNING_SCORE,
            win_pause_ms: WIN_PAUSE_MS,
            win_pause_quit: WinPauseQuit::Drop,

            log_file: None,
        }
    }
}

impl Settings {
    /// Environment variable naming an alternative settings file
    pub const PATH_ENV: &'static str = "PONG_SETTINGS";
    /// Settings file looked up in the working directory
    const DEFAULT_PATH: &'static str = "pong_settings.json";

    /// Path settings are loaded from
    pub fn path() -> PathBuf {
        std::env::var_os(Self::PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_PATH))
    }

    /// Load settings from [`Settings::path`]
    pub fn load() -> Self {
        Self::load_from(Self::path())
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Failed to read {}: {e}, using defaults", path.display());
                return Self::default();
            }
        };

        let settings: Settings = match serde_json::from_str(&json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Malformed settings in {}: {e}, using defaults", path.display());
                return Self::default();
            }
        };

        let problems = settings.validate();
        if !problems.is_empty() {
            for problem in &problems {
                log::warn!("Invalid setting in {}: {problem}", path.display());
            }
            return Self::default();
        }

        log::info!("Loaded settings from {}", path.display());
        settings
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// List the preconditions these settings violate (empty when usable)
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        let dims = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_velocity", self.paddle_velocity),
            ("ball_radius", self.ball_radius),
            ("ball_max_velocity", self.ball_max_velocity),
        ];
        for (name, value) in dims {
            if !value.is_finite() || value <= 0.0 {
                problems.push(format!("{name} must be positive, got {value}"));
            }
        }
        if !self.paddle_inset.is_finite() || self.paddle_inset < 0.0 {
            problems.push(format!(
                "paddle_inset must not be negative, got {}",
                self.paddle_inset
            ));
        }
        if self.paddle_height > self.field_height {
            problems.push(format!(
                "paddle_height {} exceeds field_height {}",
                self.paddle_height, self.field_height
            ));
        }
        if 2.0 * (self.paddle_inset + self.paddle_width) >= self.field_width {
            problems.push("paddles do not fit side by side in field_width".to_string());
        }
        if self.fps == 0 {
            problems.push("fps must be at least 1".to_string());
        }
        if self.winning_score == 0 {
            problems.push("winning_score must be at least 1".to_string());
        }

        problems
    }

    /// How long the win message is held
    pub fn win_pause(&self) -> Duration {
        Duration::from_millis(self.win_pause_ms)
    }

    /// One-line description of the settings in use, for the startup log
    pub fn summary(&self) -> String {
        format!(
            "{}x{} field, first to {}, {} fps, {}ms win pause, {:?} quit during pause",
            self.field_width,
            self.field_height,
            self.winning_score,
            self.fps,
            self.win_pause_ms,
            self.win_pause_quit,
        )
    }

    /// Starting top-left corner of the left (player) paddle
    pub fn left_paddle_origin(&self) -> Vec2 {
        Vec2::new(self.paddle_inset, self.paddle_origin_y())
    }

    /// Starting top-left corner of the right (AI) paddle
    pub fn right_paddle_origin(&self) -> Vec2 {
        Vec2::new(
            self.field_width - self.paddle_inset - self.paddle_width,
            self.paddle_origin_y(),
        )
    }

    /// Serve position of the ball, the field center on whole pixels
    pub fn ball_origin(&self) -> Vec2 {
        Vec2::new(
            (self.field_width / 2.0).floor(),
            (self.field_height / 2.0).floor(),
        )
    }

    fn paddle_origin_y(&self) -> f32 {
        (self.field_height / 2.0).floor() - (self.paddle_height / 2.0).floor()
    }
}
