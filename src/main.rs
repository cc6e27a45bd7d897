//! Pong entry point
//!
//! Sets up logging and the terminal, then runs the game loop until quit.

use std::fs::File;
use std::io;

use pong::Settings;
use pong::game_loop;
use pong::platform::{FixedRateClock, TerminalInput};
use pong::renderer::TerminalRenderer;
use pong::sim::GameState;

/// Send logs to the configured file; without one only warnings reach stderr
fn init_logging(settings: &Settings) -> io::Result<()> {
    let env = env_logger::Env::default();
    let mut builder = match &settings.log_file {
        Some(path) => {
            let mut builder = env_logger::Builder::from_env(env.default_filter_or("info"));
            builder.target(env_logger::Target::Pipe(Box::new(File::create(path)?)));
            builder
        }
        None => env_logger::Builder::from_env(env.default_filter_or("warn")),
    };
    builder.init();
    Ok(())
}

fn main() -> io::Result<()> {
    let settings = Settings::load();
    init_logging(&settings)?;
    log::info!(
        "Pong starting with {} ({})",
        Settings::path().display(),
        settings.summary()
    );

    let mut state = GameState::new(&settings);
    let mut clock = FixedRateClock::new();

    let mut renderer = TerminalRenderer::new()?;
    let result = TerminalInput::new().and_then(|mut input| {
        game_loop::run(&mut state, &settings, &mut clock, &mut input, &mut renderer)
    });
    renderer.release()?;

    let exit = result?;
    log::info!(
        "Pong exiting ({exit:?}), {} matches played",
        state.matches_played
    );
    Ok(())
}
