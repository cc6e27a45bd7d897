//! Fixed-rate game loop
//!
//! One thread, one tick at a time: wait for the tick, draw, poll input,
//! simulate. A match win holds the win message on screen for the win pause,
//! during which nothing is drawn and no input is read.

use std::io;

use crate::platform::{Clock, InputSource};
use crate::renderer::Renderer;
use crate::settings::{Settings, WinPauseQuit};
use crate::sim::{GameEvent, GamePhase, GameState, Side, finish_match, tick, win_message};

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Quit requested at the top of a tick
    Quit,
    /// Quit requested during the win pause, with [`WinPauseQuit::Honor`]
    QuitAfterWin,
}

/// Run until a quit is requested
///
/// Collaborator errors end the loop and are returned as-is.
pub fn run<C, I, R>(
    state: &mut GameState,
    settings: &Settings,
    clock: &mut C,
    input: &mut I,
    renderer: &mut R,
) -> io::Result<Exit>
where
    C: Clock,
    I: InputSource,
    R: Renderer,
{
    log::info!(
        "Game loop starting at {} fps, first to {} wins",
        settings.fps,
        settings.winning_score
    );

    loop {
        clock.wait_for_tick(settings.fps);
        renderer.draw_frame(state)?;

        let snapshot = input.poll()?;
        if snapshot.quit {
            log::info!("Quit requested after {} ticks", state.time_ticks);
            return Ok(Exit::Quit);
        }

        for event in tick(state, &snapshot.tick_input()) {
            if let GameEvent::MatchWon(winner) = event {
                log::info!(
                    "{} player won match {} ({} - {}) after {} ticks",
                    winner.as_str(),
                    state.matches_played + 1,
                    state.score.left,
                    state.score.right,
                    state.time_ticks
                );
            }
        }

        if let GamePhase::RoundWon { winner } = state.phase {
            if win_pause(state, settings, winner, clock, input, renderer)? {
                log::info!("Quit requested during win pause");
                return Ok(Exit::QuitAfterWin);
            }
        }
    }
}

/// Show the win message, wait, then start a new match
///
/// Returns whether the game should stop.
fn win_pause<C, I, R>(
    state: &mut GameState,
    settings: &Settings,
    winner: Side,
    clock: &mut C,
    input: &mut I,
    renderer: &mut R,
) -> io::Result<bool>
where
    C: Clock,
    I: InputSource,
    R: Renderer,
{
    renderer.draw_win_message(win_message(winner))?;
    clock.delay(settings.win_pause());
    finish_match(state);

    match settings.win_pause_quit {
        WinPauseQuit::Drop => {
            input.discard_pending()?;
            Ok(false)
        }
        WinPauseQuit::Honor => Ok(input.poll()?.quit),
    }
}
