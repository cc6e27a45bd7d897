//! Keyboard input
//!
//! The game wants "is the key held right now", but a terminal delivers key
//! events. Terminals that support the kitty keyboard protocol report key
//! releases, which gives exact held state. Elsewhere a key counts as held
//! for a short window after each press or auto-repeat.

use std::io::{self, Write, stdout};
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};

use crate::sim::TickInput;

/// Input state sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Up key held
    pub up: bool,
    /// Down key held
    pub down: bool,
    /// Quit requested since the last poll
    pub quit: bool,
}

impl InputSnapshot {
    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Default::default()
        }
    }

    /// Held keys as simulation input
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            up: self.up,
            down: self.down,
        }
    }
}

/// Source of per-tick input
pub trait InputSource {
    /// Process everything that arrived since the last poll
    fn poll(&mut self) -> io::Result<InputSnapshot>;

    /// Throw away anything that arrived since the last poll, quit included
    fn discard_pending(&mut self) -> io::Result<()>;
}

/// How long a fresh press counts as held when releases are not reported
///
/// Covers the usual OS delay before auto-repeat starts (250 to 600ms).
pub const FIRST_PRESS_WINDOW: Duration = Duration::from_millis(500);

/// How long a key stays held after each auto-repeat when releases are not
/// reported
///
/// Long enough to bridge typical auto-repeat gaps once repeat kicks in.
pub const HOLD_WINDOW: Duration = Duration::from_millis(120);

#[derive(Debug, Clone, Copy, Default)]
struct KeyState {
    held: bool,
    last_seen: Option<Instant>,
    /// Auto-repeat has started since the key went down
    repeating: bool,
}

impl KeyState {
    /// Without release events a terminal reports auto-repeat as plain
    /// presses, so a press on a key that is still held counts as a repeat.
    fn press(&mut self, repeat: bool, now: Instant) {
        self.repeating = repeat || self.within_window(now);
        self.held = true;
        self.last_seen = Some(now);
    }

    fn release(&mut self) {
        self.held = false;
        self.last_seen = None;
        self.repeating = false;
    }

    fn window(&self) -> Duration {
        if self.repeating {
            HOLD_WINDOW
        } else {
            FIRST_PRESS_WINDOW
        }
    }

    fn within_window(&self, now: Instant) -> bool {
        self.last_seen
            .is_some_and(|seen| now.saturating_duration_since(seen) <= self.window())
    }

    fn is_held(&self, release_events: bool, now: Instant) -> bool {
        if release_events {
            self.held
        } else {
            self.within_window(now)
        }
    }
}

/// Held-key tracking from raw key events
#[derive(Debug, Clone)]
pub struct HeldKeys {
    up: KeyState,
    down: KeyState,
    quit: bool,
    /// Release events are reported by the terminal
    release_events: bool,
}

impl HeldKeys {
    pub fn new(release_events: bool) -> Self {
        Self {
            up: KeyState::default(),
            down: KeyState::default(),
            quit: false,
            release_events,
        }
    }

    /// Feed one key event
    pub fn handle(&mut self, key: &KeyEvent, now: Instant) {
        let is_repeat = key.kind == KeyEventKind::Repeat;
        let is_press = is_repeat || key.kind == KeyEventKind::Press;
        let is_release = key.kind == KeyEventKind::Release;

        let slot = match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(&mut self.up),
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(&mut self.down),
            _ => None,
        };
        if let Some(slot) = slot {
            if is_press {
                slot.press(is_repeat, now);
            } else if is_release {
                slot.release();
            }
            return;
        }

        if !is_press {
            return;
        }
        let ctrl_c =
            key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl_c || matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')) {
            self.quit = true;
        }
    }

    /// Current held state; the quit request is consumed
    pub fn snapshot(&mut self, now: Instant) -> InputSnapshot {
        let snapshot = InputSnapshot {
            up: self.up.is_held(self.release_events, now),
            down: self.down.is_held(self.release_events, now),
            quit: self.quit,
        };
        self.quit = false;
        snapshot
    }

    /// Forget all keys and any pending quit
    pub fn clear(&mut self) {
        self.up.release();
        self.down.release();
        self.quit = false;
    }
}

/// Keyboard input from the terminal
///
/// Expects raw mode to be enabled (the terminal renderer does this).
pub struct TerminalInput {
    keys: HeldKeys,
}

impl TerminalInput {
    pub fn new() -> io::Result<Self> {
        let release_events = matches!(terminal::supports_keyboard_enhancement(), Ok(true));
        if release_events {
            execute!(
                stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            log::info!("Keyboard enhancement enabled, using key release events");
        } else {
            log::warn!(
                "Terminal does not report key releases, keys count as held for {}ms \
                 after a press and {}ms after each repeat",
                FIRST_PRESS_WINDOW.as_millis(),
                HOLD_WINDOW.as_millis()
            );
        }
        Ok(Self {
            keys: HeldKeys::new(release_events),
        })
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> io::Result<InputSnapshot> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                self.keys.handle(&key, Instant::now());
            }
        }
        Ok(self.keys.snapshot(Instant::now()))
    }

    fn discard_pending(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            event::read()?;
        }
        self.keys.clear();
        Ok(())
    }
}

impl Drop for TerminalInput {
    fn drop(&mut self) {
        if self.keys.release_events {
            let mut out = stdout();
            let _ = execute!(out, PopKeyboardEnhancementFlags);
            let _ = out.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
    }

    #[test]
    fn test_press_release_tracking() {
        let now = Instant::now();
        let mut keys = HeldKeys::new(true);
        keys.handle(&key(KeyCode::Char('w'), KeyEventKind::Press), now);
        let later = now + Duration::from_secs(2);
        assert!(keys.snapshot(later).up);

        keys.handle(&key(KeyCode::Char('w'), KeyEventKind::Release), later);
        assert!(!keys.snapshot(later).up);
    }

    #[test]
    fn test_hold_window_without_releases() {
        let now = Instant::now();
        let mut keys = HeldKeys::new(false);
        keys.handle(&key(KeyCode::Down, KeyEventKind::Press), now);
        assert!(keys.snapshot(now + Duration::from_millis(50)).down);
        assert!(!keys.snapshot(now + Duration::from_millis(600)).down);

        // Auto-repeat keeps it alive, on the shorter window
        let repeat = now + Duration::from_millis(400);
        keys.handle(&key(KeyCode::Down, KeyEventKind::Repeat), repeat);
        assert!(keys.snapshot(repeat + Duration::from_millis(100)).down);
        assert!(!keys.snapshot(repeat + Duration::from_millis(200)).down);
    }

    #[test]
    fn test_held_through_auto_repeat_delay() {
        let now = Instant::now();
        let mut keys = HeldKeys::new(false);
        keys.handle(&key(KeyCode::Char('w'), KeyEventKind::Press), now);

        // Nothing arrives until the OS starts repeating
        for ms in [100, 250, 400, 500] {
            assert!(keys.snapshot(now + Duration::from_millis(ms)).up, "dropped at {ms}ms");
        }
    }

    #[test]
    fn test_repeated_presses_use_repeat_window() {
        let now = Instant::now();
        let mut keys = HeldKeys::new(false);
        keys.handle(&key(KeyCode::Up, KeyEventKind::Press), now);

        // Legacy terminals report auto-repeat as more presses
        let repeat = now + Duration::from_millis(450);
        keys.handle(&key(KeyCode::Up, KeyEventKind::Press), repeat);
        assert!(keys.snapshot(repeat + Duration::from_millis(100)).up);
        assert!(!keys.snapshot(repeat + Duration::from_millis(200)).up);

        // A press after the key lapsed starts over with the long window
        let again = repeat + Duration::from_secs(1);
        keys.handle(&key(KeyCode::Up, KeyEventKind::Press), again);
        assert!(keys.snapshot(again + Duration::from_millis(400)).up);
    }

    #[test]
    fn test_quit_keys_are_consumed() {
        let now = Instant::now();
        let mut keys = HeldKeys::new(true);
        keys.handle(&key(KeyCode::Esc, KeyEventKind::Press), now);
        assert!(keys.snapshot(now).quit);
        assert!(!keys.snapshot(now).quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        keys.handle(&ctrl_c, now);
        assert!(keys.snapshot(now).quit);

        // A bare 'c' is not a quit
        keys.handle(&key(KeyCode::Char('c'), KeyEventKind::Press), now);
        assert!(!keys.snapshot(now).quit);
    }

    #[test]
    fn test_quit_release_ignored() {
        let now = Instant::now();
        let mut keys = HeldKeys::new(true);
        keys.handle(&key(KeyCode::Char('q'), KeyEventKind::Release), now);
        assert!(!keys.snapshot(now).quit);
    }

    #[test]
    fn test_clear_drops_everything() {
        let now = Instant::now();
        let mut keys = HeldKeys::new(true);
        keys.handle(&key(KeyCode::Up, KeyEventKind::Press), now);
        keys.handle(&key(KeyCode::Char('q'), KeyEventKind::Press), now);
        keys.clear();
        assert_eq!(keys.snapshot(now), InputSnapshot::default());
    }

    #[test]
    fn test_snapshot_to_tick_input() {
        let snapshot = InputSnapshot {
            up: true,
            down: false,
            quit: true,
        };
        let input = snapshot.tick_input();
        assert!(input.up);
        assert!(!input.down);
    }
}
