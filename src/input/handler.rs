//! Held-key intent tracking for terminal environments.
//!
//! Most terminals emit key presses (and auto-repeats) but no releases, so a
//! "held" direction is inferred from repeats and dropped after a short
//! timeout with no fresh press. Jump is simply reported while held; the core
//! edge-triggers it through the player's `jumping` flag.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Intent;

// A tap should not linger as a sustained hold; terminal auto-repeat keeps
// refreshing the stamp while the key is genuinely down.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Horizontal {
    Left,
    Right,
    None,
}

/// Tracks held movement and jump keys between ticks.
#[derive(Debug, Clone)]
pub struct InputHandler {
    horizontal: Horizontal,
    jump_held: bool,
    last_move_key: std::time::Instant,
    last_jump_key: std::time::Instant,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            horizontal: Horizontal::None,
            jump_held: false,
            last_move_key: std::time::Instant::now(),
            last_jump_key: std::time::Instant::now(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn handle_key_press(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                self.horizontal = Horizontal::Left;
                self.last_move_key = std::time::Instant::now();
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                self.horizontal = Horizontal::Right;
                self.last_move_key = std::time::Instant::now();
            }
            KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                self.jump_held = true;
                self.last_jump_key = std::time::Instant::now();
            }
            _ => {}
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                if self.horizontal == Horizontal::Left {
                    self.horizontal = Horizontal::None;
                }
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                if self.horizontal == Horizontal::Right {
                    self.horizontal = Horizontal::None;
                }
            }
            KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                self.jump_held = false;
            }
            _ => {}
        }
    }

    /// Produce this tick's intent, expiring stale holds first.
    pub fn intent(&mut self) -> Intent {
        let timeout = u128::from(self.key_release_timeout_ms);
        if self.last_move_key.elapsed().as_millis() > timeout {
            self.horizontal = Horizontal::None;
        }
        if self.last_jump_key.elapsed().as_millis() > timeout {
            self.jump_held = false;
        }

        Intent {
            move_x: match self.horizontal {
                Horizontal::Left => -1,
                Horizontal::Right => 1,
                Horizontal::None => 0,
            },
            jump: self.jump_held,
        }
    }

    pub fn reset(&mut self) {
        self.horizontal = Horizontal::None;
        self.jump_held = false;
        self.last_move_key = std::time::Instant::now();
        self.last_jump_key = std::time::Instant::now();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
