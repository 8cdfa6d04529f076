//! Terminal input module
//!
//! Maps `crossterm` key events into the per-tick [`crate::types::Intent`]
//! record. Independent of any UI framework; the handler compensates for
//! terminals that never emit key-release events.

pub mod handler;

pub use handler::{should_quit, InputHandler};
