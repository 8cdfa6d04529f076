//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the game view draws into a plain
//! framebuffer of styled cells, and the renderer flushes that to a terminal
//! backend. No widget/layout framework involved.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Give the view precise control over tile aspect ratio (2 chars per tile)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
