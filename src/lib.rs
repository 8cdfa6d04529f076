//! Tile-based side-scrolling platformer for the terminal.
//!
//! The interesting part lives in [`core`]: a total tile grid, a directional
//! sprite-variant enhancement pass, and a discrete whole-tile collision
//! resolver driven on a fixed timestep. [`input`] and [`term`] are thin
//! collaborators that map key events in and framebuffers out.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
