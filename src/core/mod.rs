//! Core module - pure game logic with no external dependencies
//!
//! Everything in here is deterministic computation over in-memory state:
//! no I/O, no blocking, no clocks. One tick is input intent, a physics
//! step, a camera update - strictly in that order, with a single mutator.

pub mod camera;
pub mod enhance;
pub mod game;
pub mod grid;
pub mod level;
pub mod physics;
pub mod player;
pub mod tiles;

// Re-export commonly used types
pub use camera::Camera;
pub use enhance::enhanced;
pub use game::Game;
pub use grid::{TileGrid, TileMap};
pub use level::{demo_level, parse_ascii, LevelParseError};
pub use player::Player;
pub use tiles::{validate_tile_tables, TileConfigError};
