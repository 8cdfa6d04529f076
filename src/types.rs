//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Level dimensions in tiles
pub const MAP_WIDTH: i32 = 64;
pub const MAP_HEIGHT: i32 = 16;

/// Visible viewport dimensions in tiles
pub const VIEW_WIDTH: i32 = 32;
pub const VIEW_HEIGHT: i32 = 16;

/// Fixed simulation timestep (milliseconds)
pub const TICK_MS: u32 = 50;

/// Player spawn tile
pub const SPAWN_X: i32 = 3;
pub const SPAWN_Y: i32 = 2;

/// Terminal velocity: velocity.y is clamped to this after gravity is applied
pub const MAX_FALL_SPEED: i32 = 1;

/// Upward velocity applied when a jump is honored
pub const JUMP_SPEED: i32 = -3;

/// Scroll band: scroll right when the player is more than this many tiles
/// ahead of the scroll origin, scroll left when fewer than the behind margin
pub const SCROLL_AHEAD_MARGIN: i32 = 20;
pub const SCROLL_BEHIND_MARGIN: i32 = 4;

/// Walk-cycle animation: frame count and the tick cadence it advances at
pub const PLAYER_FRAME_COUNT: u8 = 2;
pub const FRAME_ADVANCE_TICKS: u32 = 4;

/// Ticks the driver waits after death before resetting the episode
pub const DEATH_PAUSE_TICKS: u32 = 12;

/// Integer tile-space point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// Kind of a single map cell
///
/// The set is closed: blocking classification and the visual tables in
/// `core::tiles` are total over it by exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Out-of-bounds marker, returned for any query outside the grid
    Empty,
    /// Sky / walkable air
    Passable,
    Solid,
    Ground,
    Pipe,
    PipeLeft,
    PipeRight,
    Mountain,
    MountainLeft,
    MountainRight,
    MountainTop,
    Tree,
    Brick,
    Question,
    Cloud,
    /// Enemy spawn marker, not an entity
    Enemy,
    Block,
}

impl TileKind {
    /// Every kind, for table-completeness checks and tests
    pub const ALL: [TileKind; 17] = [
        TileKind::Empty,
        TileKind::Passable,
        TileKind::Solid,
        TileKind::Ground,
        TileKind::Pipe,
        TileKind::PipeLeft,
        TileKind::PipeRight,
        TileKind::Mountain,
        TileKind::MountainLeft,
        TileKind::MountainRight,
        TileKind::MountainTop,
        TileKind::Tree,
        TileKind::Brick,
        TileKind::Question,
        TileKind::Cloud,
        TileKind::Enemy,
        TileKind::Block,
    ];
}

/// Per-tick input intent, produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Intent {
    /// Horizontal movement request: -1, 0 or 1
    pub move_x: i32,
    /// Jump request; honored only when the player is not already jumping
    pub jump: bool,
}

/// Events raised by the game core during a tick
///
/// Delivery (sound playback, etc.) is entirely the driver's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Jump,
    Landed,
    Died,
}

impl GameEvent {
    /// Stable name for fire-and-forget triggers
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::Jump => "jump",
            GameEvent::Landed => "land",
            GameEvent::Died => "die",
        }
    }
}
