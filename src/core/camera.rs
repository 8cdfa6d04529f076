//! Scroll controller - keeps the player inside a horizontal band
//!
//! The camera pursues the player one tile per tick rather than snapping to a
//! target, which smooths fast movement for free. There is no vertical
//! scrolling; the whole level fits the viewport vertically.

use crate::core::player::Player;
use crate::types::{Point, SCROLL_AHEAD_MARGIN, SCROLL_BEHIND_MARGIN, VIEW_HEIGHT, VIEW_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Camera {
    pub scroll: Point,
    /// Viewport size in tiles
    pub width: i32,
    pub height: i32,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            scroll: Point::new(0, 0),
            width: VIEW_WIDTH,
            height: VIEW_HEIGHT,
        }
    }

    /// Adjust the scroll offset toward the player, one tile at most
    ///
    /// `scroll.x` never goes negative: the camera does not travel past the
    /// level's left edge even when the player hugs it.
    pub fn update(&mut self, player: &Player) {
        let diff = player.tile_pos.x - self.scroll.x;
        if diff > SCROLL_AHEAD_MARGIN {
            self.scroll.x += 1;
        }
        if diff < SCROLL_BEHIND_MARGIN {
            self.scroll.x -= 1;
        }
        if self.scroll.x < 0 {
            self.scroll.x = 0;
        }
    }

    pub fn reset(&mut self) {
        self.scroll = Point::new(0, 0);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
