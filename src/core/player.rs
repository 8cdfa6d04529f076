//! Player state - position, velocity and flags in tile space
//!
//! Position is an integer tile index, not pixels: the simulation moves in
//! whole-tile steps once per tick. Fields are written directly by the intent
//! application and the physics resolver; `reset` is the only other mutation.

use crate::types::{Intent, Point, JUMP_SPEED, PLAYER_FRAME_COUNT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub tile_pos: Point,
    /// Tiles per tick, signed
    pub velocity: Point,
    /// Constant acceleration added every tick before movement
    pub gravity: Point,
    pub alive: bool,
    pub big: bool,
    pub on_ground: bool,
    pub jumping: bool,
    /// Walk-cycle frame, advanced by the game tick
    pub frame: u8,
    spawn: Point,
}

impl Player {
    pub fn new(spawn: Point) -> Self {
        Self {
            tile_pos: spawn,
            velocity: Point::new(0, 0),
            gravity: Point::new(0, 1),
            alive: true,
            big: false,
            on_ground: false,
            jumping: false,
            frame: 0,
            spawn,
        }
    }

    pub fn spawn(&self) -> Point {
        self.spawn
    }

    /// Restore spawn state: position back to the spawn tile, velocity zeroed,
    /// flags cleared, alive again
    pub fn reset(&mut self) {
        self.tile_pos = self.spawn;
        self.velocity = Point::new(0, 0);
        self.alive = true;
        self.on_ground = false;
        self.jumping = false;
        self.frame = 0;
    }

    /// Apply one tick's input intent
    ///
    /// Horizontal intent overwrites `velocity.x`. A jump request is honored
    /// only while not already jumping (edge-triggered, the flag clears on
    /// landing). Returns whether a jump started this tick.
    pub fn apply_intent(&mut self, intent: Intent) -> bool {
        self.velocity.x = intent.move_x.clamp(-1, 1);
        if intent.jump && !self.jumping {
            self.jumping = true;
            self.on_ground = false;
            self.velocity.y = JUMP_SPEED;
            return true;
        }
        false
    }

    /// Advance the walk-cycle frame by one step
    pub fn advance_frame(&mut self) {
        self.frame = (self.frame + 1) % PLAYER_FRAME_COUNT;
    }
}
