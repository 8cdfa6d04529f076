//! Game aggregate - the per-tick pipeline over map, player and camera
//!
//! One call to [`Game::tick`] runs a whole simulation step in fixed order:
//! intent application, physics, camera pursuit, animation cadence. The
//! events it returns are the core's only outward channel; the driver decides
//! what (if anything) to do with them.

use arrayvec::ArrayVec;

use crate::core::camera::Camera;
use crate::core::grid::TileGrid;
use crate::core::physics;
use crate::core::player::Player;
use crate::types::{GameEvent, Intent, Point, FRAME_ADVANCE_TICKS};

/// Upper bound on events a single tick can raise
pub const MAX_EVENTS_PER_TICK: usize = 4;

#[derive(Debug, Clone)]
pub struct Game {
    map: TileGrid,
    player: Player,
    camera: Camera,
    tick_count: u32,
}

impl Game {
    pub fn new(map: TileGrid, spawn: Point) -> Self {
        Self {
            map,
            player: Player::new(spawn),
            camera: Camera::new(),
            tick_count: 0,
        }
    }

    pub fn map(&self) -> &TileGrid {
        &self.map
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn tick_count(&self) -> u32 {
        self.tick_count
    }

    /// Run one fixed-timestep simulation tick
    ///
    /// Dead players are frozen: the tick is a no-op until the driver calls
    /// [`Game::reset`]. Death is reported through the `alive` flag and the
    /// one `Died` event on the transition tick, never as an error.
    pub fn tick(&mut self, intent: Intent) -> ArrayVec<GameEvent, MAX_EVENTS_PER_TICK> {
        let mut events = ArrayVec::new();
        if !self.player.alive {
            return events;
        }

        if self.player.apply_intent(intent) {
            events.push(GameEvent::Jump);
        }

        let was_grounded = self.player.on_ground;
        physics::step(&mut self.player, &self.map);
        self.camera.update(&self.player);

        if !self.player.alive {
            events.push(GameEvent::Died);
        } else if !was_grounded && self.player.on_ground {
            events.push(GameEvent::Landed);
        }

        self.tick_count += 1;
        if self.tick_count % FRAME_ADVANCE_TICKS == 0 {
            self.player.advance_frame();
        }

        events
    }

    /// Start a fresh episode: player back at spawn, camera at origin
    pub fn reset(&mut self) {
        self.player.reset();
        self.camera.reset();
        self.tick_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::TileGrid;
    use crate::types::TileKind;

    fn small_game() -> Game {
        let mut map = TileGrid::new(16, 8);
        map.hline(0, 6, 16, TileKind::Ground);
        Game::new(map, Point::new(3, 5))
    }

    #[test]
    fn test_jump_event_fires_once() {
        let mut game = small_game();
        // Settle onto the floor first.
        game.tick(Intent::default());

        let jump = Intent {
            move_x: 0,
            jump: true,
        };
        let events = game.tick(jump);
        assert!(events.contains(&GameEvent::Jump));

        // Held jump while airborne raises nothing.
        let events = game.tick(jump);
        assert!(!events.contains(&GameEvent::Jump));
    }

    #[test]
    fn test_landing_raises_landed_once() {
        let mut game = small_game();
        let events = game.tick(Intent::default());
        assert_eq!(events.as_slice(), &[GameEvent::Landed]);

        // Still grounded next tick: no repeat.
        let events = game.tick(Intent::default());
        assert!(events.is_empty());
    }

    #[test]
    fn test_frame_advances_every_fourth_tick() {
        let mut game = small_game();
        for _ in 0..FRAME_ADVANCE_TICKS - 1 {
            game.tick(Intent::default());
        }
        assert_eq!(game.player().frame, 0);
        game.tick(Intent::default());
        assert_eq!(game.player().frame, 1);
    }

    #[test]
    fn test_dead_game_freezes_until_reset() {
        let mut map = TileGrid::new(16, 8);
        map.hline(0, 6, 4, TileKind::Ground);
        let mut game = Game::new(map, Point::new(10, 5));

        // Fall into the pit until the death event fires.
        let mut died = false;
        for _ in 0..20 {
            if game.tick(Intent::default()).contains(&GameEvent::Died) {
                died = true;
                break;
            }
        }
        assert!(died);
        assert!(!game.player().alive);

        let frozen_pos = game.player().tile_pos;
        assert!(game.tick(Intent::default()).is_empty());
        assert_eq!(game.player().tile_pos, frozen_pos);

        game.reset();
        assert!(game.player().alive);
        assert_eq!(game.player().tile_pos, Point::new(10, 5));
        assert_eq!(game.camera().scroll, Point::new(0, 0));
    }
}
