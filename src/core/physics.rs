//! Discrete-step collision resolver
//!
//! One call per tick. The move is attempted as a whole vector first, then
//! axis-by-axis: exactly one of the four branches below commits the tick's
//! position update. There is no error path - the grid is total and the
//! velocity is always a small finite integer; the only terminal outcome is
//! the death transition, which is a game state, not an error.

use crate::core::grid::TileMap;
use crate::core::player::Player;
use crate::types::{Point, MAX_FALL_SPEED};

/// Advance the player one simulation step against the map
pub fn step(player: &mut Player, map: &impl TileMap) {
    // Fell off the bottom: terminal until the driver resets.
    if player.tile_pos.y > map.height() {
        player.alive = false;
        return;
    }

    player.velocity += player.gravity;
    if player.velocity.y > MAX_FALL_SPEED {
        player.velocity.y = MAX_FALL_SPEED;
    }

    // Full-vector move: the common falling-or-running case.
    let full = player.tile_pos + player.velocity;
    if !map.tile_at_point(full).is_blocking() {
        player.tile_pos = full;
        return;
    }

    // Horizontal only: landed on a floor or bumped a ceiling while still
    // carrying horizontal speed. This is also the path a standing player
    // takes every tick (zero horizontal offset resolves to its own tile).
    let horizontal = player.tile_pos + Point::new(player.velocity.x, 0);
    if !map.tile_at_point(horizontal).is_blocking() {
        player.tile_pos = horizontal;
        player.velocity.y = 0;
        player.on_ground = true;
        player.jumping = false;
        return;
    }

    // Vertical only: sliding along a wall. Grazing a wall while falling is
    // not grounded, so the flag is left alone here.
    let vertical = player.tile_pos + Point::new(0, player.velocity.y);
    if !map.tile_at_point(vertical).is_blocking() {
        player.tile_pos = vertical;
        player.velocity.x = 0;
        return;
    }

    // Wedged on all three candidates: stop in place.
    player.velocity.y = 0;
    player.on_ground = true;
    player.jumping = false;
}
