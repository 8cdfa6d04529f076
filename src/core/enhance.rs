//! Enhancement pass - directional sprite variants from neighbor context
//!
//! Enhancement is a full-buffer transform: every cell of the output is
//! derived from the pre-enhancement grid, never from the grid being written,
//! so the result is independent of traversal order. Collision semantics are
//! untouched - every variant shares its base kind's blocking classification
//! (pinned by a test in `core::tiles`).

use crate::core::grid::{TileGrid, TileMap};
use crate::types::TileKind;

/// Neighbor test used by the variant rules: sky or out-of-bounds
fn is_open(kind: TileKind) -> bool {
    matches!(kind, TileKind::Passable | TileKind::Empty)
}

/// Pick the directional variant for one cell given its side neighbors
///
/// The conjunctive both-sides-open case must be evaluated before the
/// single-side cases: a one-wide mountain is a peak, not a left edge.
fn variant_for(base: TileKind, left: TileKind, right: TileKind) -> TileKind {
    match base {
        TileKind::Pipe => {
            if is_open(left) {
                TileKind::PipeLeft
            } else if is_open(right) {
                TileKind::PipeRight
            } else {
                TileKind::Pipe
            }
        }
        TileKind::Mountain => {
            if is_open(left) && is_open(right) {
                TileKind::MountainTop
            } else if is_open(left) {
                TileKind::MountainLeft
            } else if is_open(right) {
                TileKind::MountainRight
            } else {
                TileKind::Mountain
            }
        }
        other => other,
    }
}

/// Compute the enhanced version of a map into a fresh grid
pub fn enhanced(map: &impl TileMap) -> TileGrid {
    TileGrid::from_fn(map.width(), map.height(), |x, y| {
        variant_for(
            map.tile_at(x, y),
            map.tile_at(x - 1, y),
            map.tile_at(x + 1, y),
        )
    })
}

impl TileGrid {
    /// Enhance in place, swapping in the fully rebuilt backing store
    ///
    /// No reader ever observes a partially enhanced grid.
    pub fn enhance(&mut self) {
        *self = enhanced(self);
    }
}
