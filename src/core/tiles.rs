//! Blocking and visual tables over the tile-kind set
//!
//! Both tables are total functions: exhaustive matches over the closed
//! `TileKind` enum, fixed at compile time. The only runtime check left is
//! that every atlas cell actually lies inside the tileset atlas, which
//! [`validate_tile_tables`] performs once at startup.

use crate::types::TileKind;

/// Tileset atlas dimensions in cells (column-major cell coordinates)
pub const ATLAS_COLS: u8 = 8;
pub const ATLAS_ROWS: u8 = 3;

/// Atlas cells for the player walk cycle, indexed by animation frame
pub const PLAYER_FRAME_CELLS: [(u8, u8); 2] = [(2, 2), (3, 2)];

impl TileKind {
    /// Whether the player is prevented from entering a cell of this kind
    ///
    /// Directional variants share their base kind's classification, so the
    /// enhancement pass never changes collision behavior.
    pub fn is_blocking(self) -> bool {
        match self {
            TileKind::Solid
            | TileKind::Ground
            | TileKind::Pipe
            | TileKind::PipeLeft
            | TileKind::PipeRight
            | TileKind::Brick
            | TileKind::Question
            | TileKind::Block => true,
            TileKind::Empty
            | TileKind::Passable
            | TileKind::Mountain
            | TileKind::MountainLeft
            | TileKind::MountainRight
            | TileKind::MountainTop
            | TileKind::Tree
            | TileKind::Cloud
            | TileKind::Enemy => false,
        }
    }

    /// 24-bit color used by the terminal renderer
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            // Magenta flags out-of-bounds reads that leak into a viewport.
            TileKind::Empty => (0xff, 0x00, 0xff),
            TileKind::Passable => (0x33, 0x66, 0xff),
            TileKind::Solid => (0xff, 0xcc, 0x44),
            TileKind::Ground => (0xb5, 0x6b, 0x30),
            TileKind::Pipe | TileKind::PipeLeft | TileKind::PipeRight => (0x22, 0xcc, 0x22),
            TileKind::Mountain => (0x3a, 0x8f, 0x3a),
            TileKind::MountainLeft | TileKind::MountainRight => (0x4f, 0xa3, 0x4f),
            TileKind::MountainTop => (0x6c, 0xc0, 0x6c),
            TileKind::Tree => (0x1d, 0x6e, 0x2e),
            TileKind::Brick => (0xc8, 0x5a, 0x2d),
            TileKind::Question => (0xff, 0xb8, 0x00),
            TileKind::Cloud => (0xf5, 0xf5, 0xf5),
            TileKind::Enemy => (0x8b, 0x4a, 0x2b),
            TileKind::Block => (0xd8, 0xb0, 0x60),
        }
    }

    /// Cell in the sprite tileset for renderers that draw from an atlas
    ///
    /// Mirrors the layout of the original 8x3 `tileset@8.png`.
    pub fn atlas_cell(self) -> (u8, u8) {
        match self {
            TileKind::Empty => (3, 0),
            TileKind::Passable => (3, 0),
            TileKind::Solid => (0, 1),
            TileKind::Ground => (0, 1),
            TileKind::Pipe => (4, 0),
            TileKind::PipeLeft => (4, 0),
            TileKind::PipeRight => (5, 0),
            TileKind::Mountain => (1, 1),
            TileKind::MountainLeft => (0, 0),
            TileKind::MountainRight => (2, 0),
            TileKind::MountainTop => (1, 0),
            TileKind::Tree => (6, 0),
            TileKind::Brick => (2, 1),
            TileKind::Question => (3, 1),
            TileKind::Cloud => (5, 1),
            TileKind::Enemy => (0, 2),
            TileKind::Block => (7, 0),
        }
    }
}

/// A tile kind's visual mapping points outside the tileset atlas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileConfigError {
    pub kind: Option<TileKind>,
    pub cell: (u8, u8),
}

impl std::fmt::Display for TileConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            Some(kind) => write!(
                f,
                "atlas cell ({}, {}) for tile kind {:?} is outside the {}x{} tileset",
                self.cell.0, self.cell.1, kind, ATLAS_COLS, ATLAS_ROWS
            ),
            None => write!(
                f,
                "player frame atlas cell ({}, {}) is outside the {}x{} tileset",
                self.cell.0, self.cell.1, ATLAS_COLS, ATLAS_ROWS
            ),
        }
    }
}

impl std::error::Error for TileConfigError {}

/// Startup-time check that every visual mapping is usable
///
/// The blocking and color tables are total by construction; the atlas cells
/// additionally have to fit the atlas. The process must not start rendering
/// with a kind that would index outside the tileset.
pub fn validate_tile_tables() -> Result<(), TileConfigError> {
    for kind in TileKind::ALL {
        let cell = kind.atlas_cell();
        if cell.0 >= ATLAS_COLS || cell.1 >= ATLAS_ROWS {
            return Err(TileConfigError {
                kind: Some(kind),
                cell,
            });
        }
    }
    for cell in PLAYER_FRAME_CELLS {
        if cell.0 >= ATLAS_COLS || cell.1 >= ATLAS_ROWS {
            return Err(TileConfigError { kind: None, cell });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_complete() {
        // Exhaustive matches guarantee this at compile time; the loop pins
        // the property against future refactors that weaken the tables.
        for kind in TileKind::ALL {
            let _ = kind.is_blocking();
            let _ = kind.color();
            let _ = kind.atlas_cell();
        }
        assert!(validate_tile_tables().is_ok());
    }

    #[test]
    fn test_variants_share_base_blocking() {
        assert_eq!(
            TileKind::PipeLeft.is_blocking(),
            TileKind::Pipe.is_blocking()
        );
        assert_eq!(
            TileKind::PipeRight.is_blocking(),
            TileKind::Pipe.is_blocking()
        );
        for variant in [
            TileKind::MountainLeft,
            TileKind::MountainRight,
            TileKind::MountainTop,
        ] {
            assert_eq!(variant.is_blocking(), TileKind::Mountain.is_blocking());
        }
    }

    #[test]
    fn test_out_of_bounds_kind_is_open() {
        assert!(!TileKind::Empty.is_blocking());
        assert!(!TileKind::Passable.is_blocking());
    }

    #[test]
    fn test_config_error_display_names_the_kind() {
        let err = TileConfigError {
            kind: Some(TileKind::Cloud),
            cell: (9, 9),
        };
        let msg = err.to_string();
        assert!(msg.contains("Cloud"));
        assert!(msg.contains("(9, 9)"));
    }
}
