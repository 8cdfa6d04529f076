//! Level sources - the authored demo strip and ASCII-decoded maps
//!
//! Two ways to produce a playable grid, selected at load time:
//!
//! - [`demo_level`]: a fixed authoring script of run-drawing calls.
//! - [`parse_ascii`]: trivial symbol matching over a rectangular text block,
//!   one character per tile.
//!
//! Both return an already-enhanced grid; consumers only ever see the final
//! tile set.

use crate::core::grid::TileGrid;
use crate::types::{TileKind, MAP_HEIGHT, MAP_WIDTH};

/// Build the built-in 64x16 demo strip
///
/// Ground slab, a wall on the left edge, a three-step stair, a two-wide pipe,
/// and background decoration for the enhancement pass to work with.
pub fn demo_level() -> TileGrid {
    let mut map = TileGrid::new(MAP_WIDTH, MAP_HEIGHT);

    // Ground slab under the first 50 columns; the last stretch is a pit.
    map.hline(0, 12, 50, TileKind::Ground);
    map.hline(0, 13, 50, TileKind::Ground);
    map.hline(0, 14, 50, TileKind::Ground);
    map.hline(0, 15, 50, TileKind::Ground);

    // Wall along the left edge (overshoots the height on purpose; the
    // excess clips).
    map.vline(0, 0, 20, TileKind::Solid);

    // Background mountain range and a tree, all non-blocking decoration.
    map.hline(7, 11, 5, TileKind::Mountain);
    map.hline(8, 10, 3, TileKind::Mountain);
    map.hline(9, 9, 1, TileKind::Mountain);
    map.vline(14, 11, 1, TileKind::Tree);

    // Three-step stair.
    map.vline(20, 11, 1, TileKind::Solid);
    map.vline(21, 10, 2, TileKind::Solid);
    map.vline(22, 9, 3, TileKind::Solid);

    // Two-wide pipe, low enough to clear with a jump from the ground.
    map.vline(27, 9, 3, TileKind::Pipe);
    map.vline(28, 9, 3, TileKind::Pipe);

    // Question/brick row at jumping height past the pipe.
    map.hline(33, 8, 1, TileKind::Question);
    map.hline(34, 8, 2, TileKind::Brick);
    map.hline(36, 8, 1, TileKind::Question);

    // Clouds.
    map.hline(11, 3, 2, TileKind::Cloud);
    map.hline(30, 2, 3, TileKind::Cloud);
    map.hline(45, 4, 2, TileKind::Cloud);

    // An enemy marker on the ground and a small block perch before the pit.
    map.hline(41, 11, 1, TileKind::Enemy);
    map.hline(46, 9, 2, TileKind::Block);

    map.enhance();
    map
}

/// Decoding failure for an ASCII map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelParseError {
    /// A character with no tile mapping
    UnknownSymbol { line: usize, column: usize, found: char },
    /// A row shorter or longer than the first row
    RaggedRow { line: usize, expected: usize, found: usize },
    /// No rows at all
    EmptyMap,
}

impl std::fmt::Display for LevelParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelParseError::UnknownSymbol { line, column, found } => {
                write!(f, "unknown map symbol {found:?} at line {line}, column {column}")
            }
            LevelParseError::RaggedRow { line, expected, found } => {
                write!(f, "line {line} has {found} tiles, expected {expected}")
            }
            LevelParseError::EmptyMap => write!(f, "map text contains no rows"),
        }
    }
}

impl std::error::Error for LevelParseError {}

fn kind_for_symbol(ch: char) -> Option<TileKind> {
    match ch {
        '.' => Some(TileKind::Passable),
        '#' => Some(TileKind::Solid),
        '=' => Some(TileKind::Ground),
        'p' => Some(TileKind::Pipe),
        'm' => Some(TileKind::Mountain),
        't' => Some(TileKind::Tree),
        'b' => Some(TileKind::Brick),
        '?' => Some(TileKind::Question),
        'c' => Some(TileKind::Cloud),
        'e' => Some(TileKind::Enemy),
        'x' => Some(TileKind::Block),
        _ => None,
    }
}

/// Decode a rectangular text block into an enhanced grid
///
/// Every cell must decode to a defined kind; a partially authored map is a
/// precondition violation and fails here rather than later in the resolver.
pub fn parse_ascii(text: &str) -> Result<TileGrid, LevelParseError> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect();
    let height = rows.len();
    if height == 0 {
        return Err(LevelParseError::EmptyMap);
    }
    let width = rows[0].chars().count();

    let mut cells = Vec::with_capacity(width * height);
    for (y, row) in rows.iter().enumerate() {
        let found = row.chars().count();
        if found != width {
            return Err(LevelParseError::RaggedRow {
                line: y + 1,
                expected: width,
                found,
            });
        }
        for (x, ch) in row.chars().enumerate() {
            match kind_for_symbol(ch) {
                Some(kind) => cells.push(kind),
                None => {
                    return Err(LevelParseError::UnknownSymbol {
                        line: y + 1,
                        column: x + 1,
                        found: ch,
                    })
                }
            }
        }
    }

    let mut map = TileGrid::from_fn(width as i32, height as i32, |x, y| {
        cells[y as usize * width + x as usize]
    });
    map.enhance();
    Ok(map)
}
