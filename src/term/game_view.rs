//! GameView: maps the game state into a terminal framebuffer.
//!
//! Pure (no I/O), unit-testable. Each map tile becomes a 2x1 block of
//! terminal cells to compensate for glyph aspect ratio. The view reads the
//! world through the camera: tile `(scroll.x + vx, vy)` lands at viewport
//! cell `(vx, vy)`, and the grid's totality turns anything past the level
//! edge into the out-of-bounds kind rather than a failure.

use crate::core::grid::TileMap;
use crate::core::Game;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::TileKind;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Walk-cycle glyphs, indexed by the player's animation frame.
const PLAYER_GLYPHS: [char; 2] = ['@', 'Q'];

pub struct GameView {
    /// Map tile width in terminal columns.
    cell_w: u16,
    /// Map tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps tiles roughly square in typical terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Allocation-free hot path: callers reuse the framebuffer across frames.
    pub fn render_into(&self, game: &Game, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let camera = game.camera();
        let view_w = camera.width as u16 * self.cell_w;
        let view_h = camera.height as u16 * self.cell_h;
        let frame_w = view_w + 2;
        let frame_h = view_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Tiles visible through the camera band.
        for vy in 0..camera.height {
            for vx in 0..camera.width {
                let kind = game
                    .map()
                    .tile_at(camera.scroll.x + vx, camera.scroll.y + vy);
                self.draw_tile(fb, start_x + 1, start_y + 1, vx as u16, vy as u16, kind);
            }
        }

        // Player, if currently inside the band.
        let player = game.player();
        let px = player.tile_pos.x - camera.scroll.x;
        let py = player.tile_pos.y - camera.scroll.y;
        if px >= 0 && px < camera.width && py >= 0 && py < camera.height {
            let behind = game.map().tile_at_point(player.tile_pos);
            let style = CellStyle {
                fg: if player.alive {
                    Rgb::new(0xff, 0x30, 0x30)
                } else {
                    Rgb::new(120, 120, 120)
                },
                bg: Rgb::from(behind.color()),
                bold: true,
            };
            let glyph = PLAYER_GLYPHS[player.frame as usize % PLAYER_GLYPHS.len()];
            let cx = start_x + 1 + px as u16 * self.cell_w;
            let cy = start_y + 1 + py as u16 * self.cell_h;
            fb.put_char(cx, cy, glyph, style);
            if self.cell_w > 1 {
                fb.put_char(cx + 1, cy, ' ', style);
            }
        }

        self.draw_status(fb, game, start_x, start_y + frame_h);
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, vx: u16, vy: u16, kind: TileKind) {
        let style = CellStyle::on_bg(Rgb::from(kind.color()));
        let ch = match kind {
            TileKind::Question => '?',
            TileKind::Enemy => 'e',
            TileKind::Tree => '^',
            _ => ' ',
        };
        fb.fill_rect(
            ox + vx * self.cell_w,
            oy + vy * self.cell_h,
            self.cell_w,
            self.cell_h,
            ch,
            style,
        );
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        for dx in 0..w {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 0..h {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
    }

    fn draw_status(&self, fb: &mut FrameBuffer, game: &Game, x: u16, y: u16) {
        let player = game.player();
        let status = if player.alive {
            format!(
                "pos ({}, {})  scroll {}  |  a/d move, space jump, q quit",
                player.tile_pos.x,
                player.tile_pos.y,
                game.camera().scroll.x
            )
        } else {
            "fell! respawning...".to_string()
        };
        fb.put_str(x, y, &status, CellStyle::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::TileGrid;
    use crate::core::Game;
    use crate::types::Point;

    fn test_game() -> Game {
        let mut map = TileGrid::new(40, 16);
        map.hline(0, 12, 40, crate::types::TileKind::Ground);
        Game::new(map, Point::new(3, 2))
    }

    #[test]
    fn test_player_glyph_lands_inside_the_border() {
        let game = test_game();
        let view = GameView::default();
        let mut fb = FrameBuffer::new(80, 24);
        view.render_into(&game, Viewport::new(80, 24), &mut fb);

        // Viewport frame is 66x18 centered in 80x24: origin (7, 3).
        // Player (3, 2) with scroll 0 maps to (7 + 1 + 3*2, 3 + 1 + 2).
        let cell = fb.get(7 + 1 + 6, 3 + 1 + 2).unwrap();
        assert_eq!(cell.ch, PLAYER_GLYPHS[0]);
        assert!(cell.style.bold);
    }

    #[test]
    fn test_render_survives_tiny_viewport() {
        let game = test_game();
        let view = GameView::default();
        let mut fb = FrameBuffer::new(80, 24);
        // Smaller than the frame: everything must clip, not panic.
        view.render_into(&game, Viewport::new(10, 4), &mut fb);
        assert_eq!(fb.width(), 10);
        assert_eq!(fb.height(), 4);
    }

    #[test]
    fn test_scrolled_view_shows_shifted_tiles() {
        let mut game = test_game();
        // Drive the camera right by walking the player far ahead.
        for _ in 0..200 {
            game.tick(crate::types::Intent {
                move_x: 1,
                jump: false,
            });
        }
        assert!(game.camera().scroll.x > 0);

        let view = GameView::default();
        let mut fb = FrameBuffer::new(80, 24);
        view.render_into(&game, Viewport::new(80, 24), &mut fb);
        // Beyond the authored 40 columns the map reads Empty (magenta).
        let oob = fb.get(7 + 1 + 62, 3 + 1).unwrap();
        assert_eq!(
            (oob.style.bg.r, oob.style.bg.g, oob.style.bg.b),
            crate::types::TileKind::Empty.color()
        );
    }
}
