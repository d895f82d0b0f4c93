//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, BACKGROUND, GRAY, GRID_HEIGHT, GRID_WIDTH, RED, WALL_COLOR, WHITE};

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

const BLOCK: char = '█';
const WALL: char = '▓';
const EMPTY: char = '·';

/// Where the playfield (including its walls) sits in the viewport.
#[derive(Debug, Clone, Copy)]
struct Layout {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render a snapshot into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers can reuse one framebuffer across frames.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        // One wall cell on every side of the grid.
        let w = (GRID_WIDTH as u16 + 2) * self.cell_w;
        let h = (GRID_HEIGHT as u16 + 2) * self.cell_h;
        let layout = Layout {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        self.draw_walls(fb, layout);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(color) => self.draw_block(fb, layout, x as i8, y as i8, *color),
                    None => self.draw_empty(fb, layout, x as i8, y as i8),
                }
            }
        }

        if let Some(active) = snap.active {
            for (x, y) in active.cells() {
                self.draw_block(fb, layout, x, y, active.color);
            }
        }

        self.draw_side_panel(fb, snap, layout);

        if snap.game_over {
            let lines = [("GAME OVER", RED), ("Press R to Restart", WHITE)];
            self.draw_overlay(fb, layout, &lines);
        } else if snap.paused {
            self.draw_overlay(fb, layout, &[("PAUSED", WHITE)]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_walls(&self, fb: &mut FrameBuffer, layout: Layout) {
        let style = CellStyle::new(WALL_COLOR.into(), Rgb::new(0, 0, 0));
        let cols = GRID_WIDTH as i8 + 2;
        let rows = GRID_HEIGHT as i8 + 2;
        for wy in 0..rows {
            for wx in 0..cols {
                if wx == 0 || wy == 0 || wx == cols - 1 || wy == rows - 1 {
                    // Wall coordinates are grid coordinates shifted by the wall itself.
                    self.fill_cell(fb, layout, wx - 1, wy - 1, WALL, style);
                }
            }
        }
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, layout: Layout, x: i8, y: i8) {
        let style = CellStyle::new(Rgb::new(60, 60, 70), BACKGROUND.into());
        self.fill_cell(fb, layout, x, y, EMPTY, style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, layout: Layout, x: i8, y: i8, color: Color) {
        // Parts of the falling piece above the top edge are not drawn.
        if x < 0 || y < 0 || x >= GRID_WIDTH as i8 || y >= GRID_HEIGHT as i8 {
            return;
        }
        let style = CellStyle::new(color.into(), BACKGROUND.into()).bold();
        self.fill_cell(fb, layout, x, y, BLOCK, style);
    }

    /// Fill the terminal cells covering grid cell (x, y); (-1, -1) is the top-left wall.
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        let px = layout.x + (x + 1) as u16 * self.cell_w;
        let py = layout.y + (y + 1) as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: Layout) {
        let panel_x = layout.x.saturating_add(layout.w).saturating_add(2);
        if panel_x.saturating_add(8) > fb.width() {
            return;
        }

        let label = CellStyle::new(WHITE.into(), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(GRAY.into(), Rgb::new(0, 0, 0));

        let y = layout.y.saturating_add(self.cell_h);
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y.saturating_add(1), snap.score, value);
        fb.put_str(panel_x, y.saturating_add(3), "LEVEL", label);
        fb.put_u32(panel_x, y.saturating_add(4), snap.level, value);
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: Layout, lines: &[(&str, Color)]) {
        let mid_y = layout.y.saturating_add(layout.h / 2);
        let top = mid_y.saturating_sub(lines.len() as u16 / 2);
        for (i, (text, color)) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = layout.x.saturating_add(layout.w.saturating_sub(text_w) / 2);
            let style = CellStyle::new((*color).into(), Rgb::new(0, 0, 0)).bold();
            fb.put_str(x, top.saturating_add(i as u16), text, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    #[test]
    fn frame_size_includes_walls() {
        let snap = GameSnapshot::default();
        let fb = GameView::default().render(&snap, Viewport::new(24, 22));

        assert_eq!(fb.get(0, 0).unwrap().ch, WALL);
        assert_eq!(fb.get(23, 21).unwrap().ch, WALL);
        assert_eq!(fb.get(2, 1).unwrap().ch, EMPTY);
    }

    #[test]
    fn locked_cell_uses_stored_color() {
        let mut snap = GameSnapshot::default();
        snap.board[19][0] = Some(crate::types::ORANGE);
        let fb = GameView::default().render(&snap, Viewport::new(24, 22));

        let cell = fb.get(2, 20).unwrap();
        assert_eq!(cell.ch, BLOCK);
        assert_eq!(cell.style.fg, Rgb::new(255, 165, 0));
        assert_eq!(fb.get(3, 20).unwrap().ch, BLOCK);
    }

    #[test]
    fn active_piece_is_drawn() {
        let snap = GameState::new(1).snapshot();
        let active = snap.active.unwrap();
        let fb = GameView::default().render(&snap, Viewport::new(24, 22));

        for (x, y) in active.cells() {
            let cell = fb.get((x as u16 + 1) * 2, y as u16 + 1).unwrap();
            assert_eq!(cell.ch, BLOCK);
            assert_eq!(cell.style.fg, Rgb::from(active.color));
        }
    }
}
