//! Board rendering for the Gobang GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Cell, Pos, Side, BOARD_SIZE, WIN_LENGTH};
use crate::game::Match;

use super::theme::*;

/// Board view handles rendering and click dispatch for the 450x450 canvas
pub struct BoardView {
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked `(row, col)`, if any.
    ///
    /// The coordinates are not validated here; the match rejects
    /// out-of-range or occupied cells.
    pub fn show(&mut self, ui: &mut egui::Ui, game: &Match) -> Option<(i32, i32)> {
        let (response, painter) =
            ui.allocate_painter(Vec2::splat(CANVAS_SIZE), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::ZERO, BOARD_BG);
        self.draw_grid(&painter);
        self.draw_stones(&painter, game);

        if let Some(pos) = game.last_move() {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = game.game_over().and_then(|over| over.winning_line) {
            self.draw_winning_line(&painter, &line);
        }

        if game.is_over() {
            return None;
        }

        let pointer = response.hover_pos()?;
        let (row, col) = pixel_to_cell(pointer - self.board_rect.min);
        if let Some(pos) = Pos::checked(row, col) {
            let is_valid = game.cell(pos) == Cell::Empty;
            self.draw_hover_preview(&painter, pos, is_valid);
        }

        if response.clicked() {
            Some((row, col))
        } else {
            None
        }
    }

    /// Draw the 15x15 grid lines, (15,15) to (435,435)
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let far = BOARD_MARGIN + (BOARD_SIZE as f32 - 1.0) * CELL_SPACING;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * CELL_SPACING;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, far);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(far, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_stones(&self, painter: &Painter, game: &Match) {
        for pos in Pos::all() {
            if let Cell::Occupied(side) = game.cell(pos) {
                self.draw_stone(painter, pos, side);
            }
        }
    }

    /// Solid black for the human, white with a rim for the computer
    fn draw_stone(&self, painter: &Painter, pos: Pos, side: Side) {
        let center = self.board_to_screen(pos);
        match side {
            Side::Player => {
                painter.circle_filled(center, STONE_RADIUS, PLAYER_STONE);
            }
            Side::Computer => {
                painter.circle_filled(center, STONE_RADIUS, COMPUTER_STONE);
                painter.circle_stroke(center, STONE_RADIUS, Stroke::new(1.0, COMPUTER_STONE_RIM));
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; WIN_LENGTH]) {
        let stroke = Stroke::new(WIN_LINE_WIDTH, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        for pos in line {
            painter.circle_stroke(self.board_to_screen(*pos), STONE_RADIUS + 2.0, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, is_valid: bool) {
        let color = if is_valid { hover_valid() } else { hover_invalid() };
        painter.circle_filled(self.board_to_screen(pos), STONE_RADIUS, color);
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.board_rect.min + cell_center(pos)
    }
}

/// Offset of a cell's intersection from the canvas origin:
/// `(col * 30 + 15, row * 30 + 15)`
pub fn cell_center(pos: Pos) -> Vec2 {
    Vec2::new(
        pos.col as f32 * CELL_SPACING + BOARD_MARGIN,
        pos.row as f32 * CELL_SPACING + BOARD_MARGIN,
    )
}

/// Click dispatch: canvas offset to `(row, col)` via
/// `floor(y / 30)`, `floor(x / 30)`
pub fn pixel_to_cell(offset: Vec2) -> (i32, i32) {
    let row = (offset.y / CELL_SPACING).floor() as i32;
    let col = (offset.x / CELL_SPACING).floor() as i32;
    (row, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_center() {
        assert_eq!(cell_center(Pos::new(0, 0)), Vec2::new(15.0, 15.0));
        assert_eq!(cell_center(Pos::new(7, 3)), Vec2::new(105.0, 225.0));
        assert_eq!(cell_center(Pos::new(14, 14)), Vec2::new(435.0, 435.0));
    }

    #[test]
    fn test_pixel_to_cell() {
        assert_eq!(pixel_to_cell(Vec2::new(0.0, 0.0)), (0, 0));
        assert_eq!(pixel_to_cell(Vec2::new(29.9, 29.9)), (0, 0));
        assert_eq!(pixel_to_cell(Vec2::new(30.0, 61.0)), (2, 1));
        assert_eq!(pixel_to_cell(Vec2::new(449.0, 449.0)), (14, 14));
    }

    #[test]
    fn test_pixel_outside_canvas_is_out_of_range() {
        let (row, col) = pixel_to_cell(Vec2::new(-1.0, 455.0));
        assert!(Pos::checked(row, col).is_none());
    }

    #[test]
    fn test_click_lands_on_drawn_stone() {
        for pos in Pos::all() {
            assert_eq!(pixel_to_cell(cell_center(pos)), (pos.row as i32, pos.col as i32));
        }
    }
}
