//! Text presentation of the board.

use colored::Colorize;

use termchess_core::{Board, Coordinate, Piece, Side};

/// Gap written after every label and glyph.
const CELL_GAP: &str = "   ";

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Turns a piece into the text shown for its square.
pub trait Painter {
    /// Render `piece`, drawing it as selected when `highlighted` is set.
    fn paint(&self, piece: Piece, highlighted: bool) -> String;
}

/// Colored glyphs for an ANSI terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiPainter;

impl Painter for AnsiPainter {
    fn paint(&self, piece: Piece, highlighted: bool) -> String {
        let glyph = piece.glyph().to_string();
        let glyph = glyph.as_str();
        let styled = match piece.side() {
            Side::White => glyph.bright_black(),
            Side::Black => glyph.bright_white(),
            Side::Empty => glyph.normal(),
        };
        if highlighted {
            styled.bright_black().on_bright_yellow().to_string()
        } else {
            styled.to_string()
        }
    }
}

/// Bare glyphs with no styling. The selection is still reported on the
/// status line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPainter;

impl Painter for PlainPainter {
    fn paint(&self, piece: Piece, _highlighted: bool) -> String {
        piece.glyph().to_string()
    }
}

/// Render the board from rank 8 down to rank 1, followed by the file labels.
///
/// Rows are separated by a blank line.
pub fn render_board(board: &Board, painter: &dyn Painter) -> String {
    let mut out = String::new();
    let selected = board.selected();

    for rank in (1..=Coordinate::SIZE).rev() {
        out.push_str(&rank.to_string());
        out.push_str(CELL_GAP);
        for file in 1..=Coordinate::SIZE {
            let coord = Coordinate::new(file, rank);
            out.push_str(&painter.paint(board.get(coord), coord == selected));
            out.push_str(CELL_GAP);
        }
        out.push_str("\n\n");
    }

    out.push(' ');
    out.push_str(CELL_GAP);
    for file in 1..=Coordinate::SIZE {
        if let Some(letter) = Coordinate::new(file, 1).file_letter() {
            out.push(letter);
        }
        out.push_str(CELL_GAP);
    }
    out.push_str("\n\n");

    out
}

/// Echo the selected square and the piece on it.
///
/// With nothing selected this reads `selected: - (empty)`.
pub fn render_status(board: &Board) -> String {
    format!("selected: {} ({})", board.selected(), board.selected_piece())
}
