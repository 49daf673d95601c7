use std::fmt;

use clearfield_core::{Board, Glyph};

pub const fn glyph_char(glyph: Glyph) -> char {
    match glyph {
        Glyph::Unrevealed => '#',
        Glyph::Number(0) => '.',
        Glyph::Number(count) => (b'0' + count) as char,
        Glyph::Mine { losing: false } => '*',
        Glyph::Mine { losing: true } => 'X',
        Glyph::Flag => 'F',
    }
}

/// Text rendering of a board: face, column header, then one line per row.
pub struct BoardView<'a> {
    board: &'a Board,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.board.size();
        let row_width = (rows - 1).to_string().len();
        let col_width = (cols - 1).to_string().len();

        writeln!(
            f,
            "{}  {} mines, {}/{} cleared",
            self.board.face().emoji(),
            self.board.mine_count(),
            self.board.cleared_count(),
            self.board.safe_cell_count()
        )?;

        write!(f, "{:row_width$} ", "")?;
        for col in 0..cols {
            write!(f, " {col:>col_width$}")?;
        }
        writeln!(f)?;

        let state = self.board.state();
        let mut cells = self.board.iter_cells();
        for row in 0..rows {
            write!(f, "{row:>row_width$} ")?;
            for cell in cells.by_ref().take(cols.into()) {
                let glyph = glyph_char(Glyph::for_cell(cell, state));
                write!(f, " {glyph:>col_width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
