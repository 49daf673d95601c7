use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer should draw for one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Glyph {
    Unrevealed,
    /// Cleared safe cell; zero is drawn empty.
    Number(u8),
    Mine { losing: bool },
    /// Mine marked automatically once the board is won.
    Flag,
}

impl Glyph {
    pub const fn for_cell(cell: Cell, state: BoardState) -> Self {
        if matches!(state, BoardState::Won) && cell.is_mine() && !cell.is_cleared() {
            return Self::Flag;
        }
        match cell.state() {
            CellState::Hidden => Self::Unrevealed,
            CellState::Cleared(count) => Self::Number(count),
            CellState::Exposed => Self::Mine { losing: false },
            CellState::Detonated => Self::Mine { losing: true },
        }
    }
}

/// Status indicator shown next to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Face {
    Playing,
    Dead,
    Cool,
}

impl Face {
    pub const fn for_state(state: BoardState) -> Self {
        match state {
            BoardState::InProgress => Self::Playing,
            BoardState::Lost => Self::Dead,
            BoardState::Won => Self::Cool,
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Playing => "🙂",
            Self::Dead => "😵",
            Self::Cool => "😎",
        }
    }
}

impl Board {
    pub fn glyph_at(&self, pos: Position) -> Result<Glyph> {
        Ok(Glyph::for_cell(self.cell(pos)?, self.state()))
    }

    pub fn face(&self) -> Face {
        Face::for_state(self.state())
    }
}
