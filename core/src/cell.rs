use serde::{Deserialize, Serialize};

use crate::Position;

/// Reveal state stored by the board for every position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    /// Safe cell opened by the player, with its adjacent mine count.
    Cleared(u8),
    /// Mine shown after the game was lost.
    Exposed,
    /// The mine that lost the game.
    Detonated,
}

impl CellState {
    pub const fn is_cleared(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Read-only view of one grid position, as handed out to renderers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    position: Position,
    mine: bool,
    state: CellState,
}

impl Cell {
    pub(crate) const fn new(position: Position, mine: bool, state: CellState) -> Self {
        Self {
            position,
            mine,
            state,
        }
    }

    pub const fn position(&self) -> Position {
        self.position
    }

    pub const fn is_mine(&self) -> bool {
        self.mine
    }

    pub const fn is_cleared(&self) -> bool {
        self.state.is_cleared()
    }

    pub const fn is_losing_square(&self) -> bool {
        matches!(self.state, CellState::Detonated)
    }

    /// Number of neighboring mines, known only once a safe cell is cleared.
    pub const fn adjacent_mine_count(&self) -> Option<u8> {
        match self.state {
            CellState::Cleared(count) => Some(count),
            _ => None,
        }
    }

    pub const fn state(&self) -> CellState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_cell_hides_its_count() {
        let cell = Cell::new((0, 0), false, CellState::Hidden);

        assert!(!cell.is_cleared());
        assert_eq!(cell.adjacent_mine_count(), None);
    }

    #[test]
    fn cleared_cell_exposes_count() {
        let cell = Cell::new((2, 1), false, CellState::Cleared(3));

        assert!(cell.is_cleared());
        assert!(!cell.is_losing_square());
        assert_eq!(cell.adjacent_mine_count(), Some(3));
        assert_eq!(cell.position(), (2, 1));
    }

    #[test]
    fn only_detonated_mine_is_losing_square() {
        let exposed = Cell::new((0, 0), true, CellState::Exposed);
        let detonated = Cell::new((0, 1), true, CellState::Detonated);

        assert!(exposed.is_cleared());
        assert!(!exposed.is_losing_square());
        assert!(detonated.is_cleared());
        assert!(detonated.is_losing_square());
        assert_eq!(detonated.adjacent_mine_count(), None);
    }
}
