use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardState {
    InProgress,
    Won,
    Lost,
}

impl BoardState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::InProgress
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardData")]
pub struct Board {
    mine_layout: MineLayout,
    cells: Array2<CellState>,
    cleared_count: CellCount,
    state: BoardState,
    losing_square: Option<Position>,
}

impl Board {
    pub fn new(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        Self {
            mine_layout,
            cells: Array2::default(size.to_nd_index()),
            cleared_count: 0,
            state: Default::default(),
            losing_square: None,
        }
    }

    /// Builds a fresh board for `config` with mines drawn by `generator`.
    pub fn create(config: &GameConfig, generator: impl MinefieldGenerator) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(generator.generate(config)?))
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn game_over(&self) -> bool {
        matches!(self.state, BoardState::Lost)
    }

    pub fn game_won(&self) -> bool {
        matches!(self.state, BoardState::Won)
    }

    pub fn size(&self) -> Position {
        self.mine_layout.size()
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn mine_layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.mine_layout.safe_cell_count()
    }

    /// Number of safe cells cleared so far.
    pub fn cleared_count(&self) -> CellCount {
        self.cleared_count
    }

    pub fn losing_square(&self) -> Option<Position> {
        self.losing_square
    }

    pub fn cell(&self, pos: Position) -> Result<Cell> {
        let pos = self.mine_layout.validate_position(pos)?;
        Ok(self.cell_unchecked(pos))
    }

    /// All cells in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.indexed_iter().map(|((row, col), &state)| {
            let pos = (row as Coord, col as Coord);
            Cell::new(pos, self.mine_layout[pos], state)
        })
    }

    pub fn neighbors(&self, pos: Position) -> Result<NeighborIter> {
        let pos = self.mine_layout.validate_position(pos)?;
        Ok(self.mine_layout.iter_neighbors(pos))
    }

    pub fn adjacent_mine_count(&self, pos: Position) -> Result<u8> {
        let pos = self.mine_layout.validate_position(pos)?;
        Ok(self.mine_layout.adjacent_mine_count(pos))
    }

    pub fn reveal(&mut self, pos: Position) -> Result<RevealOutcome> {
        let pos = self.mine_layout.validate_position(pos)?;

        if self.state.is_finished() || self.cells[pos.to_nd_index()].is_cleared() {
            return Ok(RevealOutcome::NoChange);
        }

        if self.mine_layout[pos] {
            self.detonate(pos);
            return Ok(RevealOutcome::HitMine);
        }

        let before = self.cleared_count;
        self.flood_clear(pos);
        log::trace!(
            "reveal {:?} cleared {} cells",
            pos,
            self.cleared_count - before
        );

        if self.cleared_count == self.mine_layout.safe_cell_count() {
            debug_assert!(self.all_safe_cells_cleared());
            log::debug!("Board won after revealing {:?}", pos);
            self.state = BoardState::Won;
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    fn cell_unchecked(&self, pos: Position) -> Cell {
        Cell::new(pos, self.mine_layout[pos], self.cells[pos.to_nd_index()])
    }

    /// Clears `start` and, through zero-count cells, the connected region around it.
    fn flood_clear(&mut self, start: Position) {
        let mut to_visit = VecDeque::new();
        if self.clear_cell(start) == 0 {
            to_visit.push_back(start);
        }

        while let Some(pos) = to_visit.pop_front() {
            for next in self.mine_layout.iter_neighbors(pos) {
                if self.cells[next.to_nd_index()].is_cleared() || self.mine_layout[next] {
                    continue;
                }
                if self.clear_cell(next) == 0 {
                    to_visit.push_back(next);
                }
            }
        }
    }

    fn clear_cell(&mut self, pos: Position) -> u8 {
        let adjacent_mines = self.mine_layout.adjacent_mine_count(pos);
        self.cells[pos.to_nd_index()] = CellState::Cleared(adjacent_mines);
        self.cleared_count += 1;
        adjacent_mines
    }

    fn detonate(&mut self, pos: Position) {
        log::debug!("Board lost on mine {:?}", pos);

        for mine in self.mine_layout.iter_mines() {
            self.cells[mine.to_nd_index()] = CellState::Exposed;
        }
        self.cells[pos.to_nd_index()] = CellState::Detonated;
        self.losing_square = Some(pos);
        self.state = BoardState::Lost;
    }

    fn all_safe_cells_cleared(&self) -> bool {
        self.iter_cells().all(|cell| cell.is_mine() || cell.is_cleared())
    }
}

/// Serialized form of a [`Board`]. Counters, state and the losing square are
/// rebuilt from the cells on load.
#[derive(Deserialize)]
struct BoardData {
    mine_layout: MineLayout,
    cells: Array2<CellState>,
}

impl TryFrom<BoardData> for Board {
    type Error = GameError;

    fn try_from(data: BoardData) -> Result<Self> {
        let BoardData { mine_layout, cells } = data;
        if cells.dim() != mine_layout.mine_mask_dim() {
            return Err(GameError::InvalidLayout);
        }

        let mut cleared_count: CellCount = 0;
        let mut exposed = false;
        let mut losing_square = None;
        for ((row, col), &state) in cells.indexed_iter() {
            let pos = (row as Coord, col as Coord);
            match (state, mine_layout[pos]) {
                (CellState::Hidden, _) => {}
                (CellState::Cleared(count), false)
                    if count == mine_layout.adjacent_mine_count(pos) =>
                {
                    cleared_count += 1
                }
                (CellState::Exposed, true) => exposed = true,
                (CellState::Detonated, true) if losing_square.is_none() => {
                    losing_square = Some(pos)
                }
                _ => return Err(GameError::InvalidLayout),
            }
        }

        let state = match losing_square {
            Some(_) => BoardState::Lost,
            None if exposed => return Err(GameError::InvalidLayout),
            None if cleared_count == mine_layout.safe_cell_count() && cleared_count > 0 => {
                BoardState::Won
            }
            None => BoardState::InProgress,
        };

        Ok(Self {
            mine_layout,
            cells,
            cleared_count,
            state,
            losing_square,
        })
    }
}
