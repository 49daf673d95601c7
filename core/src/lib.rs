#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use glyph::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod glyph;
mod session;
mod types;

/// Board dimensions and mine density for one game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    /// Chance for each cell, independently, to hold a mine.
    pub mine_probability: f64,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Coord = 10;
    pub const DEFAULT_MINE_PROBABILITY: f64 = 1.0 / 8.0;

    pub const fn new_unchecked(rows: Coord, cols: Coord, mine_probability: f64) -> Self {
        Self {
            rows,
            cols,
            mine_probability,
        }
    }

    pub fn new(rows: Coord, cols: Coord, mine_probability: f64) -> Result<Self> {
        let config = Self::new_unchecked(rows, cols, mine_probability);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if !(0.0..=1.0).contains(&self.mine_probability) {
            return Err(GameError::InvalidProbability);
        }
        Ok(())
    }

    pub const fn size(&self) -> Position {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(
            Self::DEFAULT_SIZE,
            Self::DEFAULT_SIZE,
            Self::DEFAULT_MINE_PROBABILITY,
        )
    }
}

/// Immutable placement of mines on a board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MineLayoutData")]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        let fits = |axis: usize| (1..=usize::from(Coord::MAX)).contains(&axis);
        if !fits(rows) || !fits(cols) {
            return Err(GameError::InvalidDimensions);
        }

        // at most Coord::MAX squared, which always fits a CellCount
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Ok(Self {
            mine_mask,
            mine_count,
        })
    }

    pub fn from_mine_coords(size: Position, mine_coords: &[Position]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidDimensions);
        }
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &pos in mine_coords {
            if pos.0 >= size.0 || pos.1 >= size.1 {
                return Err(GameError::InvalidPosition);
            }
            mine_mask[pos.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn validate_position(&self, pos: Position) -> Result<Position> {
        let size = self.size();
        if pos.0 < size.0 && pos.1 < size.1 {
            Ok(pos)
        } else {
            Err(GameError::InvalidPosition)
        }
    }

    pub fn size(&self) -> Position {
        // both axes were checked against Coord::MAX on construction
        let (rows, cols) = self.mine_mask.dim();
        (rows as Coord, cols as Coord)
    }

    pub(crate) fn mine_mask_dim(&self) -> (usize, usize) {
        self.mine_mask.dim()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, pos: Position) -> bool {
        self[pos]
    }

    pub fn adjacent_mine_count(&self, pos: Position) -> u8 {
        // never more than 8 neighbors
        self.iter_neighbors(pos).filter(|&pos| self[pos]).count() as u8
    }

    pub fn iter_neighbors(&self, pos: Position) -> NeighborIter {
        NeighborIter::new(pos, self.size())
    }

    /// Positions of every mine, in row-major order.
    pub fn iter_mines(&self) -> impl Iterator<Item = Position> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }
}

/// Serialized form of a [`MineLayout`]; the mine count is recomputed on load.
#[derive(Deserialize)]
struct MineLayoutData {
    mine_mask: Array2<bool>,
}

impl TryFrom<MineLayoutData> for MineLayout {
    type Error = GameError;

    fn try_from(data: MineLayoutData) -> Result<Self> {
        Self::from_mine_mask(data.mine_mask)
    }
}

impl Index<Position> for MineLayout {
    type Output = bool;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.mine_mask[pos.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether the board changed and should be redrawn.
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn config_rejects_empty_board() {
        assert_eq!(
            GameConfig::new(0, 5, 0.1),
            Err(GameError::InvalidDimensions)
        );
        assert_eq!(
            GameConfig::new(5, 0, 0.1),
            Err(GameError::InvalidDimensions)
        );
    }

    #[test]
    fn config_rejects_probability_out_of_range() {
        assert_eq!(
            GameConfig::new(5, 5, -0.1),
            Err(GameError::InvalidProbability)
        );
        assert_eq!(
            GameConfig::new(5, 5, 1.5),
            Err(GameError::InvalidProbability)
        );
        assert_eq!(
            GameConfig::new(5, 5, f64::NAN),
            Err(GameError::InvalidProbability)
        );
    }

    #[test]
    fn default_config_matches_classic_board() {
        let config = GameConfig::default();

        assert_eq!(config.size(), (10, 10));
        assert_eq!(config.total_cells(), 100);
        assert_eq!(config.mine_probability, 0.125);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn layout_counts_mines_and_neighbors() {
        let layout = MineLayout::from_mine_coords((3, 4), &[(0, 0), (1, 1), (2, 3)]).unwrap();

        assert_eq!(layout.size(), (3, 4));
        assert_eq!(layout.total_cells(), 12);
        assert_eq!(layout.mine_count(), 3);
        assert_eq!(layout.safe_cell_count(), 9);
        assert_eq!(layout.adjacent_mine_count((0, 1)), 2);
        assert_eq!(layout.adjacent_mine_count((1, 2)), 2);
        assert_eq!(layout.adjacent_mine_count((2, 0)), 1);
        assert_eq!(layout.adjacent_mine_count((1, 1)), 1);

        let mines: Vec<Position> = layout.iter_mines().collect();
        let expected: [Position; 3] = [(0, 0), (1, 1), (2, 3)];
        assert_eq!(mines, expected);
    }

    #[test]
    fn layout_rejects_out_of_bounds_mines() {
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidPosition)
        );
        assert_eq!(
            MineLayout::from_mine_coords((0, 2), &[]),
            Err(GameError::InvalidDimensions)
        );
    }

    #[test]
    fn layout_snapshot_recomputes_mine_count() {
        let layout = MineLayout::from_mine_coords((2, 2), &[(1, 0)]).unwrap();
        let mut value = serde_json::to_value(&layout).unwrap();
        value["mine_count"] = serde_json::json!(9);

        let loaded: MineLayout = serde_json::from_value(value).unwrap();

        assert_eq!(loaded, layout);
        assert_eq!(loaded.safe_cell_count(), 3);
    }

    #[test]
    fn layout_snapshot_rejects_empty_mask() {
        let layout = MineLayout::from_mine_coords((2, 2), &[]).unwrap();
        let mut value = serde_json::to_value(&layout).unwrap();
        value["mine_mask"] = serde_json::to_value(Array2::<bool>::default([0, 4])).unwrap();

        assert!(serde_json::from_value::<MineLayout>(value).is_err());
    }

    #[test]
    fn layout_validates_positions() {
        let layout = MineLayout::from_mine_coords((2, 3), &[]).unwrap();

        assert_eq!(layout.validate_position((1, 2)), Ok((1, 2)));
        assert_eq!(
            layout.validate_position((2, 0)),
            Err(GameError::InvalidPosition)
        );
        assert_eq!(
            layout.validate_position((0, 3)),
            Err(GameError::InvalidPosition)
        );
    }
}
