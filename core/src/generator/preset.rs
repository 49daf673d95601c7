use alloc::vec::Vec;
use ndarray::Array2;

use super::*;

/// Replays a pre-drawn mine sequence in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetMinefieldGenerator {
    draws: Vec<bool>,
}

impl PresetMinefieldGenerator {
    pub fn new(draws: impl Into<Vec<bool>>) -> Self {
        Self {
            draws: draws.into(),
        }
    }
}

impl MinefieldGenerator for PresetMinefieldGenerator {
    fn generate(self, config: &GameConfig) -> Result<MineLayout> {
        config.validate()?;

        if self.draws.len() != config.total_cells() as usize {
            log::warn!(
                "Preset holds {} draws but the board has {} cells",
                self.draws.len(),
                config.total_cells()
            );
            return Err(GameError::InvalidLayout);
        }

        let mine_mask = Array2::from_shape_vec(config.size().to_nd_index(), self.draws)
            .map_err(|_| GameError::InvalidLayout)?;
        MineLayout::from_mine_mask(mine_mask)
    }
}
