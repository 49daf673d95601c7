use ndarray::Array2;

use super::*;

/// Generation strategy where every cell independently holds a mine with the configured probability, so the total
/// mine count varies from board to board.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: &GameConfig) -> Result<MineLayout> {
        use rand::prelude::*;

        config.validate()?;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mine_mask = Array2::from_shape_simple_fn(config.size().to_nd_index(), || {
            rng.random_bool(config.mine_probability)
        });
        let layout = MineLayout::from_mine_mask(mine_mask)?;

        log::debug!(
            "Generated {}x{} minefield with {} mines (seed {})",
            config.rows,
            config.cols,
            layout.mine_count(),
            self.seed
        );
        if layout.safe_cell_count() == 0 {
            log::warn!("Minefield has no safe cell, the first reveal always loses");
        }
        Ok(layout)
    }
}
