use crate::*;
pub use preset::*;
pub use random::*;

mod preset;
mod random;

pub trait MinefieldGenerator {
    fn generate(self, config: &GameConfig) -> Result<MineLayout>;
}
