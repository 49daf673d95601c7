use serde::{Deserialize, Serialize};

use crate::*;

/// One player's game: the current board plus what is needed to deal a new one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    config: GameConfig,
    board: Board,
    games_played: u32,
}

impl Session {
    pub fn new_game(config: GameConfig, seed: u64) -> Result<Self> {
        let board = Board::create(&config, RandomMinefieldGenerator::new(seed))?;
        Ok(Self {
            config,
            board,
            games_played: 1,
        })
    }

    /// Starts from a prepared board, e.g. a fixed layout. Later games keep the
    /// board's dimensions and draw mines with `mine_probability`.
    pub fn with_board(board: Board, mine_probability: f64) -> Result<Self> {
        let (rows, cols) = board.size();
        let config = GameConfig::new(rows, cols, mine_probability)?;
        Ok(Self {
            config,
            board,
            games_played: 1,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn reveal(&mut self, row: Coord, col: Coord) -> Result<RevealOutcome> {
        self.board.reveal((row, col))
    }

    pub fn game_over(&self) -> bool {
        self.board.game_over()
    }

    pub fn game_won(&self) -> bool {
        self.board.game_won()
    }

    pub fn glyph_at(&self, pos: Position) -> Result<Glyph> {
        self.board.glyph_at(pos)
    }

    pub fn face(&self) -> Face {
        self.board.face()
    }

    /// Throws the current board away and deals a new one with the same config.
    pub fn reset(&mut self, seed: u64) -> Result<()> {
        self.board = Board::create(&self.config, RandomMinefieldGenerator::new(seed))?;
        self.games_played = self.games_played.saturating_add(1);
        log::debug!("New game #{} (seed {})", self.games_played, seed);
        Ok(())
    }
}
