use std::io::{BufRead, Write};

use anyhow::Context;
use clearfield_core::{GameError, RevealOutcome, Session};

use crate::command::{Command, ParseCommandError};
use crate::render::BoardView;

const HELP: &str = "\
Commands:
  ROW COL   reveal a cell (also ROW,COL)
  new       start a new game with the same board size
  help      show this message
  quit      leave the game";

/// Terminal game loop over any line-based input and output.
pub struct Game<R, W> {
    session: Session,
    base_seed: u64,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Game<R, W> {
    pub fn new(session: Session, base_seed: u64, input: R, output: W) -> Self {
        Self {
            session,
            base_seed,
            input,
            output,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Plays until `quit` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.show_board()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush().context("failed to flush output")?;

            line.clear();
            if self.input.read_line(&mut line).context("failed to read input")? == 0 {
                writeln!(self.output)?;
                return Ok(());
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => return Ok(()),
                Ok(command) => self.apply(command)?,
                Err(ParseCommandError::Empty) => {}
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn apply(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Reveal((row, col)) => {
                log::debug!("reveal cell: {:?}", (row, col));
                match self.session.reveal(row, col) {
                    Ok(outcome) => self.report(outcome)?,
                    Err(GameError::InvalidPosition) => {
                        let (rows, cols) = self.session.board().size();
                        writeln!(
                            self.output,
                            "({row}, {col}) is off the board, rows go 0..{rows} and columns 0..{cols}"
                        )?;
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            Command::New => {
                let seed = self
                    .base_seed
                    .wrapping_add(u64::from(self.session.games_played()));
                self.session.reset(seed)?;
                log::info!("new game, seed {seed}");
                self.show_board()?;
            }
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn report(&mut self, outcome: RevealOutcome) -> anyhow::Result<()> {
        if !outcome.has_update() {
            writeln!(self.output, "Nothing changes.")?;
            return Ok(());
        }

        self.show_board()?;
        match outcome {
            RevealOutcome::HitMine => {
                writeln!(self.output, "Boom! Type `new` to play again.")?
            }
            RevealOutcome::Won => writeln!(self.output, "Board cleared! Type `new` to play again.")?,
            RevealOutcome::Revealed | RevealOutcome::NoChange => {}
        }
        Ok(())
    }

    fn show_board(&mut self) -> anyhow::Result<()> {
        write!(self.output, "{}", BoardView::new(self.session.board()))?;
        Ok(())
    }
}
