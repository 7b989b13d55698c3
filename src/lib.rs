// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod board;
pub mod config;
pub mod data;
pub mod formatter;
pub mod parser;
pub mod path;
pub mod solver;
pub mod state;
pub mod walkthrough;

mod utils;

use std::error::Error;

use crate::board::Board;
use crate::config::SolverConfig;
use crate::solver::SolverOk;

pub trait LoadBoard {
    fn load_board(&self) -> Result<Board, Box<dyn Error>>;
}

impl<T: AsRef<std::path::Path>> LoadBoard for T {
    fn load_board(&self) -> Result<Board, Box<dyn Error>> {
        let text = utils::read_file(self)?;
        let board = text.parse()?;
        Ok(board)
    }
}

pub trait Solve {
    fn solve(&self, config: &SolverConfig) -> SolverOk;
}

#[cfg(test)]
mod tests {
    use crate::solver::Outcome;
    use crate::walkthrough;

    use super::*;

    #[test]
    fn test_levels() {
        let solvable = [
            ("levels/01-simplest.txt", 1),
            ("levels/02-corner.txt", 4),
            ("levels/03-two-tiles.txt", 1),
            ("levels/05-destroyer-blocks.txt", 4),
        ];

        for &(level_path, steps) in &solvable {
            let board = level_path.load_board().unwrap();
            let result = board.solve(&SolverConfig::default());
            match result.outcome {
                Outcome::Solved(solution) => {
                    assert_eq!(solution.len(), steps, "{}", level_path);
                    // replaying what the solver returned must land
                    // exactly on the goal
                    let states = walkthrough::replay(&board, &solution);
                    assert_eq!(states.last(), Some(board.goal()), "{}", level_path);
                }
                other => panic!("{}: expected a solution, got {:?}", level_path, other),
            }
        }
    }

    #[test]
    fn test_dead_end_level() {
        let board = "levels/04-destroyer-dead-end.txt".load_board().unwrap();
        let result = board.solve(&SolverConfig::default());
        assert_eq!(result.outcome, Outcome::DeadEnd(0));
    }

    #[test]
    fn load_reports_missing_files() {
        assert!("levels/no-such-level.txt".load_board().is_err());
    }
}
