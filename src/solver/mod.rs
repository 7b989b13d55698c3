mod forgetful;
mod stats;
mod tree;

pub use self::stats::Stats;

use std::fmt;
use std::fmt::{Debug, Formatter};

use log::debug;
use typed_arena::Arena;

use crate::board::Board;
use crate::config::SolverConfig;
use crate::path::Path;
use crate::Solve;

use self::tree::TreeResult;

/// Exactly one of: a path (shortest among paths discoverable within the
/// configured budgets), a dead-end depth (no branch survives past that
/// many levels, regardless of budget), or not-found (both budgets
/// consumed without reaching the goal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved(Path),
    DeadEnd(usize),
    NotFound,
}

pub struct SolverOk {
    pub outcome: Outcome,
    pub stats: Stats,
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Solved(ref path) => writeln!(f, "solved in {}: {}", path.len(), path)?,
            Outcome::DeadEnd(depth) => writeln!(f, "dead end after {}", depth)?,
            Outcome::NotFound => writeln!(f, "not found")?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Board {
    fn solve(&self, config: &SolverConfig) -> SolverOk {
        solve(self, config)
    }
}

/// Memorizing every seen state is only affordable for a bounded number of
/// levels, so the solve runs in two stages: a bounded breadth-first tree
/// build, then - if the budget ran out with live branches left - a
/// heuristic-ordered depth-first continuation from the frontier.
pub fn solve(board: &Board, config: &SolverConfig) -> SolverOk {
    let mut stats = Stats::new();

    if board.start() == board.goal() {
        return SolverOk {
            outcome: Outcome::Solved(Path::default()),
            stats,
        };
    }

    debug!("building tree with {} levels", config.max_levels);
    let arena = Arena::new();
    let tree = match tree::build_tree(board, &arena, config.max_levels, &mut stats) {
        TreeResult::Solved(path) => {
            return SolverOk {
                outcome: Outcome::Solved(path),
                stats,
            };
        }
        TreeResult::DeadEnd(depth) => {
            return SolverOk {
                outcome: Outcome::DeadEnd(depth),
                stats,
            };
        }
        TreeResult::OutOfLevels(tree) => tree,
    };

    debug!(
        "no solution within {} levels, forgetful search {} levels deeper",
        tree.height, config.extra_depth
    );
    let outcome = match forgetful::forgetful_search(board, &tree, config.extra_depth, &mut stats) {
        Some(path) => Outcome::Solved(path),
        None => Outcome::NotFound,
    };
    SolverOk { outcome, stats }
}
