use std::cmp::Ordering;

use log::debug;

use crate::board::Board;
use crate::data::{Dir, Pos, TileKind, DIRECTIONS, KIND_COUNT};
use crate::path::Path;
use crate::state::TileSet;

use super::stats::Stats;
use super::tree::{Node, Tree};

/// Ordering heuristic for the fallback stage: per tile kind present in
/// either the state or the goal, the product of all pairwise Euclidean
/// distances (+1 to avoid zero-distance degeneracy) between that kind's
/// positions here and in the goal, summed across kinds. Same-kind tiles
/// are interchangeable so no assignment is attempted - this is not
/// admissible and not a bound, it only decides exploration order.
pub(crate) fn goal_distance(board: &Board, state: &TileSet) -> f64 {
    let mut total = 0.0;
    for kind in 0..KIND_COUNT {
        let kind = TileKind(kind as u8);
        let state_positions: Vec<(f64, f64)> = positions_of(board, state, kind);
        let goal_positions: Vec<(f64, f64)> = positions_of(board, board.goal(), kind);
        if state_positions.is_empty() && goal_positions.is_empty() {
            continue;
        }

        let mut product = 1.0;
        for &(sr, sc) in &state_positions {
            for &(gr, gc) in &goal_positions {
                product *= ((sr - gr).powi(2) + (sc - gc).powi(2)).sqrt() + 1.0;
            }
        }
        total += product;
    }
    total
}

fn positions_of(board: &Board, state: &TileSet, kind: TileKind) -> Vec<(f64, f64)> {
    state
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| coords_f64(board, t.pos))
        .collect()
}

fn coords_f64(board: &Board, pos: Pos) -> (f64, f64) {
    let (row, col) = board.coords(pos);
    (f64::from(row), f64::from(col))
}

/// Continues from the tree's frontier with depth-first searches of up to
/// `extra_depth` additional steps each, closest-looking leaves first.
///
/// No seen set is kept (bounded memory, unbounded revisits); the
/// remaining-depth budget is the only loop prevention. Once any solution
/// is found the budget tightens so later exploration can only yield a
/// strictly shorter path. Returns the best path found, root inclusive.
pub(crate) fn forgetful_search(
    board: &Board,
    tree: &Tree<'_>,
    extra_depth: usize,
    stats: &mut Stats,
) -> Option<Path> {
    let mut scored: Vec<(f64, &Node<'_>)> = tree
        .leaves
        .iter()
        .map(|&node| (goal_distance(board, &node.state), node))
        .collect();
    scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let mut budget = extra_depth;
    let mut best: Option<Path> = None;

    for &(_, leaf) in &scored {
        if budget == 0 {
            break;
        }

        // the recursion restated as an explicit work stack so the depth
        // is bounded by the budget, not the call stack
        let mut stack: Vec<(TileSet, Vec<Dir>)> = vec![(leaf.state.clone(), Vec::new())];
        while let Some((state, dirs)) = stack.pop() {
            if dirs.len() >= budget {
                // the budget shrank after this entry was pushed
                continue;
            }

            let moves = Vec::from(board.moves(&state));
            for (&dir, new_state) in DIRECTIONS.iter().zip(moves) {
                stats.add_created(tree.height + dirs.len() + 1);
                if board.has_no_future(&new_state) {
                    continue;
                }

                let mut new_dirs = dirs.clone();
                new_dirs.push(dir);
                if new_dirs.len() <= budget && new_state == *board.goal() {
                    // branch and bound: only strictly shorter solutions count now
                    budget = new_dirs.len() - 1;
                    let mut path = leaf.path_from_root();
                    path.extend(&new_dirs);
                    debug!(
                        "forgetful search found a {} step path, extra budget now {}",
                        path.len(),
                        budget
                    );
                    best = Some(path);
                    continue;
                }
                if new_dirs.len() < budget {
                    stack.push((new_state, new_dirs));
                }
            }

            if budget == 0 {
                break;
            }
        }
    }

    best
}
