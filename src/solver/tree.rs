use fnv::FnvHashSet;
use log::debug;
use typed_arena::Arena;

use crate::board::Board;
use crate::data::{Dir, DIRECTIONS};
use crate::path::Path;
use crate::state::TileSet;

use super::stats::Stats;

/// One visited state and how it was reached.
///
/// Nodes only point at their parents - children are never stored and a
/// winning path is reconstructed by walking up. All nodes live in one
/// arena so superseded frontiers stay valid as ancestors.
pub(crate) struct Node<'a> {
    pub(crate) state: TileSet,
    parent: Option<&'a Node<'a>>,
    dir: Option<Dir>,
}

impl<'a> Node<'a> {
    fn root(state: TileSet) -> Node<'a> {
        Node {
            state,
            parent: None,
            dir: None,
        }
    }

    fn child(state: TileSet, parent: &'a Node<'a>, dir: Dir) -> Node<'a> {
        Node {
            state,
            parent: Some(parent),
            dir: Some(dir),
        }
    }

    /// Edge labels from the root (exclusive) down to this node.
    pub(crate) fn path_from_root(&self) -> Path {
        let mut dirs = Vec::new();
        let mut node = self;
        while let (Some(parent), Some(dir)) = (node.parent, node.dir) {
            dirs.push(dir);
            node = parent;
        }
        dirs.reverse();
        Path::new(dirs)
    }
}

/// The current leaves plus every state ever enqueued in this run.
/// `seen` grows monotonically, it is never pruned.
pub(crate) struct Tree<'a> {
    pub(crate) leaves: Vec<&'a Node<'a>>,
    pub(crate) seen: FnvHashSet<TileSet>,
    pub(crate) height: usize,
}

pub(crate) enum TreeResult<'a> {
    /// Found inside the tree - optimal, breadth-first expansion hits
    /// the goal at minimum depth first.
    Solved(Path),
    /// Every branch dead-ended at once - no solution exists past this
    /// many levels no matter the budget.
    DeadEnd(usize),
    /// Budget exhausted, the tree is handed to the fallback stage.
    OutOfLevels(Tree<'a>),
}

/// Expands the tree level by level up to `max_levels`, deduplicating
/// states globally.
pub(crate) fn build_tree<'a>(
    board: &Board,
    arena: &'a Arena<Node<'a>>,
    max_levels: usize,
    stats: &mut Stats,
) -> TreeResult<'a> {
    let root: &Node<'_> = arena.alloc(Node::root(board.start().clone()));
    stats.add_created(0);
    stats.add_unique(0);

    let mut seen = FnvHashSet::default();
    seen.insert(root.state.clone());
    let mut leaves: Vec<&Node<'_>> = vec![root];
    let mut height = 0;

    for level in 0..max_levels {
        let depth = level + 1;
        let mut new_leaves = Vec::new();

        for &node in &leaves {
            let moves = Vec::from(board.moves(&node.state));
            for (&dir, new_state) in DIRECTIONS.iter().zip(moves) {
                stats.add_created(depth);
                if board.has_no_future(&new_state) {
                    continue;
                }
                if new_state == *board.goal() {
                    return TreeResult::Solved(Node::child(new_state, node, dir).path_from_root());
                }
                if !seen.insert(new_state.clone()) {
                    stats.add_duplicate(depth);
                    continue;
                }
                stats.add_unique(depth);
                new_leaves.push(&*arena.alloc(Node::child(new_state, node, dir)));
            }
        }

        if new_leaves.is_empty() {
            return TreeResult::DeadEnd(level);
        }
        leaves = new_leaves;
        height = depth;
        debug!(
            "tree level {}: {} leaves, {} states seen",
            height,
            leaves.len(),
            seen.len()
        );
    }

    TreeResult::OutOfLevels(Tree {
        leaves,
        seen,
        height,
    })
}
