use crate::board::Board;
use crate::path::Path;
use crate::state::TileSet;

/// Replays `path` against the board's transition function step by step.
///
/// Returns every state, the start included, so the result has one more
/// element than the path has steps. Because it goes through `Board::tilt`
/// this is bit-identical to what the search computed.
pub fn replay(board: &Board, path: &Path) -> Vec<TileSet> {
    let mut states = Vec::with_capacity(path.len() + 1);
    let mut current = board.start().clone();
    for &dir in path {
        let next = board.tilt(&current, dir);
        states.push(current);
        current = next;
    }
    states.push(current);
    states
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_is_just_the_start() {
        let board: Board = "#####\n#aA #\n#####".parse().unwrap();
        let states = replay(&board, &Path::default());
        assert_eq!(states, [board.start().clone()]);
    }

    #[test]
    fn replay_lands_on_the_goal() {
        let board: Board = "#####\n#aA #\n#####".parse().unwrap();
        let path: Path = "→".parse().unwrap();
        let states = replay(&board, &path);
        assert_eq!(states.len(), 2);
        assert_eq!(states.first(), Some(board.start()));
        assert_eq!(states.last(), Some(board.goal()));
    }
}
