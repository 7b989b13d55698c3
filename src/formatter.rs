use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use crate::board::Board;
use crate::state::TileSet;

/// Renders a board with an arbitrary tile configuration overlaid -
/// tiles win over goal markers when they share a cell.
#[derive(Clone, Copy)]
pub struct BoardFormatter<'a> {
    board: &'a Board,
    tiles: &'a TileSet,
}

impl Board {
    pub fn format<'a>(&'a self, tiles: &'a TileSet) -> BoardFormatter<'a> {
        BoardFormatter { board: self, tiles }
    }
}

impl<'a> Display for BoardFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let board = self.board;
        for row in 0..board.height() {
            for col in 0..board.width() {
                let pos = board.pos(row, col);
                let cell = if let Some(tile) = self.tiles.iter().find(|t| **t == pos) {
                    tile.kind.start_char()
                } else if board.is_obstacle(pos) {
                    '#'
                } else if board.is_destroyer_block(pos) {
                    '+'
                } else if let Some(goal) = board.goal().iter().find(|t| **t == pos) {
                    goal.kind.goal_char()
                } else {
                    ' '
                };
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a> Debug for BoardFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(self.start()))
    }
}

#[cfg(test)]
mod tests {
    use crate::data::Dir;

    use super::*;

    #[test]
    fn round_trips_the_parsed_text() {
        let text = "#####\n#a*A#\n#+  #\n#####\n";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.to_string(), text);
        assert_eq!(board.format(board.start()).to_string(), text);
    }

    #[test]
    fn tiles_cover_goal_markers() {
        let board: Board = "#####\n#aA #\n#####\n".parse().unwrap();
        let moved = board.tilt(board.start(), Dir::Right);
        assert_eq!(board.format(&moved).to_string(), "#####\n# a #\n#####\n");
    }
}
