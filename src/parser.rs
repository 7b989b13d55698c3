use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use fnv::FnvHashSet;

use crate::board::{Board, BoardErr};
use crate::data::{Pos, Tile, TileKind, MAX_SIZE};
use crate::state::TileSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    InvalidCell(usize, usize),
    TooLarge,
    Board(BoardErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::InvalidCell(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::TooLarge => write!(f, "Board larger than 255 rows/columns"),
            ParserErr::Board(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<BoardErr> for ParserErr {
    fn from(err: BoardErr) -> ParserErr {
        ParserErr::Board(err)
    }
}

impl FromStr for Board {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses the text board format: `#` obstacle, `+` destroyer block,
/// `a`-`z` start tiles, `*` destroyer start tile, `A`-`Z` goal tiles.
///
/// Cells past the end of a short line count as empty. The resulting
/// board is validated (sealed border, matching tile kinds and counts)
/// so an `Ok` here is ready to search.
pub fn parse(text: &str) -> Result<Board, ParserErr> {
    // trim so we can specify boards using raw strings more easily
    let text = text.trim_matches('\n').trim_end();

    let lines: Vec<&str> = text.lines().collect();
    let height = lines.len();
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    if height > MAX_SIZE || width > MAX_SIZE {
        return Err(ParserErr::TooLarge);
    }

    let mut obstacles = FnvHashSet::default();
    let mut destroyer_blocks = FnvHashSet::default();
    let mut start = Vec::new();
    let mut goal = Vec::new();

    for (r, line) in lines.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            let pos = Pos((r * width + c) as u16);
            match ch {
                '#' => {
                    obstacles.insert(pos);
                }
                '+' => {
                    destroyer_blocks.insert(pos);
                }
                ' ' => {}
                _ => {
                    if let Some(kind) = TileKind::from_start_char(ch) {
                        start.push(Tile::new(kind, pos));
                    } else if let Some(kind) = TileKind::from_goal_char(ch) {
                        goal.push(Tile::new(kind, pos));
                    } else {
                        return Err(ParserErr::InvalidCell(r, c));
                    }
                }
            }
        }
    }

    let board = Board::new(
        width as u16,
        height as u16,
        obstacles,
        destroyer_blocks,
        TileSet::new(start),
        TileSet::new(goal),
    )?;
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_cell_types() {
        let board: Board = r"
######
#a*+A#
######
"
        .parse()
        .unwrap();

        assert_eq!(board.width(), 6);
        assert_eq!(board.height(), 3);
        assert!(board.is_obstacle(board.pos(0, 0)));
        assert!(board.is_destroyer_block(board.pos(1, 3)));
        assert_eq!(board.start().len(), 2);
        assert!(board.start().contains_pos(board.pos(1, 1)));
        assert!(board.start().contains_pos(board.pos(1, 2)));
        assert!(board.has_destroyer_tiles());
        assert_eq!(board.goal().len(), 1);
        assert_eq!(board.goal().tiles()[0], Tile::new(TileKind(0), board.pos(1, 4)));
    }

    #[test]
    fn short_lines_count_as_empty() {
        // the missing border cell is an empty cell, not an obstacle
        let err = "####\n#aA\n####".parse::<Board>().unwrap_err();
        assert_eq!(err, ParserErr::Board(BoardErr::OpenBorder));
    }

    #[test]
    fn invalid_cell() {
        let err = r"
#####
#a?A#
#####
"
        .parse::<Board>()
        .unwrap_err();
        assert_eq!(err, ParserErr::InvalidCell(1, 2));
    }

    #[test]
    fn too_large() {
        let wide = "#".repeat(256);
        assert_eq!(wide.parse::<Board>().unwrap_err(), ParserErr::TooLarge);
    }

    #[test]
    fn validation_errors_are_reported() {
        let empty_board = "   \n   ".parse::<Board>().unwrap_err();
        assert_eq!(empty_board, ParserErr::Board(BoardErr::NoObstacles));

        let no_goals = r"
####
#a #
####
"
        .parse::<Board>()
        .unwrap_err();
        assert_eq!(no_goals, ParserErr::Board(BoardErr::NoGoalTiles));

        let no_start = r"
####
#A #
####
"
        .parse::<Board>()
        .unwrap_err();
        assert_eq!(no_start, ParserErr::Board(BoardErr::NoStartTiles));
    }
}
