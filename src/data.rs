use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Maximum number of rows/columns.
pub const MAX_SIZE: usize = 255;

/// Number of distinguishable normal tile kinds (`a`-`z` / `A`-`Z`).
pub const NORMAL_KINDS: u8 = 26;

/// Kinds 0-25 are normal tiles, kind 26 is the destroyer tile.
pub const KIND_COUNT: usize = NORMAL_KINDS as usize + 1;

/// A cell index counting row-first from the top left: `pos = row * width + col`.
///
/// Only `Board` knows the width so converting to (row, col) and back
/// lives there - see `Board::coords` and `Board::pos`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos(pub u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Left,
    Right,
    Up,
    Down,
}

/// The canonical direction order - everywhere a path is encoded
/// as indices, 0-3 means left, right, up, down.
pub const DIRECTIONS: [Dir; 4] = [Dir::Left, Dir::Right, Dir::Up, Dir::Down];

impl Dir {
    pub fn index(self) -> usize {
        match self {
            Dir::Left => 0,
            Dir::Right => 1,
            Dir::Up => 2,
            Dir::Down => 3,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Left => write!(f, "←"),
            Dir::Right => write!(f, "→"),
            Dir::Up => write!(f, "↑"),
            Dir::Down => write!(f, "↓"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileKind(pub u8);

impl TileKind {
    pub const DESTROYER: TileKind = TileKind(NORMAL_KINDS);

    pub fn is_destroyer(self) -> bool {
        self == TileKind::DESTROYER
    }

    pub fn from_start_char(c: char) -> Option<TileKind> {
        match c {
            'a'..='z' => Some(TileKind(c as u8 - b'a')),
            '*' => Some(TileKind::DESTROYER),
            _ => None,
        }
    }

    pub fn from_goal_char(c: char) -> Option<TileKind> {
        match c {
            'A'..='Z' => Some(TileKind(c as u8 - b'A')),
            _ => None,
        }
    }

    pub fn start_char(self) -> char {
        if self.is_destroyer() {
            '*'
        } else {
            (b'a' + self.0) as char
        }
    }

    /// Goal cells exist for normal kinds only.
    pub fn goal_char(self) -> char {
        debug_assert!(!self.is_destroyer());
        (b'A' + self.0) as char
    }
}

/// A movable piece - two tiles are equal iff both kind and position match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub kind: TileKind,
    pub pos: Pos,
}

impl Tile {
    pub fn new(kind: TileKind, pos: Pos) -> Tile {
        Tile { kind, pos }
    }

    pub fn is_destroyer(self) -> bool {
        self.kind.is_destroyer()
    }
}

/// For membership tests against raw positions.
impl PartialEq<Pos> for Tile {
    fn eq(&self, other: &Pos) -> bool {
        self.pos == *other
    }
}

/// Position-first so sorting a tile list gives the order
/// the tilt simulation needs.
impl Ord for Tile {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.pos, self.kind).cmp(&(other.pos, other.kind))
    }
}

impl PartialOrd for Tile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_indices_match_canonical_order() {
        for (i, &dir) in DIRECTIONS.iter().enumerate() {
            assert_eq!(dir.index(), i);
        }
    }

    #[test]
    fn dir_arrows() {
        let arrows: String = DIRECTIONS.iter().map(Dir::to_string).collect();
        assert_eq!(arrows, "←→↑↓");
    }

    #[test]
    fn kind_chars() {
        assert_eq!(TileKind::from_start_char('a'), Some(TileKind(0)));
        assert_eq!(TileKind::from_start_char('z'), Some(TileKind(25)));
        assert_eq!(TileKind::from_start_char('*'), Some(TileKind::DESTROYER));
        assert_eq!(TileKind::from_start_char('A'), None);
        assert_eq!(TileKind::from_goal_char('A'), Some(TileKind(0)));
        assert_eq!(TileKind::from_goal_char('a'), None);
        assert_eq!(TileKind(1).start_char(), 'b');
        assert_eq!(TileKind(1).goal_char(), 'B');
        assert_eq!(TileKind::DESTROYER.start_char(), '*');
    }

    #[test]
    fn tile_equality() {
        let tile = Tile::new(TileKind(3), Pos(7));
        assert_eq!(tile, Tile::new(TileKind(3), Pos(7)));
        assert_ne!(tile, Tile::new(TileKind(4), Pos(7)));
        assert_ne!(tile, Tile::new(TileKind(3), Pos(8)));
        assert_eq!(tile, Pos(7));
        assert_ne!(tile, Pos(8));
    }

    #[test]
    fn tile_ordering_is_by_position() {
        let mut tiles = vec![
            Tile::new(TileKind(0), Pos(9)),
            Tile::new(TileKind(5), Pos(2)),
            Tile::new(TileKind(1), Pos(4)),
        ];
        tiles.sort();
        let positions: Vec<_> = tiles.iter().map(|t| t.pos).collect();
        assert_eq!(positions, [Pos(2), Pos(4), Pos(9)]);
    }
}
