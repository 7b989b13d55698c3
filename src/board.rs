use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

use fnv::FnvHashSet;

use crate::data::{Dir, Pos, Tile, TileKind, KIND_COUNT};
use crate::state::TileSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardErr {
    NoObstacles,
    NoGoalTiles,
    NoStartTiles,
    MissingStartKind(TileKind),
    NotEnoughTiles,
    OpenBorder,
}

impl Display for BoardErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            BoardErr::NoObstacles => write!(f, "No obstacles on the board"),
            BoardErr::NoGoalTiles => write!(f, "No goal tiles on the board"),
            BoardErr::NoStartTiles => write!(f, "No start tiles on the board"),
            BoardErr::MissingStartKind(kind) => write!(
                f,
                "No corresponding start tile for goal tile {}",
                kind.goal_char()
            ),
            BoardErr::NotEnoughTiles => {
                write!(f, "Not enough start tiles for all goal tiles")
            }
            BoardErr::OpenBorder => write!(
                f,
                "Board is not surrounded by obstacle or destroyer blocks"
            ),
        }
    }
}

impl Error for BoardErr {}

/// Static, immutable description of one level.
///
/// Owns the transition function (`tilt`/`moves`) and the viability
/// filter (`has_no_future`) - everything the search needs to know
/// about the game mechanics.
#[derive(Debug, Clone)]
pub struct Board {
    width: u16,
    height: u16,
    obstacles: FnvHashSet<Pos>,
    destroyer_blocks: FnvHashSet<Pos>,
    start: TileSet,
    goal: TileSet,
    has_destroyer_tiles: bool,
    goal_counts: [usize; KIND_COUNT],
}

impl Board {
    pub fn new(
        width: u16,
        height: u16,
        obstacles: FnvHashSet<Pos>,
        destroyer_blocks: FnvHashSet<Pos>,
        start: TileSet,
        goal: TileSet,
    ) -> Result<Board, BoardErr> {
        if obstacles.is_empty() {
            return Err(BoardErr::NoObstacles);
        }
        if goal.is_empty() {
            return Err(BoardErr::NoGoalTiles);
        }
        if start.is_empty() {
            return Err(BoardErr::NoStartTiles);
        }

        let start_counts = start.kind_counts();
        let goal_counts = goal.kind_counts();
        for kind in 0..KIND_COUNT {
            if goal_counts[kind] > 0 && start_counts[kind] == 0 {
                return Err(BoardErr::MissingStartKind(TileKind(kind as u8)));
            }
        }
        // change this if a generator block is ever added
        if (0..KIND_COUNT).any(|kind| start_counts[kind] < goal_counts[kind]) {
            return Err(BoardErr::NotEnoughTiles);
        }

        let board = Board {
            width,
            height,
            obstacles,
            destroyer_blocks,
            has_destroyer_tiles: start.has_destroyer(),
            start,
            goal,
            goal_counts,
        };

        // tiles must not be able to fall off the edge
        for row in 0..height {
            for col in 0..width {
                let pos = board.pos(row, col);
                if board.is_border(pos)
                    && !board.obstacles.contains(&pos)
                    && !board.destroyer_blocks.contains(&pos)
                {
                    return Err(BoardErr::OpenBorder);
                }
            }
        }

        Ok(board)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn start(&self) -> &TileSet {
        &self.start
    }

    pub fn goal(&self) -> &TileSet {
        &self.goal
    }

    pub fn has_destroyer_tiles(&self) -> bool {
        self.has_destroyer_tiles
    }

    pub fn is_obstacle(&self, pos: Pos) -> bool {
        self.obstacles.contains(&pos)
    }

    pub fn is_destroyer_block(&self, pos: Pos) -> bool {
        self.destroyer_blocks.contains(&pos)
    }

    pub fn pos(&self, row: u16, col: u16) -> Pos {
        Pos(row * self.width + col)
    }

    /// Exact inverse of `pos`.
    pub fn coords(&self, pos: Pos) -> (u16, u16) {
        (pos.0 / self.width, pos.0 % self.width)
    }

    fn is_border(&self, pos: Pos) -> bool {
        let (row, col) = self.coords(pos);
        row == 0 || row == self.height - 1 || col == 0 || col == self.width - 1
    }

    /// The sealed border guarantees candidates never leave the grid.
    fn step(&self, pos: Pos, dir: Dir) -> Pos {
        let offset = match dir {
            Dir::Left => -1,
            Dir::Right => 1,
            Dir::Up => -i32::from(self.width),
            Dir::Down => i32::from(self.width),
        };
        Pos((i32::from(pos.0) + offset) as u16)
    }

    /// Tilts the whole board one cell in `dir` and returns the resulting state.
    ///
    /// Tiles closest to the direction of travel are relocated first -
    /// otherwise a tile could be judged blocked by a neighbor that moves
    /// out of the way this same step. Each tile's candidate cell is checked
    /// against the partially updated working list, then destroyer blocks
    /// and destroyer tiles remove what they caught.
    pub fn tilt(&self, state: &TileSet, dir: Dir) -> TileSet {
        // canonical order is ascending by position, which is what
        // left/up need; right/down process the reverse
        let mut tiles = state.tiles().to_vec();
        match dir {
            Dir::Right | Dir::Down => tiles.reverse(),
            Dir::Left | Dir::Up => {}
        }

        for i in 0..tiles.len() {
            let tile = tiles[i];
            let new_pos = self.step(tile.pos, dir);
            if self.can_enter(tile, new_pos, &tiles) {
                tiles[i].pos = new_pos;
            }
        }

        TileSet::new(self.destroy(tiles))
    }

    /// All four tilts in the canonical left, right, up, down order.
    pub fn moves(&self, state: &TileSet) -> [TileSet; 4] {
        [
            self.tilt(state, Dir::Left),
            self.tilt(state, Dir::Right),
            self.tilt(state, Dir::Up),
            self.tilt(state, Dir::Down),
        ]
    }

    fn can_enter(&self, tile: Tile, new_pos: Pos, tiles: &[Tile]) -> bool {
        if self.obstacles.contains(&new_pos) {
            return false;
        }
        // destroyer tiles cannot move through destroyer blocks,
        // normal tiles enter them and get removed afterwards
        if tile.is_destroyer() && self.destroyer_blocks.contains(&new_pos) {
            return false;
        }
        // any tile blocks any other tile; the processing order has already
        // let the occupant move away if it could
        !tiles.iter().any(|t| *t == new_pos)
    }

    fn destroy(&self, tiles: Vec<Tile>) -> Vec<Tile> {
        if self.has_destroyer_tiles {
            let destroyer_positions: Vec<Pos> = tiles
                .iter()
                .filter(|t| t.is_destroyer())
                .map(|t| t.pos)
                .collect();
            // destroyer tiles always survive
            tiles
                .into_iter()
                .filter(|t| {
                    t.is_destroyer()
                        || (!self.destroyer_blocks.contains(&t.pos)
                            && !destroyer_positions.contains(&t.pos))
                }).collect()
        } else {
            tiles
                .into_iter()
                .filter(|t| !self.destroyer_blocks.contains(&t.pos))
                .collect()
        }
    }

    /// True if `state` can never reach the goal anymore.
    ///
    /// A state with zero tiles is always hopeless. When the board can
    /// destroy tiles at all, a state that dropped below the goal's
    /// per-kind requirements is permanently unsolvable too - nothing
    /// regenerates tiles.
    pub fn has_no_future(&self, state: &TileSet) -> bool {
        if state.is_empty() {
            return true;
        }
        if (self.has_destroyer_tiles || !self.destroyer_blocks.is_empty())
            && !self.enough_tiles(state)
        {
            return true;
        }
        false
    }

    fn enough_tiles(&self, state: &TileSet) -> bool {
        let counts = state.kind_counts();
        (0..KIND_COUNT).all(|kind| counts[kind] >= self.goal_counts[kind])
    }
}
