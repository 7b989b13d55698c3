use std::slice;

use crate::data::{Pos, Tile, KIND_COUNT};

/// One configuration of all movable pieces.
///
/// Kept sorted and duplicate-free so two sets built from the same
/// (kind, position) pairs in any order compare and hash equal - this is
/// the deduplication key and the goal-comparison key. The sort order
/// (ascending by position) is also what the tilt simulation consumes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileSet {
    tiles: Vec<Tile>,
}

impl TileSet {
    pub fn new(mut tiles: Vec<Tile>) -> TileSet {
        tiles.sort();
        tiles.dedup();
        TileSet { tiles }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn iter(&self) -> slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    pub fn contains_pos(&self, pos: Pos) -> bool {
        self.tiles.iter().any(|t| *t == pos)
    }

    pub fn has_destroyer(&self) -> bool {
        self.tiles.iter().any(|t| t.is_destroyer())
    }

    /// Number of tiles per kind, indexed by kind.
    pub fn kind_counts(&self) -> [usize; KIND_COUNT] {
        let mut counts = [0; KIND_COUNT];
        for tile in &self.tiles {
            counts[usize::from(tile.kind.0)] += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a TileSet {
    type Item = &'a Tile;
    type IntoIter = slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}
