use std::collections::HashSet;

use crate::infra::Position;

/// Impassable cells of a bounded grid. Cells outside `width` x `height`
/// count as blocked.
#[derive(Clone, Debug)]
pub struct WallSet {
    pub width: i32,
    pub height: i32,
    cells: HashSet<Position>,
}

impl WallSet {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            cells: HashSet::new(),
        }
    }

    pub fn insert(&mut self, pos: Position) -> bool {
        self.cells.insert(pos)
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.cells.contains(pos)
    }

    pub fn in_bounds(&self, pos: &Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    pub fn is_blocked(&self, pos: &Position) -> bool {
        !self.in_bounds(pos) || self.cells.contains(pos)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
