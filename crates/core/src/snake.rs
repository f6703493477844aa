//! Snake body - ordered cells, head first
//!
//! The body is a ring buffer so that advancing (push head, pop tail) is O(1).

use std::collections::VecDeque;

use crate::types::{Direction, Position, GRID_HEIGHT, GRID_WIDTH, INITIAL_SNAKE_LEN};

/// Direction of a freshly spawned snake
pub const START_DIRECTION: Direction = Direction::Right;

/// Head cell of a freshly spawned snake (grid center)
pub const START_HEAD: Position = Position::new(GRID_WIDTH / 2, GRID_HEIGHT / 2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Snake at the start position, laid out horizontally behind the head
    pub fn at_start() -> Self {
        let (dx, dy) = START_DIRECTION.delta();
        let body = (0..INITIAL_SNAKE_LEN as i32)
            .map(|i| Position::new(START_HEAD.x - dx * i, START_HEAD.y - dy * i))
            .collect();
        Self { body }
    }

    /// Build a snake from explicit segments (head first).
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_segments(segments: impl IntoIterator<Item = Position>) -> Option<Self> {
        let body: VecDeque<Position> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self { body })
    }

    pub fn head(&self) -> Position {
        // Non-empty by construction.
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Check if any segment, tail included, occupies `pos`
    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Segments from head to tail
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    /// Grow at the head
    pub(crate) fn push_head(&mut self, pos: Position) {
        self.body.push_front(pos);
    }

    /// Drop the tail segment, keeping at least the head
    pub(crate) fn pop_tail(&mut self) -> Option<Position> {
        if self.body.len() <= 1 {
            return None;
        }
        self.body.pop_back()
    }

    /// True if no two segments share a cell
    pub fn is_self_disjoint(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.body.len());
        self.body.iter().all(|p| seen.insert(*p))
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::at_start()
    }
}
