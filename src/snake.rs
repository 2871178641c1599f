use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// Signed so that a head stepping off the board is still representable.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring position one unit along `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns true when `other` shares an edge with this position.
    #[must_use]
    pub fn is_adjacent_to(self, other: Self) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

/// Ordered snake segments, head first.
///
/// The body is never empty; every constructor seeds at least one segment.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `head`.
    #[must_use]
    pub fn new(head: Position) -> Self {
        Self {
            body: VecDeque::from([head]),
        }
    }

    /// Creates a straight snake of `length` cells with the head at `head`
    /// and the remaining segments trailing opposite to `facing`.
    #[must_use]
    pub fn straight(head: Position, facing: Direction, length: usize) -> Self {
        let behind = facing.opposite();
        let mut body = VecDeque::with_capacity(length.max(1));
        let mut cursor = head;

        body.push_back(cursor);
        for _ in 1..length {
            cursor = cursor.step(behind);
            body.push_back(cursor);
        }

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// An empty list is treated as a single segment at the origin.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        if segments.is_empty() {
            return Self::new(Position { x: 0, y: 0 });
        }

        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Moves the head to `new_head`; the tail is kept only when `grows`.
    pub fn advance(&mut self, new_head: Position, grows: bool) {
        self.body.push_front(new_head);
        if !grows {
            let _ = self.body.pop_back();
        }
    }

    /// Returns whether the snake may turn from `current` to `candidate`.
    ///
    /// A single segment has no neck to run into, so it may reverse.
    #[must_use]
    pub fn accepts_direction(&self, current: Direction, candidate: Direction) -> bool {
        self.body.len() == 1 || candidate != current.opposite()
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments; no constructor produces one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &Position> + ExactSizeIterator {
        self.body.iter()
    }

    /// Returns true when consecutive segments are grid neighbours.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.body
            .iter()
            .zip(self.body.iter().skip(1))
            .all(|(a, b)| a.is_adjacent_to(*b))
    }
}
