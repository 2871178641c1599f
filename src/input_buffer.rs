use std::sync::atomic::{AtomicU8, Ordering};

use crate::input::Direction;

const EMPTY: u8 = 0;

/// Single-slot pending direction shared between the key handler and the tick.
///
/// The slot is one atomic byte: a push and a take never observe a torn
/// value, and both work through `&self`.
#[derive(Debug, Default)]
pub struct InputBuffer {
    slot: AtomicU8,
}

impl InputBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `direction`, replacing any value not yet consumed.
    pub fn push(&self, direction: Direction) {
        self.slot.store(encode(direction), Ordering::Release);
    }

    /// Returns the stored direction and empties the slot.
    pub fn take_and_clear(&self) -> Option<Direction> {
        decode(self.slot.swap(EMPTY, Ordering::AcqRel))
    }

    /// Returns the stored direction without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<Direction> {
        decode(self.slot.load(Ordering::Acquire))
    }

    /// Drops any pending direction.
    pub fn clear(&self) {
        self.slot.store(EMPTY, Ordering::Release);
    }
}

fn encode(direction: Direction) -> u8 {
    match direction {
        Direction::Up => 1,
        Direction::Down => 2,
        Direction::Left => 3,
        Direction::Right => 4,
    }
}

fn decode(raw: u8) -> Option<Direction> {
    match raw {
        1 => Some(Direction::Up),
        2 => Some(Direction::Down),
        3 => Some(Direction::Left),
        4 => Some(Direction::Right),
        _ => None,
    }
}
