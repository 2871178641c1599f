use rand::Rng;

use crate::config::GridSize;
use crate::error::GameError;
use crate::snake::{Position, Snake};

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Spawns food in an unoccupied cell.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: GridSize,
        snake: &Snake,
    ) -> Result<Self, GameError> {
        spawn_position(rng, bounds, snake).map(Self::new)
    }
}

/// Picks a uniformly random cell not occupied by the snake.
///
/// Marks the body on an occupancy bitmap once, then scans the grid against
/// it, so the cost is O(cells + body). A full board yields
/// `NoSpaceAvailable` instead of retrying.
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Result<Position, GameError> {
    let total = bounds.total_cells();
    let width = usize::from(bounds.width);

    let mut occupied = vec![false; total];
    let mut occupied_count = 0;
    for segment in snake.segments() {
        if !segment.is_within_bounds(bounds) {
            continue;
        }
        let (Ok(x), Ok(y)) = (usize::try_from(segment.x), usize::try_from(segment.y)) else {
            continue;
        };
        let index = y * width + x;
        if !occupied[index] {
            occupied[index] = true;
            occupied_count += 1;
        }
    }

    let free = total - occupied_count;
    if free == 0 {
        return Err(GameError::NoSpaceAvailable);
    }

    let mut remaining = rng.gen_range(0..free);
    for (index, taken) in occupied.iter().enumerate() {
        if *taken {
            continue;
        }
        if remaining == 0 {
            return Ok(cell_at(index, width));
        }
        remaining -= 1;
    }

    Err(GameError::NoSpaceAvailable)
}

fn cell_at(index: usize, width: usize) -> Position {
    Position {
        x: i32::try_from(index % width).unwrap_or(i32::MAX),
        y: i32::try_from(index / width).unwrap_or(i32::MAX),
    }
}
