//! Pure collision predicates evaluated before the snake moves.

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// True when `cell` lies outside the grid.
#[must_use]
pub fn hits_wall(cell: Position, grid: GridSize) -> bool {
    !cell.is_within_bounds(grid)
}

/// True when `next_head` runs into the body.
///
/// When the snake is not growing, the current tail vacates its cell during
/// this step, so moving into it is legal.
#[must_use]
pub fn hits_self(next_head: Position, body: &Snake, grows: bool) -> bool {
    let checked = if grows { body.len() } else { body.len() - 1 };
    body.segments().take(checked).any(|segment| *segment == next_head)
}

#[must_use]
pub fn eats_food(next_head: Position, food: Position) -> bool {
    next_head == food
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::snake::{Position, Snake};

    use super::{eats_food, hits_self, hits_wall};

    fn square_loop() -> Snake {
        // Head at (1,1) heading Down would enter the tail at (1,2).
        Snake::from_segments(vec![
            Position { x: 1, y: 1 },
            Position { x: 2, y: 1 },
            Position { x: 2, y: 2 },
            Position { x: 1, y: 2 },
        ])
    }

    #[test]
    fn wall_detection_covers_all_edges() {
        let grid = GridSize::new(4, 3);

        assert!(hits_wall(Position { x: -1, y: 0 }, grid));
        assert!(hits_wall(Position { x: 0, y: -1 }, grid));
        assert!(hits_wall(Position { x: 4, y: 0 }, grid));
        assert!(hits_wall(Position { x: 0, y: 3 }, grid));
        assert!(!hits_wall(Position { x: 3, y: 2 }, grid));
    }

    #[test]
    fn moving_into_vacating_tail_is_safe() {
        let snake = square_loop();
        assert!(!hits_self(Position { x: 1, y: 2 }, &snake, false));
    }

    #[test]
    fn moving_into_tail_while_growing_collides() {
        let snake = square_loop();
        assert!(hits_self(Position { x: 1, y: 2 }, &snake, true));
    }

    #[test]
    fn moving_into_middle_segment_collides() {
        let snake = square_loop();
        assert!(hits_self(Position { x: 2, y: 2 }, &snake, false));
    }

    #[test]
    fn single_segment_never_hits_itself_when_not_growing() {
        let snake = Snake::new(Position { x: 3, y: 3 });
        assert!(!hits_self(Position { x: 3, y: 3 }, &snake, false));
    }

    #[test]
    fn food_is_eaten_on_exact_match() {
        assert!(eats_food(Position { x: 2, y: 2 }, Position { x: 2, y: 2 }));
        assert!(!eats_food(Position { x: 2, y: 2 }, Position { x: 2, y: 3 }));
    }
}
