use proptest::prelude::*;

use snek::config::GridSize;
use snek::game::{GameState, GameStatus, StepOutcome};
use snek::input::Direction;

fn direction() -> impl Strategy<Value = Option<Direction>> {
    prop_oneof![
        Just(None),
        Just(Some(Direction::Up)),
        Just(Some(Direction::Down)),
        Just(Some(Direction::Left)),
        Just(Some(Direction::Right)),
    ]
}

proptest! {
    #[test]
    fn random_play_keeps_body_and_food_consistent(
        seed in any::<u64>(),
        width in 3u16..12,
        height in 3u16..12,
        inputs in prop::collection::vec(direction(), 1..200),
    ) {
        let mut state = GameState::new_with_seed(GridSize::new(width, height), seed);

        for pending in inputs {
            let length_before = state.snake.len();
            let score_before = state.score;

            let Ok(outcome) = state.step(pending) else {
                prop_assert_ne!(state.status, GameStatus::Running);
                break;
            };

            match outcome {
                StepOutcome::Moved => prop_assert_eq!(state.snake.len(), length_before),
                StepOutcome::Ate | StepOutcome::Won => {
                    prop_assert_eq!(state.snake.len(), length_before + 1);
                    prop_assert_eq!(state.score, score_before + 1);
                }
                StepOutcome::Died(_) => {
                    prop_assert_eq!(state.snake.len(), length_before);
                    prop_assert_eq!(state.score, score_before);
                }
            }

            if let Some(food) = state.food {
                prop_assert!(!state.snake.occupies(food.position));
            }
            prop_assert!(state.snake.is_connected());
            prop_assert!(state.snake.segments().all(|cell| cell.is_within_bounds(state.bounds())));
        }
    }
}
