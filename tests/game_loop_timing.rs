use std::time::Duration;

use snek::config::GridSize;
use snek::food::Food;
use snek::game::{GameState, GameStatus};
use snek::game_loop::{GameLoop, LoopConfig, LoopPhase};
use snek::input::Direction;
use snek::snake::Position;

const TICK: Duration = Duration::from_millis(50);

fn running_loop() -> GameLoop {
    let mut state = GameState::new_with_seed(GridSize::new(60, 30), 7);
    state.food = Some(Food::new(Position { x: 0, y: 0 }));
    let mut game = GameLoop::new(
        state,
        LoopConfig {
            base_tick: TICK,
            speed_up: false,
            ..LoopConfig::default()
        },
    );
    game.start().expect("fresh game starts");
    game
}

#[test]
fn stall_of_ten_ticks_runs_at_most_five_steps() {
    let mut game = running_loop();
    let head_before = game.state().snake.head();

    let steps = game.on_frame(TICK * 11);

    assert_eq!(steps, 5);
    assert_eq!(game.state().snake.head().x, head_before.x + 5);
    assert_eq!(game.on_frame(Duration::from_millis(1)), 0);
}

#[test]
fn one_direction_change_per_tick() {
    let mut game = running_loop();
    let head = game.state().snake.head();

    game.push_direction(Direction::Up);
    game.push_direction(Direction::Down);
    assert_eq!(game.on_frame(TICK), 1);

    assert_eq!(game.state().direction, Direction::Down);
    assert_eq!(game.state().snake.head(), Position { x: head.x, y: head.y + 1 });
    assert_eq!(game.pending_direction(), None);
}

#[test]
fn pause_resume_and_reset_lifecycle() {
    let mut game = running_loop();
    game.on_frame(TICK * 2);

    game.toggle_pause();
    assert_eq!(game.phase(), LoopPhase::Paused);
    let head = game.state().snake.head();
    assert_eq!(game.on_frame(TICK * 3), 0);
    assert_eq!(game.state().snake.head(), head);

    game.toggle_pause();
    assert_eq!(game.phase(), LoopPhase::Running);

    game.reset();
    let snapshot = game.snapshot();
    assert_eq!(snapshot.phase, LoopPhase::Ready);
    assert_eq!(snapshot.status, GameStatus::Running);
    assert_eq!(snapshot.score, 0);
}
