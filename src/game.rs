use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::collision::{eats_food, hits_self, hits_wall};
use crate::config::{GridSize, INITIAL_SNAKE_LENGTH, POINTS_PER_SPEED_LEVEL};
use crate::error::GameError;
use crate::food::Food;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Lifecycle of a single game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Dead,
    Won,
}

/// Why the last game ended in `Dead`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// What a single simulation step did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    Moved,
    Ate,
    Died(DeathReason),
    Won,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub direction: Direction,
    pub food: Option<Food>,
    pub score: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a state seeded from system entropy.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::from_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::from_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn from_rng(bounds: GridSize, rng: StdRng) -> Self {
        let mut state = Self {
            snake: Snake::new(Position { x: 0, y: 0 }),
            direction: Direction::Right,
            food: None,
            score: 0,
            tick_count: 0,
            status: GameStatus::Running,
            death_reason: None,
            bounds,
            rng,
        };
        state.reset_with_grid(bounds);
        state
    }

    /// Reinitializes to a fresh running game on the current grid.
    pub fn reset(&mut self) {
        self.reset_with_grid(self.bounds);
    }

    /// Reinitializes to a fresh running game on `bounds`.
    ///
    /// The RNG stream continues, so successive games differ even when the
    /// state was seeded.
    pub fn reset_with_grid(&mut self, bounds: GridSize) {
        let head = Position {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        };
        let length = INITIAL_SNAKE_LENGTH.min(usize::from(bounds.width / 2) + 1);

        self.bounds = bounds;
        self.snake = Snake::straight(head, Direction::Right, length);
        self.direction = Direction::Right;
        self.score = 0;
        self.tick_count = 0;
        self.status = GameStatus::Running;
        self.death_reason = None;
        self.food = None;
        self.respawn_food();
    }

    /// Checks a requested turn against the current movement.
    pub fn validate_direction(&self, candidate: Direction) -> Result<Direction, GameError> {
        if self.snake.accepts_direction(self.direction, candidate) {
            Ok(candidate)
        } else {
            Err(GameError::InvalidDirection)
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// `pending` is the direction taken from the input buffer for this tick.
    /// A dead or won game is left untouched and reports `NotRunning`.
    pub fn step(&mut self, pending: Option<Direction>) -> Result<StepOutcome, GameError> {
        if self.status != GameStatus::Running {
            return Err(GameError::NotRunning);
        }

        if let Some(requested) = pending {
            match self.validate_direction(requested) {
                Ok(direction) => self.direction = direction,
                Err(error) => log::trace!("dropping {requested:?}: {error}"),
            }
        }

        self.tick_count += 1;

        let next_head = self.snake.head().step(self.direction);
        let grows = self
            .food
            .is_some_and(|food| eats_food(next_head, food.position));

        if hits_wall(next_head, self.bounds) {
            return Ok(self.die(DeathReason::WallCollision));
        }
        if hits_self(next_head, &self.snake, grows) {
            return Ok(self.die(DeathReason::SelfCollision));
        }

        self.snake.advance(next_head, grows);
        if !grows {
            return Ok(StepOutcome::Moved);
        }

        self.score += 1;
        if self.respawn_food() {
            Ok(StepOutcome::Ate)
        } else {
            Ok(StepOutcome::Won)
        }
    }

    /// Current speed level derived from the score.
    #[must_use]
    pub fn speed_level(&self) -> u32 {
        1 + self.score / POINTS_PER_SPEED_LEVEL
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    fn die(&mut self, reason: DeathReason) -> StepOutcome {
        log::info!("snake died ({reason:?}) with score {}", self.score);
        self.status = GameStatus::Dead;
        self.death_reason = Some(reason);
        StepOutcome::Died(reason)
    }

    /// Places new food; returns false when the board is full and the game
    /// has been won.
    fn respawn_food(&mut self) -> bool {
        match Food::spawn(&mut self.rng, self.bounds, &self.snake) {
            Ok(food) => {
                self.food = Some(food);
                true
            }
            Err(error) => {
                log::info!("board filled with score {}: {error}", self.score);
                self.food = None;
                self.status = GameStatus::Won;
                false
            }
        }
    }
}
