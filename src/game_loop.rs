//! Fixed-interval ticking decoupled from the frame callback rate.
//!
//! The host calls [`GameLoop::on_frame`] with the time elapsed since the
//! previous frame. Elapsed time accumulates and is spent one tick interval
//! per simulation step, with a per-frame cap so a long stall cannot trigger
//! an unbounded burst of steps.

use std::time::{Duration, Instant};

use crate::config::{
    DEFAULT_TICK_INTERVAL_MS, GridSize, MAX_CATCH_UP_STEPS, MIN_TICK_INTERVAL_MS, SPEED_STEP_MS,
};
use crate::error::GameError;
use crate::game::{GameState, GameStatus, StepOutcome};
use crate::input::Direction;
use crate::input_buffer::InputBuffer;

/// Timing parameters of the loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct LoopConfig {
    pub base_tick: Duration,
    pub min_tick: Duration,
    pub max_catch_up: u32,
    /// Shorten the tick interval as the speed level rises.
    pub speed_up: bool,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            base_tick: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            min_tick: Duration::from_millis(MIN_TICK_INTERVAL_MS),
            max_catch_up: MAX_CATCH_UP_STEPS,
            speed_up: true,
        }
    }
}

/// Whether the loop is currently stepping the simulation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LoopPhase {
    /// Fresh game waiting for `start`.
    Ready,
    Running,
    Paused,
    /// The game is dead or won; only `reset` leaves this phase.
    Finished,
}

/// Read-only view for UI outside the drawing surface.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Snapshot {
    pub score: u32,
    pub status: GameStatus,
    pub phase: LoopPhase,
    pub length: usize,
    pub speed_level: u32,
    pub grid: GridSize,
}

impl Snapshot {
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.status == GameStatus::Running
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }
}

/// Owns the game state and its input buffer, and drives both on a fixed tick.
#[derive(Debug)]
pub struct GameLoop {
    state: GameState,
    input: InputBuffer,
    phase: LoopPhase,
    accumulator: Duration,
    config: LoopConfig,
}

impl GameLoop {
    #[must_use]
    pub fn new(state: GameState, config: LoopConfig) -> Self {
        Self {
            state,
            input: InputBuffer::new(),
            phase: LoopPhase::Ready,
            accumulator: Duration::ZERO,
            config,
        }
    }

    /// Begins stepping a fresh game.
    pub fn start(&mut self) -> Result<(), GameError> {
        match self.phase {
            LoopPhase::Ready => {
                log::debug!("game started on {:?}", self.state.bounds());
                self.enter_running();
                Ok(())
            }
            LoopPhase::Paused => self.resume(),
            LoopPhase::Running => Ok(()),
            LoopPhase::Finished => Err(GameError::NotRunning),
        }
    }

    /// Suspends stepping; rendering may continue from the frozen state.
    pub fn pause(&mut self) {
        if self.phase == LoopPhase::Running {
            log::debug!("paused at tick {}", self.state.tick_count);
            self.phase = LoopPhase::Paused;
        }
    }

    /// Continues a paused game. A finished game stays finished.
    pub fn resume(&mut self) -> Result<(), GameError> {
        match self.phase {
            LoopPhase::Paused => {
                log::debug!("resumed at tick {}", self.state.tick_count);
                self.enter_running();
                Ok(())
            }
            LoopPhase::Running => Ok(()),
            LoopPhase::Ready => self.start(),
            LoopPhase::Finished => Err(GameError::NotRunning),
        }
    }

    /// Flips between running and paused; other phases are untouched.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            LoopPhase::Running => self.pause(),
            LoopPhase::Paused => {
                log::debug!("resumed at tick {}", self.state.tick_count);
                self.enter_running();
            }
            LoopPhase::Ready | LoopPhase::Finished => {}
        }
    }

    /// Discards the current game and waits for `start` on the same grid.
    pub fn reset(&mut self) {
        self.reset_with_grid(self.state.bounds());
    }

    /// Discards the current game and waits for `start` on `grid`.
    pub fn reset_with_grid(&mut self, grid: GridSize) {
        log::debug!("reset to {grid:?}");
        self.state.reset_with_grid(grid);
        self.input.clear();
        self.accumulator = Duration::ZERO;
        self.phase = LoopPhase::Ready;
    }

    /// Queues a turn for the next tick; reversals are never stored.
    pub fn push_direction(&mut self, direction: Direction) {
        if self.phase != LoopPhase::Running {
            return;
        }

        match self.state.validate_direction(direction) {
            Ok(direction) => self.input.push(direction),
            Err(error) => log::trace!("ignoring {direction:?}: {error}"),
        }
    }

    /// Frame callback: spends accumulated time on whole ticks.
    ///
    /// Returns the number of simulation steps executed.
    pub fn on_frame(&mut self, delta: Duration) -> u32 {
        if self.phase != LoopPhase::Running {
            return 0;
        }

        self.accumulator = self.accumulator.saturating_add(delta);

        let mut steps = 0;
        while steps < self.config.max_catch_up {
            let interval = self.tick_interval();
            if self.accumulator < interval {
                break;
            }

            self.accumulator -= interval;
            steps += 1;

            let pending = self.input.take_and_clear();
            match self.state.step(pending) {
                Ok(StepOutcome::Moved | StepOutcome::Ate) => {}
                Ok(StepOutcome::Died(_) | StepOutcome::Won) | Err(GameError::NotRunning) => {
                    self.finish();
                    return steps;
                }
                Err(error) => log::warn!("unexpected step error: {error}"),
            }
        }

        if steps == self.config.max_catch_up && self.accumulator >= self.tick_interval() {
            log::debug!(
                "catch-up capped at {steps} steps, dropping {:?}",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        steps
    }

    /// Interval between steps at the current speed level.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        if !self.config.speed_up {
            return self.config.base_tick;
        }

        let levels_above_first = u64::from(self.state.speed_level().saturating_sub(1));
        let penalty = Duration::from_millis(levels_above_first.saturating_mul(SPEED_STEP_MS));
        self.config
            .base_tick
            .saturating_sub(penalty)
            .max(self.config.min_tick)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            score: self.state.score,
            status: self.state.status,
            phase: self.phase,
            length: self.state.snake.len(),
            speed_level: self.state.speed_level(),
            grid: self.state.bounds(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.input.peek()
    }

    fn enter_running(&mut self) {
        if self.state.is_running() {
            self.phase = LoopPhase::Running;
        } else {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.phase = LoopPhase::Finished;
        self.accumulator = Duration::ZERO;
        self.input.clear();
    }
}

/// Turns a monotonic clock into per-frame deltas.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Returns the time since the previous call (or construction).
    pub fn delta(&mut self) -> Duration {
        self.delta_at(Instant::now())
    }

    /// Same as [`FrameClock::delta`] with an explicit reading of the clock.
    pub fn delta_at(&mut self, now: Instant) -> Duration {
        let delta = now.saturating_duration_since(self.last);
        self.last = now;
        delta
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
