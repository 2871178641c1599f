//! Snek: a tick-based Snake engine.
//!
//! - `game`, `snake`, `collision`, `food`: deterministic simulation
//! - `input_buffer`, `game_loop`: input hand-off and fixed-interval ticking
//! - `renderer`: state to drawing commands on any [`renderer::Surface`]
//! - `terminal_runtime`, `ui`, `input`, `score`: the terminal frontend

pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod game_loop;
pub mod input;
pub mod input_buffer;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;

pub use error::GameError;
pub use game::{GameState, GameStatus};
pub use game_loop::{GameLoop, LoopConfig, Snapshot};
