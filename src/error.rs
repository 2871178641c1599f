use thiserror::Error;

/// Conditions the engine reports instead of panicking.
///
/// None of these is fatal: the game loop turns each into a state transition
/// or a silent no-op before anything reaches the shell.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum GameError {
    /// Every grid cell is covered by the snake, so food cannot be placed.
    #[error("no free cell left for food")]
    NoSpaceAvailable,
    /// A turn straight back into the snake's own neck.
    #[error("direction reverses the current movement")]
    InvalidDirection,
    /// The game is dead or won and must be reset first.
    #[error("game is not running")]
    NotRunning,
}
