use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use ratatui::buffer::Buffer;
use ratatui::layout::{Rect, Size};
use snek::config::{
    DEFAULT_CELL_SIZE, DEFAULT_TICK_INTERVAL_MS, FRAME_INTERVAL, GridSize, THEMES,
};
use snek::game::GameState;
use snek::game_loop::{FrameClock, GameLoop, LoopConfig, LoopPhase};
use snek::input::{GameInput, InputHandler};
use snek::score::HighScoreStore;
use snek::terminal_runtime::TerminalSession;
use snek::ui::{self, FrameReport, ViewInfo};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeChoice {
    Classic,
    Ocean,
    Neon,
}

impl ThemeChoice {
    fn index(self) -> usize {
        match self {
            Self::Classic => 0,
            Self::Ocean => 1,
            Self::Neon => 2,
        }
    }
}

#[derive(Debug, Parser)]
#[command(version, about = "Snake in the terminal")]
struct Cli {
    /// Grid width in cells, capped at what fits the terminal.
    #[arg(long)]
    width: Option<u16>,

    /// Grid height in cells, capped at what fits the terminal.
    #[arg(long)]
    height: Option<u16>,

    /// Base tick interval in milliseconds.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Keep the tick interval fixed instead of speeding up with the score.
    #[arg(long)]
    steady: bool,

    /// Seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = ThemeChoice::Classic)]
    theme: ThemeChoice,

    /// Draw the score inside the board as well as in the status row.
    #[arg(long = "show-score")]
    show_score: bool,

    /// Write logs to this file (filter with RUST_LOG).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path)?;
    }

    let mut high_scores = HighScoreStore::open_default();
    let mut session = TerminalSession::enter()?;
    run(&mut session, &cli, &mut high_scores)
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(io::Error::other)
}

fn run(
    session: &mut TerminalSession,
    cli: &Cli,
    high_scores: &mut HighScoreStore,
) -> io::Result<()> {
    let terminal = session.terminal_mut();
    let grid = grid_for_terminal(terminal_area(terminal.size()?), cli);
    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(grid, seed),
        None => GameState::new(grid),
    };
    let mut game = GameLoop::new(
        state,
        LoopConfig {
            base_tick: Duration::from_millis(cli.tick_ms.max(1)),
            speed_up: !cli.steady,
            ..LoopConfig::default()
        },
    );
    log::info!("starting on a {}x{} grid", grid.width, grid.height);

    let mut input = InputHandler;
    let mut clock = FrameClock::new();
    let mut theme_index = cli.theme.index();
    let mut last_phase = game.phase();
    let mut report = FrameReport {
        surface_grid: grid,
        board_fits: true,
    };

    loop {
        let view = ViewInfo {
            theme: &THEMES[theme_index],
            cell: DEFAULT_CELL_SIZE,
            high_score: high_scores.best(),
            reference_high_score: high_scores.reference(),
            show_score: cli.show_score,
        };
        terminal.draw(|frame| report = ui::render_frame(frame, &game, &view))?;

        if let Some(game_input) = input.poll_input(FRAME_INTERVAL)? {
            match game_input {
                GameInput::Quit => break,
                GameInput::CycleTheme => theme_index = (theme_index + 1) % THEMES.len(),
                GameInput::Direction(direction) => game.push_direction(direction),
                GameInput::Pause => game.toggle_pause(),
                GameInput::Confirm => confirm(&mut game, high_scores, report.surface_grid, cli),
            }
        }

        if !report.board_fits && game.phase() == LoopPhase::Running {
            log::info!("terminal too small for the board, pausing");
            game.pause();
        }

        game.on_frame(clock.delta());

        let phase = game.phase();
        if phase != last_phase {
            if phase == LoopPhase::Finished {
                if let Err(error) = high_scores.record(game.snapshot().score) {
                    log::warn!("failed to save high score: {error}");
                }
            }
            last_phase = phase;
        }
    }

    Ok(())
}

/// Enter/Space: start a fresh game, or set up the next one after game over.
fn confirm(
    game: &mut GameLoop,
    high_scores: &mut HighScoreStore,
    surface_grid: GridSize,
    cli: &Cli,
) {
    match game.phase() {
        LoopPhase::Ready => {
            if let Err(error) = game.start() {
                log::debug!("start ignored: {error}");
            }
        }
        LoopPhase::Finished => {
            high_scores.begin_game();
            game.reset_with_grid(surface_grid.with_overrides(cli.width, cli.height));
        }
        LoopPhase::Running | LoopPhase::Paused => {}
    }
}

fn terminal_area(size: Size) -> Rect {
    Rect::new(0, 0, size.width, size.height)
}

/// Grid for a terminal of `area`, sized from the board surface it would get.
fn grid_for_terminal(area: Rect, cli: &Cli) -> GridSize {
    let mut scratch = Buffer::empty(area);
    ui::surface_grid(&mut scratch, area, DEFAULT_CELL_SIZE).with_overrides(cli.width, cli.height)
}
