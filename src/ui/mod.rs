pub mod hud;
pub mod menu;

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::config::{BORDER_HALF_BLOCK, CellSize, GridSize, Theme};
use crate::game_loop::{GameLoop, LoopPhase};
use crate::renderer::{self, RenderStyle};
use crate::terminal_runtime::BufferSurface;

use self::hud::{HUD_HEIGHT, render_hud};
use self::menu::{
    render_game_over_menu, render_pause_menu, render_start_menu, render_too_small_menu,
    render_victory_menu,
};

/// Values shown around the board that the game loop does not own.
#[derive(Debug, Clone, Copy)]
pub struct ViewInfo<'a> {
    pub theme: &'a Theme,
    pub cell: CellSize,
    pub high_score: u32,
    /// Best score before the game on screen began; a finished game that beats
    /// it is announced as a new record.
    pub reference_high_score: u32,
    pub show_score: bool,
}

/// What the last drawn frame learned about the terminal.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FrameReport {
    /// Largest grid the board surface can show.
    pub surface_grid: GridSize,
    /// Whether the game's grid fits inside `surface_grid`.
    pub board_fits: bool,
}

/// Splits the frame into the space available for the board and the HUD row.
#[must_use]
pub fn split_frame(area: Rect) -> (Rect, Rect) {
    let [board, hud] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(HUD_HEIGHT)]).areas(area);
    (board, hud)
}

/// Pixel area inside the board border, before fitting it to a grid.
#[must_use]
pub fn board_inner_area(area: Rect) -> Rect {
    let (board, _) = split_frame(area);
    Block::bordered().inner(board)
}

/// Largest grid the board surface inside `area` can show.
pub fn surface_grid(buffer: &mut Buffer, area: Rect, cell: CellSize) -> GridSize {
    let surface = BufferSurface::new(buffer, board_inner_area(area));
    renderer::grid_for_surface(&surface, cell)
}

/// Bordered board rectangle for `grid`, centred horizontally in `available`.
fn fit_board(available: Rect, grid: GridSize, cell: CellSize) -> Rect {
    let width = grid
        .width
        .saturating_mul(cell.width)
        .saturating_add(2)
        .min(available.width);
    let height = grid
        .height
        .saturating_mul(cell.height)
        .saturating_add(2)
        .min(available.height);

    Rect {
        x: available.x + (available.width - width) / 2,
        y: available.y,
        width,
        height,
    }
}

/// Draws one full frame: board, HUD, and any phase overlay.
///
/// When the game's grid no longer fits the terminal, a resize notice replaces
/// the phase overlay.
pub fn render_frame(
    frame: &mut Frame<'_>,
    game: &GameLoop,
    view: &ViewInfo<'_>,
) -> FrameReport {
    let snapshot = game.snapshot();
    let area = frame.area();
    let fitted = surface_grid(frame.buffer_mut(), area, view.cell);
    let report = FrameReport {
        surface_grid: fitted,
        board_fits: snapshot.grid.fits_within(fitted),
    };

    let (available, hud_area) = split_frame(area);
    let board = fit_board(available, snapshot.grid, view.cell);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(view.theme.border_fg).bg(view.theme.border_bg));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    let style = RenderStyle {
        cell: view.cell,
        theme: view.theme,
        show_score: view.show_score,
    };
    let mut surface = BufferSurface::new(frame.buffer_mut(), inner);
    renderer::draw(&mut surface, game.state(), &style);

    render_hud(frame, hud_area, &snapshot, view);

    if !report.board_fits {
        render_too_small_menu(frame, available, snapshot.grid, fitted, view.theme);
        return report;
    }

    match snapshot.phase {
        LoopPhase::Ready => render_start_menu(frame, board, view.high_score, view.theme),
        LoopPhase::Paused => render_pause_menu(frame, board, view.theme),
        LoopPhase::Finished if snapshot.is_won() => {
            render_victory_menu(frame, board, snapshot.score, view.theme);
        }
        LoopPhase::Finished => render_game_over_menu(
            frame,
            board,
            snapshot.score,
            view.reference_high_score,
            game.state().death_reason,
            view.theme,
        ),
        LoopPhase::Running => {}
    }

    report
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::config::{CellSize, GridSize};

    use super::{board_inner_area, fit_board};

    #[test]
    fn inner_area_leaves_room_for_border_and_hud() {
        let inner = board_inner_area(Rect::new(0, 0, 80, 24));
        assert_eq!(inner, Rect::new(1, 1, 78, 21));
    }

    #[test]
    fn small_grid_is_centred() {
        let board = fit_board(
            Rect::new(0, 0, 80, 23),
            GridSize::new(10, 10),
            CellSize {
                width: 2,
                height: 1,
            },
        );

        assert_eq!(board, Rect::new(29, 0, 22, 12));
    }
}
