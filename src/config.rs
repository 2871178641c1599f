use std::time::Duration;

use ratatui::style::Color;
use ratatui::symbols::border;

/// Logical grid dimensions of the playing field.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Creates a grid, clamping each axis to at least one cell.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Derives the grid that fits a drawing surface of the given pixel size.
    #[must_use]
    pub fn from_surface(surface_width: u32, surface_height: u32, cell: CellSize) -> Self {
        let columns = surface_width / u32::from(cell.width.max(1));
        let rows = surface_height / u32::from(cell.height.max(1));

        Self::new(
            u16::try_from(columns).unwrap_or(u16::MAX),
            u16::try_from(rows).unwrap_or(u16::MAX),
        )
    }

    /// Returns true when every cell of `self` also exists in `limit`.
    #[must_use]
    pub fn fits_within(self, limit: Self) -> bool {
        self.width <= limit.width && self.height <= limit.height
    }

    /// Applies requested dimensions, never exceeding this grid on either axis.
    #[must_use]
    pub fn with_overrides(self, width: Option<u16>, height: Option<u16>) -> Self {
        Self::new(
            width.map_or(self.width, |width| width.min(self.width)),
            height.map_or(self.height, |height| height.min(self.height)),
        )
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Size of one grid cell on the drawing surface, in surface pixels.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CellSize {
    pub width: u16,
    pub height: u16,
}

/// Terminal cells are roughly twice as tall as wide, so a square-looking
/// grid cell spans two columns.
pub const DEFAULT_CELL_SIZE: CellSize = CellSize {
    width: 2,
    height: 1,
};

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    /// Background color for empty play-area cells.
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_score: Color,
    pub hud_muted: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic blue snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Blue,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_score: Color::White,
    hud_muted: Color::DarkGray,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "Ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Cyan,
    border_bg: Color::DarkGray,
    hud_score: Color::Cyan,
    hud_muted: Color::DarkGray,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    name: "Neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Magenta,
    border_bg: Color::Black,
    hud_score: Color::Magenta,
    hud_muted: Color::DarkGray,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// All available themes in cycle order.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 60;

/// Tick interval reduction per speed level above the first.
pub const SPEED_STEP_MS: u64 = 10;

/// Score needed per speed level increase.
pub const POINTS_PER_SPEED_LEVEL: u32 = 5;

/// Upper bound on simulation steps executed in a single frame callback.
pub const MAX_CATCH_UP_STEPS: u32 = 5;

/// Segment count of a freshly spawned snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Delay between frame callbacks in the terminal shell.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[cfg(test)]
mod tests {
    use super::{CellSize, GridSize};

    #[test]
    fn grid_from_surface_divides_by_cell_size() {
        let grid = GridSize::from_surface(
            81,
            20,
            CellSize {
                width: 2,
                height: 1,
            },
        );

        assert_eq!(
            grid,
            GridSize {
                width: 40,
                height: 20
            }
        );
        assert_eq!(grid.total_cells(), 800);
    }

    #[test]
    fn overrides_are_clamped_to_the_surface_grid() {
        let surface = GridSize::new(19, 7);

        assert_eq!(surface.with_overrides(Some(100), Some(5)), GridSize::new(19, 5));
        assert_eq!(surface.with_overrides(None, Some(u16::MAX)), surface);
        assert_eq!(surface.with_overrides(Some(0), None), GridSize::new(1, 7));
        assert!(GridSize::new(19, 5).fits_within(surface));
        assert!(!GridSize::new(100, 5).fits_within(surface));
    }

    #[test]
    fn tiny_surface_still_yields_one_cell() {
        let grid = GridSize::from_surface(
            1,
            0,
            CellSize {
                width: 2,
                height: 1,
            },
        );

        assert_eq!(grid, GridSize::new(1, 1));
    }
}
