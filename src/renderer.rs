//! Converts game state into drawing commands for any 2D surface.

use ratatui::style::Color;

use crate::config::{CellSize, GridSize, Theme};
use crate::game::GameState;
use crate::snake::Position;

/// Axis-aligned rectangle in surface pixels.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// One primitive operation on a drawing surface.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DrawCommand {
    Clear { color: Color },
    FillRect { rect: PixelRect, color: Color },
    Text { x: u32, y: u32, text: String, color: Color },
}

/// Minimal 2D drawing surface the renderer targets.
pub trait Surface {
    /// Width and height in pixels.
    fn dimensions(&self) -> (u32, u32);

    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: PixelRect, color: Color);

    fn fill_text(&mut self, x: u32, y: u32, text: &str, color: Color);
}

/// Visual parameters for one draw.
#[derive(Debug, Clone, Copy)]
pub struct RenderStyle<'a> {
    pub cell: CellSize,
    pub theme: &'a Theme,
    pub show_score: bool,
}

/// Builds the command list for `state` without touching any surface.
///
/// Segments are emitted tail first so the head is painted last and stays
/// visible.
#[must_use]
pub fn draw_commands(state: &GameState, style: &RenderStyle<'_>) -> Vec<DrawCommand> {
    let theme = style.theme;
    let mut commands = Vec::with_capacity(state.snake.len() + 3);

    commands.push(DrawCommand::Clear {
        color: theme.play_bg,
    });

    if let Some(food) = state.food {
        if let Some(rect) = cell_rect(food.position, style.cell) {
            commands.push(DrawCommand::FillRect {
                rect,
                color: theme.food,
            });
        }
    }

    let last = state.snake.len() - 1;
    for (index, segment) in state.snake.segments().enumerate().rev() {
        let Some(rect) = cell_rect(*segment, style.cell) else {
            continue;
        };

        let color = if index == 0 {
            theme.snake_head
        } else if index == last {
            theme.snake_tail
        } else {
            theme.snake_body
        };
        commands.push(DrawCommand::FillRect { rect, color });
    }

    if style.show_score {
        commands.push(DrawCommand::Text {
            x: 0,
            y: 0,
            text: format!("{}", state.score),
            color: theme.hud_score,
        });
    }

    commands
}

/// Renders `state` onto `surface`.
pub fn draw<S: Surface + ?Sized>(surface: &mut S, state: &GameState, style: &RenderStyle<'_>) {
    for command in draw_commands(state, style) {
        match command {
            DrawCommand::Clear { color } => surface.clear(color),
            DrawCommand::FillRect { rect, color } => surface.fill_rect(rect, color),
            DrawCommand::Text { x, y, text, color } => surface.fill_text(x, y, &text, color),
        }
    }
}

/// Largest grid whose cells fit on `surface`.
#[must_use]
pub fn grid_for_surface<S: Surface + ?Sized>(surface: &S, cell: CellSize) -> GridSize {
    let (width, height) = surface.dimensions();
    GridSize::from_surface(width, height, cell)
}

fn cell_rect(position: Position, cell: CellSize) -> Option<PixelRect> {
    let x = u32::try_from(position.x).ok()?;
    let y = u32::try_from(position.y).ok()?;
    let width = u32::from(cell.width);
    let height = u32::from(cell.height);

    Some(PixelRect {
        x: x * width,
        y: y * height,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use crate::config::{CellSize, GridSize, THEME_CLASSIC};
    use crate::food::Food;
    use crate::game::GameState;
    use crate::snake::{Position, Snake};

    use super::{
        draw, draw_commands, grid_for_surface, DrawCommand, PixelRect, RenderStyle, Surface,
    };

    const STYLE: RenderStyle<'static> = RenderStyle {
        cell: CellSize {
            width: 2,
            height: 1,
        },
        theme: &THEME_CLASSIC,
        show_score: false,
    };

    fn sample_state() -> GameState {
        let mut state = GameState::new_with_seed(GridSize::new(10, 10), 1);
        state.snake = Snake::from_segments(vec![
            Position { x: 3, y: 2 },
            Position { x: 2, y: 2 },
            Position { x: 1, y: 2 },
        ]);
        state.food = Some(Food::new(Position { x: 7, y: 4 }));
        state
    }

    #[derive(Default)]
    struct RecordingSurface {
        clears: usize,
        rects: Vec<(PixelRect, Color)>,
        texts: Vec<String>,
    }

    impl Surface for RecordingSurface {
        fn dimensions(&self) -> (u32, u32) {
            (20, 10)
        }

        fn clear(&mut self, _color: Color) {
            self.clears += 1;
        }

        fn fill_rect(&mut self, rect: PixelRect, color: Color) {
            self.rects.push((rect, color));
        }

        fn fill_text(&mut self, _x: u32, _y: u32, text: &str, _color: Color) {
            self.texts.push(text.to_string());
        }
    }

    #[test]
    fn commands_start_with_clear_and_end_with_head() {
        let commands = draw_commands(&sample_state(), &STYLE);

        assert_eq!(
            commands.first(),
            Some(&DrawCommand::Clear {
                color: THEME_CLASSIC.play_bg
            })
        );
        assert_eq!(
            commands.last(),
            Some(&DrawCommand::FillRect {
                rect: PixelRect {
                    x: 6,
                    y: 2,
                    width: 2,
                    height: 1
                },
                color: THEME_CLASSIC.snake_head,
            })
        );
    }

    #[test]
    fn food_uses_food_color() {
        let commands = draw_commands(&sample_state(), &STYLE);

        assert!(commands.contains(&DrawCommand::FillRect {
            rect: PixelRect {
                x: 14,
                y: 4,
                width: 2,
                height: 1
            },
            color: THEME_CLASSIC.food,
        }));
    }

    #[test]
    fn draw_replays_every_rect_on_surface() {
        let mut surface = RecordingSurface::default();

        draw(&mut surface, &sample_state(), &STYLE);

        assert_eq!(surface.clears, 1);
        assert_eq!(surface.rects.len(), 4);
        assert!(surface.texts.is_empty());
    }

    #[test]
    fn grid_is_sized_from_surface_dimensions() {
        let surface = RecordingSurface::default();
        assert_eq!(grid_for_surface(&surface, STYLE.cell), GridSize::new(10, 10));
    }

    #[test]
    fn score_text_is_optional() {
        let mut state = sample_state();
        state.score = 7;
        let style = RenderStyle {
            show_score: true,
            ..STYLE
        };
        let mut surface = RecordingSurface::default();

        draw(&mut surface, &state, &style);

        assert_eq!(surface.texts, vec!["7".to_string()]);
    }
}
