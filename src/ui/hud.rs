use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game_loop::Snapshot;
use crate::ui::ViewInfo;

/// Rows reserved below the board.
pub const HUD_HEIGHT: u16 = 1;

/// Renders the status row from the loop snapshot.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot, view: &ViewInfo<'_>) {
    frame.render_widget(
        Paragraph::new(status_line(snapshot, view.high_score, view.theme))
            .alignment(Alignment::Center),
        area,
    );
}

fn status_line(snapshot: &Snapshot, high_score: u32, theme: &Theme) -> Line<'static> {
    let label = Style::new().fg(theme.hud_muted);
    let value = Style::new().fg(theme.hud_score).add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::styled("Score ", label),
        Span::styled(snapshot.score.to_string(), value),
        Span::styled("  Hi ", label),
        Span::styled(high_score.max(snapshot.score).to_string(), value),
        Span::styled("  Length ", label),
        Span::styled(snapshot.length.to_string(), value),
        Span::styled("  Level ", label),
        Span::styled(snapshot.speed_level.to_string(), value),
        Span::styled(
            format!(
                "  {}x{}  {}",
                snapshot.grid.width, snapshot.grid.height, theme.name
            ),
            label,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use crate::config::{GridSize, THEME_CLASSIC};
    use crate::game::GameStatus;
    use crate::game_loop::{LoopPhase, Snapshot};

    use super::status_line;

    #[test]
    fn status_line_shows_live_score_as_high_score_when_beaten() {
        let snapshot = Snapshot {
            score: 9,
            status: GameStatus::Running,
            phase: LoopPhase::Running,
            length: 12,
            speed_level: 2,
            grid: GridSize::new(20, 10),
        };

        let text: String = status_line(&snapshot, 4, &THEME_CLASSIC)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();

        assert_eq!(text, "Score 9  Hi 9  Length 12  Level 2  20x10  Classic");
    }
}
