use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

use crate::renderer::{PixelRect, Surface};

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns raw mode and the alternate screen for one session.
///
/// Dropping the session, or panicking while it is alive, restores the
/// terminal best-effort.
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                let _ = restore_terminal();
                Err(error)
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}

fn restore_terminal() -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)
}

/// Drawing surface backed by a region of a ratatui buffer.
///
/// One surface pixel is one terminal cell; a filled pixel is a blank cell
/// with the fill color as background. Anything outside `area` is clipped.
pub struct BufferSurface<'a> {
    buffer: &'a mut Buffer,
    area: Rect,
}

impl<'a> BufferSurface<'a> {
    pub fn new(buffer: &'a mut Buffer, area: Rect) -> Self {
        let area = area.intersection(buffer.area);
        Self { buffer, area }
    }

    fn paint(&mut self, x: u16, y: u16, color: Color) {
        if let Some(cell) = self.buffer.cell_mut((x, y)) {
            cell.set_symbol(" ").set_bg(color);
        }
    }

    /// Clips a pixel rectangle to the surface, in absolute buffer coordinates.
    fn clip(&self, rect: PixelRect) -> Option<Rect> {
        let x = u16::try_from(rect.x).ok()?;
        let y = u16::try_from(rect.y).ok()?;
        let width = u16::try_from(rect.width).unwrap_or(u16::MAX);
        let height = u16::try_from(rect.height).unwrap_or(u16::MAX);

        let absolute = Rect {
            x: self.area.x.saturating_add(x),
            y: self.area.y.saturating_add(y),
            width,
            height,
        };
        let clipped = absolute.intersection(self.area);

        (!clipped.is_empty()).then_some(clipped)
    }
}

impl Surface for BufferSurface<'_> {
    fn dimensions(&self) -> (u32, u32) {
        (u32::from(self.area.width), u32::from(self.area.height))
    }

    fn clear(&mut self, color: Color) {
        let area = self.area;
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                self.paint(x, y, color);
            }
        }
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        let Some(clipped) = self.clip(rect) else {
            return;
        };

        for y in clipped.top()..clipped.bottom() {
            for x in clipped.left()..clipped.right() {
                self.paint(x, y, color);
            }
        }
    }

    fn fill_text(&mut self, x: u32, y: u32, text: &str, color: Color) {
        let Some(origin) = self.clip(PixelRect {
            x,
            y,
            width: 1,
            height: 1,
        }) else {
            return;
        };

        let max_width = usize::from(self.area.right() - origin.x);
        self.buffer.set_stringn(
            origin.x,
            origin.y,
            text,
            max_width,
            Style::new().fg(color),
        );
    }
}
