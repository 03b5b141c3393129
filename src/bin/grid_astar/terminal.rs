//! Crossterm back end: draws the grid with background colors and turns mouse and key events into
//! [InputEvent]s.
use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
    },
    execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use grid_astar::palette::{self, Color};
use grid_astar::{Grid, InputEvent, InputSource, Renderer, Viewport};
use log::error;

const HELP: &str = "left: start/end/barrier  right: clear  space: search  c: reset  q: quit";

fn to_ct_color(c: Color) -> CtColor {
    CtColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Puts the terminal in raw mode on the alternate screen with mouse capture, and restores it
/// when dropped.
pub struct TerminalSession;

impl TerminalSession {
    pub fn start() -> io::Result<TerminalSession> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            event::EnableMouseCapture,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(TerminalSession)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

pub struct TerminalRenderer {
    out: Stdout,
    frame_delay: Duration,
}

impl TerminalRenderer {
    pub fn new(frame_delay: Duration) -> TerminalRenderer {
        TerminalRenderer {
            out: io::stdout(),
            frame_delay,
        }
    }

    fn draw(&mut self, grid: &Grid, viewport: &Viewport) -> io::Result<()> {
        let width = viewport.cell_width() as usize;
        // The last column of every cell doubles as the gridline
        let fill = format!("{:width$}▕", "", width = width.saturating_sub(1));
        queue!(self.out, SetForegroundColor(to_ct_color(palette::GRIDLINE)))?;
        for cell in grid.cells() {
            let (x, y) = viewport.origin_of(cell.row(), cell.col());
            let color = palette::color_of(cell.state());
            for line in 0..viewport.cell_height() {
                queue!(
                    self.out,
                    cursor::MoveTo(x as u16, (y + line) as u16),
                    SetBackgroundColor(to_ct_color(color)),
                    Print(&fill)
                )?;
            }
        }
        let (_, height) = viewport.extent();
        queue!(
            self.out,
            ResetColor,
            cursor::MoveTo(0, height as u16),
            Print(HELP)
        )?;
        self.out.flush()
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, grid: &Grid, viewport: &Viewport) {
        if let Err(e) = self.draw(grid, viewport) {
            error!("Failed to draw frame: {e}");
        }
        if !self.frame_delay.is_zero() {
            std::thread::sleep(self.frame_delay);
        }
    }
}

/// Maps terminal events to controller input. Mouse positions are reported in terminal cells.
#[derive(Default)]
pub struct TerminalInput;

impl TerminalInput {
    fn translate(ev: Event) -> Option<InputEvent> {
        match ev {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(InputEvent::Quit)
                }
                KeyCode::Char(' ') => Some(InputEvent::StartSearch),
                KeyCode::Char('c') => Some(InputEvent::ResetGrid),
                KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Quit),
                _ => None,
            },
            Event::Mouse(me) => {
                let (x, y) = (me.column as u32, me.row as u32);
                match me.kind {
                    MouseEventKind::Down(MouseButton::Left)
                    | MouseEventKind::Drag(MouseButton::Left) => {
                        Some(InputEvent::PrimaryPress { x, y })
                    }
                    MouseEventKind::Down(MouseButton::Right)
                    | MouseEventKind::Drag(MouseButton::Right) => {
                        Some(InputEvent::SecondaryPress { x, y })
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    }

    fn read_pending(&mut self, timeout: Duration) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        if !event::poll(timeout)? {
            return Ok(events);
        }
        while event::poll(Duration::ZERO)? {
            if let Some(e) = TerminalInput::translate(event::read()?) {
                events.push(e);
            }
        }
        Ok(events)
    }
}

impl InputSource for TerminalInput {
    fn poll_events(&mut self, timeout: Duration) -> Vec<InputEvent> {
        match self.read_pending(timeout) {
            Ok(events) => events,
            Err(e) => {
                error!("Failed to read terminal input: {e}");
                vec![InputEvent::Quit]
            }
        }
    }
}
