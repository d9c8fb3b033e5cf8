//! Abstract terminal collaborator.
//!
//! The core never emits an escape sequence itself. A `Driver` turns
//! `FrameDiff`s into terminal bytes and turns terminal input into `Event`s;
//! everything upstream of this module only ever sees cell coordinates and
//! typed events. `CrosstermDriver` is the default implementation, but the
//! trait is the real interface - a headless driver for tests just records
//! what it was asked to do.

use crate::canvas::{Offset, Size};
use crate::compositor::FrameDiff;
use std::collections::HashSet;
use std::io::{self, Write};
use std::time::Duration;

/// A modifier key held during a `Key` or `Mouse` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Ctrl,
    Shift,
    Alt,
    Meta,
}

/// Which mouse button, if any, is associated with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    None,
}

/// The kind of pointer action a `Mouse` event reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseKind {
    Move,
    Down,
    Up,
    Click,
    ScrollUp,
    ScrollDown,
    ScrollLeft,
    ScrollRight,
    Capture,
    Release,
}

/// A single input or control event produced by a Driver.
///
/// `Key.name` is drawn from the canonical key-name table (lowercase
/// letters, digits, `enter`, `escape`, `tab`, `space`, `backspace`,
/// `delete`, arrow keys, `home`/`end`, `pageup`/`pagedown`, `f1`..`f24`),
/// optionally combined with `ctrl+`/`shift+`/`alt+`/`meta+` prefixes by the
/// Driver before the event reaches the core.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Key {
        name: String,
        character: Option<char>,
        modifiers: HashSet<Modifier>,
    },
    Mouse {
        kind: MouseKind,
        position: Offset,
        button: MouseButton,
        modifiers: HashSet<Modifier>,
        chain: u32,
    },
    Paste {
        text: String,
    },
    Focus,
    Blur,
    Resize {
        size: Size,
    },
    Quit,
}

/// Errors a Driver can surface to the app loop.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("driver not started")]
    NotStarted,
}

/// The abstract collaborator between the core and a real terminal.
///
/// Implementers guarantee: mouse coordinates are cells relative to the
/// terminal origin; resize events reflect the new size; `poll_event` never
/// blocks longer than its timeout.
pub trait Driver {
    /// Enters raw mode / alternate screen, whatever the backend needs.
    fn start(&mut self) -> Result<(), DriverError>;

    /// Restores the terminal to its pre-`start` state.
    fn stop(&mut self) -> Result<(), DriverError>;

    fn get_size(&self) -> Size;

    fn set_title(&mut self, title: &str) -> Result<(), DriverError>;

    /// Waits up to `timeout` for the next input event. `Ok(None)` means the
    /// timeout elapsed with nothing pending - the app loop uses this to
    /// drive its own tick.
    fn poll_event(&mut self, timeout: Duration) -> Result<Option<Event>, DriverError>;

    /// Writes the changed cell ranges of a composed frame.
    fn write_frame(&mut self, diff: &FrameDiff) -> Result<(), DriverError>;

    /// Moves or hides (`None`) the terminal cursor.
    fn set_cursor(&mut self, offset: Option<Offset>) -> Result<(), DriverError>;

    fn ring_bell(&mut self) -> Result<(), DriverError>;

    /// Switches to inline mode: the app occupies `height` lines at the
    /// current cursor row instead of the full alternate screen.
    fn enter_inline_mode(&mut self, height: u16) -> Result<(), DriverError>;
}

/// Crossterm-backed `Driver`.
///
/// Reuses the crate's own cell-grid `Canvas`/`Strip` model for writes: a
/// `FrameDiff`'s changed ranges are translated into cursor moves plus
/// `SetForegroundColor`/`SetBackgroundColor`/`SetAttribute` sequences,
/// mirroring what `Canvas::flush` already does for a full-screen paint.
pub struct CrosstermDriver<W: Write> {
    out: W,
    size: Size,
    started: bool,
    inline_height: Option<u16>,
}

impl<W: Write> CrosstermDriver<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            size: Size::new(80, 24),
            started: false,
            inline_height: None,
        }
    }

    fn write_range(&mut self, line: usize, range: &crate::compositor::CellRangeDiff) -> io::Result<()> {
        use crossterm::style::{Attribute, Color, SetAttribute, SetBackgroundColor, SetForegroundColor};
        execute!(self.out, cursor::MoveTo(range.start as u16, line as u16))?;
        for segment in &range.segments {
            execute!(self.out, SetAttribute(Attribute::Reset))?;
            if let Some(fg) = segment.fg() {
                execute!(self.out, SetForegroundColor(rgba_to_crossterm(fg)))?;
            }
            if let Some(bg) = segment.bg() {
                execute!(self.out, SetBackgroundColor(rgba_to_crossterm(bg)))?;
            }
            if let Some(style) = segment.style() {
                if style.bold {
                    execute!(self.out, SetAttribute(Attribute::Bold))?;
                }
                if style.dim {
                    execute!(self.out, SetAttribute(Attribute::Dim))?;
                }
                if style.italic {
                    execute!(self.out, SetAttribute(Attribute::Italic))?;
                }
                if style.underline {
                    execute!(self.out, SetAttribute(Attribute::Underlined))?;
                }
                if style.strike {
                    execute!(self.out, SetAttribute(Attribute::CrossedOut))?;
                }
                if style.reverse {
                    execute!(self.out, SetAttribute(Attribute::Reverse))?;
                }
            }
            write!(self.out, "{}", segment.text())?;
        }
        let _ = Color::Reset;
        Ok(())
    }
}

use crossterm::{cursor, execute};

impl<W: Write> Driver for CrosstermDriver<W> {
    fn start(&mut self) -> Result<(), DriverError> {
        crossterm::terminal::enable_raw_mode()?;
        execute!(self.out, crossterm::terminal::EnterAlternateScreen, cursor::Hide)?;
        if let Ok((w, h)) = crossterm::terminal::size() {
            self.size = Size::new(w, h);
        }
        self.started = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), DriverError> {
        execute!(self.out, cursor::Show, crossterm::terminal::LeaveAlternateScreen)?;
        crossterm::terminal::disable_raw_mode()?;
        self.started = false;
        Ok(())
    }

    fn get_size(&self) -> Size {
        self.size
    }

    fn set_title(&mut self, title: &str) -> Result<(), DriverError> {
        execute!(self.out, crossterm::terminal::SetTitle(title))?;
        Ok(())
    }

    fn poll_event(&mut self, timeout: Duration) -> Result<Option<Event>, DriverError> {
        if !crossterm::event::poll(timeout)? {
            return Ok(None);
        }
        Ok(translate_event(crossterm::event::read()?, &mut self.size))
    }

    fn write_frame(&mut self, diff: &FrameDiff) -> Result<(), DriverError> {
        if !self.started {
            return Err(DriverError::NotStarted);
        }
        for line_diff in &diff.lines {
            for range in &line_diff.ranges {
                self.write_range(line_diff.line, range)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn set_cursor(&mut self, offset: Option<Offset>) -> Result<(), DriverError> {
        match offset {
            Some(pos) => execute!(self.out, cursor::MoveTo(pos.x.max(0) as u16, pos.y.max(0) as u16), cursor::Show)?,
            None => execute!(self.out, cursor::Hide)?,
        };
        Ok(())
    }

    fn ring_bell(&mut self) -> Result<(), DriverError> {
        write!(self.out, "\x07")?;
        self.out.flush()?;
        Ok(())
    }

    fn enter_inline_mode(&mut self, height: u16) -> Result<(), DriverError> {
        self.inline_height = Some(height);
        Ok(())
    }
}

fn rgba_to_crossterm(c: &loom_style::types::RgbaColor) -> crossterm::style::Color {
    crossterm::style::Color::Rgb { r: c.r, g: c.g, b: c.b }
}

fn translate_event(ev: crossterm::event::Event, size: &mut Size) -> Option<Event> {
    use crossterm::event::{Event as CtEvent, KeyCode, KeyModifiers, MouseButton as CtButton, MouseEventKind};

    match ev {
        CtEvent::Key(key) => {
            let mut modifiers = HashSet::new();
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                modifiers.insert(Modifier::Ctrl);
            }
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                modifiers.insert(Modifier::Shift);
            }
            if key.modifiers.contains(KeyModifiers::ALT) {
                modifiers.insert(Modifier::Alt);
            }
            let (name, character) = match key.code {
                KeyCode::Char(c) => (c.to_lowercase().to_string(), Some(c)),
                KeyCode::Enter => ("enter".to_string(), None),
                KeyCode::Esc => ("escape".to_string(), None),
                KeyCode::Tab => ("tab".to_string(), None),
                KeyCode::Backspace => ("backspace".to_string(), None),
                KeyCode::Delete => ("delete".to_string(), None),
                KeyCode::Up => ("up".to_string(), None),
                KeyCode::Down => ("down".to_string(), None),
                KeyCode::Left => ("left".to_string(), None),
                KeyCode::Right => ("right".to_string(), None),
                KeyCode::Home => ("home".to_string(), None),
                KeyCode::End => ("end".to_string(), None),
                KeyCode::PageUp => ("pageup".to_string(), None),
                KeyCode::PageDown => ("pagedown".to_string(), None),
                KeyCode::F(n) => (format!("f{n}"), None),
                _ => return None,
            };
            Some(Event::Key { name, character, modifiers })
        }
        CtEvent::Mouse(mouse) => {
            let kind = match mouse.kind {
                MouseEventKind::Moved => MouseKind::Move,
                MouseEventKind::Down(_) => MouseKind::Down,
                MouseEventKind::Up(_) => MouseKind::Up,
                MouseEventKind::ScrollUp => MouseKind::ScrollUp,
                MouseEventKind::ScrollDown => MouseKind::ScrollDown,
                MouseEventKind::ScrollLeft => MouseKind::ScrollLeft,
                MouseEventKind::ScrollRight => MouseKind::ScrollRight,
                MouseEventKind::Drag(_) => MouseKind::Move,
            };
            let button = match mouse.kind {
                MouseEventKind::Down(CtButton::Left) | MouseEventKind::Up(CtButton::Left) => MouseButton::Left,
                MouseEventKind::Down(CtButton::Right) | MouseEventKind::Up(CtButton::Right) => MouseButton::Right,
                MouseEventKind::Down(CtButton::Middle) | MouseEventKind::Up(CtButton::Middle) => MouseButton::Middle,
                _ => MouseButton::None,
            };
            let mut modifiers = HashSet::new();
            if mouse.modifiers.contains(KeyModifiers::CONTROL) {
                modifiers.insert(Modifier::Ctrl);
            }
            if mouse.modifiers.contains(KeyModifiers::SHIFT) {
                modifiers.insert(Modifier::Shift);
            }
            if mouse.modifiers.contains(KeyModifiers::ALT) {
                modifiers.insert(Modifier::Alt);
            }
            Some(Event::Mouse {
                kind,
                position: Offset::new(mouse.column as i32, mouse.row as i32),
                button,
                modifiers,
                chain: 1,
            })
        }
        CtEvent::Paste(text) => Some(Event::Paste { text }),
        CtEvent::FocusGained => Some(Event::Focus),
        CtEvent::FocusLost => Some(Event::Blur),
        CtEvent::Resize(w, h) => {
            *size = Size::new(w, h);
            Some(Event::Resize { size: *size })
        }
    }
}
