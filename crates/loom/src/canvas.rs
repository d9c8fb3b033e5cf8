use crossterm::{
    cursor, execute,
    style::{Attribute, Color, SetAttribute, SetBackgroundColor, SetForegroundColor},
};
use std::io::Write;
use loom_style::types::RgbaColor;

use crate::segment::Segment;
use crate::strip::Strip;

/// Text styling attributes (bold, italic, etc.)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextAttributes {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike: bool,
    pub reverse: bool,
}

/// The physical dimensions of a widget or terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    /// Create a new Size with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A signed cell-integer displacement, used to translate regions and to
/// report pointer/scroll positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Offset {
    type Output = Offset;
    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Offset {
    type Output = Offset;
    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Integer cell spacing around a region, used by `Region::shrink`/`Region::grow`.
///
/// Distinct from `loom_style::types::Spacing`, which carries unresolved
/// `Scalar`s; this type holds already-resolved cell counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellSpacing {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl CellSpacing {
    pub fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self { top, right, bottom, left }
    }

    pub fn all(n: i32) -> Self {
        Self::new(n, n, n, n)
    }
}

/// A signed rectangular region for layout and clipping.
///
/// Coordinates are signed (i32) to allow off-screen positioning (e.g. scrolling).
/// Width and height are signed but invariant-checked to be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// Create a new region, clamping width and height to be non-negative.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Helper for migration from u16 types.
    pub fn from_u16(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self::new(x as i32, y as i32, width as i32, height as i32)
    }

    /// Returns the intersection of this region with another.
    /// If there is no overlap, returns an empty region.
    /// Uses saturating arithmetic to prevent overflow with large coordinates.
    pub fn intersection(&self, other: &Region) -> Region {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.x.saturating_add(self.width).min(other.x.saturating_add(other.width));
        let y2 = self.y.saturating_add(self.height).min(other.y.saturating_add(other.height));

        if x2 > x1 && y2 > y1 {
            Region {
                x: x1,
                y: y1,
                width: x2 - x1,
                height: y2 - y1,
            }
        } else {
            Region {
                x: 0,
                y: 0,
                width: 0,
                height: 0,
            }
        }
    }

    /// Checks if a point is contained within the region.
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }

    /// Checks if an `Offset` is contained within the region.
    pub fn contains(&self, offset: Offset) -> bool {
        self.contains_point(offset.x, offset.y)
    }

    /// Returns true if the region has no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Returns the smallest region that bounds both `self` and `other`.
    ///
    /// An empty region unions away to the other operand.
    pub fn union(&self, other: &Region) -> Region {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = self.x.saturating_add(self.width).max(other.x.saturating_add(other.width));
        let y2 = self.y.saturating_add(self.height).max(other.y.saturating_add(other.height));
        Region {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
        }
    }

    /// Returns a copy of this region moved by `offset`.
    pub fn translate(&self, offset: Offset) -> Region {
        Region {
            x: self.x + offset.x,
            y: self.y + offset.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Returns a copy of this region inset by `spacing` on each edge.
    ///
    /// Width/height never go negative.
    pub fn shrink(&self, spacing: CellSpacing) -> Region {
        let width = (self.width - spacing.left - spacing.right).max(0);
        let height = (self.height - spacing.top - spacing.bottom).max(0);
        Region {
            x: self.x + spacing.left,
            y: self.y + spacing.top,
            width,
            height,
        }
    }

    /// Returns a copy of this region expanded by `spacing` on each edge.
    pub fn grow(&self, spacing: CellSpacing) -> Region {
        Region {
            x: self.x - spacing.left,
            y: self.y - spacing.top,
            width: (self.width + spacing.left + spacing.right).max(0),
            height: (self.height + spacing.top + spacing.bottom).max(0),
        }
    }

    /// Splits this region into a top and bottom region at absolute row `y`.
    ///
    /// `y` is clamped into `[self.y, self.y + self.height]`.
    pub fn split_horizontal(&self, y: i32) -> (Region, Region) {
        let y = y.clamp(self.y, self.y + self.height);
        let top = Region::new(self.x, self.y, self.width, y - self.y);
        let bottom = Region::new(self.x, y, self.width, self.y + self.height - y);
        (top, bottom)
    }

    /// Splits this region into a left and right region at absolute column `x`.
    ///
    /// `x` is clamped into `[self.x, self.x + self.width]`.
    pub fn split_vertical(&self, x: i32) -> (Region, Region) {
        let x = x.clamp(self.x, self.x + self.width);
        let left = Region::new(self.x, self.y, x - self.x, self.height);
        let right = Region::new(x, self.y, self.x + self.width - x, self.height);
        (left, right)
    }

    /// Returns this region clipped to fit entirely within `container`.
    ///
    /// Equivalent to `self.intersection(container)`; never returns negative
    /// dimensions.
    pub fn clip(&self, container: &Region) -> Region {
        self.intersection(container)
    }
}

#[derive(Clone, Debug)]
pub struct Cell {
    pub symbol: char,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub attrs: TextAttributes,
    /// Pre-composite color as authored, alpha included. The compositor reads
    /// these rather than `fg`/`bg` so translucent backgrounds can still be
    /// blended against whatever ends up beneath them in the stacking order.
    pub fg_rgba: Option<RgbaColor>,
    pub bg_rgba: Option<RgbaColor>,
}

pub struct Canvas {
    size: Size,
    cells: Vec<Cell>,
    // Track current active colors to minimize ANSI escape codes
    // TODO: Use these for optimization in flush()
    #[allow(dead_code)]
    current_fg: Option<Color>,
    #[allow(dead_code)]
    current_bg: Option<Color>,
    /// Stack of clipping regions. The active clip is the intersection of all.
    clip_stack: Vec<Region>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            size: Size { width, height },
            cells: vec![
                Cell {
                    symbol: ' ',
                    fg: None,
                    bg: None,
                    attrs: TextAttributes::default(),
                    fg_rgba: None,
                    bg_rgba: None,
                };
                (width * height) as usize
            ],
            current_fg: None,
            current_bg: None,
            clip_stack: Vec::new(),
        }
    }

    // === Clipping ===

    /// Pushes a new clipping region onto the stack.
    /// The effective clip becomes the intersection of current clip and new region.
    pub fn push_clip(&mut self, region: Region) {
        let current = self.current_clip();
        let intersection = region.intersection(&current);
        self.clip_stack.push(intersection);
    }

    /// Removes the most recent clipping region.
    pub fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }

    /// Returns the current effective clipping region.
    /// If stack is empty, returns the full screen.
    fn current_clip(&self) -> Region {
        self.clip_stack.last().cloned().unwrap_or(Region {
            x: 0,
            y: 0,
            width: self.size.width as i32,
            height: self.size.height as i32,
        })
    }

    // === Drawing ===

    /// Writes a character to the canvas at (x, y).
    /// Coordinates are i32 and will be clipped if off-screen or outside clip region.
    pub fn put_char(
        &mut self,
        x: i32,
        y: i32,
        c: char,
        fg: Option<RgbaColor>,
        bg: Option<RgbaColor>,
        attrs: TextAttributes,
    ) {
        let clip = self.current_clip();

        // Clip bounds check
        if x < clip.x || x >= clip.x + clip.width {
            return;
        }
        if y < clip.y || y >= clip.y + clip.height {
            return;
        }

        // Screen bounds check
        if x < 0 || x >= self.size.width as i32 || y < 0 || y >= self.size.height as i32 {
            return;
        }

        let index = (y as usize) * (self.size.width as usize) + (x as usize);
        self.cells[index] = Cell {
            symbol: c,
            fg: fg.clone().map(to_crossterm_color),
            bg: bg.clone().map(to_crossterm_color),
            attrs,
            fg_rgba: fg,
            bg_rgba: bg,
        };
    }

    /// Writes a string to the canvas at (x, y).
    /// Coordinates are i32 and will be clipped appropriately.
    pub fn put_str(
        &mut self,
        x: i32,
        y: i32,
        s: &str,
        fg: Option<RgbaColor>,
        bg: Option<RgbaColor>,
        attrs: TextAttributes,
    ) {
        let clip = self.current_clip();

        // Early vertical clip check
        if y < clip.y || y >= clip.y + clip.height {
            return;
        }
        if y < 0 || y >= self.size.height as i32 {
            return;
        }

        let mut current_x = x;
        for c in s.chars() {
            // Stop if past right edge of clip
            if current_x >= clip.x + clip.width {
                break;
            }
            // Only draw if within clip region and screen
            if current_x >= clip.x && current_x >= 0 && current_x < self.size.width as i32 {
                let index = (y as usize) * (self.size.width as usize) + (current_x as usize);
                self.cells[index] = Cell {
                    symbol: c,
                    fg: fg.clone().map(to_crossterm_color),
                    bg: bg.clone().map(to_crossterm_color),
                    attrs,
                    fg_rgba: fg.clone(),
                    bg_rgba: bg.clone(),
                };
            }
            current_x += 1;
        }
    }

    /// Renders a Strip at the given position.
    ///
    /// Iterates through each segment in the strip and renders its text
    /// with the appropriate styling. The strip is rendered left-to-right
    /// starting at (x, y).
    pub fn render_strip(&mut self, strip: &Strip, x: i32, y: i32) {
        let mut current_x = x;

        for segment in strip.segments() {
            let fg = segment.fg().cloned();
            let bg = segment.bg().cloned();
            let attrs = segment
                .style()
                .map(|s| TextAttributes {
                    bold: s.bold,
                    dim: s.dim,
                    italic: s.italic,
                    underline: s.underline,
                    strike: s.strike,
                    reverse: s.reverse,
                })
                .unwrap_or_default();
            self.put_str(current_x, y, segment.text(), fg, bg, attrs);
            current_x += segment.cell_length() as i32;
        }
    }

    /// Renders multiple Strips starting at the given position.
    ///
    /// Each strip is rendered on a successive line, starting at `start_y`.
    pub fn render_strips(&mut self, strips: &[Strip], x: i32, start_y: i32) {
        for (i, strip) in strips.iter().enumerate() {
            self.render_strip(strip, x, start_y + i as i32);
        }
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        let mut out = std::io::stdout();
        execute!(out, cursor::MoveTo(0, 0))?;

        // Reset colors and attributes at start of each render to prevent bleeding
        // between frames. Without this, the terminal keeps colors/attributes from the
        // previous render when cells have None for fg/bg.
        execute!(out, SetForegroundColor(Color::Reset))?;
        execute!(out, SetBackgroundColor(Color::Reset))?;
        execute!(out, SetAttribute(Attribute::Reset))?;

        let mut last_fg = Some(Color::Reset);
        let mut last_bg = Some(Color::Reset);
        let mut last_attrs = TextAttributes::default();

        let rows: Vec<_> = self.cells.chunks(self.size.width as usize).collect();
        let num_rows = rows.len();

        for (row_idx, row) in rows.into_iter().enumerate() {
            for cell in row {
                // Handle attribute changes
                if cell.attrs != last_attrs {
                    // Reset all attributes first, then set the new ones
                    execute!(out, SetAttribute(Attribute::Reset))?;
                    if cell.attrs.bold {
                        execute!(out, SetAttribute(Attribute::Bold))?;
                    }
                    if cell.attrs.dim {
                        execute!(out, SetAttribute(Attribute::Dim))?;
                    }
                    if cell.attrs.italic {
                        execute!(out, SetAttribute(Attribute::Italic))?;
                    }
                    if cell.attrs.underline {
                        execute!(out, SetAttribute(Attribute::Underlined))?;
                    }
                    if cell.attrs.strike {
                        execute!(out, SetAttribute(Attribute::CrossedOut))?;
                    }
                    if cell.attrs.reverse {
                        execute!(out, SetAttribute(Attribute::Reverse))?;
                    }
                    last_attrs = cell.attrs;
                    // Reset color tracking since attribute reset clears colors
                    last_fg = None;
                    last_bg = None;
                }

                // Only send escape code if the color actually changed
                if cell.fg != last_fg {
                    let color = cell.fg.unwrap_or(Color::Reset);
                    execute!(out, SetForegroundColor(color))?;
                    last_fg = cell.fg;
                }
                if cell.bg != last_bg {
                    let color = cell.bg.unwrap_or(Color::Reset);
                    execute!(out, SetBackgroundColor(color))?;
                    last_bg = cell.bg;
                }
                write!(out, "{}", cell.symbol)?;
            }
            // Don't print newline after the last row to prevent terminal scrolling
            if row_idx < num_rows - 1 {
                write!(out, "\r\n")?;
            }
        }
        out.flush()?;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell {
            symbol: ' ',
            fg: None,
            bg: None,
            attrs: TextAttributes::default(),
            fg_rgba: None,
            bg_rgba: None,
        });
        self.clip_stack.clear();
    }

    // === Test helpers ===

    /// Get the character at (x, y) for testing.
    pub fn get_char(&self, x: i32, y: i32) -> char {
        if x < 0 || x >= self.size.width as i32 || y < 0 || y >= self.size.height as i32 {
            return '\0';
        }
        let index = (y as usize) * (self.size.width as usize) + (x as usize);
        self.cells[index].symbol
    }

    /// Get all characters in a row as a string for testing.
    pub fn row_str(&self, y: i32) -> String {
        if y < 0 || y >= self.size.height as i32 {
            return String::new();
        }
        let start = (y as usize) * (self.size.width as usize);
        let end = start + (self.size.width as usize);
        self.cells[start..end].iter().map(|c| c.symbol).collect()
    }

    /// Check if a cell has a background color set (for testing scrollbar presence).
    pub fn has_bg_at(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= self.size.width as i32 || y < 0 || y >= self.size.height as i32 {
            return false;
        }
        let index = (y as usize) * (self.size.width as usize) + (x as usize);
        self.cells[index].bg.is_some()
    }

    /// Converts row `y` into a `Strip`, run-length-encoding adjacent cells
    /// that share the same style so the compositor isn't handed one segment
    /// per character.
    ///
    /// Unlike `row_str`, this reads `fg_rgba`/`bg_rgba` rather than the
    /// resolved terminal `Color`, so alpha survives for background-tint
    /// blending in the compositor.
    pub fn to_strip(&self, y: i32) -> Strip {
        if y < 0 || y >= self.size.height as i32 {
            return Strip::new();
        }
        let start = (y as usize) * (self.size.width as usize);
        let row = &self.cells[start..start + self.size.width as usize];

        let mut segments = Vec::new();
        let mut run_text = String::new();
        let mut run_style: Option<crate::segment::Style> = None;

        for cell in row {
            let style = cell_style(cell);
            if run_style.as_ref() != Some(&style) && !run_text.is_empty() {
                segments.push(Segment::styled(
                    std::mem::take(&mut run_text),
                    run_style.take().unwrap(),
                ));
            }
            run_style = Some(style);
            run_text.push(cell.symbol);
        }
        if !run_text.is_empty() {
            segments.push(Segment::styled(run_text, run_style.unwrap()));
        }
        Strip::from_segments(segments)
    }

    /// Converts every row into a `Strip`, top to bottom.
    pub fn to_strips(&self) -> Vec<Strip> {
        (0..self.size.height as i32).map(|y| self.to_strip(y)).collect()
    }

    /// Renders the canvas to a deterministic plain-text block suitable for
    /// `insta::assert_snapshot!`. Trailing whitespace on each row is trimmed
    /// so snapshots don't churn on cosmetic padding differences.
    pub fn to_snapshot(&self) -> String {
        (0..self.size.height as i32)
            .map(|y| self.row_str(y).trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders the canvas to truecolor ANSI escape sequences, one line per
    /// row, each line reset with `\x1b[0m`. Unlike `to_snapshot`, colors and
    /// text attributes are preserved, so this is the snapshot format to use
    /// when a test cares about styling rather than just layout.
    pub fn to_ansi_snapshot(&self) -> String {
        self.to_strips()
            .iter()
            .map(strip_to_ansi_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn strip_to_ansi_line(strip: &Strip) -> String {
    let mut line = String::new();
    for segment in strip.segments() {
        if let Some(style) = segment.style() {
            line.push_str(&ansi_prefix(style));
            line.push_str(segment.text());
            line.push_str("\x1b[0m");
        } else {
            line.push_str(segment.text());
        }
    }
    line
}

fn ansi_prefix(style: &crate::segment::Style) -> String {
    let mut codes = Vec::new();
    if style.bold {
        codes.push("1".to_string());
    }
    if style.dim {
        codes.push("2".to_string());
    }
    if style.italic {
        codes.push("3".to_string());
    }
    if style.underline {
        codes.push("4".to_string());
    }
    if style.reverse {
        codes.push("7".to_string());
    }
    if style.strike {
        codes.push("9".to_string());
    }
    if let Some(fg) = &style.fg {
        codes.push(format!("38;2;{};{};{}", fg.r, fg.g, fg.b));
    }
    if let Some(bg) = &style.bg {
        codes.push(format!("48;2;{};{};{}", bg.r, bg.g, bg.b));
    }
    if codes.is_empty() {
        String::new()
    } else {
        format!("\x1b[{}m", codes.join(";"))
    }
}

fn cell_style(cell: &Cell) -> crate::segment::Style {
    crate::segment::Style {
        fg: cell.fg_rgba.clone(),
        bg: cell.bg_rgba.clone(),
        bold: cell.attrs.bold,
        dim: cell.attrs.dim,
        italic: cell.attrs.italic,
        underline: cell.attrs.underline,
        strike: cell.attrs.strike,
        reverse: cell.attrs.reverse,
    }
}

fn to_crossterm_color(c: RgbaColor) -> Color {
    // Terminals don't support true alpha transparency, so we pre-composite
    // semi-transparent colors against black (terminal default background).
    // Formula: result = base + (color - base) * alpha, where base = black (0,0,0)
    // Simplified: result = color * alpha
    let alpha = c.a;
    if alpha >= 1.0 {
        Color::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    } else {
        Color::Rgb {
            r: (c.r as f32 * alpha).round() as u8,
            g: (c.g as f32 * alpha).round() as u8,
            b: (c.b as f32 * alpha).round() as u8,
        }
    }
}
