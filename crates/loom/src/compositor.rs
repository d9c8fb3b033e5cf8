//! Merges per-widget renders into per-line output for a viewport.
//!
//! The compositor never talks to a terminal. It takes a viewport and a set
//! of already-rendered widget layers (bottom to top) and produces a `Frame`:
//! one `Strip` per visible line. Consecutive frames can be diffed into a
//! `FrameDiff`, a sorted list of changed cell ranges per line, which is the
//! unit the Driver actually writes.

use crate::canvas::{Region, Size};
use crate::segment::{Segment, Style};
use crate::spatial_map::WidgetId;
use crate::strip::Strip;
use loom_style::types::RgbaColor;

/// A widget's render, already produced for the current scroll offset.
///
/// `region` is absolute (screen coordinates). `strips[i]` is row `i` of
/// that region, in the widget's own local coordinates.
pub struct Layer<'a> {
    pub id: WidgetId,
    pub region: Region,
    pub strips: &'a [Strip],
}

/// A fully composed screen: one Strip per visible line.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub size: Size,
    pub lines: Vec<Strip>,
}

impl Frame {
    pub fn blank(size: Size) -> Self {
        Self {
            size,
            lines: vec![Strip::blank(size.width as usize, None); size.height as usize],
        }
    }
}

/// A contiguous run of cells that changed between two frames, carrying the
/// new frame's segments for that range.
#[derive(Debug, Clone, PartialEq)]
pub struct CellRangeDiff {
    pub start: usize,
    pub end: usize,
    pub segments: Vec<Segment>,
}

/// Per-line diff: the ranges that changed, in ascending, non-overlapping order.
#[derive(Debug, Clone, PartialEq)]
pub struct LineDiff {
    pub line: usize,
    pub ranges: Vec<CellRangeDiff>,
}

/// The changes a Driver needs to apply to go from one Frame to the next.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameDiff {
    pub lines: Vec<LineDiff>,
}

impl FrameDiff {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Composes a viewport from a stack of layers already sorted bottom to top
/// (i.e. by `(screen-layer, paint order)` ascending - the last entry in
/// `layers` that covers a cell wins it).
///
/// Pure function of its inputs: identical `layers`/`viewport` always
/// produce an identical `Frame`.
pub fn compose(layers: &[Layer], viewport: Region) -> Frame {
    let width = viewport.width.max(0) as usize;
    let height = viewport.height.max(0) as usize;
    let mut lines = Vec::with_capacity(height);

    for row in 0..height {
        let y = viewport.y + row as i32;
        lines.push(compose_line(layers, viewport, y));
    }

    Frame {
        size: Size::new(width as u16, height as u16),
        lines,
    }
}

fn compose_line(layers: &[Layer], viewport: Region, y: i32) -> Strip {
    let width = viewport.width.max(0) as usize;
    if width == 0 {
        return Strip::new();
    }

    // Candidates whose region spans this line, preserving caller's stacking order.
    let candidates: Vec<&Layer> = layers
        .iter()
        .filter(|l| y >= l.region.y && y < l.region.y + l.region.height)
        .filter(|l| l.region.x < viewport.x + viewport.width && l.region.x + l.region.width > viewport.x)
        .collect();

    if candidates.is_empty() {
        return Strip::blank(width, None);
    }

    // Cuts: every x where some candidate's region starts or ends, clamped
    // into the viewport's x-range, plus the viewport's own edges.
    let mut cuts: Vec<i32> = vec![viewport.x, viewport.x + viewport.width];
    for layer in &candidates {
        cuts.push(layer.region.x.clamp(viewport.x, viewport.x + viewport.width));
        cuts.push((layer.region.x + layer.region.width).clamp(viewport.x, viewport.x + viewport.width));
    }
    cuts.sort_unstable();
    cuts.dedup();

    let mut out = Strip::new();
    for window in cuts.windows(2) {
        let (a, b) = (window[0], window[1]);
        if b <= a {
            continue;
        }
        let covering: Vec<Strip> = candidates
            .iter()
            .filter(|l| l.region.x <= a && l.region.x + l.region.width >= b)
            .map(|l| {
                let row = &l.strips[(y - l.region.y) as usize];
                row.crop((a - l.region.x) as usize, (b - l.region.x) as usize)
            })
            .collect();
        let segment_strip = if covering.is_empty() {
            Strip::blank((b - a) as usize, None)
        } else {
            tint_and_pick(&covering)
        };
        out = Strip::join([out, segment_strip]);
    }
    out.adjust_cell_length(width, None)
}

/// Composites a stack of same-width strips (bottom to top) into one.
///
/// The topmost strip always supplies each cell's glyph and foreground; its
/// background, if translucent, is alpha-blended against every background
/// beneath it first (spec step 5 - "background tint").
fn tint_and_pick(covering: &[Strip]) -> Strip {
    if covering.len() == 1 {
        return covering[0].clone();
    }
    let width = covering[0].cell_length();
    let mut segments = Vec::with_capacity(width);
    let mut run_text = String::new();
    let mut run_style: Option<Style> = None;

    for x in 0..width {
        let mut bg: Option<RgbaColor> = None;
        let mut top_text = " ".to_string();
        let mut top_fg: Option<RgbaColor> = None;
        let mut top_attrs = Style::default();

        for strip in covering {
            let cell = strip.crop(x, x + 1);
            let seg = cell.segments().first();
            let (text, style) = match seg {
                Some(s) => (s.text().to_string(), s.style().cloned().unwrap_or_default()),
                None => (" ".to_string(), Style::default()),
            };
            if let Some(cell_bg) = style.bg.as_ref() {
                bg = Some(match bg {
                    Some(below) => alpha_over(&below, cell_bg),
                    None => cell_bg.clone(),
                });
            }
            top_text = text;
            top_fg = style.fg.clone();
            top_attrs = style;
        }

        let style = Style {
            fg: top_fg,
            bg,
            ..top_attrs
        };
        if run_style.as_ref() != Some(&style) && !run_text.is_empty() {
            segments.push(Segment::styled(
                std::mem::take(&mut run_text),
                run_style.take().unwrap(),
            ));
        }
        run_style = Some(style);
        run_text.push_str(&top_text);
    }
    if !run_text.is_empty() {
        segments.push(Segment::styled(run_text, run_style.unwrap()));
    }
    Strip::from_segments(segments)
}

/// Standard "over" alpha compositing: `above` painted on top of `below`.
fn alpha_over(below: &RgbaColor, above: &RgbaColor) -> RgbaColor {
    if above.a >= 1.0 {
        return above.clone();
    }
    if above.a <= 0.0 {
        return below.clone();
    }
    let a = above.a;
    let blend = |c_above: u8, c_below: u8| -> u8 {
        (c_above as f32 * a + c_below as f32 * (1.0 - a)).round().clamp(0.0, 255.0) as u8
    };
    RgbaColor {
        r: blend(above.r, below.r),
        g: blend(above.g, below.g),
        b: blend(above.b, below.b),
        a: above.a + below.a * (1.0 - above.a),
        ansi: None,
        auto: false,
        theme_var: None,
    }
}

/// Computes the diff to apply to `prev` to reach `next`.
///
/// Only lines whose composed Strip changed are included; within a changed
/// line, cell ranges are further narrowed to the contiguous runs that
/// actually differ.
pub fn diff_frames(prev: &Frame, next: &Frame) -> FrameDiff {
    let mut lines = Vec::new();
    for (idx, (old, new)) in prev.lines.iter().zip(next.lines.iter()).enumerate() {
        if old == new {
            continue;
        }
        let ranges = diff_line(old, new);
        if !ranges.is_empty() {
            lines.push(LineDiff { line: idx, ranges });
        }
    }
    FrameDiff { lines }
}

fn diff_line(old: &Strip, new: &Strip) -> Vec<CellRangeDiff> {
    let width = new.cell_length();
    let mut ranges = Vec::new();
    let mut run_start: Option<usize> = None;

    for x in 0..width {
        let differs = old.crop(x, x + 1) != new.crop(x, x + 1);
        match (differs, run_start) {
            (true, None) => run_start = Some(x),
            (false, Some(start)) => {
                ranges.push(CellRangeDiff {
                    start,
                    end: x,
                    segments: new.crop(start, x).segments().to_vec(),
                });
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        ranges.push(CellRangeDiff {
            start,
            end: width,
            segments: new.crop(start, width).segments().to_vec(),
        });
    }
    ranges
}

/// Applies a `FrameDiff` to `frame` in place, line by line.
///
/// Used to check the partial-update invariant: applying the diff emitted
/// for `next` to `prev` must yield exactly `next`.
pub fn apply_diff(frame: &mut Frame, diff: &FrameDiff) {
    for line_diff in &diff.lines {
        let strip = &mut frame.lines[line_diff.line];
        for range in &line_diff.ranges {
            let before = strip.crop(0, range.start);
            let after = strip.crop(range.end, strip.cell_length());
            let middle = Strip::from_segments(range.segments.clone());
            *strip = Strip::join([before, middle, after]);
        }
    }
}
