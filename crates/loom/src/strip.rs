//! Strip: An immutable horizontal line of Segments.
//!
//! Strips represent a single line of styled text. They are the intermediate
//! form between Content (text) and Canvas (rendering). Strips support
//! operations like cropping, alignment, and style application.
//!
//! ## Pipeline Position
//! ```text
//! Content → Strip[] → Segment[] → Canvas
//!              ↑
//!         You are here
//! ```

use crate::segment::{Segment, Style};
use smallvec::{SmallVec, smallvec};
use std::collections::HashMap;
use loom_style::types::RgbaColor;
use loom_style::types::text::AlignHorizontal;

/// Inline storage for 2 segments covers most common text patterns:
/// - Single styled text (1 segment)
/// - "Label: " + "value" (2 segments)
/// Keeping this small reduces struct size and benefits single-segment operations.
pub type SegmentVec = SmallVec<[Segment; 2]>;

/// An immutable horizontal line of segments.
///
/// Strips are the rendering primitive for a single line of output.
/// They track their cell length for efficient layout operations.
///
/// Uses SmallVec internally to avoid heap allocation for lines with
/// 1-2 segments (covers most typical text rendering).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Strip {
    /// The segments that make up this line.
    /// SmallVec<[Segment; 2]> stores up to 2 segments inline without heap allocation.
    segments: SegmentVec,
    /// Cached total cell width.
    cell_length: usize,
}

impl Strip {
    /// Creates an empty strip.
    pub fn new() -> Self {
        Self {
            segments: SegmentVec::new(),
            cell_length: 0,
        }
    }

    /// Creates a strip from a Vec of segments.
    ///
    /// This is the fast path for Vec input - directly converts to SmallVec.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        let cell_length = segments.iter().map(|s| s.cell_length()).sum();
        Self {
            segments: SegmentVec::from_vec(segments),
            cell_length,
        }
    }

    /// Creates a strip from any iterable of segments.
    ///
    /// Use this when you have an array or iterator of segments.
    pub fn from_iter(segments: impl IntoIterator<Item = Segment>) -> Self {
        let segments: SegmentVec = segments.into_iter().collect();
        Self::from_smallvec(segments)
    }

    /// Internal constructor from pre-built SegmentVec.
    fn from_smallvec(segments: SegmentVec) -> Self {
        let cell_length = segments.iter().map(|s| s.cell_length()).sum();
        Self {
            segments,
            cell_length,
        }
    }

    /// Creates a strip from a single segment.
    pub fn from_segment(segment: Segment) -> Self {
        let cell_length = segment.cell_length();
        Self {
            segments: smallvec![segment],
            cell_length,
        }
    }

    /// Creates a blank strip of spaces with the given width and style.
    pub fn blank(width: usize, style: Option<Style>) -> Self {
        if width == 0 {
            return Self::new();
        }
        Self::from_segment(Segment::blank(width, style))
    }

    /// Returns the segments in this strip.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the total cell width of this strip.
    pub fn cell_length(&self) -> usize {
        self.cell_length
    }

    /// Returns true if the strip is empty.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() || self.cell_length == 0
    }

    /// Returns the text content of this strip without styling.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text()).collect()
    }

    /// Apply text opacity by blending foreground colors toward the background.
    ///
    /// When opacity is 0, text is replaced with spaces while preserving background.
    pub fn apply_text_opacity(&self, opacity: f64, fallback_bg: Option<&RgbaColor>) -> Strip {
        if opacity >= 1.0 {
            return self.clone();
        }

        let mut segments: SegmentVec = SegmentVec::new();
        for segment in &self.segments {
            let meta = segment.meta().clone();
            let style = segment.style().cloned();
            let bg = style.as_ref().and_then(|s| s.bg.as_ref()).or(fallback_bg);

            if opacity <= 0.0 {
                let blank_style = style.map(|mut s| {
                    s.fg = None;
                    s
                });
                let blank = Segment::blank(segment.cell_length(), blank_style);
                segments.push(blank.with_meta(meta));
                continue;
            }

            let fg = style
                .as_ref()
                .and_then(|s| s.fg.as_ref())
                .cloned()
                .or_else(|| bg.map(|_| RgbaColor::rgba(255, 255, 255, 1.0)));

            let adjusted_style = if let Some(fg) = fg {
                let blended = if let Some(bg) = bg {
                    fg.blend_toward(bg, opacity)
                } else {
                    fg.with_opacity(opacity)
                };
                let mut new_style = style.unwrap_or_default();
                new_style.fg = Some(blended);
                Some(new_style)
            } else {
                style
            };

            let new_segment = match adjusted_style {
                Some(style) => Segment::styled(segment.text(), style).with_meta(meta),
                None => Segment::new(segment.text()).with_meta(meta),
            };
            segments.push(new_segment);
        }

        Strip::from_smallvec(segments)
    }

    /// Extracts a portion of the strip from `start` to `end` cell positions.
    ///
    /// The resulting strip contains cells in the range [start, end).
    pub fn crop(&self, start: usize, end: usize) -> Strip {
        if start >= end || start >= self.cell_length {
            return Strip::new();
        }

        let end = end.min(self.cell_length);
        let mut result_segments = SegmentVec::new();
        let mut current_pos = 0;

        for segment in &self.segments {
            let seg_len = segment.cell_length();
            let seg_end = current_pos + seg_len;

            // Skip segments entirely before start
            if seg_end <= start {
                current_pos = seg_end;
                continue;
            }

            // Stop after end
            if current_pos >= end {
                break;
            }

            // Calculate how much of this segment to include
            let local_start = start.saturating_sub(current_pos);
            let local_end = (end - current_pos).min(seg_len);

            if local_start == 0 && local_end == seg_len {
                // Include entire segment
                result_segments.push(segment.clone());
            } else if local_start == 0 {
                // Take from start
                let (left, _) = segment.split_at(local_end);
                if !left.is_empty() {
                    result_segments.push(left);
                }
            } else if local_end == seg_len {
                // Take to end
                let (_, right) = segment.split_at(local_start);
                if !right.is_empty() {
                    result_segments.push(right);
                }
            } else {
                // Take middle portion
                let (_, temp) = segment.split_at(local_start);
                let (middle, _) = temp.split_at(local_end - local_start);
                if !middle.is_empty() {
                    result_segments.push(middle);
                }
            }

            current_pos = seg_end;
        }

        Strip::from_smallvec(result_segments)
    }

    /// Splits the strip at the given cell positions.
    ///
    /// Returns a vector of strips, one for each segment between cuts.
    pub fn divide(&self, cuts: &[usize]) -> Vec<Strip> {
        if cuts.is_empty() {
            return vec![self.clone()];
        }

        let mut result = Vec::with_capacity(cuts.len() + 1);
        let mut last = 0;

        for &cut in cuts {
            if cut > last && cut <= self.cell_length {
                result.push(self.crop(last, cut));
                last = cut;
            }
        }

        // Add remaining portion
        if last < self.cell_length {
            result.push(self.crop(last, self.cell_length));
        }

        result
    }

    /// Applies a style to all segments in this strip.
    ///
    /// Returns a new strip with the style layered on top of existing styles.
    pub fn apply_style(&self, style: &Style) -> Strip {
        let segments: Vec<_> = self.segments.iter().map(|s| s.apply_style(style)).collect();
        Strip::from_segments(segments)
    }

    /// Merges adjacent segments with identical styles.
    ///
    /// This reduces memory usage and simplifies rendering.
    pub fn simplify(&self) -> Strip {
        if self.segments.len() <= 1 {
            return self.clone();
        }

        let mut result = SegmentVec::new();
        let mut current_text = String::new();
        let mut current_style: Option<Style> = None;
        let mut has_current = false;

        for segment in &self.segments {
            if !has_current {
                current_text = segment.text().to_string();
                current_style = segment.style().cloned();
                has_current = true;
            } else if segment.style() == current_style.as_ref() {
                // Same style, merge text
                current_text.push_str(segment.text());
            } else {
                // Different style, emit current and start new
                if !current_text.is_empty() {
                    match current_style {
                        Some(s) => result.push(Segment::styled(current_text, s)),
                        None => result.push(Segment::new(current_text)),
                    }
                }
                current_text = segment.text().to_string();
                current_style = segment.style().cloned();
            }
        }

        // Emit final segment
        if !current_text.is_empty() {
            match current_style {
                Some(s) => result.push(Segment::styled(current_text, s)),
                None => result.push(Segment::new(current_text)),
            }
        }

        Strip::from_smallvec(result)
    }

    /// Concatenates multiple strips into one.
    pub fn join(strips: impl IntoIterator<Item = Strip>) -> Strip {
        let mut segments = SegmentVec::new();
        for strip in strips {
            segments.extend(strip.segments);
        }
        Strip::from_smallvec(segments)
    }

    /// Adjusts the strip to exactly the given length.
    ///
    /// If shorter, pads with spaces using the provided style.
    /// If longer, crops to fit.
    pub fn adjust_cell_length(&self, length: usize, pad_style: Option<Style>) -> Strip {
        match self.cell_length.cmp(&length) {
            std::cmp::Ordering::Equal => self.clone(),
            std::cmp::Ordering::Greater => self.crop(0, length),
            std::cmp::Ordering::Less => {
                let padding = Segment::blank(length - self.cell_length, pad_style);
                let mut segments = self.segments.clone();
                segments.push(padding);
                Strip::from_smallvec(segments)
            }
        }
    }

    /// Aligns text within a given width.
    ///
    /// Returns a new strip of exactly `width` cells with the content aligned
    /// according to the specified alignment.
    pub fn text_align(
        &self,
        align: AlignHorizontal,
        width: usize,
        pad_style: Option<Style>,
    ) -> Strip {
        if self.cell_length >= width {
            return self.crop(0, width);
        }

        let gap = width - self.cell_length;

        match align {
            AlignHorizontal::Left => {
                // Content at start, padding at end
                let padding = Segment::blank(gap, pad_style);
                let mut segments = self.segments.clone();
                segments.push(padding);
                Strip::from_smallvec(segments)
            }
            AlignHorizontal::Right => {
                // Padding at start, content at end
                let padding = Segment::blank(gap, pad_style);
                let mut segments: SegmentVec = smallvec![padding];
                segments.extend(self.segments.iter().cloned());
                Strip::from_smallvec(segments)
            }
            AlignHorizontal::Center => {
                // Split padding between start and end
                let left_pad = gap / 2;
                let right_pad = gap - left_pad;

                let mut segments = SegmentVec::new();
                if left_pad > 0 {
                    segments.push(Segment::blank(left_pad, pad_style.clone()));
                }
                segments.extend(self.segments.iter().cloned());
                if right_pad > 0 {
                    segments.push(Segment::blank(right_pad, pad_style));
                }
                Strip::from_smallvec(segments)
            }
        }
    }

    /// Fully justifies text to fill the given width.
    pub fn justify(&self, width: usize, pad_style: Option<Style>) -> Strip {
        if self.cell_length >= width {
            return self.crop(0, width);
        }

        let gap_count: usize = self
            .segments
            .iter()
            .map(|seg| seg.text().chars().filter(|ch| *ch == ' ').count())
            .sum();

        if gap_count == 0 {
            return self.text_align(AlignHorizontal::Left, width, pad_style);
        }

        let extra = width.saturating_sub(self.cell_length);
        let mut extra_per_gap = vec![0usize; gap_count];
        for i in 0..extra {
            let idx = gap_count - 1 - (i % gap_count);
            extra_per_gap[idx] += 1;
        }

        let mut gap_index = 0;
        let mut segments = SegmentVec::new();

        for seg in &self.segments {
            let style = seg.style().cloned();
            let meta = seg.meta();
            let mut buffer = String::new();

            for ch in seg.text().chars() {
                if ch == ' ' {
                    if !buffer.is_empty() {
                        segments.push(build_segment(&buffer, style.clone(), meta));
                        buffer.clear();
                    }

                    let extra_spaces = extra_per_gap.get(gap_index).copied().unwrap_or(0);
                    gap_index += 1;
                    let total = 1 + extra_spaces;
                    let spaces = " ".repeat(total);
                    segments.push(build_segment(&spaces, style.clone(), meta));
                } else {
                    buffer.push(ch);
                }
            }

            if !buffer.is_empty() {
                segments.push(build_segment(&buffer, style.clone(), meta));
            }
        }

        Strip::from_smallvec(segments)
    }

    /// Applies a tint color to all segments in this strip.
    ///
    /// This is post-processing that tints both fg and bg colors using
    /// Loom's linear interpolation formula:
    /// `result = base + (overlay - base) * alpha`
    ///
    /// Returns a new strip with tinted colors. If the tint is fully
    /// transparent (alpha = 0), returns a clone of the original strip.
    pub fn apply_tint(&self, tint: &RgbaColor) -> Strip {
        // Skip if tint is fully transparent
        if tint.a == 0.0 {
            return self.clone();
        }

        let tinted_segments: SegmentVec = self
            .segments
            .iter()
            .map(|seg| seg.apply_tint(tint))
            .collect();

        Strip::from_smallvec(tinted_segments)
    }

    /// Apply a hatch pattern to this strip.
    ///
    /// Replaces space characters with the hatch character and applies
    /// the hatch color as the foreground. Non-space characters are unchanged.
    pub fn apply_hatch(&self, hatch_char: char, hatch_color: &RgbaColor, opacity: f32) -> Strip {
        let hatched_segments: SegmentVec = self
            .segments
            .iter()
            .map(|seg| seg.apply_hatch(hatch_char, hatch_color, opacity))
            .collect();

        Strip::from_smallvec(hatched_segments)
    }
}

fn build_segment(text: &str, style: Option<Style>, meta: &HashMap<String, String>) -> Segment {
    let mut segment = match style {
        Some(style) => Segment::styled(text, style),
        None => Segment::new(text),
    };

    if !meta.is_empty() {
        segment = segment.with_meta(meta.clone());
    }

    segment
}
