//! ScrollBarCorner widget for filling the gap between scrollbars.
//!
//! When both horizontal and vertical scrollbars are visible, there's a
//! corner gap where they meet. This widget fills that gap so the chrome
//! reads as one continuous frame instead of leaving a hole.

use loom_style::types::RgbaColor;
use loom_style::ComputedStyle;

use crate::canvas::{Canvas, Region, TextAttributes};
use crate::widget::Widget;
use crate::Size;

/// Fills the corner gap where a vertical and a horizontal scrollbar meet.
pub struct ScrollBarCorner {
    /// Corner color override, independent of CSS.
    color: Option<RgbaColor>,
    /// Width of the corner, matching the vertical scrollbar's thickness.
    width: u16,
    /// Height of the corner, matching the horizontal scrollbar's thickness.
    height: u16,
    style: ComputedStyle,
    dirty: bool,
}

impl ScrollBarCorner {
    /// Create a new scrollbar corner sized to the given scrollbar thicknesses.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            color: None,
            width,
            height,
            style: ComputedStyle::default(),
            dirty: true,
        }
    }

    /// Override the corner color directly, bypassing CSS.
    pub fn with_color(mut self, color: RgbaColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Update dimensions when scrollbar thicknesses change.
    pub fn update_size(&mut self, width: u16, height: u16) {
        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.dirty = true;
        }
    }

    fn effective_color(&self) -> RgbaColor {
        self.color
            .clone()
            .unwrap_or_else(|| self.style.scrollbar.effective_corner_color())
    }
}

impl<M> Widget<M> for ScrollBarCorner {
    fn render(&self, canvas: &mut Canvas, region: Region) {
        let bg = self.effective_color();

        let render_width = region.width.min(self.width as i32);
        let render_height = region.height.min(self.height as i32);

        for y in 0..render_height {
            for x in 0..render_width {
                canvas.put_char(
                    region.x + x,
                    region.y + y,
                    ' ',
                    None,
                    Some(bg.clone()),
                    TextAttributes::default(),
                );
            }
        }
    }

    fn desired_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    fn set_style(&mut self, style: ComputedStyle) {
        self.style = style;
        self.dirty = true;
    }

    fn get_style(&self) -> ComputedStyle {
        self.style.clone()
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }
}
