//! Scrollbar CSS types.

use super::RgbaColor;

/// Scrollbar size configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollbarSize {
    /// Horizontal scrollbar height (0 = hidden)
    pub horizontal: u16,
    /// Vertical scrollbar width (0 = hidden)
    pub vertical: u16,
}

impl ScrollbarSize {
    /// Default scrollbar size (matches the legacy engine: vertical=2, horizontal=1).
    pub const DEFAULT: Self = Self {
        horizontal: 1,
        vertical: 2,
    };
}

impl Default for ScrollbarSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Scrollbar gutter behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollbarGutter {
    /// Only show scrollbar space when scrolling is possible
    #[default]
    Auto,
    /// Always reserve space for scrollbar
    Stable,
}

/// Scrollbar visibility (independent of overflow).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollbarVisibility {
    #[default]
    Visible,
    /// Hide scrollbar but still allow scrolling
    Hidden,
}

/// Complete scrollbar style configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollbarStyle {
    // Thumb colors
    pub color: Option<RgbaColor>,
    pub color_hover: Option<RgbaColor>,
    pub color_active: Option<RgbaColor>,

    // Track colors
    pub background: Option<RgbaColor>,
    pub background_hover: Option<RgbaColor>,
    pub background_active: Option<RgbaColor>,

    // Corner
    pub corner_color: Option<RgbaColor>,

    // Size & visibility
    pub size: ScrollbarSize,
    pub gutter: ScrollbarGutter,
    pub visibility: ScrollbarVisibility,
}

impl ScrollbarStyle {
    /// Fallback thumb color.
    /// the legacy engine computes this as: background-darken-1 + primary.with_alpha(0.4)
    /// With loom-dark theme (primary=#0178D4, background=#121212), this produces ~#003054.
    pub fn fallback_thumb() -> RgbaColor {
        RgbaColor::rgb(0, 48, 84)
    }

    /// Fallback track color.
    /// the legacy engine renders this as pure black in practice.
    pub fn fallback_track() -> RgbaColor {
        RgbaColor::rgb(0, 0, 0)
    }

    /// Fallback corner color (same as track).
    pub fn fallback_corner() -> RgbaColor {
        RgbaColor::rgb(0, 0, 0)
    }

    /// Get effective thumb color (with fallback).
    pub fn effective_color(&self) -> RgbaColor {
        self.color.clone().unwrap_or_else(Self::fallback_thumb)
    }

    /// Get effective thumb hover color (falls back to color, then fallback).
    pub fn effective_color_hover(&self) -> RgbaColor {
        self.color_hover
            .clone()
            .or_else(|| self.color.clone())
            .unwrap_or_else(Self::fallback_thumb)
    }

    /// Get effective thumb active color (falls back to hover, then color, then fallback).
    pub fn effective_color_active(&self) -> RgbaColor {
        self.color_active
            .clone()
            .or_else(|| self.color_hover.clone())
            .or_else(|| self.color.clone())
            .unwrap_or_else(Self::fallback_thumb)
    }

    /// Get effective track background color (with fallback).
    pub fn effective_background(&self) -> RgbaColor {
        self.background.clone().unwrap_or_else(Self::fallback_track)
    }

    /// Get effective track hover color (falls back to background, then fallback).
    pub fn effective_background_hover(&self) -> RgbaColor {
        self.background_hover
            .clone()
            .or_else(|| self.background.clone())
            .unwrap_or_else(Self::fallback_track)
    }

    /// Get effective track active color (falls back to hover, then background, then fallback).
    pub fn effective_background_active(&self) -> RgbaColor {
        self.background_active
            .clone()
            .or_else(|| self.background_hover.clone())
            .or_else(|| self.background.clone())
            .unwrap_or_else(Self::fallback_track)
    }

    /// Get effective corner color (with fallback).
    pub fn effective_corner_color(&self) -> RgbaColor {
        self.corner_color
            .clone()
            .unwrap_or_else(Self::fallback_corner)
    }

    /// Whether vertical scrollbar should be shown (size > 0 and visible).
    pub fn show_vertical(&self) -> bool {
        self.size.vertical > 0 && self.visibility == ScrollbarVisibility::Visible
    }

    /// Whether horizontal scrollbar should be shown (size > 0 and visible).
    pub fn show_horizontal(&self) -> bool {
        self.size.horizontal > 0 && self.visibility == ScrollbarVisibility::Visible
    }
}
