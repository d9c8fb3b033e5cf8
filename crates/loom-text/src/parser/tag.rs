//! Tag content parser for inline markup.
//!
//! Parses the content inside `[...]` tags.

use std::collections::HashMap;

use crate::error::StyleParseError;
use crate::style::Style;

/// The result of parsing tag content.
#[derive(Clone, Debug, PartialEq)]
pub enum TagContent {
    /// A style specification: `[bold red on blue]`
    Style(Style),
    /// A meta entry: `[@click=app.quit]`
    Meta(String, String),
    /// Close all styles: `[/]`
    CloseAll,
    /// Close specific style: `[/bold]`
    CloseStyle(String),
}

impl TagContent {
    /// Parse tag content (the text inside `[...]`).
    ///
    /// # Examples
    ///
    /// ```
    /// use loom_text::parser::TagContent;
    ///
    /// let tag = TagContent::parse("bold red").unwrap();
    /// assert!(matches!(tag, TagContent::Style(_)));
    ///
    /// let meta = TagContent::parse("@click=app.quit").unwrap();
    /// assert!(matches!(meta, TagContent::Meta(_, _)));
    ///
    /// let close = TagContent::parse("/").unwrap();
    /// assert!(matches!(close, TagContent::CloseAll));
    /// ```
    pub fn parse(content: &str) -> Result<Self, StyleParseError> {
        let content = content.trim();

        if content.is_empty() {
            return Err(StyleParseError::Empty);
        }

        // Close tag: [/] or [/bold]
        if content.starts_with('/') {
            let rest = content[1..].trim();
            if rest.is_empty() {
                return Ok(TagContent::CloseAll);
            } else {
                return Ok(TagContent::CloseStyle(rest.to_string()));
            }
        }

        // Meta tag: [@key=value]
        if content.starts_with('@') {
            return Self::parse_meta(&content[1..]);
        }

        // Style tag: [bold red on blue]
        let style = Style::parse(content)?;
        Ok(TagContent::Style(style))
    }

    /// Parse a meta tag (the part after `@`).
    fn parse_meta(content: &str) -> Result<Self, StyleParseError> {
        // Find the = separator
        if let Some(eq_pos) = content.find('=') {
            let key = format!("@{}", content[..eq_pos].trim());
            let value = content[eq_pos + 1..].trim().to_string();
            Ok(TagContent::Meta(key, value))
        } else {
            // No value, just the key
            let key = format!("@{}", content.trim());
            Ok(TagContent::Meta(key, String::new()))
        }
    }

    /// Check if this is a close tag.
    pub fn is_close(&self) -> bool {
        matches!(self, TagContent::CloseAll | TagContent::CloseStyle(_))
    }

    /// Check if this is a meta tag.
    pub fn is_meta(&self) -> bool {
        matches!(self, TagContent::Meta(_, _))
    }

    /// Get the style if this is a style tag.
    pub fn as_style(&self) -> Option<&Style> {
        match self {
            TagContent::Style(s) => Some(s),
            _ => None,
        }
    }

    /// Get the meta key-value if this is a meta tag.
    pub fn as_meta(&self) -> Option<(&str, &str)> {
        match self {
            TagContent::Meta(k, v) => Some((k, v)),
            _ => None,
        }
    }

    /// Convert to a HashMap entry if this is a meta tag.
    pub fn into_meta_entry(self) -> Option<(String, String)> {
        match self {
            TagContent::Meta(k, v) => Some((k, v)),
            _ => None,
        }
    }
}

/// Accumulated state from parsing multiple tags.
///
/// Combines style and meta from multiple tag contents.
#[derive(Clone, Debug, Default)]
pub struct ParsedTag {
    /// The accumulated style.
    pub style: Style,
    /// Meta entries.
    pub meta: HashMap<String, String>,
}

impl ParsedTag {
    /// Create a new empty parsed tag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a TagContent to this parsed tag.
    pub fn apply(&mut self, content: TagContent) {
        match content {
            TagContent::Style(s) => {
                self.style = self.style.apply(&s);
            }
            TagContent::Meta(k, v) => {
                self.meta.insert(k, v);
            }
            TagContent::CloseAll | TagContent::CloseStyle(_) => {
                // Close tags don't add to the style
            }
        }
    }

    /// Check if this parsed tag is empty (no style or meta).
    pub fn is_empty(&self) -> bool {
        self.style.is_empty() && self.meta.is_empty()
    }
}
