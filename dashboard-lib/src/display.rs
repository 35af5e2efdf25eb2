//! Display values produced by cell resolution.

use crate::model::Value;

/// Visual tone of a styled text or badge.
///
/// Renderers map tones to whatever palette they have; the core only says
/// what kind of emphasis a value carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Default,
    Muted,
    Positive,
    Negative,
    Warning,
    Info,
    Accent,
}

/// Where an icon comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    /// An image URL (avatars, sport images).
    Url(String),
    /// A single letter placeholder.
    Initial(char),
    /// A named icon from the renderer's icon set.
    Named(String),
}

/// A structured description of what a cell shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DisplayValue {
    /// Nothing to show.
    #[default]
    Empty,
    /// Plain text.
    Text(String),
    /// Text with a tone.
    Styled { text: String, tone: Tone },
    /// A pill/badge label.
    Badge { text: String, tone: Tone },
    /// An icon followed by a label.
    Icon { source: IconSource, text: String },
}

impl DisplayValue {
    /// Plain text, or empty when the text is empty.
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            DisplayValue::Empty
        } else {
            DisplayValue::Text(text)
        }
    }

    /// Text with a tone.
    pub fn styled(text: impl Into<String>, tone: Tone) -> Self {
        DisplayValue::Styled {
            text: text.into(),
            tone,
        }
    }

    /// A badge.
    pub fn badge(text: impl Into<String>, tone: Tone) -> Self {
        DisplayValue::Badge {
            text: text.into(),
            tone,
        }
    }

    /// An icon with a label.
    pub fn icon(source: IconSource, text: impl Into<String>) -> Self {
        DisplayValue::Icon {
            source,
            text: text.into(),
        }
    }

    /// Returns `true` if nothing would be shown.
    pub fn is_empty(&self) -> bool {
        match self {
            DisplayValue::Empty => true,
            DisplayValue::Text(text) => text.is_empty(),
            _ => false,
        }
    }

    /// The text a renderer prints for this value.
    pub fn plain_text(&self) -> String {
        match self {
            DisplayValue::Empty => String::new(),
            DisplayValue::Text(text) => text.clone(),
            DisplayValue::Styled { text, .. } => text.clone(),
            DisplayValue::Badge { text, .. } => format!("[{}]", text),
            DisplayValue::Icon { source, text } => match source {
                IconSource::Initial(c) => format!("({}) {}", c, text),
                IconSource::Url(_) | IconSource::Named(_) => format!("◉ {}", text),
            },
        }
    }

    /// The tone a renderer should use, if any.
    pub fn tone(&self) -> Tone {
        match self {
            DisplayValue::Styled { tone, .. } | DisplayValue::Badge { tone, .. } => *tone,
            _ => Tone::Default,
        }
    }
}

impl From<&Value> for DisplayValue {
    fn from(value: &Value) -> Self {
        DisplayValue::text(value.render_text())
    }
}

impl From<Value> for DisplayValue {
    fn from(value: Value) -> Self {
        DisplayValue::from(&value)
    }
}

impl From<&str> for DisplayValue {
    fn from(text: &str) -> Self {
        DisplayValue::text(text)
    }
}

impl From<String> for DisplayValue {
    fn from(text: String) -> Self {
        DisplayValue::text(text)
    }
}
