//! Color scheme extractor - default palette with an optional background override

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

const DEFAULT_PRIMARY: &str = "#000";
const DEFAULT_BACKGROUND: &str = "#fff";
const DEFAULT_TEXT: &str = "#000";

/// The three colors proposed for a course variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: String,
    pub background: String,
    pub text: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            text: DEFAULT_TEXT.to_string(),
        }
    }
}

/// Extract a color scheme from stylesheet text.
///
/// Only `background` can change: the first `background: <value>` found
/// anywhere in the text (any case, comments included) replaces the default,
/// always with a `#` prefix. `primary` and `text` stay at their defaults.
pub fn extract_colors(css: &str) -> ColorScheme {
    let mut colors = ColorScheme::default();

    if !css.to_lowercase().contains("background") {
        return colors;
    }

    let bg_re = Regex::new(r"(?i)background:\s*#?(\w+)").expect("valid regex");
    if let Some(value) = bg_re.captures(css).and_then(|cap| cap.get(1)) {
        colors.background = format!("#{}", value.as_str());
        debug!(background = %colors.background, "Background color found");
    }

    colors
}
