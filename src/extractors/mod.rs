// Stylesheet extraction
//
// Extractors scan raw stylesheet text with regular expressions. They never
// fail: unmatched input falls through to empty maps or default values.

pub mod colors;
pub mod variables;

pub use colors::{extract_colors, ColorScheme};
pub use variables::extract_css_variables;
