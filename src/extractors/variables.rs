//! CSS custom property extractor - collects `--name: value;` declarations

use regex::Regex;
use std::collections::BTreeMap;
use tracing::debug;

/// Extract every custom property declared in `css`.
///
/// Keys are the property names without the leading `--`, values are the raw
/// text between the colon and the semicolon with surrounding whitespace
/// removed. A name declared more than once keeps its last value.
pub fn extract_css_variables(css: &str) -> BTreeMap<String, String> {
    let var_re = Regex::new(r"--([\w-]+):\s*([^;]+);").expect("valid regex");
    let mut variables = BTreeMap::new();

    for cap in var_re.captures_iter(css) {
        if let (Some(name), Some(value)) = (cap.get(1), cap.get(2)) {
            variables.insert(name.as_str().to_string(), value.as_str().trim().to_string());
        }
    }

    debug!(count = variables.len(), "Extracted CSS custom properties");
    variables
}
