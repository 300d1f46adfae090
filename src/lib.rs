//! coursify - template stylesheet inspection for course variants
//!
//! Reads a website template's stylesheet and reports what a hand-made
//! "course" variant of the template needs to carry over:
//!
//! - **CSS variables**: every `--name: value;` custom property
//! - **Colors**: a primary/background/text scheme, background taken from the stylesheet
//! - **Structure**: the main, video and podcast page file names
//!
//! The actual transformation is left to a person working from the report.
//!
//! # Example
//!
//! ```
//! use coursify::{create_template_structure, extract_colors, extract_css_variables};
//! use std::path::Path;
//!
//! let css = ":root { --brand-color: #336699; } body { background: #112233; }";
//!
//! let variables = extract_css_variables(css);
//! assert_eq!(variables["brand-color"], "#336699");
//!
//! let colors = extract_colors(css);
//! assert_eq!(colors.background, "#112233");
//!
//! let structure = create_template_structure("landing", Path::new("templates/landing"));
//! assert_eq!(structure.video, "landing-course-video.html");
//! ```

pub mod cli;
pub mod config;
pub mod extractors;
pub mod fs;
pub mod inspect;
pub mod structure;
pub mod util;

pub use config::{ConfigError, CoursifyConfig};
pub use extractors::{extract_colors, extract_css_variables, ColorScheme};
pub use inspect::{InspectError, InspectRequest, TemplateInspector, TemplateReport};
pub use structure::{create_template_structure, TemplateStructure};
pub use util::{init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
