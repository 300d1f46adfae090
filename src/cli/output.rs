//! Output formatting for multiple formats
//!
//! Every result type can be rendered as JSON, YAML, or human-readable text.
//! Human output uses box-drawing connectors; JSON and YAML are plain serde.
//!
//! # Example
//!
//! ```
//! use coursify::cli::output::{OutputFormat, OutputFormatter};
//! use coursify::extract_colors;
//!
//! let colors = extract_colors("body { background: #0a0e27; }");
//! let output = OutputFormatter::new(OutputFormat::Json).format_colors(&colors).unwrap();
//! assert!(output.contains("#0a0e27"));
//! ```

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::CoursifyConfig;
use crate::extractors::ColorScheme;
use crate::inspect::TemplateReport;
use crate::structure::TemplateStructure;

const RULE: &str = "\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}";
const BRANCH: &str = "\u{251C}\u{2500}";
const LAST: &str = "\u{2514}\u{2500}";

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

/// Output formatter for extraction results
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    /// Creates a new output formatter with the specified format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a full template report
    pub fn format_report(&self, report: &TemplateReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(report, "template report"),
            OutputFormat::Yaml => to_yaml(report, "template report"),
            OutputFormat::Human => Ok(self.format_report_human(report)),
        }
    }

    /// Formats a custom property map
    pub fn format_variables(&self, variables: &BTreeMap<String, String>) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(variables, "variables"),
            OutputFormat::Yaml => to_yaml(variables, "variables"),
            OutputFormat::Human => {
                let mut output = String::from("CSS Variables:\n");
                push_variables(&mut output, variables);
                Ok(output)
            }
        }
    }

    /// Formats a color scheme
    pub fn format_colors(&self, colors: &ColorScheme) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(colors, "colors"),
            OutputFormat::Yaml => to_yaml(colors, "colors"),
            OutputFormat::Human => {
                let mut output = String::from("Colors:\n");
                push_colors(&mut output, colors);
                Ok(output)
            }
        }
    }

    /// Formats proposed course file names
    pub fn format_structure(&self, structure: &TemplateStructure) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(structure, "structure"),
            OutputFormat::Yaml => to_yaml(structure, "structure"),
            OutputFormat::Human => {
                let mut output = String::from("Course Files:\n");
                push_structure(&mut output, structure);
                Ok(output)
            }
        }
    }

    /// Formats configuration display
    pub fn format_config(&self, config: &CoursifyConfig) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(&config.to_display_map(), "config"),
            OutputFormat::Yaml => to_yaml(&config.to_display_map(), "config"),
            OutputFormat::Human => Ok(config.to_string()),
        }
    }

    fn format_report_human(&self, report: &TemplateReport) -> String {
        let mut output = String::new();

        output.push_str(&format!("\u{2713} Template: {}\n", report.template_name));
        output.push_str(RULE);
        output.push_str("\n\n");

        output.push_str(&format!(
            "Directory:   {}\n",
            report.template_dir.display()
        ));
        output.push_str(&format!("Stylesheet:  {}\n\n", report.stylesheet.display()));

        output.push_str("CSS Variables:\n");
        push_variables(&mut output, &report.variables);
        output.push('\n');

        output.push_str("Colors:\n");
        push_colors(&mut output, &report.colors);
        output.push('\n');

        output.push_str("Course Files:\n");
        push_structure(&mut output, &report.structure);
        output.push('\n');

        output.push_str("Nothing was written. Create the course files by hand from this report.\n");
        output
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<String> {
    serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {} to JSON", what))
}

fn to_yaml<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<String> {
    serde_yaml::to_string(value).with_context(|| format!("Failed to serialize {} to YAML", what))
}

fn push_variables(output: &mut String, variables: &BTreeMap<String, String>) {
    if variables.is_empty() {
        output.push_str(&format!("{} (none declared)\n", LAST));
        return;
    }

    let width = variables.keys().map(|k| k.len() + 2).max().unwrap_or(0);
    for (i, (name, value)) in variables.iter().enumerate() {
        let connector = if i == variables.len() - 1 { LAST } else { BRANCH };
        output.push_str(&format!(
            "{} {:<width$}  {}\n",
            connector,
            format!("--{}", name),
            value,
            width = width
        ));
    }
}

fn push_colors(output: &mut String, colors: &ColorScheme) {
    output.push_str(&format!("{} Primary:     {}\n", BRANCH, colors.primary));
    output.push_str(&format!("{} Background:  {}\n", BRANCH, colors.background));
    output.push_str(&format!("{} Text:        {}\n", LAST, colors.text));
}

fn push_structure(output: &mut String, structure: &TemplateStructure) {
    let roles = structure.roles();
    for (i, (role, file)) in roles.iter().enumerate() {
        let connector = if i == roles.len() - 1 { LAST } else { BRANCH };
        output.push_str(&format!("{} {:<9}{}\n", connector, format!("{}:", role), file));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::create_template_structure;
    use std::path::{Path, PathBuf};

    fn create_test_report() -> TemplateReport {
        let mut variables = BTreeMap::new();
        variables.insert("primary".to_string(), "#00d4ff".to_string());
        variables.insert("bg-dark".to_string(), "#0a0e27".to_string());

        TemplateReport {
            template_name: "aqua_nova".to_string(),
            template_dir: PathBuf::from("templates/aqua_nova"),
            stylesheet: PathBuf::from("templates/aqua_nova/style.css"),
            variables,
            colors: ColorScheme {
                background: "#0a0e27".to_string(),
                ..ColorScheme::default()
            },
            structure: create_template_structure("aqua_nova", Path::new("templates/aqua_nova")),
        }
    }

    #[test]
    fn test_json_report() {
        let report = create_test_report();
        let output = OutputFormatter::new(OutputFormat::Json)
            .format_report(&report)
            .unwrap();

        let parsed: TemplateReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_yaml_report() {
        let report = create_test_report();
        let output = OutputFormatter::new(OutputFormat::Yaml)
            .format_report(&report)
            .unwrap();

        assert!(output.contains("template_name: aqua_nova"));
        assert!(output.contains("main: aqua_nova-course.html"));
    }

    #[test]
    fn test_human_report() {
        let output = OutputFormatter::new(OutputFormat::Human)
            .format_report(&create_test_report())
            .unwrap();

        assert!(output.contains("Template: aqua_nova"));
        assert!(output.contains("--bg-dark"));
        assert!(output.contains("Background:  #0a0e27"));
        assert!(output.contains("podcast: aqua_nova-course-podcast.html"));
        assert!(output.contains("Nothing was written"));
    }

    #[test]
    fn test_human_variables_empty() {
        let output = OutputFormatter::new(OutputFormat::Human)
            .format_variables(&BTreeMap::new())
            .unwrap();

        assert!(output.contains("(none declared)"));
    }

    #[test]
    fn test_human_variables_last_connector() {
        let report = create_test_report();
        let output = OutputFormatter::new(OutputFormat::Human)
            .format_variables(&report.variables)
            .unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with(BRANCH));
        assert!(lines[2].starts_with(LAST));
        assert!(lines[2].contains("#00d4ff"));
    }

    #[test]
    fn test_json_colors() {
        let output = OutputFormatter::new(OutputFormat::Json)
            .format_colors(&ColorScheme::default())
            .unwrap();

        let parsed: ColorScheme = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, ColorScheme::default());
    }

    #[test]
    fn test_human_structure() {
        let structure = create_template_structure("landing", Path::new("."));
        let output = OutputFormatter::new(OutputFormat::Human)
            .format_structure(&structure)
            .unwrap();

        assert!(output.contains("main:    landing-course.html"));
        assert!(output.contains("video:   landing-course-video.html"));
    }

    #[test]
    fn test_config_formats() {
        let config = CoursifyConfig {
            log_level: "info".to_string(),
            stylesheet_candidates: vec!["style.css".to_string()],
            max_stylesheet_size: 1024,
        };

        let json = OutputFormatter::new(OutputFormat::Json)
            .format_config(&config)
            .unwrap();
        assert!(json.contains("\"max_stylesheet_size\": \"1024\""));

        let human = OutputFormatter::new(OutputFormat::Human)
            .format_config(&config)
            .unwrap();
        assert!(human.contains("Log Level: info"));
    }
}
