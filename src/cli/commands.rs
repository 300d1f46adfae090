use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Inspect website template stylesheets and propose course variant file names
#[derive(Parser, Debug)]
#[command(
    name = "coursify",
    about = "Inspect website template stylesheets and propose course variant file names",
    version,
    long_about = "coursify reads a template's stylesheet, reports its CSS custom properties and \
                  background color, and proposes the file names for the course variant \
                  (main, video and podcast pages). It never writes files: the transformation \
                  itself is done by hand from the report."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Inspect a template directory",
        long_about = "Finds the template's stylesheet, extracts custom properties and colors, \
                      and proposes the course file names.\n\n\
                      Examples:\n  \
                      coursify inspect templates/2138_aqua_nova\n  \
                      coursify inspect templates/landing --css shared/theme.css\n  \
                      coursify inspect templates/landing --name landing --format json"
    )]
    Inspect(InspectArgs),

    #[command(about = "List CSS custom properties declared in a stylesheet")]
    Variables(StylesheetArgs),

    #[command(about = "Show the color scheme derived from a stylesheet")]
    Colors(StylesheetArgs),

    #[command(about = "Show the course file names for a template name")]
    Structure(StructureArgs),

    #[command(about = "Show the effective configuration")]
    Config(ConfigArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    #[arg(value_name = "TEMPLATE_DIR", help = "Path to the template directory")]
    pub template_dir: PathBuf,

    #[arg(
        short = 'n',
        long,
        value_name = "NAME",
        help = "Template name (defaults to the directory name)"
    )]
    pub name: Option<String>,

    #[arg(
        long,
        value_name = "FILE",
        help = "Stylesheet to read instead of searching the template directory"
    )]
    pub css: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct StylesheetArgs {
    #[arg(
        value_name = "CSS_FILE",
        help = "Stylesheet to read ('-' or omitted reads stdin)"
    )]
    pub css_file: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

impl StylesheetArgs {
    /// The file to read, or `None` for stdin
    pub fn source(&self) -> Option<&PathBuf> {
        self.css_file.as_ref().filter(|p| p.as_os_str() != "-")
    }
}

#[derive(Parser, Debug, Clone)]
pub struct StructureArgs {
    #[arg(value_name = "NAME", help = "Template name")]
    pub name: String,

    #[arg(
        short = 'd',
        long,
        value_name = "DIR",
        default_value = ".",
        help = "Template directory (recorded only, never read)"
    )]
    pub dir: PathBuf,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct ConfigArgs {
    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_inspect() {
        let args = CliArgs::try_parse_from([
            "coursify",
            "inspect",
            "templates/aqua",
            "--name",
            "aqua",
            "--css",
            "theme.css",
            "-f",
            "json",
        ])
        .unwrap();

        match args.command {
            Commands::Inspect(inspect) => {
                assert_eq!(inspect.template_dir, PathBuf::from("templates/aqua"));
                assert_eq!(inspect.name.as_deref(), Some("aqua"));
                assert_eq!(inspect.css, Some(PathBuf::from("theme.css")));
                assert_eq!(inspect.format, OutputFormatArg::Json);
            }
            other => panic!("Expected inspect command, got {:?}", other),
        }
    }

    #[test]
    fn test_stylesheet_source() {
        let args = CliArgs::try_parse_from(["coursify", "variables", "-"]).unwrap();
        let Commands::Variables(vars) = args.command else {
            panic!("Expected variables command");
        };
        assert!(vars.source().is_none());

        let args = CliArgs::try_parse_from(["coursify", "colors", "style.css"]).unwrap();
        let Commands::Colors(colors) = args.command else {
            panic!("Expected colors command");
        };
        assert_eq!(colors.source(), Some(&PathBuf::from("style.css")));
        assert_eq!(colors.format, OutputFormatArg::Human);
    }

    #[test]
    fn test_structure_default_dir() {
        let args = CliArgs::try_parse_from(["coursify", "structure", "landing"]).unwrap();
        let Commands::Structure(structure) = args.command else {
            panic!("Expected structure command");
        };
        assert_eq!(structure.name, "landing");
        assert_eq!(structure.dir, PathBuf::from("."));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = CliArgs::try_parse_from(["coursify", "-q", "-v", "config"]);
        assert!(result.is_err());
    }
}
