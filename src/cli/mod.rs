pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, Commands, ConfigArgs, InspectArgs, StructureArgs, StylesheetArgs};
pub use output::{OutputFormat, OutputFormatter};
