//! Subcommand handlers
//!
//! Each handler prints its result to stdout and returns the process exit code.

use anyhow::{Context, Result};
use std::io::{self, Read};
use tracing::{debug, error};

use super::commands::{ConfigArgs, InspectArgs, StructureArgs, StylesheetArgs};
use super::output::OutputFormatter;
use crate::config::CoursifyConfig;
use crate::extractors::{extract_colors, extract_css_variables};
use crate::fs::{FileSystem, RealFileSystem};
use crate::inspect::{InspectRequest, TemplateInspector};
use crate::structure::create_template_structure;

fn exit_code(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn load_config() -> Result<CoursifyConfig> {
    let config = CoursifyConfig::default();
    config.validate()?;
    Ok(config)
}

fn read_stylesheet(args: &StylesheetArgs) -> Result<String> {
    match args.source() {
        Some(path) => {
            debug!(path = %path.display(), "Reading stylesheet");
            RealFileSystem.read_to_string(path)
        }
        None => {
            debug!("Reading stylesheet from stdin");
            let mut css = String::new();
            io::stdin()
                .read_to_string(&mut css)
                .context("Failed to read stylesheet from stdin")?;
            Ok(css)
        }
    }
}

pub fn handle_inspect(args: &InspectArgs) -> i32 {
    exit_code(run_inspect(args))
}

fn run_inspect(args: &InspectArgs) -> Result<()> {
    let config = load_config()?;
    let inspector = TemplateInspector::new(RealFileSystem, config);

    let mut request = InspectRequest::new(&args.template_dir);
    if let Some(name) = &args.name {
        request = request.with_name(name);
    }
    if let Some(css) = &args.css {
        request = request.with_stylesheet(css);
    }

    let report = inspector.inspect(&request)?;
    let output = OutputFormatter::new(args.format.into()).format_report(&report)?;
    println!("{}", output);
    Ok(())
}

pub fn handle_variables(args: &StylesheetArgs) -> i32 {
    exit_code(run_variables(args))
}

fn run_variables(args: &StylesheetArgs) -> Result<()> {
    let css = read_stylesheet(args)?;
    let variables = extract_css_variables(&css);
    let output = OutputFormatter::new(args.format.into()).format_variables(&variables)?;
    println!("{}", output);
    Ok(())
}

pub fn handle_colors(args: &StylesheetArgs) -> i32 {
    exit_code(run_colors(args))
}

fn run_colors(args: &StylesheetArgs) -> Result<()> {
    let css = read_stylesheet(args)?;
    let colors = extract_colors(&css);
    let output = OutputFormatter::new(args.format.into()).format_colors(&colors)?;
    println!("{}", output);
    Ok(())
}

pub fn handle_structure(args: &StructureArgs) -> i32 {
    exit_code(run_structure(args))
}

fn run_structure(args: &StructureArgs) -> Result<()> {
    let structure = create_template_structure(&args.name, &args.dir);
    let output = OutputFormatter::new(args.format.into()).format_structure(&structure)?;
    println!("{}", output);
    Ok(())
}

pub fn handle_config(args: &ConfigArgs) -> i32 {
    exit_code(run_config(args))
}

fn run_config(args: &ConfigArgs) -> Result<()> {
    let config = CoursifyConfig::default();
    let output = OutputFormatter::new(args.format.into()).format_config(&config)?;
    println!("{}", output);
    config.validate()?;
    Ok(())
}
