use coursify::cli::commands::{CliArgs, Commands};
use coursify::cli::handlers::{
    handle_colors, handle_config, handle_inspect, handle_structure, handle_variables,
};
use coursify::util::logging::{init_from_env, init_logging, parse_level, LoggingConfig};
use coursify::VERSION;

use clap::Parser;
use std::env;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("coursify v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Inspect(inspect_args) => handle_inspect(inspect_args),
        Commands::Variables(stylesheet_args) => handle_variables(stylesheet_args),
        Commands::Colors(stylesheet_args) => handle_colors(stylesheet_args),
        Commands::Structure(structure_args) => handle_structure(structure_args),
        Commands::Config(config_args) => handle_config(config_args),
    };

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        init_from_env();
        return;
    };

    let mut config = if args.verbose {
        LoggingConfig::development()
    } else {
        LoggingConfig::default()
    };
    config.level = level;
    config.use_json = env::var("COURSIFY_LOG_JSON")
        .ok()
        .and_then(|v| v.parse::<bool>().ok())
        .unwrap_or(false);

    init_logging(config);
}
