use anyhow::Result;
use clap::Parser;
use savannah::cli::{Cli, Commands};
use savannah::commands;
use savannah::formatting::FormattingConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let formatting = create_formatting_config(cli.plain);
    formatting.apply();

    match cli.command {
        Commands::Analyze {
            snapshot,
            format,
            output,
            top,
            min_level,
            no_parallel,
        } => commands::analyze::handle_analyze(commands::analyze::AnalyzeConfig {
            snapshot_path: snapshot,
            format,
            output,
            top,
            min_level: min_level.map(Into::into),
            parallel: !no_parallel,
            formatting,
        }),

        Commands::Scenario {
            variables,
            variables_file,
            time_horizon,
            historical_data,
            region,
            format,
        } => commands::scenario::handle_scenario(commands::scenario::ScenarioConfig {
            variables,
            variables_file,
            time_horizon,
            historical_data,
            region,
            format,
        }),

        Commands::Sources { command } => commands::sources::handle_sources(command),

        Commands::Init { force } => commands::init::init_config(force),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
