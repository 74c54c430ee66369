mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod source;
mod utils;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use app::{CommandContext, handle_command};
use cli::{Cli, parse_command};
use config::Config;
use error::AppError;
use output::NumberFormat;
use source::CsvOptions;
use utils::{DateParser, Timezone, parse_date};

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug)
        .init();
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let (command, input) = parse_command(&cli.command, cli.file.as_deref());
    let input = input.ok_or(AppError::NoInput)?;

    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let today = match cli.as_of.as_deref() {
        Some(s) => parse_date(s)?,
        None => timezone.today(),
    };
    debug!(%today, ?command, input = %input.display(), "starting");

    let ctx = CommandContext {
        cli,
        input,
        csv_options: CsvOptions::with_delimiter(cli.delimiter.as_deref())?,
        date_parser: DateParser::with_formats(&cli.date_formats),
        today,
        number_format: NumberFormat::from_locale(cli.locale.as_deref())?,
        jq_filter: cli.jq.as_deref(),
    };

    handle_command(command, &ctx)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = Config::load();
    let cli = cli.with_config(&config);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
