use std::path::Path;
use std::time::Instant;

use chrono::NaiveDate;
use tracing::debug;

use crate::cli::{Cli, ReportCommand};
use crate::core::{Collaboration, compute};
use crate::error::AppError;
use crate::output::{
    NumberFormat, PairsTableOptions, TopTableOptions, output_pairs_csv, output_pairs_json,
    output_top_csv, output_top_json, print_pairs_table, print_summary_line, print_top_table,
};
use crate::source::{CsvOptions, load_records};
use crate::utils::{DateParser, filter_json};

/// Print JSON output, optionally filtering through jq
fn print_json(json: &str, jq_filter: Option<&str>) -> Result<(), AppError> {
    match jq_filter {
        Some(filter) => print!("{}", filter_json(json, filter)?),
        None => println!("{json}"),
    }
    Ok(())
}

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) input: &'a Path,
    pub(crate) csv_options: CsvOptions,
    pub(crate) date_parser: DateParser,
    pub(crate) today: NaiveDate,
    pub(crate) number_format: NumberFormat,
    pub(crate) jq_filter: Option<&'a str>,
}

/// Read the input and run the engine. Nothing is printed unless both succeed.
fn collaborate(ctx: &CommandContext<'_>) -> Result<(Collaboration, f64), AppError> {
    let start = Instant::now();
    let records = load_records(ctx.input, &ctx.csv_options, !ctx.cli.allow_any_extension)?;
    let result = compute(&records, &ctx.date_parser, ctx.today)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    debug!(elapsed_ms, "computed collaboration");
    Ok((result, elapsed_ms))
}

fn handle_top(result: &Collaboration, elapsed_ms: f64, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let cli = ctx.cli;
    if cli.json {
        return print_json(&output_top_json(&result.top, cli.order), ctx.jq_filter);
    }
    if cli.csv {
        print!("{}", output_top_csv(&result.top, cli.order)?);
        return Ok(());
    }

    print_top_table(
        &result.top,
        TopTableOptions {
            order: cli.order,
            use_color: cli.use_color(),
            number_format: ctx.number_format,
        },
    );
    print_summary_line(
        &result.stats,
        ctx.number_format,
        Some(elapsed_ms),
        cli.use_color(),
    );
    Ok(())
}

fn handle_pairs(result: &Collaboration, elapsed_ms: f64, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let cli = ctx.cli;
    if cli.json {
        let json = output_pairs_json(&result.map, cli.order, cli.limit);
        return print_json(&json, ctx.jq_filter);
    }
    if cli.csv {
        print!("{}", output_pairs_csv(&result.map, cli.order, cli.limit)?);
        return Ok(());
    }

    if result.map.is_empty() {
        println!("No overlapping assignments found.");
        return Ok(());
    }
    print_pairs_table(
        &result.map,
        PairsTableOptions {
            order: cli.order,
            use_color: cli.use_color(),
            compact: cli.compact,
            breakdown: cli.breakdown,
            limit: cli.limit,
            number_format: ctx.number_format,
        },
    );
    print_summary_line(
        &result.stats,
        ctx.number_format,
        Some(elapsed_ms),
        cli.use_color(),
    );
    Ok(())
}

pub(crate) fn handle_command(command: ReportCommand, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let (result, elapsed_ms) = collaborate(ctx)?;
    match command {
        ReportCommand::Top => handle_top(&result, elapsed_ms, ctx),
        ReportCommand::Pairs => handle_pairs(&result, elapsed_ms, ctx),
    }
}
