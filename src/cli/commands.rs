//! CLI subcommand definitions

use std::path::{Path, PathBuf};

use clap::Subcommand;

/// Main CLI commands
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show the pair with the most overlapping days (default)
    Top {
        /// CSV file with EmpID, ProjectId, DateFrom, DateTo columns
        file: Option<PathBuf>,
    },
    /// List every collaborating pair ranked by total days
    Pairs {
        /// CSV file with EmpID, ProjectId, DateFrom, DateTo columns
        file: Option<PathBuf>,
    },
}

/// Normalized report selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReportCommand {
    Top,
    Pairs,
}

/// Resolve the command and the input file, which may be given before or
/// after the subcommand name
pub(crate) fn parse_command<'a>(
    cmd: &'a Option<Commands>,
    file: Option<&'a Path>,
) -> (ReportCommand, Option<&'a Path>) {
    match cmd {
        Some(Commands::Top { file: sub }) => (ReportCommand::Top, sub.as_deref().or(file)),
        Some(Commands::Pairs { file: sub }) => (ReportCommand::Pairs, sub.as_deref().or(file)),
        None => (ReportCommand::Top, file),
    }
}
