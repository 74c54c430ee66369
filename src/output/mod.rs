mod csv;
mod format;
mod pairs;
mod top;

pub(crate) use csv::{output_pairs_csv, output_top_csv};
pub(crate) use format::{NumberFormat, print_summary_line};
pub(crate) use pairs::{PairsTableOptions, output_pairs_json, print_pairs_table};
pub(crate) use top::{TopTableOptions, output_top_json, print_top_table};
