//! Result rendering
//!
//! Prints lookup rows as a plain-text table (or JSON/YAML for scripting).
//! Column order is fixed: Ingress Name, Host, Path, Service Name.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::MatchResult;

/// Printed instead of a table when nothing matched
pub const NO_RESULTS_MESSAGE: &str = "No associated ingress found.";

const HEADERS: [&str; 4] = ["Ingress Name", "Host", "Path", "Service Name"];

/// Column widths of the fixed layout
const FIXED_WIDTHS: [usize; 4] = [30, 25, 20, 20];
const FIXED_RULE_WIDTH: usize = 105;

/// Spaces on each side of the `|` in the computed layout
const DYNAMIC_PADDING: usize = 2;

/// Column width policy of the text table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    /// Widest cell (or header) per column
    #[default]
    Dynamic,
    /// 30/25/20/20 character columns
    Fixed,
}

/// Output format of a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}

fn cells(row: &MatchResult) -> [&str; 4] {
    [&row.ingress_name, &row.host, &row.path, &row.service_name]
}

fn format_line(values: [&str; 4], widths: &[usize; 4], separator: &str) -> String {
    values
        .iter()
        .zip(widths)
        .map(|(value, &width)| format!("{:<width$}", value))
        .collect::<Vec<_>>()
        .join(separator)
}

fn render_dynamic(rows: &[MatchResult]) -> String {
    let mut widths = HEADERS.map(display_width);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(cells(row)) {
            *width = (*width).max(display_width(cell));
        }
    }

    let separator = format!(
        "{}|{}",
        " ".repeat(DYNAMIC_PADDING),
        " ".repeat(DYNAMIC_PADDING)
    );
    let total_width = widths.iter().sum::<usize>() + separator.len() * (widths.len() - 1);

    let mut out = String::new();
    out.push_str(&format_line(HEADERS, &widths, &separator));
    out.push('\n');
    out.push_str(&"-".repeat(total_width));
    out.push('\n');
    for row in rows {
        out.push_str(&format_line(cells(row), &widths, &separator));
        out.push('\n');
    }
    out.push('\n');
    out
}

fn render_fixed(rows: &[MatchResult]) -> String {
    let separator = " | ";

    let mut out = String::new();
    out.push_str(&format_line(HEADERS, &FIXED_WIDTHS, separator));
    out.push('\n');
    out.push_str(&"-".repeat(FIXED_RULE_WIDTH));
    out.push('\n');
    for row in rows {
        out.push_str(&format_line(cells(row), &FIXED_WIDTHS, separator));
        out.push('\n');
    }
    out
}

/// Render rows as a text table
///
/// Zero rows render as [`NO_RESULTS_MESSAGE`] and nothing else.
pub fn render_table(rows: &[MatchResult], style: TableStyle) -> String {
    if rows.is_empty() {
        return format!("{}\n", NO_RESULTS_MESSAGE);
    }

    match style {
        TableStyle::Dynamic => render_dynamic(rows),
        TableStyle::Fixed => render_fixed(rows),
    }
}

/// Render rows in the requested output format
pub fn render(rows: &[MatchResult], format: OutputFormat, style: TableStyle) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(rows, style)),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(rows).context("Failed to serialize rows to JSON")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(rows).context("Failed to serialize rows to YAML")
        }
    }
}

/// Render rows and write them to standard output
pub fn print_results(rows: &[MatchResult], format: OutputFormat, style: TableStyle) -> Result<()> {
    print!("{}", render(rows, format, style)?);
    Ok(())
}
