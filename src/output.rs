// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Rendering of collected counts

use crate::constants::table::{COLUMN_GAP, HEADERS};
use crate::error::Result;
use crate::types::CountRow;
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

/// Render rows in the requested format, keeping the order they were given in
pub fn render(rows: &[CountRow], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format_table(rows)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(rows)?),
    }
}

/// Left-aligned `NAME VERSION COUNT` table
pub fn format_table(rows: &[CountRow]) -> String {
    let cells: Vec<[String; 3]> = rows.iter().map(CountRow::cells).collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut output = format_line(&HEADERS, &widths);
    for row in &cells {
        output.push('\n');
        output.push_str(&format_line(row, &widths));
    }
    output
}

fn format_line<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(&format!("{:<w$}", cell.as_ref(), w = width + COLUMN_GAP));
    }
    line.trim_end().to_string()
}
