//
//  imodels-client
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Output formatting for the `imodels` CLI:
//!
//! - **Table format**: human-readable output for interactive terminal use
//! - **JSON format**: machine-readable output for scripting
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: the available formats
//! - [`OutputWriter`]: writes entities and status messages in a format
//! - [`TableOutput`]: detail view of a single value
//! - [`TableRow`]: one row of a list table
//!
//! ## Example
//!
//! ```rust,ignore
//! use imodels_client::output::{OutputFormat, OutputWriter};
//!
//! let writer = OutputWriter::new(OutputFormat::Json);
//! writer.write(&imodel)?;
//! writer.write_success("Named version created");
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use console::style;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    /// Picks JSON when the global `--json` flag is set.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Table
        }
    }
}

pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    /// Writes a single value as JSON or as its detail view.
    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value),
            OutputFormat::Table => {
                value.print_table(self.color);
                Ok(())
            }
        }
    }

    /// Writes a list as a JSON array or as a table with one row per value.
    pub fn write_list<T: Serialize + TableRow>(&self, values: &[T]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(&values),
            OutputFormat::Table => {
                TableBuilder::new()
                    .color(self.color)
                    .headers(T::HEADERS.iter().copied())
                    .rows(values.iter().map(|value| value.cells(self.color)))
                    .print();
                Ok(())
            }
        }
    }

    pub fn write_success(&self, msg: &str) {
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// Detail view of a single value.
pub trait TableOutput {
    fn print_table(&self, color: bool);
}

/// A value rendered as one row of a list table.
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    /// Cell values in [`HEADERS`](Self::HEADERS) order.
    fn cells(&self, color: bool) -> Vec<String>;
}

pub fn print_header(text: &str, color: bool) {
    if color {
        println!("{}", style(text).bold());
    } else {
        println!("{}", text);
    }
    println!("{}", "-".repeat(text.chars().count()));
}

pub fn print_field(key: &str, value: &str, color: bool) {
    let key = format!("{:<12}", format!("{}:", key));
    if color {
        println!("  {} {}", style(key).dim(), value);
    } else {
        println!("  {} {}", key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_json_flag() {
        assert_eq!(OutputFormat::from_json_flag(true), OutputFormat::Json);
        assert_eq!(OutputFormat::from_json_flag(false), OutputFormat::Table);
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }
}
