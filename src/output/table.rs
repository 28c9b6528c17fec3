//
//  imodels-client
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Terminal tables rendered with `comfy_table`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use imodels_client::output::TableBuilder;
//!
//! TableBuilder::new()
//!     .headers(["ID", "NAME", "STATE"])
//!     .row(["a1", "Bridge", "initialized"])
//!     .print();
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use console::style;

pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(|s| s.into()).collect();
        if self.color {
            let header_cells: Vec<Cell> = headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)).collect();
            self.table.set_header(header_cells);
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(|s| s.into()).collect();
        self.table.add_row(row);
        self
    }

    pub fn rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            self = self.row(row);
        }
        self
    }

    pub fn print(self) {
        println!("{}", self.table);
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Colors an entity state by how usable the entity is.
pub fn format_state(state: &str, color: bool) -> String {
    if !color {
        return state.to_string();
    }

    match state {
        "initialized" | "fileUploaded" | "visible" | "successful" => style(state).green().to_string(),
        "notInitialized" | "waitingForFile" => style(state).yellow().to_string(),
        "hidden" => style(state).dim().to_string(),
        _ => state.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_contains_rows() {
        let rendered = TableBuilder::new()
            .color(false)
            .headers(["ID", "NAME"])
            .rows(vec![vec!["a1", "Bridge"], vec!["b2", "Tunnel"]])
            .build()
            .to_string();

        assert!(rendered.contains("NAME"));
        assert!(rendered.contains("Bridge"));
        assert!(rendered.contains("Tunnel"));
    }

    #[test]
    fn test_format_state_without_color() {
        assert_eq!(format_state("initialized", false), "initialized");
        assert_eq!(format_state("hidden", false), "hidden");
    }
}
