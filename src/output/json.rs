//
//  imodels-client
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # JSON Output Formatting
//!
//! Pretty-printed JSON for scripting, e.g. piping into `jq`. Entities are
//! written with the same camelCase field names the API uses.

use std::io::{self, Write};

use serde::Serialize;

pub fn write_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json_to(&mut handle, value)
}

pub fn write_json_to<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::entities::MinimalIModel;

    #[test]
    fn test_write_json_uses_wire_names() {
        let imodel = MinimalIModel {
            id: "a1".to_string(),
            display_name: "Bridge".to_string(),
        };
        let mut buffer = Vec::new();

        write_json_to(&mut buffer, &[imodel]).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("\"displayName\": \"Bridge\""));
        assert!(output.ends_with('\n'));
    }
}
