//
//  imodels-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types
//!
//! Shared building blocks used by every operation set:
//!
//! - [`IModelsError`] and [`parse_error`] - normalized error handling
//! - [`CollectionRequestParams`] and [`form_query_string`] - collection queries
//! - [`EntityPage`], [`PageQuery`] and [`paged_collection`] - lazy pagination
//! - [`PreferReturn`] - minimal vs. full entity representations
//! - [`Link`] - HAL-style link objects found in `_links`

use serde::{Deserialize, Serialize};

mod error;
mod pagination;
mod params;

pub use error::*;
pub use pagination::*;
pub use params::*;

/// Selects how much of each entity the server returns.
///
/// Sent as the `Prefer` request header. A single traversal always uses the
/// same mode for every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferReturn {
    /// Abbreviated entities (`Prefer: return=minimal`).
    Minimal,
    /// Full entities (`Prefer: return=representation`).
    Representation,
}

impl PreferReturn {
    /// Returns the `Prefer` header value.
    pub fn header_value(&self) -> &'static str {
        match self {
            Self::Minimal => "return=minimal",
            Self::Representation => "return=representation",
        }
    }
}

/// A link to a related resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}
