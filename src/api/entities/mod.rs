//
//  imodels-client
//  api/entities/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! iModels API entity types.
//!
//! Each resource comes in two shapes, selected by the `Prefer` header of
//! the request that returned it:
//!
//! - a **minimal** shape (`MinimalChangeset`, `MinimalNamedVersion`, ...)
//!   with the handful of fields every response carries
//! - a **representation** shape (`Changeset`, `NamedVersion`, ...) which
//!   embeds the minimal shape and adds the remaining fields
//!
//! The representation types dereference to their minimal shape, so code
//! written against the minimal fields works with both.
//!
//! # Module Organization
//!
//! - [`imodel`] - iModels and their creation properties
//! - [`briefcase`] - Briefcases acquired on an iModel
//! - [`changeset`] - Changesets forming an iModel's history
//! - [`named_version`] - Named versions pointing at changesets
//! - [`checkpoint`] - Checkpoints derived from changesets
//!
//! # Notes
//!
//! - Field names follow the API's camelCase wire format
//! - Timestamps are parsed as UTC [`chrono::DateTime`] values

/// Implements `Deref` from a representation type to its minimal shape.
macro_rules! deref_to_minimal {
    ($full:ty => $minimal:ty) => {
        impl std::ops::Deref for $full {
            type Target = $minimal;

            fn deref(&self) -> &Self::Target {
                &self.minimal
            }
        }
    };
}

pub mod briefcase;
pub mod changeset;
pub mod checkpoint;
pub mod imodel;
pub mod named_version;

pub use briefcase::*;
pub use changeset::*;
pub use checkpoint::*;
pub use imodel::*;
pub use named_version::*;
