//
//  imodels-client
//  api/entities/changeset.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Changeset entity types.
//!
//! Changesets form the linear history of an iModel. Each one has a
//! 1-based `index`, the id of its parent changeset (empty for the first
//! one) and a bit set describing which kinds of data it touches.
//!
//! # Example
//!
//! ```rust
//! use imodels_client::api::entities::ContainingChanges;
//!
//! let changes = ContainingChanges::SCHEMA | ContainingChanges::SPATIAL_DATA;
//! assert!(changes.contains(ContainingChanges::SCHEMA));
//! assert!(!changes.contains(ContainingChanges::DEFINITION));
//! ```

use std::ops::BitOr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::common::Link;

/// Upload state of a changeset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChangesetState {
    WaitingForFile,
    FileUploaded,
}

impl ChangesetState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WaitingForFile => "waitingForFile",
            Self::FileUploaded => "fileUploaded",
        }
    }
}

/// Bit set of the kinds of changes a changeset contains.
///
/// `0` (`REGULAR`) means no special kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainingChanges(pub u32);

impl ContainingChanges {
    pub const REGULAR: Self = Self(0);
    pub const SCHEMA: Self = Self(1 << 0);
    pub const DEFINITION: Self = Self(1 << 1);
    pub const SPATIAL_DATA: Self = Self(1 << 2);
    pub const SHEETS_AND_DRAWINGS: Self = Self(1 << 3);
    pub const VIEWS_AND_MODELS: Self = Self(1 << 4);
    pub const GLOBAL_PROPERTIES: Self = Self(1 << 5);

    /// Returns `true` if every bit of `other` is set.
    pub fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Names of the kinds set in this value, in bit order.
    pub fn names(&self) -> Vec<&'static str> {
        [
            (Self::SCHEMA, "Schema"),
            (Self::DEFINITION, "Definition"),
            (Self::SPATIAL_DATA, "SpatialData"),
            (Self::SHEETS_AND_DRAWINGS, "SheetsAndDrawings"),
            (Self::VIEWS_AND_MODELS, "ViewsAndModels"),
            (Self::GLOBAL_PROPERTIES, "GlobalProperties"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
        .collect()
    }
}

impl BitOr for ContainingChanges {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Application that pushed a changeset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub name: String,
}

/// Source files a synchronization changeset was produced from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynchronizationInfo {
    pub changed_files: Vec<String>,
}

/// Links to resources related to a changeset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangesetLinks {
    #[serde(default)]
    pub upload: Option<Link>,
    #[serde(default)]
    pub download: Option<Link>,
    #[serde(default)]
    pub complete: Option<Link>,
    /// Present when a named version points at this changeset.
    #[serde(default)]
    pub named_version: Option<Link>,
    /// Checkpoint for this changeset or the closest one before it.
    #[serde(default)]
    pub current_or_preceding_checkpoint: Option<Link>,
}

/// Changeset as returned with `Prefer: return=minimal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimalChangeset {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    /// 1-based position in the iModel's history.
    pub index: u32,
    /// Id of the previous changeset, empty for the first one.
    #[serde(default)]
    pub parent_id: String,
    pub push_date_time: DateTime<Utc>,
    pub state: ChangesetState,
    pub containing_changes: ContainingChanges,
    /// Size of the changeset file in bytes.
    pub file_size: u64,
    /// Briefcase the changeset was pushed from.
    pub briefcase_id: u32,
}

/// Changeset as returned with `Prefer: return=representation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Changeset {
    #[serde(flatten)]
    pub minimal: MinimalChangeset,
    #[serde(default)]
    pub application: Option<Application>,
    #[serde(default)]
    pub synchronization_info: Option<SynchronizationInfo>,
    #[serde(rename = "_links", default)]
    pub links: ChangesetLinks,
}

deref_to_minimal!(Changeset => MinimalChangeset);

#[derive(Debug, Clone, Deserialize)]
pub struct ChangesetResponse {
    pub changeset: Changeset,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHANGESET_JSON: &str = r#"{
        "id": "cs2",
        "displayName": "2",
        "description": "Added bridge pillars",
        "index": 2,
        "parentId": "cs1",
        "pushDateTime": "2021-05-28T14:17:53.13Z",
        "state": "fileUploaded",
        "containingChanges": 5,
        "fileSize": 1024,
        "briefcaseId": 2,
        "application": null,
        "synchronizationInfo": null,
        "_links": {
            "download": { "href": "https://blob.example.com/cs2" },
            "namedVersion": { "href": "https://api.example.com/imodels/m1/namedversions/nv1" },
            "currentOrPrecedingCheckpoint": null
        }
    }"#;

    #[test]
    fn test_deserialize_representation() {
        let changeset: Changeset = serde_json::from_str(CHANGESET_JSON).unwrap();

        assert_eq!(changeset.index, 2);
        assert_eq!(changeset.parent_id, "cs1");
        assert_eq!(changeset.state, ChangesetState::FileUploaded);
        assert!(changeset.containing_changes.contains(ContainingChanges::SCHEMA));
        assert!(changeset.containing_changes.contains(ContainingChanges::SPATIAL_DATA));
        assert!(changeset.synchronization_info.is_none());
        assert!(changeset.links.named_version.is_some());
        assert!(changeset.links.current_or_preceding_checkpoint.is_none());
    }

    #[test]
    fn test_minimal_ignores_representation_fields() {
        let changeset: MinimalChangeset = serde_json::from_str(CHANGESET_JSON).unwrap();
        assert_eq!(changeset.id, "cs2");
        assert_eq!(changeset.file_size, 1024);
    }

    #[test]
    fn test_containing_changes_names() {
        assert!(ContainingChanges::REGULAR.names().is_empty());
        assert_eq!(
            ContainingChanges(5).names(),
            vec!["Schema", "SpatialData"]
        );
    }
}
