//
//  imodels-client
//  api/entities/named_version.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Named version entity types.
//!
//! A named version gives a human-readable name to a point in an iModel's
//! changeset history. A named version without a `changeset_id` points at
//! the iModel's baseline.
//!
//! # Example
//!
//! ```rust
//! use imodels_client::api::entities::{NamedVersionPropertiesForUpdate, NamedVersionState};
//!
//! let update = NamedVersionPropertiesForUpdate {
//!     state: Some(NamedVersionState::Hidden),
//!     ..Default::default()
//! };
//! assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!({ "state": "hidden" }));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Visibility of a named version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NamedVersionState {
    Visible,
    Hidden,
}

impl NamedVersionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
        }
    }
}

/// Named version as returned with `Prefer: return=minimal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimalNamedVersion {
    pub id: String,
    pub display_name: String,
    /// Changeset the version points at, `None` for the baseline.
    #[serde(default)]
    pub changeset_id: Option<String>,
}

/// Named version as returned with `Prefer: return=representation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedVersion {
    #[serde(flatten)]
    pub minimal: MinimalNamedVersion,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_date_time: DateTime<Utc>,
    pub state: NamedVersionState,
}

deref_to_minimal!(NamedVersion => MinimalNamedVersion);

/// Properties used to create a named version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedVersionPropertiesForCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Changeset to name; omit to name the baseline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changeset_id: Option<String>,
}

/// Properties that can be changed on an existing named version.
///
/// Unset fields are left untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedVersionPropertiesForUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<NamedVersionState>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedVersionResponse {
    pub named_version: NamedVersion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_without_changeset_is_baseline() {
        let json = r#"{"id":"nv1","displayName":"Baseline"}"#;
        let version: MinimalNamedVersion = serde_json::from_str(json).unwrap();
        assert!(version.changeset_id.is_none());
    }

    #[test]
    fn test_representation_derefs_to_minimal() {
        let json = r#"{
            "id": "nv2",
            "displayName": "Milestone 1",
            "changesetId": "cs5",
            "name": "Milestone 1",
            "description": "First milestone",
            "createdDateTime": "2021-06-01T08:00:00Z",
            "state": "visible"
        }"#;
        let version: NamedVersion = serde_json::from_str(json).unwrap();
        assert_eq!(version.changeset_id.as_deref(), Some("cs5"));
        assert_eq!(version.state, NamedVersionState::Visible);
    }
}
