//
//  imodels-client
//  api/entities/imodel.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! iModel entity types.
//!
//! An iModel is the top-level container: it belongs to a project and owns
//! the changeset history, named versions, briefcases and checkpoints.
//!
//! # Example
//!
//! ```rust
//! use imodels_client::api::entities::{Extent, IModelProperties, Point};
//!
//! let properties = IModelProperties {
//!     project_id: "5d9b9a8e-0000-0000-0000-000000000000".to_string(),
//!     name: "Sample iModel".to_string(),
//!     description: Some("Sample iModel description".to_string()),
//!     extent: Some(Extent {
//!         south_west: Point { latitude: 1.0, longitude: 2.0 },
//!         north_east: Point { latitude: 3.0, longitude: 4.0 },
//!     }),
//! };
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// iModel as returned with `Prefer: return=minimal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimalIModel {
    /// Unique identifier of the iModel.
    pub id: String,
    /// Name shown to users.
    pub display_name: String,
}

/// Lifecycle state of an iModel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IModelState {
    /// The iModel has been created but its baseline is not processed yet.
    NotInitialized,
    /// The iModel is ready for use.
    Initialized,
}

impl IModelState {
    /// Returns the wire name of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotInitialized => "notInitialized",
            Self::Initialized => "initialized",
        }
    }
}

/// A geographic coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

/// Geographic bounding box of an iModel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extent {
    pub south_west: Point,
    pub north_east: Point,
}

/// iModel as returned with `Prefer: return=representation` and by
/// single-entity requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IModel {
    #[serde(flatten)]
    pub minimal: MinimalIModel,
    /// Unique name of the iModel within its project.
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub state: IModelState,
    pub created_date_time: DateTime<Utc>,
    /// Project the iModel belongs to.
    pub project_id: String,
    #[serde(default)]
    pub extent: Option<Extent>,
}

deref_to_minimal!(IModel => MinimalIModel);

/// Properties used to create an empty iModel.
///
/// # Fields
///
/// * `project_id` - Project that will own the iModel
/// * `name` - Unique name within the project
/// * `description` - Optional description (at most 255 characters)
/// * `extent` - Optional geographic extent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IModelProperties {
    pub project_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extent: Option<Extent>,
}

/// Envelope of single-iModel responses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IModelResponse {
    #[serde(rename = "iModel")]
    pub imodel: IModel,
}
