//
//  imodels-client
//  api/entities/briefcase.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Briefcase entity types.
//!
//! A briefcase is a local copy of an iModel acquired by a user. Its
//! numeric `briefcase_id` is what changesets record as their origin.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimalBriefcase {
    pub id: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Briefcase {
    #[serde(flatten)]
    pub minimal: MinimalBriefcase,
    /// Numeric briefcase id, unique within the iModel.
    pub briefcase_id: u32,
    /// Id of the user that acquired the briefcase.
    #[serde(default)]
    pub owner_id: Option<String>,
    pub acquired_date_time: DateTime<Utc>,
    /// Size of the briefcase file in bytes.
    pub file_size: u64,
    #[serde(default)]
    pub device_name: Option<String>,
}

deref_to_minimal!(Briefcase => MinimalBriefcase);

/// Request body for acquiring a briefcase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefcaseProperties {
    /// Name of the machine the briefcase will live on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BriefcaseResponse {
    pub briefcase: Briefcase,
}
