//
//  imodels-client
//  api/entities/checkpoint.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Checkpoint entity types.
//!
//! A checkpoint is a full snapshot of an iModel generated by the service
//! for a given changeset, so clients do not have to replay history.

use serde::{Deserialize, Serialize};

use crate::api::common::Link;

/// Generation state of a checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckpointState {
    Successful,
    /// Any state this client does not model (scheduled, failed, ...).
    #[serde(other)]
    Other,
}

impl CheckpointState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Successful => "successful",
            Self::Other => "other",
        }
    }
}

/// Credentials for reading a checkpoint from blob storage.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerAccessKey {
    pub account: String,
    pub sas: String,
    pub container: String,
    pub db_name: String,
}

impl std::fmt::Debug for ContainerAccessKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContainerAccessKey")
            .field("account", &self.account)
            .field("sas", &"<redacted>")
            .field("container", &self.container)
            .field("db_name", &self.db_name)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointLinks {
    #[serde(default)]
    pub download: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkpoint {
    /// Index of the changeset the checkpoint was generated for.
    pub changeset_index: u32,
    pub changeset_id: String,
    pub state: CheckpointState,
    #[serde(default)]
    pub container_access_key: Option<ContainerAccessKey>,
    #[serde(rename = "_links", default)]
    pub links: CheckpointLinks,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckpointResponse {
    pub checkpoint: Checkpoint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_state_is_other() {
        let json = r#"{"changesetIndex":3,"changesetId":"cs3","state":"scheduled"}"#;
        let checkpoint: Checkpoint = serde_json::from_str(json).unwrap();
        assert_eq!(checkpoint.state, CheckpointState::Other);
        assert!(checkpoint.links.download.is_none());
    }

    #[test]
    fn test_debug_redacts_sas() {
        let key = ContainerAccessKey {
            account: "acc".to_string(),
            sas: "sig=secret".to_string(),
            container: "c".to_string(),
            db_name: "db".to_string(),
        };
        assert!(!format!("{:?}", key).contains("secret"));
    }
}
