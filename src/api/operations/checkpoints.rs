//
//  imodels-client
//  api/operations/checkpoints.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Checkpoint operations.
//!
//! A checkpoint is addressed through its parent: a changeset (by id or
//! index), a named version, or the iModel itself for the latest one.

use super::OperationsBase;
use crate::api::common::Result;
use crate::api::entities::{Checkpoint, CheckpointResponse};
use crate::auth::Authorization;

/// The resource a checkpoint is requested for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckpointParent {
    /// Latest checkpoint of the iModel.
    Latest,
    Changeset { id: String },
    ChangesetIndex(u32),
    NamedVersion { id: String },
}

impl CheckpointParent {
    fn path(&self) -> String {
        match self {
            Self::Latest => "checkpoint".to_string(),
            Self::Changeset { id } => format!("changesets/{}/checkpoint", id),
            Self::ChangesetIndex(index) => format!("changesets/{}/checkpoint", index),
            Self::NamedVersion { id } => format!("namedversions/{}/checkpoint", id),
        }
    }
}

/// Operations on checkpoints.
#[derive(Clone)]
pub struct CheckpointOperations {
    base: OperationsBase,
}

impl CheckpointOperations {
    pub(crate) fn new(base: OperationsBase) -> Self {
        Self { base }
    }

    pub async fn get_single(
        &self,
        authorization: &Authorization,
        imodel_id: &str,
        parent: &CheckpointParent,
    ) -> Result<Checkpoint> {
        let url = format!("{}/{}/{}", self.base.base_url(), imodel_id, parent.path());
        let response: CheckpointResponse = self.base.send_get_request(authorization, &url, None).await?;
        Ok(response.checkpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::IModelsErrorCode;
    use crate::api::entities::CheckpointState;
    use crate::api::operations::test_support::{client, RecordingTransport, BASE_URL};
    use serde_json::json;

    #[test]
    fn test_parent_paths() {
        assert_eq!(CheckpointParent::Latest.path(), "checkpoint");
        assert_eq!(
            CheckpointParent::Changeset { id: "cs1".to_string() }.path(),
            "changesets/cs1/checkpoint"
        );
        assert_eq!(CheckpointParent::ChangesetIndex(7).path(), "changesets/7/checkpoint");
        assert_eq!(
            CheckpointParent::NamedVersion { id: "nv1".to_string() }.path(),
            "namedversions/nv1/checkpoint"
        );
    }

    #[tokio::test]
    async fn test_get_for_named_version() {
        let transport = RecordingTransport::new();
        transport.respond(
            &format!("{}/m1/namedversions/nv1/checkpoint", BASE_URL),
            json!({
                "checkpoint": {
                    "changesetIndex": 5,
                    "changesetId": "cs5",
                    "state": "successful",
                    "containerAccessKey": {
                        "account": "acc",
                        "sas": "sig",
                        "container": "c",
                        "dbName": "db"
                    },
                    "_links": { "download": { "href": "https://blob.example.com/cp" } }
                }
            }),
        );

        let checkpoint = client(transport)
            .checkpoints()
            .get_single(
                &Authorization::bearer("t"),
                "m1",
                &CheckpointParent::NamedVersion { id: "nv1".to_string() },
            )
            .await
            .unwrap();

        assert_eq!(checkpoint.changeset_index, 5);
        assert_eq!(checkpoint.state, CheckpointState::Successful);
        assert!(checkpoint.links.download.is_some());
    }

    #[tokio::test]
    async fn test_missing_checkpoint() {
        let transport = RecordingTransport::new();
        transport.fail(
            &format!("{}/m1/checkpoint", BASE_URL),
            404,
            r#"{"error":{"code":"CheckpointNotFound","message":"Requested Checkpoint is not available."}}"#,
        );

        let err = client(transport)
            .checkpoints()
            .get_single(&Authorization::bearer("t"), "m1", &CheckpointParent::Latest)
            .await
            .unwrap_err();

        assert_eq!(err.code, IModelsErrorCode::CheckpointNotFound);
    }
}
