//
//  imodels-client
//  api/operations/named_versions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Named version operations (`/imodels/{id}/namedversions`).

use super::{CollectionPageParams, OperationsBase};
use crate::api::common::{
    entity_collection_accessor, CollectionRequestParams, EntityStream, PreferReturn, Result,
};
use crate::api::entities::{
    MinimalNamedVersion, NamedVersion, NamedVersionPropertiesForCreate,
    NamedVersionPropertiesForUpdate, NamedVersionResponse,
};
use crate::auth::Authorization;

/// Parameters for listing the named versions of an iModel.
#[derive(Debug, Clone, Default)]
pub struct GetNamedVersionListParams {
    pub imodel_id: String,
    /// Only return the named version with this exact name.
    pub name: Option<String>,
    pub url_params: CollectionRequestParams,
}

impl GetNamedVersionListParams {
    pub fn new(imodel_id: impl Into<String>) -> Self {
        Self {
            imodel_id: imodel_id.into(),
            ..Self::default()
        }
    }
}

/// Operations on named versions.
#[derive(Clone)]
pub struct NamedVersionOperations {
    base: OperationsBase,
}

impl NamedVersionOperations {
    pub(crate) fn new(base: OperationsBase) -> Self {
        Self { base }
    }

    fn collection_url(&self, imodel_id: &str) -> String {
        format!("{}/{}/namedversions", self.base.base_url(), imodel_id)
    }

    fn list_url(&self, params: &GetNamedVersionListParams) -> String {
        let query = params
            .url_params
            .clone()
            .filter_opt("name", params.name.as_deref());
        format!(
            "{}{}",
            self.collection_url(&params.imodel_id),
            self.base.form_query_string(&query)
        )
    }

    pub fn get_minimal_list(
        &self,
        authorization: &Authorization,
        params: &GetNamedVersionListParams,
    ) -> EntityStream<MinimalNamedVersion> {
        self.base.get_collection(CollectionPageParams::new(
            authorization,
            self.list_url(params),
            PreferReturn::Minimal,
            entity_collection_accessor("namedVersions"),
        ))
    }

    pub fn get_representation_list(
        &self,
        authorization: &Authorization,
        params: &GetNamedVersionListParams,
    ) -> EntityStream<NamedVersion> {
        self.base.get_collection(CollectionPageParams::new(
            authorization,
            self.list_url(params),
            PreferReturn::Representation,
            entity_collection_accessor("namedVersions"),
        ))
    }

    pub async fn get_by_id(
        &self,
        authorization: &Authorization,
        imodel_id: &str,
        named_version_id: &str,
    ) -> Result<NamedVersion> {
        let url = format!("{}/{}", self.collection_url(imodel_id), named_version_id);
        let response: NamedVersionResponse =
            self.base.send_get_request(authorization, &url, None).await?;
        Ok(response.named_version)
    }

    /// Names a changeset (or the baseline when `changeset_id` is unset).
    pub async fn create(
        &self,
        authorization: &Authorization,
        imodel_id: &str,
        properties: &NamedVersionPropertiesForCreate,
    ) -> Result<NamedVersion> {
        tracing::debug!(imodel_id, name = %properties.name, "Creating named version");
        let response: NamedVersionResponse = self
            .base
            .send_post_request(authorization, &self.collection_url(imodel_id), properties)
            .await?;
        Ok(response.named_version)
    }

    /// Changes the name, description or visibility of a named version.
    pub async fn update(
        &self,
        authorization: &Authorization,
        imodel_id: &str,
        named_version_id: &str,
        properties: &NamedVersionPropertiesForUpdate,
    ) -> Result<NamedVersion> {
        let url = format!("{}/{}", self.collection_url(imodel_id), named_version_id);
        let response: NamedVersionResponse = self
            .base
            .send_patch_request(authorization, &url, properties)
            .await?;
        Ok(response.named_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::IModelsErrorCode;
    use crate::api::entities::NamedVersionState;
    use crate::api::operations::test_support::{client, RecordingTransport, BASE_URL};
    use futures::TryStreamExt;
    use reqwest::Method;
    use serde_json::json;

    fn named_version_json(id: &str, state: &str) -> serde_json::Value {
        json!({
            "id": id,
            "displayName": "Milestone",
            "changesetId": "cs5",
            "name": "Milestone",
            "description": null,
            "createdDateTime": "2021-05-28T14:17:53.13Z",
            "state": state
        })
    }

    #[tokio::test]
    async fn test_minimal_list_with_name_filter() {
        let transport = RecordingTransport::new();
        transport.respond(
            &format!("{}/m1/namedversions?name=Milestone", BASE_URL),
            json!({ "namedVersions": [{ "id": "nv1", "displayName": "Milestone", "changesetId": null }] }),
        );

        let params = GetNamedVersionListParams {
            name: Some("Milestone".to_string()),
            ..GetNamedVersionListParams::new("m1")
        };
        let versions: Vec<MinimalNamedVersion> = client(transport)
            .named_versions()
            .get_minimal_list(&Authorization::bearer("t"), &params)
            .try_collect()
            .await
            .unwrap();

        assert_eq!(versions.len(), 1);
        assert!(versions[0].changeset_id.is_none());
    }

    #[tokio::test]
    async fn test_create_posts_body() {
        let transport = RecordingTransport::new();
        transport.respond(
            &format!("{}/m1/namedversions", BASE_URL),
            json!({ "namedVersion": named_version_json("nv1", "visible") }),
        );

        let properties = NamedVersionPropertiesForCreate {
            name: "Milestone".to_string(),
            description: None,
            changeset_id: Some("cs5".to_string()),
        };
        let version = client(transport.clone())
            .named_versions()
            .create(&Authorization::bearer("t"), "m1", &properties)
            .await
            .unwrap();

        assert_eq!(version.changeset_id.as_deref(), Some("cs5"));
        assert_eq!(
            transport.requests()[0].body,
            Some(json!({ "name": "Milestone", "changesetId": "cs5" }))
        );
    }

    #[tokio::test]
    async fn test_create_conflict() {
        let transport = RecordingTransport::new();
        transport.fail(
            &format!("{}/m1/namedversions", BASE_URL),
            409,
            r#"{"error":{"code":"NamedVersionExists","message":"Named Version with the same name already exists."}}"#,
        );

        let properties = NamedVersionPropertiesForCreate {
            name: "Milestone".to_string(),
            description: None,
            changeset_id: None,
        };
        let err = client(transport)
            .named_versions()
            .create(&Authorization::bearer("t"), "m1", &properties)
            .await
            .unwrap_err();

        assert_eq!(err.code, IModelsErrorCode::NamedVersionExists);
    }

    #[tokio::test]
    async fn test_update_patches_only_set_fields() {
        let transport = RecordingTransport::new();
        transport.respond(
            &format!("{}/m1/namedversions/nv1", BASE_URL),
            json!({ "namedVersion": named_version_json("nv1", "hidden") }),
        );

        let update = NamedVersionPropertiesForUpdate {
            state: Some(NamedVersionState::Hidden),
            ..Default::default()
        };
        let version = client(transport.clone())
            .named_versions()
            .update(&Authorization::bearer("t"), "m1", "nv1", &update)
            .await
            .unwrap();

        assert_eq!(version.state, NamedVersionState::Hidden);
        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::PATCH);
        assert_eq!(request.body, Some(json!({ "state": "hidden" })));
    }
}
