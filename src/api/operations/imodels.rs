//
//  imodels-client
//  api/operations/imodels.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! iModel operations (`/imodels`).

use super::{CollectionPageParams, OperationsBase};
use crate::api::common::{
    entity_collection_accessor, CollectionRequestParams, EntityStream, PreferReturn, Result,
};
use crate::api::entities::{IModel, IModelProperties, IModelResponse, MinimalIModel};
use crate::auth::Authorization;

/// Parameters for listing the iModels of a project.
///
/// # Fields
///
/// * `project_id` - Project to list (required by the API)
/// * `name` - Only return the iModel with this exact name
/// * `url_params` - Paging and ordering
#[derive(Debug, Clone, Default)]
pub struct GetIModelListParams {
    pub project_id: String,
    pub name: Option<String>,
    pub url_params: CollectionRequestParams,
}

impl GetIModelListParams {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Self::default()
        }
    }

    fn query(&self) -> CollectionRequestParams {
        self.url_params
            .clone()
            .filter("projectId", &self.project_id)
            .filter_opt("name", self.name.as_deref())
    }
}

/// Operations on iModels.
#[derive(Clone)]
pub struct IModelOperations {
    base: OperationsBase,
}

impl IModelOperations {
    pub(crate) fn new(base: OperationsBase) -> Self {
        Self { base }
    }

    fn list_url(&self, params: &GetIModelListParams) -> String {
        format!(
            "{}{}",
            self.base.base_url(),
            self.base.form_query_string(&params.query())
        )
    }

    fn single_url(&self, imodel_id: &str) -> String {
        format!("{}/{}", self.base.base_url(), imodel_id)
    }

    /// Streams the project's iModels in minimal form.
    pub fn get_minimal_list(
        &self,
        authorization: &Authorization,
        params: &GetIModelListParams,
    ) -> EntityStream<MinimalIModel> {
        self.base.get_collection(CollectionPageParams::new(
            authorization,
            self.list_url(params),
            PreferReturn::Minimal,
            entity_collection_accessor("iModels"),
        ))
    }

    /// Streams the project's iModels in full form.
    pub fn get_representation_list(
        &self,
        authorization: &Authorization,
        params: &GetIModelListParams,
    ) -> EntityStream<IModel> {
        self.base.get_collection(CollectionPageParams::new(
            authorization,
            self.list_url(params),
            PreferReturn::Representation,
            entity_collection_accessor("iModels"),
        ))
    }

    pub async fn get_by_id(&self, authorization: &Authorization, imodel_id: &str) -> Result<IModel> {
        let response: IModelResponse = self
            .base
            .send_get_request(authorization, &self.single_url(imodel_id), None)
            .await?;
        Ok(response.imodel)
    }

    /// Creates an iModel with no changesets.
    ///
    /// The returned iModel may still be `notInitialized`; the server
    /// finishes creation asynchronously.
    pub async fn create_empty(
        &self,
        authorization: &Authorization,
        properties: &IModelProperties,
    ) -> Result<IModel> {
        tracing::debug!(name = %properties.name, project_id = %properties.project_id, "Creating iModel");
        let response: IModelResponse = self
            .base
            .send_post_request(authorization, self.base.base_url(), properties)
            .await?;
        Ok(response.imodel)
    }

    pub async fn delete(&self, authorization: &Authorization, imodel_id: &str) -> Result<()> {
        tracing::debug!(imodel_id, "Deleting iModel");
        self.base
            .send_delete_request(authorization, &self.single_url(imodel_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::{IModelsErrorCode, OrderBy};
    use crate::api::operations::test_support::{client, RecordingTransport, BASE_URL};
    use futures::TryStreamExt;
    use reqwest::Method;
    use serde_json::json;

    fn imodel_json(id: &str, name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "displayName": name,
            "name": name,
            "description": null,
            "state": "initialized",
            "createdDateTime": "2021-05-28T14:17:53.13Z",
            "projectId": "p1",
            "extent": null
        })
    }

    #[test]
    fn test_list_query_includes_filters() {
        let params = GetIModelListParams {
            project_id: "p1".to_string(),
            name: Some("My Bridge".to_string()),
            url_params: CollectionRequestParams::new().top(10).order_by(OrderBy::new("name")),
        };
        let ops = client(RecordingTransport::new()).imodels();

        assert_eq!(
            ops.list_url(&params),
            format!("{}?$top=10&$orderBy=name&name=My+Bridge&projectId=p1", BASE_URL)
        );
    }

    #[tokio::test]
    async fn test_minimal_list_follows_next_links() {
        let transport = RecordingTransport::new();
        let first = format!("{}?projectId=p1", BASE_URL);
        let second = format!("{}?projectId=p1&$skip=2", BASE_URL);
        transport.respond(
            &first,
            json!({
                "iModels": [
                    { "id": "a", "displayName": "A" },
                    { "id": "b", "displayName": "B" }
                ],
                "_links": { "next": { "href": second } }
            }),
        );
        transport.respond(
            &second,
            json!({ "iModels": [{ "id": "c", "displayName": "C" }], "_links": { "next": null } }),
        );

        let imodels: Vec<MinimalIModel> = client(transport.clone())
            .imodels()
            .get_minimal_list(&Authorization::bearer("t"), &GetIModelListParams::new("p1"))
            .try_collect()
            .await
            .unwrap();

        let ids: Vec<&str> = imodels.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert!(transport
            .requests()
            .iter()
            .all(|r| r.header("prefer") == Some("return=minimal")));
    }

    #[tokio::test]
    async fn test_representation_list_uses_representation_mode() {
        let transport = RecordingTransport::new();
        transport.respond(
            &format!("{}?projectId=p1", BASE_URL),
            json!({ "iModels": [imodel_json("a", "A")] }),
        );

        let imodels: Vec<IModel> = client(transport.clone())
            .imodels()
            .get_representation_list(&Authorization::bearer("t"), &GetIModelListParams::new("p1"))
            .try_collect()
            .await
            .unwrap();

        assert_eq!(imodels[0].project_id, "p1");
        assert_eq!(transport.requests()[0].header("prefer"), Some("return=representation"));
    }

    #[tokio::test]
    async fn test_create_empty_posts_properties() {
        let transport = RecordingTransport::new();
        transport.respond(BASE_URL, json!({ "iModel": imodel_json("new", "Bridge") }));

        let properties = IModelProperties {
            project_id: "p1".to_string(),
            name: "Bridge".to_string(),
            description: None,
            extent: None,
        };
        let imodel = client(transport.clone())
            .imodels()
            .create_empty(&Authorization::bearer("t"), &properties)
            .await
            .unwrap();

        assert_eq!(imodel.id, "new");
        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.body, Some(json!({ "projectId": "p1", "name": "Bridge" })));
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let transport = RecordingTransport::new();
        transport.fail(
            &format!("{}/missing", BASE_URL),
            404,
            r#"{"error":{"code":"iModelNotFound","message":"Requested iModel is not available."}}"#,
        );

        let err = client(transport)
            .imodels()
            .get_by_id(&Authorization::bearer("t"), "missing")
            .await
            .unwrap_err();

        assert_eq!(err.code, IModelsErrorCode::iModelNotFound);
    }

    #[tokio::test]
    async fn test_delete_accepts_empty_body() {
        let transport = RecordingTransport::new();
        transport.respond(&format!("{}/a", BASE_URL), serde_json::Value::Null);

        client(transport.clone())
            .imodels()
            .delete(&Authorization::bearer("t"), "a")
            .await
            .unwrap();

        assert_eq!(transport.requests()[0].method, Method::DELETE);
    }
}
