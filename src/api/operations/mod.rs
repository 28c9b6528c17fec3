//
//  imodels-client
//  api/operations/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Operation Sets
//!
//! Every resource of the API has an operation set built on [`OperationsBase`],
//! which owns the request conventions shared by all of them:
//!
//! - standard headers (`Accept`, `Authorization`, `Content-Type`, `Prefer`)
//! - query string serialization for collection requests
//! - single-page collection requests that chain into lazy streams
//!
//! ## Operation Sets
//!
//! - [`IModelOperations`] - `/imodels`
//! - [`BriefcaseOperations`] - `/imodels/{id}/briefcases`
//! - [`ChangesetOperations`] - `/imodels/{id}/changesets`
//! - [`NamedVersionOperations`] - `/imodels/{id}/namedversions`
//! - [`CheckpointOperations`] - `.../checkpoint`

use std::fmt;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::client::IModelsClientOptions;
use super::common::{
    form_query_string, next_page_link, paged_collection, CollectionRequestParams,
    EntityCollectionAccessor, EntityPage, EntityStream, IModelsError, IModelsErrorCode,
    NextLinkAccessor, PageQuery, PreferReturn, Result,
};
use super::transport::HttpRequest;
use crate::auth::Authorization;

mod briefcases;
mod changesets;
mod checkpoints;
mod imodels;
mod named_versions;

pub use briefcases::*;
pub use changesets::*;
pub use checkpoints::*;
pub use imodels::*;
pub use named_versions::*;

/// Header names used by every request.
pub mod headers {
    pub const ACCEPT: &str = "Accept";
    pub const AUTHORIZATION: &str = "Authorization";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const PREFER: &str = "Prefer";

    pub const CONTENT_TYPE_JSON: &str = "application/json";
}

/// Everything needed to request one page of a collection.
///
/// The same parameters, with only `url` replaced, are reused for every
/// following page so the Prefer mode, credential and accessor stay
/// consistent across a traversal.
pub struct CollectionPageParams<T> {
    pub authorization: Authorization,
    /// Absolute URL of the page, query string included.
    pub url: String,
    pub prefer_return: PreferReturn,
    pub entity_collection_accessor: EntityCollectionAccessor<T>,
    /// Finds the next page's URL in a response body.
    pub next_link_accessor: NextLinkAccessor,
}

impl<T> CollectionPageParams<T> {
    /// Creates parameters using the standard `_links.next.href` continuation.
    pub fn new(
        authorization: &Authorization,
        url: String,
        prefer_return: PreferReturn,
        entity_collection_accessor: EntityCollectionAccessor<T>,
    ) -> Self {
        Self {
            authorization: authorization.clone(),
            url,
            prefer_return,
            entity_collection_accessor,
            next_link_accessor: next_page_link,
        }
    }
}

impl<T> Clone for CollectionPageParams<T> {
    fn clone(&self) -> Self {
        Self {
            authorization: self.authorization.clone(),
            url: self.url.clone(),
            prefer_return: self.prefer_return,
            entity_collection_accessor: self.entity_collection_accessor.clone(),
            next_link_accessor: self.next_link_accessor,
        }
    }
}

impl<T> fmt::Debug for CollectionPageParams<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionPageParams")
            .field("url", &self.url)
            .field("prefer_return", &self.prefer_return)
            .finish_non_exhaustive()
    }
}

/// Shared request plumbing for all operation sets.
///
/// Cheap to clone; clones share the client options.
#[derive(Clone)]
pub struct OperationsBase {
    options: Arc<IModelsClientOptions>,
}

impl OperationsBase {
    pub fn new(options: Arc<IModelsClientOptions>) -> Self {
        Self { options }
    }

    /// Base URL of the iModels API, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.options.base_url.trim_end_matches('/')
    }

    /// Serializes collection parameters; see [`form_query_string`].
    pub fn form_query_string(&self, params: &CollectionRequestParams) -> String {
        form_query_string(params)
    }

    fn headers(
        &self,
        authorization: &Authorization,
        prefer_return: Option<PreferReturn>,
        has_body: bool,
    ) -> Vec<(String, String)> {
        let mut headers = vec![
            (
                headers::ACCEPT.to_string(),
                format!("application/vnd.bentley.{}+json", self.options.api_version),
            ),
            (headers::AUTHORIZATION.to_string(), authorization.header_value()),
        ];
        if has_body {
            headers.push((
                headers::CONTENT_TYPE.to_string(),
                headers::CONTENT_TYPE_JSON.to_string(),
            ));
        }
        if let Some(prefer_return) = prefer_return {
            headers.push((headers::PREFER.to_string(), prefer_return.header_value().to_string()));
        }
        headers
    }

    async fn send_request<T: DeserializeOwned>(
        &self,
        method: Method,
        authorization: &Authorization,
        url: &str,
        prefer_return: Option<PreferReturn>,
        body: Option<Value>,
    ) -> Result<T> {
        let request = HttpRequest {
            method,
            url: url.to_string(),
            headers: self.headers(authorization, prefer_return, body.is_some()),
            body,
        };
        let response = self.options.transport.send(request).await?;
        serde_json::from_value(response).map_err(|e| IModelsError::decode("response body", e))
    }

    /// Sends a GET request and decodes the response body into `T`.
    ///
    /// Use `T = serde_json::Value` to get the raw body.
    pub async fn send_get_request<T: DeserializeOwned>(
        &self,
        authorization: &Authorization,
        url: &str,
        prefer_return: Option<PreferReturn>,
    ) -> Result<T> {
        self.send_request(Method::GET, authorization, url, prefer_return, None)
            .await
    }

    /// Sends a POST request with a JSON body.
    pub async fn send_post_request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        authorization: &Authorization,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let body = encode_body(body)?;
        self.send_request(Method::POST, authorization, url, None, Some(body))
            .await
    }

    /// Sends a PATCH request with a JSON body.
    pub async fn send_patch_request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        authorization: &Authorization,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let body = encode_body(body)?;
        self.send_request(Method::PATCH, authorization, url, None, Some(body))
            .await
    }

    /// Sends a DELETE request, discarding any response body.
    pub async fn send_delete_request(&self, authorization: &Authorization, url: &str) -> Result<()> {
        self.send_request::<Value>(Method::DELETE, authorization, url, None, None)
            .await
            .map(|_| ())
    }

    /// Requests one page of a collection.
    ///
    /// Sends a GET with the requested `Prefer` mode, extracts the entities
    /// with the caller's accessor and, when the body links to a next page,
    /// attaches a query that repeats this request against that URL.
    pub fn get_single_collection_page<T>(
        &self,
        params: CollectionPageParams<T>,
    ) -> BoxFuture<'static, Result<EntityPage<T>>>
    where
        T: Send + 'static,
    {
        let base = self.clone();
        async move {
            let body: Value = base
                .send_get_request(&params.authorization, &params.url, Some(params.prefer_return))
                .await?;
            let entities = (params.entity_collection_accessor)(&body)?;
            let next = (params.next_link_accessor)(&body).map(|url| {
                let next_params = CollectionPageParams {
                    url,
                    ..params.clone()
                };
                let base = base.clone();
                let query: PageQuery<T> =
                    Box::new(move || base.get_single_collection_page(next_params));
                query
            });

            Ok(EntityPage { entities, next })
        }
        .boxed()
    }

    /// Streams every entity of a collection, fetching pages on demand.
    pub fn get_collection<T>(&self, params: CollectionPageParams<T>) -> EntityStream<T>
    where
        T: Send + 'static,
    {
        let base = self.clone();
        paged_collection(Box::new(move || base.get_single_collection_page(params)))
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<Value> {
    serde_json::to_value(body).map_err(|e| {
        IModelsError::new(
            IModelsErrorCode::Unknown,
            format!("Failed to encode request body: {}", e),
        )
        .with_source(e)
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    //! In-memory transport for exercising operation sets without a network.

    use std::collections::{HashMap, VecDeque};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::Value;

    use crate::api::client::{IModelsClient, IModelsClientOptions};
    use crate::api::common::{parse_error, IModelsError, IModelsErrorCode, Result};
    use crate::api::transport::{HttpRequest, Transport};

    pub const BASE_URL: &str = "https://api.test/imodels";

    enum Reply {
        Body(Value),
        Failure(u16, String),
    }

    /// Replies to URLs with queued bodies and records every request.
    #[derive(Default)]
    pub struct RecordingTransport {
        replies: Mutex<HashMap<String, VecDeque<Reply>>>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl RecordingTransport {
        pub fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        pub fn respond(&self, url: &str, body: Value) {
            self.push(url, Reply::Body(body));
        }

        pub fn fail(&self, url: &str, status: u16, body: &str) {
            self.push(url, Reply::Failure(status, body.to_string()));
        }

        pub fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }

        fn push(&self, url: &str, reply: Reply) {
            self.replies
                .lock()
                .unwrap()
                .entry(url.to_string())
                .or_default()
                .push_back(reply);
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn send(&self, request: HttpRequest) -> Result<Value> {
            let reply = self
                .replies
                .lock()
                .unwrap()
                .get_mut(&request.url)
                .and_then(VecDeque::pop_front);
            let url = request.url.clone();
            self.requests.lock().unwrap().push(request);

            match reply {
                Some(Reply::Body(body)) => Ok(body),
                Some(Reply::Failure(status, body)) => Err(parse_error(status, &body)),
                None => Err(IModelsError::new(
                    IModelsErrorCode::Unknown,
                    format!("no reply queued for {}", url),
                )),
            }
        }
    }

    pub fn client(transport: Arc<RecordingTransport>) -> IModelsClient {
        IModelsClient::with_options(IModelsClientOptions {
            base_url: BASE_URL.to_string(),
            api_version: "itwin-platform.v1".to_string(),
            transport,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::api::common::entity_collection_accessor;
    use futures::TryStreamExt;

    fn page(ids: &[u32], next: Option<&str>) -> Value {
        let mut body = serde_json::json!({ "items": ids });
        if let Some(next) = next {
            body["_links"] = serde_json::json!({ "next": { "href": next } });
        }
        body
    }

    fn base(transport: Arc<RecordingTransport>) -> OperationsBase {
        OperationsBase::new(Arc::new(IModelsClientOptions {
            base_url: format!("{}/", BASE_URL),
            api_version: "itwin-platform.v1".to_string(),
            transport,
        }))
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        assert_eq!(base(RecordingTransport::new()).base_url(), BASE_URL);
    }

    #[tokio::test]
    async fn test_get_sets_standard_headers() {
        let transport = RecordingTransport::new();
        transport.respond("https://api.test/imodels/1", serde_json::json!({ "ok": true }));

        let body: Value = base(transport.clone())
            .send_get_request(
                &Authorization::bearer("token"),
                "https://api.test/imodels/1",
                Some(PreferReturn::Representation),
            )
            .await
            .unwrap();

        assert_eq!(body["ok"], true);
        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.header("accept"), Some("application/vnd.bentley.itwin-platform.v1+json"));
        assert_eq!(request.header("authorization"), Some("Bearer token"));
        assert_eq!(request.header("prefer"), Some("return=representation"));
        assert_eq!(request.header("content-type"), None);
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_patch_sends_json_body() {
        let transport = RecordingTransport::new();
        transport.respond("https://api.test/imodels/1", serde_json::json!({}));

        let _: Value = base(transport.clone())
            .send_patch_request(
                &Authorization::bearer("token"),
                "https://api.test/imodels/1",
                &serde_json::json!({ "name": "Renamed" }),
            )
            .await
            .unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::PATCH);
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header("prefer"), None);
        assert_eq!(request.body, Some(serde_json::json!({ "name": "Renamed" })));
    }

    #[tokio::test]
    async fn test_error_propagates_unchanged() {
        let transport = RecordingTransport::new();
        transport.fail(
            "https://api.test/imodels",
            401,
            r#"{"error":{"code":"Unauthorized","message":"Token expired."}}"#,
        );

        let err = base(transport)
            .send_post_request::<Value, _>(
                &Authorization::bearer("stale"),
                "https://api.test/imodels",
                &serde_json::json!({}),
            )
            .await
            .unwrap_err();

        assert_eq!(err.code, IModelsErrorCode::Unauthorized);
        assert_eq!(err.message, "Token expired.");
    }

    #[tokio::test]
    async fn test_single_page_wires_continuation() {
        let transport = RecordingTransport::new();
        transport.respond("https://api.test/items", page(&[1, 2], Some("https://api.test/items?page=2")));
        transport.respond("https://api.test/items?page=2", page(&[3], None));

        let base = base(transport.clone());
        let params = CollectionPageParams::new(
            &Authorization::bearer("token"),
            "https://api.test/items".to_string(),
            PreferReturn::Minimal,
            entity_collection_accessor::<u32>("items"),
        );

        let first = base.get_single_collection_page(params).await.unwrap();
        assert_eq!(first.entities, vec![1, 2]);
        assert_eq!(transport.requests().len(), 1);

        let second = (first.next.unwrap())().await.unwrap();
        assert_eq!(second.entities, vec![3]);
        assert!(second.next.is_none());

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests
            .iter()
            .all(|r| r.header("prefer") == Some("return=minimal")));
        assert!(requests
            .iter()
            .all(|r| r.header("authorization") == Some("Bearer token")));
    }

    #[tokio::test]
    async fn test_collection_scenario_three_pages() {
        let transport = RecordingTransport::new();
        transport.respond(
            "https://api.test/items?$top=5",
            page(&[1, 2, 3, 4, 5], Some("https://api.test/items?$top=5&$skip=5")),
        );
        transport.respond(
            "https://api.test/items?$top=5&$skip=5",
            page(&[6, 7, 8, 9, 10], Some("https://api.test/items?$top=5&$skip=10")),
        );
        transport.respond("https://api.test/items?$top=5&$skip=10", page(&[11, 12], None));

        let base = base(transport.clone());
        let url = format!(
            "https://api.test/items{}",
            base.form_query_string(&CollectionRequestParams::new().top(5))
        );
        let params = CollectionPageParams::new(
            &Authorization::bearer("token"),
            url,
            PreferReturn::Representation,
            entity_collection_accessor::<u32>("items"),
        );

        let all: Vec<u32> = base.get_collection(params).try_collect().await.unwrap();

        assert_eq!(all.len(), 12);
        assert_eq!(&all[10..], &[11, 12]);
        assert_eq!(transport.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_collection_abandoned_early() {
        let transport = RecordingTransport::new();
        transport.respond(
            "https://api.test/items",
            page(&[1, 2, 3, 4, 5], Some("https://api.test/items?page=2")),
        );
        transport.respond("https://api.test/items?page=2", page(&[6, 7], None));

        let base = base(transport.clone());
        let params = CollectionPageParams::new(
            &Authorization::bearer("token"),
            "https://api.test/items".to_string(),
            PreferReturn::Minimal,
            entity_collection_accessor::<u32>("items"),
        );

        let taken: Vec<u32> = futures::StreamExt::take(base.get_collection(params), 3)
            .try_collect()
            .await
            .unwrap();

        assert_eq!(taken, vec![1, 2, 3]);
        assert_eq!(transport.requests().len(), 1);
    }
}
