//
//  imodels-client
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport
//!
//! The [`Transport`] trait sends one request and returns the decoded JSON
//! body. [`ReqwestTransport`] is the default implementation.
//!
//! ## Behavior
//!
//! - Exactly one network call per [`Transport::send`]; nothing is retried
//! - Non-2xx responses are handed, status and raw body intact, to an
//!   [`ErrorParser`] which produces the returned [`IModelsError`]
//! - Network faults and timeouts surface as [`IModelsErrorCode::Unknown`]
//! - Empty success bodies (e.g. `204 No Content`) decode to `Value::Null`
//!
//! Custom transports can be plugged into the client for testing or to use
//! a different HTTP stack.

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;

use super::common::{ErrorParser, IModelsError, IModelsErrorCode, Result};

/// A single HTTP request as produced by the operation layer.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute request URL, including the query string.
    pub url: String,
    /// Header name/value pairs.
    pub headers: Vec<(String, String)>,
    /// Optional JSON body.
    pub body: Option<Value>,
}

impl HttpRequest {
    /// Returns the value of the first header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Sends requests to the API.
///
/// Implementations must perform one network call per invocation and return
/// every failure as an [`IModelsError`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the decoded JSON body.
    async fn send(&self, request: HttpRequest) -> Result<Value>;
}

/// [`Transport`] backed by [`reqwest`].
///
/// # Example
///
/// ```rust,no_run
/// use imodels_client::api::common::parse_error;
/// use imodels_client::api::transport::ReqwestTransport;
///
/// let transport = ReqwestTransport::new(parse_error)?;
/// # Ok::<(), imodels_client::api::common::IModelsError>(())
/// ```
pub struct ReqwestTransport {
    http: Client,
    parse_error: ErrorParser,
}

impl ReqwestTransport {
    /// Creates a transport that classifies failures with `parse_error`.
    pub fn new(parse_error: ErrorParser) -> Result<Self> {
        let http = Client::builder()
            .user_agent(format!("imodels-client/{}", crate::VERSION))
            .build()?;
        Ok(Self::with_client(http, parse_error))
    }

    /// Wraps an existing [`reqwest::Client`], e.g. one with custom timeouts.
    pub fn with_client(http: Client, parse_error: ErrorParser) -> Self {
        Self { http, parse_error }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<Value> {
        tracing::debug!(method = %request.method, url = %request.url, "Sending request");

        let mut builder = self.http.request(request.method.clone(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_vec(body).map_err(|e| {
                IModelsError::new(
                    IModelsErrorCode::Unknown,
                    format!("Failed to encode request body: {}", e),
                )
                .with_source(e)
            })?);
        }

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), url = %request.url, "Received response");

        let text = response.text().await?;

        if !status.is_success() {
            return Err((self.parse_error)(status.as_u16(), &text));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| IModelsError::decode("response body", e))
    }
}
