//
//  imodels-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # iModels Client
//!
//! [`IModelsClient`] is the entry point of the library. It holds the
//! [`IModelsClientOptions`] (base URL, API version, transport) and hands out
//! one operation set per resource.
//!
//! ## Example
//!
//! ```rust,no_run
//! use futures::TryStreamExt;
//! use imodels_client::api::operations::GetIModelListParams;
//! use imodels_client::api::IModelsClient;
//! use imodels_client::auth::Authorization;
//!
//! # async fn run() -> imodels_client::api::common::Result<()> {
//! let client = IModelsClient::new()?;
//! let authorization = Authorization::bearer("token");
//!
//! let imodels: Vec<_> = client
//!     .imodels()
//!     .get_minimal_list(&authorization, &GetIModelListParams::new("project-id"))
//!     .try_collect()
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::Arc;

use super::common::{parse_error, Result};
use super::operations::{
    BriefcaseOperations, ChangesetOperations, CheckpointOperations, IModelOperations,
    NamedVersionOperations, OperationsBase,
};
use super::transport::{ReqwestTransport, Transport};
use crate::config::Config;

/// Default iModels API location.
pub const DEFAULT_BASE_URL: &str = "https://api.bentley.com/imodels";

/// Default API version, sent as `Accept: application/vnd.bentley.{version}+json`.
pub const DEFAULT_API_VERSION: &str = "itwin-platform.v1";

/// Settings shared by every operation of a client.
///
/// Immutable once the client is built.
#[derive(Clone)]
pub struct IModelsClientOptions {
    pub base_url: String,
    pub api_version: String,
    pub transport: Arc<dyn Transport>,
}

impl IModelsClientOptions {
    /// Options for the public API that send requests through `transport`.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            transport,
        }
    }

    /// Options pointing at the API described by `config`.
    pub fn from_config(config: &Config, transport: Arc<dyn Transport>) -> Self {
        Self::new(transport)
            .base_url(config.api.base_url.clone())
            .api_version(config.api.version.clone())
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Replaces the transport, e.g. with a test double.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }
}

impl fmt::Debug for IModelsClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IModelsClientOptions")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

/// Client for the iModels REST API.
///
/// Cheap to clone. All operation sets share the same options.
#[derive(Clone)]
pub struct IModelsClient {
    base: OperationsBase,
}

impl IModelsClient {
    /// Creates a client for the public API using the `reqwest` transport.
    pub fn new() -> Result<Self> {
        let transport = ReqwestTransport::new(parse_error)?;
        Ok(Self::with_options(IModelsClientOptions::new(Arc::new(transport))))
    }

    pub fn with_options(options: IModelsClientOptions) -> Self {
        tracing::debug!(base_url = %options.base_url, api_version = %options.api_version, "Creating iModels client");
        Self {
            base: OperationsBase::new(Arc::new(options)),
        }
    }

    pub fn imodels(&self) -> IModelOperations {
        IModelOperations::new(self.base.clone())
    }

    pub fn briefcases(&self) -> BriefcaseOperations {
        BriefcaseOperations::new(self.base.clone())
    }

    pub fn changesets(&self) -> ChangesetOperations {
        ChangesetOperations::new(self.base.clone())
    }

    pub fn named_versions(&self) -> NamedVersionOperations {
        NamedVersionOperations::new(self.base.clone())
    }

    pub fn checkpoints(&self) -> CheckpointOperations {
        CheckpointOperations::new(self.base.clone())
    }
}
