//
//  imodels-client
//  api/operations/briefcases.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Briefcase operations (`/imodels/{id}/briefcases`).

use super::{CollectionPageParams, OperationsBase};
use crate::api::common::{
    entity_collection_accessor, CollectionRequestParams, EntityStream, PreferReturn, Result,
};
use crate::api::entities::{Briefcase, BriefcaseProperties, BriefcaseResponse, MinimalBriefcase};
use crate::auth::Authorization;

/// Parameters for listing the briefcases of an iModel.
#[derive(Debug, Clone, Default)]
pub struct GetBriefcaseListParams {
    pub imodel_id: String,
    /// Only return briefcases acquired by the calling user (`ownerId=me`).
    pub owned_by_me: bool,
    pub url_params: CollectionRequestParams,
}

impl GetBriefcaseListParams {
    pub fn new(imodel_id: impl Into<String>) -> Self {
        Self {
            imodel_id: imodel_id.into(),
            ..Self::default()
        }
    }

    fn query(&self) -> CollectionRequestParams {
        let params = self.url_params.clone();
        if self.owned_by_me {
            params.filter("ownerId", "me")
        } else {
            params
        }
    }
}

/// Operations on briefcases.
#[derive(Clone)]
pub struct BriefcaseOperations {
    base: OperationsBase,
}

impl BriefcaseOperations {
    pub(crate) fn new(base: OperationsBase) -> Self {
        Self { base }
    }

    fn collection_url(&self, imodel_id: &str) -> String {
        format!("{}/{}/briefcases", self.base.base_url(), imodel_id)
    }

    fn single_url(&self, imodel_id: &str, briefcase_id: u32) -> String {
        format!("{}/{}", self.collection_url(imodel_id), briefcase_id)
    }

    fn list_url(&self, params: &GetBriefcaseListParams) -> String {
        format!(
            "{}{}",
            self.collection_url(&params.imodel_id),
            self.base.form_query_string(&params.query())
        )
    }

    pub fn get_minimal_list(
        &self,
        authorization: &Authorization,
        params: &GetBriefcaseListParams,
    ) -> EntityStream<MinimalBriefcase> {
        self.base.get_collection(CollectionPageParams::new(
            authorization,
            self.list_url(params),
            PreferReturn::Minimal,
            entity_collection_accessor("briefcases"),
        ))
    }

    pub fn get_representation_list(
        &self,
        authorization: &Authorization,
        params: &GetBriefcaseListParams,
    ) -> EntityStream<Briefcase> {
        self.base.get_collection(CollectionPageParams::new(
            authorization,
            self.list_url(params),
            PreferReturn::Representation,
            entity_collection_accessor("briefcases"),
        ))
    }

    /// Gets a briefcase by its numeric id.
    pub async fn get_single(
        &self,
        authorization: &Authorization,
        imodel_id: &str,
        briefcase_id: u32,
    ) -> Result<Briefcase> {
        let url = self.single_url(imodel_id, briefcase_id);
        let response: BriefcaseResponse = self.base.send_get_request(authorization, &url, None).await?;
        Ok(response.briefcase)
    }

    /// Acquires a new briefcase for the calling user.
    ///
    /// The server assigns the briefcase id. No file is transferred.
    pub async fn acquire(
        &self,
        authorization: &Authorization,
        imodel_id: &str,
        properties: &BriefcaseProperties,
    ) -> Result<Briefcase> {
        tracing::debug!(imodel_id, device_name = ?properties.device_name, "Acquiring briefcase");
        let response: BriefcaseResponse = self
            .base
            .send_post_request(authorization, &self.collection_url(imodel_id), properties)
            .await?;
        Ok(response.briefcase)
    }

    /// Releases a briefcase so its id can no longer push changesets.
    pub async fn release(
        &self,
        authorization: &Authorization,
        imodel_id: &str,
        briefcase_id: u32,
    ) -> Result<()> {
        tracing::debug!(imodel_id, briefcase_id, "Releasing briefcase");
        self.base
            .send_delete_request(authorization, &self.single_url(imodel_id, briefcase_id))
            .await
    }
}
