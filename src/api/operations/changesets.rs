//
//  imodels-client
//  api/operations/changesets.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Changeset operations (`/imodels/{id}/changesets`).
//!
//! Besides the usual list and get calls, a full [`Changeset`] carries links
//! to its named version and to the closest checkpoint; the `get_*` helpers
//! here follow those links.

use super::{CollectionPageParams, OperationsBase};
use crate::api::common::{
    entity_collection_accessor, CollectionRequestParams, EntityStream, PreferReturn, Result,
};
use crate::api::entities::{
    Changeset, ChangesetResponse, Checkpoint, CheckpointResponse, MinimalChangeset, NamedVersion,
    NamedVersionResponse,
};
use crate::auth::Authorization;

/// Parameters for listing the changesets of an iModel.
///
/// # Fields
///
/// * `after_index` - Only changesets with a greater index
/// * `last_index` - Only changesets up to and including this index
#[derive(Debug, Clone, Default)]
pub struct GetChangesetListParams {
    pub imodel_id: String,
    pub after_index: Option<u32>,
    pub last_index: Option<u32>,
    pub url_params: CollectionRequestParams,
}

impl GetChangesetListParams {
    pub fn new(imodel_id: impl Into<String>) -> Self {
        Self {
            imodel_id: imodel_id.into(),
            ..Self::default()
        }
    }

    fn query(&self) -> CollectionRequestParams {
        self.url_params
            .clone()
            .filter_opt("afterIndex", self.after_index)
            .filter_opt("lastIndex", self.last_index)
    }
}

/// Operations on changesets.
#[derive(Clone)]
pub struct ChangesetOperations {
    base: OperationsBase,
}

impl ChangesetOperations {
    pub(crate) fn new(base: OperationsBase) -> Self {
        Self { base }
    }

    fn collection_url(&self, imodel_id: &str) -> String {
        format!("{}/{}/changesets", self.base.base_url(), imodel_id)
    }

    fn list_url(&self, params: &GetChangesetListParams) -> String {
        format!(
            "{}{}",
            self.collection_url(&params.imodel_id),
            self.base.form_query_string(&params.query())
        )
    }

    pub fn get_minimal_list(
        &self,
        authorization: &Authorization,
        params: &GetChangesetListParams,
    ) -> EntityStream<MinimalChangeset> {
        self.base.get_collection(CollectionPageParams::new(
            authorization,
            self.list_url(params),
            PreferReturn::Minimal,
            entity_collection_accessor("changesets"),
        ))
    }

    pub fn get_representation_list(
        &self,
        authorization: &Authorization,
        params: &GetChangesetListParams,
    ) -> EntityStream<Changeset> {
        self.base.get_collection(CollectionPageParams::new(
            authorization,
            self.list_url(params),
            PreferReturn::Representation,
            entity_collection_accessor("changesets"),
        ))
    }

    pub async fn get_by_id(
        &self,
        authorization: &Authorization,
        imodel_id: &str,
        changeset_id: &str,
    ) -> Result<Changeset> {
        self.get_single(authorization, imodel_id, changeset_id).await
    }

    /// Gets a changeset by its 1-based index.
    pub async fn get_by_index(
        &self,
        authorization: &Authorization,
        imodel_id: &str,
        index: u32,
    ) -> Result<Changeset> {
        self.get_single(authorization, imodel_id, &index.to_string())
            .await
    }

    async fn get_single(
        &self,
        authorization: &Authorization,
        imodel_id: &str,
        id_or_index: &str,
    ) -> Result<Changeset> {
        let url = format!("{}/{}", self.collection_url(imodel_id), id_or_index);
        let response: ChangesetResponse = self.base.send_get_request(authorization, &url, None).await?;
        Ok(response.changeset)
    }

    /// Follows the changeset's named version link.
    ///
    /// Returns `None` without a request when no named version points at it.
    pub async fn get_named_version(
        &self,
        authorization: &Authorization,
        changeset: &Changeset,
    ) -> Result<Option<NamedVersion>> {
        let Some(link) = &changeset.links.named_version else {
            return Ok(None);
        };
        let response: NamedVersionResponse = self
            .base
            .send_get_request(authorization, &link.href, None)
            .await?;
        Ok(Some(response.named_version))
    }

    /// Follows the changeset's checkpoint link.
    ///
    /// The checkpoint may belong to an earlier changeset when none was
    /// generated for this one. Returns `None` when the link is absent.
    pub async fn get_current_or_preceding_checkpoint(
        &self,
        authorization: &Authorization,
        changeset: &Changeset,
    ) -> Result<Option<Checkpoint>> {
        let Some(link) = &changeset.links.current_or_preceding_checkpoint else {
            return Ok(None);
        };
        let response: CheckpointResponse = self
            .base
            .send_get_request(authorization, &link.href, None)
            .await?;
        Ok(Some(response.checkpoint))
    }
}
