//
//  imodels-client
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Paged Collections
//!
//! iModels collection endpoints return one page of entities per response
//! together with an optional `_links.next.href` pointing at the following
//! page. This module turns that protocol into a lazy [`EntityStream`].
//!
//! # Overview
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`EntityPage`] | One page of entities plus the query for the next page |
//! | [`PageQuery`] | A deferred, single-use request for a page |
//! | [`EntityStream`] | Forward-only stream of entities across all pages |
//!
//! Pages are requested only when the consumer pulls past the end of the
//! current page. Dropping the stream early is always safe: nothing is held
//! open between page requests.
//!
//! # Example
//!
//! ```rust
//! use futures::{FutureExt, TryStreamExt};
//! use imodels_client::api::common::{paged_collection, EntityPage, IModelsError, PageQuery};
//!
//! # tokio_test::block_on(async {
//! let second: PageQuery<u32> =
//!     Box::new(|| async { Ok::<_, IModelsError>(EntityPage::last(vec![3])) }.boxed());
//! let first: PageQuery<u32> = Box::new(move || {
//!     async move { Ok::<_, IModelsError>(EntityPage { entities: vec![1, 2], next: Some(second) }) }.boxed()
//! });
//!
//! let all: Vec<u32> = paged_collection(first).try_collect().await.unwrap();
//! assert_eq!(all, vec![1, 2, 3]);
//! # });
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::stream::{self, BoxStream, StreamExt};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::error::{IModelsError, Result};

/// A deferred request for one page.
///
/// Each query is invoked at most once; `FnOnce` enforces that.
pub type PageQuery<T> = Box<dyn FnOnce() -> BoxFuture<'static, Result<EntityPage<T>>> + Send>;

/// Lazy stream of entities spanning every page of a collection.
///
/// The stream ends (`None`) once the last page has been consumed. A failed
/// page request is yielded as a single `Err` item and ends the stream.
pub type EntityStream<T> = BoxStream<'static, Result<T>>;

/// Extracts the ordered entity list from a decoded response body.
///
/// The envelope key differs per resource, so the caller supplies it.
pub type EntityCollectionAccessor<T> = Arc<dyn Fn(&Value) -> Result<Vec<T>> + Send + Sync>;

/// Reads the URL of the next page from a decoded response body.
pub type NextLinkAccessor = fn(&Value) -> Option<String>;

/// One page of a collection.
///
/// `entities` keeps the order the server returned. `next` is set exactly
/// when the server reported more data.
pub struct EntityPage<T> {
    pub entities: Vec<T>,
    pub next: Option<PageQuery<T>>,
}

impl<T> EntityPage<T> {
    /// Creates a page with no continuation.
    pub fn last(entities: Vec<T>) -> Self {
        Self { entities, next: None }
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

impl<T: fmt::Debug> fmt::Debug for EntityPage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityPage")
            .field("entities", &self.entities)
            .field("has_next", &self.has_next())
            .finish()
    }
}

/// Builds an accessor that deserializes the array stored under `key`.
///
/// A missing key or a `null` value yields an empty list.
///
/// # Example
///
/// ```rust
/// use imodels_client::api::common::entity_collection_accessor;
///
/// let accessor = entity_collection_accessor::<String>("namedVersions");
/// let body = serde_json::json!({ "namedVersions": ["a", "b"] });
/// assert_eq!(accessor(&body).unwrap(), vec!["a".to_string(), "b".to_string()]);
/// ```
pub fn entity_collection_accessor<T>(key: &'static str) -> EntityCollectionAccessor<T>
where
    T: DeserializeOwned + Send + 'static,
{
    Arc::new(move |body: &Value| match body.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(entities) => Vec::<T>::deserialize(entities)
            .map_err(|e| IModelsError::decode(&format!("'{}' collection", key), e)),
    })
}

/// Reads `_links.next.href`, the iModels continuation convention.
pub fn next_page_link(body: &Value) -> Option<String> {
    body.get("_links")?
        .get("next")?
        .get("href")?
        .as_str()
        .map(str::to_string)
}

struct Cursor<T> {
    pending: Option<PageQuery<T>>,
    buffered: VecDeque<T>,
}

/// Turns the first page query into a stream over the whole collection.
///
/// Every call owns its own cursor. On each pull the next buffered entity is
/// returned; once the buffer is empty the pending query (if any) is awaited,
/// replaced by that page's continuation, and its entities are buffered.
/// With no pending query left the stream is exhausted.
///
/// Errors are passed through untouched and terminate the stream. A finished
/// stream keeps returning `None` when polled again.
pub fn paged_collection<T>(first: PageQuery<T>) -> EntityStream<T>
where
    T: Send + 'static,
{
    let cursor = Cursor {
        pending: Some(first),
        buffered: VecDeque::new(),
    };

    stream::unfold(cursor, |mut cursor| async move {
        loop {
            if let Some(entity) = cursor.buffered.pop_front() {
                return Some((Ok(entity), cursor));
            }

            let query = cursor.pending.take()?;
            match query().await {
                Ok(page) => {
                    tracing::trace!(
                        entities = page.entities.len(),
                        has_next = page.has_next(),
                        "Received collection page"
                    );
                    cursor.pending = page.next;
                    cursor.buffered.extend(page.entities);
                }
                Err(err) => return Some((Err(err), cursor)),
            }
        }
    })
    .fuse()
    .boxed()
}
