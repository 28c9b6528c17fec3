//
//  imodels-client
//  api/common/params.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Collection Query Parameters
//!
//! Collection endpoints accept a page size (`$top`), an offset (`$skip`), an
//! ordering (`$orderBy`) and resource-specific filters. [`CollectionRequestParams`]
//! holds all of them and [`form_query_string`] turns them into the query
//! string appended to a collection URL.
//!
//! # Example
//!
//! ```rust
//! use imodels_client::api::common::{form_query_string, CollectionRequestParams, OrderBy};
//!
//! let params = CollectionRequestParams::new()
//!     .top(5)
//!     .order_by(OrderBy::descending("index"));
//!
//! assert_eq!(form_query_string(&params), "?$top=5&$orderBy=index+desc");
//! ```

use std::collections::BTreeMap;
use std::fmt;

/// Sort direction of a collection query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderByDirection {
    Ascending,
    Descending,
}

impl OrderByDirection {
    /// Returns the keyword the API expects after the property name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Ordering applied to a collection query.
///
/// When `direction` is `None` only the property is sent and the server
/// applies its default (ascending) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub property: String,
    pub direction: Option<OrderByDirection>,
}

impl OrderBy {
    /// Orders by `property` using the server's default direction.
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: None,
        }
    }

    pub fn ascending(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Some(OrderByDirection::Ascending),
        }
    }

    pub fn descending(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Some(OrderByDirection::Descending),
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Some(direction) => write!(f, "{} {}", self.property, direction.as_str()),
            None => f.write_str(&self.property),
        }
    }
}

/// Parameters shared by every collection request.
///
/// Built per call, serialized once by [`form_query_string`] and then
/// dropped. Unset fields are left out of the query string.
///
/// # Fields
///
/// | Field | Query key | Description |
/// |-------|-----------|-------------|
/// | `top` | `$top` | Page size hint |
/// | `skip` | `$skip` | Number of entities to skip |
/// | `order_by` | `$orderBy` | Property and direction |
/// | `filters` | as given | Resource-specific filters |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionRequestParams {
    pub top: Option<u32>,
    pub skip: Option<u32>,
    pub order_by: Option<OrderBy>,
    pub filters: BTreeMap<String, String>,
}

impl CollectionRequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top(mut self, top: u32) -> Self {
        self.top = Some(top);
        self
    }

    pub fn skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    /// Adds a filter. A later call with the same key replaces the value.
    pub fn filter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.filters.insert(key.into(), value.to_string());
        self
    }

    /// Adds a filter only when `value` is set.
    pub fn filter_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.filter(key, value),
            None => self,
        }
    }
}

/// Serializes collection parameters into a query string.
///
/// Returns an empty string when nothing is set, otherwise a string starting
/// with `?`. Parameters always appear in the same order (`$top`, `$skip`,
/// `$orderBy`, then filters sorted by key) so equal inputs produce identical
/// output. Filter keys and all values are form-urlencoded.
///
/// # Example
///
/// ```rust
/// use imodels_client::api::common::{form_query_string, CollectionRequestParams};
///
/// let params = CollectionRequestParams::new().filter("projectId", "abc").top(10);
/// assert_eq!(form_query_string(&params), "?$top=10&projectId=abc");
/// assert_eq!(form_query_string(&CollectionRequestParams::new()), "");
/// ```
pub fn form_query_string(params: &CollectionRequestParams) -> String {
    let mut pairs: Vec<(String, String)> = Vec::new();

    if let Some(top) = params.top {
        pairs.push(("$top".to_string(), top.to_string()));
    }
    if let Some(skip) = params.skip {
        pairs.push(("$skip".to_string(), skip.to_string()));
    }
    if let Some(order_by) = &params.order_by {
        pairs.push(("$orderBy".to_string(), order_by.to_string()));
    }
    for (key, value) in &params.filters {
        pairs.push((encode(key), value.clone()));
    }

    if pairs.is_empty() {
        return String::new();
    }

    let query = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    format!("?{}", query)
}

fn encode(text: &str) -> String {
    url::form_urlencoded::byte_serialize(text.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params_produce_empty_string() {
        assert_eq!(form_query_string(&CollectionRequestParams::default()), "");
    }

    #[test]
    fn test_top_and_order_by() {
        let params = CollectionRequestParams::new()
            .top(5)
            .order_by(OrderBy::descending("index"));
        assert_eq!(form_query_string(&params), "?$top=5&$orderBy=index+desc");
    }

    #[test]
    fn test_order_independent_of_construction() {
        let first = CollectionRequestParams::new()
            .filter("lastIndex", 10)
            .order_by(OrderBy::descending("index"))
            .filter("afterIndex", 5)
            .top(5);
        let second = CollectionRequestParams::new()
            .top(5)
            .filter("afterIndex", 5)
            .filter("lastIndex", 10)
            .order_by(OrderBy::descending("index"));

        let query = form_query_string(&first);
        assert_eq!(query, form_query_string(&second));
        assert_eq!(query, form_query_string(&first));
        assert_eq!(query, "?$top=5&$orderBy=index+desc&afterIndex=5&lastIndex=10");
    }

    #[test]
    fn test_order_by_without_direction() {
        let params = CollectionRequestParams::new().order_by(OrderBy::new("index"));
        assert_eq!(form_query_string(&params), "?$orderBy=index");
    }

    #[test]
    fn test_skip_and_encoded_filter() {
        let params = CollectionRequestParams::new()
            .skip(20)
            .filter("name", "Bridge & Tunnel");
        assert_eq!(form_query_string(&params), "?$skip=20&name=Bridge+%26+Tunnel");
    }

    #[test]
    fn test_filter_keys_are_encoded() {
        let params = CollectionRequestParams::new().top(1).filter("a&b=c", "d");
        assert_eq!(form_query_string(&params), "?$top=1&a%26b%3Dc=d");
    }

    #[test]
    fn test_filter_opt_skips_unset_values() {
        let params = CollectionRequestParams::new()
            .filter_opt("afterIndex", Some(3))
            .filter_opt::<u32>("lastIndex", None);
        assert_eq!(form_query_string(&params), "?afterIndex=3");
    }
}
