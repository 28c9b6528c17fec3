//
//  imodels-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authorization
//!
//! Every API call takes an [`Authorization`] supplied by the caller. The
//! client never inspects, refreshes or stores it; the scheme and token are
//! forwarded verbatim as the `Authorization` request header.
//!
//! Acquiring tokens (OAuth flows, service principals, ...) is left to the
//! application.
//!
//! ## Example
//!
//! ```rust
//! use imodels_client::auth::Authorization;
//!
//! let authorization = Authorization::bearer("eyJhbGciOi...");
//! assert_eq!(authorization.header_value(), "Bearer eyJhbGciOi...");
//! ```

use std::fmt;

/// The default authorization scheme.
pub const DEFAULT_SCHEME: &str = "Bearer";

/// Credential attached to every request as the `Authorization` header.
///
/// # Fields
///
/// * `scheme` - Authorization scheme, usually `Bearer`
/// * `token` - The access token
///
/// # Notes
///
/// - `Debug` output redacts the token.
/// - The value is read-only from the client's point of view and can be
///   shared freely between concurrent calls.
#[derive(Clone, PartialEq, Eq)]
pub struct Authorization {
    /// Authorization scheme, e.g. `Bearer`.
    pub scheme: String,
    /// The access token.
    pub token: String,
}

impl Authorization {
    /// Creates a credential with an explicit scheme.
    pub fn new(scheme: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            token: token.into(),
        }
    }

    /// Creates a `Bearer` credential.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::new(DEFAULT_SCHEME, token)
    }

    /// Returns the `Authorization` header value, `"{scheme} {token}"`.
    pub fn header_value(&self) -> String {
        format!("{} {}", self.scheme, self.token)
    }
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authorization")
            .field("scheme", &self.scheme)
            .field("token", &"<redacted>")
            .finish()
    }
}
