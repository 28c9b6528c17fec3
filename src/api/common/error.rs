//
//  imodels-client
//  api/common/error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Normalized API Errors
//!
//! Every failure surfaced by this crate is an [`IModelsError`]. Failed HTTP
//! responses are turned into one by [`parse_error`], which understands the
//! iModels error envelope:
//!
//! ```json
//! {
//!   "error": {
//!     "code": "InvalidiModelsRequest",
//!     "message": "Cannot create iModel.",
//!     "details": [
//!       { "code": "InvalidValue", "message": "...", "target": "description" }
//!     ]
//!   }
//! }
//! ```
//!
//! Bodies that do not match the envelope are classified from the HTTP
//! status code alone.
//!
//! # Example
//!
//! ```rust
//! use imodels_client::api::common::{parse_error, IModelsErrorCode};
//!
//! let err = parse_error(404, "<html>Not Found</html>");
//! assert_eq!(err.code, IModelsErrorCode::NotFound);
//! assert!(err.details.is_none());
//! ```

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Convenience alias used throughout the API layer.
pub type Result<T> = std::result::Result<T, IModelsError>;

/// Signature of a function that turns a failed response into an [`IModelsError`].
///
/// The transport calls it with the raw status code and the raw body text.
pub type ErrorParser = fn(u16, &str) -> IModelsError;

/// Machine-checkable error codes.
///
/// The set is fixed. Codes the server sends that are not listed here are
/// reported as [`IModelsErrorCode::Unrecognized`]; the string the server sent
/// is still available as [`IModelsError::raw_code`].
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IModelsErrorCode {
    /// The server sent a code this client does not know.
    Unrecognized,
    /// No code could be determined.
    Unknown,
    Unauthorized,
    InsufficientPermissions,
    NotFound,
    InvalidRequest,
    Conflict,
    InvalidiModelsRequest,
    iModelExists,
    iModelNotFound,
    BriefcaseNotFound,
    ChangesetNotFound,
    NamedVersionNotFound,
    CheckpointNotFound,
    NamedVersionExists,
    ChangesetExists,
    ConflictWithAnotherUser,
    RequestTooLarge,
    TooManyRequests,
    ResourceQuotaExceeded,
    InvalidValue,
    InvalidHeaderValue,
    InvalidRequestBody,
    MissingRequestBody,
    MissingRequiredProperty,
    MissingRequiredParameter,
    MissingRequiredHeader,
}

impl IModelsErrorCode {
    const ALL: [IModelsErrorCode; 27] = [
        Self::Unrecognized,
        Self::Unknown,
        Self::Unauthorized,
        Self::InsufficientPermissions,
        Self::NotFound,
        Self::InvalidRequest,
        Self::Conflict,
        Self::InvalidiModelsRequest,
        Self::iModelExists,
        Self::iModelNotFound,
        Self::BriefcaseNotFound,
        Self::ChangesetNotFound,
        Self::NamedVersionNotFound,
        Self::CheckpointNotFound,
        Self::NamedVersionExists,
        Self::ChangesetExists,
        Self::ConflictWithAnotherUser,
        Self::RequestTooLarge,
        Self::TooManyRequests,
        Self::ResourceQuotaExceeded,
        Self::InvalidValue,
        Self::InvalidHeaderValue,
        Self::InvalidRequestBody,
        Self::MissingRequestBody,
        Self::MissingRequiredProperty,
        Self::MissingRequiredParameter,
        Self::MissingRequiredHeader,
    ];

    /// Returns the code exactly as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unrecognized => "Unrecognized",
            Self::Unknown => "Unknown",
            Self::Unauthorized => "Unauthorized",
            Self::InsufficientPermissions => "InsufficientPermissions",
            Self::NotFound => "NotFound",
            Self::InvalidRequest => "InvalidRequest",
            Self::Conflict => "Conflict",
            Self::InvalidiModelsRequest => "InvalidiModelsRequest",
            Self::iModelExists => "iModelExists",
            Self::iModelNotFound => "iModelNotFound",
            Self::BriefcaseNotFound => "BriefcaseNotFound",
            Self::ChangesetNotFound => "ChangesetNotFound",
            Self::NamedVersionNotFound => "NamedVersionNotFound",
            Self::CheckpointNotFound => "CheckpointNotFound",
            Self::NamedVersionExists => "NamedVersionExists",
            Self::ChangesetExists => "ChangesetExists",
            Self::ConflictWithAnotherUser => "ConflictWithAnotherUser",
            Self::RequestTooLarge => "RequestTooLarge",
            Self::TooManyRequests => "TooManyRequests",
            Self::ResourceQuotaExceeded => "ResourceQuotaExceeded",
            Self::InvalidValue => "InvalidValue",
            Self::InvalidHeaderValue => "InvalidHeaderValue",
            Self::InvalidRequestBody => "InvalidRequestBody",
            Self::MissingRequestBody => "MissingRequestBody",
            Self::MissingRequiredProperty => "MissingRequiredProperty",
            Self::MissingRequiredParameter => "MissingRequiredParameter",
            Self::MissingRequiredHeader => "MissingRequiredHeader",
        }
    }

    /// Maps a wire code to a variant.
    ///
    /// Unknown codes map to [`IModelsErrorCode::Unrecognized`].
    pub fn from_code(code: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.as_str() == code)
            .unwrap_or(Self::Unrecognized)
    }

    /// Classifies a response from its HTTP status code alone.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::InsufficientPermissions,
            404 => Self::NotFound,
            400 | 422 => Self::InvalidRequest,
            409 => Self::Conflict,
            429 => Self::TooManyRequests,
            _ => Self::Unknown,
        }
    }

    fn default_message(&self) -> Option<&'static str> {
        match self {
            Self::Unauthorized => {
                Some("The user is unauthorized. Please provide valid authentication credentials.")
            }
            Self::InsufficientPermissions => {
                Some("The user has insufficient permissions for the requested operation.")
            }
            Self::NotFound => Some("Requested resource was not found."),
            Self::InvalidRequest => Some("The request is invalid."),
            Self::Conflict => Some("The request conflicts with the current state of the resource."),
            Self::TooManyRequests => Some("Too many requests. Please try again later."),
            _ => None,
        }
    }
}

impl fmt::Display for IModelsErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field-level entry of a validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IModelsErrorDetail {
    /// Machine-checkable detail code, e.g. `InvalidValue`.
    pub code: IModelsErrorCode,
    /// The detail code exactly as the server sent it.
    pub raw_code: String,
    /// Human-readable description of the problem.
    pub message: String,
    /// The request property the detail refers to, if any.
    pub target: Option<String>,
}

/// The normalized representation of any failure raised by the API layer.
///
/// `IModelsError` carries a stable [`code`](Self::code) that callers can
/// match on, the server's `message`, and the optional list of field-level
/// [`details`](Self::details). `details` is `None` when the server did not
/// send any, which is distinct from an empty list.
///
/// # Example
///
/// ```rust
/// use imodels_client::api::common::{IModelsError, IModelsErrorCode};
///
/// fn describe(err: &IModelsError) -> &'static str {
///     match err.code {
///         IModelsErrorCode::Unauthorized => "log in again",
///         IModelsErrorCode::NotFound | IModelsErrorCode::iModelNotFound => "check the id",
///         _ => "see message",
///     }
/// }
/// ```
#[derive(Debug, Error)]
#[error("{raw_code}: {message}")]
pub struct IModelsError {
    /// Machine-checkable error code.
    pub code: IModelsErrorCode,
    /// The code exactly as the server sent it. Matches `code.as_str()`
    /// unless `code` is `Unrecognized`.
    pub raw_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Field-level details, present only when the server sent them.
    pub details: Option<Vec<IModelsErrorDetail>>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl IModelsError {
    /// Creates an error without details.
    pub fn new(code: IModelsErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            raw_code: code.as_str().to_string(),
            message: message.into(),
            details: None,
            source: None,
        }
    }

    /// Attaches field-level details.
    pub fn with_details(mut self, details: Vec<IModelsErrorDetail>) -> Self {
        self.details = Some(details);
        self
    }

    /// Attaches the underlying cause.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// The error's name. Always equal to the string form of [`code`](Self::code).
    pub fn name(&self) -> &'static str {
        self.code.as_str()
    }

    /// Builds an error for a response body that could not be decoded.
    pub(crate) fn decode(context: &str, source: serde_json::Error) -> Self {
        Self::new(
            IModelsErrorCode::Unknown,
            format!("Failed to decode {}: {}", context, source),
        )
        .with_source(source)
    }
}

impl From<reqwest::Error> for IModelsError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("Request timed out: {}", err)
        } else {
            format!("Network error: {}", err)
        };
        Self::new(IModelsErrorCode::Unknown, message).with_source(err)
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(default)]
    details: Option<Vec<ErrorDetailBody>>,
}

#[derive(Deserialize)]
struct ErrorDetailBody {
    code: String,
    message: String,
    #[serde(default)]
    target: Option<String>,
}

/// Converts a failed response into an [`IModelsError`].
///
/// When `body` holds the `{ "error": { "code", "message", "details"? } }`
/// envelope, the code and message are taken from it and every detail entry
/// is copied in order. Any other body is ignored and the code is derived
/// from `status`:
///
/// | Status | Code |
/// |--------|------|
/// | 401 | `Unauthorized` |
/// | 403 | `InsufficientPermissions` |
/// | 404 | `NotFound` |
/// | 400, 422 | `InvalidRequest` |
/// | 409 | `Conflict` |
/// | 429 | `TooManyRequests` |
/// | other | `Unknown` |
///
/// # Example
///
/// ```rust
/// use imodels_client::api::common::{parse_error, IModelsErrorCode};
///
/// let body = r#"{"error":{"code":"iModelNotFound","message":"Requested iModel is not available."}}"#;
/// let err = parse_error(404, body);
/// assert_eq!(err.code, IModelsErrorCode::iModelNotFound);
/// assert_eq!(err.name(), "iModelNotFound");
/// ```
pub fn parse_error(status: u16, body: &str) -> IModelsError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let error = envelope.error;
            let mut parsed = IModelsError::new(IModelsErrorCode::from_code(&error.code), error.message);
            parsed.raw_code = error.code;
            if let Some(details) = error.details {
                parsed = parsed.with_details(
                    details
                        .into_iter()
                        .map(|detail| IModelsErrorDetail {
                            code: IModelsErrorCode::from_code(&detail.code),
                            raw_code: detail.code,
                            message: detail.message,
                            target: detail.target,
                        })
                        .collect(),
                );
            }
            parsed
        }
        Err(_) => {
            let code = IModelsErrorCode::from_status(status);
            let message = code
                .default_message()
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status));
            IModelsError::new(code, message)
        }
    }
}
