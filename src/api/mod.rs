//
//  imodels-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Typed access to the iModels REST API.
//!
//! ## Architecture
//!
//! - [`transport`]: sends one HTTP request, returns JSON or a normalized error
//! - [`common`]: errors, query parameters and lazy pagination
//! - [`operations`]: one operation set per resource, built on a shared base
//! - [`entities`]: request and response types
//! - [`client`]: [`IModelsClient`], the entry point
//!
//! ## Error Handling
//!
//! Every failure is an [`IModelsError`] whose [`IModelsErrorCode`] comes from
//! the server's error envelope when present, or from the HTTP status:
//!
//! - `Unauthorized`: 401
//! - `InsufficientPermissions`: 403
//! - `NotFound`: 404
//! - `Conflict`: 409
//! - `TooManyRequests`: 429

/// [`IModelsClient`] and its options.
pub mod client;

/// Shared types: errors, query parameters, pagination.
pub mod common;

/// Entity types for iModels, briefcases, changesets, named versions and
/// checkpoints.
pub mod entities;

/// Operation sets per resource.
pub mod operations;

/// HTTP transport abstraction.
pub mod transport;

pub use client::{IModelsClient, IModelsClientOptions, DEFAULT_API_VERSION, DEFAULT_BASE_URL};
pub use common::{IModelsError, IModelsErrorCode};
