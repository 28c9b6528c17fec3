//
//  imodels-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # iModels Client Library
//!
//! A typed client for the iModels REST API plus the `imodels` command-line
//! tool built on top of it.
//!
//! ## Overview
//!
//! The client exposes one operation set per entity kind. Every request
//! carries the versioned `Accept` header and the caller's authorization,
//! every failure is normalized into an [`IModelsError`], and collections
//! are returned as lazy streams that fetch the next page only when the
//! consumer reaches it.
//!
//! ## Module Structure
//!
//! - [`api`]: Client, operation sets, entities, transport and pagination
//! - [`auth`]: Authorization header values
//! - [`cli`]: Command-line interface definitions using clap
//! - [`config`]: Configuration file management
//! - [`output`]: Output formatting (Table, JSON)
//! - [`util`]: Utility functions
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use futures::TryStreamExt;
//! use imodels_client::api::operations::GetChangesetListParams;
//! use imodels_client::auth::Authorization;
//! use imodels_client::IModelsClient;
//!
//! # async fn run() -> Result<(), imodels_client::api::IModelsError> {
//! let client = IModelsClient::new()?;
//! let auth = Authorization::bearer("token");
//! let params = GetChangesetListParams::new("imodel-id");
//!
//! let changesets: Vec<_> = client
//!     .changesets()
//!     .get_minimal_list(&auth, &params)
//!     .try_collect()
//!     .await?;
//! println!("{} changesets", changesets.len());
//! # Ok(())
//! # }
//! ```

/// iModels API client.
///
/// Holds the transport abstraction, the error normalizer, the page
/// traversal machinery and the per-entity operation sets.
pub mod api;

/// Authorization header values.
pub mod auth;

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the clap derive API.
/// Each command module handles parsing and execution of its respective functionality.
pub mod cli;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/imodels/config.toml`
/// - macOS: `~/Library/Application Support/imodels/config.toml`
/// - Windows: `%APPDATA%\imodels\config\config.toml`
pub mod config;

/// Output formatting for tables and JSON.
pub mod output;

/// Time, size and string formatting helpers.
pub mod util;

/// Re-export of the main CLI struct for convenient access.
///
/// # Example
///
/// ```rust,no_run
/// use clap::Parser;
/// use imodels_client::Cli;
///
/// let cli = Cli::parse();
/// // Handle cli.command...
/// ```
pub use cli::Cli;

/// Re-export of the configuration struct.
pub use config::Config;

/// Re-export of the API client.
pub use api::IModelsClient;

/// Application name constant.
///
/// The name of the CLI binary, used for display purposes and configuration paths.
///
/// # Value
///
/// `"imodels"`
pub const APP_NAME: &str = "imodels";

/// Application version constant.
///
/// Derived from Cargo.toml at compile time.
///
/// # Example
///
/// ```rust
/// use imodels_client::VERSION;
///
/// println!("imodels version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes following Unix conventions, allowing scripts
/// to programmatically detect the outcome of CLI operations.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `16-31`: Operation-related issues
///
/// # Example
///
/// ```rust,no_run
/// use imodels_client::exit_codes;
/// use std::process;
///
/// process::exit(exit_codes::AUTH_ERROR);
/// ```
pub mod exit_codes {
    /// Successful execution.
    ///
    /// # Value
    ///
    /// `0`
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// An unspecified error occurred during execution.
    /// Check stderr for details.
    ///
    /// # Value
    ///
    /// `1`
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    ///
    /// # Value
    ///
    /// `2`
    pub const USAGE: i32 = 2;

    /// Authentication required or failed.
    ///
    /// No token was given, the token was rejected, or it lacks the
    /// permissions the operation needs.
    ///
    /// # Value
    ///
    /// `4`
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found.
    ///
    /// # Value
    ///
    /// `8`
    pub const NOT_FOUND: i32 = 8;

    /// The entity already exists or was changed by someone else.
    ///
    /// # Value
    ///
    /// `16`
    pub const CONFLICT: i32 = 16;
}
