//
//  imodels-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod briefcase;
mod changeset;
mod checkpoint;
mod config;
mod imodel;
mod named_version;

pub use briefcase::BriefcaseCommand;
pub use changeset::ChangesetCommand;
pub use checkpoint::CheckpointCommand;
pub use config::ConfigCommand;
pub use imodel::IModelCommand;
pub use named_version::NamedVersionCommand;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use futures::{StreamExt, TryStreamExt};
use thiserror::Error;

use crate::api::common::{parse_error, CollectionRequestParams, EntityStream, IModelsErrorCode};
use crate::api::transport::ReqwestTransport;
use crate::api::{IModelsClient, IModelsClientOptions, IModelsError};
use crate::auth::Authorization;
use crate::config::Config;
use crate::exit_codes;
use crate::output::{OutputFormat, OutputWriter};

#[derive(Parser, Debug)]
#[command(
    name = "imodels",
    version,
    about = "Work with the iModels API from the command line",
    long_about = "imodels lists and manages iModels, changesets, named versions,\n\
                  briefcases and checkpoints through the iModels REST API.",
    propagate_version = true,
    after_help = "Use 'imodels <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Access token sent with every request
    #[arg(long, global = true, env = "IMODELS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true, env = "IMODELS_BASE_URL")]
    pub base_url: Option<String>,

    /// Override the API version
    #[arg(long, global = true, env = "IMODELS_API_VERSION")]
    pub api_version: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage iModels
    #[command(name = "imodel", visible_alias = "im")]
    IModel(IModelCommand),

    /// Inspect changesets
    #[command(visible_alias = "cs")]
    Changeset(ChangesetCommand),

    /// Manage named versions
    #[command(name = "named-version", visible_alias = "nv")]
    NamedVersion(NamedVersionCommand),

    /// Inspect briefcases
    Briefcase(BriefcaseCommand),

    /// Inspect checkpoints
    Checkpoint(CheckpointCommand),

    /// Manage configuration
    Config(ConfigCommand),

    /// Show version information
    Version,
}

/// Invalid combination of arguments that clap cannot detect on its own.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct UsageError(pub String);

/// Options shared by every `list` command.
#[derive(Args, Debug, Clone, Default)]
pub struct ListOptions {
    /// Page size requested from the server
    #[arg(long)]
    pub top: Option<u32>,

    /// Stop after this many entities
    #[arg(long, short = 'L')]
    pub limit: Option<usize>,

    /// Fetch full entities instead of minimal ones
    #[arg(long)]
    pub full: bool,
}

impl ListOptions {
    pub fn url_params(&self) -> CollectionRequestParams {
        let params = CollectionRequestParams::new();
        match self.top {
            Some(top) => params.top(top),
            None => params,
        }
    }
}

/// An authenticated client plus output settings for one command.
pub struct Session {
    pub client: IModelsClient,
    pub authorization: Authorization,
    pub writer: OutputWriter,
}

impl GlobalOptions {
    pub fn format(&self) -> OutputFormat {
        OutputFormat::from_json_flag(self.json)
    }

    /// Applies command-line and environment overrides to `config`.
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(api_version) = &self.api_version {
            config.api.version = api_version.clone();
        }
        config
    }

    pub fn authorization(&self, config: &Config) -> Result<Authorization> {
        let token = self
            .token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| {
                IModelsError::new(
                    IModelsErrorCode::Unauthorized,
                    "No access token. Pass --token or set IMODELS_TOKEN.",
                )
            })?;
        Ok(Authorization::new(config.auth.scheme.clone(), token))
    }

    pub fn session(&self) -> Result<Session> {
        let config = self.apply_overrides(Config::load()?);
        let authorization = self.authorization(&config)?;
        let transport = ReqwestTransport::new(parse_error).context("Failed to create HTTP client")?;
        let options = IModelsClientOptions::from_config(&config, Arc::new(transport));

        Ok(Session {
            client: IModelsClient::with_options(options),
            authorization,
            writer: OutputWriter::new(self.format()),
        })
    }
}

/// Drains `stream`, stopping early once `limit` entities were read.
///
/// Stopping early leaves the remaining pages unrequested.
pub async fn collect_limited<T>(stream: EntityStream<T>, limit: Option<usize>) -> Result<Vec<T>> {
    let entities: Vec<T> = match limit {
        Some(limit) => stream.take(limit).try_collect().await?,
        None => stream.try_collect().await?,
    };
    Ok(entities)
}

/// Maps a command failure to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<UsageError>().is_some() {
        return exit_codes::USAGE;
    }

    let Some(err) = err.downcast_ref::<IModelsError>() else {
        return exit_codes::ERROR;
    };

    use IModelsErrorCode::*;
    match err.code {
        Unauthorized | InsufficientPermissions => exit_codes::AUTH_ERROR,
        NotFound | iModelNotFound | BriefcaseNotFound | ChangesetNotFound
        | NamedVersionNotFound | CheckpointNotFound => exit_codes::NOT_FOUND,
        Conflict | iModelExists | NamedVersionExists | ChangesetExists
        | ConflictWithAnotherUser => exit_codes::CONFLICT,
        _ => exit_codes::ERROR,
    }
}
