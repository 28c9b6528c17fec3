//
//  imodels-client
//  cli/changeset.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Changeset commands
//!
//! Changesets are read-only from the CLI: list the history of an iModel or
//! inspect a single changeset by id or index.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::api::common::OrderBy;
use crate::api::entities::{Changeset, Checkpoint, MinimalChangeset, NamedVersion};
use crate::api::operations::GetChangesetListParams;
use crate::output::{format_state, print_field, print_header, OutputWriter, TableOutput, TableRow};
use crate::util::{format_size, format_time, truncate};

use super::{collect_limited, GlobalOptions, ListOptions};

#[derive(Args, Debug)]
pub struct ChangesetCommand {
    #[command(subcommand)]
    pub command: ChangesetSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ChangesetSubcommand {
    /// List the changesets of an iModel
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a changeset by id or index
    View(ViewArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    pub imodel_id: String,

    /// Only changesets after this index
    #[arg(long)]
    pub after_index: Option<u32>,

    /// Only changesets up to and including this index
    #[arg(long)]
    pub last_index: Option<u32>,

    /// Newest changesets first
    #[arg(long)]
    pub descending: bool,

    #[command(flatten)]
    pub list: ListOptions,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    pub imodel_id: String,

    /// Changeset id, or a numeric index
    pub changeset: String,

    /// Also fetch the named version and closest checkpoint
    #[arg(long)]
    pub related: bool,
}

impl TableRow for MinimalChangeset {
    const HEADERS: &'static [&'static str] = &["INDEX", "ID", "STATE", "PUSHED", "SIZE", "DESCRIPTION"];

    fn cells(&self, color: bool) -> Vec<String> {
        vec![
            self.index.to_string(),
            self.id.clone(),
            format_state(self.state.as_str(), color),
            format_time(&self.push_date_time),
            format_size(self.file_size),
            truncate(&self.description, 40),
        ]
    }
}

impl TableRow for Changeset {
    const HEADERS: &'static [&'static str] = MinimalChangeset::HEADERS;

    fn cells(&self, color: bool) -> Vec<String> {
        self.minimal.cells(color)
    }
}

/// A changeset with the resources its links point at.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangesetDetail {
    changeset: Changeset,
    #[serde(skip_serializing_if = "Option::is_none")]
    named_version: Option<NamedVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    checkpoint: Option<Checkpoint>,
}

impl TableOutput for ChangesetDetail {
    fn print_table(&self, color: bool) {
        let changeset = &self.changeset;
        print_header(&format!("Changeset #{}", changeset.index), color);
        print_field("ID", &changeset.id, color);
        let parent = if changeset.parent_id.is_empty() { "-" } else { changeset.parent_id.as_str() };
        print_field("Parent", parent, color);
        print_field("State", &format_state(changeset.state.as_str(), color), color);
        print_field("Pushed", &format_time(&changeset.push_date_time), color);
        print_field("Size", &format_size(changeset.file_size), color);
        print_field("Briefcase", &changeset.briefcase_id.to_string(), color);

        let kinds = changeset.containing_changes.names();
        print_field(
            "Contains",
            &if kinds.is_empty() { "Regular".to_string() } else { kinds.join(", ") },
            color,
        );
        if let Some(application) = &changeset.application {
            print_field("Application", &application.name, color);
        }
        if !changeset.description.is_empty() {
            print_field("Description", &changeset.description, color);
        }
        if let Some(named_version) = &self.named_version {
            print_field("Version", &named_version.name, color);
        }
        if let Some(checkpoint) = &self.checkpoint {
            print_field(
                "Checkpoint",
                &format!("#{} ({})", checkpoint.changeset_index, checkpoint.state.as_str()),
                color,
            );
        }
    }
}

impl ChangesetCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ChangesetSubcommand::List(args) => self.list(args, global).await,
            ChangesetSubcommand::View(args) => self.view(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let mut url_params = args.list.url_params();
        if args.descending {
            url_params = url_params.order_by(OrderBy::descending("index"));
        }
        let params = GetChangesetListParams {
            imodel_id: args.imodel_id.clone(),
            after_index: args.after_index,
            last_index: args.last_index,
            url_params,
        };
        let changesets = session.client.changesets();

        if args.list.full {
            let items = collect_limited(
                changesets.get_representation_list(&session.authorization, &params),
                args.list.limit,
            )
            .await?;
            return print_list(&session.writer, &items, global);
        }

        let items = collect_limited(
            changesets.get_minimal_list(&session.authorization, &params),
            args.list.limit,
        )
        .await?;
        print_list(&session.writer, &items, global)
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let changesets = session.client.changesets();
        let auth = &session.authorization;

        let changeset = match args.changeset.parse::<u32>() {
            Ok(index) => changesets.get_by_index(auth, &args.imodel_id, index).await?,
            Err(_) => changesets.get_by_id(auth, &args.imodel_id, &args.changeset).await?,
        };

        let (named_version, checkpoint) = if args.related {
            (
                changesets.get_named_version(auth, &changeset).await?,
                changesets.get_current_or_preceding_checkpoint(auth, &changeset).await?,
            )
        } else {
            (None, None)
        };

        session.writer.write(&ChangesetDetail {
            changeset,
            named_version,
            checkpoint,
        })
    }
}

fn print_list<T>(writer: &OutputWriter, items: &[T], global: &GlobalOptions) -> Result<()>
where
    T: Serialize + TableRow,
{
    if items.is_empty() && !global.json {
        println!("No changesets found.");
        return Ok(());
    }
    writer.write_list(items)?;
    if !global.json {
        println!("Showing {} changeset(s)", items.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_matches_headers() {
        let changeset: MinimalChangeset = serde_json::from_value(serde_json::json!({
            "id": "cs1",
            "displayName": "1",
            "description": "Initial import of the bridge model",
            "index": 1,
            "parentId": "",
            "pushDateTime": "2021-05-28T14:17:53.13Z",
            "state": "fileUploaded",
            "containingChanges": 1,
            "fileSize": 2048,
            "briefcaseId": 2
        }))
        .unwrap();

        let cells = changeset.cells(false);

        assert_eq!(cells.len(), MinimalChangeset::HEADERS.len());
        assert_eq!(cells[0], "1");
        assert_eq!(cells[4], "2.0 KB");
    }
}
