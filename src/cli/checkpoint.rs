//
//  imodels-client
//  cli/checkpoint.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Checkpoint commands

use anyhow::Result;
use clap::{ArgGroup, Args, Subcommand};

use crate::api::entities::Checkpoint;
use crate::api::operations::CheckpointParent;
use crate::output::{format_state, print_field, print_header, TableOutput};

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct CheckpointCommand {
    #[command(subcommand)]
    pub command: CheckpointSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CheckpointSubcommand {
    /// Show a checkpoint; the latest one unless a parent is given
    View(ViewArgs),
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("parent").args(["changeset_id", "changeset_index", "named_version_id"])))]
pub struct ViewArgs {
    pub imodel_id: String,

    #[arg(long)]
    pub changeset_id: Option<String>,

    #[arg(long)]
    pub changeset_index: Option<u32>,

    #[arg(long)]
    pub named_version_id: Option<String>,
}

impl ViewArgs {
    fn parent(&self) -> CheckpointParent {
        if let Some(id) = &self.changeset_id {
            CheckpointParent::Changeset { id: id.clone() }
        } else if let Some(index) = self.changeset_index {
            CheckpointParent::ChangesetIndex(index)
        } else if let Some(id) = &self.named_version_id {
            CheckpointParent::NamedVersion { id: id.clone() }
        } else {
            CheckpointParent::Latest
        }
    }
}

impl TableOutput for Checkpoint {
    fn print_table(&self, color: bool) {
        print_header(&format!("Checkpoint for changeset #{}", self.changeset_index), color);
        print_field("Changeset", &self.changeset_id, color);
        print_field("State", &format_state(self.state.as_str(), color), color);
        if let Some(key) = &self.container_access_key {
            print_field("Container", &format!("{}/{}", key.account, key.container), color);
            print_field("Database", &key.db_name, color);
        }
        if let Some(download) = &self.links.download {
            print_field("Download", &download.href, color);
        }
    }
}

impl CheckpointCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            CheckpointSubcommand::View(args) => self.view(args, global).await,
        }
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let checkpoint = session
            .client
            .checkpoints()
            .get_single(&session.authorization, &args.imodel_id, &args.parent())
            .await?;
        session.writer.write(&checkpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        let mut argv = vec!["imodels", "checkpoint", "view", "m1"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv)
    }

    fn parent_of(cli: Cli) -> CheckpointParent {
        match cli.command {
            crate::cli::Commands::Checkpoint(CheckpointCommand {
                command: CheckpointSubcommand::View(args),
            }) => args.parent(),
            _ => panic!("expected checkpoint view"),
        }
    }

    #[test]
    fn test_parent_selection() {
        assert_eq!(parent_of(parse(&[]).unwrap()), CheckpointParent::Latest);
        assert_eq!(
            parent_of(parse(&["--changeset-index", "4"]).unwrap()),
            CheckpointParent::ChangesetIndex(4)
        );
        assert_eq!(
            parent_of(parse(&["--named-version-id", "nv1"]).unwrap()),
            CheckpointParent::NamedVersion { id: "nv1".to_string() }
        );
    }

    #[test]
    fn test_parents_are_exclusive() {
        assert!(parse(&["--changeset-id", "cs1", "--changeset-index", "1"]).is_err());
    }
}
