//
//  imodels-client
//  cli/briefcase.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Briefcase commands

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;
use serde::Serialize;

use crate::api::entities::{Briefcase, BriefcaseProperties, MinimalBriefcase};
use crate::api::operations::GetBriefcaseListParams;
use crate::output::{print_field, print_header, OutputWriter, TableOutput, TableRow};
use crate::util::{format_relative_time, format_size, format_time};

use super::{collect_limited, GlobalOptions, ListOptions};

#[derive(Args, Debug)]
pub struct BriefcaseCommand {
    #[command(subcommand)]
    pub command: BriefcaseSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BriefcaseSubcommand {
    /// List the briefcases of an iModel
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a briefcase
    View(ViewArgs),

    /// Acquire a new briefcase
    Acquire(AcquireArgs),

    /// Release a briefcase
    Release(ViewArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    pub imodel_id: String,

    /// Only briefcases acquired by you
    #[arg(long)]
    pub mine: bool,

    #[command(flatten)]
    pub list: ListOptions,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    pub imodel_id: String,
    pub briefcase_id: u32,
}

#[derive(Args, Debug)]
pub struct AcquireArgs {
    pub imodel_id: String,

    /// Name of the machine the briefcase is for
    #[arg(long)]
    pub device_name: Option<String>,
}

impl TableRow for MinimalBriefcase {
    const HEADERS: &'static [&'static str] = &["ID", "NAME"];

    fn cells(&self, _color: bool) -> Vec<String> {
        vec![self.id.clone(), self.display_name.clone()]
    }
}

impl TableRow for Briefcase {
    const HEADERS: &'static [&'static str] = &["BRIEFCASE", "NAME", "OWNER", "ACQUIRED", "SIZE"];

    fn cells(&self, _color: bool) -> Vec<String> {
        vec![
            self.briefcase_id.to_string(),
            self.display_name.clone(),
            self.owner_id.clone().unwrap_or_else(|| "-".to_string()),
            format_relative_time(&self.acquired_date_time, &chrono::Utc::now()),
            format_size(self.file_size),
        ]
    }
}

impl TableOutput for Briefcase {
    fn print_table(&self, color: bool) {
        print_header(&self.display_name, color);
        print_field("ID", &self.briefcase_id.to_string(), color);
        print_field("Owner", self.owner_id.as_deref().unwrap_or("-"), color);
        print_field("Device", self.device_name.as_deref().unwrap_or("-"), color);
        print_field("Acquired", &format_time(&self.acquired_date_time), color);
        print_field("Size", &format_size(self.file_size), color);
    }
}

impl BriefcaseCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            BriefcaseSubcommand::List(args) => self.list(args, global).await,
            BriefcaseSubcommand::View(args) => self.view(args, global).await,
            BriefcaseSubcommand::Acquire(args) => self.acquire(args, global).await,
            BriefcaseSubcommand::Release(args) => self.release(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let params = GetBriefcaseListParams {
            imodel_id: args.imodel_id.clone(),
            owned_by_me: args.mine,
            url_params: args.list.url_params(),
        };
        let briefcases = session.client.briefcases();

        if args.list.full {
            let items = collect_limited(
                briefcases.get_representation_list(&session.authorization, &params),
                args.list.limit,
            )
            .await?;
            return print_list(&session.writer, &items, global);
        }

        let items = collect_limited(
            briefcases.get_minimal_list(&session.authorization, &params),
            args.list.limit,
        )
        .await?;
        print_list(&session.writer, &items, global)
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let briefcase = session
            .client
            .briefcases()
            .get_single(&session.authorization, &args.imodel_id, args.briefcase_id)
            .await?;
        session.writer.write(&briefcase)
    }

    async fn acquire(&self, args: &AcquireArgs, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let properties = BriefcaseProperties {
            device_name: args.device_name.clone(),
        };
        let briefcase = session
            .client
            .briefcases()
            .acquire(&session.authorization, &args.imodel_id, &properties)
            .await?;

        if global.json {
            return session.writer.write(&briefcase);
        }
        session.writer.write_success(&format!(
            "Acquired briefcase {}",
            style(briefcase.briefcase_id).cyan()
        ));
        Ok(())
    }

    async fn release(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        session
            .client
            .briefcases()
            .release(&session.authorization, &args.imodel_id, args.briefcase_id)
            .await?;

        if global.json {
            println!(
                "{}",
                serde_json::json!({ "released": args.briefcase_id, "imodelId": args.imodel_id })
            );
        } else {
            session
                .writer
                .write_success(&format!("Released briefcase {}", args.briefcase_id));
        }
        Ok(())
    }
}

fn print_list<T>(writer: &OutputWriter, items: &[T], global: &GlobalOptions) -> Result<()>
where
    T: Serialize + TableRow,
{
    if items.is_empty() && !global.json {
        println!("No briefcases found.");
        return Ok(());
    }
    writer.write_list(items)?;
    if !global.json {
        println!("Showing {} briefcase(s)", items.len());
    }
    Ok(())
}
