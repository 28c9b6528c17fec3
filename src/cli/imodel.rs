//
//  imodels-client
//  cli/imodel.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! iModel commands
//!
//! List the iModels of a project, inspect one, create an empty iModel or
//! delete an existing one.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::api::entities::{IModel, IModelProperties, MinimalIModel};
use crate::api::operations::GetIModelListParams;
use crate::output::{format_state, print_field, print_header, OutputWriter, TableOutput, TableRow};
use crate::util::{format_time, truncate};

use super::{collect_limited, GlobalOptions, ListOptions};

#[derive(Args, Debug)]
pub struct IModelCommand {
    #[command(subcommand)]
    pub command: IModelSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum IModelSubcommand {
    /// List iModels in a project
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show an iModel
    View(ViewArgs),

    /// Create an empty iModel
    Create(CreateArgs),

    /// Delete an iModel
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Project that owns the iModels
    #[arg(long, short = 'p', env = "IMODELS_PROJECT_ID")]
    pub project_id: String,

    /// Only show the iModel with this name
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub list: ListOptions,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    pub imodel_id: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long, short = 'p', env = "IMODELS_PROJECT_ID")]
    pub project_id: String,

    #[arg(long, short = 'n')]
    pub name: String,

    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    pub imodel_id: String,
}

impl TableRow for MinimalIModel {
    const HEADERS: &'static [&'static str] = &["ID", "NAME"];

    fn cells(&self, _color: bool) -> Vec<String> {
        vec![self.id.clone(), self.display_name.clone()]
    }
}

impl TableRow for IModel {
    const HEADERS: &'static [&'static str] = &["ID", "NAME", "STATE", "CREATED", "DESCRIPTION"];

    fn cells(&self, color: bool) -> Vec<String> {
        vec![
            self.id.clone(),
            self.display_name.clone(),
            format_state(self.state.as_str(), color),
            format_time(&self.created_date_time),
            truncate(self.description.as_deref().unwrap_or("-"), 40),
        ]
    }
}

impl TableOutput for IModel {
    fn print_table(&self, color: bool) {
        print_header(&self.display_name, color);
        print_field("ID", &self.id, color);
        print_field("Name", &self.name, color);
        print_field("State", &format_state(self.state.as_str(), color), color);
        print_field("Project", &self.project_id, color);
        print_field("Created", &format_time(&self.created_date_time), color);
        if let Some(description) = &self.description {
            print_field("Description", description, color);
        }
        if let Some(extent) = &self.extent {
            print_field(
                "Extent",
                &format!(
                    "({}, {}) to ({}, {})",
                    extent.south_west.latitude,
                    extent.south_west.longitude,
                    extent.north_east.latitude,
                    extent.north_east.longitude
                ),
                color,
            );
        }
    }
}

impl IModelCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            IModelSubcommand::List(args) => self.list(args, global).await,
            IModelSubcommand::View(args) => self.view(args, global).await,
            IModelSubcommand::Create(args) => self.create(args, global).await,
            IModelSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let params = GetIModelListParams {
            project_id: args.project_id.clone(),
            name: args.name.clone(),
            url_params: args.list.url_params(),
        };
        let imodels = session.client.imodels();

        if args.list.full {
            let items = collect_limited(
                imodels.get_representation_list(&session.authorization, &params),
                args.list.limit,
            )
            .await?;
            return self.print_list(&session.writer, &items, global);
        }

        let items = collect_limited(
            imodels.get_minimal_list(&session.authorization, &params),
            args.list.limit,
        )
        .await?;
        self.print_list(&session.writer, &items, global)
    }

    fn print_list<T>(&self, writer: &OutputWriter, items: &[T], global: &GlobalOptions) -> Result<()>
    where
        T: serde::Serialize + TableRow,
    {
        if items.is_empty() && !global.json {
            println!("No iModels found.");
            return Ok(());
        }
        writer.write_list(items)?;
        if !global.json {
            println!("Showing {} iModel(s)", items.len());
        }
        Ok(())
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let imodel = session
            .client
            .imodels()
            .get_by_id(&session.authorization, &args.imodel_id)
            .await?;
        session.writer.write(&imodel)
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let properties = IModelProperties {
            project_id: args.project_id.clone(),
            name: args.name.clone(),
            description: args.description.clone(),
            extent: None,
        };
        let imodel = session
            .client
            .imodels()
            .create_empty(&session.authorization, &properties)
            .await?;

        if global.json {
            return session.writer.write(&imodel);
        }
        session.writer.write_success(&format!(
            "Created iModel {} ({})",
            style(&imodel.display_name).cyan(),
            imodel.id
        ));
        Ok(())
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        session
            .client
            .imodels()
            .delete(&session.authorization, &args.imodel_id)
            .await?;

        if global.json {
            println!("{}", serde_json::json!({ "deleted": args.imodel_id }));
        } else {
            session
                .writer
                .write_success(&format!("Deleted iModel {}", args.imodel_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::entities::IModelState;
    use chrono::TimeZone;

    #[test]
    fn test_representation_row() {
        let imodel = IModel {
            minimal: MinimalIModel {
                id: "a1".to_string(),
                display_name: "Bridge".to_string(),
            },
            name: "Bridge".to_string(),
            description: None,
            state: IModelState::NotInitialized,
            created_date_time: chrono::Utc.with_ymd_and_hms(2021, 5, 28, 14, 17, 53).unwrap(),
            project_id: "p1".to_string(),
            extent: None,
        };

        let cells = imodel.cells(false);

        assert_eq!(cells.len(), IModel::HEADERS.len());
        assert_eq!(cells[2], "notInitialized");
        assert_eq!(cells[4], "-");
    }
}
