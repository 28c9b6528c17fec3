//
//  imodels-client
//  cli/named_version.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Named version commands

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use console::style;
use serde::Serialize;

use crate::api::entities::{
    MinimalNamedVersion, NamedVersion, NamedVersionPropertiesForCreate,
    NamedVersionPropertiesForUpdate, NamedVersionState,
};
use crate::api::operations::GetNamedVersionListParams;
use crate::output::{format_state, print_field, print_header, OutputWriter, TableOutput, TableRow};
use crate::util::{format_time, truncate};

use super::{collect_limited, GlobalOptions, ListOptions, UsageError};

#[derive(Args, Debug)]
pub struct NamedVersionCommand {
    #[command(subcommand)]
    pub command: NamedVersionSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum NamedVersionSubcommand {
    /// List the named versions of an iModel
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a named version
    View(ViewArgs),

    /// Name a changeset
    Create(CreateArgs),

    /// Rename, describe, hide or show a named version
    Update(UpdateArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    pub imodel_id: String,

    /// Only show the named version with this name
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub list: ListOptions,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    pub imodel_id: String,
    pub named_version_id: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    pub imodel_id: String,

    #[arg(long, short = 'n')]
    pub name: String,

    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Changeset to name; the baseline when omitted
    #[arg(long, short = 'c')]
    pub changeset_id: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    pub imodel_id: String,
    pub named_version_id: String,

    #[arg(long, short = 'n')]
    pub name: Option<String>,

    #[arg(long, short = 'd')]
    pub description: Option<String>,

    #[arg(long, value_enum)]
    pub state: Option<StateArg>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum StateArg {
    Visible,
    Hidden,
}

impl From<StateArg> for NamedVersionState {
    fn from(state: StateArg) -> Self {
        match state {
            StateArg::Visible => Self::Visible,
            StateArg::Hidden => Self::Hidden,
        }
    }
}

impl UpdateArgs {
    fn properties(&self) -> Result<NamedVersionPropertiesForUpdate, UsageError> {
        let properties = NamedVersionPropertiesForUpdate {
            name: self.name.clone(),
            description: self.description.clone(),
            state: self.state.map(Into::into),
        };
        if properties == NamedVersionPropertiesForUpdate::default() {
            return Err(UsageError(
                "Nothing to update. Pass --name, --description or --state.".to_string(),
            ));
        }
        Ok(properties)
    }
}

impl TableRow for MinimalNamedVersion {
    const HEADERS: &'static [&'static str] = &["ID", "NAME", "CHANGESET"];

    fn cells(&self, _color: bool) -> Vec<String> {
        vec![
            self.id.clone(),
            self.display_name.clone(),
            self.changeset_id.clone().unwrap_or_else(|| "baseline".to_string()),
        ]
    }
}

impl TableRow for NamedVersion {
    const HEADERS: &'static [&'static str] = &["ID", "NAME", "CHANGESET", "STATE", "CREATED", "DESCRIPTION"];

    fn cells(&self, color: bool) -> Vec<String> {
        let mut cells = self.minimal.cells(color);
        cells.push(format_state(self.state.as_str(), color));
        cells.push(format_time(&self.created_date_time));
        cells.push(truncate(self.description.as_deref().unwrap_or("-"), 40));
        cells
    }
}

impl TableOutput for NamedVersion {
    fn print_table(&self, color: bool) {
        print_header(&self.name, color);
        print_field("ID", &self.id, color);
        print_field("Changeset", self.changeset_id.as_deref().unwrap_or("baseline"), color);
        print_field("State", &format_state(self.state.as_str(), color), color);
        print_field("Created", &format_time(&self.created_date_time), color);
        if let Some(description) = &self.description {
            print_field("Description", description, color);
        }
    }
}

impl NamedVersionCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            NamedVersionSubcommand::List(args) => self.list(args, global).await,
            NamedVersionSubcommand::View(args) => self.view(args, global).await,
            NamedVersionSubcommand::Create(args) => self.create(args, global).await,
            NamedVersionSubcommand::Update(args) => self.update(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let params = GetNamedVersionListParams {
            imodel_id: args.imodel_id.clone(),
            name: args.name.clone(),
            url_params: args.list.url_params(),
        };
        let named_versions = session.client.named_versions();

        if args.list.full {
            let items = collect_limited(
                named_versions.get_representation_list(&session.authorization, &params),
                args.list.limit,
            )
            .await?;
            return print_list(&session.writer, &items, global);
        }

        let items = collect_limited(
            named_versions.get_minimal_list(&session.authorization, &params),
            args.list.limit,
        )
        .await?;
        print_list(&session.writer, &items, global)
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let named_version = session
            .client
            .named_versions()
            .get_by_id(&session.authorization, &args.imodel_id, &args.named_version_id)
            .await?;
        session.writer.write(&named_version)
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let properties = NamedVersionPropertiesForCreate {
            name: args.name.clone(),
            description: args.description.clone(),
            changeset_id: args.changeset_id.clone(),
        };
        let named_version = session
            .client
            .named_versions()
            .create(&session.authorization, &args.imodel_id, &properties)
            .await?;

        if global.json {
            return session.writer.write(&named_version);
        }
        session.writer.write_success(&format!(
            "Created named version {} ({})",
            style(&named_version.name).cyan(),
            named_version.id
        ));
        Ok(())
    }

    async fn update(&self, args: &UpdateArgs, global: &GlobalOptions) -> Result<()> {
        let properties = args.properties()?;
        let session = global.session()?;
        let named_version = session
            .client
            .named_versions()
            .update(
                &session.authorization,
                &args.imodel_id,
                &args.named_version_id,
                &properties,
            )
            .await?;

        if global.json {
            return session.writer.write(&named_version);
        }
        session
            .writer
            .write_success(&format!("Updated named version {}", style(&named_version.name).cyan()));
        Ok(())
    }
}

fn print_list<T>(writer: &OutputWriter, items: &[T], global: &GlobalOptions) -> Result<()>
where
    T: Serialize + TableRow,
{
    if items.is_empty() && !global.json {
        println!("No named versions found.");
        return Ok(());
    }
    writer.write_list(items)?;
    if !global.json {
        println!("Showing {} named version(s)", items.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update_args(name: Option<&str>, state: Option<StateArg>) -> UpdateArgs {
        UpdateArgs {
            imodel_id: "m1".to_string(),
            named_version_id: "nv1".to_string(),
            name: name.map(str::to_string),
            description: None,
            state,
        }
    }

    #[test]
    fn test_update_requires_a_change() {
        assert!(update_args(None, None).properties().is_err());
    }

    #[test]
    fn test_update_properties() {
        let properties = update_args(Some("Release 2"), Some(StateArg::Hidden))
            .properties()
            .unwrap();

        assert_eq!(properties.name.as_deref(), Some("Release 2"));
        assert_eq!(properties.state, Some(NamedVersionState::Hidden));
        assert!(properties.description.is_none());
    }

    #[test]
    fn test_baseline_row() {
        let version = MinimalNamedVersion {
            id: "nv1".to_string(),
            display_name: "Baseline".to_string(),
            changeset_id: None,
        };
        assert_eq!(version.cells(false)[2], "baseline");
    }
}
