pub mod config;
pub mod generate;
pub mod list;
pub mod menu;
pub mod relocate;

use crate::azcli::{AzCli, FunctionApp, ResourceGroup, Subscription};
use crate::naming::{NamingClient, NamingResult};
use crate::settings::Settings;
use crate::{prompt, ui};
use clap::{Parser, Subcommand, ValueEnum};
use inquire::{InquireError, error::InquireResult};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "armover",
    version,
    about = "Generate standardized Azure resource names and move function apps between subscriptions"
)]
pub struct Cli {
    /// Settings file (defaults to settings.yaml in the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Write request and command details to the log file
    #[arg(long, global = true)]
    pub debug: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Default)]
pub enum Command {
    /// Open the interactive menu
    #[default]
    Menu,
    /// Generate a resource name
    Generate {
        #[arg(value_enum)]
        resource: Option<ResourceKind>,
    },
    /// Move a function app to another subscription
    Move,
    /// List resources in a subscription
    List {
        #[arg(value_enum)]
        resource: Option<ListTarget>,
    },
    /// Show the effective settings
    Settings,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ResourceKind {
    #[value(name = "func")]
    FunctionApp,
    #[value(name = "rg")]
    ResourceGroup,
}

impl ResourceKind {
    /// Resource type short name known to the naming service.
    pub fn short_name(self) -> &'static str {
        match self {
            ResourceKind::FunctionApp => "func",
            ResourceKind::ResourceGroup => "rg",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::FunctionApp => "function app",
            ResourceKind::ResourceGroup => "resource group",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListTarget {
    FunctionApps,
    Groups,
    Subscriptions,
}

pub struct Session {
    pub naming: NamingClient,
    pub az: AzCli,
}

impl Session {
    pub fn new(settings: &Settings) -> NamingResult<Self> {
        Ok(Self {
            naming: NamingClient::new(settings)?,
            az: AzCli::from_settings(settings),
        })
    }
}

pub fn run(command: Command, settings: Settings) -> NamingResult<()> {
    if let Command::Settings = command {
        config::handle(&settings);
        return Ok(());
    }

    let session = Session::new(&settings)?;

    if let Err(err) = ui::with_spinner("Checking Azure CLI login...", || session.az.check_login()) {
        ui::warn(format!("Azure CLI is not ready: {err}"));
    }

    let result = match command {
        Command::Menu => menu::main_menu(&session),
        Command::Generate { resource: Some(kind) } => generate::handle(&session, kind),
        Command::Generate { resource: None } => menu::generate_menu(&session),
        Command::Move => relocate::move_functionapp(&session),
        Command::List { resource: Some(target) } => list::handle(&session, target),
        Command::List { resource: None } => menu::list_menu(&session),
        Command::Settings => Ok(()),
    };

    match result {
        Ok(()) => {}
        Err(err) if prompt::is_cancel(&err) => {}
        Err(InquireError::OperationInterrupted) => println!("Interrupted."),
        Err(err) => ui::error(err),
    }

    Ok(())
}

// Lookups shared by the handlers. Each returns None after telling the user
// why there is nothing to choose from.

fn pick_subscription(
    session: &Session,
    message: &str,
    except: Option<&str>,
) -> InquireResult<Option<Subscription>> {
    let subscriptions = match ui::with_spinner("Loading subscriptions...", || {
        session.az.list_subscriptions()
    }) {
        Ok(subscriptions) => subscriptions,
        Err(err) => {
            ui::error(format!("Failed to list subscriptions: {err}"));
            return Ok(None);
        }
    };

    let subscriptions: Vec<Subscription> = subscriptions
        .into_iter()
        .filter(|sub| Some(sub.id.as_str()) != except)
        .collect();

    if subscriptions.is_empty() {
        ui::warn("No subscriptions available.");
        return Ok(None);
    }

    prompt::select(message, subscriptions).map(Some)
}

fn pick_group(session: &Session, subscription: &Subscription) -> InquireResult<Option<ResourceGroup>> {
    let groups = match ui::with_spinner("Loading resource groups...", || {
        session.az.list_groups(&subscription.id)
    }) {
        Ok(groups) => groups,
        Err(err) => {
            ui::error(format!("Failed to list resource groups: {err}"));
            return Ok(None);
        }
    };

    if groups.is_empty() {
        ui::warn(format!("No resource groups in {}.", subscription.name));
        return Ok(None);
    }

    prompt::select("Resource group", groups).map(Some)
}

fn pick_functionapp(
    session: &Session,
    subscription: &Subscription,
    group: &ResourceGroup,
) -> InquireResult<Option<FunctionApp>> {
    let apps = match ui::with_spinner("Loading function apps...", || {
        session.az.list_functionapps(&subscription.id, Some(&group.name))
    }) {
        Ok(apps) => apps,
        Err(err) => {
            ui::error(format!("Failed to list function apps: {err}"));
            return Ok(None);
        }
    };

    if apps.is_empty() {
        ui::warn(format!("No function apps in {}.", group.name));
        return Ok(None);
    }

    prompt::select("Function app", apps).map(Some)
}
