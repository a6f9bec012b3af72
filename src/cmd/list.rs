use super::{ListTarget, Session, pick_group, pick_subscription};
use crate::azcli::{FunctionApp, ResourceGroup, Subscription};
use crate::{prompt, ui};
use inquire::error::InquireResult;
use tabled::Tabled;

#[derive(Tabled)]
struct FunctionAppRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Resource group")]
    group: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Host")]
    host: String,
}

impl From<FunctionApp> for FunctionAppRow {
    fn from(app: FunctionApp) -> Self {
        Self {
            name: app.name,
            group: app.resource_group,
            location: app.location,
            state: app.state.unwrap_or_default(),
            host: app.default_host_name.unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Location")]
    location: String,
}

impl From<ResourceGroup> for GroupRow {
    fn from(group: ResourceGroup) -> Self {
        Self {
            name: group.name,
            location: group.location,
        }
    }
}

#[derive(Tabled)]
struct SubscriptionRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Default")]
    default: String,
}

impl From<Subscription> for SubscriptionRow {
    fn from(sub: Subscription) -> Self {
        Self {
            name: sub.name,
            id: sub.id,
            state: sub.state,
            default: if sub.is_default { "*".into() } else { String::new() },
        }
    }
}

pub fn handle(session: &Session, target: ListTarget) -> InquireResult<()> {
    match target {
        ListTarget::FunctionApps => functionapps(session),
        ListTarget::Groups => groups(session),
        ListTarget::Subscriptions => subscriptions(session),
    }
}

fn functionapps(session: &Session) -> InquireResult<()> {
    let Some(subscription) = pick_subscription(session, "Subscription", None)? else {
        return Ok(());
    };

    let group = if prompt::confirm("Limit to one resource group?", false)? {
        match pick_group(session, &subscription)? {
            Some(group) => Some(group.name),
            None => return Ok(()),
        }
    } else {
        None
    };

    match ui::with_spinner("Loading function apps...", || {
        session
            .az
            .list_functionapps(&subscription.id, group.as_deref())
    }) {
        Ok(apps) if apps.is_empty() => ui::warn("No function apps found."),
        Ok(apps) => ui::table(apps.into_iter().map(FunctionAppRow::from)),
        Err(err) => ui::error(format!("Failed to list function apps: {err}")),
    }

    Ok(())
}

fn groups(session: &Session) -> InquireResult<()> {
    let Some(subscription) = pick_subscription(session, "Subscription", None)? else {
        return Ok(());
    };

    match ui::with_spinner("Loading resource groups...", || {
        session.az.list_groups(&subscription.id)
    }) {
        Ok(groups) if groups.is_empty() => ui::warn("No resource groups found."),
        Ok(groups) => ui::table(groups.into_iter().map(GroupRow::from)),
        Err(err) => ui::error(format!("Failed to list resource groups: {err}")),
    }

    Ok(())
}

fn subscriptions(session: &Session) -> InquireResult<()> {
    match ui::with_spinner("Loading subscriptions...", || session.az.list_subscriptions()) {
        Ok(subs) if subs.is_empty() => ui::warn("No subscriptions found."),
        Ok(subs) => ui::table(subs.into_iter().map(SubscriptionRow::from)),
        Err(err) => ui::error(format!("Failed to list subscriptions: {err}")),
    }

    Ok(())
}
