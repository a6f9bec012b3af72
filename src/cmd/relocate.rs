use super::{Session, pick_functionapp, pick_group, pick_subscription};
use crate::azcli::{MoveRequest, SourceRemoval};
use crate::{prompt, ui};
use inquire::error::InquireResult;

pub fn move_functionapp(session: &Session) -> InquireResult<()> {
    let Some(source) = pick_subscription(session, "Source subscription", None)? else {
        return Ok(());
    };
    let Some(group) = pick_group(session, &source)? else {
        return Ok(());
    };
    let Some(app) = pick_functionapp(session, &source, &group)? else {
        return Ok(());
    };
    let Some(target) = pick_subscription(session, "Target subscription", Some(&source.id))? else {
        return Ok(());
    };

    let question = format!(
        "Move {} from {} to {}? The original is deleted once the copy exists.",
        app.name, source.name, target.name
    );
    if !prompt::confirm(&question, false)? {
        return Ok(());
    }

    let request = MoveRequest {
        source_subscription: source.id,
        target_subscription: target.id,
        resource_group: group.name,
        name: app.name,
    };

    match ui::with_spinner("Moving function app...", || session.az.move_functionapp(&request)) {
        Ok(report) => {
            ui::success(format!("Created {} in {}", report.created, target.name));
            match report.removal {
                SourceRemoval::Deleted => {
                    ui::success(format!("Deleted {} from {}", request.name, source.name))
                }
                SourceRemoval::Failed(err) => {
                    ui::error(format!(
                        "{} now exists in both subscriptions, delete the original manually: {err}",
                        request.name
                    ));
                }
            }
        }
        Err(err) => ui::error(format!("Move failed: {err}")),
    }

    Ok(())
}

pub fn delete_functionapp(session: &Session) -> InquireResult<()> {
    let Some(subscription) = pick_subscription(session, "Subscription", None)? else {
        return Ok(());
    };
    let Some(group) = pick_group(session, &subscription)? else {
        return Ok(());
    };
    let Some(app) = pick_functionapp(session, &subscription, &group)? else {
        return Ok(());
    };

    if !prompt::confirm(&format!("Delete {} permanently?", app.name), false)? {
        return Ok(());
    }

    match ui::with_spinner("Deleting function app...", || {
        session
            .az
            .delete_functionapp(&subscription.id, &group.name, &app.name)
    }) {
        Ok(()) => ui::success(format!("Deleted {}", app.name)),
        Err(err) => ui::error(format!("Failed to delete {}: {err}", app.name)),
    }

    Ok(())
}
