use super::{ResourceKind, Session, pick_group, pick_subscription};
use crate::azcli::FunctionAppSpec;
use crate::naming::{NameOutcome, NamingService, generate_name};
use crate::{prompt, ui};
use inquire::{Text, error::InquireResult};

pub fn handle(session: &Session, kind: ResourceKind) -> InquireResult<()> {
    let short_name = kind.short_name();

    let resolved = match ui::with_spinner("Fetching resource types...", || {
        session.naming.resolve_components_for_type(short_name)
    }) {
        Ok(resolved) => resolved,
        Err(err) => {
            ui::error(format!("Cannot generate a {} name: {err}", kind.label()));
            return Ok(());
        }
    };

    ui::header(&format!("Generate {} name", kind.label()));
    let selections = prompt::collect_components(&session.naming, &resolved)?;

    let outcome = ui::with_spinner("Requesting name...", || {
        generate_name(&session.naming, &resolved.descriptor, &selections)
    });
    report(&outcome);

    if let (ResourceKind::FunctionApp, Some(name)) = (kind, outcome.name()) {
        if prompt::confirm("Create this function app now?", false)? {
            create_functionapp(session, name)?;
        }
    }

    Ok(())
}

fn report(outcome: &NameOutcome) {
    match outcome {
        NameOutcome::Valid { name, attempt } => {
            ui::success(format!("Generated name: {name} (valid, attempt {attempt})"));
        }
        NameOutcome::Unvalidated {
            name,
            attempt,
            pattern,
            valid_text,
            invalid_text,
        } => {
            ui::success(format!("Generated name: {name} (attempt {attempt})"));
            ui::warn("The name could not be validated against the resource type rules.");
            if let Some(pattern) = pattern {
                ui::note(format!("Expected pattern: {pattern}"));
            }
            if let Some(text) = valid_text {
                ui::note(format!("Valid: {text}"));
            }
            if let Some(text) = invalid_text {
                ui::note(format!("Invalid: {text}"));
            }
        }
        NameOutcome::Exhausted { attempts } => {
            ui::error(format!(
                "No name produced after {attempts} attempts. Check the log for details."
            ));
        }
    }
}

fn create_functionapp(session: &Session, name: &str) -> InquireResult<()> {
    let Some(subscription) = pick_subscription(session, "Subscription", None)? else {
        return Ok(());
    };
    let Some(group) = pick_group(session, &subscription)? else {
        return Ok(());
    };

    let location = Text::new("Location")
        .with_default(&group.location)
        .prompt()?;

    let spec = FunctionAppSpec {
        name: name.to_string(),
        resource_group: group.name,
        location,
    };

    match ui::with_spinner("Creating function app...", || {
        session.az.create_functionapp(&subscription.id, &spec)
    }) {
        Ok(Some(app)) => ui::success(format!("Created {app}")),
        Ok(None) => ui::warn(format!("Azure CLI returned nothing for {}.", spec.name)),
        Err(err) => ui::error(format!("Failed to create {}: {err}", spec.name)),
    }

    Ok(())
}
