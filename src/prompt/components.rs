use crate::flow::{Answer, ComponentFlow, Decision, MAX_SHORT_CODE_LEN};
use crate::naming::{ComponentOption, ComponentSelection, NamingService, ResolvedComponents};
use crate::ui;
use inquire::{Confirm, InquireError, Select, Text, error::InquireResult};
use std::fmt;

enum LocationChoice {
    Region(ComponentOption),
    ShowAll,
}

impl fmt::Display for LocationChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationChoice::Region(option) => write!(f, "{option}"),
            LocationChoice::ShowAll => f.write_str("Show all locations..."),
        }
    }
}

enum ProjectChoice {
    CreateNew,
    Existing(ComponentOption),
}

impl fmt::Display for ProjectChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectChoice::CreateNew => f.write_str("Create new..."),
            ProjectChoice::Existing(option) => write!(f, "{option}"),
        }
    }
}

fn ask(decision: Decision) -> InquireResult<Option<Answer>> {
    let answer = match decision {
        Decision::Complete => return Ok(None),
        Decision::IncludeOptional { category } => Answer::Include(
            Confirm::new(&format!("Include optional component {category}?"))
                .with_default(false)
                .prompt()?,
        ),
        Decision::ChooseLocation { shortlist, .. } => {
            let mut choices: Vec<LocationChoice> =
                shortlist.into_iter().map(LocationChoice::Region).collect();
            choices.push(LocationChoice::ShowAll);

            match Select::new("Location", choices).prompt()? {
                LocationChoice::Region(option) => Answer::Pick(option.short_name),
                LocationChoice::ShowAll => Answer::ShowAllLocations,
            }
        }
        Decision::ChooseOption { category, options } => {
            let option = Select::new(&category.to_string(), options)
                .with_page_size(15)
                .prompt()?;
            Answer::Pick(option.short_name)
        }
        Decision::ChooseProjAppSvc { existing } => {
            let choices: Vec<ProjectChoice> = std::iter::once(ProjectChoice::CreateNew)
                .chain(existing.into_iter().map(ProjectChoice::Existing))
                .collect();

            match Select::new("Project/Application/Service", choices)
                .with_page_size(15)
                .prompt()?
            {
                ProjectChoice::Existing(option) => Answer::Pick(option.short_name),
                ProjectChoice::CreateNew => {
                    Answer::CreateNew(Text::new("Name of the new project/application/service").prompt()?)
                }
            }
        }
        Decision::ConfirmShortCode { name, suggested } => {
            let accepted = Confirm::new(&format!("Use short code '{suggested}' for '{name}'?"))
                .with_default(true)
                .prompt()?;

            if accepted {
                Answer::AcceptSuggested
            } else {
                Answer::Override(
                    Text::new(&format!("Short code (1-{MAX_SHORT_CODE_LEN} characters)")).prompt()?,
                )
            }
        }
        Decision::EnterManually { category } => Answer::Text(
            Text::new(&format!("No {category} options available. Enter a value"))
                .prompt()?,
        ),
    };

    Ok(Some(answer))
}

/// Prompts for every component the resource type needs. Rejected answers
/// are reported and asked again.
pub fn collect_components<S>(
    naming: &S,
    resolved: &ResolvedComponents,
) -> InquireResult<ComponentSelection>
where
    S: NamingService + ?Sized,
{
    let mut flow = ComponentFlow::new(naming, resolved);

    while let Some(answer) = ask(flow.decision().clone())? {
        if let Err(err) = flow.answer(answer) {
            ui::warn(err);
        }
    }

    flow.finish()
        .map_err(|err| InquireError::Custom(Box::new(err)))
}
