use super::error::{FlowError, FlowResult};
use super::shortcode::{suggest_short_code, validate_short_code};
use crate::naming::{
    Category, ComponentOption, ComponentSelection, NamingService, ResolvedComponents,
};
use std::collections::VecDeque;

/// Offered before the full location list.
pub const US_LOCATIONS: [&str; 9] = [
    "East US",
    "East US 2",
    "Central US",
    "North Central US",
    "South Central US",
    "West Central US",
    "West US",
    "West US 2",
    "West US 3",
];

/// What the flow needs to know next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    IncludeOptional {
        category: Category,
    },
    ChooseLocation {
        shortlist: Vec<ComponentOption>,
        all: Vec<ComponentOption>,
    },
    ChooseOption {
        category: Category,
        options: Vec<ComponentOption>,
    },
    ChooseProjAppSvc {
        existing: Vec<ComponentOption>,
    },
    ConfirmShortCode {
        name: String,
        suggested: String,
    },
    EnterManually {
        category: Category,
    },
    Complete,
}

impl Decision {
    fn label(&self) -> &'static str {
        match self {
            Decision::IncludeOptional { .. } => "include optional component",
            Decision::ChooseLocation { .. } => "choose location",
            Decision::ChooseOption { .. } => "choose option",
            Decision::ChooseProjAppSvc { .. } => "choose project/app/service",
            Decision::ConfirmShortCode { .. } => "confirm short code",
            Decision::EnterManually { .. } => "enter value",
            Decision::Complete => "complete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Include(bool),
    /// Short code of one of the offered options.
    Pick(String),
    ShowAllLocations,
    CreateNew(String),
    AcceptSuggested,
    Override(String),
    Text(String),
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Required(Category),
    Optional(Category),
}

impl Step {
    fn category(self) -> Category {
        match self {
            Step::Required(category) | Step::Optional(category) => category,
        }
    }
}

/// Walks the components of one resource type: required ones first, then
/// each optional one behind a yes/no. Instance is left to name generation.
///
/// A rejected answer returns an error and leaves the current decision in
/// place, so the caller simply asks again.
pub struct ComponentFlow<'a, S: ?Sized> {
    naming: &'a S,
    steps: VecDeque<Step>,
    current: Decision,
    selections: ComponentSelection,
}

impl<'a, S: NamingService + ?Sized> ComponentFlow<'a, S> {
    pub fn new(naming: &'a S, resolved: &ResolvedComponents) -> Self {
        let steps = resolved
            .required
            .iter()
            .map(|category| Step::Required(*category))
            .chain(resolved.optional.iter().map(|category| Step::Optional(*category)))
            .filter(|step| step.category() != Category::Instance)
            .collect();

        let mut flow = Self {
            naming,
            steps,
            current: Decision::Complete,
            selections: ComponentSelection::default(),
        };
        flow.advance();
        flow
    }

    pub fn decision(&self) -> &Decision {
        &self.current
    }

    pub fn selections(&self) -> &ComponentSelection {
        &self.selections
    }

    pub fn is_complete(&self) -> bool {
        self.current == Decision::Complete
    }

    pub fn finish(self) -> FlowResult<ComponentSelection> {
        if !self.is_complete() {
            return Err(FlowError::Incomplete);
        }
        Ok(self.selections)
    }

    pub fn answer(&mut self, answer: Answer) -> FlowResult<()> {
        let next = match (&self.current, answer) {
            (Decision::IncludeOptional { category }, Answer::Include(true)) => {
                Some(self.decision_for(*category))
            }
            (Decision::IncludeOptional { .. }, Answer::Include(false)) => None,
            (Decision::ChooseOption { category, options }, Answer::Pick(code)) => {
                let code = pick(*category, options, &code)?;
                self.selections.set(*category, code);
                None
            }
            (Decision::ChooseLocation { all, .. }, Answer::Pick(code)) => {
                let code = pick(Category::Location, all, &code)?;
                self.selections.set(Category::Location, code);
                None
            }
            (Decision::ChooseLocation { all, .. }, Answer::ShowAllLocations) => {
                Some(Decision::ChooseOption {
                    category: Category::Location,
                    options: all.clone(),
                })
            }
            (Decision::ChooseProjAppSvc { existing }, Answer::Pick(code)) => {
                let code = pick(Category::ProjAppSvc, existing, &code)?;
                self.selections.set(Category::ProjAppSvc, code);
                None
            }
            (Decision::ChooseProjAppSvc { .. }, Answer::CreateNew(name)) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(FlowError::EmptyValue);
                }
                Some(Decision::ConfirmShortCode {
                    name: name.to_string(),
                    suggested: suggest_short_code(name),
                })
            }
            (Decision::ConfirmShortCode { name, suggested }, Answer::AcceptSuggested) => {
                let code = validate_short_code(suggested)?;
                self.naming.register_project_app_service(name, &code)?;
                self.selections.set(Category::ProjAppSvc, code);
                None
            }
            (Decision::ConfirmShortCode { name, .. }, Answer::Override(code)) => {
                let code = validate_short_code(&code)?;
                self.naming.register_project_app_service(name, &code)?;
                self.selections.set(Category::ProjAppSvc, code);
                None
            }
            (Decision::EnterManually { category }, Answer::Text(value)) => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(FlowError::EmptyValue);
                }
                self.selections.set(*category, value);
                None
            }
            (current, _) => return Err(FlowError::UnexpectedAnswer(current.label())),
        };

        match next {
            Some(decision) => self.current = decision,
            None => self.advance(),
        }

        Ok(())
    }

    fn advance(&mut self) {
        self.current = match self.steps.pop_front() {
            Some(Step::Required(category)) => self.decision_for(category),
            Some(Step::Optional(category)) => Decision::IncludeOptional { category },
            None => Decision::Complete,
        };
    }

    fn decision_for(&self, category: Category) -> Decision {
        let options = self.naming.fetch_component_options(category);

        match category {
            Category::ProjAppSvc => Decision::ChooseProjAppSvc { existing: options },
            _ if options.is_empty() => Decision::EnterManually { category },
            Category::Location => {
                let shortlist: Vec<ComponentOption> = US_LOCATIONS
                    .iter()
                    .filter_map(|wanted| {
                        options
                            .iter()
                            .find(|option| same_region(&option.name, wanted))
                            .cloned()
                    })
                    .collect();

                if shortlist.is_empty() {
                    Decision::ChooseOption { category, options }
                } else {
                    Decision::ChooseLocation {
                        shortlist,
                        all: options,
                    }
                }
            }
            _ => Decision::ChooseOption { category, options },
        }
    }
}

fn pick(category: Category, options: &[ComponentOption], code: &str) -> FlowResult<String> {
    options
        .iter()
        .find(|option| option.short_name.eq_ignore_ascii_case(code.trim()))
        .map(|option| option.short_name.clone())
        .ok_or_else(|| FlowError::UnknownOption {
            category,
            code: code.to_string(),
        })
}

/// "East US", "eastus" and "east us" name the same region.
fn same_region(name: &str, wanted: &str) -> bool {
    let name = name.chars().filter(|c| !c.is_whitespace());
    let wanted = wanted.chars().filter(|c| !c.is_whitespace());
    name.map(|c| c.to_ascii_lowercase())
        .eq(wanted.map(|c| c.to_ascii_lowercase()))
}
