use super::model::{Category, ComponentSelection, GeneratedName, ResourceTypeDescriptor};
use super::service::NamingService;
use regex::Regex;

pub const MAX_ATTEMPTS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameOutcome {
    /// The name matches the resource type's pattern.
    Valid { name: String, attempt: u32 },
    /// Generated, but no pattern or no match. Still usable.
    Unvalidated {
        name: String,
        attempt: u32,
        pattern: Option<String>,
        valid_text: Option<String>,
        invalid_text: Option<String>,
    },
    Exhausted { attempts: u32 },
}

impl NameOutcome {
    pub fn name(&self) -> Option<&str> {
        match self {
            NameOutcome::Valid { name, .. } | NameOutcome::Unvalidated { name, .. } => Some(name),
            NameOutcome::Exhausted { .. } => None,
        }
    }
}

/// Requests a name, bumping the Instance component on every collision or
/// failure until a name comes back or the attempts run out.
pub fn generate_name<S>(
    naming: &S,
    descriptor: &ResourceTypeDescriptor,
    selections: &ComponentSelection,
) -> NameOutcome
where
    S: NamingService + ?Sized,
{
    let mut selections = selections.clone();

    for attempt in 1..=MAX_ATTEMPTS {
        selections.set(Category::Instance, attempt.to_string());

        match naming.submit_name_request(&descriptor.short_name, &selections) {
            GeneratedName::Success(name) => {
                tracing::info!("generated {name} on attempt {attempt}");
                return validate(name, attempt, descriptor);
            }
            GeneratedName::Collision => {
                tracing::info!("attempt {attempt}: name already exists");
            }
            GeneratedName::Failure => {
                tracing::warn!("attempt {attempt}: name request failed");
            }
        }
    }

    tracing::warn!(
        "no name produced for {} after {MAX_ATTEMPTS} attempts",
        descriptor.short_name
    );
    NameOutcome::Exhausted {
        attempts: MAX_ATTEMPTS,
    }
}

fn validate(name: String, attempt: u32, descriptor: &ResourceTypeDescriptor) -> NameOutcome {
    let pattern = descriptor
        .pattern
        .as_deref()
        .filter(|pattern| !pattern.trim().is_empty());

    // The whole name has to match, not just a substring.
    let matched = match pattern.map(|pattern| Regex::new(&format!("^(?:{pattern})$"))) {
        Some(Ok(regex)) => regex.is_match(&name),
        Some(Err(err)) => {
            tracing::warn!("invalid validation pattern for {}: {err}", descriptor.short_name);
            false
        }
        None => false,
    };

    if matched {
        return NameOutcome::Valid { name, attempt };
    }

    NameOutcome::Unvalidated {
        name,
        attempt,
        pattern: pattern.map(str::to_string),
        valid_text: descriptor.valid_text.clone(),
        invalid_text: descriptor.invalid_text.clone(),
    }
}
