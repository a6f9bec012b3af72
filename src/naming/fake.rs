use super::error::{NamingError, NamingResult};
use super::model::{
    Category, ComponentOption, ComponentSelection, GeneratedName, ResourceTypeDescriptor,
};
use super::service::NamingService;
use serde_json::json;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

/// Scripted naming service for unit tests.
#[derive(Default)]
pub struct FakeNaming {
    types: Vec<ResourceTypeDescriptor>,
    options: HashMap<Category, Vec<ComponentOption>>,
    responses: RefCell<VecDeque<GeneratedName>>,
    requests: RefCell<Vec<(String, ComponentSelection)>>,
    registered: RefCell<Vec<(String, String)>>,
    reject_registration: bool,
}

impl FakeNaming {
    pub fn descriptor(
        short_name: &str,
        optional: &str,
        exclude: &str,
        pattern: Option<&str>,
    ) -> ResourceTypeDescriptor {
        serde_json::from_value(json!({
            "shortName": short_name,
            "optional": optional,
            "exclude": exclude,
            "regx": pattern,
        }))
        .unwrap()
    }

    pub fn with_type(mut self, descriptor: ResourceTypeDescriptor) -> Self {
        self.types.push(descriptor);
        self
    }

    pub fn with_options(mut self, category: Category, options: &[(&str, &str)]) -> Self {
        self.options.insert(
            category,
            options
                .iter()
                .map(|(name, short)| ComponentOption::new(*name, *short))
                .collect(),
        );
        self
    }

    pub fn with_responses(self, responses: impl IntoIterator<Item = GeneratedName>) -> Self {
        self.responses.borrow_mut().extend(responses);
        self
    }

    pub fn rejecting_registration(mut self) -> Self {
        self.reject_registration = true;
        self
    }

    pub fn requests(&self) -> Vec<(String, ComponentSelection)> {
        self.requests.borrow().clone()
    }

    pub fn registered(&self) -> Vec<(String, String)> {
        self.registered.borrow().clone()
    }
}

impl NamingService for FakeNaming {
    fn fetch_resource_types(&self) -> NamingResult<Vec<ResourceTypeDescriptor>> {
        Ok(self.types.clone())
    }

    fn fetch_component_options(&self, category: Category) -> Vec<ComponentOption> {
        self.options.get(&category).cloned().unwrap_or_default()
    }

    fn submit_name_request(
        &self,
        resource_type: &str,
        selections: &ComponentSelection,
    ) -> GeneratedName {
        self.requests
            .borrow_mut()
            .push((resource_type.to_string(), selections.clone()));
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(GeneratedName::Failure)
    }

    fn register_project_app_service(&self, name: &str, short_name: &str) -> NamingResult<()> {
        if self.reject_registration {
            return Err(NamingError::Status {
                status: 409,
                body: "conflict".into(),
            });
        }
        self.registered
            .borrow_mut()
            .push((name.to_string(), short_name.to_string()));
        Ok(())
    }
}
