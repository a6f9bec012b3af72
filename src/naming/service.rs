use super::error::NamingResult;
use super::model::{
    Category, ComponentOption, ComponentSelection, GeneratedName, ResolvedComponents,
    ResourceTypeDescriptor,
};

/// Operations offered by the naming service.
pub trait NamingService {
    fn fetch_resource_types(&self) -> NamingResult<Vec<ResourceTypeDescriptor>>;

    /// Never fails: an unreachable service and an empty category both
    /// yield no options.
    fn fetch_component_options(&self, category: Category) -> Vec<ComponentOption>;

    fn submit_name_request(
        &self,
        resource_type: &str,
        selections: &ComponentSelection,
    ) -> GeneratedName;

    fn register_project_app_service(&self, name: &str, short_name: &str) -> NamingResult<()>;

    fn resolve_components_for_type(&self, short_name: &str) -> NamingResult<ResolvedComponents> {
        let types = self.fetch_resource_types()?;
        ResolvedComponents::resolve(types, short_name)
    }
}
