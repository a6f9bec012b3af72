use super::{
    error::ResultAzCli,
    run::{AzCli, AzRunner},
};
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceGroup {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: String,
}

impl fmt::Display for ResourceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.location)
    }
}

impl<R: AzRunner> AzCli<R> {
    pub fn list_groups(&self, subscription: &str) -> ResultAzCli<Vec<ResourceGroup>> {
        self.set_subscription(subscription)?;
        self.az_list(&["group", "list", "-o", "json"])
    }

    /// Creates the group in the active subscription, or leaves an existing
    /// one as it is.
    pub fn create_group(&self, name: &str, location: &str) -> ResultAzCli<Option<ResourceGroup>> {
        self.az(&[
            "group",
            "create",
            "--name",
            name,
            "--location",
            location,
            "-o",
            "json",
        ])
    }
}
