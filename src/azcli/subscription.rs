use super::{
    error::ResultAzCli,
    run::{AzCli, AzRunner},
};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub name: String,
    #[serde(rename = "tenantId", default)]
    pub tenant_id: String,
    #[serde(rename = "isDefault", default)]
    pub is_default: bool,
    #[serde(default)]
    pub state: String,
}

impl fmt::Display for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

impl<R: AzRunner> AzCli<R> {
    pub fn check_login(&self) -> ResultAzCli<()> {
        self.az::<Value>(&["account", "show", "-o", "json"])
            .map(|_| ())
    }

    pub fn list_subscriptions(&self) -> ResultAzCli<Vec<Subscription>> {
        self.az_list(&["account", "list", "-o", "json"])
    }

    /// Makes `subscription` the active one for the commands that follow.
    pub fn set_subscription(&self, subscription: &str) -> ResultAzCli<()> {
        self.az::<Value>(&["account", "set", "--subscription", subscription])
            .map(|_| ())
    }
}
