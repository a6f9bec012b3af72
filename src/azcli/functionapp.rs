use super::{
    error::ResultAzCli,
    run::{AzCli, AzRunner},
};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Deserialize)]
pub struct FunctionApp {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "resourceGroup", default)]
    pub resource_group: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(rename = "defaultHostName", default)]
    pub default_host_name: Option<String>,
}

impl fmt::Display for FunctionApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.resource_group, self.location)
    }
}

#[derive(Debug, Clone)]
pub struct FunctionAppSpec {
    pub name: String,
    pub resource_group: String,
    pub location: String,
}

impl<R: AzRunner> AzCli<R> {
    /// Looks the app up in the active subscription.
    pub fn show_functionapp(&self, group: &str, name: &str) -> ResultAzCli<Option<FunctionApp>> {
        match self.az(&[
            "functionapp",
            "show",
            "--name",
            name,
            "--resource-group",
            group,
            "-o",
            "json",
        ]) {
            Err(err) if err.is_not_found() => Ok(None),
            other => other,
        }
    }

    pub fn list_functionapps(
        &self,
        subscription: &str,
        group: Option<&str>,
    ) -> ResultAzCli<Vec<FunctionApp>> {
        self.set_subscription(subscription)?;

        match group {
            Some(group) => self.az_list(&[
                "functionapp",
                "list",
                "--resource-group",
                group,
                "-o",
                "json",
            ]),
            None => self.az_list(&["functionapp", "list", "-o", "json"]),
        }
    }

    pub fn create_functionapp(
        &self,
        subscription: &str,
        spec: &FunctionAppSpec,
    ) -> ResultAzCli<Option<FunctionApp>> {
        self.set_subscription(subscription)?;
        self.create_functionapp_here(spec)
    }

    pub fn delete_functionapp(&self, subscription: &str, group: &str, name: &str) -> ResultAzCli<()> {
        self.set_subscription(subscription)?;
        self.delete_functionapp_here(group, name)
    }

    pub(super) fn create_functionapp_here(
        &self,
        spec: &FunctionAppSpec,
    ) -> ResultAzCli<Option<FunctionApp>> {
        let (runtime, os_type) = self.function_runtime();

        self.az(&[
            "functionapp",
            "create",
            "--name",
            &spec.name,
            "--resource-group",
            &spec.resource_group,
            "--consumption-plan-location",
            &spec.location,
            "--runtime",
            runtime,
            "--os-type",
            os_type,
            "-o",
            "json",
        ])
    }

    pub(super) fn delete_functionapp_here(&self, group: &str, name: &str) -> ResultAzCli<()> {
        self.az::<Value>(&[
            "functionapp",
            "delete",
            "--name",
            name,
            "--resource-group",
            group,
        ])
        .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::azcli::fake::{FakeRunner, not_found};

    #[test]
    fn listing_switches_subscription_first() {
        let az = AzCli::new(FakeRunner::new(|args| match args {
            ["functionapp", "list", ..] => Ok(
                br#"[{"name": "func-a", "location": "westus", "resourceGroup": "rg-a"}]"#.to_vec(),
            ),
            _ => Ok(Vec::new()),
        }));

        let apps = az.list_functionapps("sub-1", Some("rg-a")).unwrap();

        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].resource_group, "rg-a");
        assert_eq!(
            az.runner().calls(),
            vec![
                "account set --subscription sub-1",
                "functionapp list --resource-group rg-a -o json",
            ]
        );
    }

    #[test]
    fn empty_list_output_is_empty_vec() {
        let az = AzCli::new(FakeRunner::new(|_| Ok(Vec::new())));
        assert!(az.list_functionapps("sub-1", None).unwrap().is_empty());
    }

    #[test]
    fn create_uses_configured_runtime() {
        let az = AzCli::new(FakeRunner::new(|args| match args {
            ["functionapp", "create", ..] => Ok(br#"{"name": "func-b", "location": "eastus"}"#.to_vec()),
            _ => Ok(Vec::new()),
        }))
        .with_function_runtime("node", "Windows");

        let spec = FunctionAppSpec {
            name: "func-b".into(),
            resource_group: "rg-b".into(),
            location: "eastus".into(),
        };
        let created = az.create_functionapp("sub-2", &spec).unwrap();

        assert_eq!(created.map(|app| app.name).as_deref(), Some("func-b"));
        assert_eq!(
            az.runner().calls()[1],
            "functionapp create --name func-b --resource-group rg-b \
             --consumption-plan-location eastus --runtime node --os-type Windows -o json"
        );
    }

    #[test]
    fn show_treats_missing_app_as_none() {
        let az = AzCli::new(FakeRunner::new(|_| Err(not_found("gone"))));

        assert!(az.show_functionapp("rg", "gone").unwrap().is_none());
    }
}
