use super::{
    error::{ErrorAzCli, MoveError, MoveStep},
    functionapp::{FunctionApp, FunctionAppSpec},
    run::{AzCli, AzRunner},
};

#[derive(Debug, Clone)]
pub struct MoveRequest {
    pub source_subscription: String,
    pub target_subscription: String,
    pub resource_group: String,
    pub name: String,
}

#[derive(Debug)]
pub enum SourceRemoval {
    Deleted,
    /// The app now exists in both subscriptions.
    Failed(ErrorAzCli),
}

#[derive(Debug)]
pub struct MoveReport {
    pub created: FunctionApp,
    pub removal: SourceRemoval,
}

impl<R: AzRunner> AzCli<R> {
    /// Recreates the app in the target subscription under the same group
    /// name and location, then deletes the original. The source is only
    /// touched once the target app exists; a failed delete is reported, not
    /// rolled back.
    pub fn move_functionapp(&self, request: &MoveRequest) -> Result<MoveReport, MoveError> {
        let step = |step: MoveStep| move |source: ErrorAzCli| MoveError::Step { step, source };

        tracing::info!(
            "moving {} from {} to {}",
            request.name,
            request.source_subscription,
            request.target_subscription
        );

        self.set_subscription(&request.source_subscription)
            .map_err(step(MoveStep::SelectSource))?;

        let source = self
            .show_functionapp(&request.resource_group, &request.name)
            .map_err(step(MoveStep::ReadSource))?
            .ok_or_else(|| MoveError::SourceNotFound(request.name.clone()))?;

        self.set_subscription(&request.target_subscription)
            .map_err(step(MoveStep::SelectTarget))?;

        // Fails when the group already exists elsewhere; creation below decides.
        if let Err(err) = self.create_group(&request.resource_group, &source.location) {
            tracing::warn!(
                "could not create resource group {}, continuing: {err}",
                request.resource_group
            );
        }

        let spec = FunctionAppSpec {
            name: request.name.clone(),
            resource_group: request.resource_group.clone(),
            location: source.location.clone(),
        };

        let created = self
            .create_functionapp_here(&spec)
            .map_err(step(MoveStep::CreateTarget))?
            .ok_or_else(|| MoveError::NotCreated(request.name.clone()))?;

        tracing::info!("{} created in {}", request.name, request.target_subscription);

        let removal = match self
            .set_subscription(&request.source_subscription)
            .and_then(|_| self.delete_functionapp_here(&request.resource_group, &request.name))
        {
            Ok(()) => SourceRemoval::Deleted,
            Err(err) => {
                tracing::error!(
                    "{} exists in both subscriptions, deleting the original failed: {err}",
                    request.name
                );
                SourceRemoval::Failed(err)
            }
        };

        Ok(MoveReport { created, removal })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::azcli::fake::{FakeRunner, failure, not_found};

    const SOURCE_APP: &[u8] =
        br#"{"name": "func-hr", "location": "westus", "resourceGroup": "rg-hr", "state": "Running"}"#;

    fn request() -> MoveRequest {
        MoveRequest {
            source_subscription: "sub-src".into(),
            target_subscription: "sub-dst".into(),
            resource_group: "rg-hr".into(),
            name: "func-hr".into(),
        }
    }

    fn has_delete(calls: &[String]) -> bool {
        calls.iter().any(|call| call.starts_with("functionapp delete"))
    }

    #[test]
    fn moves_by_recreating_then_deleting() {
        let az = AzCli::new(FakeRunner::new(|args| match args {
            ["functionapp", "show", ..] | ["functionapp", "create", ..] => Ok(SOURCE_APP.to_vec()),
            ["group", "create", ..] => Ok(br#"{"name": "rg-hr", "location": "westus"}"#.to_vec()),
            _ => Ok(Vec::new()),
        }));

        let report = az.move_functionapp(&request()).unwrap();

        assert_eq!(report.created.name, "func-hr");
        assert!(matches!(report.removal, SourceRemoval::Deleted));
        assert_eq!(
            az.runner().calls(),
            vec![
                "account set --subscription sub-src",
                "functionapp show --name func-hr --resource-group rg-hr -o json",
                "account set --subscription sub-dst",
                "group create --name rg-hr --location westus -o json",
                "functionapp create --name func-hr --resource-group rg-hr \
                 --consumption-plan-location westus --runtime python --os-type Linux -o json",
                "account set --subscription sub-src",
                "functionapp delete --name func-hr --resource-group rg-hr",
            ]
        );
    }

    #[test]
    fn failed_creation_never_deletes_source() {
        let az = AzCli::new(FakeRunner::new(|args| match args {
            ["functionapp", "show", ..] => Ok(SOURCE_APP.to_vec()),
            ["functionapp", "create", ..] => Err(failure("quota exceeded")),
            _ => Ok(Vec::new()),
        }));

        let result = az.move_functionapp(&request());

        assert!(matches!(
            result,
            Err(MoveError::Step {
                step: MoveStep::CreateTarget,
                ..
            })
        ));
        assert!(!has_delete(&az.runner().calls()));
    }

    #[test]
    fn empty_creation_output_never_deletes_source() {
        let az = AzCli::new(FakeRunner::new(|args| match args {
            ["functionapp", "show", ..] => Ok(SOURCE_APP.to_vec()),
            _ => Ok(Vec::new()),
        }));

        let result = az.move_functionapp(&request());

        assert!(matches!(result, Err(MoveError::NotCreated(name)) if name == "func-hr"));
        assert!(!has_delete(&az.runner().calls()));
    }

    #[test]
    fn failed_delete_leaves_both_copies_and_reports_it() {
        let az = AzCli::new(FakeRunner::new(|args| match args {
            ["functionapp", "show", ..] | ["functionapp", "create", ..] => Ok(SOURCE_APP.to_vec()),
            ["functionapp", "delete", ..] => Err(failure("locked")),
            _ => Ok(Vec::new()),
        }));

        let report = az.move_functionapp(&request()).unwrap();

        assert!(matches!(report.removal, SourceRemoval::Failed(_)));
        let calls = az.runner().calls();
        assert_eq!(calls[calls.len() - 2], "account set --subscription sub-src");
        assert!(has_delete(&calls));
    }

    #[test]
    fn existing_group_in_other_location_still_creates_app() {
        let az = AzCli::new(FakeRunner::new(|args| match args {
            ["functionapp", "show", ..] | ["functionapp", "create", ..] => Ok(SOURCE_APP.to_vec()),
            ["group", "create", ..] => Err(failure(
                "(InvalidResourceGroupLocation) Invalid resource group location 'westus'. \
                 The Resource group already exists in location 'eastus'.",
            )),
            _ => Ok(Vec::new()),
        }));

        let report = az.move_functionapp(&request()).unwrap();

        assert_eq!(report.created.name, "func-hr");
        assert!(matches!(report.removal, SourceRemoval::Deleted));
        let calls = az.runner().calls();
        assert!(calls.iter().any(|call| call.starts_with("functionapp create")));
        assert!(has_delete(&calls));
    }

    #[test]
    fn missing_source_stops_before_target() {
        let az = AzCli::new(FakeRunner::new(|args| match args {
            ["functionapp", "show", ..] => Err(not_found("func-hr")),
            _ => Ok(Vec::new()),
        }));

        let result = az.move_functionapp(&request());

        assert!(matches!(result, Err(MoveError::SourceNotFound(_))));
        assert_eq!(az.runner().calls().len(), 2);
    }
}
