use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://wapp-azurenamingtool-wus.azurewebsites.net/api";
pub const DEFAULT_TENANT_ID: &str = "cbca83b8-a971-43a8-9ab3-ce2599ff12ea";
pub const DEFAULT_RESOURCE_ID: &str = "41aee129-4726-4cc1-b8de-374db5917da1";
pub const DEFAULT_AUTHORITY_HOST: &str = "https://login.microsoftonline.com";
pub const DEFAULT_CREATED_BY: &str = "ARMover";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub base_url: String,
    pub tenant_id: String,
    pub resource_id: String,
    pub authority_host: String,
    pub created_by: String,
    pub request_timeout_secs: u64,
    pub function_runtime: String,
    pub function_os_type: String,
    pub debug: bool,
    #[serde(skip_serializing)]
    pub client_id: Option<String>,
    #[serde(skip_serializing)]
    pub client_secret: Option<String>,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            tenant_id: DEFAULT_TENANT_ID.into(),
            resource_id: DEFAULT_RESOURCE_ID.into(),
            authority_host: DEFAULT_AUTHORITY_HOST.into(),
            created_by: DEFAULT_CREATED_BY.into(),
            request_timeout_secs: 30,
            function_runtime: "python".into(),
            function_os_type: "Linux".into(),
            debug: false,
            client_id: None,
            client_secret: None,
            api_key: None,
        }
    }
}

impl Settings {
    pub fn token_url(&self) -> String {
        format!(
            "{}/{}/oauth2/v2.0/token",
            self.authority_host.trim_end_matches('/'),
            self.tenant_id
        )
    }

    pub fn scope(&self) -> String {
        format!("{}/.default", self.resource_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let settings: Settings =
            serde_yaml::from_str("base_url: http://localhost/api\ndebug: true\n").unwrap();

        assert_eq!(settings.base_url, "http://localhost/api");
        assert!(settings.debug);
        assert_eq!(settings.created_by, DEFAULT_CREATED_BY);
        assert_eq!(settings.request_timeout_secs, 30);
    }

    #[test]
    fn token_url_joins_authority_and_tenant() {
        let settings = Settings {
            authority_host: "http://127.0.0.1:8080/".into(),
            tenant_id: "tenant".into(),
            ..Settings::default()
        };

        assert_eq!(
            settings.token_url(),
            "http://127.0.0.1:8080/tenant/oauth2/v2.0/token"
        );
        assert_eq!(settings.scope(), format!("{DEFAULT_RESOURCE_ID}/.default"));
    }

    #[test]
    fn secrets_are_not_serialized() {
        let settings = Settings {
            client_secret: Some("hunter2".into()),
            ..Settings::default()
        };

        let yaml = serde_yaml::to_string(&settings).unwrap();
        assert!(!yaml.contains("hunter2"));
    }
}
