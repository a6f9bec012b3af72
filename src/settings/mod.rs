mod error;
mod model;
mod store;

pub use error::*;
pub use model::*;
pub use store::default_path;

use std::path::Path;

pub const ENV_CLIENT_ID: &str = "AZURE_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "AZURE_CLIENT_SECRET";
pub const ENV_API_KEY: &str = "AZURE_NAMING_TOOL_API_KEY";
pub const ENV_BASE_URL: &str = "ARMOVER_BASE_URL";
pub const ENV_TENANT_ID: &str = "ARMOVER_TENANT_ID";
pub const ENV_RESOURCE_ID: &str = "ARMOVER_RESOURCE_ID";
pub const ENV_AUTHORITY_HOST: &str = "ARMOVER_AUTHORITY_HOST";

impl Settings {
    /// Settings file (explicit path or the per-user default) overlaid with
    /// the process environment.
    pub fn load(path: Option<&Path>) -> SettingsResult<Self> {
        let settings = store::load(path)?;
        Ok(settings.with_env(|key| std::env::var(key).ok()))
    }

    /// Overlays values found through `lookup`. Blank values are ignored.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(value) = get(ENV_CLIENT_ID) {
            self.client_id = Some(value);
        }
        if let Some(value) = get(ENV_CLIENT_SECRET) {
            self.client_secret = Some(value);
        }
        if let Some(value) = get(ENV_API_KEY) {
            self.api_key = Some(value);
        }
        if let Some(value) = get(ENV_BASE_URL) {
            self.base_url = value;
        }
        if let Some(value) = get(ENV_TENANT_ID) {
            self.tenant_id = value;
        }
        if let Some(value) = get(ENV_RESOURCE_ID) {
            self.resource_id = value;
        }
        if let Some(value) = get(ENV_AUTHORITY_HOST) {
            self.authority_host = value;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn environment_overrides_defaults() {
        let settings = Settings::default().with_env(env(&[
            (ENV_CLIENT_ID, "client"),
            (ENV_CLIENT_SECRET, "secret"),
            (ENV_API_KEY, "key"),
            (ENV_BASE_URL, "http://localhost:9000/api"),
        ]));

        assert_eq!(settings.client_id.as_deref(), Some("client"));
        assert_eq!(settings.client_secret.as_deref(), Some("secret"));
        assert_eq!(settings.api_key.as_deref(), Some("key"));
        assert_eq!(settings.base_url, "http://localhost:9000/api");
        assert_eq!(settings.tenant_id, DEFAULT_TENANT_ID);
    }

    #[test]
    fn blank_environment_values_are_ignored() {
        let mut base = Settings::default();
        base.api_key = Some("from-file".into());

        let settings = base.with_env(env(&[(ENV_API_KEY, "  "), (ENV_BASE_URL, "")]));

        assert_eq!(settings.api_key.as_deref(), Some("from-file"));
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }
}
