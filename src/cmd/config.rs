use crate::settings::{self, Settings};
use crate::{logging, ui};
use tabled::Tabled;

#[derive(Tabled)]
struct SettingRow {
    #[tabled(rename = "Setting")]
    key: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

fn secret(value: &Option<String>) -> String {
    match value {
        Some(_) => "(set)".into(),
        None => "(missing)".into(),
    }
}

fn rows(settings: &Settings) -> Vec<SettingRow> {
    let row = |key, value: String| SettingRow { key, value };

    vec![
        row("base_url", settings.base_url.clone()),
        row("tenant_id", settings.tenant_id.clone()),
        row("resource_id", settings.resource_id.clone()),
        row("authority_host", settings.authority_host.clone()),
        row("created_by", settings.created_by.clone()),
        row("request_timeout_secs", settings.request_timeout_secs.to_string()),
        row("function_runtime", settings.function_runtime.clone()),
        row("function_os_type", settings.function_os_type.clone()),
        row("debug", settings.debug.to_string()),
        row(settings::ENV_CLIENT_ID, secret(&settings.client_id)),
        row(settings::ENV_CLIENT_SECRET, secret(&settings.client_secret)),
        row(settings::ENV_API_KEY, secret(&settings.api_key)),
    ]
}

pub fn handle(settings: &Settings) {
    ui::table(rows(settings));

    if let Ok(path) = settings::default_path() {
        ui::note(format!("Settings file: {}", path.display()));
    }
    if let Some(path) = logging::log_path() {
        ui::note(format!("Log file: {}", path.display()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secrets_are_masked() {
        let settings = Settings {
            client_secret: Some("hunter2".into()),
            ..Settings::default()
        };

        let rows = rows(&settings);

        assert!(rows.iter().all(|row| row.value != "hunter2"));
        let secret_row = rows
            .iter()
            .find(|row| row.key == settings::ENV_CLIENT_SECRET)
            .unwrap();
        assert_eq!(secret_row.value, "(set)");
        let key_row = rows.iter().find(|row| row.key == settings::ENV_API_KEY).unwrap();
        assert_eq!(key_row.value, "(missing)");
    }
}
