use super::auth::{ClientCredentials, TokenSource};
use super::error::{NamingError, NamingResult};
use super::model::{
    Category, ComponentOption, ComponentSelection, GeneratedName, NameRequest, NameResponse,
    ProjAppSvcRequest, ResourceTypeDescriptor,
};
use super::service::NamingService;
use crate::settings::{ENV_API_KEY, Settings};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::ACCEPT;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

const MAX_LOG_BODY_LENGTH: usize = 500;

const RESOURCE_TYPES: &str = "ResourceTypes";
const PROJ_APP_SVCS: &str = "ResourceProjAppSvcs";
const REQUEST_NAME: &str = "ResourceNamingRequests/RequestName";

fn truncate_for_log(body: &str) -> String {
    if body.chars().count() > MAX_LOG_BODY_LENGTH {
        let head: String = body.chars().take(MAX_LOG_BODY_LENGTH).collect();
        format!("{head}... [truncated, {} bytes total]", body.len())
    } else {
        body.to_string()
    }
}

/// HTTP client for the naming REST API.
pub struct NamingClient<T = ClientCredentials> {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    created_by: String,
    tokens: T,
}

impl NamingClient<ClientCredentials> {
    pub fn new(settings: &Settings) -> NamingResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .user_agent(concat!("armover/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let tokens = ClientCredentials::new(http.clone(), settings);
        Ok(Self::with_tokens(http, settings, tokens))
    }
}

impl<T: TokenSource> NamingClient<T> {
    pub fn with_tokens(http: Client, settings: &Settings, tokens: T) -> Self {
        Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            created_by: settings.created_by.clone(),
            tokens,
        }
    }

    fn request(&self, method: Method, endpoint: &str) -> NamingResult<RequestBuilder> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(NamingError::MissingCredential(ENV_API_KEY))?;
        let token = self.tokens.access_token()?;
        let url = format!("{}/{}", self.base_url, endpoint);

        tracing::debug!("{} {}", method, url);

        Ok(self
            .http
            .request(method, url)
            .bearer_auth(token)
            .header("APIKey", api_key)
            .header(ACCEPT, "application/json"))
    }

    fn execute(&self, request: RequestBuilder) -> NamingResult<(StatusCode, String)> {
        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;

        tracing::debug!("response {}: {}", status, truncate_for_log(&body));

        Ok((status, body))
    }

    fn get_json<R: DeserializeOwned>(&self, endpoint: &str) -> NamingResult<R> {
        let (status, body) = self.execute(self.request(Method::GET, endpoint)?)?;

        if !status.is_success() {
            return Err(NamingError::Status {
                status: status.as_u16(),
                body: truncate_for_log(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    fn post<B: Serialize>(&self, endpoint: &str, body: &B) -> NamingResult<(StatusCode, String)> {
        let request = self.request(Method::POST, endpoint)?.json(body);
        self.execute(request)
    }
}

impl<T: TokenSource> NamingService for NamingClient<T> {
    fn fetch_resource_types(&self) -> NamingResult<Vec<ResourceTypeDescriptor>> {
        self.get_json(RESOURCE_TYPES)
            .inspect_err(|err| tracing::error!("failed to fetch resource types: {err}"))
    }

    fn fetch_component_options(&self, category: Category) -> Vec<ComponentOption> {
        let items = match self.get_json::<Value>(&category.options_endpoint()) {
            Ok(Value::Array(items)) => items,
            Ok(other) => {
                tracing::warn!(
                    "unexpected response shape for {}: {}",
                    category.wire_name(),
                    truncate_for_log(&other.to_string())
                );
                return Vec::new();
            }
            Err(err) => {
                tracing::warn!("failed to retrieve options for {}: {err}", category.wire_name());
                return Vec::new();
            }
        };

        if items.is_empty() {
            tracing::info!("naming service has no options for {}", category.wire_name());
        }

        items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<ComponentOption>(item) {
                Ok(option) if !option.short_name.is_empty() => Some(option),
                Ok(option) => {
                    tracing::debug!("skipping option '{}' without short name", option.name);
                    None
                }
                Err(err) => {
                    tracing::debug!("skipping malformed option: {err}");
                    None
                }
            })
            .collect()
    }

    fn submit_name_request(
        &self,
        resource_type: &str,
        selections: &ComponentSelection,
    ) -> GeneratedName {
        let request = NameRequest::new(resource_type, selections, &self.created_by);

        let (status, body) = match self.post(REQUEST_NAME, &request) {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("name request failed: {err}");
                return GeneratedName::Failure;
            }
        };

        // Rejections such as duplicates come back as 400 with the same body.
        if !status.is_success() && status != StatusCode::BAD_REQUEST {
            tracing::warn!("name request returned status {status}");
            return GeneratedName::Failure;
        }

        match serde_json::from_str::<NameResponse>(&body) {
            Ok(response) => GeneratedName::classify(&response),
            Err(err) => {
                tracing::warn!("unexpected name response: {err}");
                GeneratedName::Failure
            }
        }
    }

    fn register_project_app_service(&self, name: &str, short_name: &str) -> NamingResult<()> {
        let (status, body) = self.post(PROJ_APP_SVCS, &ProjAppSvcRequest { name, short_name })?;

        if !status.is_success() {
            return Err(NamingError::Status {
                status: status.as_u16(),
                body: truncate_for_log(&body),
            });
        }

        tracing::info!("registered project/app/service {name} ({short_name})");
        Ok(())
    }
}
