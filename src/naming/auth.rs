use super::error::{NamingError, NamingResult};
use crate::settings::{ENV_CLIENT_ID, ENV_CLIENT_SECRET, Settings};
use reqwest::blocking::Client;
use serde::Deserialize;

/// Produces a bearer token for the naming service.
pub trait TokenSource {
    fn access_token(&self) -> NamingResult<String>;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Default, Deserialize)]
struct TokenErrorResponse {
    #[serde(default)]
    error: String,
    #[serde(default)]
    error_description: String,
}

/// OAuth2 client-credentials exchange. A new token is requested on every
/// call; nothing is cached.
pub struct ClientCredentials {
    http: Client,
    token_url: String,
    scope: String,
    client_id: Option<String>,
    client_secret: Option<String>,
}

impl ClientCredentials {
    pub fn new(http: Client, settings: &Settings) -> Self {
        Self {
            http,
            token_url: settings.token_url(),
            scope: settings.scope(),
            client_id: settings.client_id.clone(),
            client_secret: settings.client_secret.clone(),
        }
    }
}

impl TokenSource for ClientCredentials {
    fn access_token(&self) -> NamingResult<String> {
        let client_id = self
            .client_id
            .as_deref()
            .ok_or(NamingError::MissingCredential(ENV_CLIENT_ID))?;
        let client_secret = self
            .client_secret
            .as_deref()
            .ok_or(NamingError::MissingCredential(ENV_CLIENT_SECRET))?;

        tracing::debug!("requesting token from {}", self.token_url);

        let response = self
            .http
            .post(&self.token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", client_id),
                ("client_secret", client_secret),
                ("scope", self.scope.as_str()),
            ])
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            let rejected: TokenErrorResponse = serde_json::from_str(&body).unwrap_or_default();
            tracing::error!(
                "token request failed with {}: {} {}",
                status,
                rejected.error,
                rejected.error_description
            );
            return Err(NamingError::Token {
                error: rejected.error,
                description: rejected.error_description,
            });
        }

        let token: TokenResponse = serde_json::from_str(&body)?;
        Ok(token.access_token)
    }
}
