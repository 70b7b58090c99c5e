use url::Url;

use super::types::Token;
use crate::api::client::parse_response;
use crate::api::{Client, HootsuiteError, Payload, Result};

pub const AUTHORIZE_ENDPOINT: &str = "auth/oauth/v2/authorize";
pub const TOKEN_ENDPOINT: &str = "auth/oauth/v2/token";

impl Client {
    /// Builds the consent-screen URL for the authorization-code flow.
    ///
    /// `redirect_uri` must exactly match one registered for the app. Scope
    /// items are joined with single spaces. No request is made.
    pub fn authorization_url<S: AsRef<str>>(&self, redirect_uri: &str, scope: &[S]) -> Result<Url> {
        let scope = scope
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        let url = Url::parse_with_params(
            &self.url(AUTHORIZE_ENDPOINT),
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", redirect_uri),
                ("scope", scope.as_str()),
                ("response_type", "code"),
            ],
        )?;
        Ok(url)
    }

    /// Exchanges a one-time authorization code for an access/refresh token pair.
    ///
    /// The returned token is not stored; pass it to [`Client::set_token`].
    pub async fn exchange_code(&self, redirect_uri: &str, code: &str) -> Result<Token> {
        self.request_token(&[
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("code", code),
            ("grant_type", "authorization_code"),
            ("redirect_uri", redirect_uri),
        ])
        .await
    }

    /// Obtains a new access token from a long-lived refresh token.
    pub async fn refresh_token(&self, redirect_uri: &str, refresh_token: &str) -> Result<Token> {
        self.request_token(&[
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("redirect_uri", redirect_uri),
            ("refresh_token", refresh_token),
            ("grant_type", "refresh_token"),
        ])
        .await
    }

    async fn request_token(&self, form: &[(&str, &str)]) -> Result<Token> {
        let url = self.url(TOKEN_ENDPOINT);
        tracing::debug!(%url, "requesting token");

        let response = self.http.post(&url).form(form).send().await?;
        match parse_response(response).await? {
            Some(Payload::Json(value)) => Ok(serde_json::from_value(value)?),
            Some(Payload::Text(body)) => Err(HootsuiteError::UnexpectedResponse(format!(
                "token endpoint returned non-JSON body: {body}"
            ))),
            None => Err(HootsuiteError::UnexpectedResponse(
                "token endpoint returned no content".to_string(),
            )),
        }
    }
}
