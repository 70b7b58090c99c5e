use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, Response};
use serde::Serialize;
use serde_json::Value;

use super::error::{HootsuiteError, Result};
use super::types::Payload;
use crate::config::Settings;

pub const DEFAULT_BASE_URL: &str = "https://apis.hootsuite.com/";
pub const DEFAULT_APPLICATION: &str = "developer_api";

pub const APPLICATION_HEADER: &str = "x-application";
pub const USER_EMAIL_HEADER: &str = "x-user-email";

const USER_AGENT: &str = concat!("hootsuite-rs/", env!("CARGO_PKG_VERSION"));

/// Builder for [`Client`].
pub struct ClientBuilder {
    client_id: String,
    client_secret: String,
    base_url: String,
    application: String,
    user_email: Option<String>,
    token: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            application: DEFAULT_APPLICATION.to_string(),
            user_email: None,
            token: None,
            timeout: None,
        }
    }

    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Value of the application identifier header.
    #[must_use]
    pub fn application(mut self, application: impl Into<String>) -> Self {
        self.application = application.into();
        self
    }

    #[must_use]
    pub fn user_email(mut self, email: impl Into<String>) -> Self {
        self.user_email = Some(email.into());
        self
    }

    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Total request timeout. Without one, calls wait as long as reqwest does.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<Client> {
        let mut http = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        Ok(Client {
            client_id: self.client_id,
            client_secret: self.client_secret,
            base_url: self.base_url,
            application: self.application,
            user_email: self.user_email,
            token: self.token,
            timeout: self.timeout,
            http: http.build()?,
        })
    }
}

/// Hootsuite API client.
///
/// The bearer token is plain instance state: `set_token` takes `&mut self`,
/// so a client has one owner. Share it behind your own lock or keep one
/// client per session.
#[derive(Debug)]
pub struct Client {
    pub(crate) client_id: String,
    pub(crate) client_secret: String,
    pub(crate) base_url: String,
    application: String,
    user_email: Option<String>,
    token: Option<String>,
    timeout: Option<Duration>,
    pub(crate) http: reqwest::Client,
}

impl Client {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(client_id, client_secret).build()
    }

    pub fn builder(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> ClientBuilder {
        ClientBuilder::new(client_id, client_secret)
    }

    /// Builds a client from stored settings, including any saved access token.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let client_id = settings
            .client_id
            .clone()
            .ok_or_else(|| HootsuiteError::config("client_id is not set"))?;
        let client_secret = settings
            .client_secret
            .clone()
            .ok_or_else(|| HootsuiteError::config("client_secret is not set"))?;

        let mut builder = ClientBuilder::new(client_id, client_secret).base_url(&settings.base_url);
        if let Some(application) = &settings.application {
            builder = builder.application(application);
        }
        if let Some(email) = &settings.user_email {
            builder = builder.user_email(email);
        }
        if let Some(token) = &settings.access_token {
            builder = builder.token(token);
        }
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn application(&self) -> &str {
        &self.application
    }

    pub fn user_email(&self) -> Option<&str> {
        self.user_email.as_deref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Stores the bearer token used by every later call.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub(crate) fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| HootsuiteError::config(format!("invalid access token: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        headers.insert(
            APPLICATION_HEADER,
            HeaderValue::from_str(&self.application)
                .map_err(|e| HootsuiteError::config(format!("invalid application id: {e}")))?,
        );
        if let Some(email) = &self.user_email {
            headers.insert(
                USER_EMAIL_HEADER,
                HeaderValue::from_str(email)
                    .map_err(|e| HootsuiteError::config(format!("invalid user email: {e}")))?,
            );
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Sends one authenticated request and classifies the response.
    ///
    /// Every endpoint method goes through here.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Option<Payload>> {
        let url = self.url(endpoint);
        tracing::debug!(%method, %url, "sending request");

        let mut request = self
            .http
            .request(method, &url)
            .headers(self.headers()?)
            .query(query);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        parse_response(response).await
    }

    pub async fn get(&self, endpoint: &str) -> Result<Option<Payload>> {
        self.request(Method::GET, endpoint, &[], None).await
    }

    pub async fn get_with_query(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<Option<Payload>> {
        self.request(Method::GET, endpoint, query, None).await
    }

    pub async fn post<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Option<Payload>> {
        let body = serde_json::to_value(body)?;
        self.request(Method::POST, endpoint, &[], Some(&body)).await
    }

    pub async fn put<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Option<Payload>> {
        let body = serde_json::to_value(body)?;
        self.request(Method::PUT, endpoint, &[], Some(&body)).await
    }

    pub async fn patch<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Option<Payload>> {
        let body = serde_json::to_value(body)?;
        self.request(Method::PATCH, endpoint, &[], Some(&body)).await
    }

    pub async fn delete(&self, endpoint: &str) -> Result<Option<Payload>> {
        self.request(Method::DELETE, endpoint, &[], None).await
    }
}

pub(crate) async fn parse_response(response: Response) -> Result<Option<Payload>> {
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = response.text().await?;
    tracing::debug!(status, %content_type, "received response");
    classify(status, &content_type, body)
}

/// Maps a status code and raw body to data or a taxonomy error.
///
/// 200/201/202 yield the decoded body, 204 yields `None`, everything else
/// is an [`HootsuiteError::Api`] carrying the decoded body.
pub fn classify(status: u16, content_type: &str, body: String) -> Result<Option<Payload>> {
    let is_json =
        content_type.to_ascii_lowercase().contains("application/json") && !body.trim().is_empty();
    match status {
        204 => Ok(None),
        200..=202 => {
            if is_json {
                Ok(Some(Payload::Json(serde_json::from_str(&body)?)))
            } else {
                Ok(Some(Payload::Text(body)))
            }
        }
        _ => {
            let payload = if is_json {
                match serde_json::from_str(&body) {
                    Ok(value) => Payload::Json(value),
                    Err(e) => {
                        tracing::warn!(status, error = %e, "error body is not valid JSON");
                        Payload::Text(body)
                    }
                }
            } else {
                Payload::Text(body)
            };
            Err(HootsuiteError::api(status, payload))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ErrorKind;
    use serde_json::json;

    const JSON: &str = "application/json; charset=utf-8";

    #[test]
    fn success_codes_return_decoded_json() {
        for status in [200, 201, 202] {
            let payload = classify(status, JSON, r#"{"data":{"id":"1","tags":[1,2]}}"#.into())
                .unwrap()
                .unwrap();
            assert_eq!(payload, Payload::Json(json!({"data": {"id": "1", "tags": [1, 2]}})));
        }
    }

    #[test]
    fn content_type_match_ignores_case() {
        let payload = classify(200, "Application/JSON; charset=UTF-8", r#"{"ok":true}"#.into())
            .unwrap()
            .unwrap();
        assert_eq!(payload, Payload::Json(json!({"ok": true})));
    }

    #[test]
    fn non_json_success_returns_raw_text() {
        let payload = classify(200, "text/plain", "  pong \n".into())
            .unwrap()
            .unwrap();
        assert_eq!(payload, Payload::Text("  pong \n".to_string()));
    }

    #[test]
    fn no_content_ignores_body() {
        assert_eq!(classify(204, JSON, "{not json".into()).unwrap(), None);
        assert_eq!(classify(204, "", String::new()).unwrap(), None);
    }

    #[test]
    fn malformed_json_success_is_a_parse_error() {
        let err = classify(200, JSON, "{oops".into()).unwrap_err();
        assert!(matches!(err, HootsuiteError::ParseError(_)));
    }

    #[test]
    fn error_statuses_carry_decoded_body() {
        let err = classify(422, JSON, r#"{"errors":[{"code":1001}]}"#.into()).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::UnprocessableEntity));
        assert_eq!(
            err.body(),
            Some(&Payload::Json(json!({"errors": [{"code": 1001}]})))
        );
    }

    #[test]
    fn malformed_json_error_body_falls_back_to_text() {
        let err = classify(502, JSON, "<html>bad gateway</html>".into()).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::Unknown(502)));
        assert_eq!(
            err.body(),
            Some(&Payload::Text("<html>bad gateway</html>".to_string()))
        );
    }

    #[test]
    fn other_success_like_codes_are_unknown() {
        let err = classify(203, JSON, "{}".into()).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::Unknown(203)));
    }

    #[test]
    fn url_joins_with_a_single_slash() {
        let client = Client::builder("id", "secret")
            .base_url("https://apis.hootsuite.com/")
            .build()
            .unwrap();
        assert_eq!(client.url("v1/me"), "https://apis.hootsuite.com/v1/me");
        assert_eq!(client.url("/account"), "https://apis.hootsuite.com/account");
    }

    #[test]
    fn token_is_replaced_and_cleared() {
        let mut client = Client::new("id", "secret").unwrap();
        assert_eq!(client.token(), None);
        client.set_token("first");
        client.set_token("second");
        assert_eq!(client.token(), Some("second"));
        client.clear_token();
        assert_eq!(client.token(), None);
    }

    #[test]
    fn headers_include_bearer_only_with_token() {
        let mut client = Client::builder("id", "secret")
            .user_email("ops@example.com")
            .build()
            .unwrap();
        let headers = client.headers().unwrap();
        assert!(headers.get(AUTHORIZATION).is_none());
        assert_eq!(headers[APPLICATION_HEADER], DEFAULT_APPLICATION);
        assert_eq!(headers[USER_EMAIL_HEADER], "ops@example.com");
        assert_eq!(headers[CONTENT_TYPE], "application/json");

        client.set_token("abc");
        let headers = client.headers().unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer abc");
    }
}
