use std::fmt;

use thiserror::Error;

use super::types::Payload;

/// Classification of a failed API call, derived from the HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    NotAcceptable,
    Conflict,
    Gone,
    LengthRequired,
    PreconditionFailed,
    RequestEntityTooLarge,
    UnsupportedMediaType,
    RequestedRangeNotSatisfiable,
    UnprocessableEntity,
    TooManyRequests,
    InternalServerError,
    NotImplemented,
    ServiceUnavailable,
    GatewayTimeout,
    InsufficientStorage,
    BandwidthLimitExceeded,
    /// Any status without a dedicated kind. Carries the raw code.
    Unknown(u16),
}

const STATUS_TABLE: &[(u16, ErrorKind)] = &[
    (400, ErrorKind::BadRequest),
    (401, ErrorKind::Unauthorized),
    (403, ErrorKind::Forbidden),
    (404, ErrorKind::NotFound),
    (405, ErrorKind::MethodNotAllowed),
    (406, ErrorKind::NotAcceptable),
    (409, ErrorKind::Conflict),
    (410, ErrorKind::Gone),
    (411, ErrorKind::LengthRequired),
    (412, ErrorKind::PreconditionFailed),
    (413, ErrorKind::RequestEntityTooLarge),
    (415, ErrorKind::UnsupportedMediaType),
    (416, ErrorKind::RequestedRangeNotSatisfiable),
    (422, ErrorKind::UnprocessableEntity),
    (429, ErrorKind::TooManyRequests),
    (500, ErrorKind::InternalServerError),
    (501, ErrorKind::NotImplemented),
    (503, ErrorKind::ServiceUnavailable),
    (504, ErrorKind::GatewayTimeout),
    (507, ErrorKind::InsufficientStorage),
    (509, ErrorKind::BandwidthLimitExceeded),
];

impl ErrorKind {
    pub fn from_status(status: u16) -> Self {
        STATUS_TABLE
            .iter()
            .find(|(code, _)| *code == status)
            .map_or(ErrorKind::Unknown(status), |(_, kind)| *kind)
    }

    /// The status code this kind was derived from.
    pub fn status(self) -> u16 {
        match self {
            ErrorKind::Unknown(code) => code,
            kind => STATUS_TABLE
                .iter()
                .find(|(_, k)| *k == kind)
                .map_or(0, |(code, _)| *code),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::MethodNotAllowed => "Method Not Allowed",
            ErrorKind::NotAcceptable => "Not Acceptable",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::Gone => "Gone",
            ErrorKind::LengthRequired => "Length Required",
            ErrorKind::PreconditionFailed => "Precondition Failed",
            ErrorKind::RequestEntityTooLarge => "Request Entity Too Large",
            ErrorKind::UnsupportedMediaType => "Unsupported Media Type",
            ErrorKind::RequestedRangeNotSatisfiable => "Requested Range Not Satisfiable",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::TooManyRequests => "Too Many Requests",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::NotImplemented => "Not Implemented",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
            ErrorKind::GatewayTimeout => "Gateway Timeout",
            ErrorKind::InsufficientStorage => "Insufficient Storage",
            ErrorKind::BandwidthLimitExceeded => "Bandwidth Limit Exceeded",
            ErrorKind::Unknown(_) => "Unknown Error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug)]
pub enum HootsuiteError {
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("API error {kind} (status {status}): {body}")]
    Api {
        kind: ErrorKind,
        status: u16,
        body: Payload,
    },

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HootsuiteError>;

impl HootsuiteError {
    pub fn api(status: u16, body: Payload) -> Self {
        Self::Api {
            kind: ErrorKind::from_status(status),
            status,
            body,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// The taxonomy kind, if this error came from an API response.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// The decoded response body, if this error came from an API response.
    pub fn body(&self) -> Option<&Payload> {
        match self {
            Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_table_entry_round_trips_through_status() {
        for (code, kind) in STATUS_TABLE {
            assert_eq!(ErrorKind::from_status(*code), *kind);
            assert_eq!(kind.status(), *code);
        }
    }

    #[test]
    fn unlisted_codes_are_unknown_and_keep_the_code() {
        for code in [203, 302, 402, 408, 418, 502, 599] {
            let kind = ErrorKind::from_status(code);
            assert_eq!(kind, ErrorKind::Unknown(code));
            assert_eq!(kind.status(), code);
        }
    }

    #[test]
    fn table_kinds_are_distinct() {
        let mut kinds: Vec<_> = STATUS_TABLE.iter().map(|(_, k)| *k).collect();
        kinds.sort_by_key(|k| k.status());
        kinds.dedup();
        assert_eq!(kinds.len(), STATUS_TABLE.len());
    }

    #[test]
    fn api_error_exposes_kind_and_body() {
        let err = HootsuiteError::api(404, Payload::Json(json!({"errors": [{"code": 404}]})));
        assert_eq!(err.kind(), Some(ErrorKind::NotFound));
        assert_eq!(
            err.body().and_then(Payload::as_json),
            Some(&json!({"errors": [{"code": 404}]}))
        );
        assert!(err.to_string().contains("Not Found"));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn non_api_errors_have_no_kind() {
        let err = HootsuiteError::config("missing client_id");
        assert_eq!(err.kind(), None);
        assert!(err.body().is_none());
    }
}
