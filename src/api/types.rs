use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(v) => Some(v),
            Payload::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(s) => Some(s),
            Payload::Json(_) => None,
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            Payload::Json(v) => Some(v),
            Payload::Text(_) => None,
        }
    }

    /// Deserializes a JSON payload into `T`. Text payloads fail.
    pub fn deserialize<T: DeserializeOwned>(self) -> crate::api::Result<T> {
        match self {
            Payload::Json(v) => Ok(serde_json::from_value(v)?),
            Payload::Text(s) => Err(crate::api::HootsuiteError::UnexpectedResponse(format!(
                "expected JSON, got text: {s}"
            ))),
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Json(v) => write!(f, "{v}"),
            Payload::Text(s) => f.write_str(s),
        }
    }
}

/// Approval state filter for outbound messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageState {
    PendingApproval,
    Rejected,
    Sent,
    Scheduled,
    SendFailedPermanently,
}

impl MessageState {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageState::PendingApproval => "PENDING_APPROVAL",
            MessageState::Rejected => "REJECTED",
            MessageState::Sent => "SENT",
            MessageState::Scheduled => "SCHEDULED",
            MessageState::SendFailedPermanently => "SEND_FAILED_PERMANENTLY",
        }
    }
}

impl std::str::FromStr for MessageState {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING_APPROVAL" => Ok(MessageState::PendingApproval),
            "REJECTED" => Ok(MessageState::Rejected),
            "SENT" => Ok(MessageState::Sent),
            "SCHEDULED" => Ok(MessageState::Scheduled),
            "SEND_FAILED_PERMANENTLY" => Ok(MessageState::SendFailedPermanently),
            _ => Err(format!("Unknown message state: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewerType {
    External,
    Member,
}

impl std::str::FromStr for ReviewerType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EXTERNAL" => Ok(ReviewerType::External),
            "MEMBER" => Ok(ReviewerType::Member),
            _ => Err(format!("Unknown reviewer type: {s}")),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct EchoRequest<'a> {
    pub message: &'a str,
}

/// Body of `POST v1/members`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMember {
    pub organization_ids: Vec<String>,
    pub email: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// IANA name, e.g. `America/Vancouver`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    pub language: String,
}

impl NewMember {
    pub fn new(
        organization_ids: impl IntoIterator<Item = impl Into<String>>,
        email: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            organization_ids: organization_ids.into_iter().map(Into::into).collect(),
            email: email.into(),
            full_name: full_name.into(),
            company_name: None,
            bio: None,
            timezone: None,
            language: "en".to_string(),
        }
    }

    #[must_use]
    pub fn company_name(mut self, name: impl Into<String>) -> Self {
        self.company_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    #[must_use]
    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// Filters for `GET v1/messages`.
///
/// `limit` is forwarded as given. The API defaults it to 50 and rejects
/// anything above 100.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMessagesQuery {
    pub start_time: DateTime<Utc>,
    /// Must not be later than four weeks after `start_time`.
    pub end_time: DateTime<Utc>,
    pub state: Option<MessageState>,
    pub social_profile_ids: Vec<String>,
    pub limit: Option<u32>,
}

impl OutboundMessagesQuery {
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            end_time,
            state: None,
            social_profile_ids: Vec::new(),
            limit: None,
        }
    }

    #[must_use]
    pub fn state(mut self, state: MessageState) -> Self {
        self.state = Some(state);
        self
    }

    #[must_use]
    pub fn social_profile_id(mut self, id: impl Into<String>) -> Self {
        self.social_profile_ids.push(id.into());
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query pairs in wire order. Profile ids repeat the key.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("startTime", iso8601(&self.start_time)),
            ("endTime", iso8601(&self.end_time)),
        ];
        if let Some(state) = self.state {
            pairs.push(("state", state.as_str().to_string()));
        }
        for id in &self.social_profile_ids {
            pairs.push(("socialProfileIds", id.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// Body of the approve and reject endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReviewRequest<'a> {
    pub sequence_number: u64,
    pub reviewer_type: ReviewerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'a str>,
}

pub(crate) fn iso8601(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn query_contains_only_required_times_by_default() {
        let query = OutboundMessagesQuery::new(at(9), at(17));
        assert_eq!(
            query.to_query(),
            vec![
                ("startTime", "2024-03-01T09:00:00Z".to_string()),
                ("endTime", "2024-03-01T17:00:00Z".to_string()),
            ]
        );
    }

    #[test]
    fn query_repeats_profile_ids_and_keeps_limit_verbatim() {
        let query = OutboundMessagesQuery::new(at(9), at(17))
            .state(MessageState::SendFailedPermanently)
            .social_profile_id("111")
            .social_profile_id("222")
            .limit(150);
        let pairs = query.to_query();
        assert!(pairs.contains(&("state", "SEND_FAILED_PERMANENTLY".to_string())));
        assert_eq!(
            pairs
                .iter()
                .filter(|(k, _)| *k == "socialProfileIds")
                .map(|(_, v)| v.as_str())
                .collect::<Vec<_>>(),
            vec!["111", "222"]
        );
        assert!(pairs.contains(&("limit", "150".to_string())));
    }

    #[test]
    fn new_member_omits_unset_profile_fields() {
        let member = NewMember::new(["626731"], "jsmith@test.com", "Joe Smith");
        assert_eq!(
            serde_json::to_value(&member).unwrap(),
            json!({
                "organizationIds": ["626731"],
                "email": "jsmith@test.com",
                "fullName": "Joe Smith",
                "language": "en",
            })
        );
    }

    #[test]
    fn new_member_serializes_every_field() {
        let member = NewMember::new(["1", "2"], "a@b.c", "A B")
            .company_name("Hootsuite")
            .bio("short bio")
            .timezone("America/Vancouver")
            .language("fr");
        assert_eq!(
            serde_json::to_value(&member).unwrap(),
            json!({
                "organizationIds": ["1", "2"],
                "email": "a@b.c",
                "fullName": "A B",
                "companyName": "Hootsuite",
                "bio": "short bio",
                "timezone": "America/Vancouver",
                "language": "fr",
            })
        );
    }

    #[test]
    fn review_request_includes_reason_only_when_rejecting() {
        let approve = ReviewRequest {
            sequence_number: 3,
            reviewer_type: ReviewerType::Member,
            reason: None,
        };
        assert_eq!(
            serde_json::to_value(&approve).unwrap(),
            json!({"sequenceNumber": 3, "reviewerType": "MEMBER"})
        );

        let reject = ReviewRequest {
            reason: Some("off brand"),
            ..approve
        };
        assert_eq!(
            serde_json::to_value(&reject).unwrap(),
            json!({"sequenceNumber": 3, "reviewerType": "MEMBER", "reason": "off brand"})
        );
    }

    #[test]
    fn enums_parse_case_insensitively() {
        assert_eq!("scheduled".parse::<MessageState>(), Ok(MessageState::Scheduled));
        assert_eq!("External".parse::<ReviewerType>(), Ok(ReviewerType::External));
        assert!("DRAFT".parse::<MessageState>().is_err());
    }

    #[test]
    fn text_payload_does_not_deserialize() {
        let payload = Payload::Text("<html>".to_string());
        assert!(payload.deserialize::<Value>().is_err());
    }
}
