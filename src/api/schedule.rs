//! Request body for `POST v1/messages`.
//!
//! Each targeting dimension has its own builder, so callers only populate
//! what applies to them. Sections left unpopulated are omitted from the body.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::types::iso8601;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMessage {
    pub text: String,
    pub social_profile_ids: Vec<String>,
    /// ISO-8601 in UTC, whole seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_send_time: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub webhook_urls: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Targeting::is_empty")]
    pub targeting: Targeting,
    #[serde(skip_serializing_if = "Privacy::is_empty")]
    pub privacy: Privacy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notification: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub media_urls: Vec<MediaUrl>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<Media>,
}

impl ScheduleMessage {
    pub fn builder(
        text: impl Into<String>,
        social_profile_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> ScheduleMessageBuilder {
        ScheduleMessageBuilder {
            message: ScheduleMessage {
                text: text.into(),
                social_profile_ids: social_profile_ids.into_iter().map(Into::into).collect(),
                scheduled_send_time: None,
                webhook_urls: Vec::new(),
                tags: Vec::new(),
                targeting: Targeting::default(),
                privacy: Privacy::default(),
                location: None,
                email_notification: None,
                media_urls: Vec::new(),
                media: Vec::new(),
            },
        }
    }
}

pub struct ScheduleMessageBuilder {
    message: ScheduleMessage,
}

impl ScheduleMessageBuilder {
    #[must_use]
    pub fn scheduled_send_time(mut self, time: DateTime<Utc>) -> Self {
        self.message.scheduled_send_time = Some(iso8601(&time));
        self
    }

    #[must_use]
    pub fn webhook_url(mut self, url: impl Into<String>) -> Self {
        self.message.webhook_urls.push(url.into());
        self
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.message.tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn facebook_targeting(mut self, targeting: FacebookTargeting) -> Self {
        self.message.targeting.facebook_page = targeting;
        self
    }

    #[must_use]
    pub fn linkedin_targeting(mut self, targeting: LinkedInTargeting) -> Self {
        self.message.targeting.linked_in_company = targeting;
        self
    }

    #[must_use]
    pub fn privacy(mut self, privacy: Privacy) -> Self {
        self.message.privacy = privacy;
        self
    }

    #[must_use]
    pub fn location(mut self, latitude: f64, longitude: f64) -> Self {
        self.message.location = Some(Location {
            latitude,
            longitude,
        });
        self
    }

    #[must_use]
    pub fn email_notification(mut self, enabled: bool) -> Self {
        self.message.email_notification = Some(enabled);
        self
    }

    #[must_use]
    pub fn media_url(mut self, url: impl Into<String>) -> Self {
        self.message.media_urls.push(MediaUrl { url: url.into() });
        self
    }

    #[must_use]
    pub fn media(mut self, media: Media) -> Self {
        self.message.media.push(media);
        self
    }

    pub fn build(self) -> ScheduleMessage {
        self.message
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Targeting {
    #[serde(skip_serializing_if = "FacebookTargeting::is_empty")]
    pub facebook_page: FacebookTargeting,
    #[serde(skip_serializing_if = "LinkedInTargeting::is_empty")]
    pub linked_in_company: LinkedInTargeting,
}

impl Targeting {
    pub fn is_empty(&self) -> bool {
        self.facebook_page.is_empty() && self.linked_in_company.is_empty()
    }
}

/// A Facebook key/value pair: display name in `k`, Facebook's key in `v`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyValue {
    pub k: String,
    pub v: String,
}

impl KeyValue {
    pub fn new(k: impl Into<String>, v: impl Into<String>) -> Self {
        Self {
            k: k.into(),
            v: v.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacebookTargeting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_max: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub education: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genders: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub interested_in: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub relationship_status: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub countries: Vec<KeyValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<KeyValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cities: Vec<KeyValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locales: Vec<KeyValue>,
}

impl FacebookTargeting {
    pub fn builder() -> FacebookTargetingBuilder {
        FacebookTargetingBuilder::default()
    }

    pub fn is_empty(&self) -> bool {
        self.age_min.is_none()
            && self.age_max.is_none()
            && self.education.is_empty()
            && self.genders.is_empty()
            && self.interested_in.is_empty()
            && self.relationship_status.is_empty()
            && self.countries.is_empty()
            && self.regions.is_empty()
            && self.cities.is_empty()
            && self.locales.is_empty()
    }
}

#[derive(Default)]
pub struct FacebookTargetingBuilder {
    inner: FacebookTargeting,
}

impl FacebookTargetingBuilder {
    #[must_use]
    pub fn age_range(mut self, min: u32, max: u32) -> Self {
        self.inner.age_min = Some(min);
        self.inner.age_max = Some(max);
        self
    }

    #[must_use]
    pub fn age_min(mut self, min: u32) -> Self {
        self.inner.age_min = Some(min);
        self
    }

    #[must_use]
    pub fn age_max(mut self, max: u32) -> Self {
        self.inner.age_max = Some(max);
        self
    }

    /// e.g. `collegeGrad`
    #[must_use]
    pub fn education(mut self, education: impl Into<String>) -> Self {
        self.inner.education.push(education.into());
        self
    }

    #[must_use]
    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.inner.genders.push(gender.into());
        self
    }

    #[must_use]
    pub fn interested_in(mut self, interest: impl Into<String>) -> Self {
        self.inner.interested_in.push(interest.into());
        self
    }

    #[must_use]
    pub fn relationship_status(mut self, status: impl Into<String>) -> Self {
        self.inner.relationship_status.push(status.into());
        self
    }

    /// Country by name and ISO code, e.g. `("Canada", "CA")`.
    #[must_use]
    pub fn country(mut self, name: impl Into<String>, code: impl Into<String>) -> Self {
        self.inner.countries.push(KeyValue::new(name, code));
        self
    }

    #[must_use]
    pub fn region(mut self, name: impl Into<String>, key: impl Into<String>) -> Self {
        self.inner.regions.push(KeyValue::new(name, key));
        self
    }

    #[must_use]
    pub fn city(mut self, name: impl Into<String>, key: impl Into<String>) -> Self {
        self.inner.cities.push(KeyValue::new(name, key));
        self
    }

    #[must_use]
    pub fn locale(mut self, name: impl Into<String>, key: impl Into<String>) -> Self {
        self.inner.locales.push(KeyValue::new(name, key));
        self
    }

    pub fn build(self) -> FacebookTargeting {
        self.inner
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedInTargeting {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub company_size: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub geography: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub industry: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub job_function: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub seniority: Vec<String>,
}

impl LinkedInTargeting {
    pub fn builder() -> LinkedInTargetingBuilder {
        LinkedInTargetingBuilder::default()
    }

    pub fn is_empty(&self) -> bool {
        self.company_size.is_empty()
            && self.geography.is_empty()
            && self.industry.is_empty()
            && self.job_function.is_empty()
            && self.seniority.is_empty()
    }
}

#[derive(Default)]
pub struct LinkedInTargetingBuilder {
    inner: LinkedInTargeting,
}

impl LinkedInTargetingBuilder {
    #[must_use]
    pub fn company_size(mut self, size: impl Into<String>) -> Self {
        self.inner.company_size.push(size.into());
        self
    }

    #[must_use]
    pub fn geography(mut self, geography: impl Into<String>) -> Self {
        self.inner.geography.push(geography.into());
        self
    }

    #[must_use]
    pub fn industry(mut self, industry: impl Into<String>) -> Self {
        self.inner.industry.push(industry.into());
        self
    }

    #[must_use]
    pub fn job_function(mut self, function: impl Into<String>) -> Self {
        self.inner.job_function.push(function.into());
        self
    }

    #[must_use]
    pub fn seniority(mut self, seniority: impl Into<String>) -> Self {
        self.inner.seniority.push(seniority.into());
        self
    }

    pub fn build(self) -> LinkedInTargeting {
        self.inner
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FacebookVisibility {
    Everyone,
    Friends,
    FriendsOfFriends,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LinkedInVisibility {
    Anyone,
    ConnectionsOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GooglePlusVisibility {
    Public,
    MyCircles,
    ExtendedCircles,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Visibility<T> {
    pub visibility: Vec<T>,
}

impl<T> Visibility<T> {
    pub fn is_empty(&self) -> bool {
        self.visibility.is_empty()
    }
}

impl<T> Default for Visibility<T> {
    fn default() -> Self {
        Self {
            visibility: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Privacy {
    #[serde(skip_serializing_if = "Visibility::is_empty")]
    pub facebook: Visibility<FacebookVisibility>,
    #[serde(skip_serializing_if = "Visibility::is_empty")]
    pub google_plus: Visibility<GooglePlusVisibility>,
    #[serde(skip_serializing_if = "Visibility::is_empty")]
    pub linked_in: Visibility<LinkedInVisibility>,
}

impl Privacy {
    pub fn builder() -> PrivacyBuilder {
        PrivacyBuilder::default()
    }

    pub fn is_empty(&self) -> bool {
        self.facebook.is_empty() && self.google_plus.is_empty() && self.linked_in.is_empty()
    }
}

#[derive(Default)]
pub struct PrivacyBuilder {
    inner: Privacy,
}

impl PrivacyBuilder {
    #[must_use]
    pub fn facebook(mut self, visibility: FacebookVisibility) -> Self {
        self.inner.facebook.visibility.push(visibility);
        self
    }

    #[must_use]
    pub fn linkedin(mut self, visibility: LinkedInVisibility) -> Self {
        self.inner.linked_in.visibility.push(visibility);
        self
    }

    #[must_use]
    pub fn google_plus(mut self, visibility: GooglePlusVisibility) -> Self {
        self.inner.google_plus.visibility.push(visibility);
        self
    }

    pub fn build(self) -> Privacy {
        self.inner
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaUrl {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_options: Option<VideoOptions>,
}

impl Media {
    /// `id` is the media id returned by the media upload endpoint.
    pub fn builder(id: impl Into<String>) -> MediaBuilder {
        MediaBuilder {
            inner: Media {
                id: id.into(),
                video_options: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoOptions {
    pub facebook: FacebookVideoOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacebookVideoOptions {
    pub title: String,
    pub category: String,
}

pub struct MediaBuilder {
    inner: Media,
}

impl MediaBuilder {
    #[must_use]
    pub fn facebook_video(mut self, title: impl Into<String>, category: impl Into<String>) -> Self {
        self.inner.video_options = Some(VideoOptions {
            facebook: FacebookVideoOptions {
                title: title.into(),
                category: category.into(),
            },
        });
        self
    }

    pub fn build(self) -> Media {
        self.inner
    }
}
