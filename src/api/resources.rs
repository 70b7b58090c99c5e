//! Endpoint methods. Each one makes exactly one request through
//! [`Client::request`] and performs no local validation.

use super::client::Client;
use super::error::Result;
use super::schedule::ScheduleMessage;
use super::types::{
    EchoRequest, NewMember, OutboundMessagesQuery, Payload, ReviewRequest, ReviewerType,
};

impl Client {
    /// Round-trips a fixed message to check connectivity and credentials.
    pub async fn send_echo(&self) -> Result<Option<Payload>> {
        self.post(
            "v1/echo",
            &EchoRequest {
                message: "Test connection",
            },
        )
        .await
    }

    // Account and current user

    pub async fn get_account_info(&self) -> Result<Option<Payload>> {
        self.get("account").await
    }

    pub async fn get_me(&self) -> Result<Option<Payload>> {
        self.get("v1/me").await
    }

    pub async fn get_my_organizations(&self) -> Result<Option<Payload>> {
        self.get("v1/me/organizations").await
    }

    pub async fn get_my_social_profiles(&self) -> Result<Option<Payload>> {
        self.get("v1/me/socialProfiles").await
    }

    // Members

    pub async fn get_member(&self, member_id: &str) -> Result<Option<Payload>> {
        self.get(&format!("v1/members/{member_id}")).await
    }

    /// Requires the organization "manage members" permission.
    pub async fn create_member(&self, member: &NewMember) -> Result<Option<Payload>> {
        self.post("v1/members", member).await
    }

    pub async fn get_member_organizations(&self, member_id: &str) -> Result<Option<Payload>> {
        self.get(&format!("v1/members/{member_id}/organizations"))
            .await
    }

    // Messages

    pub async fn create_schedule_messages(
        &self,
        message: &ScheduleMessage,
    ) -> Result<Option<Payload>> {
        self.post("v1/messages", message).await
    }

    pub async fn get_outbound_messages(
        &self,
        query: &OutboundMessagesQuery,
    ) -> Result<Option<Payload>> {
        self.get_with_query("v1/messages", &query.to_query()).await
    }

    pub async fn get_message(&self, message_id: &str) -> Result<Option<Payload>> {
        self.get(&format!("v1/messages/{message_id}")).await
    }

    pub async fn delete_message(&self, message_id: &str) -> Result<Option<Payload>> {
        self.delete(&format!("v1/messages/{message_id}")).await
    }

    pub async fn approve_message(
        &self,
        message_id: &str,
        sequence_number: u64,
        reviewer_type: ReviewerType,
    ) -> Result<Option<Payload>> {
        let body = ReviewRequest {
            sequence_number,
            reviewer_type,
            reason: None,
        };
        self.post(&format!("v1/messages/{message_id}/approve"), &body)
            .await
    }

    /// `reason` is shown to the creator of the message.
    pub async fn reject_message(
        &self,
        message_id: &str,
        sequence_number: u64,
        reviewer_type: ReviewerType,
        reason: &str,
    ) -> Result<Option<Payload>> {
        let body = ReviewRequest {
            sequence_number,
            reviewer_type,
            reason: Some(reason),
        };
        self.post(&format!("v1/messages/{message_id}/reject"), &body)
            .await
    }

    // Organizations

    pub async fn get_organization_members(
        &self,
        organization_id: &str,
    ) -> Result<Option<Payload>> {
        self.get(&format!("v1/organizations/{organization_id}/members"))
            .await
    }

    pub async fn remove_member_from_organization(
        &self,
        organization_id: &str,
        member_id: &str,
    ) -> Result<Option<Payload>> {
        self.delete(&format!(
            "v1/organizations/{organization_id}/members/{member_id}"
        ))
        .await
    }
}
