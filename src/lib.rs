//! Client for the Hootsuite REST API: OAuth2 authorization-code helpers and
//! one method per endpoint, returning decoded bodies or typed errors.

pub mod api;
pub mod config;
pub mod oauth;

pub use api::{
    Client, ClientBuilder, ErrorKind, HootsuiteError, MessageState, NewMember,
    OutboundMessagesQuery, Payload, Result, ReviewerType, ScheduleMessage,
};
pub use config::Settings;
pub use oauth::Token;
