pub mod client;
pub mod error;
mod resources;
pub mod schedule;
pub mod types;

pub use client::{Client, ClientBuilder, classify};
pub use error::{ErrorKind, HootsuiteError, Result};
pub use schedule::{
    FacebookTargeting, FacebookVisibility, GooglePlusVisibility, LinkedInTargeting,
    LinkedInVisibility, Media, Privacy, ScheduleMessage,
};
pub use types::{MessageState, NewMember, OutboundMessagesQuery, Payload, ReviewerType};
