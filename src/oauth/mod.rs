pub mod client;
pub mod types;

pub use client::{AUTHORIZE_ENDPOINT, TOKEN_ENDPOINT};
pub use types::Token;
