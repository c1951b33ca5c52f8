//! Transport layer: endpoint paths and wire-format details (serialization/deserialization).

mod account;
mod contact;
mod group;
mod message;
mod scalar;
mod success;

use url::Url;

pub use account::{
    GET_CREDIT_BALANCE, RENEW_API_KEY, decode_credit_balance_response,
    decode_renew_api_key_response,
};
pub use contact::{
    ADD_CONTACT, ADD_USERS_TO_CONTACT, LIST_CONTACTS, decode_add_users_to_contact_response,
    decode_create_contact_response, decode_list_contacts_response,
    encode_add_users_to_contact_body, encode_create_contact_body, encode_list_contacts_query,
};
pub use group::{
    ADD_CONTACT_TO_GROUP, GET_USER_GROUPS, decode_add_contact_to_group_response,
    encode_add_contact_to_group_body,
};
pub use message::{
    SEND_BULK_MESSAGE, SEND_MESSAGE, encode_send_bulk_message_body,
    encode_send_group_message_body, encode_send_message_body, message_status_bulk_endpoint,
    message_status_endpoint, send_group_message_endpoint,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("base URL cannot carry path segments: {0}")]
    CannotBeABase(String),

    #[error("path id {0:?} would be dropped by URL normalization")]
    DotSegment(String),

    #[error("field {field} is not a number: {value}")]
    InvalidNumber { field: &'static str, value: String },
}

/// API path relative to the base URL, optionally followed by one id segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint<'a> {
    path: &'static str,
    id: Option<&'a str>,
}

impl<'a> Endpoint<'a> {
    pub const fn fixed(path: &'static str) -> Self {
        Self { path, id: None }
    }

    pub const fn with_id(path: &'static str, id: &'a str) -> Self {
        Self { path, id: Some(id) }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Join onto `base_url`. The id, if any, is percent-encoded as a single segment.
    ///
    /// `.` and `..` are refused: `PathSegmentsMut::push` ignores them.
    pub fn url(&self, base_url: &str) -> Result<Url, TransportError> {
        let mut url = Url::parse(&format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            self.path
        ))?;
        if let Some(id) = self.id {
            if id == "." || id == ".." {
                return Err(TransportError::DotSegment(id.to_owned()));
            }
            url.path_segments_mut()
                .map_err(|()| TransportError::CannotBeABase(base_url.to_owned()))?
                .push(id);
        }
        Ok(url)
    }
}
