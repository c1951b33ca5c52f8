//! Typed, blocking Rust client for the PassInfo messaging API.
//!
//! The crate is split into a domain layer of validated request types, a transport layer
//! for wire-format details, and a small client layer that dispatches requests and maps
//! failures into [`PassInfoError`].
//!
//! ```rust,no_run
//! use passinfo::{Credentials, PassInfoClient, SendMessage};
//!
//! fn main() -> Result<(), passinfo::PassInfoError> {
//!     let client = PassInfoClient::new(Credentials::new("api-key", "client-id")?);
//!     let request = SendMessage::new("Hello", "1234567890", "MyApp")?;
//!     let _resp = client.send_message(request)?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Credentials, PassInfoClient, PassInfoClientBuilder, PassInfoError};
pub use domain::{
    AddContactToGroup, AddUsersToContact, ApiKey, BatchId, ClientId, Contact, ContactId,
    CreateContact, GroupId, ListContacts, MessageId, MessageText, RawPhoneNumber, SendBulkMessage,
    SendGroupMessage, SendMessage, SenderName, UserId, ValidationError,
};
