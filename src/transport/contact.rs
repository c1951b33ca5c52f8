use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::scalar::TransportText;
use super::success::decode_success_flag;
use super::{Endpoint, TransportError};
use crate::domain::{AddUsersToContact, Contact, CreateContact, ListContacts, UserId};

pub const ADD_CONTACT: Endpoint<'static> = Endpoint::fixed("v1/contact/add_contact");
pub const LIST_CONTACTS: Endpoint<'static> = Endpoint::fixed("v1/contact/all_my_contacts");
pub const ADD_USERS_TO_CONTACT: Endpoint<'static> = Endpoint::fixed("v1/contact/add_users");

#[derive(Debug, Clone, Serialize)]
pub struct CreateContactBody<'a> {
    first_name: &'a str,
    last_name: &'a str,
    phone_number: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddUsersToContactBody<'a> {
    contact_id: &'a str,
    user_ids: Vec<&'a str>,
}

#[derive(Debug, Clone, Deserialize)]
struct ContactListJsonResponse {
    #[serde(default)]
    contacts: Option<Vec<ContactJson>>,
}

#[derive(Debug, Clone, Deserialize)]
struct ContactJson {
    #[serde(default)]
    first_name: Option<TransportText>,
    #[serde(default)]
    last_name: Option<TransportText>,
    #[serde(default)]
    phone_number: Option<TransportText>,
}

impl From<ContactJson> for Contact {
    fn from(value: ContactJson) -> Self {
        let text = |field: Option<TransportText>| {
            field.map(TransportText::into_string).unwrap_or_default()
        };
        Contact::new(
            text(value.first_name),
            text(value.last_name),
            text(value.phone_number),
        )
    }
}

pub fn encode_create_contact_body(request: &CreateContact) -> CreateContactBody<'_> {
    CreateContactBody {
        first_name: request.first_name(),
        last_name: request.last_name(),
        phone_number: request.phone_number(),
    }
}

pub fn encode_add_users_to_contact_body(request: &AddUsersToContact) -> AddUsersToContactBody<'_> {
    AddUsersToContactBody {
        contact_id: request.contact_id().as_str(),
        user_ids: request.user_ids().iter().map(UserId::as_str).collect(),
    }
}

pub fn encode_list_contacts_query(request: ListContacts) -> Vec<(&'static str, String)> {
    vec![
        (ListContacts::PAGE_FIELD, request.page().to_string()),
        (ListContacts::LIMIT_FIELD, request.limit().to_string()),
    ]
}

/// `Some(contact)` when the server reports `success`, `None` otherwise.
pub fn decode_create_contact_response(
    request: &CreateContact,
    value: Value,
) -> Result<Option<Contact>, TransportError> {
    Ok(decode_success_flag(value)?.then(|| request.to_contact()))
}

pub fn decode_list_contacts_response(value: Value) -> Result<Vec<Contact>, TransportError> {
    let parsed: ContactListJsonResponse = serde_json::from_value(value)?;
    Ok(parsed
        .contacts
        .unwrap_or_default()
        .into_iter()
        .map(Contact::from)
        .collect())
}

pub fn decode_add_users_to_contact_response(value: Value) -> Result<bool, TransportError> {
    decode_success_flag(value)
}
