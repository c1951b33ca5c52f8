use serde::Serialize;
use serde_json::Value;

use super::success::decode_success_flag;
use super::{Endpoint, TransportError};
use crate::domain::AddContactToGroup;

pub const GET_USER_GROUPS: Endpoint<'static> = Endpoint::fixed("v1/groupe/get_all_my_groupes");
pub const ADD_CONTACT_TO_GROUP: Endpoint<'static> =
    Endpoint::fixed("v1/groupe/add_contact_to_group");

#[derive(Debug, Clone, Serialize)]
pub struct AddContactToGroupBody<'a> {
    contact_id: &'a str,
    group_id: &'a str,
}

pub fn encode_add_contact_to_group_body(request: &AddContactToGroup) -> AddContactToGroupBody<'_> {
    AddContactToGroupBody {
        contact_id: request.contact_id().as_str(),
        group_id: request.group_id().as_str(),
    }
}

pub fn decode_add_contact_to_group_response(value: Value) -> Result<bool, TransportError> {
    decode_success_flag(value)
}
