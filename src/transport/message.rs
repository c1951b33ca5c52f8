use serde::Serialize;

use super::Endpoint;
use crate::domain::{
    BatchId, MessageId, RawPhoneNumber, SendBulkMessage, SendGroupMessage, SendMessage,
};

pub const SEND_MESSAGE: Endpoint<'static> = Endpoint::fixed("v1/message/single_message");
pub const SEND_BULK_MESSAGE: Endpoint<'static> =
    Endpoint::fixed("v1/message/send_bulk_contacts_messages");

const SEND_GROUP_MESSAGE_PATH: &str = "v1/message/send_message_to_group";
const MESSAGE_STATUS_PATH: &str = "v1/message/get_single_status";
const MESSAGE_STATUS_BULK_PATH: &str = "v1/message/get_bulk_status";

#[derive(Debug, Clone, Serialize)]
pub struct SendMessageBody<'a> {
    message: &'a str,
    contact: &'a str,
    #[serde(rename = "senderName")]
    sender_name: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendBulkMessageBody<'a> {
    message: &'a str,
    contacts: Vec<&'a str>,
    #[serde(rename = "senderName")]
    sender_name: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendGroupMessageBody<'a> {
    message: &'a str,
    #[serde(rename = "senderName")]
    sender_name: &'a str,
}

pub fn encode_send_message_body(request: &SendMessage) -> SendMessageBody<'_> {
    SendMessageBody {
        message: request.message().as_str(),
        contact: request.contact().raw(),
        sender_name: request.sender_name().as_str(),
    }
}

pub fn encode_send_bulk_message_body(request: &SendBulkMessage) -> SendBulkMessageBody<'_> {
    SendBulkMessageBody {
        message: request.message().as_str(),
        contacts: request
            .contacts()
            .iter()
            .map(RawPhoneNumber::raw)
            .collect(),
        sender_name: request.sender_name().as_str(),
    }
}

pub fn encode_send_group_message_body(request: &SendGroupMessage) -> SendGroupMessageBody<'_> {
    SendGroupMessageBody {
        message: request.message().as_str(),
        sender_name: request.sender_name().as_str(),
    }
}

pub fn send_group_message_endpoint(request: &SendGroupMessage) -> Endpoint<'_> {
    Endpoint::with_id(SEND_GROUP_MESSAGE_PATH, request.group_id().as_str())
}

pub fn message_status_endpoint(message_id: &MessageId) -> Endpoint<'_> {
    Endpoint::with_id(MESSAGE_STATUS_PATH, message_id.as_str())
}

pub fn message_status_bulk_endpoint(batch_id: &BatchId) -> Endpoint<'_> {
    Endpoint::with_id(MESSAGE_STATUS_BULK_PATH, batch_id.as_str())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn single_message_body_uses_sender_name_key() {
        let req = SendMessage::new("Hello", "1234567890", "MyApp").unwrap();
        let body = serde_json::to_string(&encode_send_message_body(&req)).unwrap();
        assert_eq!(
            body,
            r#"{"message":"Hello","contact":"1234567890","senderName":"MyApp"}"#
        );
    }

    #[test]
    fn bulk_body_lists_contacts_in_order() {
        let req = SendBulkMessage::new("Hi all", "MyApp", ["111", "222"]).unwrap();
        let body = serde_json::to_value(encode_send_bulk_message_body(&req)).unwrap();
        assert_eq!(
            body,
            json!({
                "message": "Hi all",
                "contacts": ["111", "222"],
                "senderName": "MyApp"
            })
        );
    }

    #[test]
    fn group_body_leaves_group_id_to_the_path() {
        let req = SendGroupMessage::new("Hi group", "MyApp", "grp-7").unwrap();
        let body = serde_json::to_value(encode_send_group_message_body(&req)).unwrap();
        assert_eq!(body, json!({ "message": "Hi group", "senderName": "MyApp" }));

        let url = send_group_message_endpoint(&req)
            .url("https://api.passinfo.net")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.passinfo.net/v1/message/send_message_to_group/grp-7"
        );
    }

    #[test]
    fn status_endpoints_embed_ids() {
        let id = MessageId::new("123").unwrap();
        assert_eq!(
            message_status_endpoint(&id)
                .url("https://api.passinfo.net")
                .unwrap()
                .path(),
            "/v1/message/get_single_status/123"
        );

        let batch = BatchId::new("b-9").unwrap();
        assert_eq!(
            message_status_bulk_endpoint(&batch)
                .url("https://api.passinfo.net")
                .unwrap()
                .path(),
            "/v1/message/get_bulk_status/b-9"
        );
    }
}
