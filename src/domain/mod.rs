//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    AddContactToGroup, AddUsersToContact, CreateContact, LIST_CONTACTS_DEFAULT_LIMIT,
    LIST_CONTACTS_DEFAULT_PAGE, ListContacts, SendBulkMessage, SendGroupMessage, SendMessage,
};
pub use response::Contact;
pub use validation::ValidationError;
pub use value::{
    ApiKey, BatchId, ClientId, ContactId, GroupId, MessageId, MessageText, RawPhoneNumber,
    SenderName, UserId,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_rejects_empty() {
        assert!(matches!(
            ApiKey::new("   "),
            Err(ValidationError::Empty {
                field: ApiKey::FIELD
            })
        ));
    }

    #[test]
    fn message_text_preserves_whitespace() {
        let msg = MessageText::new("  hello  ").unwrap();
        assert_eq!(msg.as_str(), "  hello  ");
        assert!(MessageText::new(" \n ").is_err());
    }

    #[test]
    fn send_message_reports_first_missing_field() {
        let err = SendMessage::new("", "1234567890", "MyApp").unwrap_err();
        assert_eq!(
            err,
            ValidationError::Empty {
                field: MessageText::FIELD
            }
        );

        let err = SendMessage::new("Hello", " ", "MyApp").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "contact" });

        let err = SendMessage::new("Hello", "1234567890", "").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "senderName" });
    }

    #[test]
    fn bulk_message_requires_contacts() {
        let err = SendBulkMessage::new("Hello", "MyApp", Vec::<String>::new()).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "contacts" });

        let req = SendBulkMessage::new("Hello", "MyApp", ["1234567890"]).unwrap();
        assert_eq!(req.contacts().len(), 1);
    }

    #[test]
    fn bulk_message_rejects_blank_contact_entry() {
        let err = SendBulkMessage::new("Hello", "MyApp", ["1234567890", "  "]).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "contact" });
    }

    #[test]
    fn group_message_requires_group_id() {
        let err = SendGroupMessage::new("Hello", "MyApp", "").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "group_id" });
    }

    #[test]
    fn path_ids_reject_dot_segments() {
        assert_eq!(
            MessageId::new("..").unwrap_err(),
            ValidationError::DotSegment {
                field: MessageId::FIELD,
                value: "..".to_owned(),
            }
        );
        assert!(matches!(
            BatchId::new(" . "),
            Err(ValidationError::DotSegment {
                field: BatchId::FIELD,
                ..
            })
        ));
        assert!(matches!(
            SendGroupMessage::new("Hello", "MyApp", ".."),
            Err(ValidationError::DotSegment {
                field: "group_id",
                ..
            })
        ));
        assert!(matches!(
            AddContactToGroup::new("c1", "."),
            Err(ValidationError::DotSegment {
                field: "group_id",
                ..
            })
        ));
        assert_eq!(MessageId::new(".hidden").unwrap().as_str(), ".hidden");
    }

    #[test]
    fn create_contact_requires_every_field() {
        assert_eq!(
            CreateContact::new("", "Doe", "+123").unwrap_err(),
            ValidationError::Empty {
                field: "first_name"
            }
        );
        assert_eq!(
            CreateContact::new("John", "", "+123").unwrap_err(),
            ValidationError::Empty { field: "last_name" }
        );
        assert_eq!(
            CreateContact::new("John", "Doe", " ").unwrap_err(),
            ValidationError::Empty {
                field: "phone_number"
            }
        );
    }

    #[test]
    fn create_contact_maps_to_contact() {
        let req = CreateContact::new(" John ", "Doe", "+1234567890").unwrap();
        assert_eq!(req.to_contact(), Contact::new("John", "Doe", "+1234567890"));
    }

    #[test]
    fn add_users_requires_user_ids() {
        let err = AddUsersToContact::new("c1", Vec::<String>::new()).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "user_ids" });
    }

    #[test]
    fn list_contacts_defaults_and_range() {
        let req = ListContacts::default();
        assert_eq!(req.page(), 1);
        assert_eq!(req.limit(), 10);

        assert!(matches!(
            ListContacts::new(0, 10),
            Err(ValidationError::OutOfRange { field: "page", .. })
        ));
        assert!(matches!(
            ListContacts::new(1, 0),
            Err(ValidationError::OutOfRange { field: "limit", .. })
        ));
        assert!(ListContacts::new(3, 50).is_ok());
    }

    #[test]
    fn contact_fields_read_back_unchanged() {
        let contact = Contact::new("Jane", "Roe", "+33612345678");
        assert_eq!(contact.first_name, "Jane");
        assert_eq!(contact.last_name, "Roe");
        assert_eq!(contact.phone_number, "+33612345678");
    }
}
