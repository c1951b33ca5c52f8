use crate::domain::response::Contact;
use crate::domain::validation::{ValidationError, require_non_blank};
use crate::domain::value::{ContactId, GroupId, MessageText, RawPhoneNumber, SenderName, UserId};

pub const LIST_CONTACTS_DEFAULT_PAGE: u32 = 1;
pub const LIST_CONTACTS_DEFAULT_LIMIT: u32 = 10;

#[derive(Debug, Clone)]
pub struct SendMessage {
    message: MessageText,
    contact: RawPhoneNumber,
    sender_name: SenderName,
}

impl SendMessage {
    pub fn new(
        message: impl Into<String>,
        contact: impl Into<String>,
        sender_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::from_parts(
            MessageText::new(message)?,
            RawPhoneNumber::new(contact)?,
            SenderName::new(sender_name)?,
        ))
    }

    pub fn from_parts(
        message: MessageText,
        contact: RawPhoneNumber,
        sender_name: SenderName,
    ) -> Self {
        Self {
            message,
            contact,
            sender_name,
        }
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn contact(&self) -> &RawPhoneNumber {
        &self.contact
    }

    pub fn sender_name(&self) -> &SenderName {
        &self.sender_name
    }
}

#[derive(Debug, Clone)]
pub struct SendBulkMessage {
    message: MessageText,
    sender_name: SenderName,
    contacts: Vec<RawPhoneNumber>,
}

impl SendBulkMessage {
    pub const CONTACTS_FIELD: &'static str = "contacts";

    pub fn new<I, S>(
        message: impl Into<String>,
        sender_name: impl Into<String>,
        contacts: I,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let message = MessageText::new(message)?;
        let contacts = contacts
            .into_iter()
            .map(RawPhoneNumber::new)
            .collect::<Result<Vec<_>, _>>()?;
        if contacts.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::CONTACTS_FIELD,
            });
        }
        let sender_name = SenderName::new(sender_name)?;
        Ok(Self {
            message,
            sender_name,
            contacts,
        })
    }

    pub fn from_parts(
        message: MessageText,
        sender_name: SenderName,
        contacts: Vec<RawPhoneNumber>,
    ) -> Result<Self, ValidationError> {
        if contacts.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::CONTACTS_FIELD,
            });
        }
        Ok(Self {
            message,
            sender_name,
            contacts,
        })
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn sender_name(&self) -> &SenderName {
        &self.sender_name
    }

    pub fn contacts(&self) -> &[RawPhoneNumber] {
        &self.contacts
    }
}

#[derive(Debug, Clone)]
pub struct SendGroupMessage {
    message: MessageText,
    sender_name: SenderName,
    group_id: GroupId,
}

impl SendGroupMessage {
    pub fn new(
        message: impl Into<String>,
        sender_name: impl Into<String>,
        group_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::from_parts(
            MessageText::new(message)?,
            SenderName::new(sender_name)?,
            GroupId::new(group_id)?,
        ))
    }

    pub fn from_parts(message: MessageText, sender_name: SenderName, group_id: GroupId) -> Self {
        Self {
            message,
            sender_name,
            group_id,
        }
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn sender_name(&self) -> &SenderName {
        &self.sender_name
    }

    pub fn group_id(&self) -> &GroupId {
        &self.group_id
    }
}

/// New contact to register with `v1/contact/add_contact`.
///
/// Invariant: all three fields are non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateContact {
    first_name: String,
    last_name: String,
    phone_number: String,
}

impl CreateContact {
    pub const FIRST_NAME_FIELD: &'static str = "first_name";
    pub const LAST_NAME_FIELD: &'static str = "last_name";
    pub const PHONE_NUMBER_FIELD: &'static str = "phone_number";

    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: require_non_blank(first_name, Self::FIRST_NAME_FIELD)?,
            last_name: require_non_blank(last_name, Self::LAST_NAME_FIELD)?,
            phone_number: require_non_blank(phone_number, Self::PHONE_NUMBER_FIELD)?,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// The contact this request describes, as returned once the server accepts it.
    pub fn to_contact(&self) -> Contact {
        Contact::new(
            self.first_name.clone(),
            self.last_name.clone(),
            self.phone_number.clone(),
        )
    }
}

#[derive(Debug, Clone)]
pub struct AddContactToGroup {
    contact_id: ContactId,
    group_id: GroupId,
}

impl AddContactToGroup {
    pub fn new(
        contact_id: impl Into<String>,
        group_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::from_parts(
            ContactId::new(contact_id)?,
            GroupId::new(group_id)?,
        ))
    }

    pub fn from_parts(contact_id: ContactId, group_id: GroupId) -> Self {
        Self {
            contact_id,
            group_id,
        }
    }

    pub fn contact_id(&self) -> &ContactId {
        &self.contact_id
    }

    pub fn group_id(&self) -> &GroupId {
        &self.group_id
    }
}

#[derive(Debug, Clone)]
pub struct AddUsersToContact {
    contact_id: ContactId,
    user_ids: Vec<UserId>,
}

impl AddUsersToContact {
    pub const USER_IDS_FIELD: &'static str = "user_ids";

    pub fn new<I, S>(contact_id: impl Into<String>, user_ids: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let contact_id = ContactId::new(contact_id)?;
        let user_ids = user_ids
            .into_iter()
            .map(UserId::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_parts(contact_id, user_ids)
    }

    pub fn from_parts(
        contact_id: ContactId,
        user_ids: Vec<UserId>,
    ) -> Result<Self, ValidationError> {
        if user_ids.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::USER_IDS_FIELD,
            });
        }
        Ok(Self {
            contact_id,
            user_ids,
        })
    }

    pub fn contact_id(&self) -> &ContactId {
        &self.contact_id
    }

    pub fn user_ids(&self) -> &[UserId] {
        &self.user_ids
    }
}

/// Page selection for `v1/contact/all_my_contacts`.
///
/// Invariant: `page >= 1` and `limit >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListContacts {
    page: u32,
    limit: u32,
}

impl ListContacts {
    pub const PAGE_FIELD: &'static str = "page";
    pub const LIMIT_FIELD: &'static str = "limit";

    pub fn new(page: u32, limit: u32) -> Result<Self, ValidationError> {
        if page < 1 {
            return Err(ValidationError::OutOfRange {
                field: Self::PAGE_FIELD,
                min: 1,
                actual: page,
            });
        }
        if limit < 1 {
            return Err(ValidationError::OutOfRange {
                field: Self::LIMIT_FIELD,
                min: 1,
                actual: limit,
            });
        }
        Ok(Self { page, limit })
    }

    pub fn page(self) -> u32 {
        self.page
    }

    pub fn limit(self) -> u32 {
        self.limit
    }
}

impl Default for ListContacts {
    fn default() -> Self {
        Self {
            page: LIST_CONTACTS_DEFAULT_PAGE,
            limit: LIST_CONTACTS_DEFAULT_LIMIT,
        }
    }
}
