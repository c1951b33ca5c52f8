use crate::domain::validation::{ValidationError, require_non_blank, require_path_segment};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// PassInfo API key, sent in the `Api-Key` header.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Header name used by PassInfo (`Api-Key`).
    pub const FIELD: &'static str = "Api-Key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(require_non_blank(value, Self::FIELD)?))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// PassInfo client identifier, sent in the `Client-Id` header.
///
/// Invariant: non-empty after trimming.
pub struct ClientId(String);

impl ClientId {
    /// Header name used by PassInfo (`Client-Id`).
    pub const FIELD: &'static str = "Client-Id";

    /// Create a validated [`ClientId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(require_non_blank(value, Self::FIELD)?))
    }

    /// Borrow the validated client id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message body (`message`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// JSON field name used by PassInfo (`message`).
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Name shown to recipients as the sender (`senderName`).
///
/// Invariant: non-empty after trimming.
pub struct SenderName(String);

impl SenderName {
    /// JSON field name used by PassInfo (`senderName`).
    pub const FIELD: &'static str = "senderName";

    /// Create a validated [`SenderName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(require_non_blank(value, Self::FIELD)?))
    }

    /// Borrow the validated sender name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated recipient phone number as sent to PassInfo (`contact`).
///
/// Invariant: non-empty after trimming. No normalization is applied.
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// JSON field name used by PassInfo for a single recipient (`contact`).
    pub const FIELD: &'static str = "contact";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(require_non_blank(value, Self::FIELD)?))
    }

    /// Raw (trimmed) value as sent to PassInfo.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Id of a single sent message (`message_id`), as returned by `send_message`.
///
/// Invariant: non-empty after trimming, and never `.` or `..`.
pub struct MessageId(String);

impl MessageId {
    /// Path parameter name used by PassInfo (`message_id`).
    pub const FIELD: &'static str = "message_id";

    /// Create a validated [`MessageId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(require_path_segment(value, Self::FIELD)?))
    }

    /// Borrow the validated message id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Id of a bulk send batch (`batch_id`).
///
/// Invariant: non-empty after trimming, and never `.` or `..`.
pub struct BatchId(String);

impl BatchId {
    /// Path parameter name used by PassInfo (`batch_id`).
    pub const FIELD: &'static str = "batch_id";

    /// Create a validated [`BatchId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(require_path_segment(value, Self::FIELD)?))
    }

    /// Borrow the validated batch id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Server-side contact group id (`group_id`).
///
/// Invariant: non-empty after trimming, and never `.` or `..`.
pub struct GroupId(String);

impl GroupId {
    /// Field name used by PassInfo (`group_id`).
    pub const FIELD: &'static str = "group_id";

    /// Create a validated [`GroupId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(require_path_segment(value, Self::FIELD)?))
    }

    /// Borrow the validated group id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Server-side contact id (`contact_id`).
///
/// Invariant: non-empty after trimming.
pub struct ContactId(String);

impl ContactId {
    /// Field name used by PassInfo (`contact_id`).
    pub const FIELD: &'static str = "contact_id";

    /// Create a validated [`ContactId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(require_non_blank(value, Self::FIELD)?))
    }

    /// Borrow the validated contact id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// PassInfo user account id, one element of `user_ids`.
///
/// Invariant: non-empty after trimming.
pub struct UserId(String);

impl UserId {
    /// Field name used when a single user id is rejected (`user_id`).
    pub const FIELD: &'static str = "user_id";

    /// Create a validated [`UserId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(require_non_blank(value, Self::FIELD)?))
    }

    /// Borrow the validated user id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
