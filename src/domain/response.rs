/// A PassInfo contact: plain value, no identity beyond its fields.
///
/// Fields decoded from server data default to an empty string when absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl Contact {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
        }
    }
}
