use serde::Deserialize;

/// Numeric value returned either as a JSON number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TransportNumber {
    Number(serde_json::Number),
    String(String),
}

impl TransportNumber {
    /// `None` when the string form does not parse.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => value.as_f64(),
            Self::String(value) => value.trim().parse::<f64>().ok(),
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::String(value) => value,
        }
    }
}

/// Text field that some records carry as a number (phone numbers, mostly).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TransportText {
    String(String),
    Number(serde_json::Number),
}

impl TransportText {
    pub fn into_string(self) -> String {
        match self {
            Self::String(value) => value,
            Self::Number(value) => value.to_string(),
        }
    }
}

/// `success` flag: `true`, a non-zero number, or the string `"true"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TransportFlag {
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl TransportFlag {
    pub fn is_set(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Number(value) => value.as_f64().is_some_and(|it| it != 0.0),
            Self::String(value) => value.trim().eq_ignore_ascii_case("true"),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn number_accepts_numeric_and_string_forms() {
        let n: TransportNumber = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(n.to_f64(), Some(42.0));

        let n: TransportNumber = serde_json::from_value(json!(" 12.5 ")).unwrap();
        assert_eq!(n.to_f64(), Some(12.5));

        let n: TransportNumber = serde_json::from_value(json!("n/a")).unwrap();
        assert_eq!(n.to_f64(), None);
        assert_eq!(n.into_string(), "n/a");
    }

    #[test]
    fn text_keeps_numbers_as_decimal_text() {
        let t: TransportText = serde_json::from_value(json!(33612345678_u64)).unwrap();
        assert_eq!(t.into_string(), "33612345678");
    }

    #[test]
    fn flag_truthiness() {
        let set = |v| serde_json::from_value::<TransportFlag>(v).unwrap().is_set();
        assert!(set(json!(true)));
        assert!(!set(json!(false)));
        assert!(set(json!(1)));
        assert!(!set(json!(0)));
        assert!(set(json!("TRUE")));
        assert!(!set(json!("no")));
    }
}
