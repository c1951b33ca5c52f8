use serde::Deserialize;
use serde_json::Value;

use super::TransportError;
use super::scalar::TransportFlag;

#[derive(Debug, Clone, Deserialize)]
struct SuccessJsonResponse {
    #[serde(default)]
    success: Option<TransportFlag>,
}

/// Read the top-level `success` flag; absent or `null` means `false`.
pub fn decode_success_flag(value: Value) -> Result<bool, TransportError> {
    let parsed: SuccessJsonResponse = serde_json::from_value(value)?;
    Ok(parsed.success.as_ref().is_some_and(TransportFlag::is_set))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_or_null_flag_is_false() {
        assert!(!decode_success_flag(json!({})).unwrap());
        assert!(!decode_success_flag(json!({ "success": null })).unwrap());
        assert!(decode_success_flag(json!({ "success": true, "extra": 1 })).unwrap());
    }

    #[test]
    fn non_object_payload_is_an_error() {
        assert!(matches!(
            decode_success_flag(json!([1, 2])),
            Err(TransportError::Json(_))
        ));
    }
}
