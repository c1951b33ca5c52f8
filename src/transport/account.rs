use serde::Deserialize;
use serde_json::Value;

use super::scalar::TransportNumber;
use super::{Endpoint, TransportError};

pub const GET_CREDIT_BALANCE: Endpoint<'static> = Endpoint::fixed("v1/user/get_solde");
pub const RENEW_API_KEY: Endpoint<'static> = Endpoint::fixed("v1/user/renew_api_key");

const SOLDE_FIELD: &str = "solde";

#[derive(Debug, Clone, Deserialize)]
struct BalanceJsonResponse {
    #[serde(default)]
    solde: Option<TransportNumber>,
}

#[derive(Debug, Clone, Deserialize)]
struct RenewApiKeyJsonResponse {
    #[serde(default)]
    new_api_key: Option<String>,
}

/// Remaining SMS credits; an absent `solde` reads as `0`.
pub fn decode_credit_balance_response(value: Value) -> Result<f64, TransportError> {
    let parsed: BalanceJsonResponse = serde_json::from_value(value)?;
    match parsed.solde {
        None => Ok(0.0),
        Some(solde) => solde.to_f64().ok_or_else(|| TransportError::InvalidNumber {
            field: SOLDE_FIELD,
            value: solde.into_string(),
        }),
    }
}

/// The freshly issued key; an absent `new_api_key` reads as `""`.
pub fn decode_renew_api_key_response(value: Value) -> Result<String, TransportError> {
    let parsed: RenewApiKeyJsonResponse = serde_json::from_value(value)?;
    Ok(parsed.new_api_key.unwrap_or_default())
}
