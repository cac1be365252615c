//! HTTP request handlers

pub mod gateway;
pub mod health;
pub mod resolver;

use serde::Deserialize;

/// Body accepted by both services' `POST /cep`
///
/// A missing `cep` is read as an empty code so that it fails validation
/// rather than parsing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostalCodeRequest {
    /// Raw postal code, hyphens allowed
    #[serde(default)]
    pub cep: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cep_defaults_to_empty() {
        let request: PostalCodeRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.cep, "");
    }

    #[test]
    fn wrong_cep_type_is_rejected() {
        assert!(serde_json::from_str::<PostalCodeRequest>(r#"{"cep": 1310100}"#).is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let request: PostalCodeRequest =
            serde_json::from_str(r#"{"cep": "01310-100", "extra": true}"#).unwrap();
        assert_eq!(request.cep, "01310-100");
    }
}
