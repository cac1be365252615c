//! ViaCEP response models

use serde::{Deserialize, Serialize};

/// Address record returned by `GET /ws/{cep}/json/`
///
/// Every field defaults to empty: unknown codes come back as
/// `{"erro": true}` with no address fields at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Postal code in `00000-000` form
    #[serde(default)]
    pub cep: String,
    /// Street
    #[serde(default)]
    pub logradouro: String,
    /// Neighborhood
    #[serde(default)]
    pub bairro: String,
    /// City
    #[serde(default)]
    pub localidade: String,
    /// State abbreviation
    #[serde(default)]
    pub uf: String,
}

impl Address {
    /// The city name, if present and non-empty
    pub fn locality(&self) -> Option<&str> {
        Some(self.localidade.as_str()).filter(|l| !l.is_empty())
    }
}
