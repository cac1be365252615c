//! City name value object

use std::fmt;

use serde::Serialize;

use crate::errors::DomainError;

/// A non-empty city name as returned by the postal directory
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct City(String);

impl City {
    /// Create a city name
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyCityName` if the name is empty. An empty
    /// locality from the directory means "not found", never a valid city.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyCityName);
        }
        Ok(Self(name))
    }

    /// Get the city name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_name_is_accepted() {
        let city = City::new("São Paulo").unwrap();
        assert_eq!(city.as_str(), "São Paulo");
        assert_eq!(city.to_string(), "São Paulo");
    }

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(City::new(""), Err(DomainError::EmptyCityName));
    }

    #[test]
    fn into_inner_returns_name() {
        let city = City::new("Curitiba").unwrap();
        assert_eq!(city.into_inner(), "Curitiba");
    }
}
