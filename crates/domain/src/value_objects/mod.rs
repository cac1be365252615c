//! Value Objects - Immutable, identity-less domain primitives

mod city;
mod postal_code;
mod temperature;

pub use city::City;
pub use postal_code::{PostalCode, is_valid_postal_code, normalize_postal_code};
pub use temperature::Temperature;
