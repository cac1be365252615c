//! Domain layer for CEP Weather
//!
//! Contains the value objects shared by the gateway and the resolver:
//! postal codes, city names, temperatures and the aggregated weather report.
//! This layer has no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
