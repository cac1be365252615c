//! ViaCEP postal directory integration
//!
//! Client for the ViaCEP API (<https://viacep.com.br>), which maps Brazilian
//! postal codes (CEP) to addresses. Only the locality is used downstream.

pub mod client;
mod models;

pub use client::{PostalDirectoryClient, ViaCepClient, ViaCepConfig, ViaCepError};
pub use models::Address;
