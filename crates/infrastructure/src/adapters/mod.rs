//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod directory_adapter;
mod resolver_client;
mod weather_adapter;

pub use directory_adapter::DirectoryAdapter;
pub use resolver_client::ResolverHttpClient;
pub use weather_adapter::WeatherAdapter;
