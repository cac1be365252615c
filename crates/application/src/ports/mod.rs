//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod directory_port;
mod resolver_port;
mod weather_port;

pub use directory_port::DirectoryPort;
#[cfg(test)]
pub use directory_port::MockDirectoryPort;
#[cfg(test)]
pub use resolver_port::MockResolverPort;
pub use resolver_port::{RelayedResponse, ResolverPort};
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::WeatherPort;
