//! Application layer - Use cases and orchestration
//!
//! Contains the gateway and resolver use cases and the ports they drive.
//! Adapters in the infrastructure layer implement the ports.

pub mod error;
pub mod ports;
pub mod request_context;
pub mod services;

pub use error::{ApplicationError, DirectoryError, ForwardError, WeatherLookupError};
pub use ports::*;
pub use request_context::RequestContext;
pub use services::*;
