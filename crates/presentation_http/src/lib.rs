//! HTTP presentation layer
//!
//! Axum routers, handlers and middleware for the two services: the front
//! gateway that validates and forwards postal codes, and the resolver that
//! turns them into weather reports.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use middleware::CorrelationLayer;
pub use routes::{create_gateway_router, create_resolver_router};
pub use server::serve;
pub use state::{GatewayState, ResolverState};
