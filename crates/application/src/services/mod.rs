//! Application services - Use case implementations

mod gateway_service;
mod resolver_service;

pub use gateway_service::GatewayService;
pub use resolver_service::ResolverService;
