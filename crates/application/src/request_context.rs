//! Request context for propagating request metadata
//!
//! A `RequestContext` is created by the HTTP layer for every inbound request
//! and passed explicitly to services and ports. It carries the correlation
//! id that outbound adapters forward downstream and record on their spans.
//!
//! # Examples
//!
//! ```
//! use application::RequestContext;
//! use uuid::Uuid;
//!
//! let ctx = RequestContext::new();
//! assert!(!ctx.request_id().is_nil());
//!
//! let id = Uuid::new_v4();
//! assert_eq!(RequestContext::with_request_id(id).request_id(), id);
//! ```

use uuid::Uuid;

/// Context for a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    request_id: Uuid,
}

impl RequestContext {
    /// Create a context with a freshly generated request id
    #[must_use]
    pub fn new() -> Self {
        Self {
            request_id: Uuid::now_v7(),
        }
    }

    /// Create a context for a request id received from upstream
    #[must_use]
    pub const fn with_request_id(request_id: Uuid) -> Self {
        Self { request_id }
    }

    /// Get the unique request identifier
    #[must_use]
    pub const fn request_id(&self) -> Uuid {
        self.request_id
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_unique_request_id() {
        let a = RequestContext::new();
        let b = RequestContext::new();
        assert_ne!(a.request_id(), b.request_id());
    }

    #[test]
    fn with_request_id_keeps_id() {
        let id = Uuid::new_v4();
        let ctx = RequestContext::with_request_id(id);
        assert_eq!(ctx.request_id(), id);
    }
}
