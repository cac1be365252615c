//! Inbound request correlation
//!
//! Every request leaves this layer with a `RequestContext` in its
//! extensions, ready for the handlers to pass into the services. The id is
//! taken from a UUID `X-Request-Id` header or generated, and echoed on the
//! response, so the gateway and the resolver log the same id for one
//! lookup. With OTLP export on, the request span continues the caller's
//! `traceparent`.

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use application::RequestContext;
use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    response::Response,
};
use infrastructure::{X_REQUEST_ID, telemetry::propagation};
use tower::{Layer, Service};
use tracing::Instrument;
use uuid::Uuid;

/// Request id sent by the caller, if it parses as a UUID
pub fn incoming_request_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
}

/// Layer attaching a `RequestContext` and a correlated span to each request
#[derive(Debug, Clone, Copy)]
pub struct CorrelationLayer {
    service: &'static str,
}

impl CorrelationLayer {
    /// `service` is recorded on every request span
    pub const fn new(service: &'static str) -> Self {
        Self { service }
    }
}

impl<S> Layer<S> for CorrelationLayer {
    type Service = CorrelationService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CorrelationService {
            inner,
            service: self.service,
        }
    }
}

/// Service produced by [`CorrelationLayer`]
#[derive(Debug, Clone)]
pub struct CorrelationService<S> {
    inner: S,
    service: &'static str,
}

impl<S> Service<Request> for CorrelationService<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Response, S::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request) -> Self::Future {
        let ctx = incoming_request_id(request.headers())
            .map_or_else(RequestContext::new, RequestContext::with_request_id);
        let request_id = ctx.request_id();
        request.extensions_mut().insert(ctx);

        let span = tracing::info_span!(
            "http_request",
            service = self.service,
            request_id = %request_id,
            method = %request.method(),
            path = %request.uri().path(),
        );
        propagation::set_parent_from_headers(&span, request.headers());

        // The clone left behind takes the next poll_ready
        let ready = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, ready);

        Box::pin(
            async move {
                let mut response = inner.call(request).await?;
                if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
                    response.headers_mut().insert(X_REQUEST_ID, value);
                }
                Ok(response)
            }
            .instrument(span),
        )
    }
}
