//! Front gateway handler

use application::{RelayedResponse, RequestContext};
use axum::{
    Extension,
    body::{Body, Bytes},
    extract::State,
    http::{HeaderValue, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use tracing::{debug, instrument};

use super::PostalCodeRequest;
use crate::{error::ApiError, state::GatewayState};

/// Validate the postal code and relay the resolver's answer
///
/// The resolver's status, body and `Content-Type` are passed back as-is.
#[instrument(skip_all)]
pub async fn lookup(
    State(state): State<GatewayState>,
    ctx: Option<Extension<RequestContext>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request: PostalCodeRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "Rejecting malformed request body");
        ApiError::BadRequest(e.to_string())
    })?;

    let ctx = ctx.map(|Extension(ctx)| ctx).unwrap_or_default();
    let relayed = state.gateway_service.forward(&ctx, &request.cep).await?;

    Ok(relay(relayed))
}

/// Turn a relayed resolver response into an HTTP response
fn relay(relayed: RelayedResponse) -> Response {
    let status = StatusCode::from_u16(relayed.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = relayed
        .content_type
        .and_then(|ct| HeaderValue::from_str(&ct).ok());

    let mut response = (status, Body::from(relayed.body)).into_response();
    match content_type {
        Some(ct) => {
            response.headers_mut().insert(CONTENT_TYPE, ct);
        },
        None => {
            response.headers_mut().remove(CONTENT_TYPE);
        },
    }
    response
}
