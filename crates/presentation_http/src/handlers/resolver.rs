//! Resolver aggregator handler

use application::RequestContext;
use axum::{Extension, Json, body::Bytes, extract::State};
use domain::WeatherReport;
use tracing::{debug, instrument};

use super::PostalCodeRequest;
use crate::{error::ApiError, state::ResolverState};

/// Resolve a postal code into the current temperature of its city
///
/// An unreadable body is reported the same way as an invalid code.
#[instrument(skip_all)]
pub async fn lookup(
    State(state): State<ResolverState>,
    ctx: Option<Extension<RequestContext>>,
    body: Bytes,
) -> Result<Json<WeatherReport>, ApiError> {
    let request: PostalCodeRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "Rejecting unreadable request body");
        ApiError::InvalidZipcode
    })?;

    let ctx = ctx.map(|Extension(ctx)| ctx).unwrap_or_default();
    let report = state.resolver_service.resolve(&ctx, &request.cep).await?;

    Ok(Json(report))
}
