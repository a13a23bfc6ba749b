use crate::{
    dto::{ErrorResponse, LookupQuery},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use ferrous_lookup_domain::DomainError;
use serde::Serialize;
use tracing::{debug, error, instrument, warn};

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

#[instrument(skip(state), name = "api_lookup")]
pub async fn lookup(State(state): State<AppState>, Query(params): Query<LookupQuery>) -> Response {
    let Some(domain) = params.domain() else {
        debug!("Lookup requested without a domain");
        return text_json(StatusCode::OK, &ErrorResponse::missing_domain());
    };

    match state
        .resolve_with_cache
        .execute(domain, params.force_update())
        .await
    {
        Ok(result) => text_json(StatusCode::OK, &result),
        Err(DomainError::DnsNotFound(_) | DomainError::InvalidDomainName(_)) => {
            warn!(domain = %domain, "DNS lookup found nothing");
            text_json(StatusCode::OK, &ErrorResponse::dns_not_found(domain))
        }
        Err(e) => {
            error!(domain = %domain, error = %e, "Lookup failed");
            text_json(
                StatusCode::SERVICE_UNAVAILABLE,
                &ErrorResponse::store_unavailable(),
            )
        }
    }
}

/// JSON body served as plain text, as existing clients expect.
fn text_json<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_string(body) {
        Ok(json) => (status, [(header::CONTENT_TYPE, TEXT_PLAIN)], json).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to serialize response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
