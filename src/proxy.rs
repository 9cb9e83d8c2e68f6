use axum::{
    body::{self, Bytes},
    extract::{Query, Request},
    http::{
        HeaderName, Method, StatusCode,
        header::{CACHE_CONTROL, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};

use crate::{
    error::{AppError, AppResult},
    state::AppState,
    upstream::Service,
};

const JSON: &str = "application/json";
const NO_STORE: &str = "no-store";
const REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Methods whose inbound body is forwarded upstream.
fn carries_body(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}

/// Resolves `service` and forwards the request to `path` on it.
pub async fn forward(
    state: &AppState,
    service: Service,
    path: &str,
    request: Request,
    method: Option<Method>,
) -> AppResult<Response> {
    let url = state.services.url(service, path);
    proxy_request(&state.http, &url, request, method).await
}

/// Forwards `request` to `upstream_url` and relays the upstream status and body.
///
/// The outbound call always declares a JSON content type and never caches. The
/// inbound body is only sent for POST, PUT and PATCH, and only when it is
/// non-empty and readable. Query parameters are re-serialized onto the upstream
/// URL. The relayed response is labelled JSON whatever the upstream returned.
pub async fn proxy_request(
    http: &reqwest::Client,
    upstream_url: &str,
    request: Request,
    method: Option<Method>,
) -> AppResult<Response> {
    let (parts, body) = request.into_parts();
    let method = method.unwrap_or_else(|| parts.method.clone());

    let query: Vec<(String, String)> = if parts.uri.query().is_some() {
        Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?
            .0
    } else {
        Vec::new()
    };

    let mut outbound = http
        .request(method.clone(), upstream_url)
        .header(CONTENT_TYPE, JSON)
        .header(CACHE_CONTROL, NO_STORE)
        .query(&query);

    if let Some(request_id) = parts.headers.get(&REQUEST_ID) {
        outbound = outbound.header(REQUEST_ID, request_id.clone());
    }

    if carries_body(&method) {
        match body::to_bytes(body, usize::MAX).await {
            Ok(bytes) if !bytes.is_empty() => outbound = outbound.body(bytes),
            Ok(_) => {}
            Err(err) => tracing::debug!(error = %err, "inbound body unreadable, sending none"),
        }
    }

    let upstream = outbound.send().await.map_err(|source| {
        tracing::error!(%method, url = %upstream_url, error = %source, "upstream request failed");
        AppError::Upstream {
            url: upstream_url.to_string(),
            source,
        }
    })?;

    let status = upstream.status();
    let data = upstream.bytes().await.map_err(|source| {
        tracing::error!(%method, url = %upstream_url, error = %source, "upstream body read failed");
        AppError::Upstream {
            url: upstream_url.to_string(),
            source,
        }
    })?;

    tracing::debug!(%method, url = %upstream_url, status = %status, "proxied");
    Ok(relay(status, data))
}

fn relay(status: StatusCode, data: Bytes) -> Response {
    (status, [(CONTENT_TYPE, JSON), (CACHE_CONTROL, NO_STORE)], data).into_response()
}
