use std::collections::BTreeMap;

use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{response::ApiResponse, state::AppState, upstream::Service};

#[derive(Serialize, ToSchema)]
pub struct HealthData {
    pub status: String,
    pub gateway: bool,
    /// Logical service name to the base URL requests for it are sent to.
    pub upstreams: BTreeMap<String, String>,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = ApiResponse<HealthData>),
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<HealthData>> {
    let upstreams = Service::ALL
        .into_iter()
        .map(|service| {
            (
                service.name().to_string(),
                state.services.base_url(service).to_string(),
            )
        })
        .collect();

    let data = HealthData {
        status: "ok".to_string(),
        gateway: state.services.is_gateway(),
        upstreams,
    };

    Json(ApiResponse::success("Health check", data))
}
