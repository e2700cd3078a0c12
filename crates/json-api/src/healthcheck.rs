//! Healthcheck
//!
//! Reports whether the kitchen can take orders: the catalog must answer and at
//! least one dish must be available.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::{extensions::*, state::State};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `ok`, or `degraded` when nothing on the menu can be ordered
    pub status: String,

    /// Dishes on the menu
    pub dishes: usize,

    /// Dishes that can currently be ordered
    pub available_dishes: usize,

    /// Seconds since the in-memory store was created
    pub uptime_seconds: i64,
}

/// Healthcheck handler
#[endpoint(
    tags("health"),
    summary = "Health check endpoint",
    responses(
        (status_code = StatusCode::OK, description = "Catalog reachable"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Catalog unavailable"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HealthResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let foods = state.app.foods.list_foods().await.map_err(|source| {
        error!("healthcheck could not read the catalog: {source}");

        StatusError::service_unavailable().brief("Catalog unavailable")
    })?;

    let available_dishes = foods.iter().filter(|item| item.is_available).count();

    Ok(Json(HealthResponse {
        status: if available_dishes > 0 { "ok" } else { "degraded" }.to_string(),
        dishes: foods.len(),
        available_dishes,
        uptime_seconds: Timestamp::now().duration_since(state.started_at).as_secs(),
    }))
}
