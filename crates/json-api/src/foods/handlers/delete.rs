//! Delete Food Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use thali::catalog::FoodItemId;

use crate::{
    auth::MessageResponse, extensions::*, foods::errors::into_status_error, state::State,
};

/// Delete Food Handler
#[endpoint(
    tags("foods"),
    summary = "Delete Food Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Food item deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Food item not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Not signed in"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.admin_or_403()?;

    let id = FoodItemId::new(id.into_inner());

    state
        .app
        .foods
        .delete_food(id)
        .await
        .map_err(into_status_error)?;

    tracing::info!(food_id = %id, "deleted food item");

    Ok(Json(MessageResponse::new("Food item deleted successfully")))
}
