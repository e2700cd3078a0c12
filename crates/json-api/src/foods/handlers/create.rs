//! Create Food Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    foods::{CreateFoodRequest, FoodResponse, errors::into_status_error},
    state::State,
};

/// Create Food Handler
#[endpoint(
    tags("foods"),
    summary = "Create Food Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Food item created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Not signed in"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
    ),
)]
#[tracing::instrument(
    name = "foods.create",
    skip(json, depot, res),
    fields(food_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateFoodRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<FoodResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.admin_or_403()?;

    let item = state
        .app
        .foods
        .create_food(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::Span::current().record("food_id", tracing::field::display(item.id));

    res.add_header(LOCATION, format!("/api/foods/{}", item.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(item.into()))
}
