//! Food Category Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, foods::FoodResponse, state::State};

/// Food Category Handler
///
/// Returns the items whose category matches exactly.
#[endpoint(tags("foods"), summary = "List Food Items by Category")]
pub(crate) async fn handler(
    category: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<FoodResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let foods = state
        .app
        .foods
        .list_foods_by_category(&category.into_inner())
        .await
        .or_500("failed to fetch food items")?;

    Ok(Json(foods.into_iter().map(Into::into).collect()))
}
