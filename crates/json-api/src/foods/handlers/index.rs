//! Food Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{extensions::*, foods::FoodResponse, state::State};

/// Food Index Handler
///
/// Returns the whole catalog in id order.
#[endpoint(tags("foods"), summary = "List Food Items")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<FoodResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let foods = state
        .app
        .foods
        .list_foods()
        .await
        .or_500("failed to fetch food items")?;

    Ok(Json(foods.into_iter().map(Into::into).collect()))
}
