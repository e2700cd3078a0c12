//! User Orders Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{extensions::*, orders::OrderResponse, state::State};

/// User Orders Handler
///
/// Orders placed by the signed-in account.
#[endpoint(
    tags("orders"),
    summary = "List My Orders",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Orders placed by the caller"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Not signed in"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<OrderResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    let orders = state
        .app
        .orders
        .list_orders_by_user(user.id)
        .await
        .or_500("failed to fetch orders")?;

    Ok(Json(orders.into_iter().map(Into::into).collect()))
}
