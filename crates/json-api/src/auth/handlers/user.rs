//! Current User Handler

use salvo::prelude::*;

use crate::{auth::UserResponse, extensions::*};

/// Current User Handler
#[endpoint(
    tags("auth"),
    summary = "Current User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Signed-in account"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Not signed in"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<UserResponse>, StatusError> {
    let user = depot.user_or_401()?;

    Ok(Json(user.clone().into()))
}
