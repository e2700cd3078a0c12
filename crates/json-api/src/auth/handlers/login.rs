//! Login Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    auth::{LoginRequest, SessionResponse, into_status_error, set_session_cookie},
    extensions::*,
    state::State,
};

/// Login Handler
#[endpoint(
    tags("auth"),
    summary = "Log In",
    responses(
        (status_code = StatusCode::OK, description = "Signed in"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid username or password"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SessionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state
        .app
        .users
        .verify_credentials(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    let token = state
        .app
        .sessions
        .start_session(user.id)
        .await
        .or_500("failed to start session")?;

    tracing::info!(user_id = %user.id, "signed in");

    set_session_cookie(res, token.clone());

    Ok(Json(SessionResponse {
        token,
        user: user.into(),
    }))
}
