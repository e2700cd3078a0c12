//! Register Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    auth::{RegisterRequest, SessionResponse, into_status_error, set_session_cookie},
    extensions::*,
    state::State,
};

/// Register Handler
///
/// Creates a customer account and signs it in.
#[endpoint(
    tags("auth"),
    summary = "Register",
    responses(
        (status_code = StatusCode::CREATED, description = "Account created"),
        (status_code = StatusCode::CONFLICT, description = "Username already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "auth.register", skip_all, fields(username = tracing::field::Empty), err)]
pub(crate) async fn handler(
    json: JsonBody<RegisterRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SessionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    tracing::Span::current().record("username", tracing::field::display(&request.username));

    let user = state
        .app
        .users
        .create_user(request.into(), false)
        .await
        .map_err(into_status_error)?;

    let token = state
        .app
        .sessions
        .start_session(user.id)
        .await
        .or_500("failed to start session")?;

    set_session_cookie(res, token.clone());
    res.status_code(StatusCode::CREATED);

    Ok(Json(SessionResponse {
        token,
        user: user.into(),
    }))
}
