//! Logout Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    auth::{MessageResponse, clear_session_cookie, session_status_error, session_token},
    extensions::*,
    state::State,
};

/// Logout Handler
///
/// Ends the current session and clears the session cookie.
#[endpoint(
    tags("auth"),
    summary = "Log Out",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Signed out"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Not signed in"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    let Some(token) = session_token(req) else {
        return Err(StatusError::unauthorized().brief("Authentication required"));
    };

    state
        .app
        .sessions
        .end_session(&token)
        .await
        .map_err(session_status_error)?;

    tracing::info!(user_id = %user.id, "signed out");

    clear_session_cookie(res);

    Ok(Json(MessageResponse::new("Logged out successfully")))
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::AUTHORIZATION,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, TEST_TOKEN, customer};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("logout").post(handler))
    }

    #[tokio::test]
    async fn test_logout_ends_session() -> TestResult {
        let mut mocks = Mocks::signed_in(customer());

        mocks
            .sessions
            .expect_end_session()
            .once()
            .withf(|token| token == TEST_TOKEN)
            .return_once(|_| Ok(()));

        let mut res = TestClient::post("http://example.com/logout")
            .add_header(AUTHORIZATION, format!("Bearer {TEST_TOKEN}"), true)
            .send(&make_service(mocks))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.message, "Logged out successfully");

        Ok(())
    }

    #[tokio::test]
    async fn test_logout_without_session_returns_401() -> TestResult {
        let mut mocks = Mocks::new();

        mocks.sessions.expect_end_session().never();

        let res = TestClient::post("http://example.com/logout")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
