//! Session middleware.
//!
//! Resolves the request's session token, when there is one, and records the
//! signed-in account in the depot. Requests without a usable session carry
//! on unauthenticated; handlers decide whether that is allowed.

use std::sync::Arc;

use salvo::prelude::*;
use thali_app::auth::AuthServiceError;
use tracing::{debug, warn};

use crate::{auth::session_token, extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = session_token(req) else {
        ctrl.call_next(req, depot, res).await;

        return;
    };

    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => Arc::clone(state),
        Err(_error) => {
            res.render(StatusError::internal_server_error());

            return;
        }
    };

    match state.app.sessions.authenticate(&token).await {
        Ok(user) => depot.insert_current_user(user),
        Err(AuthServiceError::NotFound | AuthServiceError::Token(_)) => {
            debug!("unknown session token, continuing unauthenticated");
        }
        Err(AuthServiceError::Users(source)) => {
            warn!("session refers to a missing account: {source}");
        }
    }

    ctrl.call_next(req, depot, res).await;
}
