//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use thali::users::User;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Record the account that owns the request's session.
    fn insert_current_user(&mut self, user: User);

    /// The signed-in account, or 401.
    fn user_or_401(&self) -> Result<&User, StatusError>;

    /// The signed-in admin, or 401 when signed out and 403 otherwise.
    fn admin_or_403(&self) -> Result<&User, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_current_user(&mut self, user: User) {
        self.inject(user);
    }

    fn user_or_401(&self) -> Result<&User, StatusError> {
        self.obtain::<User>()
            .map_err(|_ignored| StatusError::unauthorized().brief("Authentication required"))
    }

    fn admin_or_403(&self) -> Result<&User, StatusError> {
        let user = self.user_or_401()?;

        if user.is_admin {
            Ok(user)
        } else {
            Err(StatusError::forbidden().brief("Admin access required"))
        }
    }
}
