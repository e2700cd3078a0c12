//! Startup seeding
//!
//! Fills an empty catalog from the bundled menu and makes sure the configured
//! admin account exists.

use thali::{
    menu::{self, FixtureError},
    users::{NewUser, User},
};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{
    foods::{FoodsService, FoodsServiceError},
    users::{UsersService, UsersServiceError},
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to load menu fixture")]
    Fixture(#[from] FixtureError),

    #[error("failed to seed food item")]
    Foods(#[from] FoodsServiceError),

    #[error("failed to seed admin account")]
    Users(#[from] UsersServiceError),
}

/// Insert the reference menu unless the catalog already has items.
///
/// Returns the number of dishes inserted.
///
/// # Errors
///
/// Returns an error when the fixture is invalid or an insert fails.
pub async fn seed_menu(foods: &dyn FoodsService) -> Result<usize, SeedError> {
    if !foods.list_foods().await?.is_empty() {
        debug!("catalog already populated, skipping menu seed");
        return Ok(0);
    }

    let dishes = menu::reference_menu()?;
    let count = dishes.len();

    for dish in dishes {
        foods.create_food(dish).await?;
    }

    info!(count, "seeded catalog from reference menu");

    Ok(count)
}

/// Return the admin account named `username`, creating it when missing.
///
/// An existing account is returned as is, even when it is not an admin.
///
/// # Errors
///
/// Returns an error when the credentials fail validation.
pub async fn ensure_admin(
    users: &dyn UsersService,
    username: &str,
    password: &str,
) -> Result<User, SeedError> {
    match users.find_user_by_username(username).await {
        Ok(existing) => return Ok(existing),
        Err(UsersServiceError::NotFound) => {}
        Err(error) => return Err(error.into()),
    }

    let admin = users
        .create_user(
            NewUser {
                username: username.to_string(),
                password: password.to_string(),
                name: "Administrator".to_string(),
                email: format!("{username}@localhost"),
                phone: None,
                address: None,
            },
            true,
        )
        .await?;

    info!(user_id = %admin.id, username = %admin.username, "admin account created");

    Ok(admin)
}
