//! Users service.

use async_trait::async_trait;
use mockall::automock;
use thali::{
    users::{Credentials, NewUser, User, UserId},
    validation::Validate,
};
use tracing::info;

use crate::{
    auth::PasswordHash,
    database::Db,
    domain::users::{errors::UsersServiceError, records::UserRecord},
};

#[derive(Debug, Clone)]
pub struct MemUsersService {
    db: Db,
}

impl MemUsersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UsersService for MemUsersService {
    async fn create_user(&self, user: NewUser, is_admin: bool) -> Result<User, UsersServiceError> {
        user.validate()?;

        let password = PasswordHash::new(&user.password)?;
        let table = self.db.users();
        let mut rows = table.write().await;

        if rows
            .values()
            .any(|record| record.user.username == user.username)
        {
            return Err(UsersServiceError::AlreadyExists);
        }

        let id = table.next_id();
        let created = User {
            id,
            username: user.username,
            name: user.name,
            email: user.email,
            phone: user.phone,
            address: user.address,
            is_admin,
        };

        rows.insert(
            id,
            UserRecord {
                user: created.clone(),
                password,
            },
        );

        info!(user_id = %created.id, username = %created.username, is_admin, "user registered");

        Ok(created)
    }

    async fn get_user(&self, id: UserId) -> Result<User, UsersServiceError> {
        self.db
            .users()
            .get(id)
            .await
            .map(|record| record.user)
            .ok_or(UsersServiceError::NotFound)
    }

    async fn find_user_by_username(&self, username: &str) -> Result<User, UsersServiceError> {
        self.db
            .users()
            .read()
            .await
            .values()
            .find(|record| record.user.username == username)
            .map(|record| record.user.clone())
            .ok_or(UsersServiceError::NotFound)
    }

    async fn verify_credentials(&self, credentials: Credentials) -> Result<User, UsersServiceError> {
        credentials.validate()?;

        let rows = self.db.users().read().await;

        let Some(record) = rows
            .values()
            .find(|record| record.user.username == credentials.username)
        else {
            PasswordHash::verify_missing(&credentials.password);

            return Err(UsersServiceError::InvalidCredentials);
        };

        if record.password.verify(&credentials.password) {
            Ok(record.user.clone())
        } else {
            Err(UsersServiceError::InvalidCredentials)
        }
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Registers an account. Usernames are unique.
    async fn create_user(&self, user: NewUser, is_admin: bool) -> Result<User, UsersServiceError>;

    /// Retrieve a single account.
    async fn get_user(&self, id: UserId) -> Result<User, UsersServiceError>;

    /// Look an account up by its login name.
    async fn find_user_by_username(&self, username: &str) -> Result<User, UsersServiceError>;

    /// Checks a username and password pair.
    async fn verify_credentials(&self, credentials: Credentials) -> Result<User, UsersServiceError>;
}
