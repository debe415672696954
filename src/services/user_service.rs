use sqlx::PgPool;
use tracing::info;

use crate::auth::{hash_password, verify_password};
use crate::database::manager::{is_unique_violation, DatabaseError, DatabaseManager};
use crate::database::models::User;

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database manager error: {0}")]
    DatabaseManager(#[from] DatabaseError),
}

pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub async fn new() -> Result<Self, UserError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: &str,
    ) -> Result<User, UserError> {
        let inserted = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password_hash, role) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(username)
        .bind(email)
        .bind(hash_password(password))
        .bind(role)
        .fetch_one(&self.pool)
        .await;

        match inserted {
            Ok(user) => {
                info!("Registered user {}", user.username);
                Ok(user)
            }
            Err(e) if is_unique_violation(&e) => Err(UserError::UsernameTaken(username.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    /// Credential check for login. A missing user and a wrong password are
    /// indistinguishable to the caller.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, UserError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash) {
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }
}
