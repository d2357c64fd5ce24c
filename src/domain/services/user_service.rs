use std::sync::Arc;
use chrono::Utc;
use tracing::{error, info, warn};
use crate::domain::{
    models::user::{User, UserIdentity},
    ports::{CategoryRepository, UserRepository},
    services::{
        defaults::DEFAULT_CATEGORIES,
        password::{hash_password, verify_password},
        validation::require_text,
    },
};
use crate::error::AppError;

const DUPLICATE_USERNAME: &str = "Username already exists";

pub struct UserService {
    users: Arc<dyn UserRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, categories: Arc<dyn CategoryRepository>) -> Self {
        Self { users, categories }
    }

    /// Creates the account, then seeds the default categories.
    ///
    /// Seeding runs after the user row is committed and is not rolled back with it:
    /// a failure there is logged and the registration still succeeds.
    pub async fn register(&self, username: Option<String>, password: Option<String>) -> Result<User, AppError> {
        let username = require_text(username, "nombre_usuario")?;
        let password = require_text(password, "contrasena")?;

        if self.users.find_by_username(&username).await?.is_some() {
            return Err(AppError::Conflict(DUPLICATE_USERNAME.into()));
        }

        let password_hash = hash_password(&password)?;
        let user = self.users.create(&username, &password_hash, Utc::now()).await
            .map_err(|e| e.conflict_on_duplicate(DUPLICATE_USERNAME))?;

        info!("Registered user {} with id {}", user.username, user.id);

        self.seed_default_categories(user.id).await;

        Ok(user)
    }

    async fn seed_default_categories(&self, user_id: i64) {
        match self.categories.create_many(user_id, &DEFAULT_CATEGORIES).await {
            Ok(inserted) => info!("Seeded {} default categories for user {}", inserted, user_id),
            Err(e) => error!("Failed to seed default categories for user {}: {:?}", user_id, e),
        }
    }

    pub async fn login(&self, username: Option<String>, password: Option<String>) -> Result<UserIdentity, AppError> {
        let username = require_text(username, "nombre_usuario")?;
        let password = require_text(password, "contrasena")?;

        let Some(user) = self.users.find_by_username(&username).await? else {
            warn!("Login failed: unknown user '{}'", username);
            return Err(AppError::Unauthorized);
        };

        if !verify_password(&password, &user.password_hash)? {
            warn!("Login failed: wrong password for '{}'", username);
            return Err(AppError::Unauthorized);
        }

        info!("User '{}' (id {}) logged in", user.username, user.id);
        Ok(UserIdentity::from(&user))
    }

    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        self.users.list().await
    }
}
