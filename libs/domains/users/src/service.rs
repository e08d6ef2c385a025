use core_config::{ConfigError, FromEnv, env_parse};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinError;
use tracing::instrument;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, NewUser, UpdateUser, UserChanges, UserResponse};
use crate::password::PasswordHasher;
use crate::repository::UserRepository;

/// Settings for [`UserService`]
#[derive(Clone, Debug)]
pub struct UserServiceConfig {
    /// Upper bound for each repository call
    pub context_timeout: Duration,
    pub password_hasher: PasswordHasher,
}

impl FromEnv for UserServiceConfig {
    /// - CONTEXT_TIMEOUT: seconds, defaults to 300
    /// - PASSWORD_HASH_MEMORY_KIB / PASSWORD_HASH_ITERATIONS / PASSWORD_HASH_PARALLELISM:
    ///   Argon2id cost, defaults to 65536 / 4 / 1
    fn from_env() -> Result<Self, ConfigError> {
        let context_timeout = Duration::from_secs(env_parse("CONTEXT_TIMEOUT", "300")?);

        let memory_kib = env_parse(
            "PASSWORD_HASH_MEMORY_KIB",
            &PasswordHasher::DEFAULT_MEMORY_KIB.to_string(),
        )?;
        let iterations = env_parse(
            "PASSWORD_HASH_ITERATIONS",
            &PasswordHasher::DEFAULT_ITERATIONS.to_string(),
        )?;
        let parallelism = env_parse(
            "PASSWORD_HASH_PARALLELISM",
            &PasswordHasher::DEFAULT_PARALLELISM.to_string(),
        )?;

        let password_hasher = PasswordHasher::new(memory_kib, iterations, parallelism).map_err(
            |e| ConfigError::ParseError {
                key: "PASSWORD_HASH_*".to_string(),
                details: e.to_string(),
            },
        )?;

        Ok(Self {
            context_timeout,
            password_hasher,
        })
    }
}

/// Service layer for User business logic
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    password_hasher: Arc<PasswordHasher>,
    context_timeout: Duration,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R, config: UserServiceConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            password_hasher: Arc::new(config.password_hasher),
            context_timeout: config.context_timeout,
        }
    }

    /// Validate, hash the password and store a new user
    #[instrument(skip(self, input))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<UserResponse> {
        self.within_deadline(async move {
            input
                .validate()
                .map_err(|e| UserError::BadRequest(e.to_string()))?;

            let password = self.hash_password(input.password).await?;

            let user = self
                .repository
                .create(NewUser {
                    name: input.name,
                    email: input.email,
                    password,
                })
                .await?;

            Ok(UserResponse::from(&user))
        })
        .await
    }

    /// Replace a user's name and password. The email never changes.
    #[instrument(skip(self, input))]
    pub async fn update_user(&self, id: i32, input: UpdateUser) -> UserResult<UserResponse> {
        self.within_deadline(async move {
            input
                .validate()
                .map_err(|e| UserError::BadRequest(e.to_string()))?;

            let password = self.hash_password(input.password).await?;

            let user = self
                .repository
                .update(UserChanges {
                    id,
                    name: input.name,
                    password,
                })
                .await?;

            Ok(UserResponse::from(&user))
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: i32) -> UserResult<()> {
        self.within_deadline(self.repository.delete(id)).await
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: i32) -> UserResult<UserResponse> {
        let user = self.within_deadline(self.repository.get_by_id(id)).await?;
        Ok(UserResponse::from(&user))
    }

    /// Every user as a DTO; an empty store yields an empty vector
    #[instrument(skip(self))]
    pub async fn get_all_users(&self) -> UserResult<Vec<UserResponse>> {
        let users = self.within_deadline(self.repository.get_all_users()).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Runs the whole operation, hashing included, against one deadline
    /// started when the call begins.
    async fn within_deadline<T>(
        &self,
        operation: impl Future<Output = UserResult<T>>,
    ) -> UserResult<T> {
        tokio::time::timeout(self.context_timeout, operation)
            .await
            .map_err(|_| UserError::DeadlineExceeded(self.context_timeout))?
    }

    async fn hash_password(&self, password: String) -> UserResult<String> {
        let hasher = Arc::clone(&self.password_hasher);

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(hashing_task_failed)?
            .map_err(|e| UserError::BadRequest(format!("Password could not be hashed: {}", e)))
    }
}

/// A panicked or cancelled hashing task is a server fault, not bad input.
fn hashing_task_failed(err: JoinError) -> UserError {
    UserError::ServerError(format!("Password hashing task failed: {}", err))
}
