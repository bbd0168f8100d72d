use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::auth::ports::CredentialHasher;
use crate::domain::auth::ports::TokenService;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for identity usecases.
///
/// Coordinates the user store, the credential hasher and the token service. Neither the
/// hasher nor the token service ever sees a user record.
pub struct UserService<UR, CH, TS>
where
    UR: UserRepository,
    CH: CredentialHasher,
    TS: TokenService,
{
    repository: Arc<UR>,
    hasher: Arc<CH>,
    tokens: Arc<TS>,
}

impl<UR, CH, TS> UserService<UR, CH, TS>
where
    UR: UserRepository,
    CH: CredentialHasher,
    TS: TokenService,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `hasher` - Password hashing implementation
    /// * `tokens` - Token issuance implementation
    pub fn new(repository: Arc<UR>, hasher: Arc<CH>, tokens: Arc<TS>) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<UR, CH, TS> UserServicePort for UserService<UR, CH, TS>
where
    UR: UserRepository,
    CH: CredentialHasher,
    TS: TokenService,
{
    async fn register(&self, command: RegisterCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            tracing::info!(username = %command.username, "Registration rejected: username taken");
            return Err(UserError::UsernameAlreadyExists(
                command.username.to_string(),
            ));
        }

        let password_hash = self.hasher.hash(&command.password)?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            password_hash,
            role: Role::User,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(
            user_id = %created_user.id,
            username = %created_user.username,
            "User registered"
        );

        Ok(created_user)
    }

    async fn login(&self, command: LoginCommand) -> Result<String, UserError> {
        let username = match Username::new(command.username) {
            Ok(username) => username,
            Err(e) => {
                tracing::debug!("Login rejected: {}", e);
                return Err(UserError::InvalidCredentials);
            }
        };

        let user = match self.repository.find_by_username(&username).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::debug!(username = %username, "Login rejected: unknown user");
                self.hasher.verify_absent(&command.password);
                return Err(UserError::InvalidCredentials);
            }
            Err(e) => {
                tracing::warn!(username = %username, "Login lookup failed: {}", e);
                self.hasher.verify_absent(&command.password);
                return Err(UserError::InvalidCredentials);
            }
        };

        match self.hasher.verify(&command.password, &user.password_hash) {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!(username = %username, "Login rejected: password mismatch");
                return Err(UserError::InvalidCredentials);
            }
            Err(e) => {
                tracing::warn!(username = %username, "Login rejected: {}", e);
                return Err(UserError::InvalidCredentials);
            }
        }

        let token = self.tokens.issue(&user.username, user.role)?;
        tracing::info!(username = %user.username, "User logged in");

        Ok(token)
    }
}
