use async_trait::async_trait;

use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for identity usecases.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user with role `user`.
    ///
    /// # Arguments
    /// * `command` - Validated username and plaintext password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Credential` - Password could not be hashed
    /// * `DatabaseError` - Database operation failed
    /// * `StoreTimeout` - Database operation timed out
    async fn register(&self, command: RegisterCommand) -> Result<User, UserError>;

    /// Exchange credentials for a signed token.
    ///
    /// # Arguments
    /// * `command` - Raw username and plaintext password
    ///
    /// # Returns
    /// Compact signed token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown user, wrong password, or unreadable stored hash
    /// * `Token` - Token could not be signed
    async fn login(&self, command: LoginCommand) -> Result<String, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Arguments
    /// * `user` - User entity to create
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    /// * `StoreTimeout` - Database operation timed out
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by username.
    ///
    /// # Arguments
    /// * `username` - Username to search for
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    /// * `StoreTimeout` - Database operation timed out
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
}
