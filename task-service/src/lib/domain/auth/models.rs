use crate::user::models::Role;
use crate::user::models::Username;

/// Authenticated caller of a request.
///
/// Attached by the authentication middleware after a token validates and read by
/// handlers. Lives for one request only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: Username,
    pub role: Role,
}

impl Identity {
    pub fn new(username: Username, role: Role) -> Self {
        Self { username, role }
    }
}
