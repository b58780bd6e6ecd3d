use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored account row. The password never leaves this type unhashed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
}

impl UserAccount {
    pub fn view(&self) -> UserView {
        UserView {
            id: self.id,
            email: self.email.clone(),
            full_name: self.full_name.clone(),
        }
    }
}

/// Sanitized account view safe to return from the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
}

/// Registration payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Account storage abstraction mirroring the lead repository seam.
pub trait UserDirectory: Send + Sync {
    fn insert(&self, account: UserAccount) -> Result<UserAccount, DirectoryError>;
    fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, DirectoryError>;
}

/// Error enumeration for directory failures.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("account already exists")]
    Conflict,
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}
