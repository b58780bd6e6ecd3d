//! Password registration, token login, and bearer gating for the API.
//!
//! Accounts live behind the [`user::UserDirectory`] abstraction; passwords
//! are stored only as Argon2id hashes and sessions are stateless HS256
//! tokens validated without a directory lookup.

pub mod crypto;
pub mod router;
pub mod service;
pub mod token;
pub mod user;

pub use router::{auth_router, require_bearer};
pub use service::AuthService;
pub use token::{Claims, TokenIssuer, TokenResponse};
pub use user::{DirectoryError, RegisterRequest, UserAccount, UserDirectory, UserView};

/// Error raised by the authentication flows.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("incorrect email or password")]
    InvalidCredentials,
    #[error("an account with this email already exists")]
    EmailTaken,
    #[error("{0}")]
    WeakPassword(String),
    #[error("password hashing failed")]
    Hashing,
    #[error("token issuance failed")]
    TokenIssuance,
    #[error("token has expired")]
    TokenExpired,
    #[error("could not validate credentials")]
    InvalidToken,
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}
