use std::sync::Arc;

use uuid::Uuid;

use super::crypto;
use super::token::{TokenIssuer, TokenResponse};
use super::user::{RegisterRequest, UserAccount, UserDirectory, UserView};
use super::AuthError;

/// Service composing the account directory, password hashing, and tokens.
pub struct AuthService<U> {
    directory: Arc<U>,
    tokens: Arc<TokenIssuer>,
}

impl<U> AuthService<U>
where
    U: UserDirectory + 'static,
{
    pub fn new(directory: Arc<U>, tokens: Arc<TokenIssuer>) -> Self {
        Self { directory, tokens }
    }

    /// Create an account, storing only the Argon2 hash of the password.
    pub fn register(&self, request: RegisterRequest) -> Result<UserView, AuthError> {
        crypto::validate_password(&request.password)?;

        if self.directory.find_by_email(&request.email)?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let account = UserAccount {
            id: Uuid::new_v4(),
            email: request.email,
            full_name: request.full_name,
            password_hash: crypto::hash_password(&request.password)?,
        };

        Ok(self.directory.insert(account)?.view())
    }

    /// Exchange credentials for a bearer token.
    pub fn login(&self, email: &str, password: &str) -> Result<TokenResponse, AuthError> {
        let account = self
            .directory
            .find_by_email(email)?
            .ok_or(AuthError::InvalidCredentials)?;

        if !crypto::verify_password(password, &account.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(TokenResponse::bearer(self.tokens.issue(&account.email)?))
    }

    /// Resolve the account behind a bearer token.
    pub fn authenticate(&self, token: &str) -> Result<UserView, AuthError> {
        let claims = self.tokens.verify(token)?;
        let account = self
            .directory
            .find_by_email(&claims.sub)?
            .ok_or(AuthError::InvalidCredentials)?;
        Ok(account.view())
    }

    /// Shared issuer for route guards hosted outside this service.
    pub fn token_issuer(&self) -> Arc<TokenIssuer> {
        self.tokens.clone()
    }
}
