//! Authentication: the `Authenticator` interface and its JWT implementation.
//!
//! The resolver layer only sees the `Authenticator` trait. Token resolution
//! returns `Option` so that a bad or expired token is an ordinary anonymous
//! request rather than an error.

use std::collections::HashMap;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use quotes_core::{User, UserId, derive_user_id};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{ServerConfig, UserEntry};

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Unknown user or wrong password.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Token failed signature or claim validation.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// Token could not be signed.
    #[error("failed to create token: {0}")]
    TokenCreation(String),

    /// Password hashing or hash parsing failed.
    #[error("password hash error: {0}")]
    PasswordHash(String),
}

/// The credential and token operations the service depends on.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Exchange credentials for a bearer token.
    async fn issue_token(&self, username: &str, password: &str) -> Result<String, AuthError>;

    /// Resolve a bearer token to the id of the user it was issued to.
    async fn resolve_user_id(&self, token: &str) -> Option<UserId>;

    /// Look up a user by id.
    async fn resolve_user(&self, user_id: UserId) -> Option<User>;
}

// ============================================================================
// Tokens
// ============================================================================

/// JWT claims.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID (subject).
    pub sub: Uuid,
    /// Username at issue time.
    pub username: String,
    /// Expiration time (unix timestamp).
    pub exp: usize,
    /// Issued at (unix timestamp).
    pub iat: usize,
}

/// Create a JWT token for a user.
pub fn create_token(user: &User, secret: &str, expiry_hours: u64) -> Result<String, AuthError> {
    let now = chrono::Utc::now();
    let exp = i64::try_from(expiry_hours)
        .ok()
        .and_then(chrono::TimeDelta::try_hours)
        .and_then(|lifetime| now.checked_add_signed(lifetime))
        .ok_or_else(|| {
            AuthError::TokenCreation(format!("expiry of {} hours is out of range", expiry_hours))
        })?
        .timestamp() as usize;

    let claims = Claims {
        sub: *user.id.as_uuid(),
        username: user.username.clone(),
        exp,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::TokenCreation(e.to_string()))
}

/// Validate a JWT token and return claims.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

    Ok(token_data.claims)
}

// ============================================================================
// Passwords
// ============================================================================

/// Hash a password using Argon2.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::PasswordHash(e.to_string()))?;
    Ok(password_hash.to_string())
}

/// Verify a password against a hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| AuthError::PasswordHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

// ============================================================================
// User Directory
// ============================================================================

#[derive(Debug, Clone)]
struct StoredUser {
    user: User,
    password_hash: String,
}

/// Users allowed to log in, keyed by username.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    by_name: HashMap<String, StoredUser>,
    names_by_id: HashMap<UserId, String>,
}

impl UserDirectory {
    /// Build a directory from configured entries.
    ///
    /// Passwords starting with `$argon2` are taken as PHC hashes; anything
    /// else is hashed now. A later entry for the same username wins.
    pub fn from_entries(entries: &[UserEntry]) -> Result<Self, AuthError> {
        let mut directory = Self::default();
        for entry in entries {
            let password_hash = if entry.password.starts_with("$argon2") {
                PasswordHash::new(&entry.password)
                    .map_err(|e| AuthError::PasswordHash(e.to_string()))?;
                entry.password.clone()
            } else {
                hash_password(&entry.password)?
            };
            directory.insert(&entry.username, password_hash);
        }
        Ok(directory)
    }

    fn insert(&mut self, username: &str, password_hash: String) {
        let user = User {
            id: derive_user_id(username),
            username: username.to_string(),
        };
        self.names_by_id.insert(user.id, username.to_string());
        self.by_name.insert(
            username.to_string(),
            StoredUser {
                user,
                password_hash,
            },
        );
    }

    /// Check credentials and return the matching user.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let stored = self
            .by_name
            .get(username)
            .ok_or(AuthError::InvalidCredentials)?;

        if verify_password(password, &stored.password_hash)? {
            Ok(stored.user.clone())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    /// Find a user by id.
    pub fn get(&self, user_id: UserId) -> Option<User> {
        let name = self.names_by_id.get(&user_id)?;
        self.by_name.get(name).map(|s| s.user.clone())
    }

    /// Number of known users.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns true if no users are configured.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

// ============================================================================
// JWT Authenticator
// ============================================================================

/// `Authenticator` backed by a `UserDirectory` and HS256 tokens.
pub struct JwtAuthenticator {
    directory: UserDirectory,
    secret: String,
    expiry_hours: u64,
}

impl JwtAuthenticator {
    /// Create an authenticator with an explicit secret.
    pub fn new(directory: UserDirectory, secret: impl Into<String>, expiry_hours: u64) -> Self {
        Self {
            directory,
            secret: secret.into(),
            expiry_hours,
        }
    }

    /// Build from server configuration.
    ///
    /// Without `JWT_SECRET` a random secret is generated, so tokens stop
    /// resolving after a restart.
    pub fn from_config(config: &ServerConfig) -> Result<Self, AuthError> {
        let directory = UserDirectory::from_entries(&config.users)?;
        if directory.is_empty() {
            tracing::warn!("No users configured (AUTH_USERS); every login will fail");
        }

        let secret = match &config.jwt_secret {
            Some(secret) => secret.clone(),
            None => {
                tracing::warn!("JWT_SECRET not set; using a random secret for this process");
                hex::encode(rand::random::<[u8; 32]>())
            }
        };

        Ok(Self::new(directory, secret, config.jwt_expiry_hours))
    }

    /// The directory this authenticator checks credentials against.
    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }
}

impl std::fmt::Debug for JwtAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtAuthenticator")
            .field("users", &self.directory.len())
            .field("expiry_hours", &self.expiry_hours)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Authenticator for JwtAuthenticator {
    async fn issue_token(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let user = self.directory.authenticate(username, password)?;
        let token = create_token(&user, &self.secret, self.expiry_hours)?;
        tracing::info!(user_id = %user.id, username = %user.username, "User logged in");
        Ok(token)
    }

    async fn resolve_user_id(&self, token: &str) -> Option<UserId> {
        match validate_token(token, &self.secret) {
            Ok(claims) => Some(UserId::from_uuid(claims.sub)),
            Err(e) => {
                tracing::debug!(error = %e, "Token rejected");
                None
            }
        }
    }

    async fn resolve_user(&self, user_id: UserId) -> Option<User> {
        self.directory.get(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(username: &str, password: &str) -> UserEntry {
        UserEntry {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    fn authenticator() -> JwtAuthenticator {
        let directory = UserDirectory::from_entries(&[entry("alice", "wonderland")]).unwrap();
        JwtAuthenticator::new(directory, "test_secret_key_12345", 24)
    }

    #[test]
    fn test_hash_and_verify_password() {
        let password = "test_password_123";
        let hash = hash_password(password).unwrap();
        assert!(verify_password(password, &hash).unwrap());
        assert!(!verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_create_and_validate_token() {
        let secret = "test_secret_key_12345";
        let user = User {
            id: derive_user_id("alice"),
            username: "alice".to_string(),
        };

        let token = create_token(&user, secret, 24).unwrap();
        let claims = validate_token(&token, secret).unwrap();

        assert_eq!(claims.sub, *user.id.as_uuid());
        assert_eq!(claims.username, "alice");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_create_token_rejects_oversized_expiry() {
        let user = User {
            id: derive_user_id("alice"),
            username: "alice".to_string(),
        };
        let result = create_token(&user, "secret", 3_000_000_000_000_000);
        assert!(matches!(result, Err(AuthError::TokenCreation(_))));
    }

    #[tokio::test]
    async fn test_issue_token_oversized_expiry_is_error() {
        let directory = UserDirectory::from_entries(&[entry("alice", "wonderland")]).unwrap();
        let auth = JwtAuthenticator::new(directory, "test_secret_key_12345", u64::MAX);
        assert!(matches!(
            auth.issue_token("alice", "wonderland").await,
            Err(AuthError::TokenCreation(_))
        ));
    }

    #[test]
    fn test_validate_token_wrong_secret() {
        let user = User {
            id: derive_user_id("bob"),
            username: "bob".to_string(),
        };
        let token = create_token(&user, "secret1", 24).unwrap();
        assert!(validate_token(&token, "secret2").is_err());
    }

    #[test]
    fn test_directory_accepts_prehashed_password() {
        let hash = hash_password("hunter2").unwrap();
        let directory = UserDirectory::from_entries(&[entry("carol", &hash)]).unwrap();
        assert!(directory.authenticate("carol", "hunter2").is_ok());
    }

    #[test]
    fn test_directory_rejects_malformed_hash() {
        let result = UserDirectory::from_entries(&[entry("dave", "$argon2!!")]);
        assert!(matches!(result, Err(AuthError::PasswordHash(_))));
    }

    #[test]
    fn test_directory_authenticate_failures() {
        let directory = UserDirectory::from_entries(&[entry("alice", "wonderland")]).unwrap();
        assert!(matches!(
            directory.authenticate("alice", "nope"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            directory.authenticate("mallory", "wonderland"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_issue_and_resolve_round_trip() {
        let auth = authenticator();
        let token = auth.issue_token("alice", "wonderland").await.unwrap();

        let user_id = auth.resolve_user_id(&token).await.unwrap();
        assert_eq!(user_id, derive_user_id("alice"));

        let user = auth.resolve_user(user_id).await.unwrap();
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_issue_token_bad_credentials() {
        let auth = authenticator();
        let err = auth.issue_token("alice", "wrong").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid username or password");
    }

    #[tokio::test]
    async fn test_resolve_garbage_token_is_none() {
        let auth = authenticator();
        assert!(auth.resolve_user_id("not.a.jwt").await.is_none());
        assert!(auth.resolve_user_id("").await.is_none());
    }

    #[tokio::test]
    async fn test_resolve_unknown_user_is_none() {
        let auth = authenticator();
        assert!(auth.resolve_user(derive_user_id("ghost")).await.is_none());
    }

    #[tokio::test]
    async fn test_token_for_removed_user_resolves_to_none() {
        let auth = authenticator();
        let token = auth.issue_token("alice", "wonderland").await.unwrap();

        let other = JwtAuthenticator::new(UserDirectory::default(), "test_secret_key_12345", 24);
        let user_id = other.resolve_user_id(&token).await.unwrap();
        assert!(other.resolve_user(user_id).await.is_none());
    }
}
