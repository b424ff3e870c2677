// ABOUTME: Authentication guard capability and its built-in implementations
// ABOUTME: Validates caller credentials before a request reaches the model handlers

use std::fmt;
use std::sync::Arc;

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use thiserror::Error;
use tracing::debug;

/// Caller identity produced by a successful validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    /// No API key is configured; every caller is accepted
    Anonymous,
    /// Caller presented the configured API key
    ApiKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Not authenticated")]
    MissingCredentials,

    #[error("Invalid API key")]
    InvalidApiKey,
}

/// Validates credentials extracted from an incoming request.
///
/// `credentials` is the bearer token, or `None` when the request carried none.
pub trait AuthGuard: Send + Sync {
    fn validate(&self, credentials: Option<&str>) -> Result<Identity, AuthError>;
}

/// Guard used when the server runs without an API key
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AuthGuard for AllowAll {
    fn validate(&self, _credentials: Option<&str>) -> Result<Identity, AuthError> {
        Ok(Identity::Anonymous)
    }
}

/// Guard accepting exactly one pre-shared API key
#[derive(Clone)]
pub struct StaticApiKey {
    key_hash: [u8; 32],
}

impl StaticApiKey {
    pub fn new(api_key: &str) -> Self {
        Self {
            key_hash: Self::hash_key(api_key),
        }
    }

    fn hash_key(key: &str) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(key.as_bytes());
        hasher.finalize().into()
    }
}

// Keep the key digest out of logs
impl fmt::Debug for StaticApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticApiKey").finish_non_exhaustive()
    }
}

impl AuthGuard for StaticApiKey {
    fn validate(&self, credentials: Option<&str>) -> Result<Identity, AuthError> {
        let presented = credentials.ok_or(AuthError::MissingCredentials)?;

        // Hash first so the comparison length never depends on the input
        let presented_hash = Self::hash_key(presented);
        if bool::from(presented_hash[..].ct_eq(&self.key_hash[..])) {
            Ok(Identity::ApiKey)
        } else {
            Err(AuthError::InvalidApiKey)
        }
    }
}

/// Pick the guard for an optional configured API key.
///
/// An unset or blank key disables authentication.
pub fn guard_for_api_key(api_key: Option<&str>) -> Arc<dyn AuthGuard> {
    match api_key.map(str::trim).filter(|key| !key.is_empty()) {
        Some(key) => {
            debug!("API key configured, requests to /v1 require a bearer token");
            Arc::new(StaticApiKey::new(key))
        }
        None => {
            debug!("No API key configured, authentication disabled");
            Arc::new(AllowAll)
        }
    }
}
