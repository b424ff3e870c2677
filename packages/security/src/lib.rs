// ABOUTME: Authentication for the Whisper model service
// ABOUTME: Provides the pluggable AuthGuard capability and API-key based implementations

pub mod guard;

pub use guard::{guard_for_api_key, AllowAll, AuthError, AuthGuard, Identity, StaticApiKey};
