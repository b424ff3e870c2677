// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names and their defaults

// Listener Configuration
pub const WHISPER_HOST: &str = "WHISPER_HOST";
pub const WHISPER_PORT: &str = "WHISPER_PORT";

// Authentication
pub const WHISPER_API_KEY: &str = "WHISPER_API_KEY";

// CORS Configuration
pub const WHISPER_CORS_ORIGIN: &str = "WHISPER_CORS_ORIGIN";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";

// Defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_CORS_ORIGIN: &str = "*";
pub const DEFAULT_LOG_FILTER: &str = "info";
