// ABOUTME: Shared configuration constants for the Whisper model service
// ABOUTME: Re-exports environment variable names so every package reads the same keys

pub mod constants;

pub use constants::*;
