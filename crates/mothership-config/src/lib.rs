//! # mothership-config — Validated startup configuration
//!
//! Reads the process environment once at startup and produces an immutable
//! [`AppConfig`] snapshot. Construction either fully succeeds or fails with a
//! typed [`ConfigError`] — no partially-validated configuration ever escapes.
//!
//! Loading is expressed over an injected key-value lookup
//! ([`AppConfig::from_lookup`]) so tests can feed in-memory maps instead of
//! mutating process-wide environment state; [`AppConfig::from_env`] is the
//! thin production entry point over `std::env::var`.

pub mod config;
pub mod error;

pub use config::{AppConfig, Environment, FeatureFlags};
pub use error::ConfigError;
