//! Application configuration snapshot.
//!
//! Variables consumed (all read once at startup):
//!
//! | Variable            | Rule                                                |
//! |---------------------|-----------------------------------------------------|
//! | `SUPABASE_URL`      | required; must parse as a URL                       |
//! | `SUPABASE_ANON_KEY` | required; at least 10 characters                    |
//! | `APP_NAME`          | optional; defaults to `"Live From the Mothership"`  |
//! | `APP_URL`           | optional; defaults to `"http://localhost:3000"`     |
//! | `GA_ID`             | optional; non-empty presence enables analytics      |
//! | `ADMIN_EMAIL`       | optional; non-empty presence enables the admin panel|
//! | `APP_ENV`           | optional; `production` switches log verbosity only  |
//!
//! Empty values are treated as absent everywhere.

use url::Url;
use zeroize::Zeroizing;

use crate::error::ConfigError;

/// Environment variable holding the Supabase project URL.
pub const SUPABASE_URL_VAR: &str = "SUPABASE_URL";
/// Environment variable holding the Supabase anon key.
pub const SUPABASE_ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";
/// Environment variable overriding the public application name.
pub const APP_NAME_VAR: &str = "APP_NAME";
/// Environment variable overriding the public application URL.
pub const APP_URL_VAR: &str = "APP_URL";
/// Environment variable whose presence enables the analytics feature.
pub const GA_ID_VAR: &str = "GA_ID";
/// Environment variable whose presence enables the admin panel feature.
pub const ADMIN_EMAIL_VAR: &str = "ADMIN_EMAIL";
/// Environment variable selecting development vs production.
pub const APP_ENV_VAR: &str = "APP_ENV";

const DEFAULT_APP_NAME: &str = "Live From the Mothership";
const DEFAULT_APP_URL: &str = "http://localhost:3000";

/// Minimum plausible length for a Supabase anon key.
pub const MIN_KEY_LEN: usize = 10;

/// Substring expected in a hosted Supabase project URL.
const SUPABASE_HOST_HINT: &str = "supabase.co";

/// Feature switches derived from the presence of optional variables.
///
/// `file_uploads` has no backing variable and is always on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    pub analytics: bool,
    pub file_uploads: bool,
    pub admin_panel: bool,
}

/// Runtime environment. Affects log verbosity only; never gates behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Environment::Development
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

/// Immutable configuration snapshot, constructed once per process lifetime.
///
/// Custom `Debug` implementation redacts the anon key to prevent credential
/// leakage in log output.
#[derive(Clone)]
pub struct AppConfig {
    /// Validated Supabase project URL.
    pub supabase_url: Url,
    /// Supabase anon key; zeroed on drop.
    pub supabase_anon_key: Zeroizing<String>,
    /// Public application name.
    pub app_name: String,
    /// Public application URL.
    pub app_url: String,
    /// Derived feature switches.
    pub features: FeatureFlags,
    /// Development vs production.
    pub environment: Environment,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("supabase_url", &self.supabase_url)
            .field("supabase_anon_key", &"[REDACTED]")
            .field("app_name", &self.app_name)
            .field("app_url", &self.app_url)
            .field("features", &self.features)
            .field("environment", &self.environment)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// Fail-fast: the first invalid or missing required value aborts loading.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an injected key-value source.
    ///
    /// The production path is [`AppConfig::from_env`]; tests pass a closure
    /// over an in-memory map. Empty values are treated as absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &'static str| lookup(name).filter(|value| !value.is_empty());

        let raw_url =
            get(SUPABASE_URL_VAR).ok_or(ConfigError::MissingValue(SUPABASE_URL_VAR))?;
        let supabase_url = Url::parse(&raw_url).map_err(|e| ConfigError::InvalidFormat {
            name: SUPABASE_URL_VAR,
            reason: e.to_string(),
        })?;

        let key =
            get(SUPABASE_ANON_KEY_VAR).ok_or(ConfigError::MissingValue(SUPABASE_ANON_KEY_VAR))?;
        if key.len() < MIN_KEY_LEN {
            return Err(ConfigError::TooShort {
                name: SUPABASE_ANON_KEY_VAR,
                len: key.len(),
                min: MIN_KEY_LEN,
            });
        }

        Ok(Self {
            supabase_url,
            supabase_anon_key: Zeroizing::new(key),
            app_name: get(APP_NAME_VAR).unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            app_url: get(APP_URL_VAR).unwrap_or_else(|| DEFAULT_APP_URL.to_string()),
            features: FeatureFlags {
                analytics: get(GA_ID_VAR).is_some(),
                file_uploads: true,
                admin_panel: get(ADMIN_EMAIL_VAR).is_some(),
            },
            environment: match get(APP_ENV_VAR).as_deref() {
                Some("production") => Environment::Production,
                _ => Environment::Development,
            },
        })
    }

    /// Advisory configuration check. Diagnostic only — never gates startup.
    ///
    /// Warns when the Supabase URL does not look like a hosted project
    /// (self-hosted deployments trip this legitimately). Always returns
    /// `true`: validation already happened in the constructor, so there is
    /// no failure left to detect here.
    pub fn health_check(&self) -> bool {
        let host = self.supabase_url.host_str().unwrap_or_default();
        if !host.contains(SUPABASE_HOST_HINT) {
            tracing::warn!(host, "Supabase URL does not look like a hosted Supabase project");
        }
        tracing::debug!(app = %self.app_name, "configuration validated");
        true
    }
}
