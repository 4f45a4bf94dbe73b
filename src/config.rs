use tracing::{debug, info};

/// Environment key holding the backend base URL
pub const BACKEND_URL_ENV: &str = "STORE_BACKEND_URL";

/// Backend used when nothing is configured (local development server)
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Application configuration
/// Resolved once at startup and handed to the UI, components never read the environment.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the product API, without trailing slash
    pub backend_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            // .env is a dev convenience only
            match dotenvy::dotenv() {
                Ok(path) => info!("Config: Dev mode - loaded {}", path.display()),
                Err(_) => debug!("Config: No .env file found"),
            }
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_url = match lookup(BACKEND_URL_ENV) {
            Some(value) if !value.trim().is_empty() => normalize_base_url(&value),
            _ => {
                debug!(
                    "Config: {} not set, using {}",
                    BACKEND_URL_ENV, DEFAULT_BACKEND_URL
                );
                DEFAULT_BACKEND_URL.to_string()
            }
        };

        info!("Config: Backend URL: {}", backend_url);

        Self { backend_url }
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
