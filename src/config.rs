use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub session: SessionConfig,
}

impl AppConfig {
    /// Loads configuration from the environment. A missing or empty
    /// signing secret is fatal: the process must not serve traffic
    /// without one.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is required")?;
        let secret = std::env::var("SESSION_SECRET").context("SESSION_SECRET is required")?;
        if secret.is_empty() {
            anyhow::bail!("SESSION_SECRET must not be empty");
        }
        Ok(Self {
            database_url,
            session: SessionConfig { secret },
        })
    }
}
