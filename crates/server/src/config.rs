use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use chrono::TimeDelta;
use hackathons_core::domain::{
    AdminCredentials, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD, SESSION_TTL_HOURS,
};
use serde::Deserialize;
use tracing::info;

type Result<T> = anyhow::Result<T>;

pub const CONFIG_PATH_ENV: &str = "HACKATHONS_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "hackathons.toml";
/// One year.
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 365;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub database_url: String,
    pub admin: AdminConfig,
    pub uploads: UploadConfig,
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Reads the TOML file named by `HACKATHONS_CONFIG` (or `hackathons.toml`)
    /// when it exists, then applies `DATABASE_URL` / `BIND_ADDR` overrides.
    pub fn load() -> Result<Self> {
        let path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let path = Path::new(&path);

        let mut config = if path.exists() {
            info!(path = %path.display(), "loading server config");
            Self::from_file(path)?
        } else {
            info!(path = %path.display(), "config file not found, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).context("failed to deserialize server config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.admin.session_ttl()?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = env::var("DATABASE_URL") {
            self.database_url = url;
        }
        if let Ok(addr) = env::var("BIND_ADDR") {
            self.bind_addr = addr;
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            database_url: "sqlite://hackathons.db?mode=rwc".to_string(),
            admin: AdminConfig::default(),
            uploads: UploadConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub email: String,
    pub password: String,
    pub session_ttl_hours: i64,
}

impl AdminConfig {
    pub fn credentials(&self) -> AdminCredentials {
        AdminCredentials::new(&self.email, &self.password)
    }

    /// `session_ttl_hours` must be between 1 and [`MAX_SESSION_TTL_HOURS`].
    pub fn session_ttl(&self) -> Result<TimeDelta> {
        let hours = self.session_ttl_hours;
        if !(1..=MAX_SESSION_TTL_HOURS).contains(&hours) {
            bail!(
                "admin.session_ttl_hours must be between 1 and {MAX_SESSION_TTL_HOURS}, got {hours}"
            );
        }
        TimeDelta::try_hours(hours)
            .with_context(|| format!("admin.session_ttl_hours {hours} is out of range"))
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            email: DEFAULT_ADMIN_EMAIL.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
            session_ttl_hours: SESSION_TTL_HOURS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub dir: PathBuf,
    pub public_base_url: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("uploads"),
            public_base_url: "http://localhost:3000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::{MAX_SESSION_TTL_HOURS, ServerConfig};
    use chrono::TimeDelta;
    use std::path::Path;

    #[test]
    fn test_parse_config() {
        let raw = r#"
bind_addr = "127.0.0.1:8080"
database_url = "postgres://localhost/hackathons"

[admin]
email = "ops@example.com"
password = "secret"
session_ttl_hours = 8

[uploads]
dir = "/var/lib/hackathons/uploads"
public_base_url = "https://hackathons.example.com"

[cors]
allowed_origins = ["https://hackathons.example.com"]
"#;

        let config = ServerConfig::from_str(raw).expect("config should parse");
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.database_url, "postgres://localhost/hackathons");
        assert_eq!(config.admin.email, "ops@example.com");
        assert_eq!(config.admin.session_ttl_hours, 8);
        assert!(config.admin.credentials().matches("ops@example.com", "secret"));
        assert_eq!(config.uploads.dir, Path::new("/var/lib/hackathons/uploads"));
        assert_eq!(config.cors.allowed_origins.len(), 1);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = ServerConfig::from_str("bind_addr = \"127.0.0.1:9000\"")
            .expect("config should parse");

        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.admin.session_ttl_hours, 24);
        assert!(
            config
                .admin
                .credentials()
                .matches("admin@hackathonspain.com", "admin123")
        );
        assert_eq!(config.uploads.dir, Path::new("uploads"));
        assert!(config.cors.allowed_origins.is_empty());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(ServerConfig::from_str("bind_addr = 42").is_err());
    }

    #[test]
    fn test_session_ttl_must_be_in_range() {
        for hours in [0, -5, MAX_SESSION_TTL_HOURS + 1, i64::MAX] {
            let raw = format!("[admin]\nsession_ttl_hours = {hours}");
            let err = ServerConfig::from_str(&raw).expect_err("ttl should be rejected");
            assert!(
                err.to_string().contains("session_ttl_hours"),
                "unexpected error for {hours}: {err}"
            );
        }

        let config = ServerConfig::from_str("[admin]\nsession_ttl_hours = 8")
            .expect("config should parse");
        assert_eq!(
            config.admin.session_ttl().expect("ttl should be valid"),
            TimeDelta::hours(8)
        );
    }
}
