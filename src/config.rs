// src/config.rs
use std::{env, net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::{Context, Result};

pub const DEFAULT_MODEL: &str = "gemini-flash-latest";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub upstream_timeout: Duration,
    pub host: String,
    pub port: u16,
    pub public_dir: PathBuf,
}

impl Config {
    /// Load configuration from the environment, after applying `.env` if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // An empty key is as good as no key.
        let gemini_api_key = lookup("GEMINI_API_KEY").filter(|k| !k.trim().is_empty());

        let upstream_timeout = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(
                raw.parse()
                    .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            None => Duration::from_secs(60),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().context("PORT must be a valid number")?,
            None => 3000,
        };

        Ok(Self {
            gemini_api_key,
            gemini_model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_base_url: lookup("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            upstream_timeout,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            public_dir: lookup("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
        })
    }

    /// Resolve `HOST`/`PORT` into a bindable address. Hostnames and bare
    /// IPv6 literals are accepted.
    pub async fn listen_addr(&self) -> Result<SocketAddr> {
        tokio::net::lookup_host((self.host.as_str(), self.port))
            .await
            .with_context(|| format!("could not resolve listen host {}", self.host))?
            .next()
            .with_context(|| format!("no address found for listen host {}", self.host))
    }
}
