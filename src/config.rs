use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub serpapi: SerpApiSettings,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

/// Credentials and the fixed locale used for every outbound search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerpApiSettings {
    #[serde(skip_serializing)]
    pub api_key: String,
    pub base_url: String,
    pub language: String,
    pub country: String,
    pub device: String,
    pub google_domain: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                workers: num_cpus::get(),
            },
            serpapi: SerpApiSettings {
                api_key: String::new(),
                base_url: "https://serpapi.com".to_string(),
                language: "tr".to_string(),
                country: "tr".to_string(),
                device: "mobile".to_string(),
                google_domain: "google.com.tr".to_string(),
            },
            security: SecurityConfig {
                allowed_origins: vec!["*".to_string()],
            },
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, so it can be driven
    /// without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Server configuration
        if let Some(host) = lookup("HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.server.port = port.parse().context("PORT must be a valid port number")?;
        }
        if let Some(workers) = lookup("WORKERS") {
            config.server.workers = workers.parse().context("WORKERS must be a number")?;
        }

        // Search provider configuration
        match lookup("SERPAPI_KEY") {
            Some(key) if !key.trim().is_empty() => config.serpapi.api_key = key.trim().to_string(),
            _ => bail!("SERPAPI_KEY is not defined"),
        }
        if let Some(base_url) = lookup("SERPAPI_BASE_URL") {
            config.serpapi.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(language) = lookup("SEARCH_LANGUAGE") {
            config.serpapi.language = language;
        }
        if let Some(country) = lookup("SEARCH_COUNTRY") {
            config.serpapi.country = country;
        }
        if let Some(device) = lookup("SEARCH_DEVICE") {
            config.serpapi.device = device;
        }
        if let Some(google_domain) = lookup("SEARCH_GOOGLE_DOMAIN") {
            config.serpapi.google_domain = google_domain;
        }

        // Security configuration
        if let Some(allowed_origins) = lookup("ALLOWED_ORIGINS") {
            config.security.allowed_origins = allowed_origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        Ok(config)
    }
}
