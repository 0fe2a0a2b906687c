use std::{net::SocketAddr, time::Duration};

use akkucalc_market_data::provider::frankfurter::DEFAULT_BASE_URL;
use anyhow::Context;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub rates_api_url: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("AKKU_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid AKKU_LISTEN_ADDR")?;
        let rates_api_url =
            std::env::var("AKKU_RATES_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        if !rates_api_url.starts_with("http://") && !rates_api_url.starts_with("https://") {
            anyhow::bail!("Invalid AKKU_RATES_API_URL: {}", rates_api_url);
        }
        let cors_allow = parse_origins(
            &std::env::var("AKKU_CORS_ALLOW_ORIGINS").unwrap_or_else(|_| "*".into()),
        );
        let request_timeout = parse_timeout_ms(
            &std::env::var("AKKU_REQUEST_TIMEOUT_MS").unwrap_or_else(|_| "30000".into()),
        )?;
        Ok(Self {
            listen_addr,
            rates_api_url,
            cors_allow,
            request_timeout,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            rates_api_url: DEFAULT_BASE_URL.to_string(),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
        }
    }
}

fn parse_timeout_ms(raw: &str) -> anyhow::Result<Duration> {
    let millis: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("Invalid AKKU_REQUEST_TIMEOUT_MS: {}", raw))?;
    if millis == 0 {
        anyhow::bail!("Invalid AKKU_REQUEST_TIMEOUT_MS: must be positive");
    }
    Ok(Duration::from_millis(millis))
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
