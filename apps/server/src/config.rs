use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::{bail, Context};
use freightquote_core::distance::{DEFAULT_CACHE_PRECISION, MAX_CACHE_PRECISION};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    /// Directory holding depots.json, parameters.json and distance_cache.json.
    /// The bundled copies are used when unset.
    pub reference_dir: Option<PathBuf>,
    pub cache_precision: usize,
    pub reject_unpriced: bool,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8088)),
            db_path: "./db/freightquote.db".to_string(),
            reference_dir: None,
            cache_precision: DEFAULT_CACHE_PRECISION,
            reject_unpriced: false,
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_secs(30),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();
        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

        let listen_addr = match var("FQ_LISTEN_ADDR") {
            Some(addr) => addr
                .parse()
                .with_context(|| format!("Invalid FQ_LISTEN_ADDR '{}'", addr))?,
            None => defaults.listen_addr,
        };
        let cache_precision = match var("FQ_CACHE_PRECISION") {
            Some(p) => parse_cache_precision(&p)?,
            None => defaults.cache_precision,
        };
        let reject_unpriced = var("FQ_REJECT_UNPRICED")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.reject_unpriced);
        let cors_allow = var("FQ_CORS_ALLOW_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.cors_allow);
        let timeout_ms: u64 = var("FQ_REQUEST_TIMEOUT_MS")
            .and_then(|ms| ms.parse().ok())
            .unwrap_or(30_000);

        Ok(Self {
            listen_addr,
            db_path: var("FQ_DB_PATH").unwrap_or(defaults.db_path),
            reference_dir: var("FQ_REFERENCE_DIR").map(PathBuf::from),
            cache_precision,
            reject_unpriced,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            log_format: var("FQ_LOG_FORMAT").unwrap_or(defaults.log_format),
        })
    }
}

fn parse_cache_precision(raw: &str) -> anyhow::Result<usize> {
    let precision: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("Invalid FQ_CACHE_PRECISION '{}'", raw))?;
    if precision > MAX_CACHE_PRECISION {
        bail!(
            "FQ_CACHE_PRECISION {} exceeds the maximum of {}",
            precision,
            MAX_CACHE_PRECISION
        );
    }
    Ok(precision)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_precision_accepts_bounded_values() {
        assert_eq!(parse_cache_precision("6").unwrap(), 6);
        assert_eq!(parse_cache_precision(" 0 ").unwrap(), 0);
        assert_eq!(parse_cache_precision("15").unwrap(), MAX_CACHE_PRECISION);
    }

    #[test]
    fn test_cache_precision_rejects_oversized_and_garbage() {
        let err = parse_cache_precision("400").unwrap_err();
        assert!(err.to_string().contains("exceeds the maximum of 15"));
        assert!(parse_cache_precision("six").is_err());
        assert!(parse_cache_precision("-1").is_err());
    }
}
