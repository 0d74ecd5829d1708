//! Application configuration loading from environment variables.
//!
//! All configuration is loaded from the environment at startup via standard
//! `std::env::var`, after an optional `.env` file. The resulting struct is
//! passed explicitly into state and router construction; nothing here lives
//! in process-wide globals.
//!
//! # Environment Variables
//!
//! Every variable is optional and falls back to a default:
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `UPLOADS_DIR`: Directory for uploaded attachments (default: "./uploads")
//! - `PDFS_DIR`: Directory for rendered summary documents (default: "./pdfs")
//! - `RUST_LOG`: Logging filter (default: "info,order_intake_api=debug,tower_http=debug")

use serde::Deserialize;
use std::path::PathBuf;

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Upload area: where attachment files are written and served from
    pub uploads_dir: PathBuf,

    /// Document area: where rendered summary PDFs are written and served from
    pub pdfs_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed to the
    /// expected type. Unset variables fall back to their defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 3000)?,
            uploads_dir: env_or("UPLOADS_DIR", PathBuf::from("./uploads"))?,
            pdfs_dir: env_or("PDFS_DIR", PathBuf::from("./pdfs"))?,
        })
    }
}

/// Load an environment variable with a default value.
///
/// Returns the parsed environment variable if set, otherwise the default.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
