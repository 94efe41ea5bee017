//! Configuration for the console binaries
//!
//! CLI arguments and environment variable handling using clap. The
//! binaries load `.env` before parsing, so either source works.

use atrium_client::ApiConfig;
use clap::Parser;
use std::path::PathBuf;

/// Shared settings for the console and portal binaries
#[derive(Parser, Debug, Clone)]
pub struct Args {
    /// Base URL of the Atrium backend
    #[arg(long, env = "ATRIUM_API_URL", default_value = "http://localhost:4000")]
    pub api_url: String,

    /// Username to sign in with
    #[arg(long, env = "ATRIUM_USERNAME")]
    pub username: Option<String>,

    /// Password to sign in with
    #[arg(long, env = "ATRIUM_PASSWORD")]
    pub password: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "ATRIUM_TIMEOUT_SECS", default_value = "30")]
    pub timeout_secs: u64,

    /// Rows per page on list screens
    #[arg(long, env = "ATRIUM_PAGE_SIZE", default_value = "10")]
    pub page_size: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "ATRIUM_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Append admin action records to this JSONL file
    #[arg(long, env = "ATRIUM_AUDIT_LOG")]
    pub audit_log: Option<PathBuf>,
}

impl Args {
    /// API client configuration derived from these settings
    pub fn client_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_url.trim_end_matches('/').to_string(),
            token: None,
            timeout_secs: self.timeout_secs,
        }
    }

    /// Sign-in credentials, when both halves are present
    pub fn credentials(&self) -> Option<(String, String)> {
        match (&self.username, &self.password) {
            (Some(u), Some(p)) => Some((u.clone(), p.clone())),
            _ => None,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(format!("ATRIUM_API_URL must be an http(s) URL, got '{}'", self.api_url));
        }

        if self.page_size == 0 {
            return Err("ATRIUM_PAGE_SIZE must be at least 1".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("ATRIUM_TIMEOUT_SECS must be at least 1".to_string());
        }

        if self.username.is_some() != self.password.is_some() {
            return Err("ATRIUM_USERNAME and ATRIUM_PASSWORD must be set together".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            api_url: "http://localhost:4000".to_string(),
            username: None,
            password: None,
            timeout_secs: 30,
            page_size: 10,
            log_level: "info".to_string(),
            audit_log: None,
        }
    }

    #[test]
    fn test_valid_defaults_pass() {
        assert!(base_args().validate().is_ok());
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let mut args = base_args();
        args.page_size = 0;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_non_http_url_is_rejected() {
        let mut args = base_args();
        args.api_url = "ftp://intranet".to_string();
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_half_credentials_are_rejected() {
        let mut args = base_args();
        args.username = Some("amara".to_string());
        assert!(args.validate().is_err());
        assert_eq!(args.credentials(), None);

        args.password = Some("s3cret".to_string());
        assert!(args.validate().is_ok());
        assert!(args.credentials().is_some());
    }

    #[test]
    fn test_client_config_trims_trailing_slash() {
        let mut args = base_args();
        args.api_url = "http://localhost:4000/".to_string();
        assert_eq!(args.client_config().base_url, "http://localhost:4000");
    }
}
