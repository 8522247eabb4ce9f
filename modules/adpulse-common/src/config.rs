use std::env;

use tracing::info;

/// Extractor configuration loaded from environment variables. Static for
/// the lifetime of a run; nothing is hot-reloaded.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ad account identifiers, e.g. "act_123456789".
    pub account_ids: Vec<String>,
    pub app_id: String,
    pub app_secret: String,
    pub access_token: String,
    /// Directory the run-stamped CSV lands in.
    pub output_dir: String,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        Self {
            account_ids: parse_account_ids(&required_env("ADS_ACCOUNT_IDS")),
            app_id: required_env("ADS_APP_ID"),
            app_secret: required_env("ADS_APP_SECRET"),
            access_token: required_env("ADS_ACCESS_TOKEN"),
            output_dir: env::var("ADS_OUTPUT_DIR").unwrap_or_else(|_| ".".to_string()),
        }
    }

    /// Log the loaded configuration without exposing credentials.
    pub fn log_redacted(&self) {
        info!(
            accounts = self.account_ids.len(),
            app_id = self.app_id.as_str(),
            output_dir = self.output_dir.as_str(),
            "Config loaded (secrets redacted)"
        );
    }
}

fn parse_account_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_account_ids_splits_and_trims() {
        let ids = parse_account_ids("act_123, act_456 ,,act_789");
        assert_eq!(ids, vec!["act_123", "act_456", "act_789"]);
    }

    #[test]
    fn test_parse_account_ids_empty_input() {
        assert!(parse_account_ids("").is_empty());
    }
}
