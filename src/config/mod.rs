use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;

use crate::nimble::client::NIMBLE_API_BASE;

const DEFAULT_ADDRESS_FILE: &str = "address.txt";
const DEFAULT_OUTPUT_FILE: &str = "res.csv";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub address_file: PathBuf,
    pub output_file: PathBuf,

    // Nimble network
    pub nimble_api_base: String,
    pub particle_timeout: Duration,
    pub balance_timeout: Duration,

    // Run
    pub request_delay: Duration,
    pub abort_on_network_error: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            address_file: DEFAULT_ADDRESS_FILE.into(),
            output_file: DEFAULT_OUTPUT_FILE.into(),
            nimble_api_base: NIMBLE_API_BASE.into(),
            particle_timeout: Duration::from_secs(60),
            balance_timeout: Duration::from_secs(60),
            request_delay: Duration::from_millis(1_000),
            abort_on_network_error: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            address_file: env::var("ADDRESS_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.address_file),
            output_file: env::var("OUTPUT_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_file),

            nimble_api_base: env::var("NIMBLE_API_BASE").unwrap_or(defaults.nimble_api_base),
            particle_timeout: Duration::from_secs(parse_var("PARTICLE_TIMEOUT_SECS", 60)?),
            balance_timeout: Duration::from_secs(parse_var("BALANCE_TIMEOUT_SECS", 60)?),

            request_delay: Duration::from_millis(parse_var("REQUEST_DELAY_MS", 1_000)?),
            abort_on_network_error: parse_var("ABORT_ON_NETWORK_ERROR", false)?,
        })
    }
}

/// Read `name` from the environment, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} has an invalid value: {raw:?}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_constants() {
        let config = AppConfig::default();
        assert_eq!(config.address_file, PathBuf::from("address.txt"));
        assert_eq!(config.output_file, PathBuf::from("res.csv"));
        assert_eq!(config.nimble_api_base, "https://mainnet.nimble.technology");
        assert_eq!(config.request_delay, Duration::from_secs(1));
        assert_eq!(config.particle_timeout, Duration::from_secs(60));
        assert!(!config.abort_on_network_error);
    }

    #[test]
    fn test_parse_var_falls_back_when_unset() {
        let value: u64 = parse_var("WALLET_SORTER_TEST_UNSET_VAR", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        env::set_var("WALLET_SORTER_TEST_BAD_DELAY", "soon");
        let result: anyhow::Result<u64> = parse_var("WALLET_SORTER_TEST_BAD_DELAY", 1_000);
        env::remove_var("WALLET_SORTER_TEST_BAD_DELAY");

        let err = result.unwrap_err().to_string();
        assert!(err.contains("WALLET_SORTER_TEST_BAD_DELAY"));
    }
}
