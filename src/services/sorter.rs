use std::time::Duration;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::export::write_csv;
use crate::ingestion::load_addresses;
use crate::intelligence::{classify_wallet, Classification};
use crate::models::{ResultRow, ResultTable};
use crate::nimble::{NimbleClient, NimbleClientError};

#[derive(Debug, Clone)]
pub struct SorterConfig {
    /// Pause between two consecutive addresses.
    pub request_delay: Duration,
    /// Abort the run on a transport failure instead of counting the check as negative.
    pub abort_on_network_error: bool,
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            request_delay: Duration::from_secs(1),
            abort_on_network_error: false,
        }
    }
}

impl From<&AppConfig> for SorterConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            request_delay: config.request_delay,
            abort_on_network_error: config.abort_on_network_error,
        }
    }
}

/// Classify a single address.
///
/// The balance check runs first; the particle endpoint is only contacted when
/// the address is not funded.
pub async fn classify_address(
    client: &NimbleClient,
    address: &str,
    config: &SorterConfig,
) -> Result<Classification, AppError> {
    let funded = resolve(address, "check_balance", client.check_balance(address).await, config)?;
    if funded {
        return Ok(classify_wallet(true, false));
    }

    let registered = resolve(
        address,
        "register_particle",
        client.register_particle(address).await,
        config,
    )?;

    Ok(classify_wallet(false, registered))
}

/// Apply the network fault policy to one check outcome.
fn resolve(
    address: &str,
    check: &'static str,
    outcome: Result<bool, NimbleClientError>,
    config: &SorterConfig,
) -> Result<bool, AppError> {
    match outcome {
        Ok(v) => Ok(v),
        Err(source) if config.abort_on_network_error => Err(AppError::Network {
            address: address.to_string(),
            source,
        }),
        Err(e) => {
            tracing::warn!(address, check, error = %e, "Check failed, counting as negative");
            Ok(false)
        }
    }
}

/// Classify every address in order, pausing between addresses.
///
/// Returns one row per input address, in input order.
pub async fn run_sorter(
    client: &NimbleClient,
    addresses: &[String],
    config: &SorterConfig,
) -> Result<ResultTable, AppError> {
    let total = addresses.len();
    let mut table = ResultTable::with_capacity(total);

    for (index, address) in addresses.iter().enumerate() {
        if index > 0 && !config.request_delay.is_zero() {
            tokio::time::sleep(config.request_delay).await;
        }

        tracing::info!(address = %address, index = index + 1, total, "Checking address");

        let classification = classify_address(client, address, config).await?;
        tracing::info!(
            address = %address,
            classification = %classification,
            label = classification.label(),
            "Address classified"
        );

        table.push(ResultRow::new(address.clone(), classification));
    }

    Ok(table)
}

/// Full batch job: load addresses, classify them, export the table.
///
/// Nothing is written unless every address has been processed.
pub async fn run_job(client: &NimbleClient, config: &AppConfig) -> Result<ResultTable, AppError> {
    let addresses = load_addresses(&config.address_file).await?;
    let table = run_sorter(client, &addresses, &SorterConfig::from(config)).await?;

    write_csv(&config.output_file, &table)?;

    let counts = table.counts();
    tracing::info!(
        total = table.len(),
        main_wallets = counts[&Classification::MainWallet],
        sub_wallets = counts[&Classification::SubWallet],
        unregistered = counts[&Classification::Unregistered],
        output = %config.output_file.display(),
        "Sorting run complete"
    );

    Ok(table)
}
