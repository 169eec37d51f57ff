use wallet_sorter::config::AppConfig;
use wallet_sorter::nimble::NimbleClient;
use wallet_sorter::services::sorter::run_job;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::info!(
        address_file = %config.address_file.display(),
        output_file = %config.output_file.display(),
        api = %config.nimble_api_base,
        delay_ms = config.request_delay.as_millis() as u64,
        "Starting wallet sorter"
    );

    let client = NimbleClient::with_base_url(reqwest::Client::new(), &config.nimble_api_base)
        .with_timeouts(config.particle_timeout, config.balance_timeout);

    run_job(&client, &config).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();
}
