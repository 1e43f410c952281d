mod output;
mod run;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "dwc")]
#[command(about = "Check Dell warranty status by serial number")]
struct Cli {
    /// Serial numbers to look up.
    #[arg(
        short = 's',
        long = "serial-numbers",
        num_args = 1..,
        required_unless_present = "brand"
    )]
    serial_numbers: Vec<String>,

    /// Resolve the serial list from the Device42 inventory for this brand
    /// instead of passing serials directly.
    #[arg(short = 'b', long, conflicts_with = "serial_numbers")]
    brand: Option<String>,

    /// Output file; prints the JSON result set to stdout when omitted.
    #[arg(short = 'o', long)]
    output_file: Option<PathBuf>,

    /// Maximum number of lookup requests in flight at once.
    #[arg(short = 'l', long, default_value_t = 100)]
    limit_requests: i64,

    /// Log file.
    #[arg(short = 'L', long, default_value = "/tmp/dwc.log")]
    log: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = dwc_core::load_app_config()?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cli.log)
        .with_context(|| format!("failed to open log file {}", cli.log.display()))?;
    let (writer, _guard) = tracing_appender::non_blocking(log_file);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let serials = match &cli.brand {
        Some(brand) => resolve_brand_serials(&config, brand).await?,
        None => cli.serial_numbers.clone(),
    };
    anyhow::ensure!(!serials.is_empty(), "no serial numbers to look up");

    // Non-positive limits fall back to the client's default of 100.
    let limit = usize::try_from(cli.limit_requests).unwrap_or(0);

    let credentials = match (&config.lookup_username, &config.lookup_password) {
        (Some(user), Some(pass)) => Some((user.clone(), pass.clone())),
        _ => None,
    };
    let client = dwc_lookup::WarrantyClient::new(
        &config.warranty_base_url,
        config.request_timeout_secs,
        &config.user_agent,
        config.accept_invalid_certs,
        credentials,
    )?;

    let records = run::run_lookups(&client, &serials, limit).await;
    output::write_records(cli.output_file.as_deref(), &records)?;
    Ok(())
}

/// Turns a brand name into a serial batch via the Device42 inventory.
///
/// # Errors
///
/// Fails when the inventory connection settings are not configured or the
/// inventory call itself fails.
async fn resolve_brand_serials(
    config: &dwc_core::AppConfig,
    brand: &str,
) -> anyhow::Result<Vec<String>> {
    let (base_url, username, password) = match (
        &config.inventory_base_url,
        &config.inventory_username,
        &config.inventory_password,
    ) {
        (Some(base_url), Some(username), Some(password)) => (base_url, username, password),
        _ => anyhow::bail!("--brand requires D42_BASE_URL, D42_USER, and D42_PASS to be set"),
    };

    let client = dwc_inventory::InventoryClient::new(
        base_url,
        username,
        password,
        config.request_timeout_secs,
        &config.user_agent,
    )?;
    let serials = client.list_serials(brand).await?;
    tracing::info!(
        brand,
        count = serials.len(),
        "resolved serial numbers from inventory"
    );
    Ok(serials)
}
