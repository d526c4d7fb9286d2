use age_signals_bridge::{AgeSignalsData, FakeResultSpec, SignalsBridge, SignalsOutcome};
use age_signals_client::HttpManagerConfig;
use anyhow::bail;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "age-signals")]
#[command(about = "Check age signals through the bridge", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a real check against the vendor service
    Check {
        /// Service base URL
        #[arg(long, env = "AGE_SIGNALS_BASE_URL")]
        base_url: String,
        /// Request timeout in seconds
        #[arg(long, default_value_t = 30)]
        timeout_secs: u64,
    },
    /// Run a check against a fake manager with a canned result
    FakeCheck {
        /// User status code (0-5)
        #[arg(long, default_value_t = 0)]
        user_status: i32,
        /// Lower age bound (ignored unless positive)
        #[arg(long, default_value_t = 0)]
        age_lower: i32,
        /// Upper age bound (ignored unless positive)
        #[arg(long, default_value_t = 0)]
        age_upper: i32,
        /// Install identifier (ignored unless non-empty)
        #[arg(long)]
        install_id: Option<String>,
        /// Approval date in epoch milliseconds (ignored unless positive)
        #[arg(long, default_value_t = 0)]
        date_millis: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let bridge = match cli.command {
        Commands::Check {
            base_url,
            timeout_secs,
        } => {
            let config = HttpManagerConfig::new(base_url).with_timeout_secs(timeout_secs);
            SignalsBridge::new(config, false)?
        }
        Commands::FakeCheck {
            user_status,
            age_lower,
            age_upper,
            install_id,
            date_millis,
        } => {
            let bridge = SignalsBridge::new(HttpManagerConfig::default(), true)?;
            bridge.configure_fake_result(&FakeResultSpec {
                user_status,
                age_lower,
                age_upper,
                install_id,
                date_millis,
            });
            bridge
        }
    };

    match bridge.check().await {
        SignalsOutcome::Success(json) => {
            println!("{json}");
            if let Ok(data) = AgeSignalsData::from_json(&json) {
                print_summary(&data);
            }
            Ok(())
        }
        SignalsOutcome::Error { code, message } => {
            bail!("age signals check failed ({code}): {message}")
        }
    }
}

fn print_summary(data: &AgeSignalsData) {
    match data.status() {
        Some(status) => tracing::info!("status: {status:?}"),
        None => tracing::info!("status: unrecognized code {}", data.user_status()),
    }
    if let (Some(lower), Some(upper)) = (data.age_lower(), data.age_upper()) {
        tracing::info!("age estimate: {lower}-{upper}");
    }
    if let Some(date) = data.approval_date() {
        tracing::info!("most recent approval: {date}");
    }
    if let Some(id) = data.install_id() {
        tracing::info!("install id: {id}");
    }
}
