use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use consulta_precio::announce::{Announcer, CommandAnnouncer, LogAnnouncer};
use consulta_precio::config::Config;
use consulta_precio::pricing::{normalize_code, PricingClient};
use consulta_precio::shutdown::{listen_for_signals, ShutdownHandle};
use consulta_precio::{logging, ui};

/// Price-check kiosk for barcode scanners
#[derive(Parser)]
#[command(name = "consulta-precio", version, about)]
struct Cli {
    /// Config file (defaults to the per-user config directory)
    #[arg(short, long, env = "CONSULTA_PRECIO_CONFIG")]
    config: Option<PathBuf>,

    /// Back-office base URL, overrides `pricing.base_url`
    #[arg(long)]
    base_url: Option<String>,

    /// Company tax id (RUT), overrides `pricing.tax_id`
    #[arg(long)]
    tax_id: Option<String>,

    /// Do not speak prices
    #[arg(long)]
    mute: bool,

    /// Log file, overrides `logging.file`
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Look up one code, print the result as JSON and exit
    #[arg(long, value_name = "CODE")]
    lookup: Option<String>,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => Config::load().context("loading configuration")?,
        };

        if let Some(base_url) = &self.base_url {
            config.pricing.base_url = base_url.clone();
        }
        if let Some(tax_id) = &self.tax_id {
            config.pricing.tax_id = tax_id.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        if self.mute {
            config.speech.enabled = false;
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    match cli.lookup.as_deref() {
        Some(code) => lookup_once(&config, code).await,
        None => run_kiosk(config).await,
    }
}

async fn lookup_once(config: &Config, code: &str) -> anyhow::Result<()> {
    let Some(code) = normalize_code(code) else {
        anyhow::bail!("--lookup needs a non-blank product code");
    };
    logging::init_stderr(&config.logging).context("initialising logging")?;
    let client = PricingClient::new(&config.pricing)?;
    tracing::debug!(url = %client.lookup_url(code), "one-shot lookup");

    let products = client.lookup(code).await?;
    println!("{}", serde_json::to_string_pretty(&products)?);
    Ok(())
}

async fn run_kiosk(config: Config) -> anyhow::Result<()> {
    logging::init_file(&config.logging).with_context(|| {
        format!("opening log file {}", config.logging.file_path().display())
    })?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.pricing.base_url,
        "starting"
    );

    let shutdown = ShutdownHandle::new();
    tokio::spawn(listen_for_signals(shutdown.clone()));

    let client = Arc::new(PricingClient::new(&config.pricing)?);
    let announcer = speech(&config);

    ui::run(&config, client, announcer, shutdown)
        .await
        .context("kiosk display failed")
}

fn speech(config: &Config) -> Arc<dyn Announcer> {
    if !config.speech.enabled {
        return Arc::new(LogAnnouncer);
    }
    match CommandAnnouncer::spawn(&config.speech) {
        Ok(announcer) => Arc::new(announcer),
        Err(err) => {
            tracing::warn!(error = %err, "speech unavailable, announcing to the log only");
            Arc::new(LogAnnouncer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blank_lookup_code_is_rejected() {
        let err = lookup_once(&Config::default(), "  \t").await.unwrap_err();
        assert!(err.to_string().contains("non-blank"));
    }
}
