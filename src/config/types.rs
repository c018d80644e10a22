use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub scanner: ScannerConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Price-list service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Scheme + host of the store back office (e.g., "https://tienda.example.cl").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Company tax id sent as `Rut_Empresa`.
    #[serde(default = "default_tax_id")]
    pub tax_id: String,
    /// Total time allowed for one lookup, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// TCP connect timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

/// Screen behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// How long a found product stays on screen.
    #[serde(default = "default_dwell")]
    pub dwell_seconds: u64,
    /// Banner shown in the logo region.
    #[serde(default = "default_store_name")]
    pub store_name: String,
    /// UI tick in milliseconds (animation and scan cadence checks).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

/// Barcode scanner input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Keystroke silence that ends a scan, in milliseconds.
    #[serde(default = "default_idle_ms")]
    pub idle_ms: u64,
}

/// Spoken announcements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Speech engine executable; the phrase is appended as the last argument.
    #[serde(default = "default_speech_command")]
    pub command: String,
    #[serde(default = "default_speech_args")]
    pub args: Vec<String>,
}

/// Log output. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; `None` means [`default_log_path`].
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    "http://localhost".to_string()
}

fn default_tax_id() -> String {
    "77912473-8".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_dwell() -> u64 {
    10
}

fn default_store_name() -> String {
    "ENG MARKET".to_string()
}

fn default_tick_ms() -> u64 {
    50
}

fn default_idle_ms() -> u64 {
    80
}

fn default_true() -> bool {
    true
}

fn default_speech_command() -> String {
    "espeak-ng".to_string()
}

fn default_speech_args() -> Vec<String> {
    vec!["-v".to_string(), "es-419".to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}

/// `<data_local_dir>/consulta-precio/kiosk.log`, or the working directory
/// when the platform has no data dir.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("consulta-precio").join("kiosk.log"))
        .unwrap_or_else(|| PathBuf::from("consulta-precio.log"))
}

impl PricingConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

impl DisplayConfig {
    pub fn dwell(&self) -> Duration {
        Duration::from_secs(self.dwell_seconds)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

impl ScannerConfig {
    pub fn idle(&self) -> Duration {
        Duration::from_millis(self.idle_ms)
    }
}

impl LoggingConfig {
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(default_log_path)
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            tax_id: default_tax_id(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            dwell_seconds: default_dwell(),
            store_name: default_store_name(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            idle_ms: default_idle_ms(),
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: default_speech_command(),
            args: default_speech_args(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
