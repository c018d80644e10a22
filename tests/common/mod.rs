//! Shared test utilities and test doubles.

#![allow(dead_code, unused_imports)]

pub mod mock_pricing;

use consulta_precio::announce::Announcer;
use consulta_precio::config::{Config, PricingConfig};
use consulta_precio::pricing::{FetchFuture, LookupError, Product, ProductSource};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Decode one product the way the endpoint would send it.
pub fn product(code: &str, name: &str, price: &str) -> Product {
    let json = serde_json::json!({
        "Codigo": code,
        "Nombre": name,
        "PrecioVenta": price,
        "RutaFoto1": "",
        "RutaFoto2": "",
        "RutaFoto3": "",
    });
    serde_json::from_value(json).expect("valid product json")
}

#[derive(Clone)]
struct Scripted {
    delay: Duration,
    result: Result<Vec<Product>, LookupError>,
}

/// Product source with canned answers per code. Unknown codes resolve to an
/// empty list immediately.
#[derive(Clone, Default)]
pub struct StubSource {
    scripts: Arc<Mutex<HashMap<String, Scripted>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, code: &str, delay: Duration, result: Result<Vec<Product>, LookupError>) {
        self.scripts
            .lock()
            .insert(code.to_string(), Scripted { delay, result });
    }

    pub fn found(&self, code: &str, delay: Duration, product: Product) {
        self.respond(code, delay, Ok(vec![product]));
    }

    /// Codes fetched so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

impl ProductSource for StubSource {
    fn fetch(&self, code: &str) -> FetchFuture {
        self.calls.lock().push(code.to_string());
        let scripted = self.scripts.lock().get(code).cloned();
        Box::pin(async move {
            match scripted {
                Some(Scripted { delay, result }) => {
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    result
                }
                None => Ok(Vec::new()),
            }
        })
    }
}

/// Announcer that records every phrase instead of speaking it.
#[derive(Clone, Default)]
pub struct RecordingAnnouncer {
    phrases: Arc<Mutex<Vec<String>>>,
    shutdowns: Arc<Mutex<usize>>,
}

impl RecordingAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phrases(&self) -> Vec<String> {
        self.phrases.lock().clone()
    }

    pub fn shutdown_count(&self) -> usize {
        *self.shutdowns.lock()
    }
}

impl Announcer for RecordingAnnouncer {
    fn announce(&self, text: &str) {
        self.phrases.lock().push(text.to_string());
    }

    fn shutdown(&self) {
        *self.shutdowns.lock() += 1;
    }
}

/// Pricing settings pointing at `base_url` with a short timeout.
pub fn pricing_config(base_url: &str, timeout_seconds: u64) -> PricingConfig {
    PricingConfig {
        base_url: base_url.to_string(),
        timeout_seconds,
        ..PricingConfig::default()
    }
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
