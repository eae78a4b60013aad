//! Core reload manager implementation.

use crate::schema::HoverConfig;
use crate::toml_loader;
use crate::validation;
use crate::watcher::{ConfigWatcher, DEBOUNCE};
use hover_common::ConfigError;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

/// Manages live config reloading.
///
/// Watches the config file for changes and publishes new configs
/// via a [`tokio::sync::watch`] channel.
pub struct ReloadManager {
    config_path: PathBuf,
    debounce: Duration,
}

impl ReloadManager {
    /// Load the initial config from the given path and start watching for changes.
    ///
    /// Returns the initial config and a receiver that observes every accepted
    /// reload. A missing or unreadable file yields defaults. Must be called
    /// from within a tokio runtime.
    pub async fn start(config_path: PathBuf) -> (HoverConfig, watch::Receiver<HoverConfig>) {
        Self::start_with_debounce(config_path, DEBOUNCE).await
    }

    /// Like [`ReloadManager::start`], waiting `debounce` of quiet after the
    /// last file event before reloading.
    pub async fn start_with_debounce(
        config_path: PathBuf,
        debounce: Duration,
    ) -> (HoverConfig, watch::Receiver<HoverConfig>) {
        let initial_config = match toml_loader::load_from_path(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to load config: {e}, using defaults");
                HoverConfig::default()
            }
        };

        let (config_tx, config_rx) = watch::channel(initial_config.clone());

        tokio::spawn(async move {
            let manager = ReloadManager {
                config_path,
                debounce,
            };
            manager.run_watch_loop(config_tx).await;
        });

        (initial_config, config_rx)
    }

    async fn run_watch_loop(&self, config_tx: watch::Sender<HoverConfig>) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(w) => w.with_debounce(self.debounce),
            Err(e) => {
                error!("failed to create config watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);

        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("config watcher error: {e}");
            }
        });

        loop {
            match change_rx.recv().await {
                Ok(()) => {
                    info!("reloading config from {}", self.config_path.display());
                    match reload_config(&self.config_path) {
                        Ok(config) => {
                            if config_tx.is_closed() {
                                info!("all config receivers dropped, stopping reload manager");
                                break;
                            }
                            config_tx.send_if_modified(|current| {
                                if *current == config {
                                    false
                                } else {
                                    *current = config;
                                    true
                                }
                            });
                        }
                        Err(e) => {
                            warn!("config reload failed: {e}");
                        }
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("config watcher lagged by {n} events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("config watcher channel closed");
                    break;
                }
            }
        }
    }
}

/// Read and validate a config from disk. Invalid configs are rejected so the
/// previous one stays in effect.
pub(super) fn reload_config(path: &Path) -> Result<HoverConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
