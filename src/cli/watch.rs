//! # Watch Command
//!
//! Follow changes to `Config` resources and log each event until
//! interrupted with Ctrl+C.

use anyhow::{Context, Result};
use futures::{StreamExt, TryStreamExt};
use image_registry_operator_api::crd::Config;
use kube::{api::Api, Client};
use kube_runtime::{watcher, WatchStreamExt};
use tracing::{debug, info, warn};

use crate::storage_label;

/// Watch all Config resources, restarting the watch every `timeout_secs`
pub async fn watch_command(client: Client, timeout_secs: u32) -> Result<()> {
    let api: Api<Config> = Api::all(client);
    let watcher_config = watcher::Config::default().timeout(timeout_secs);

    let mut stream = watcher(api, watcher_config).default_backoff().boxed();
    info!(timeout_secs, "Watching Config resources (Ctrl+C to stop)");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, stopping watch");
                return Ok(());
            }
            event = stream.try_next() => {
                match event.context("Config watch failed")? {
                    Some(event) => log_event(event),
                    None => {
                        warn!("Watch stream ended");
                        return Ok(());
                    }
                }
            }
        }
    }
}

fn log_event(event: watcher::Event<Config>) {
    match event {
        watcher::Event::Init => debug!("Watch (re)started, relisting"),
        watcher::Event::InitApply(config) => log_config("Listed", &config),
        watcher::Event::InitDone => info!("Initial listing complete"),
        watcher::Event::Apply(config) => log_config("Applied", &config),
        watcher::Event::Delete(config) => info!(
            name = config.metadata.name.as_deref().unwrap_or("<unknown>"),
            "Deleted"
        ),
    }
}

fn log_config(action: &str, config: &Config) {
    let name = config.metadata.name.as_deref().unwrap_or("<unknown>");
    let (ready_replicas, storage_managed) = config
        .status
        .as_ref()
        .map_or((0, false), |s| (s.operator.ready_replicas, s.storage_managed));

    info!(
        name = %name,
        generation = ?config.metadata.generation,
        management_state = %config.spec.management_state,
        storage = %storage_label(&config.spec.storage),
        ready_replicas,
        storage_managed,
        "{action}"
    );
}
