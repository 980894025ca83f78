//! # List Command
//!
//! Command to list all `Config` resources.

use anyhow::{Context, Result};
use image_registry_operator_api::crd::{Config, ConfigList};
use kube::{api::Api, Client};

use crate::storage_label;

/// List all Config resources
pub async fn list_command(client: Client) -> Result<()> {
    let api: Api<Config> = Api::all(client);

    let configs: ConfigList = api
        .list(&kube::api::ListParams::default())
        .await
        .context("Failed to list Config resources")?
        .into();

    if configs.is_empty() {
        println!("No Config resources found.");
        return Ok(());
    }

    println!(
        "{:<20} {:<12} {:<16} {:<10} {:<16} {:<40}",
        "NAME", "MANAGEMENT", "STORAGE", "REPLICAS", "STORAGE MANAGED", "HOSTNAME"
    );
    println!("{}", "-".repeat(117));

    for config in &configs {
        let name = config.metadata.name.as_deref().unwrap_or("<unknown>");
        let management = config.spec.management_state.as_str();
        let storage = storage_label(&config.spec.storage);
        let replicas = config
            .spec
            .replicas
            .map_or_else(|| "-".to_string(), |n| n.to_string());

        let (storage_managed, hostname) = config.status.as_ref().map_or(("Unknown", "-"), |s| {
            (
                if s.storage_managed { "Yes" } else { "No" },
                if s.internal_registry_hostname.is_empty() {
                    "-"
                } else {
                    s.internal_registry_hostname.as_str()
                },
            )
        });

        println!(
            "{name:<20} {management:<12} {storage:<16} {replicas:<10} {storage_managed:<16} {hostname:<40}"
        );
    }

    Ok(())
}
