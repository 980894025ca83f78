//! # Get Command
//!
//! Print a single `Config` resource.

use anyhow::{Context, Result};
use image_registry_operator_api::crd::Config;
use image_registry_operator_api::document::{encode, Format};
use kube::{api::Api, Client};

/// Fetch the named Config and print it in `format`
pub async fn get_command(client: Client, name: &str, format: Format) -> Result<()> {
    // Config is cluster scoped
    let api: Api<Config> = Api::all(client);

    let config = api
        .get(name)
        .await
        .with_context(|| format!("Failed to get Config '{name}'"))?;

    print!("{}", encode(&config, format)?);
    Ok(())
}
