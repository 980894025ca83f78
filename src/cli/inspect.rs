//! # Inspect Command
//!
//! Decode a local `Config` or `ConfigList` document, report what it
//! configures and print it back in normalized form.

use anyhow::{Context, Result};
use image_registry_operator_api::constants::IMAGE_REGISTRY_RESOURCE_NAME;
use image_registry_operator_api::crd::Config;
use image_registry_operator_api::document::{decode, Format};
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Decode the document at `path` ('-' for stdin) and print it in `format`
pub fn inspect_command(path: &Path, format: Format) -> Result<()> {
    let input = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read document from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    let document =
        decode(&input).with_context(|| format!("Failed to decode {}", path.display()))?;
    info!(
        kind = document.kind(),
        resources = document.configs().len(),
        "Decoded document"
    );

    for config in document.configs() {
        report(config);
    }

    print!("{}", document.encode(format)?);
    Ok(())
}

fn report(config: &Config) {
    let name = config.metadata.name.as_deref().unwrap_or("<unnamed>");

    if name != IMAGE_REGISTRY_RESOURCE_NAME {
        warn!(
            name = %name,
            "The operator only acts on the Config named '{}'", IMAGE_REGISTRY_RESOURCE_NAME
        );
    }

    match config.spec.storage.kind() {
        Ok(Some(kind)) => info!(name = %name, storage = %kind, "Storage backend configured"),
        Ok(None) => info!(name = %name, "No storage backend configured"),
        Err(e) => warn!(
            name = %name,
            error = %e,
            "Storage backend is ambiguous, the operator decides which one applies"
        ),
    }

    info!(
        name = %name,
        management_state = %config.spec.management_state,
        routes = config.spec.routes.len(),
        replicas = ?config.spec.replicas,
        "Spec summary"
    );
}
