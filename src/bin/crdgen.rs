//! # CRD Generator
//!
//! Generates the Kubernetes CustomResourceDefinition YAML for the `Config`
//! resource from the Rust type definitions.
//!
//! ## Usage
//!
//! ```bash
//! # Generate CRD YAML
//! cargo run --bin crdgen > config/crd/imageregistry.operator.openshift.io_configs.yaml
//!
//! # Generate and apply directly
//! cargo run --bin crdgen | kubectl apply -f -
//! ```
//!
//! The generated CRD is cluster scoped and includes the OpenAPI schema,
//! the status subresource and the printer columns.

use image_registry_operator_api::config::CliConfig;
use image_registry_operator_api::crd::Config;
use image_registry_operator_api::document::{encode, Format};
use image_registry_operator_api::observability::init_tracing;
use kube::core::CustomResourceExt;
use tracing::{debug, error};

fn main() {
    let config = CliConfig::from_env();
    if let Err(e) = init_tracing(&config) {
        eprintln!("{e:#}");
    }

    let crd = Config::crd();
    debug!(
        name = crd.metadata.name.as_deref().unwrap_or_default(),
        "Generated CRD"
    );

    // Always YAML, kubectl apply -f - takes either
    match encode(&crd, Format::Yaml) {
        Ok(yaml) => {
            print!("{yaml}");
        }
        Err(e) => {
            error!("Failed to serialize CRD to YAML: {}", e);
            std::process::exit(1);
        }
    }
}
