//! # IRCTL CLI
//!
//! Command-line interface for the image registry operator's `Config` resource.
//!
//! Cluster commands are read-only: they fetch and display `Config` resources
//! but never modify them.
//!
//! ## Usage
//!
//! ```bash
//! # Print the CustomResourceDefinition
//! irctl crd
//!
//! # Decode a local Config or ConfigList document and report on it
//! irctl inspect config.yaml
//! cat config.json | irctl inspect - --output json
//!
//! # Print the Config named "instance" (or another name)
//! irctl get
//! irctl get staging
//!
//! # List all Config resources
//! irctl list
//!
//! # Show status and storage conditions
//! irctl status
//!
//! # Follow changes to Config resources
//! irctl watch
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use image_registry_operator_api::config::CliConfig;
use image_registry_operator_api::crd::{Config, ImageRegistryConfigStorage};
use image_registry_operator_api::document::{encode, Format};
use image_registry_operator_api::observability::init_tracing;
use kube::core::CustomResourceExt;
use kube::Client;
use std::path::PathBuf;
use tracing::debug;

mod get;
mod inspect;
mod list;
mod status;
mod watch;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("BUILD_GIT_HASH"),
    ", built ",
    env!("BUILD_DATETIME"),
    ")"
);

/// Image Registry Operator Config CLI
#[derive(Parser)]
#[command(name = "irctl", version = VERSION)]
#[command(
    about = "Inspect image registry operator Config resources",
    long_about = None,
    after_help = "\
Examples:
  irctl crd > configs.crd.yaml
  irctl inspect config.yaml
  irctl get instance --output json
  irctl status
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Format for printed documents (defaults to OUTPUT_FORMAT or yaml)
    #[arg(short, long, global = true, value_enum)]
    output: Option<Format>,

    /// Kubernetes context to use
    #[arg(short, long, global = true)]
    context: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Config CustomResourceDefinition
    Crd,
    /// Decode a Config or ConfigList document and print it back normalized
    Inspect {
        /// Path to a YAML or JSON document, '-' reads stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Print a Config resource
    Get {
        /// Name of the Config (defaults to IMAGE_REGISTRY_RESOURCE or "instance")
        #[arg(value_name = "NAME")]
        name: Option<String>,
    },
    /// List all Config resources
    List,
    /// Show status of a Config resource
    Status {
        /// Name of the Config (defaults to IMAGE_REGISTRY_RESOURCE or "instance")
        #[arg(value_name = "NAME")]
        name: Option<String>,
    },
    /// Follow changes to Config resources until interrupted
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::from_env();
    if let Some(output) = cli.output {
        config.output_format = output;
    }
    init_tracing(&config)?;
    debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Crd => {
            print!("{}", encode(&Config::crd(), config.output_format)?);
            Ok(())
        }
        Commands::Inspect { file } => inspect::inspect_command(&file, config.output_format),
        Commands::Get { name } => {
            let client = create_client(cli.context).await?;
            let name = name.unwrap_or_else(|| config.resource_name.clone());
            get::get_command(client, &name, config.output_format).await
        }
        Commands::List => {
            let client = create_client(cli.context).await?;
            list::list_command(client).await
        }
        Commands::Status { name } => {
            let client = create_client(cli.context).await?;
            let name = name.unwrap_or_else(|| config.resource_name.clone());
            status::status_command(client, &name).await
        }
        Commands::Watch => {
            let client = create_client(cli.context).await?;
            watch::watch_command(client, config.watch_timeout_secs).await
        }
    }
}

/// Create a Kubernetes client, optionally for a specific kubeconfig context
async fn create_client(context: Option<String>) -> Result<Client> {
    // Configure rustls crypto provider before any TLS connection is made
    // Required for rustls 0.23+ when no default provider is set via features
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    let kube_config = match context {
        Some(context) => kube::Config::from_kubeconfig(&kube::config::KubeConfigOptions {
            context: Some(context.clone()),
            ..Default::default()
        })
        .await
        .with_context(|| format!("Failed to load kubeconfig context '{context}'"))?,
        None => kube::Config::infer()
            .await
            .context("Failed to infer Kubernetes configuration. Ensure kubeconfig is configured.")?,
    };

    Client::try_from(kube_config).context("Failed to create Kubernetes client")
}

/// Short label for a storage block: the backend, "-" when empty, or all
/// configured backends joined with '+' when ambiguous
fn storage_label(storage: &ImageRegistryConfigStorage) -> String {
    match storage.kind() {
        Ok(Some(kind)) => kind.to_string(),
        Ok(None) => "-".to_string(),
        Err(_) => storage
            .configured()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("+"),
    }
}
