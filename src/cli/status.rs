//! # Status Command
//!
//! Show the spec summary, status and storage conditions of a `Config`.

use anyhow::{Context, Result};
use image_registry_operator_api::crd::{Config, OperatorCondition};
use kube::{api::Api, Client};

use crate::storage_label;

/// Show status of a Config resource
pub async fn status_command(client: Client, name: &str) -> Result<()> {
    let api: Api<Config> = Api::all(client);

    let config = api
        .get(name)
        .await
        .with_context(|| format!("Failed to get Config '{name}'"))?;

    println!("Config: {name}");
    println!();

    println!("Spec:");
    println!("  Management State: {}", config.spec.management_state);
    println!("  Storage: {}", storage_label(&config.spec.storage));
    if let Some(replicas) = config.spec.replicas {
        println!("  Replicas: {replicas}");
    }
    if let Some(default_route) = config.spec.default_route {
        println!("  Default Route: {default_route}");
    }
    for route in &config.spec.routes {
        println!("  Route: {} ({})", route.name, route.hostname);
    }
    if !config.spec.proxy.is_empty() {
        println!("  Proxy: configured");
    }
    println!();

    let Some(status) = &config.status else {
        println!("Status: Not yet reported");
        return Ok(());
    };

    println!("Status:");
    if let Some(generation) = status.operator.observed_generation {
        println!("  Observed Generation: {generation}");
    }
    println!("  Ready Replicas: {}", status.operator.ready_replicas);
    println!(
        "  Storage Managed: {}",
        if status.storage_managed { "Yes" } else { "No" }
    );
    println!("  Storage In Use: {}", storage_label(&status.storage));
    if !status.internal_registry_hostname.is_empty() {
        println!(
            "  Internal Registry Hostname: {}",
            status.internal_registry_hostname
        );
    }
    println!();

    println!("Storage Conditions:");
    for (condition_type, condition) in status.storage_conditions() {
        match condition {
            Some(condition) => print_condition(condition),
            None => println!("  {condition_type}: Not reported"),
        }
    }

    let other: Vec<&OperatorCondition> = status
        .operator
        .conditions
        .iter()
        .filter(|c| !status.storage_conditions().any(|(t, _)| t == c.r#type))
        .collect();
    if !other.is_empty() {
        println!();
        println!("Conditions:");
        for condition in other {
            print_condition(condition);
        }
    }

    Ok(())
}

fn print_condition(condition: &OperatorCondition) {
    let reason = condition.reason.as_deref().unwrap_or("-");
    println!("  {}: {} ({reason})", condition.r#type, condition.status);
    if let Some(message) = &condition.message {
        println!("    Message: {message}");
    }
    if let Some(time) = &condition.last_transition_time {
        println!("    Last Transition: {time}");
    }
}
