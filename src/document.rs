//! # Documents
//!
//! Decoding and encoding of `Config` and `ConfigList` documents.
//!
//! YAML is a superset of JSON, so a single decoder handles both. The kind is
//! read from the document's `kind` key; a document without one is taken to
//! be a `Config`.

use crate::constants::CONFIG_LIST_KIND;
use crate::crd::{Config, ConfigList};
use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Document serialization format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    #[default]
    Yaml,
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(Format::Yaml),
            "json" => Ok(Format::Json),
            other => Err(format!("unknown format '{other}', expected yaml or json")),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Yaml => f.write_str("yaml"),
            Format::Json => f.write_str("json"),
        }
    }
}

/// A decoded document
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Config(Box<Config>),
    List(ConfigList),
}

impl Document {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Document::Config(_) => "Config",
            Document::List(_) => CONFIG_LIST_KIND,
        }
    }

    /// The resources carried by the document, in order
    #[must_use]
    pub fn configs(&self) -> Vec<&Config> {
        match self {
            Document::Config(config) => vec![config.as_ref()],
            Document::List(list) => list.iter().collect(),
        }
    }

    pub fn encode(&self, format: Format) -> Result<String> {
        match self {
            Document::Config(config) => encode(config.as_ref(), format),
            Document::List(list) => encode(list, format),
        }
    }
}

/// Decode a YAML or JSON `Config` or `ConfigList` document
pub fn decode(input: &str) -> Result<Document> {
    let value: serde_yaml::Value = serde_yaml::from_str(input)?;
    let kind = value
        .get("kind")
        .and_then(serde_yaml::Value::as_str)
        .unwrap_or("Config")
        .to_string();
    debug!(kind = %kind, "Decoding document");

    match kind.as_str() {
        "Config" => Ok(Document::Config(Box::new(serde_yaml::from_value(value)?))),
        CONFIG_LIST_KIND => Ok(Document::List(serde_yaml::from_value(value)?)),
        other => Err(Error::UnsupportedKind(other.to_string())),
    }
}

/// Encode any API value in the given format
pub fn encode<T: Serialize>(value: &T, format: Format) -> Result<String> {
    match format {
        Format::Yaml => Ok(serde_yaml::to_string(value)?),
        Format::Json => {
            let mut out = serde_json::to_string_pretty(value)?;
            out.push('\n');
            Ok(out)
        }
    }
}
