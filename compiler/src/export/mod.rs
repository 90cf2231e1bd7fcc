//! Rendering of the node sequence for the call-flow runtime.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ir::types::IvrNode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// CommonJS module: `module.exports = [...];`
    #[default]
    Js,
    Json,
    Yaml,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

const JS_PREFIX: &str = "module.exports = ";

pub fn render(nodes: &[IvrNode], format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Js => Ok(format!("{JS_PREFIX}{};", to_json(nodes)?)),
        ExportFormat::Json => to_json(nodes),
        ExportFormat::Yaml => Ok(serde_yaml::to_string(nodes)?),
    }
}

/// Read back a JSON rendering.
pub fn from_json(json: &str) -> Result<Vec<IvrNode>, ExportError> {
    Ok(serde_json::from_str(json)?)
}

fn to_json(nodes: &[IvrNode]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(nodes)?)
}
