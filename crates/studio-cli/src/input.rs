//! # Document Input
//!
//! Loads editor documents from disk for the validate and preview
//! subcommands. YAML is accepted alongside JSON because fixture
//! documents are usually written by hand; both land as JSON values
//! before any rule sees them.

use std::path::Path;

use anyhow::Context;
use serde_json::Value;

/// Load a document file, choosing the parser by extension.
///
/// `.yaml`/`.yml` parse as YAML and convert to a JSON value; everything
/// else parses as JSON.
pub fn load_document(path: &Path) -> anyhow::Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading document {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let document = if is_yaml {
        let yaml: serde_yaml::Value = serde_yaml::from_str(&text)
            .with_context(|| format!("parsing YAML document {}", path.display()))?;
        serde_json::to_value(yaml)
            .with_context(|| format!("converting YAML document {}", path.display()))?
    } else {
        serde_json::from_str(&text)
            .with_context(|| format!("parsing JSON document {}", path.display()))?
    };
    tracing::debug!(path = %path.display(), yaml = is_yaml, "document loaded");
    Ok(document)
}
