//! Render JSON-described expressions and statements as Pig Latin

use serde_json::Value;
use tracing::debug;

use crate::{field::Field, inout::StorageTypes};

use super::{CliError, json_to_field, json_to_statement};

/// Options for the render command
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// JSON document: one item, or an array of items
    pub input: Option<String>,
    /// Extra `(name, invocation)` storage functions, on top of the built-ins
    pub storage: Vec<(String, String)>,
}

/// Render every item of the input document, one line per item.
///
/// Statements end with `;`; bare expressions (`{"expression": ...}`) do not.
///
/// ```
/// use piglet::cli::{RenderOptions, execute_render};
///
/// let options = RenderOptions {
///     input: Some(r#"[{"store": "daily", "into": "/out/daily"}, {"dump": "daily"}]"#.into()),
///     ..RenderOptions::default()
/// };
///
/// assert_eq!(
///     execute_render(&options).unwrap(),
///     vec!["STORE daily INTO '/out/daily';", "DUMP daily;"]
/// );
/// ```
pub fn execute_render(options: &RenderOptions) -> Result<Vec<String>, CliError> {
    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let document: Value = serde_json::from_str(json_str)?;

    let mut storage = StorageTypes::default();
    for (name, invocation) in &options.storage {
        storage.register(name.as_str(), invocation.as_str());
    }

    let items = match document {
        Value::Array(items) => items,
        item => vec![item],
    };
    debug!(items = items.len(), "rendering document");

    items
        .iter()
        .map(|item| match item.get("expression") {
            Some(expr) => Ok(json_to_field(expr)?.render()),
            None => json_to_statement(item, &storage).map(|statement| format!("{statement};")),
        })
        .collect()
}

/// One `name  invocation` line per registered storage function.
pub fn storage_overview(storage: &StorageTypes) -> String {
    let width = storage.entries().map(|(name, _)| name.len()).max().unwrap_or(0);
    storage
        .entries()
        .map(|(name, invocation)| format!("{name:<width$}  {invocation}\n"))
        .collect()
}
