use serde::Serialize;

use crate::types::SubsetCollection;
use crate::validate::{validate_instance, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Parse and validate a problem instance. Subsets keep document order.
pub fn parse_instance(json: &str) -> Result<SubsetCollection, ParseError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    Ok(validate_instance(&value)?)
}

/// Pretty-print `value` as JSON with `indent` spaces per level.
pub fn to_json_indented<T: Serialize>(value: &T, indent: usize) -> Result<String, ParseError> {
    let pad = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(pad.as_bytes());
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only ever writes UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
