//! Input validation for problem instances.
//!
//! An instance is a JSON object mapping subset names to arrays of integers
//! or strings. Every failure is fatal; the first problem found is reported.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::types::{Element, Subset, SubsetCollection};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Parent JSON type must be an object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("Input is empty: no subsets given")]
    Empty,

    #[error("Secondary JSON type must be an array: subset '{subset}' is {found}")]
    NotAList { subset: String, found: &'static str },

    #[error("Unsupported element {value} in '{subset}': only integers and strings are allowed")]
    UnsupportedElement { subset: String, value: String },

    #[error("There's a duplicate in '{subset}': {element} appears more than once")]
    DuplicateElement { subset: String, element: Element },
}

/// Which side of the run a path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRole {
    Input,
    Output,
}

impl std::fmt::Display for PathRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathRole::Input => write!(f, "Input"),
            PathRole::Output => write!(f, "Output"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExtensionError {
    #[error("{role} file must be JSON: '{}' does not end in .json", .path.display())]
    NotJson { role: PathRole, path: PathBuf },
}

/// Require a literal `.json` extension. The file content is not inspected.
pub fn check_extension(path: &Path, role: PathRole) -> Result<(), ExtensionError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(()),
        _ => Err(ExtensionError::NotJson {
            role,
            path: path.to_path_buf(),
        }),
    }
}

/// Turn a raw JSON value into a [`SubsetCollection`].
pub fn validate_instance(value: &Value) -> Result<SubsetCollection, ValidationError> {
    let object = value.as_object().ok_or(ValidationError::NotAnObject {
        found: kind_of(value),
    })?;
    if object.is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut subsets = Vec::with_capacity(object.len());
    for (name, raw) in object {
        subsets.push(validate_subset(name, raw)?);
    }
    Ok(SubsetCollection::new(subsets))
}

fn validate_subset(name: &str, raw: &Value) -> Result<Subset, ValidationError> {
    let items = raw.as_array().ok_or_else(|| ValidationError::NotAList {
        subset: name.to_string(),
        found: kind_of(raw),
    })?;

    let mut elements = BTreeSet::new();
    for item in items {
        let element = to_element(item).ok_or_else(|| ValidationError::UnsupportedElement {
            subset: name.to_string(),
            value: item.to_string(),
        })?;
        if elements.contains(&element) {
            return Err(ValidationError::DuplicateElement {
                subset: name.to_string(),
                element,
            });
        }
        elements.insert(element);
    }

    Ok(Subset {
        name: name.to_string(),
        elements,
    })
}

fn to_element(value: &Value) -> Option<Element> {
    match value {
        Value::Number(n) => n.as_i64().map(Element::Int),
        Value::String(s) => Some(Element::Str(s.clone())),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
