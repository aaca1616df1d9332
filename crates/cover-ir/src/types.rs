use std::collections::BTreeSet;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A single member of the universe.
///
/// Integers order before strings; within a kind the natural order applies.
/// Serialized untagged, so `1` and `"a"` round-trip as bare JSON scalars.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Element {
    Int(i64),
    Str(String),
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Element::Int(i) => write!(f, "{i}"),
            Element::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::Int(value)
    }
}

impl From<i32> for Element {
    fn from(value: i32) -> Self {
        Element::Int(i64::from(value))
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Element::Str(value.to_string())
    }
}

// ── Input ────────────────────────────────────────────────────────────

/// A named subset of the universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subset {
    pub name: String,
    pub elements: BTreeSet<Element>,
}

impl Subset {
    pub fn new<I, E>(name: impl Into<String>, elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        Self {
            name: name.into(),
            elements: elements.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in ascending order.
    pub fn sorted(&self) -> Vec<Element> {
        self.elements.iter().cloned().collect()
    }
}

/// The subsets of one problem instance, in document order.
///
/// Document order is the scan order of the greedy engine, so it decides
/// every tie. Names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubsetCollection {
    subsets: Vec<Subset>,
}

impl SubsetCollection {
    pub fn new(subsets: Vec<Subset>) -> Self {
        Self { subsets }
    }

    pub fn len(&self) -> usize {
        self.subsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subsets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Subset> {
        self.subsets.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Subset> {
        self.subsets.iter().find(|s| s.name == name)
    }

    /// Union of every subset.
    pub fn universe(&self) -> BTreeSet<Element> {
        self.subsets
            .iter()
            .flat_map(|s| s.elements.iter().cloned())
            .collect()
    }
}

/// Serialized as a JSON object `name -> [elements]`, keys in document order.
impl Serialize for SubsetCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.subsets.len()))?;
        for subset in &self.subsets {
            map.serialize_entry(&subset.name, &subset.elements)?;
        }
        map.end()
    }
}

// ── Output ───────────────────────────────────────────────────────────

/// One greedy step: the chosen subset and what it contributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub name: String,
    /// The subset's original elements, ascending.
    pub elements: Vec<Element>,
    /// Elements newly covered by this pick.
    pub gain: usize,
}

/// Subsets chosen by the engine, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    pub selections: Vec<Selection>,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, selection: Selection) {
        self.selections.push(selection);
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Selection> {
        self.selections.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.selections.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&[Element]> {
        self.selections
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.elements.as_slice())
    }
}

/// Serialized as a JSON object `name -> [elements]` in selection order.
/// Gains are bookkeeping and are not persisted.
impl Serialize for Solution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.selections.len()))?;
        for selection in &self.selections {
            map.serialize_entry(&selection.name, &selection.elements)?;
        }
        map.end()
    }
}
