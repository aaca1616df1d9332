//! Check a solution against the instance it was computed from.
//!
//! A valid cover:
//! - **covers** every element of the input union,
//! - reproduces each chosen subset **faithfully** (same elements, ascending),
//! - names each subset at most once,
//! - makes **progress** on every step (each pick covers something new).

use std::collections::{BTreeSet, HashSet};

use cover_ir::types::{Element, Solution, SubsetCollection};

/// Result of checking a solution.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoverReport {
    /// Input elements no selection covers.
    pub missing: BTreeSet<Element>,
    /// Selected names absent from the input.
    pub unknown: Vec<String>,
    /// Selections whose elements differ from the input subset or are unsorted.
    pub altered: Vec<String>,
    /// Names selected more than once.
    pub repeated: Vec<String>,
    /// Selections that covered nothing new when chosen.
    pub stalled: Vec<String>,
}

impl CoverReport {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
            && self.unknown.is_empty()
            && self.altered.is_empty()
            && self.repeated.is_empty()
            && self.stalled.is_empty()
    }
}

/// Check `solution` against `input`.
pub fn verify_cover(input: &SubsetCollection, solution: &Solution) -> CoverReport {
    let mut report = CoverReport::default();
    let mut covered: BTreeSet<Element> = BTreeSet::new();
    let mut seen = HashSet::new();

    for selection in solution.iter() {
        if !seen.insert(selection.name.as_str()) {
            report.repeated.push(selection.name.clone());
        }

        match input.get(&selection.name) {
            Some(original) => {
                if selection.elements != original.sorted() {
                    report.altered.push(selection.name.clone());
                }
            }
            None => report.unknown.push(selection.name.clone()),
        }

        let mut fresh = 0;
        for element in &selection.elements {
            if covered.insert(element.clone()) {
                fresh += 1;
            }
        }
        if fresh == 0 {
            report.stalled.push(selection.name.clone());
        }
    }

    report.missing = input.universe().difference(&covered).cloned().collect();
    report
}
