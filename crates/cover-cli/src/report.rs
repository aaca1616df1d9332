//! Console and file output for solutions and instances.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use cover_ir::parse::to_json_indented;
use cover_ir::types::Solution;

/// Indentation of written solutions.
pub const SOLUTION_INDENT: usize = 4;
/// Indentation of generated instances.
pub const INSTANCE_INDENT: usize = 2;

/// One `name: [elements]` line per selection, in selection order.
pub fn render_solution(solution: &Solution) -> String {
    let mut text = String::new();
    for selection in solution.iter() {
        let elements: Vec<String> = selection.elements.iter().map(ToString::to_string).collect();
        // Writing to a String cannot fail.
        let _ = writeln!(text, "{}: [{}]", selection.name, elements.join(", "));
    }
    text
}

/// Serialize `value` to `path` as indented JSON.
pub fn write_json<T: Serialize>(path: &Path, value: &T, indent: usize) -> Result<()> {
    let json = to_json_indented(value, indent)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cover_ir::types::{Element, Selection};

    #[test]
    fn test_render_solution_lines() {
        let solution = Solution {
            selections: vec![
                Selection {
                    name: "B".into(),
                    elements: vec![Element::Int(3), Element::Int(4)],
                    gain: 2,
                },
                Selection {
                    name: "A".into(),
                    elements: vec![Element::Int(1), Element::Str("x".into())],
                    gain: 2,
                },
            ],
        };
        assert_eq!(render_solution(&solution), "B: [3, 4]\nA: [1, \"x\"]\n");
    }

    #[test]
    fn test_render_empty_solution() {
        assert_eq!(render_solution(&Solution::new()), "");
    }
}
