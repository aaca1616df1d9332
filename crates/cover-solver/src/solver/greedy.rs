//! The greedy cover loop.
//!
//! Each step takes the remaining subset that covers the most still-uncovered
//! elements, moves it into the solution, and subtracts it from the universe.
//! This gives the classic `ln n + 1` approximation; it is not optimal.

use std::collections::BTreeSet;

use tracing::{debug, info};

use cover_ir::types::{Element, Selection, Solution, Subset, SubsetCollection};

use super::scan::{best_intersection, intersection_sizes, pick};
use super::{SolveError, SolverConfig};

/// Compute a greedy cover of the union of `collection`.
///
/// Subsets are scanned in collection order, which decides every tie.
/// The result lists each chosen subset's elements in ascending order,
/// in the order the subsets were chosen.
pub fn solve(collection: &SubsetCollection, config: &SolverConfig) -> Result<Solution, SolveError> {
    if collection.is_empty() {
        return Err(SolveError::EmptyInput);
    }

    let mut universe: BTreeSet<Element> = collection.universe();
    let mut remaining: Vec<&Subset> = collection.iter().collect();
    let mut solution = Solution::new();

    info!(
        subsets = remaining.len(),
        universe = universe.len(),
        tie_break = ?config.tie_break,
        "starting greedy cover"
    );

    while !universe.is_empty() {
        let sizes = intersection_sizes(&universe, &remaining, config.parallel_scan);
        let scan = match best_intersection(&sizes) {
            Some(scan) if scan.opt_size > 0 => scan,
            _ => {
                return Err(SolveError::NoProgress {
                    uncovered: universe.len(),
                })
            }
        };

        let winner = pick(&scan, &remaining, config.tie_break);
        let subset = remaining.remove(winner);
        for element in &subset.elements {
            universe.remove(element);
        }

        debug!(
            step = solution.len() + 1,
            subset = %subset.name,
            gain = scan.opt_size,
            tied = scan.candidates.len(),
            uncovered = universe.len(),
            "selected subset"
        );

        solution.push(Selection {
            name: subset.name.clone(),
            elements: subset.sorted(),
            gain: scan.opt_size,
        });
    }

    info!(selected = solution.len(), "greedy cover complete");
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::TieBreak;

    fn collection(pairs: &[(&str, &[i64])]) -> SubsetCollection {
        SubsetCollection::new(
            pairs
                .iter()
                .map(|(name, items)| Subset::new(*name, items.iter().copied()))
                .collect(),
        )
    }

    fn config(tie_break: TieBreak) -> SolverConfig {
        SolverConfig {
            tie_break,
            parallel_scan: false,
        }
    }

    #[test]
    fn test_rejects_empty_collection() {
        let result = solve(&SubsetCollection::default(), &SolverConfig::default());
        assert_eq!(result, Err(SolveError::EmptyInput));
    }

    #[test]
    fn test_single_subset() {
        let input = collection(&[("only", &[3, 1, 2])]);
        let solution = solve(&input, &SolverConfig::default()).unwrap();
        assert_eq!(solution.names(), vec!["only"]);
        assert_eq!(solution.selections[0].gain, 3);
    }

    #[test]
    fn test_empty_subsets_are_never_selected() {
        let input = collection(&[("void", &[]), ("A", &[1, 2]), ("nil", &[]), ("B", &[3])]);
        for tie_break in [TieBreak::FirstFound, TieBreak::LargestSubset] {
            let solution = solve(&input, &config(tie_break)).unwrap();
            assert_eq!(solution.names(), vec!["A", "B"]);
        }
    }

    #[test]
    fn test_all_empty_subsets_yield_empty_solution() {
        let input = collection(&[("void", &[]), ("nil", &[])]);
        let solution = solve(&input, &SolverConfig::default()).unwrap();
        assert!(solution.is_empty());
    }

    #[test]
    fn test_redundant_subsets_skipped() {
        let input = collection(&[
            ("small", &[1]),
            ("big", &[1, 2, 3, 4]),
            ("inner", &[2, 3]),
            ("tail", &[5]),
        ]);
        let solution = solve(&input, &SolverConfig::default()).unwrap();
        assert_eq!(solution.names(), vec!["big", "tail"]);
        let gains: Vec<_> = solution.iter().map(|s| s.gain).collect();
        assert_eq!(gains, vec![4, 1]);
    }

    #[test]
    fn test_gain_counts_only_new_elements() {
        let input = collection(&[("A", &[1, 2, 3]), ("B", &[3, 4])]);
        let solution = solve(&input, &SolverConfig::default()).unwrap();
        assert_eq!(solution.selections[1].name, "B");
        assert_eq!(solution.selections[1].gain, 1);
        // The full original subset is reported, not just the new part.
        assert_eq!(
            solution.selections[1].elements,
            vec![Element::Int(3), Element::Int(4)]
        );
    }
}
