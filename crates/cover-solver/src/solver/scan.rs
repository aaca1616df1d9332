//! Per-step selection.
//!
//! A step is two reductions over the remaining subsets, in scan order:
//! 1. [`best_intersection`] finds the largest intersection with the
//!    uncovered universe, the first index reaching it, and every index tied
//!    with it.
//! 2. [`largest_candidate`] picks among those ties by total subset size.
//!
//! Intersection sizes can be computed in parallel ([`intersection_sizes`]);
//! both reductions always run sequentially over stable indices.

use std::collections::BTreeSet;

use rayon::prelude::*;

use cover_ir::types::{Element, Subset};

use super::TieBreak;

/// Outcome of the first reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan {
    /// Largest number of uncovered elements any subset would cover.
    pub opt_size: usize,
    /// Index of the first subset reaching `opt_size`.
    pub first: usize,
    /// Every index reaching `opt_size`, ascending.
    pub candidates: Vec<usize>,
}

/// Number of elements of `subset` still in `universe`.
pub fn intersect_size(universe: &BTreeSet<Element>, subset: &Subset) -> usize {
    subset
        .elements
        .iter()
        .filter(|e| universe.contains(*e))
        .count()
}

/// Intersection size for every subset, indexed like `subsets`.
pub fn intersection_sizes(
    universe: &BTreeSet<Element>,
    subsets: &[&Subset],
    parallel: bool,
) -> Vec<usize> {
    if parallel {
        // Indexed collect keeps scan order.
        subsets
            .par_iter()
            .map(|subset| intersect_size(universe, subset))
            .collect()
    } else {
        subsets
            .iter()
            .map(|subset| intersect_size(universe, subset))
            .collect()
    }
}

/// Track the running maximum and the indices tied with it.
///
/// A strictly larger size resets the candidates; an equal size joins them.
/// Returns `None` for an empty scan.
pub fn best_intersection(sizes: &[usize]) -> Option<Scan> {
    let mut opt_size = 0;
    let mut first = 0;
    let mut candidates = Vec::new();

    for (idx, &size) in sizes.iter().enumerate() {
        if candidates.is_empty() || size > opt_size {
            opt_size = size;
            first = idx;
            candidates.clear();
            candidates.push(idx);
        } else if size == opt_size {
            candidates.push(idx);
        }
    }

    if candidates.is_empty() {
        return None;
    }
    Some(Scan {
        opt_size,
        first,
        candidates,
    })
}

/// Among `candidates`, the index of the subset with the most elements.
///
/// Only a strictly larger subset replaces the current pick, so the earliest
/// candidate wins equal sizes.
pub fn largest_candidate(candidates: &[usize], subsets: &[&Subset]) -> Option<usize> {
    let mut biggest: Option<(usize, usize)> = None;

    for &idx in candidates {
        let len = subsets[idx].len();
        match biggest {
            Some((_, size)) if len <= size => {}
            _ => biggest = Some((idx, len)),
        }
    }

    biggest.map(|(idx, _)| idx)
}

/// Resolve a scan to the winning index under `tie_break`.
pub fn pick(scan: &Scan, subsets: &[&Subset], tie_break: TieBreak) -> usize {
    match tie_break {
        TieBreak::FirstFound => scan.first,
        TieBreak::LargestSubset => {
            largest_candidate(&scan.candidates, subsets).unwrap_or(scan.first)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe(items: &[i64]) -> BTreeSet<Element> {
        items.iter().copied().map(Element::Int).collect()
    }

    #[test]
    fn test_intersect_size_counts_uncovered_only() {
        let subset = Subset::new("A", [1, 2, 3, 9]);
        assert_eq!(intersect_size(&universe(&[2, 3, 4]), &subset), 2);
        assert_eq!(intersect_size(&universe(&[]), &subset), 0);
    }

    #[test]
    fn test_best_intersection_resets_on_strictly_greater() {
        let scan = best_intersection(&[1, 3, 2, 3, 0, 3]).unwrap();
        assert_eq!(scan.opt_size, 3);
        assert_eq!(scan.first, 1);
        assert_eq!(scan.candidates, vec![1, 3, 5]);
    }

    #[test]
    fn test_best_intersection_all_zero_ties() {
        let scan = best_intersection(&[0, 0, 0]).unwrap();
        assert_eq!(scan.opt_size, 0);
        assert_eq!(scan.first, 0);
        assert_eq!(scan.candidates, vec![0, 1, 2]);
    }

    #[test]
    fn test_best_intersection_empty() {
        assert_eq!(best_intersection(&[]), None);
    }

    #[test]
    fn test_largest_candidate_prefers_total_size() {
        let a = Subset::new("A", [1]);
        let b = Subset::new("B", [1, 2, 3]);
        let c = Subset::new("C", [4, 5, 6]);
        let subsets = vec![&a, &b, &c];
        // B and C are equally large: the earlier one wins.
        assert_eq!(largest_candidate(&[0, 1, 2], &subsets), Some(1));
        assert_eq!(largest_candidate(&[0, 2], &subsets), Some(2));
        assert_eq!(largest_candidate(&[], &subsets), None);
    }

    #[test]
    fn test_largest_candidate_accepts_empty_subsets() {
        let a = Subset::new("A", Vec::<i64>::new());
        let b = Subset::new("B", Vec::<i64>::new());
        let subsets = vec![&a, &b];
        assert_eq!(largest_candidate(&[0, 1], &subsets), Some(0));
    }

    #[test]
    fn test_parallel_sizes_match_sequential() {
        let owned: Vec<Subset> = (0..64)
            .map(|i| Subset::new(format!("S{i}"), (i..i + (i % 7) + 1).collect::<Vec<i64>>()))
            .collect();
        let subsets: Vec<&Subset> = owned.iter().collect();
        let u = universe(&(0..40).collect::<Vec<i64>>());
        assert_eq!(
            intersection_sizes(&u, &subsets, true),
            intersection_sizes(&u, &subsets, false)
        );
    }

    #[test]
    fn test_pick_respects_tie_break() {
        let b = Subset::new("B", [3, 4]);
        let c = Subset::new("C", [5, 6, 7]);
        let subsets = vec![&b, &c];
        let scan = best_intersection(&[1, 1]).unwrap();
        assert_eq!(pick(&scan, &subsets, TieBreak::FirstFound), 0);
        assert_eq!(pick(&scan, &subsets, TieBreak::LargestSubset), 1);
    }
}
