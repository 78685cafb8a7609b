//! Scalar and sequence metrics over trees and unit lists
//!
//! Everything here accumulates at full precision; rounding happens only
//! when a report is rendered.

use crate::tree::Tree;
use rustc_hash::FxHashSet;
use serde::Serialize;

/// Distance between each word and its governor, in token positions
///
/// The root's governor is the virtual node 0, so its distance is its own id.
pub fn dependency_distances(tree: &Tree) -> Vec<usize> {
    tree.nodes()
        .iter()
        .map(|node| &node.token)
        .filter(|token| token.is_word())
        .map(|token| token.id.abs_diff(token.head))
        .collect()
}

/// Word nodes and the word nodes that govern no other word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NodeCounts {
    pub nodes: usize,
    pub terminals: usize,
}

impl NodeCounts {
    pub fn of(tree: &Tree) -> Self {
        let words = tree.nodes().iter().map(|node| &node.token).filter(|t| t.is_word());
        let governors: FxHashSet<usize> = words.clone().map(|token| token.head).collect();
        let nodes = words.clone().count();
        let terminals = words.filter(|token| !governors.contains(&token.id)).count();
        Self { nodes, terminals }
    }

    pub fn ratio(&self) -> f64 {
        ratio(self.nodes, self.terminals)
    }
}

impl std::ops::AddAssign for NodeCounts {
    fn add_assign(&mut self, other: Self) {
        self.nodes += other.nodes;
        self.terminals += other.terminals;
    }
}

/// Levenshtein distance with unit costs for insertion, deletion and substitution
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];
    for (i, x) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, y) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(x != y);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

/// Mean Levenshtein distance over all unordered pairs of sequences
///
/// O(S² · L²) for S sequences of length L. Undefined for fewer than two
/// sequences.
pub fn mean_pairwise_distance<T: PartialEq>(sequences: &[&[T]]) -> Option<f64> {
    if sequences.len() < 2 {
        return None;
    }
    let mut total = 0usize;
    let mut pairs = 0usize;
    for (i, a) in sequences.iter().enumerate() {
        for b in &sequences[i + 1..] {
            total += levenshtein::<T>(a, b);
            pairs += 1;
        }
    }
    Some(total as f64 / pairs as f64)
}

/// Count ratio; a zero denominator yields 0.0
pub fn ratio(numer: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        numer as f64 / denom as f64
    }
}

/// Percentage of `part` in `total`; a zero total yields 0.0
pub fn percentage(part: usize, total: usize) -> f64 {
    100.0 * ratio(part, total)
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Median, averaging the two middle values for even counts
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Mean, median and extrema of one per-sentence metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    pub fn of(values: &[f64]) -> Option<Self> {
        Some(Self {
            mean: mean(values)?,
            median: median(values)?,
            min: values.iter().copied().reduce(f64::min)?,
            max: values.iter().copied().reduce(f64::max)?,
        })
    }

    pub fn of_counts(values: &[usize]) -> Option<Self> {
        let values: Vec<f64> = values.iter().map(|&v| v as f64).collect();
        Self::of(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Token;

    fn sample() -> Tree {
        Tree::build(&[
            Token::new(1, "This", "PRON", 4, "nsubj"),
            Token::new(2, "is", "AUX", 4, "cop"),
            Token::new(3, "a", "DET", 4, "det"),
            Token::new(4, "text", "NOUN", 0, "root"),
            Token::new(5, "containing", "VERB", 4, "acl"),
            Token::new(6, "two", "NUM", 7, "nummod"),
            Token::new(7, "sentences", "NOUN", 5, "obj"),
            Token::new(8, ".", "PUNCT", 4, "punct"),
        ])
        .unwrap()
    }

    #[test]
    fn test_dependency_distances() {
        let distances = dependency_distances(&sample());
        assert_eq!(distances, vec![3, 2, 1, 4, 1, 1, 2]);
        assert!(distances.iter().all(|&d| d >= 1));
    }

    #[test]
    fn test_node_counts() {
        let counts = NodeCounts::of(&sample());
        assert_eq!(counts, NodeCounts { nodes: 7, terminals: 4 });
        assert_eq!(counts.ratio(), 1.75);
    }

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein(&["a", "b", "c"], &["a", "b", "c"]), 0);
        assert_eq!(levenshtein::<&str>(&[], &["a", "b"]), 2);
        assert_eq!(levenshtein(&["a", "b"], &[]), 2);
        assert_eq!(levenshtein(&["k", "i", "t"], &["s", "i", "t", "s"]), 2);
        assert_eq!(
            levenshtein(
                &["PRON", "AUX", "DET", "NOUN", "VERB", "NUM", "NOUN"],
                &["PRON", "AUX", "DET", "ADJ", "NOUN"]
            ),
            3
        );
    }

    #[test]
    fn test_levenshtein_symmetry() {
        let a = ["x", "y", "z", "y"];
        let b = ["y", "x", "z"];
        assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    #[test]
    fn test_mean_pairwise_distance() {
        assert_eq!(mean_pairwise_distance::<&str>(&[]), None);
        assert_eq!(mean_pairwise_distance(&[&["a"][..]]), None);
        let sequences = vec![&["a"][..], &["b"][..], &["a", "b"][..]];
        // a-b: 1, a-ab: 1, b-ab: 1
        assert_eq!(mean_pairwise_distance(&sequences), Some(1.0));
    }

    #[test]
    fn test_ratio_safety() {
        assert_eq!(ratio(3, 0), 0.0);
        assert_eq!(ratio(0, 0), 0.0);
        assert_eq!(ratio(1, 4), 0.25);
        assert!((percentage(1, 3) - 33.333).abs() < 1e-3);
        assert_eq!(percentage(5, 0), 0.0);
    }

    #[test]
    fn test_summary() {
        let summary = Summary::of_counts(&[4, 2]).unwrap();
        assert_eq!(summary.mean, 3.0);
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.max, 4.0);

        let odd = Summary::of(&[5.0, 1.0, 3.0]).unwrap();
        assert_eq!(odd.median, 3.0);
        assert!(Summary::of(&[]).is_none());
    }
}
