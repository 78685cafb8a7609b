//! T-unit extraction
//!
//! A T-unit is an independent clause with everything subordinate to it. The
//! root starts one; every coordinate clause attached directly to the root
//! starts another. Coordination deeper in the tree (between two subordinate
//! clauses, say) stays inside the T-unit that contains it.

use crate::clause::{Clause, ClauseKind, collect_unit};
use crate::tree::{NodeId, Tree};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TUnit {
    /// Token id of the independent clause head
    pub head: usize,
    /// Relation of the head, `root` for the first T-unit
    pub relation: String,
    /// Word token ids in ascending order
    pub ids: Vec<usize>,
    pub text: String,
}

impl TUnit {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Whether a clause starts its own T-unit besides the root's
fn is_independent(root_id: usize, clause: &Clause) -> bool {
    clause.kind == ClauseKind::Coordinate && clause.governor == Some(root_id)
}

/// Group clauses into T-units, ordered by head id
///
/// Together the T-units partition the sentence's words. The root starts a
/// T-unit even when it is not a word itself.
pub fn extract_tunits(tree: &Tree, clauses: &[Clause]) -> Vec<TUnit> {
    let root_id = tree.token(tree.root()).id;
    let mut starts: Vec<(NodeId, &str)> = vec![(tree.root(), "root")];
    starts.extend(
        clauses
            .iter()
            .filter(|clause| is_independent(root_id, clause))
            .filter_map(|clause| {
                tree.find(clause.head)
                    .map(|node_id| (node_id, clause.relation.as_str()))
            }),
    );

    let mut boundaries = vec![false; tree.len()];
    for &(node_id, _) in &starts {
        boundaries[node_id] = true;
    }

    let mut tunits: Vec<TUnit> = starts
        .into_iter()
        .map(|(node_id, relation)| {
            let ids = collect_unit(tree, node_id, &boundaries);
            TUnit {
                head: tree.token(node_id).id,
                relation: relation.to_string(),
                text: tree.render(&ids),
                ids,
            }
        })
        .filter(|tunit| !tunit.is_empty())
        .collect();
    tunits.sort_by_key(|tunit| tunit.head);
    tunits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::extract_clauses;
    use crate::tree::Token;

    fn tunit_texts(tree: &Tree) -> Vec<String> {
        let clauses = extract_clauses(tree);
        extract_tunits(tree, &clauses)
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_subordinate_clause_stays_in_tunit() {
        // "This is a text containing two sentences."
        let tree = Tree::build(&[
            Token::new(1, "This", "PRON", 4, "nsubj"),
            Token::new(2, "is", "AUX", 4, "cop"),
            Token::new(3, "a", "DET", 4, "det"),
            Token::new(4, "text", "NOUN", 0, "root"),
            Token::new(5, "containing", "VERB", 4, "acl"),
            Token::new(6, "two", "NUM", 7, "nummod"),
            Token::new(7, "sentences", "NOUN", 5, "obj"),
            Token::new(8, ".", "PUNCT", 4, "punct"),
        ])
        .unwrap();

        assert_eq!(
            tunit_texts(&tree),
            vec!["This is a text containing two sentences"]
        );
    }

    #[test]
    fn test_root_coordination_splits() {
        // "I came because you called and I stayed"
        let tree = Tree::build(&[
            Token::new(1, "I", "PRON", 2, "nsubj"),
            Token::new(2, "came", "VERB", 0, "root"),
            Token::new(3, "because", "SCONJ", 5, "mark"),
            Token::new(4, "you", "PRON", 5, "nsubj"),
            Token::new(5, "called", "VERB", 2, "advcl"),
            Token::new(6, "and", "CCONJ", 9, "cc"),
            Token::new(7, "I", "PRON", 9, "nsubj"),
            Token::new(8, "then", "ADV", 9, "advmod"),
            Token::new(9, "stayed", "VERB", 2, "conj"),
        ])
        .unwrap();

        assert_eq!(
            tunit_texts(&tree),
            vec!["I came because you called", "and I then stayed"]
        );
    }

    #[test]
    fn test_parataxis_splits() {
        // "Stop , he said"
        let tree = Tree::build(&[
            Token::new(1, "Stop", "VERB", 0, "root"),
            Token::new(2, ",", "PUNCT", 4, "punct"),
            Token::new(3, "he", "PRON", 4, "nsubj"),
            Token::new(4, "said", "VERB", 1, "parataxis"),
        ])
        .unwrap();

        assert_eq!(tunit_texts(&tree), vec!["Stop", "he said"]);
    }

    #[test]
    fn test_embedded_coordination_does_not_split() {
        // "I know that she sang and he danced"
        let tree = Tree::build(&[
            Token::new(1, "I", "PRON", 2, "nsubj"),
            Token::new(2, "know", "VERB", 0, "root"),
            Token::new(3, "that", "SCONJ", 5, "mark"),
            Token::new(4, "she", "PRON", 5, "nsubj"),
            Token::new(5, "sang", "VERB", 2, "ccomp"),
            Token::new(6, "and", "CCONJ", 8, "cc"),
            Token::new(7, "he", "PRON", 8, "nsubj"),
            Token::new(8, "danced", "VERB", 5, "conj"),
        ])
        .unwrap();
        let clauses = extract_clauses(&tree);

        assert_eq!(clauses.len(), 3);
        assert_eq!(clauses[2].kind, ClauseKind::Coordinate);
        assert_eq!(
            tunit_texts(&tree),
            vec!["I know that she sang and he danced"]
        );
    }

    #[test]
    fn test_partition() {
        let tree = Tree::build(&[
            Token::new(1, "I", "PRON", 2, "nsubj"),
            Token::new(2, "came", "VERB", 0, "root"),
            Token::new(3, "and", "CCONJ", 5, "cc"),
            Token::new(4, "saw", "VERB", 5, "xcomp"),
            Token::new(5, "left", "VERB", 2, "conj"),
            Token::new(6, ".", "PUNCT", 2, "punct"),
        ])
        .unwrap();
        let clauses = extract_clauses(&tree);
        let tunits = extract_tunits(&tree, &clauses);

        let mut ids: Vec<usize> = tunits.iter().flat_map(|t| t.ids.clone()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(tunits.len(), 2);
    }

    #[test]
    fn test_punctuation_root_keeps_subordinate_words() {
        // "- because it rained" with the dash as root
        let tree = Tree::build(&[
            Token::new(1, "-", "PUNCT", 0, "root"),
            Token::new(2, "because", "SCONJ", 4, "mark"),
            Token::new(3, "it", "PRON", 4, "nsubj"),
            Token::new(4, "rained", "VERB", 1, "advcl"),
        ])
        .unwrap();
        let clauses = extract_clauses(&tree);

        assert_eq!(clauses.len(), 1);
        assert_eq!(tunit_texts(&tree), vec!["because it rained"]);
    }
}
