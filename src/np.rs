//! Noun phrase extraction
//!
//! Every nominal word not already inside another noun phrase heads one.
//! The phrase grows through NP-internal relations only (determiners,
//! adjectival, nominal and numeric modifiers, appositions, case markers);
//! clausal dependents are left to the clause extractor. The tree is walked
//! top-down, so an outer phrase claims its nested nominals before they can
//! be counted a second time.

use crate::config::NpComplexityRule;
use crate::taxonomy;
use crate::tree::{NodeId, Tree};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NounPhrase {
    /// Token id of the nominal head
    pub head: usize,
    /// Relation of the head to its governor
    pub relation: String,
    /// Word token ids in ascending order
    pub ids: Vec<usize>,
    pub complex: bool,
    pub text: String,
}

impl NounPhrase {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

fn np_members(tree: &Tree, head: NodeId) -> Vec<NodeId> {
    let mut members = vec![head];
    let mut stack = vec![head];
    while let Some(current) = stack.pop() {
        for &child in tree.children(current) {
            let token = tree.token(child);
            if token.is_word() && taxonomy::role(&token.deprel).is_np_internal() {
                members.push(child);
                stack.push(child);
            }
        }
    }
    members
}

fn is_complex(tree: &Tree, members: &[NodeId], rule: &NpComplexityRule) -> bool {
    if members.len() - 1 >= rule.min_dependents {
        return true;
    }
    rule.modifier_trigger
        && members.iter().any(|&member| {
            tree.children(member)
                .iter()
                .any(|&child| taxonomy::role(&tree.token(child).deprel).triggers_complex_np())
        })
}

/// Extract noun phrases, ordered by head id
pub fn extract_nps(tree: &Tree, rule: &NpComplexityRule) -> Vec<NounPhrase> {
    let mut covered = vec![false; tree.len()];
    let mut nps = Vec::new();

    for node_id in tree.preorder() {
        let token = tree.token(node_id);
        if covered[node_id] || !token.is_word() || !taxonomy::is_nominal(&token.upos) {
            continue;
        }
        let members = np_members(tree, node_id);
        for &member in &members {
            covered[member] = true;
        }

        let mut ids: Vec<usize> = members.iter().map(|&m| tree.token(m).id).collect();
        ids.sort_unstable();
        nps.push(NounPhrase {
            head: token.id,
            relation: token.deprel.clone(),
            complex: is_complex(tree, &members, rule),
            text: tree.render(&ids),
            ids,
        });
    }

    nps.sort_by_key(|np| np.head);
    nps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Token;

    fn summary(nps: &[NounPhrase]) -> Vec<(&str, bool)> {
        nps.iter().map(|np| (np.text.as_str(), np.complex)).collect()
    }

    #[test]
    fn test_simple_nps() {
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
        let nps = extract_nps(&tree, &NpComplexityRule::default());

        assert_eq!(
            summary(&nps),
            vec![("This", false), ("a text", false), ("two sentences", false)]
        );
        assert_eq!(nps[1].relation, "root");
        assert_eq!(nps[2].ids, vec![6, 7]);
    }

    #[test]
    fn test_two_dependents_make_complex() {
        // "the second sentence"
        let tree = Tree::build(&[
            Token::new(1, "the", "DET", 3, "det"),
            Token::new(2, "second", "ADJ", 3, "amod"),
            Token::new(3, "sentence", "NOUN", 0, "root"),
        ])
        .unwrap();
        let nps = extract_nps(&tree, &NpComplexityRule::default());

        assert_eq!(summary(&nps), vec![("the second sentence", true)]);
    }

    #[test]
    fn test_nested_nominal_counted_once() {
        // "John 's old book"
        let tree = Tree::build(&[
            Token::new(1, "John", "PROPN", 4, "nmod:poss"),
            Token::new(2, "'s", "PART", 1, "case"),
            Token::new(3, "old", "ADJ", 4, "amod"),
            Token::new(4, "book", "NOUN", 0, "root"),
        ])
        .unwrap();
        let nps = extract_nps(&tree, &NpComplexityRule::default());

        assert_eq!(summary(&nps), vec![("John 's old book", true)]);
    }

    #[test]
    fn test_relative_clause_not_in_span() {
        // "the man who left"
        let tree = Tree::build(&[
            Token::new(1, "the", "DET", 2, "det"),
            Token::new(2, "man", "NOUN", 0, "root"),
            Token::new(3, "who", "PRON", 4, "nsubj"),
            Token::new(4, "left", "VERB", 2, "acl:relcl"),
        ])
        .unwrap();
        let nps = extract_nps(&tree, &NpComplexityRule::default());

        assert_eq!(summary(&nps), vec![("the man", true), ("who", false)]);
    }

    #[test]
    fn test_rule_is_configurable() {
        let tree = Tree::build(&[
            Token::new(1, "a", "DET", 2, "det"),
            Token::new(2, "text", "NOUN", 0, "root"),
        ])
        .unwrap();
        let strict = NpComplexityRule {
            min_dependents: 1,
            modifier_trigger: false,
        };

        assert!(!extract_nps(&tree, &NpComplexityRule::default())[0].complex);
        assert!(extract_nps(&tree, &strict)[0].complex);
    }

    #[test]
    fn test_modifier_trigger_can_be_disabled() {
        // "old books"
        let tree = Tree::build(&[
            Token::new(1, "old", "ADJ", 2, "amod"),
            Token::new(2, "books", "NOUN", 0, "root"),
        ])
        .unwrap();
        let lenient = NpComplexityRule {
            min_dependents: 2,
            modifier_trigger: false,
        };

        assert!(extract_nps(&tree, &NpComplexityRule::default())[0].complex);
        assert!(!extract_nps(&tree, &lenient)[0].complex);
    }
}
