//! Clause extraction
//!
//! A clause starts at the root and at every word attached by a
//! clause-introducing relation. It owns its head plus every descendant word
//! reached without passing through another clause head. Punctuation is
//! traversed but never collected, so words below a punctuation token still
//! land in the clause of the nearest clause head above them.

use crate::taxonomy::{self, Role};
use crate::tree::{NodeId, Tree};
use serde::Serialize;

/// How a clause is combined with the rest of the sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ClauseKind {
    /// The clause headed by the sentence root
    Main,
    /// Introduced by `conj` or `parataxis`
    Coordinate,
    /// Introduced by any other clause relation
    Subordinate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clause {
    /// Token id of the clause head
    pub head: usize,
    /// Introducing relation, `root` for the main clause
    pub relation: String,
    pub kind: ClauseKind,
    /// Token id of the head's governor, `None` for the main clause
    pub governor: Option<usize>,
    /// Word token ids in ascending order
    pub ids: Vec<usize>,
    pub text: String,
}

impl Clause {
    /// Coordinate and subordinate clauses are combined clauses
    pub fn is_combined(&self) -> bool {
        self.kind != ClauseKind::Main
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Mark every node that starts a clause
///
/// Nodes are visited parent-first, so a conjunct can check whether its
/// governor already heads a clause.
pub fn clause_heads(tree: &Tree) -> Vec<bool> {
    let mut heads = vec![false; tree.len()];
    for node_id in tree.preorder() {
        heads[node_id] = starts_clause(tree, node_id, &heads);
    }
    heads
}

fn starts_clause(tree: &Tree, node_id: NodeId, heads: &[bool]) -> bool {
    let Some(parent) = tree.parent(node_id) else {
        return true;
    };
    let token = tree.token(node_id);
    if !token.is_word() {
        return false;
    }
    match taxonomy::role(&token.deprel) {
        role if role.always_introduces_clause() => true,
        Role::OpenComplement => taxonomy::is_verb(&token.upos),
        Role::Conjunct => taxonomy::is_verb(&token.upos) && heads[parent],
        _ => false,
    }
}

/// Collect the word ids governed by `head` without crossing a boundary node
pub(crate) fn collect_unit(tree: &Tree, head: NodeId, boundaries: &[bool]) -> Vec<usize> {
    let mut ids = Vec::new();
    if tree.token(head).is_word() {
        ids.push(tree.token(head).id);
    }
    let mut stack: Vec<NodeId> = tree.children(head).to_vec();
    while let Some(current) = stack.pop() {
        if boundaries[current] {
            continue;
        }
        let token = tree.token(current);
        if token.is_word() {
            ids.push(token.id);
        }
        stack.extend_from_slice(tree.children(current));
    }
    ids.sort_unstable();
    ids
}

/// Extract all clauses, ordered by head id
pub fn extract_clauses(tree: &Tree) -> Vec<Clause> {
    let heads = clause_heads(tree);
    (0..tree.len())
        .filter(|&node_id| heads[node_id])
        .filter_map(|node_id| {
            let ids = collect_unit(tree, node_id, &heads);
            if ids.is_empty() {
                return None;
            }
            let token = tree.token(node_id);
            let governor = tree.parent(node_id).map(|parent| tree.token(parent).id);
            let (relation, kind) = match governor {
                None => ("root".to_string(), ClauseKind::Main),
                Some(_) if taxonomy::role(&token.deprel).is_coordinating() => {
                    (token.deprel.clone(), ClauseKind::Coordinate)
                }
                Some(_) => (token.deprel.clone(), ClauseKind::Subordinate),
            };
            Some(Clause {
                head: token.id,
                relation,
                kind,
                governor,
                text: tree.render(&ids),
                ids,
            })
        })
        .collect()
}
