//! Dependency tree data structures
//!
//! Nodes live in an arena ordered by token id. Parent and child links are
//! arena indices, so a tree never holds references into itself and can be
//! moved or shared between threads freely.

use crate::error::MalformedTreeError;
use crate::taxonomy;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::collections::{BTreeMap, VecDeque};
use std::fmt::Write as _;

/// Index of a node in the tree arena
pub type NodeId = usize;

/// Number of spaces per depth level in the tree dump
const DUMP_INDENT: usize = 4;

/// Key/value pairs from a FEATS or MISC column, in annotation order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Features(Vec<(String, String)>);

impl Features {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// One annotated token (a single CoNLL-U word line)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// 1-based position in the sentence
    pub id: usize,
    pub form: String,
    pub lemma: String,
    pub upos: String,
    pub xpos: Option<String>,
    pub feats: Features,
    /// Governor id, 0 for the sentence root
    pub head: usize,
    pub deprel: String,
    pub deps: Option<String>,
    pub misc: Features,
}

impl Token {
    /// Create a token with the fields the metrics need; lemma defaults to form
    pub fn new(id: usize, form: &str, upos: &str, head: usize, deprel: &str) -> Self {
        Self {
            id,
            form: form.to_string(),
            lemma: form.to_string(),
            upos: upos.to_string(),
            xpos: None,
            feats: Features::new(),
            head,
            deprel: deprel.to_string(),
            deps: None,
            misc: Features::new(),
        }
    }

    pub fn with_lemma(mut self, lemma: &str) -> Self {
        self.lemma = lemma.to_string();
        self
    }

    pub fn with_xpos(mut self, xpos: &str) -> Self {
        self.xpos = Some(xpos.to_string());
        self
    }

    /// Words are tokens that are neither punctuation nor symbols
    pub fn is_word(&self) -> bool {
        taxonomy::is_word(&self.upos)
    }

    pub fn is_root(&self) -> bool {
        self.head == 0
    }
}

/// An annotated sentence as delivered by the reader
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Sentence {
    pub tokens: Vec<Token>,
    pub sentence_text: Option<String>,
    pub metadata: BTreeMap<String, String>,
}

impl Sentence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            ..Self::default()
        }
    }

    pub fn with_metadata(
        tokens: Vec<Token>,
        sentence_text: Option<String>,
        metadata: BTreeMap<String, String>,
    ) -> Self {
        Self {
            tokens,
            sentence_text,
            metadata,
        }
    }

    /// The `# text` comment, or the forms joined according to `SpaceAfter=No`
    pub fn text(&self) -> String {
        if let Some(text) = &self.sentence_text {
            return text.clone();
        }
        let mut text = String::new();
        for token in &self.tokens {
            text.push_str(&token.form);
            if token.misc.get("SpaceAfter") != Some("No") {
                text.push(' ');
            }
        }
        text.truncate(text.trim_end().len());
        text
    }

    /// Build the dependency tree for this sentence
    pub fn tree(&self) -> Result<Tree, MalformedTreeError> {
        Tree::build(&self.tokens)
    }
}

/// A node in a dependency tree
#[derive(Debug, Clone)]
pub struct Node {
    pub token: Token,
    pub parent: Option<NodeId>,
    /// Children in ascending token id order
    pub children: Vec<NodeId>,
    /// 1 for the root, parent depth + 1 otherwise
    pub depth: usize,
}

/// A dependency tree (sentence)
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    /// Build a tree from a flat token sequence, linking each token to its head
    ///
    /// Fails if there is not exactly one root, if a head points at a missing
    /// id, or if some token's head chain never reaches the root.
    pub fn build(tokens: &[Token]) -> Result<Self, MalformedTreeError> {
        if tokens.is_empty() {
            return Err(MalformedTreeError::Empty);
        }

        let mut sorted: Vec<&Token> = tokens.iter().collect();
        sorted.sort_by_key(|token| token.id);

        let mut index: FxHashMap<usize, NodeId> = FxHashMap::default();
        for (node_id, token) in sorted.iter().enumerate() {
            if token.id == 0 {
                return Err(MalformedTreeError::InvalidId);
            }
            if index.insert(token.id, node_id).is_some() {
                return Err(MalformedTreeError::DuplicateId { id: token.id });
            }
        }

        let mut nodes: Vec<Node> = sorted
            .into_iter()
            .map(|token| Node {
                token: token.clone(),
                parent: None,
                children: Vec::new(),
                depth: 0,
            })
            .collect();

        let mut root: Option<NodeId> = None;
        for node_id in 0..nodes.len() {
            let (id, head) = (nodes[node_id].token.id, nodes[node_id].token.head);
            if head == 0 {
                if let Some(first) = root {
                    return Err(MalformedTreeError::MultipleRoots {
                        first: nodes[first].token.id,
                        second: id,
                    });
                }
                root = Some(node_id);
                continue;
            }
            let parent = *index
                .get(&head)
                .ok_or(MalformedTreeError::DanglingHead { id, head })?;
            nodes[node_id].parent = Some(parent);
            nodes[parent].children.push(node_id);
        }
        let root = root.ok_or(MalformedTreeError::NoRoot)?;

        // Breadth-first from the root; anything left unvisited hangs off a cycle
        nodes[root].depth = 1;
        let mut reached = 1;
        let mut queue = VecDeque::from([root]);
        while let Some(current) = queue.pop_front() {
            let depth = nodes[current].depth + 1;
            for i in 0..nodes[current].children.len() {
                let child = nodes[current].children[i];
                nodes[child].depth = depth;
                reached += 1;
                queue.push_back(child);
            }
        }
        if reached < nodes.len() {
            let id = nodes
                .iter()
                .find(|node| node.depth == 0)
                .map_or(0, |node| node.token.id);
            return Err(MalformedTreeError::Cycle { id });
        }

        Ok(Self { nodes, root })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, node_id: NodeId) -> &Node {
        &self.nodes[node_id]
    }

    pub fn token(&self, node_id: NodeId) -> &Token {
        &self.nodes[node_id].token
    }

    pub fn children(&self, node_id: NodeId) -> &[NodeId] {
        &self.nodes[node_id].children
    }

    pub fn parent(&self, node_id: NodeId) -> Option<NodeId> {
        self.nodes[node_id].parent
    }

    pub fn depth(&self, node_id: NodeId) -> usize {
        self.nodes[node_id].depth
    }

    /// Find the arena index of a token id
    pub fn find(&self, token_id: usize) -> Option<NodeId> {
        self.nodes
            .binary_search_by_key(&token_id, |node| node.token.id)
            .ok()
    }

    /// Longest root-to-leaf path, counted in nodes
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|node| node.depth).max().unwrap_or(0)
    }

    /// Depth-first pre-order, children visited in ascending id order
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(current) = stack.pop() {
            order.push(current);
            stack.extend(self.nodes[current].children.iter().rev());
        }
        order
    }

    /// Forms of the given token ids joined with single spaces
    pub fn render(&self, ids: &[usize]) -> String {
        ids.iter()
            .filter_map(|&id| self.find(id))
            .map(|node_id| self.nodes[node_id].token.form.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Indented dump of the tree, one token per line
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for node_id in self.preorder() {
            let node = &self.nodes[node_id];
            let token = &node.token;
            let _ = writeln!(
                out,
                "{:indent$}(deprel:{}) form:{} lemma:{} upos:{} [{}]",
                "",
                token.deprel,
                token.form,
                token.lemma,
                token.upos,
                token.id,
                indent = (node.depth - 1) * DUMP_INDENT,
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// "The big dog runs."
    fn dog_runs() -> Vec<Token> {
        vec![
            Token::new(1, "The", "DET", 3, "det"),
            Token::new(2, "big", "ADJ", 3, "amod"),
            Token::new(3, "dog", "NOUN", 4, "nsubj"),
            Token::new(4, "runs", "VERB", 0, "root").with_lemma("run"),
            Token::new(5, ".", "PUNCT", 4, "punct"),
        ]
    }

    #[test]
    fn test_tree_creation() {
        let tree = Tree::build(&dog_runs()).unwrap();

        assert_eq!(tree.len(), 5);
        assert_eq!(tree.token(tree.root()).form, "runs");
        assert_eq!(tree.children(tree.root()), &[2, 4]);
        assert_eq!(tree.parent(0), Some(2));
        assert_eq!(tree.find(3), Some(2));
        assert_eq!(tree.find(9), None);
    }

    #[test]
    fn test_depths() {
        let tree = Tree::build(&dog_runs()).unwrap();

        assert_eq!(tree.depth(tree.root()), 1);
        assert_eq!(tree.depth(2), 2);
        assert_eq!(tree.depth(0), 3);
        assert_eq!(tree.max_depth(), 3);
        for node_id in 0..tree.len() {
            if let Some(parent) = tree.parent(node_id) {
                assert_eq!(tree.depth(node_id), tree.depth(parent) + 1);
            }
        }
    }

    #[test]
    fn test_single_token_depth() {
        let tree = Tree::build(&[Token::new(1, "Yes", "INTJ", 0, "root")]).unwrap();
        assert_eq!(tree.max_depth(), 1);
    }

    #[test]
    fn test_unsorted_input() {
        let mut tokens = dog_runs();
        tokens.reverse();
        let tree = Tree::build(&tokens).unwrap();

        assert_eq!(tree.token(0).id, 1);
        assert_eq!(tree.children(2), &[0, 1]);
    }

    #[test]
    fn test_preorder() {
        let tree = Tree::build(&dog_runs()).unwrap();
        let ids: Vec<usize> = tree.preorder().iter().map(|&n| tree.token(n).id).collect();
        assert_eq!(ids, vec![4, 3, 1, 2, 5]);
    }

    #[test]
    fn test_no_root() {
        let tokens = vec![
            Token::new(1, "a", "X", 2, "dep"),
            Token::new(2, "b", "X", 1, "dep"),
        ];
        assert_eq!(Tree::build(&tokens).unwrap_err(), MalformedTreeError::NoRoot);
    }

    #[test]
    fn test_multiple_roots() {
        let tokens = vec![
            Token::new(1, "a", "X", 0, "root"),
            Token::new(2, "b", "X", 0, "root"),
        ];
        assert_eq!(
            Tree::build(&tokens).unwrap_err(),
            MalformedTreeError::MultipleRoots {
                first: 1,
                second: 2
            }
        );
    }

    #[test]
    fn test_dangling_head() {
        let tokens = vec![
            Token::new(1, "a", "X", 0, "root"),
            Token::new(2, "b", "X", 7, "dep"),
        ];
        assert_eq!(
            Tree::build(&tokens).unwrap_err(),
            MalformedTreeError::DanglingHead { id: 2, head: 7 }
        );
    }

    #[test]
    fn test_cycle() {
        let tokens = vec![
            Token::new(1, "a", "X", 0, "root"),
            Token::new(2, "b", "X", 3, "dep"),
            Token::new(3, "c", "X", 2, "dep"),
        ];
        assert_eq!(
            Tree::build(&tokens).unwrap_err(),
            MalformedTreeError::Cycle { id: 2 }
        );
    }

    #[test]
    fn test_self_loop() {
        let tokens = vec![
            Token::new(1, "a", "X", 0, "root"),
            Token::new(2, "b", "X", 2, "dep"),
        ];
        assert_eq!(
            Tree::build(&tokens).unwrap_err(),
            MalformedTreeError::Cycle { id: 2 }
        );
    }

    #[test]
    fn test_bad_ids() {
        assert_eq!(Tree::build(&[]).unwrap_err(), MalformedTreeError::Empty);

        let zero = vec![Token::new(0, "a", "X", 0, "root")];
        assert_eq!(Tree::build(&zero).unwrap_err(), MalformedTreeError::InvalidId);

        let duplicate = vec![
            Token::new(1, "a", "X", 0, "root"),
            Token::new(1, "b", "X", 1, "dep"),
        ];
        assert_eq!(
            Tree::build(&duplicate).unwrap_err(),
            MalformedTreeError::DuplicateId { id: 1 }
        );
    }

    #[test]
    fn test_dump() {
        let tree = Tree::build(&dog_runs()).unwrap();
        let expected = "\
(deprel:root) form:runs lemma:run upos:VERB [4]
    (deprel:nsubj) form:dog lemma:dog upos:NOUN [3]
        (deprel:det) form:The lemma:The upos:DET [1]
        (deprel:amod) form:big lemma:big upos:ADJ [2]
    (deprel:punct) form:. lemma:. upos:PUNCT [5]
";
        assert_eq!(tree.dump(), expected);
    }

    #[test]
    fn test_sentence_text() {
        let mut tokens = dog_runs();
        tokens[3].misc.insert("SpaceAfter", "No");
        let sentence = Sentence::new(tokens);
        assert_eq!(sentence.text(), "The big dog runs.");

        let with_comment = Sentence::with_metadata(
            dog_runs(),
            Some("The big dog runs!".to_string()),
            BTreeMap::new(),
        );
        assert_eq!(with_comment.text(), "The big dog runs!");
    }

    #[test]
    fn test_features() {
        let mut feats = Features::new();
        feats.insert("Number", "Sing");
        feats.insert("Person", "3");

        assert_eq!(feats.get("Number"), Some("Sing"));
        assert_eq!(feats.get("Case"), None);
        assert_eq!(feats.len(), 2);
        assert_eq!(feats.iter().next(), Some(("Number", "Sing")));
    }
}
