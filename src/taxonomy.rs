//! Structural roles of Universal Dependencies relations
//!
//! Every relation label maps to one closed [`Role`]. Labels with a subtype
//! (`nmod:poss`, `acl:relcl`) are looked up in full first and fall back to
//! their base relation, so unlisted subtypes inherit the base role.

use serde::Serialize;

/// Structural role of a dependency relation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    Root,
    /// `conj`: coordinated conjunct
    Conjunct,
    /// `parataxis`: loosely juxtaposed clause
    Parataxis,
    /// Adverbial, clausal complement, clausal subject, adnominal clause
    Subordinate,
    /// Relative clause (`acl:relcl`, `advcl:relcl`)
    Relative,
    /// `xcomp`: open clausal complement
    OpenComplement,
    /// `amod`
    Adjectival,
    /// `nmod` and its subtypes
    Nominal,
    /// `det` and its subtypes
    Determiner,
    /// `nummod` and its subtypes
    Numeric,
    /// `appos`
    Appositive,
    /// `case`
    CaseMarker,
    Punctuation,
    Other,
}

const RELATION_TABLE: &[(&str, Role)] = &[
    ("root", Role::Root),
    ("conj", Role::Conjunct),
    ("parataxis", Role::Parataxis),
    ("acl", Role::Subordinate),
    ("acl:relcl", Role::Relative),
    ("advcl", Role::Subordinate),
    ("advcl:relcl", Role::Relative),
    ("ccomp", Role::Subordinate),
    ("csubj", Role::Subordinate),
    ("csubj:outer", Role::Subordinate),
    ("nsubj:outer", Role::Subordinate),
    ("xcomp", Role::OpenComplement),
    ("amod", Role::Adjectival),
    ("nmod", Role::Nominal),
    ("det", Role::Determiner),
    ("nummod", Role::Numeric),
    ("appos", Role::Appositive),
    ("case", Role::CaseMarker),
    ("punct", Role::Punctuation),
];

/// Relation labels that can introduce a clause, in report order
pub const CLAUSE_RELATIONS: &[&str] = &[
    "root",
    "acl",
    "acl:relcl",
    "advcl",
    "advcl:relcl",
    "ccomp",
    "csubj",
    "csubj:outer",
    "nsubj:outer",
    "parataxis",
    "xcomp",
    "conj",
];

fn lookup(label: &str) -> Option<Role> {
    RELATION_TABLE
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, role)| *role)
}

/// Classify a relation label
pub fn role(deprel: &str) -> Role {
    lookup(deprel)
        .or_else(|| {
            deprel
                .split_once(':')
                .and_then(|(base, _)| lookup(base))
        })
        .unwrap_or(Role::Other)
}

impl Role {
    /// Introduces a clause whatever the dependent's part of speech
    pub fn always_introduces_clause(self) -> bool {
        matches!(self, Role::Root | Role::Subordinate | Role::Relative | Role::Parataxis)
    }

    /// Coordination between clauses
    pub fn is_coordinating(self) -> bool {
        matches!(self, Role::Conjunct | Role::Parataxis)
    }

    /// Attaches a dependent inside a noun phrase
    pub fn is_np_internal(self) -> bool {
        matches!(
            self,
            Role::Adjectival
                | Role::Nominal
                | Role::Determiner
                | Role::Numeric
                | Role::Appositive
                | Role::CaseMarker
        )
    }

    /// Makes the noun phrase it attaches to complex
    pub fn triggers_complex_np(self) -> bool {
        matches!(self, Role::Adjectival | Role::Nominal | Role::Relative)
    }
}

/// Punctuation, symbols and unannotated tokens are not words
pub fn is_word(upos: &str) -> bool {
    !matches!(upos, "PUNCT" | "SYM" | "_")
}

/// Heads of noun phrases
pub fn is_nominal(upos: &str) -> bool {
    matches!(upos, "NOUN" | "PROPN" | "PRON")
}

pub fn is_verb(upos: &str) -> bool {
    upos == "VERB"
}
