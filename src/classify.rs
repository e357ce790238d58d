//! Filename heuristics for NSC paper metadata.
//!
//! All matching is plain substring containment over the lowercased name,
//! scanned top-to-bottom with first-match-wins semantics. This reproduces
//! the catalog's historical behavior exactly, including the known
//! false-positive surface: "p1" matches anywhere in the name, and "eat"
//! (meant for first-additional-language abbreviations) matches inside
//! unrelated words.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperType {
    Memo,
    Paper1,
    Paper2,
    Paper3,
    Unknown,
}

impl PaperType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaperType::Memo => "memo",
            PaperType::Paper1 => "paper1",
            PaperType::Paper2 => "paper2",
            PaperType::Paper3 => "paper3",
            PaperType::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Afrikaans,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Afrikaans => "Afrikaans",
        }
    }
}

/// Metadata inferred from a single display name / filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub subject: &'static str,
    pub paper_type: PaperType,
    pub language: Language,
    pub grade: u8,
}

/// Paper-type rules, highest priority first. Memo/marking outranks the
/// paper-number tokens so "P1 Memo" classifies as a memo.
const PAPER_TYPE_RULES: &[(PaperType, &[&str])] = &[
    (PaperType::Memo, &["memo", "marking"]),
    (PaperType::Paper1, &["p1", "paper 1", "paper1"]),
    (PaperType::Paper2, &["p2", "paper 2", "paper2"]),
    (PaperType::Paper3, &["p3", "paper 3", "paper3"]),
];

/// Subject keyword table, scanned in declaration order. Keyword sets are
/// not disjoint ("it" is a substring of plenty of names), so order is part
/// of the contract.
const SUBJECTS: &[(&str, &[&str])] = &[
    ("Mathematics", &["math", "wiskunde"]),
    ("Physical Sciences", &["physical", "fisiese wetenskappe"]),
    ("Life Sciences", &["life", "lewenswetenskappe"]),
    ("Accounting", &["accounting", "rekeningkunde"]),
    ("Economics", &["economics", "ekonomie"]),
    ("Business Studies", &["business"]),
    ("Geography", &["geography", "geografie"]),
    ("History", &["history", "geskiedenis"]),
    ("English Home Language", &["english hl", "english home"]),
    ("English First Additional Language", &["english fal", "english first"]),
    ("Afrikaans Home Language", &["afrikaans hl", "afrikaans huistaal"]),
    ("Afrikaans First Additional Language", &["afrikaans eat", "afrikaans fal"]),
    ("Information Technology", &["information technology", "it"]),
    ("Computer Applications Technology", &["cat", "computer applications"]),
    ("Agricultural Sciences", &["agricultural", "landbou"]),
    ("Tourism", &["tourism", "toerisme"]),
    ("Visual Arts", &["visual arts", "visuele kunste"]),
    ("Dramatic Arts", &["dramatic", "dramatiese"]),
    ("Music", &["music", "musiek"]),
    ("Design", &["design", "ontwerp"]),
    ("Civil Technology", &["civil"]),
    ("Electrical Technology", &["electrical", "elektries"]),
    ("Mechanical Technology", &["mechanical", "meganiese"]),
    ("Engineering Graphics", &["engineering graphics", "egdt"]),
];

const DEFAULT_SUBJECT: &str = "Other";

const AFRIKAANS_TOKENS: &[&str] = &["afr", "afrikaans", "huistaal", "eat"];

const GRADE_11_TOKENS: &[&str] = &["grade 11", "gr11", "g11"];
const GRADE_10_TOKENS: &[&str] = &["grade 10", "gr10", "g10"];
const DEFAULT_GRADE: u8 = 12;

/// Classify a display name. Pure and total: every name maps to some
/// classification, unmatched fields fall back to defaults.
pub fn classify(name: &str) -> Classification {
    let lower = name.to_lowercase();

    let paper_type = PAPER_TYPE_RULES
        .iter()
        .find(|(_, tokens)| contains_any(&lower, tokens))
        .map(|(t, _)| *t)
        .unwrap_or(PaperType::Unknown);

    let subject = SUBJECTS
        .iter()
        .find(|(_, keywords)| contains_any(&lower, keywords))
        .map(|(s, _)| *s)
        .unwrap_or(DEFAULT_SUBJECT);

    let language = if contains_any(&lower, AFRIKAANS_TOKENS) {
        Language::Afrikaans
    } else {
        Language::English
    };

    // Grade 11 is checked before grade 10; a name carrying both tokens
    // resolves to 11. Preserved for catalog compatibility.
    let grade = if contains_any(&lower, GRADE_11_TOKENS) {
        11
    } else if contains_any(&lower, GRADE_10_TOKENS) {
        10
    } else {
        DEFAULT_GRADE
    };

    Classification {
        subject,
        paper_type,
        language,
        grade,
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

// ── Tests ──
