use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::classify::{Language, PaperType};

pub const DEFAULT_CATALOG_PATH: &str = "papers_database.json";

/// One discovered paper with its inferred metadata. Field order here is
/// the key order in the serialized catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperRecord {
    /// `{period_key}_{ordinal}`; the ordinal restarts at 0 per period,
    /// which makes ids unique within a run.
    pub id: String,
    pub filename: String,
    pub url: String,
    pub year: i32,
    pub period: String,
    pub subject: String,
    pub paper_type: PaperType,
    pub language: Language,
    pub grade: u8,
}

/// Serialize the whole catalog as one indented JSON array, replacing any
/// previous file. Non-ASCII filenames are written as-is (UTF-8, not
/// escaped). A failure here is fatal to the run.
pub fn save_catalog(records: &[PaperRecord], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(records).context("serializing catalog")?;
    fs::write(path, json).with_context(|| format!("writing catalog to {}", path.display()))?;
    Ok(())
}

pub fn load_catalog(path: &Path) -> Result<Vec<PaperRecord>> {
    let json =
        fs::read_to_string(path).with_context(|| format!("reading catalog {}", path.display()))?;
    let records = serde_json::from_str(&json)
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    Ok(records)
}

/// End-of-run summary: totals, distinct subject count, sorted years.
pub struct CatalogSummary {
    pub total: usize,
    pub subjects: usize,
    pub years: Vec<i32>,
}

impl CatalogSummary {
    pub fn of(records: &[PaperRecord]) -> Self {
        let subjects: BTreeSet<&str> = records.iter().map(|r| r.subject.as_str()).collect();
        let years: BTreeSet<i32> = records.iter().map(|r| r.year).collect();
        Self {
            total: records.len(),
            subjects: subjects.len(),
            years: years.into_iter().collect(),
        }
    }

    pub fn print(&self) {
        println!("\nSubjects found: {}", self.subjects);
        println!("Years: {:?}", self.years);
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, subject: &str, year: i32) -> PaperRecord {
        PaperRecord {
            id: id.to_string(),
            filename: "Mathematics P1 Nov.pdf".to_string(),
            url: "https://www.education.gov.za/docs/maths.pdf".to_string(),
            year,
            period: "November".to_string(),
            subject: subject.to_string(),
            paper_type: PaperType::Paper1,
            language: Language::English,
            grade: 12,
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("papers_database.json");

        let records = vec![record("2023_november_0", "Mathematics", 2023)];
        save_catalog(&records, &path).unwrap();
        let loaded = load_catalog(&path).unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "2023_november_0");
        assert_eq!(loaded[0].paper_type, PaperType::Paper1);
        assert_eq!(loaded[0].grade, 12);
    }

    #[test]
    fn save_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("papers_database.json");

        save_catalog(&[record("a_0", "Mathematics", 2023)], &path).unwrap();
        save_catalog(&[record("b_0", "History", 2024)], &path).unwrap();

        let loaded = load_catalog(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "b_0");
    }

    #[test]
    fn json_shape_matches_the_catalog_contract() {
        let json = serde_json::to_string_pretty(&[record("2023_november_0", "Mathematics", 2023)])
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let obj = value[0].as_object().unwrap();

        assert_eq!(obj.len(), 9);
        // Keys are emitted in the documented catalog order
        let expected = ["id", "filename", "url", "year", "period", "subject", "paper_type", "language", "grade"];
        let positions: Vec<usize> = expected
            .iter()
            .map(|k| json.find(&format!("\"{k}\"")).unwrap_or_else(|| panic!("missing key {k}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
        assert_eq!(obj["paper_type"], "paper1");
        assert_eq!(obj["language"], "English");
        assert_eq!(obj["grade"], 12);
        // Indented output, one key per line
        assert!(json.contains("\n  "));
    }

    #[test]
    fn non_ascii_filenames_are_not_escaped() {
        let mut r = record("2023_november_0", "Other", 2023);
        r.filename = "Séance économie.pdf".to_string();
        let json = serde_json::to_string_pretty(&[r]).unwrap();
        assert!(json.contains("Séance économie.pdf"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn summary_counts_distinct_subjects_and_sorts_years() {
        let records = vec![
            record("a_0", "Mathematics", 2024),
            record("a_1", "Mathematics", 2024),
            record("b_0", "History", 2021),
        ];
        let s = CatalogSummary::of(&records);
        assert_eq!(s.total, 3);
        assert_eq!(s.subjects, 2);
        assert_eq!(s.years, vec![2021, 2024]);
    }
}
