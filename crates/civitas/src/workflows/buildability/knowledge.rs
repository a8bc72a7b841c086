use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

/// District-level advisory text shown alongside the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictBrief {
    pub zoning_notes: Vec<String>,
    pub planning_signals: Vec<String>,
    pub approvals_path: Vec<String>,
    pub common_risks: Vec<String>,
    pub confidence_note: String,
}

impl DistrictBrief {
    /// Generic guidance used when a district has no dedicated entry.
    pub fn generic() -> Self {
        Self {
            zoning_notes: strings(&[
                "Zoning and planning designations vary by corridor and neighbourhood. Confirm the parcel's official designation before you commit.",
            ]),
            planning_signals: strings(&[
                "Check access hierarchy, setbacks, and drainage assumptions early. These often cause expensive surprises.",
            ]),
            approvals_path: strings(&[
                "Verify documents and title chain first, then map the approvals path for your intended use.",
            ]),
            common_risks: strings(&[
                "Documentation gaps",
                "Right-of-way/setback conflicts",
                "Drainage exposure",
            ]),
            confidence_note: "This is an advisory brief. Authoritative datasets and parcel-level verification are needed to be precise.".to_string(),
        }
    }

    fn ikorodu() -> Self {
        Self {
            zoning_notes: strings(&[
                "Land use can vary sharply by corridor: residential clusters, mixed-use strips near major roads, and institutional pockets.",
                "If the intended use is multi-unit or commercial, confirm planning designation and right-of-way constraints early.",
            ]),
            planning_signals: strings(&[
                "Look for road expansion history and drainage channels; they often create non-obvious setbacks and restrictions.",
                "Confirm access hierarchy (primary/secondary road) and easements before committing to design.",
            ]),
            approvals_path: strings(&[
                "Verify survey authenticity and trace the title chain before expensive approvals.",
                "Confirm planning permit requirements for the proposed use and building scale before mobilization.",
            ]),
            common_risks: strings(&[
                "Drainage/flood exposure in low-lying pockets",
                "Right-of-way encroachments near major corridors",
                "Boundary disputes and documentation gaps",
            ]),
            confidence_note: "This is an advisory LCDA-level brief. Exact zoning and constraints depend on the parcel's official planning designation and survey.".to_string(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Normalized lookup key for a district name.
pub fn normalize_district(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether a lookup hit a dedicated district entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BriefSource {
    District,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BriefMatch<'a> {
    pub source: BriefSource,
    pub brief: &'a DistrictBrief,
}

/// On-disk shape of a district dataset.
#[derive(Debug, Deserialize)]
struct DatasetFile {
    districts: BTreeMap<String, DistrictBrief>,
    #[serde(default)]
    fallback: Option<DistrictBrief>,
}

#[derive(Debug, thiserror::Error)]
pub enum KnowledgeBaseError {
    #[error("unable to read district dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("district dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Static district dataset keyed by normalized district name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    entries: BTreeMap<String, DistrictBrief>,
    fallback: DistrictBrief,
}

impl KnowledgeBase {
    pub fn new(entries: BTreeMap<String, DistrictBrief>, fallback: DistrictBrief) -> Self {
        let entries = entries
            .into_iter()
            .map(|(district, brief)| (normalize_district(&district), brief))
            .collect();
        Self { entries, fallback }
    }

    /// Dataset shipped with the product: a single Lagos LCDA entry.
    pub fn seeded() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert("ikorodu".to_string(), DistrictBrief::ikorodu());
        Self::new(entries, DistrictBrief::generic())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, KnowledgeBaseError> {
        let dataset: DatasetFile = serde_json::from_reader(reader)?;
        let fallback = dataset.fallback.unwrap_or_else(DistrictBrief::generic);
        Ok(Self::new(dataset.districts, fallback))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, KnowledgeBaseError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load the configured dataset, or the seeded one when none is configured.
    pub fn load(dataset_path: Option<&Path>) -> Result<Self, KnowledgeBaseError> {
        match dataset_path {
            Some(path) => {
                let knowledge = Self::from_path(path)?;
                tracing::info!(
                    path = %path.display(),
                    districts = knowledge.len(),
                    "loaded district dataset"
                );
                Ok(knowledge)
            }
            None => Ok(Self::seeded()),
        }
    }

    pub fn resolve(&self, lcda: &str) -> BriefMatch<'_> {
        match self.entries.get(&normalize_district(lcda)) {
            Some(brief) => BriefMatch {
                source: BriefSource::District,
                brief,
            },
            None => BriefMatch {
                source: BriefSource::Fallback,
                brief: &self.fallback,
            },
        }
    }

    pub fn districts(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_trimmed_and_case_insensitive() {
        let knowledge = KnowledgeBase::seeded();
        let found = knowledge.resolve("  IKORODU ");
        assert_eq!(found.source, BriefSource::District);
        assert_eq!(found.brief.common_risks.len(), 3);
    }

    #[test]
    fn unknown_district_uses_fallback() {
        let knowledge = KnowledgeBase::seeded();
        let found = knowledge.resolve("Unknown District");
        assert_eq!(found.source, BriefSource::Fallback);
        assert_eq!(found.brief, &DistrictBrief::generic());
    }

    #[test]
    fn dataset_keys_are_normalized_on_load() {
        let json = r#"{
            "districts": {
                " Epe ": {
                    "zoning_notes": ["Mostly agricultural edges."],
                    "planning_signals": [],
                    "approvals_path": [],
                    "common_risks": ["Wetland margins"],
                    "confidence_note": "Advisory only."
                }
            }
        }"#;

        let knowledge = KnowledgeBase::from_reader(json.as_bytes()).expect("dataset parses");
        assert_eq!(knowledge.districts().collect::<Vec<_>>(), vec!["epe"]);
        assert_eq!(knowledge.resolve("EPE").source, BriefSource::District);
        assert_eq!(knowledge.resolve("Ikorodu").source, BriefSource::Fallback);
    }

    #[test]
    fn malformed_dataset_is_rejected() {
        let result = KnowledgeBase::from_reader("{\"districts\": [".as_bytes());
        assert!(matches!(result, Err(KnowledgeBaseError::Parse(_))));
    }
}
