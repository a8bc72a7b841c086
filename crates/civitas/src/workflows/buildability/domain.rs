use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the requester plans to do with the site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    #[default]
    BuyLand,
    StartBuilding,
    AlreadyBuilding,
    RiskCheck,
}

impl Intent {
    pub const ALL: [Intent; 4] = [
        Intent::BuyLand,
        Intent::StartBuilding,
        Intent::AlreadyBuilding,
        Intent::RiskCheck,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Intent::BuyLand => "Buying land",
            Intent::StartBuilding => "Starting construction",
            Intent::AlreadyBuilding => "Already building",
            Intent::RiskCheck => "Risk check only",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Intent::BuyLand => "buy_land",
            Intent::StartBuilding => "start_building",
            Intent::AlreadyBuilding => "already_building",
            Intent::RiskCheck => "risk_check",
        }
    }

    /// Construction is underway or about to start, so approvals are in play.
    pub fn involves_construction(&self) -> bool {
        matches!(self, Intent::StartBuilding | Intent::AlreadyBuilding)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown intent '{0}' (expected buy_land, start_building, already_building or risk_check)")]
pub struct UnknownIntent(pub String);

impl FromStr for Intent {
    type Err = UnknownIntent;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "buy_land" | "buying_land" => Ok(Intent::BuyLand),
            "start_building" | "starting_construction" => Ok(Intent::StartBuilding),
            "already_building" => Ok(Intent::AlreadyBuilding),
            "risk_check" | "risk_check_only" => Ok(Intent::RiskCheck),
            _ => Err(UnknownIntent(raw.to_string())),
        }
    }
}

/// Device position captured by the intake form when the user allows it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Immutable snapshot of a submitted buildability check.
///
/// Field names on the wire follow the persisted slot format (`coords`, `ts`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeRecord {
    #[serde(default)]
    pub intent: Intent,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, rename = "coords", skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub area: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
    #[serde(default)]
    pub lcda: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "ts", with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

pub(crate) const MIN_ADDRESS_CHARS: usize = 5;
pub(crate) const MIN_LANDMARK_CHARS: usize = 2;
pub(crate) const MIN_MESSAGE_CHARS: usize = 15;

fn trimmed_len(value: Option<&str>) -> usize {
    value.map(|text| text.trim().chars().count()).unwrap_or(0)
}

impl IntakeRecord {
    pub fn address_text(&self) -> &str {
        self.address.as_deref().map(str::trim).unwrap_or("")
    }

    pub fn landmark_text(&self) -> &str {
        self.landmark.as_deref().map(str::trim).unwrap_or("")
    }

    pub fn message_text(&self) -> &str {
        self.message.as_deref().map(str::trim).unwrap_or("")
    }

    pub fn has_address(&self) -> bool {
        trimmed_len(self.address.as_deref()) >= MIN_ADDRESS_CHARS
    }

    pub fn has_landmark(&self) -> bool {
        trimmed_len(self.landmark.as_deref()) >= MIN_LANDMARK_CHARS
    }

    pub fn has_detailed_message(&self) -> bool {
        trimmed_len(self.message.as_deref()) >= MIN_MESSAGE_CHARS
    }

    pub fn has_coordinates(&self) -> bool {
        self.coordinates.is_some()
    }
}

/// Keyword-derived subject raised in the free-text message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TopicTag {
    #[serde(rename = "zoning")]
    Zoning,
    #[serde(rename = "right-of-way/setback")]
    RightOfWaySetback,
    #[serde(rename = "drainage")]
    Drainage,
    #[serde(rename = "approvals")]
    Approvals,
    #[serde(rename = "title/documents")]
    TitleDocuments,
    #[serde(rename = "cost-risk")]
    CostRisk,
    #[serde(rename = "urgency")]
    Urgency,
    #[serde(rename = "use-case")]
    UseCase,
}

impl TopicTag {
    pub fn tag(&self) -> &'static str {
        match self {
            TopicTag::Zoning => "zoning",
            TopicTag::RightOfWaySetback => "right-of-way/setback",
            TopicTag::Drainage => "drainage",
            TopicTag::Approvals => "approvals",
            TopicTag::TitleDocuments => "title/documents",
            TopicTag::CostRisk => "cost-risk",
            TopicTag::Urgency => "urgency",
            TopicTag::UseCase => "use-case",
        }
    }
}

/// Overall risk tier derived from the buildability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Verdict for a single advisory dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalStatus {
    Good,
    Watch,
    Risk,
    Unknown,
}

impl SignalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SignalStatus::Good => "Good",
            SignalStatus::Watch => "Watch",
            SignalStatus::Risk => "Risk",
            SignalStatus::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalCategory {
    LocationClarity,
    TitleAndDocuments,
    RightOfWayAndSetbacks,
    DrainageFloodExposure,
    ApprovalsReadiness,
    UseCaseFit,
}

impl SignalCategory {
    pub const ALL: [SignalCategory; 6] = [
        SignalCategory::LocationClarity,
        SignalCategory::TitleAndDocuments,
        SignalCategory::RightOfWayAndSetbacks,
        SignalCategory::DrainageFloodExposure,
        SignalCategory::ApprovalsReadiness,
        SignalCategory::UseCaseFit,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SignalCategory::LocationClarity => "Location clarity",
            SignalCategory::TitleAndDocuments => "Title & documents",
            SignalCategory::RightOfWayAndSetbacks => "Right-of-way & setbacks",
            SignalCategory::DrainageFloodExposure => "Drainage / flood exposure",
            SignalCategory::ApprovalsReadiness => "Approvals readiness",
            SignalCategory::UseCaseFit => "Use-case fit",
        }
    }
}

/// Categorical advisory verdict with the reasoning shown to the requester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    pub category: SignalCategory,
    pub title: String,
    pub status: SignalStatus,
    pub rationale: String,
    pub action: String,
}
