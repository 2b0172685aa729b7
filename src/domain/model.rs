use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of an uploaded facility list, as served by the registry API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListItem {
    pub row_index: i64,
    pub status: String,
    pub country_code: String,
    pub country_name: String,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub matched_facility: Option<MatchedFacility>,
    #[serde(default)]
    pub matches: Vec<PotentialMatch>,
}

/// The registry facility a list item has been confirmed to represent.
/// Always a complete triple; the `Option` on `ListItem` covers absence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedFacility {
    pub oar_id: String,
    pub name: String,
    pub address: String,
}

/// A candidate registry facility proposed for a list item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PotentialMatch {
    pub oar_id: String,
    pub name: String,
    pub address: String,
    pub confidence: Confidence,
    pub status: MatchStatus,
}

/// Match confidence as sent by the API: a number or a free-form string.
/// Opaque here, rendered verbatim into the output cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Confidence {
    Number(f64),
    Text(String),
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Number(n) => write!(f, "{}", n),
            Confidence::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Review status of a potential match. Closed set; an unknown wire value
/// fails deserialization instead of slipping through as a bare string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Automatic,
    Pending,
    Confirmed,
    Rejected,
    Merged,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            MatchStatus::Automatic => "AUTOMATIC",
            MatchStatus::Pending => "PENDING",
            MatchStatus::Confirmed => "CONFIRMED",
            MatchStatus::Rejected => "REJECTED",
            MatchStatus::Merged => "MERGED",
        };
        f.write_str(tag)
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    /// Header row first, then one row per (item, surviving match) pair.
    pub rows: Vec<Vec<String>>,
    pub csv_output: String,
    pub item_count: usize,
}
