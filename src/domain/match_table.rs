//! Expansion of list items and their potential matches into the flat,
//! fixed-width table offered for download. Pure transformation: no I/O,
//! no escaping (the CSV serializer at the load edge owns quoting).

use crate::domain::model::{ListItem, MatchStatus, PotentialMatch};

pub const CSV_HEADERS: [&str; COLUMN_COUNT] = [
    "row_index",
    "status",
    "country_code",
    "country_name",
    "name",
    "address",
    "matched_facility_oar_id",
    "matched_facility_name",
    "matched_facility_address",
    "potential_match_oar_id",
    "potential_match_name",
    "potential_match_address",
    "potential_match_confidence",
    "potential_match_status",
];

pub const COLUMN_COUNT: usize = ITEM_COLUMN_COUNT + MATCH_COLUMN_COUNT;
const ITEM_COLUMN_COUNT: usize = 9;
const MATCH_COLUMN_COUNT: usize = 5;

/// The nine cells shared by every row an item produces. Matched-facility
/// cells fall back to empty strings, never to a missing cell.
pub fn item_cells(item: &ListItem) -> Vec<String> {
    let (oar_id, name, address) = match &item.matched_facility {
        Some(f) => (f.oar_id.clone(), f.name.clone(), f.address.clone()),
        None => (String::new(), String::new(), String::new()),
    };

    vec![
        item.row_index.to_string(),
        item.status.clone(),
        item.country_code.clone(),
        item.country_name.clone(),
        item.name.clone(),
        item.address.clone(),
        oar_id,
        name,
        address,
    ]
}

/// The five match-specific cells, copied verbatim.
pub fn match_cells(potential_match: &PotentialMatch) -> Vec<String> {
    vec![
        potential_match.oar_id.clone(),
        potential_match.name.clone(),
        potential_match.address.clone(),
        potential_match.confidence.to_string(),
        potential_match.status.to_string(),
    ]
}

/// Placeholder cells for an item with no surviving match. Freshly
/// allocated so callers can never alias a shared row.
pub fn empty_match_cells() -> Vec<String> {
    vec![String::new(); MATCH_COLUMN_COUNT]
}

/// One output row per non-rejected match, in input order. An item with no
/// matches, or with only rejected ones, still contributes a single
/// placeholder row; rejected matches never surface as rows of their own.
pub fn expand_list_item(item: &ListItem) -> Vec<Vec<String>> {
    let prefix = item_cells(item);

    let surviving: Vec<&PotentialMatch> = item
        .matches
        .iter()
        .filter(|m| m.status != MatchStatus::Rejected)
        .collect();

    if surviving.is_empty() {
        let mut row = prefix;
        row.extend(empty_match_cells());
        return vec![row];
    }

    surviving
        .iter()
        .map(|m| {
            let mut row = prefix.clone();
            row.extend(match_cells(m));
            row
        })
        .collect()
}

pub fn header_row() -> Vec<String> {
    CSV_HEADERS.iter().map(|h| (*h).to_string()).collect()
}

/// The full table: header first, then the expansion of each item in input
/// order. An empty input yields just the header.
pub fn match_table(items: &[ListItem]) -> Vec<Vec<String>> {
    let mut rows = vec![header_row()];
    for item in items {
        rows.extend(expand_list_item(item));
    }
    rows
}
