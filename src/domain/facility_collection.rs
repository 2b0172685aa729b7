//! Decides whether fetching a single facility should replace the cached
//! facility collection or merge into it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facility {
    pub oar_id: String,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionUpdate {
    /// Drop the current collection and keep only the fetched facility.
    Replace,
    /// Keep the current collection; the fetched facility stands alone.
    Merge,
}

/// Replace when the snapshot is empty, or when it holds exactly one
/// facility that is not the fetched one. A larger snapshot is someone's
/// search result and must not be clobbered by a single-facility fetch.
pub fn single_facility_update(current: &[Facility], fetched: &Facility) -> CollectionUpdate {
    match current {
        [] => CollectionUpdate::Replace,
        [only] if only.oar_id != fetched.oar_id => CollectionUpdate::Replace,
        _ => CollectionUpdate::Merge,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facility(oar_id: &str) -> Facility {
        Facility {
            oar_id: oar_id.to_string(),
            name: "Factory".to_string(),
            address: "1 Main St".to_string(),
        }
    }

    #[test]
    fn test_empty_collection_is_replaced() {
        assert_eq!(
            single_facility_update(&[], &facility("a")),
            CollectionUpdate::Replace
        );
    }

    #[test]
    fn test_single_different_facility_is_replaced() {
        assert_eq!(
            single_facility_update(&[facility("a")], &facility("b")),
            CollectionUpdate::Replace
        );
    }

    #[test]
    fn test_single_same_facility_is_kept() {
        assert_eq!(
            single_facility_update(&[facility("a")], &facility("a")),
            CollectionUpdate::Merge
        );
    }

    #[test]
    fn test_larger_collection_is_never_clobbered() {
        let current = [facility("a"), facility("b")];
        assert_eq!(
            single_facility_update(&current, &facility("c")),
            CollectionUpdate::Merge
        );
        assert_eq!(
            single_facility_update(&current, &facility("a")),
            CollectionUpdate::Merge
        );
    }
}
