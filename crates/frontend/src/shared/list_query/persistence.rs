//! Per-list preferences kept in `localStorage`: page size and sort order.
//! Filters themselves are not persisted.

use contracts::enums::SortDirection;
use contracts::shared::list_query::{ListFilters, PAGE_SIZE_OPTIONS};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListPreferences<K> {
    pub page_size: u32,
    pub sort_by: K,
    pub sort_direction: SortDirection,
}

impl<K: Copy> ListPreferences<K> {
    pub fn from_filters<F: ListFilters<SortKey = K>>(filters: &F) -> Self {
        let (sort_by, sort_direction) = filters.sort();
        Self {
            page_size: filters.page_size(),
            sort_by,
            sort_direction,
        }
    }

    /// Page sizes outside the offered options are ignored
    pub fn apply_to<F: ListFilters<SortKey = K>>(&self, filters: &mut F) {
        if PAGE_SIZE_OPTIONS.contains(&self.page_size) {
            filters.set_page_size(self.page_size);
        }
        filters.set_sort(self.sort_by, self.sort_direction);
    }
}

/// Defaults of `F` with the stored preferences applied
pub fn restore_filters<F: ListFilters>(storage_key: &str) -> F {
    let mut filters = F::default();
    if let Some(prefs) = load_preferences::<F::SortKey>(storage_key) {
        prefs.apply_to(&mut filters);
    }
    filters
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load_preferences<K: serde::de::DeserializeOwned>(
    storage_key: &str,
) -> Option<ListPreferences<K>> {
    let raw = storage()?.get_item(storage_key).ok().flatten()?;
    parse_preferences(&raw)
}

pub fn save_preferences<K: Serialize>(storage_key: &str, prefs: &ListPreferences<K>) {
    let Some(storage) = storage() else { return };
    let Ok(raw) = serde_json::to_string(prefs) else { return };
    let _ = storage.set_item(storage_key, &raw);
}

/// Unreadable entries (older layouts, hand edits) count as absent
fn parse_preferences<K: serde::de::DeserializeOwned>(raw: &str) -> Option<ListPreferences<K>> {
    match serde_json::from_str(raw) {
        Ok(prefs) => Some(prefs),
        Err(e) => {
            log::debug!("ignoring stored list preferences: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_contracting_type::filters::{
        ContractingTypeFilters, ContractingTypeSortBy,
    };

    #[test]
    fn test_preferences_restore_onto_defaults() {
        let raw = r#"{"page_size":50,"sort_by":"HoursPerWeek","sort_direction":"desc"}"#;
        let prefs: ListPreferences<ContractingTypeSortBy> = parse_preferences(raw).unwrap();

        let mut filters = ContractingTypeFilters::default();
        prefs.apply_to(&mut filters);
        assert_eq!(filters.page_size, 50);
        assert_eq!(
            filters.sort(),
            (ContractingTypeSortBy::HoursPerWeek, SortDirection::Desc)
        );
        assert_eq!(ListPreferences::from_filters(&filters), prefs);
    }

    #[test]
    fn test_unknown_page_size_is_ignored() {
        let prefs = ListPreferences {
            page_size: 7,
            sort_by: ContractingTypeSortBy::Name,
            sort_direction: SortDirection::Asc,
        };
        let mut filters = ContractingTypeFilters::default();
        prefs.apply_to(&mut filters);
        assert_eq!(filters.page_size, 10);
    }

    #[test]
    fn test_garbage_is_absent() {
        assert!(parse_preferences::<ContractingTypeSortBy>("{\"page\":0}").is_none());
        assert!(parse_preferences::<ContractingTypeSortBy>("not json").is_none());
    }
}
