//! Sort indicators for server-sorted table headers
use contracts::enums::SortDirection;

/// Indicator shown next to a sortable column header
pub fn get_sort_indicator<K: PartialEq>(current: (K, SortDirection), column: K) -> &'static str {
    let (sort_by, direction) = current;
    if sort_by != column {
        return " ⇅";
    }
    if direction.is_ascending() {
        " ▲"
    } else {
        " ▼"
    }
}

/// CSS class of the sort indicator
pub fn get_sort_class<K: PartialEq>(current: (K, SortDirection), column: K) -> &'static str {
    if current.0 == column {
        "sort-indicator sort-indicator--active"
    } else {
        "sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_for_active_column() {
        assert_eq!(get_sort_indicator(("name", SortDirection::Asc), "name"), " ▲");
        assert_eq!(get_sort_indicator(("name", SortDirection::Desc), "name"), " ▼");
        assert_eq!(get_sort_indicator(("name", SortDirection::Asc), "hours"), " ⇅");
    }

    #[test]
    fn test_class_marks_active_column() {
        assert!(get_sort_class(("name", SortDirection::Asc), "name").ends_with("--active"));
        assert_eq!(get_sort_class(("name", SortDirection::Asc), "hours"), "sort-indicator");
    }
}
