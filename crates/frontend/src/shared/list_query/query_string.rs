use serde::Serialize;

/// Filter record as a GET query string. Unset fields are left out.
pub fn to_query_string<F: Serialize>(filters: &F) -> Result<String, serde_qs::Error> {
    serde_qs::to_string(filters)
}

/// `path?query`, or just `path` when nothing is set
pub fn with_query<F: Serialize>(path: &str, filters: &F) -> Result<String, serde_qs::Error> {
    let query = to_query_string(filters)?;
    if query.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a004_contracting_type::filters::ContractingTypeFilters;
    use contracts::domain::a005_roster::filters::RosterFilters;
    use contracts::enums::RosterStatus;

    #[test]
    fn test_defaults_only_carry_sort_and_paging() {
        let qs = to_query_string(&ContractingTypeFilters::default()).unwrap();
        assert_eq!(qs, "SortBy=Name&SortDirection=asc&page=1&pageSize=10");
    }

    #[test]
    fn test_populated_fields_become_parameters() {
        let filters = ContractingTypeFilters {
            search: "nurse".into(),
            is_active: Some(true),
            allow_overtime_hours: Some(false),
            min_hours_per_week: Some(20),
            page: 3,
            ..Default::default()
        };
        let qs = to_query_string(&filters).unwrap();
        assert_eq!(
            qs,
            "Search=nurse&IsActive=true&AllowOvertimeHours=false&MinHoursPerWeek=20\
             &SortBy=Name&SortDirection=asc&page=3&pageSize=10"
        );
        assert!(!qs.contains("MaxHoursPerWeek"));
    }

    #[test]
    fn test_blank_search_is_omitted() {
        let filters = ContractingTypeFilters {
            search: "   ".into(),
            ..Default::default()
        };
        assert!(!to_query_string(&filters).unwrap().contains("Search"));
    }

    #[test]
    fn test_roster_dates_and_status() {
        let filters = RosterFilters {
            status: Some(RosterStatus::Draft),
            start_date_from: NaiveDate::from_ymd_opt(2024, 3, 1),
            ..Default::default()
        };
        let url = with_query("/api/Rosters", &filters).unwrap();
        assert!(url.starts_with("/api/Rosters?"));
        assert!(url.contains("Status=Draft"));
        assert!(url.contains("StartDateFrom=2024-03-01"));
        assert!(!url.contains("StartDateTo"));
    }
}
