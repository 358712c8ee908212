use crate::enums::SortDirection;
use crate::shared::list_query::{
    default_page, default_page_size, is_blank, parse_optional_bool, DateRange, ListFilters,
    NumericRange,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContractingTypeSortBy {
    #[default]
    Name,
    HoursPerWeek,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractingTypeCategorical {
    IsActive,
    AllowOvertimeHours,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractingTypeRange {
    HoursPerWeek,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractingTypeDateRange {
    CreatedAt,
}

/// Query of `GET /api/ContractingTypes`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractingTypeFilters {
    #[serde(rename = "Search", skip_serializing_if = "is_blank")]
    pub search: String,
    #[serde(rename = "IsActive", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(rename = "AllowOvertimeHours", skip_serializing_if = "Option::is_none")]
    pub allow_overtime_hours: Option<bool>,
    #[serde(rename = "MinHoursPerWeek", skip_serializing_if = "Option::is_none")]
    pub min_hours_per_week: Option<u32>,
    #[serde(rename = "MaxHoursPerWeek", skip_serializing_if = "Option::is_none")]
    pub max_hours_per_week: Option<u32>,
    #[serde(rename = "CreatedFrom", skip_serializing_if = "Option::is_none")]
    pub created_from: Option<NaiveDate>,
    #[serde(rename = "CreatedTo", skip_serializing_if = "Option::is_none")]
    pub created_to: Option<NaiveDate>,
    #[serde(rename = "SortBy")]
    pub sort_by: ContractingTypeSortBy,
    #[serde(rename = "SortDirection")]
    pub sort_direction: SortDirection,
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

impl Default for ContractingTypeFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            is_active: None,
            allow_overtime_hours: None,
            min_hours_per_week: None,
            max_hours_per_week: None,
            created_from: None,
            created_to: None,
            sort_by: ContractingTypeSortBy::Name,
            sort_direction: SortDirection::Asc,
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl ListFilters for ContractingTypeFilters {
    type SortKey = ContractingTypeSortBy;
    type CategoricalKey = ContractingTypeCategorical;
    type RangeKey = ContractingTypeRange;
    type DateRangeKey = ContractingTypeDateRange;

    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }

    fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size;
    }

    fn search(&self) -> &str {
        &self.search
    }

    fn set_search(&mut self, search: String) {
        self.search = search;
    }

    fn sort(&self) -> (ContractingTypeSortBy, SortDirection) {
        (self.sort_by, self.sort_direction)
    }

    fn set_sort(&mut self, sort_by: ContractingTypeSortBy, direction: SortDirection) {
        self.sort_by = sort_by;
        self.sort_direction = direction;
    }

    fn set_categorical(&mut self, key: ContractingTypeCategorical, value: &str) {
        let parsed = parse_optional_bool(value);
        match key {
            ContractingTypeCategorical::IsActive => self.is_active = parsed,
            ContractingTypeCategorical::AllowOvertimeHours => self.allow_overtime_hours = parsed,
        }
    }

    fn set_range(&mut self, key: ContractingTypeRange, range: NumericRange) {
        match key {
            ContractingTypeRange::HoursPerWeek => {
                self.min_hours_per_week = range.min;
                self.max_hours_per_week = range.max;
            }
        }
    }

    fn set_date_range(&mut self, key: ContractingTypeDateRange, range: DateRange) {
        match key {
            ContractingTypeDateRange::CreatedAt => {
                self.created_from = range.from;
                self.created_to = range.to;
            }
        }
    }

    fn active_filter_count(&self) -> usize {
        [
            self.is_active.is_some(),
            self.allow_overtime_hours.is_some(),
            self.min_hours_per_week.is_some() || self.max_hours_per_week.is_some(),
            self.created_from.is_some() || self.created_to.is_some(),
        ]
        .iter()
        .filter(|&&set| set)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorical_parsing() {
        let mut f = ContractingTypeFilters::default();
        f.set_categorical(ContractingTypeCategorical::AllowOvertimeHours, "true");
        f.set_categorical(ContractingTypeCategorical::IsActive, "false");
        assert_eq!(f.allow_overtime_hours, Some(true));
        assert_eq!(f.is_active, Some(false));
        f.set_categorical(ContractingTypeCategorical::IsActive, "");
        assert_eq!(f.is_active, None);
        assert_eq!(f.active_filter_count(), 1);
    }

    #[test]
    fn test_cleared_keeps_page_size() {
        let mut f = ContractingTypeFilters {
            search: "nurse".into(),
            page: 4,
            page_size: 50,
            ..Default::default()
        };
        f.set_range(ContractingTypeRange::HoursPerWeek, NumericRange::new(Some(20), None));
        let cleared = f.cleared();
        assert_eq!(cleared.page_size, 50);
        assert_eq!(cleared.page, 1);
        assert!(cleared.search.is_empty());
        assert_eq!(cleared.min_hours_per_week, None);
    }
}
