use crate::domain::a001_department::aggregate::DepartmentId;
use crate::enums::{RosterStatus, SortDirection};
use crate::shared::list_query::{
    default_page, default_page_size, is_blank, parse_optional_i64, DateRange, ListFilters,
    NoFilter, NumericRange,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RosterSortBy {
    Title,
    #[default]
    StartDate,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterCategorical {
    Status,
    Department,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterDateRange {
    StartDate,
}

/// Query of `GET /api/Rosters`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterFilters {
    #[serde(rename = "Search", skip_serializing_if = "is_blank")]
    pub search: String,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<RosterStatus>,
    #[serde(rename = "DepartmentId", skip_serializing_if = "Option::is_none")]
    pub department_id: Option<DepartmentId>,
    #[serde(rename = "StartDateFrom", skip_serializing_if = "Option::is_none")]
    pub start_date_from: Option<NaiveDate>,
    #[serde(rename = "StartDateTo", skip_serializing_if = "Option::is_none")]
    pub start_date_to: Option<NaiveDate>,
    #[serde(rename = "SortBy")]
    pub sort_by: RosterSortBy,
    #[serde(rename = "SortDirection")]
    pub sort_direction: SortDirection,
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

impl Default for RosterFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: None,
            department_id: None,
            start_date_from: None,
            start_date_to: None,
            // newest rosters first
            sort_by: RosterSortBy::StartDate,
            sort_direction: SortDirection::Desc,
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl ListFilters for RosterFilters {
    type SortKey = RosterSortBy;
    type CategoricalKey = RosterCategorical;
    type RangeKey = NoFilter;
    type DateRangeKey = RosterDateRange;

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

    fn sort(&self) -> (RosterSortBy, SortDirection) {
        (self.sort_by, self.sort_direction)
    }

    fn set_sort(&mut self, sort_by: RosterSortBy, direction: SortDirection) {
        self.sort_by = sort_by;
        self.sort_direction = direction;
    }

    fn set_categorical(&mut self, key: RosterCategorical, value: &str) {
        match key {
            RosterCategorical::Status => self.status = RosterStatus::from_code(value.trim()),
            RosterCategorical::Department => {
                self.department_id = parse_optional_i64(value).map(DepartmentId::new)
            }
        }
    }

    fn set_range(&mut self, key: NoFilter, _range: NumericRange) {
        match key {}
    }

    fn set_date_range(&mut self, key: RosterDateRange, range: DateRange) {
        match key {
            RosterDateRange::StartDate => {
                self.start_date_from = range.from;
                self.start_date_to = range.to;
            }
        }
    }

    fn active_filter_count(&self) -> usize {
        [
            self.status.is_some(),
            self.department_id.is_some(),
            self.start_date_from.is_some() || self.start_date_to.is_some(),
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
    fn test_status_and_department_filters() {
        let mut f = RosterFilters::default();
        f.set_categorical(RosterCategorical::Status, "Archived");
        f.set_categorical(RosterCategorical::Department, "12");
        assert_eq!(f.status, Some(RosterStatus::Archived));
        assert_eq!(f.department_id, Some(DepartmentId::new(12)));

        f.set_categorical(RosterCategorical::Status, "");
        f.set_categorical(RosterCategorical::Department, "");
        assert_eq!(f.status, None);
        assert_eq!(f.department_id, None);
        assert_eq!(f.active_filter_count(), 0);
    }

    #[test]
    fn test_default_sort_is_newest_first() {
        let f = RosterFilters::default();
        assert_eq!(f.sort(), (RosterSortBy::StartDate, SortDirection::Desc));
        assert_eq!(f.page, 1);
    }
}
