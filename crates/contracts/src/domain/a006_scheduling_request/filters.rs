use crate::enums::{RequestStatus, SortDirection};
use crate::shared::list_query::{
    default_page, default_page_size, is_blank, DateRange, ListFilters, NoFilter, NumericRange,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SchedulingRequestSortBy {
    #[default]
    RequestedAt,
    DoctorName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulingRequestCategorical {
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulingRequestDateRange {
    Requested,
}

/// Query of `GET /api/SchedulingRequests`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchedulingRequestFilters {
    #[serde(rename = "Search", skip_serializing_if = "is_blank")]
    pub search: String,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<RequestStatus>,
    #[serde(rename = "RequestedFrom", skip_serializing_if = "Option::is_none")]
    pub requested_from: Option<NaiveDate>,
    #[serde(rename = "RequestedTo", skip_serializing_if = "Option::is_none")]
    pub requested_to: Option<NaiveDate>,
    #[serde(rename = "SortBy")]
    pub sort_by: SchedulingRequestSortBy,
    #[serde(rename = "SortDirection")]
    pub sort_direction: SortDirection,
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

impl Default for SchedulingRequestFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: None,
            requested_from: None,
            requested_to: None,
            sort_by: SchedulingRequestSortBy::RequestedAt,
            sort_direction: SortDirection::Desc,
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl ListFilters for SchedulingRequestFilters {
    type SortKey = SchedulingRequestSortBy;
    type CategoricalKey = SchedulingRequestCategorical;
    type RangeKey = NoFilter;
    type DateRangeKey = SchedulingRequestDateRange;

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

    fn sort(&self) -> (SchedulingRequestSortBy, SortDirection) {
        (self.sort_by, self.sort_direction)
    }

    fn set_sort(&mut self, sort_by: SchedulingRequestSortBy, direction: SortDirection) {
        self.sort_by = sort_by;
        self.sort_direction = direction;
    }

    fn set_categorical(&mut self, key: SchedulingRequestCategorical, value: &str) {
        match key {
            SchedulingRequestCategorical::Status => {
                self.status = RequestStatus::from_code(value.trim())
            }
        }
    }

    fn set_range(&mut self, key: NoFilter, _range: NumericRange) {
        match key {}
    }

    fn set_date_range(&mut self, key: SchedulingRequestDateRange, range: DateRange) {
        match key {
            SchedulingRequestDateRange::Requested => {
                self.requested_from = range.from;
                self.requested_to = range.to;
            }
        }
    }

    fn active_filter_count(&self) -> usize {
        usize::from(self.status.is_some())
            + usize::from(self.requested_from.is_some() || self.requested_to.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_select_value() {
        let mut f = SchedulingRequestFilters::default();
        f.set_categorical(SchedulingRequestCategorical::Status, "Approved");
        assert_eq!(f.status, Some(RequestStatus::Approved));
        f.set_categorical(SchedulingRequestCategorical::Status, "");
        assert_eq!(f.status, None);
    }

    #[test]
    fn test_active_filter_count_treats_range_as_one() {
        let mut f = SchedulingRequestFilters::default();
        assert_eq!(f.active_filter_count(), 0);
        f.set_date_range(
            SchedulingRequestDateRange::Requested,
            DateRange::new(NaiveDate::from_ymd_opt(2024, 1, 1), NaiveDate::from_ymd_opt(2024, 1, 31)),
        );
        f.set_categorical(SchedulingRequestCategorical::Status, "Pending");
        assert_eq!(f.active_filter_count(), 2);
    }

    #[test]
    fn test_newest_first_by_default() {
        let f = SchedulingRequestFilters::default();
        assert_eq!(f.sort(), (SchedulingRequestSortBy::RequestedAt, SortDirection::Desc));
    }
}
