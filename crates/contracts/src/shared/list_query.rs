//! Filter records of server-paginated list endpoints.
//!
//! Every record serializes straight into the GET query string: populated
//! fields become parameters, empty ones are skipped.

use crate::enums::SortDirection;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

/// Inclusive numeric range; `None` leaves that side unbounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericRange {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl NumericRange {
    pub fn new(min: Option<u32>, max: Option<u32>) -> Self {
        Self { min, max }
    }
}

/// Inclusive date range; `None` leaves that side unbounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }
}

/// Key type for filter kinds a resource does not have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoFilter {}

/// A resource's filter + pagination record.
///
/// Setters here only store values; resetting the page on filter changes is
/// the controller's job.
pub trait ListFilters: Clone + Default + PartialEq + Serialize + 'static {
    type SortKey: Copy + PartialEq + std::fmt::Debug + Serialize + DeserializeOwned + 'static;
    type CategoricalKey: Copy + std::fmt::Debug + 'static;
    type RangeKey: Copy + std::fmt::Debug + 'static;
    type DateRangeKey: Copy + std::fmt::Debug + 'static;

    fn page(&self) -> u32;
    fn set_page(&mut self, page: u32);

    fn page_size(&self) -> u32;
    fn set_page_size(&mut self, page_size: u32);

    fn search(&self) -> &str;
    fn set_search(&mut self, search: String);

    fn sort(&self) -> (Self::SortKey, SortDirection);
    fn set_sort(&mut self, sort_by: Self::SortKey, direction: SortDirection);

    /// `value` is the raw select value; an empty string clears the filter
    fn set_categorical(&mut self, key: Self::CategoricalKey, value: &str);
    fn set_range(&mut self, key: Self::RangeKey, range: NumericRange);
    fn set_date_range(&mut self, key: Self::DateRangeKey, range: DateRange);

    /// Number of populated filters, search and sort excluded
    fn active_filter_count(&self) -> usize;

    /// Defaults everywhere except the page size
    fn cleared(&self) -> Self {
        let mut cleared = Self::default();
        cleared.set_page_size(self.page_size());
        cleared.set_page(1);
        cleared
    }
}

pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Parses a tri-state select value: "true", "false" or anything else for "any"
pub fn parse_optional_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

pub fn parse_optional_i64(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

pub(crate) fn default_page() -> u32 {
    1
}

pub(crate) fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_optional_bool() {
        assert_eq!(parse_optional_bool("true"), Some(true));
        assert_eq!(parse_optional_bool(" false "), Some(false));
        assert_eq!(parse_optional_bool(""), None);
        assert_eq!(parse_optional_bool("maybe"), None);
    }

    #[test]
    fn test_parse_optional_i64() {
        assert_eq!(parse_optional_i64("12"), Some(12));
        assert_eq!(parse_optional_i64(""), None);
    }
}
