use serde::{Deserialize, Serialize};

/// Pagination block of a list response. Server-authoritative: the client
/// mirrors it verbatim and never recomputes counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginationMeta {
    /// 1-based page number
    pub page: u32,
    pub page_size: u32,
    pub total_count: u64,
    pub total_pages: u32,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_index: u64,
    pub end_index: u64,
}

impl PaginationMeta {
    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }

    /// Page numbers to render as buttons, centered on the current page
    pub fn visible_page_numbers(&self, max_visible: u32) -> Vec<u32> {
        visible_page_window(self.page, self.total_pages, max_visible)
    }
}

/// Contiguous window of at most `max_visible` page numbers around `current`,
/// clipped to `1..=total_pages`.
///
/// The window is first anchored at `current - max_visible / 2`; when it runs
/// into the last page, the start is pulled back so the window keeps its full
/// length where possible.
pub fn visible_page_window(current: u32, total_pages: u32, max_visible: u32) -> Vec<u32> {
    if total_pages == 0 || max_visible == 0 {
        return Vec::new();
    }

    let start = current.saturating_sub(max_visible / 2).max(1);
    let end = total_pages.min(start.saturating_add(max_visible - 1));
    let start = (end + 1).saturating_sub(max_visible).max(1);

    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_centered() {
        assert_eq!(visible_page_window(10, 20, 5), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_window_fewer_pages_than_slots() {
        assert_eq!(visible_page_window(1, 3, 5), vec![1, 2, 3]);
    }

    #[test]
    fn test_window_reflows_at_upper_bound() {
        assert_eq!(visible_page_window(20, 20, 5), vec![16, 17, 18, 19, 20]);
        assert_eq!(visible_page_window(19, 20, 5), vec![16, 17, 18, 19, 20]);
    }

    #[test]
    fn test_window_at_lower_bound() {
        assert_eq!(visible_page_window(1, 20, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(visible_page_window(2, 20, 4), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_window_no_pages() {
        assert!(visible_page_window(1, 0, 5).is_empty());
        assert!(visible_page_window(3, 10, 0).is_empty());
    }

    #[test]
    fn test_window_out_of_range_page_is_not_clamped_away() {
        assert_eq!(visible_page_window(25, 20, 5), vec![16, 17, 18, 19, 20]);
    }

    #[test]
    fn test_meta_deserializes_camel_case() {
        let json = r#"{
            "page": 2, "pageSize": 10, "totalCount": 35, "totalPages": 4,
            "hasNextPage": true, "hasPreviousPage": true, "startIndex": 11, "endIndex": 20
        }"#;
        let meta: PaginationMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.total_pages, 4);
        assert_eq!(meta.start_index, 11);
        assert_eq!(meta.visible_page_numbers(5), vec![1, 2, 3, 4]);
    }
}
