//! Filter and pagination state of one server-paginated list.
//!
//! The controller is a plain state machine: every filter mutation resets the
//! page and hands the new filter snapshot to the registered listener, which
//! is expected to issue the fetch. Results come back through
//! [`ListQueryController::complete_fetch`] and are applied only if no newer
//! fetch has started since.

use crate::shared::debounce::{BrowserTimers, Debouncer, TimerScheduler, SEARCH_DEBOUNCE_MS};
use contracts::enums::SortDirection;
use contracts::shared::api_response::{ApiError, ListPage};
use contracts::shared::list_query::{DateRange, ListFilters, NumericRange};
use contracts::shared::pagination::PaginationMeta;
use std::cell::RefCell;
use std::rc::Rc;

/// Proof that a fetch was started for `filters`
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket<F> {
    seq: u64,
    pub filters: F,
}

impl<F> FetchTicket<F> {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Everything a list screen renders
#[derive(Debug, Clone, PartialEq)]
pub struct ListModel<F, T> {
    pub filters: F,
    /// Search box text; runs ahead of `filters.search` while debouncing
    pub search_input: String,
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
    pub is_fetching: bool,
    pub last_error: Option<ApiError>,
}

type Listener<F> = Rc<dyn Fn(&F)>;

struct ControllerState<F, T> {
    filters: F,
    search_input: String,
    items: Vec<T>,
    pagination: PaginationMeta,
    is_fetching: bool,
    last_error: Option<ApiError>,
    latest_seq: u64,
    disposed: bool,
    listener: Option<Listener<F>>,
}

pub struct ListQueryController<F: ListFilters, T: 'static, S: TimerScheduler = BrowserTimers> {
    state: Rc<RefCell<ControllerState<F, T>>>,
    search: Debouncer<String, S>,
}

impl<F: ListFilters, T: 'static, S: TimerScheduler> ListQueryController<F, T, S> {
    pub fn new(scheduler: S) -> Self {
        Self::with_filters(F::default(), scheduler)
    }

    /// Starts from `filters`, e.g. defaults with restored preferences applied
    pub fn with_filters(filters: F, scheduler: S) -> Self {
        let search_input = filters.search().to_string();
        let state = Rc::new(RefCell::new(ControllerState {
            filters,
            search_input,
            items: Vec::new(),
            pagination: PaginationMeta::default(),
            is_fetching: false,
            last_error: None,
            latest_seq: 0,
            disposed: false,
            listener: None,
        }));

        let debounced_state = Rc::clone(&state);
        let search = Debouncer::new(SEARCH_DEBOUNCE_MS, scheduler, move |value: String| {
            apply_and_emit(&debounced_state, true, |f| f.set_search(value));
        });

        Self { state, search }
    }

    /// Registers the receiver of effective filter snapshots, replacing any previous one
    pub fn on_change(&self, listener: impl Fn(&F) + 'static) {
        self.state.borrow_mut().listener = Some(Rc::new(listener));
    }

    pub fn filters(&self) -> F {
        self.state.borrow().filters.clone()
    }

    pub fn search_input(&self) -> String {
        self.state.borrow().search_input.clone()
    }

    pub fn pagination(&self) -> PaginationMeta {
        self.state.borrow().pagination.clone()
    }

    pub fn is_fetching(&self) -> bool {
        self.state.borrow().is_fetching
    }

    pub fn last_error(&self) -> Option<ApiError> {
        self.state.borrow().last_error.clone()
    }

    pub fn with_items<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.state.borrow().items)
    }

    pub fn is_search_pending(&self) -> bool {
        self.search.is_pending()
    }

    pub fn active_filter_count(&self) -> usize {
        self.state.borrow().filters.active_filter_count()
    }

    /// Shows `value` right away; the filter follows once typing pauses
    pub fn set_search(&mut self, value: impl Into<String>) {
        let value = value.into();
        {
            let mut st = self.state.borrow_mut();
            if st.disposed {
                return;
            }
            st.search_input = value.clone();
        }
        self.search.call(value);
    }

    pub fn set_categorical_filter(&mut self, key: F::CategoricalKey, value: &str) {
        apply_and_emit(&self.state, true, |f| f.set_categorical(key, value));
    }

    pub fn set_range_filter(&mut self, key: F::RangeKey, range: NumericRange) {
        apply_and_emit(&self.state, true, |f| f.set_range(key, range));
    }

    pub fn set_date_range_filter(&mut self, key: F::DateRangeKey, range: DateRange) {
        apply_and_emit(&self.state, true, |f| f.set_date_range(key, range));
    }

    pub fn set_sort(&mut self, sort_by: F::SortKey, direction: SortDirection) {
        apply_and_emit(&self.state, true, |f| f.set_sort(sort_by, direction));
    }

    /// Same column flips the direction, another column starts ascending
    pub fn toggle_sort(&mut self, sort_by: F::SortKey) {
        apply_and_emit(&self.state, true, |f| {
            let (current, direction) = f.sort();
            let direction = if current == sort_by {
                direction.toggled()
            } else {
                SortDirection::Asc
            };
            f.set_sort(sort_by, direction);
        });
    }

    /// Page navigation, passed through as is
    pub fn set_page(&mut self, page: u32) {
        apply_and_emit(&self.state, false, |f| f.set_page(page));
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        apply_and_emit(&self.state, true, |f| f.set_page_size(page_size));
    }

    /// Back to defaults, keeping the page size. Drops a search still being typed.
    pub fn clear_filters(&mut self) {
        self.search.cancel();
        self.state.borrow_mut().search_input.clear();
        apply_and_emit(&self.state, false, |f| *f = f.cleared());
    }

    /// Mirrors the server's pagination block
    pub fn reconcile_pagination_meta(&mut self, meta: PaginationMeta) {
        self.state.borrow_mut().pagination = meta;
    }

    /// Page buttons around the server's current page, not the requested one
    pub fn visible_page_numbers(&self, max_visible: u32) -> Vec<u32> {
        let st = self.state.borrow();
        st.pagination.visible_page_numbers(max_visible)
    }

    /// Marks a fetch for the current filters as started. Any ticket issued
    /// earlier becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket<F> {
        let mut st = self.state.borrow_mut();
        st.latest_seq += 1;
        st.is_fetching = !st.disposed;
        FetchTicket {
            seq: st.latest_seq,
            filters: st.filters.clone(),
        }
    }

    /// Applies a fetch result. Returns `false` when the result was discarded
    /// because a newer fetch started or the controller was disposed.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket<F>,
        result: Result<ListPage<T>, ApiError>,
    ) -> bool {
        let mut st = self.state.borrow_mut();
        if st.disposed || ticket.seq != st.latest_seq {
            log::debug!(
                "discarding stale list response #{} (latest #{})",
                ticket.seq,
                st.latest_seq
            );
            return false;
        }

        st.is_fetching = false;
        match result {
            Ok(page) => {
                st.items = page.items;
                st.pagination = page.pagination;
                st.last_error = None;
            }
            Err(e) => {
                log::warn!("list fetch failed: {}", e);
                st.items.clear();
                st.pagination = PaginationMeta::default();
                st.last_error = Some(e);
            }
        }
        true
    }

    pub fn dismiss_error(&mut self) {
        self.state.borrow_mut().last_error = None;
    }

    /// Stops all further activity: the pending search is cancelled and
    /// in-flight fetches will be discarded.
    pub fn dispose(&mut self) {
        self.search.cancel();
        let mut st = self.state.borrow_mut();
        st.disposed = true;
        st.is_fetching = false;
        st.latest_seq += 1;
        st.listener = None;
    }

    pub fn is_disposed(&self) -> bool {
        self.state.borrow().disposed
    }
}

impl<F: ListFilters, T: Clone + 'static, S: TimerScheduler> ListQueryController<F, T, S> {
    pub fn read_model(&self) -> ListModel<F, T> {
        let st = self.state.borrow();
        ListModel {
            filters: st.filters.clone(),
            search_input: st.search_input.clone(),
            items: st.items.clone(),
            pagination: st.pagination.clone(),
            is_fetching: st.is_fetching,
            last_error: st.last_error.clone(),
        }
    }
}

/// Mutates the filters and notifies the listener if they changed. The state
/// borrow is released before the listener runs so it may call back in.
fn apply_and_emit<F: ListFilters, T>(
    state: &Rc<RefCell<ControllerState<F, T>>>,
    reset_page: bool,
    mutate: impl FnOnce(&mut F),
) {
    let (snapshot, listener) = {
        let mut st = state.borrow_mut();
        if st.disposed {
            return;
        }
        let before = st.filters.clone();
        mutate(&mut st.filters);
        if reset_page {
            st.filters.set_page(1);
        }
        if st.filters == before {
            return;
        }
        (st.filters.clone(), st.listener.clone())
    };

    if let Some(listener) = listener {
        listener(&snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::debounce::testing::ManualTimers;
    use contracts::domain::a004_contracting_type::filters::{
        ContractingTypeCategorical, ContractingTypeDateRange, ContractingTypeFilters,
        ContractingTypeRange, ContractingTypeSortBy,
    };
    use chrono::NaiveDate;

    type Controller = ListQueryController<ContractingTypeFilters, u32, ManualTimers>;

    struct Harness {
        timers: ManualTimers,
        controller: Controller,
        emitted: Rc<RefCell<Vec<ContractingTypeFilters>>>,
    }

    fn harness() -> Harness {
        let timers = ManualTimers::new();
        let controller = Controller::new(timers.clone());
        let emitted = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&emitted);
        controller.on_change(move |f| sink.borrow_mut().push(f.clone()));
        Harness {
            timers,
            controller,
            emitted,
        }
    }

    fn meta(page: u32, total_pages: u32) -> PaginationMeta {
        PaginationMeta {
            page,
            page_size: 10,
            total_count: u64::from(total_pages) * 10,
            total_pages,
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
            start_index: u64::from(page - 1) * 10 + 1,
            end_index: u64::from(page) * 10,
        }
    }

    fn page_of(items: Vec<u32>, page: u32, total_pages: u32) -> ListPage<u32> {
        ListPage {
            items,
            pagination: meta(page, total_pages),
        }
    }

    #[test]
    fn test_search_burst_emits_once() {
        let mut h = harness();
        h.controller.set_search("a");
        h.timers.advance(30);
        h.controller.set_search("ab");
        h.timers.advance(30);
        h.controller.set_search("abc");
        assert_eq!(h.controller.search_input(), "abc");
        assert!(h.controller.filters().search.is_empty());

        h.timers.advance(SEARCH_DEBOUNCE_MS as u64);

        let emitted = h.emitted.borrow();
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].search, "abc");
        assert_eq!(h.controller.filters().search, "abc");
    }

    #[test]
    fn test_filter_changes_reset_page() {
        let mut h = harness();

        h.controller.set_page(5);
        h.controller
            .set_categorical_filter(ContractingTypeCategorical::AllowOvertimeHours, "true");
        assert_eq!(h.controller.filters().page, 1);

        h.controller.set_page(5);
        h.controller.set_range_filter(
            ContractingTypeRange::HoursPerWeek,
            NumericRange::new(Some(20), Some(40)),
        );
        assert_eq!(h.controller.filters().page, 1);

        h.controller.set_page(5);
        h.controller
            .set_sort(ContractingTypeSortBy::HoursPerWeek, SortDirection::Desc);
        assert_eq!(h.controller.filters().page, 1);

        h.controller.set_page(5);
        h.controller.set_date_range_filter(
            ContractingTypeDateRange::CreatedAt,
            DateRange::new(NaiveDate::from_ymd_opt(2024, 1, 1), None),
        );
        assert_eq!(h.controller.filters().page, 1);

        h.controller.set_page(5);
        h.controller.set_search("icu");
        h.timers.advance(500);
        assert_eq!(h.controller.filters().page, 1);

        h.controller.set_page(5);
        assert_eq!(h.controller.filters().page, 5);
    }

    #[test]
    fn test_page_size_then_page_then_search() {
        let mut h = harness();
        assert_eq!(h.controller.filters().page_size, 10);

        h.controller.set_page_size(20);
        let f = h.controller.filters();
        assert_eq!((f.page_size, f.page), (20, 1));

        h.controller.set_page(3);
        assert_eq!(h.controller.filters().page, 3);

        h.controller.set_search("x");
        h.timers.advance(501);
        assert_eq!(h.controller.filters().page, 1);
        assert_eq!(h.controller.filters().page_size, 20);
    }

    #[test]
    fn test_every_change_emits_full_snapshot() {
        let mut h = harness();
        h.controller
            .set_categorical_filter(ContractingTypeCategorical::IsActive, "true");
        h.controller.set_page(2);

        let emitted = h.emitted.borrow();
        assert_eq!(emitted.len(), 2);
        assert_eq!(emitted[1].is_active, Some(true));
        assert_eq!(emitted[1].page, 2);
    }

    #[test]
    fn test_unchanged_filters_do_not_emit() {
        let mut h = harness();
        h.controller.set_page(1);
        h.controller
            .set_categorical_filter(ContractingTypeCategorical::IsActive, "");
        assert!(h.emitted.borrow().is_empty());
    }

    #[test]
    fn test_toggle_sort() {
        let mut h = harness();
        h.controller.toggle_sort(ContractingTypeSortBy::Name);
        assert_eq!(
            h.controller.filters().sort(),
            (ContractingTypeSortBy::Name, SortDirection::Desc)
        );
        h.controller.toggle_sort(ContractingTypeSortBy::CreatedAt);
        assert_eq!(
            h.controller.filters().sort(),
            (ContractingTypeSortBy::CreatedAt, SortDirection::Asc)
        );
    }

    #[test]
    fn test_clear_filters_keeps_page_size_and_cancels_search() {
        let mut h = harness();
        h.controller.set_page_size(50);
        h.controller
            .set_categorical_filter(ContractingTypeCategorical::IsActive, "false");
        h.controller.set_page(4);
        h.controller.set_search("pending");

        h.controller.clear_filters();
        h.timers.advance(1_000);

        let f = h.controller.filters();
        assert_eq!(f, ContractingTypeFilters { page_size: 50, ..Default::default() });
        assert!(h.controller.search_input().is_empty());
        assert!(!h.controller.is_search_pending());
    }

    #[test]
    fn test_listener_may_start_fetch() {
        let timers = ManualTimers::new();
        let controller = Rc::new(RefCell::new(Controller::new(timers.clone())));
        let tickets = Rc::new(RefCell::new(Vec::new()));

        let weak = Rc::downgrade(&controller);
        let sink = Rc::clone(&tickets);
        controller.borrow().on_change(move |_| {
            // the debounced emission happens outside any controller borrow
            if let Some(c) = weak.upgrade() {
                sink.borrow_mut().push(c.borrow_mut().begin_fetch());
            }
        });

        controller.borrow_mut().set_search("er");
        timers.advance(500);
        assert_eq!(tickets.borrow().len(), 1);
        assert_eq!(tickets.borrow()[0].filters.search, "er");
    }

    #[test]
    fn test_complete_fetch_replaces_items_and_meta() {
        let mut h = harness();
        let ticket = h.controller.begin_fetch();
        assert!(h.controller.is_fetching());

        assert!(h.controller.complete_fetch(ticket, Ok(page_of(vec![1, 2, 3], 1, 4))));
        assert!(!h.controller.is_fetching());
        assert_eq!(h.controller.with_items(|i| i.to_vec()), vec![1, 2, 3]);
        assert_eq!(h.controller.pagination().total_pages, 4);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut h = harness();
        let first = h.controller.begin_fetch();
        h.controller.set_page(2);
        let second = h.controller.begin_fetch();

        assert!(h.controller.complete_fetch(second, Ok(page_of(vec![11, 12], 2, 3))));
        assert!(!h.controller.complete_fetch(first, Ok(page_of(vec![1, 2], 1, 3))));

        assert_eq!(h.controller.with_items(|i| i.to_vec()), vec![11, 12]);
        assert_eq!(h.controller.pagination().page, 2);
    }

    #[test]
    fn test_error_clears_items_and_keeps_raw_error() {
        let mut h = harness();
        let t = h.controller.begin_fetch();
        h.controller.complete_fetch(t, Ok(page_of(vec![1], 1, 1)));

        let t = h.controller.begin_fetch();
        h.controller.complete_fetch(t, Err(ApiError::transport("connection refused")));

        assert!(h.controller.with_items(|i| i.is_empty()));
        assert!(h.controller.pagination().is_empty());
        let err = h.controller.last_error().unwrap();
        assert_eq!(err.errors, vec!["connection refused".to_string()]);

        h.controller.dismiss_error();
        assert!(h.controller.last_error().is_none());
    }

    #[test]
    fn test_dispose_cancels_search_and_in_flight_fetch() {
        let mut h = harness();
        let ticket = h.controller.begin_fetch();
        h.controller.set_search("late");

        h.controller.dispose();
        h.timers.advance(1_000);

        assert!(h.emitted.borrow().is_empty());
        assert!(!h.controller.complete_fetch(ticket, Ok(page_of(vec![9], 1, 1))));
        assert!(h.controller.with_items(|i| i.is_empty()));
        assert!(h.controller.is_disposed());

        h.controller.set_page(3);
        assert_eq!(h.controller.filters().page, 1);
    }

    #[test]
    fn test_visible_pages_follow_server_page() {
        let mut h = harness();
        h.controller.reconcile_pagination_meta(meta(10, 20));
        assert_eq!(h.controller.visible_page_numbers(5), vec![8, 9, 10, 11, 12]);

        h.controller.reconcile_pagination_meta(meta(20, 20));
        assert_eq!(h.controller.visible_page_numbers(5), vec![16, 17, 18, 19, 20]);

        h.controller.reconcile_pagination_meta(meta(1, 3));
        assert_eq!(h.controller.visible_page_numbers(5), vec![1, 2, 3]);
    }

    #[test]
    fn test_visible_pages_ignore_requested_page_until_server_replies() {
        let mut h = harness();
        h.controller.reconcile_pagination_meta(meta(1, 20));
        h.controller.set_page(10);
        assert_eq!(h.controller.visible_page_numbers(5), vec![1, 2, 3, 4, 5]);

        h.controller.reconcile_pagination_meta(meta(10, 20));
        assert_eq!(h.controller.visible_page_numbers(5), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_reconcile_overwrites_verbatim() {
        let mut h = harness();
        let server = PaginationMeta {
            page: 7,
            page_size: 10,
            total_count: 0,
            total_pages: 0,
            has_next_page: true,
            has_previous_page: false,
            start_index: 0,
            end_index: 0,
        };
        h.controller.reconcile_pagination_meta(server.clone());
        assert_eq!(h.controller.pagination(), server);
    }

    #[test]
    fn test_read_model_tracks_search_input() {
        let mut h = harness();
        h.controller.set_search("car");
        let model = h.controller.read_model();
        assert_eq!(model.search_input, "car");
        assert!(model.filters.search.is_empty());
        assert!(model.items.is_empty());
    }

    #[test]
    fn test_with_filters_restores_search_text() {
        let filters = ContractingTypeFilters {
            search: "icu".into(),
            page_size: 20,
            ..Default::default()
        };
        let c = Controller::with_filters(filters, ManualTimers::new());
        assert_eq!(c.search_input(), "icu");
        assert_eq!(c.filters().page_size, 20);
        assert_eq!(c.active_filter_count(), 0);
    }
}
