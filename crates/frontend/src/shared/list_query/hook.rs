//! Binds a [`ListQueryController`] to a list screen.
//!
//! The controller lives in a local `StoredValue` owned by the screen. Its
//! listener only bumps a reload counter, and an effect on that counter starts
//! the fetch, so the controller is never re-entered from its own callback.
//! Every operation republishes the read model into a signal for rendering.

use super::controller::{ListModel, ListQueryController};
use super::persistence::{restore_filters, save_preferences, ListPreferences};
use crate::shared::debounce::BrowserTimers;
use contracts::shared::api_response::{ApiError, ListPage};
use contracts::shared::list_query::{DateRange, ListFilters, NumericRange};
use leptos::prelude::*;
use std::future::Future;

pub struct ListQuery<F: ListFilters, T: 'static> {
    controller: StoredValue<ListQueryController<F, T>, LocalStorage>,
    model: RwSignal<ListModel<F, T>>,
    reload: RwSignal<u64>,
}

impl<F: ListFilters, T: 'static> Clone for ListQuery<F, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: ListFilters, T: 'static> Copy for ListQuery<F, T> {}

/// Creates the query state of a list screen and loads the first page.
///
/// Page size and sort order are restored from and saved to `localStorage`
/// under `storage_key`. `fetch` receives the filter snapshot to load.
pub fn use_list_query<F, T, Fut>(
    storage_key: &'static str,
    fetch: impl Fn(F) -> Fut + 'static,
) -> ListQuery<F, T>
where
    F: ListFilters + Send + Sync,
    T: Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<ListPage<T>, ApiError>> + 'static,
{
    let controller =
        ListQueryController::<F, T>::with_filters(restore_filters::<F>(storage_key), BrowserTimers);

    let reload = RwSignal::new(0u64);
    controller.on_change(move |filters: &F| {
        save_preferences(storage_key, &ListPreferences::from_filters(filters));
        reload.update(|n| *n += 1);
    });

    let query = ListQuery {
        model: RwSignal::new(controller.read_model()),
        controller: StoredValue::new_local(controller),
        reload,
    };

    Effect::new(move |_| {
        reload.track();
        query.load(&fetch);
    });

    on_cleanup(move || query.dispose());

    query
}

impl<F, T> ListQuery<F, T>
where
    F: ListFilters + Send + Sync,
    T: Clone + Send + Sync + 'static,
{
    fn load<Fut>(self, fetch: &impl Fn(F) -> Fut)
    where
        Fut: Future<Output = Result<ListPage<T>, ApiError>> + 'static,
    {
        let ticket = self
            .controller
            .try_update_value(|c| (!c.is_disposed()).then(|| c.begin_fetch()))
            .flatten();
        let Some(ticket) = ticket else { return };
        self.publish();

        let request = fetch(ticket.filters.clone());
        wasm_bindgen_futures::spawn_local(async move {
            let result = request.await;
            let applied = self
                .controller
                .try_update_value(|c| c.complete_fetch(ticket, result))
                .unwrap_or(false);
            if applied {
                self.publish();
            }
        });
    }

    fn publish(self) {
        if let Some(model) = self.controller.try_with_value(|c| c.read_model()) {
            self.model.set(model);
        }
    }

    fn run(self, op: impl FnOnce(&mut ListQueryController<F, T>)) {
        if self.controller.try_update_value(op).is_some() {
            self.publish();
        }
    }

    /// Tracked read of the current model
    pub fn with<R>(&self, f: impl FnOnce(&ListModel<F, T>) -> R) -> R {
        self.model.with(f)
    }

    pub fn with_untracked<R>(&self, f: impl FnOnce(&ListModel<F, T>) -> R) -> R {
        self.model.with_untracked(f)
    }

    pub fn model(&self) -> ReadSignal<ListModel<F, T>> {
        self.model.read_only()
    }

    pub fn set_search(&self, value: String) {
        self.run(|c| c.set_search(value));
    }

    pub fn set_categorical(&self, key: F::CategoricalKey, value: String) {
        self.run(|c| c.set_categorical_filter(key, &value));
    }

    pub fn set_range(&self, key: F::RangeKey, range: NumericRange) {
        self.run(|c| c.set_range_filter(key, range));
    }

    pub fn set_date_range(&self, key: F::DateRangeKey, range: DateRange) {
        self.run(|c| c.set_date_range_filter(key, range));
    }

    pub fn toggle_sort(&self, sort_by: F::SortKey) {
        self.run(|c| c.toggle_sort(sort_by));
    }

    pub fn set_page(&self, page: u32) {
        self.run(|c| c.set_page(page));
    }

    pub fn set_page_size(&self, page_size: u32) {
        self.run(|c| c.set_page_size(page_size));
    }

    pub fn clear_filters(&self) {
        self.run(|c| c.clear_filters());
    }

    pub fn dismiss_error(&self) {
        self.run(|c| c.dismiss_error());
    }

    /// Reloads the current page with unchanged filters
    pub fn refresh(&self) {
        self.reload.update(|n| *n += 1);
    }

    pub fn dispose(&self) {
        self.controller.try_update_value(|c| c.dispose());
    }

    pub fn visible_page_numbers(&self, max_visible: u32) -> Vec<u32> {
        self.model.with(|m| m.pagination.visible_page_numbers(max_visible))
    }

    pub fn active_filter_count(&self) -> usize {
        self.model.with(|m| m.filters.active_filter_count())
    }
}
