//! Sortable table header cell for server-sorted lists
//!
//! ```ignore
//! <SortableHeaderCell
//!     label=t("roster.title")
//!     column=RosterSortBy::Title
//!     current=Signal::derive(move || query.with(|m| m.filters.sort()))
//!     on_sort=Callback::new(move |col| query.toggle_sort(col))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::enums::SortDirection;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell<K, L>(
    /// Header text, re-rendered on language change
    label: L,
    /// Sort key of this column
    column: K,
    /// Current sort key and direction
    #[prop(into)]
    current: Signal<(K, SortDirection)>,
    on_sort: Callback<K>,
    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView
where
    K: Copy + PartialEq + Send + Sync + 'static,
    L: Fn() -> String + Send + Sync + 'static,
{
    view! {
        <TableHeaderCell resizable=true min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(column)
            >
                {label}
                <span class=move || get_sort_class(current.get(), column)>
                    {move || get_sort_indicator(current.get(), column)}
                </span>
            </div>
        </TableHeaderCell>
    }
}
