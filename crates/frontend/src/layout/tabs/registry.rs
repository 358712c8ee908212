//! Tab content registry: the single place mapping a tab key to its screen.

use super::tab_labels::{
    parse_detail_id, CONTRACTING_TYPES, CONTRACTING_TYPE_DETAIL, CONTRACTING_TYPE_NEW,
    GENERATE_WORKING_HOURS, ROSTERS, SCHEDULING_REQUESTS, SCHEDULING_REQUEST_NEW,
};
use crate::domain::a004_contracting_type::ui::details::ContractingTypeDetails;
use crate::domain::a004_contracting_type::ui::list::ContractingTypeList;
use crate::domain::a005_roster::ui::list::RosterList;
use crate::domain::a006_scheduling_request::ui::details::SchedulingRequestForm;
use crate::domain::a006_scheduling_request::ui::list::SchedulingRequestList;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::not_found::NotFound;
use crate::usecases::u501_generate_working_hours::GenerateWorkingHoursView;
use contracts::domain::a004_contracting_type::aggregate::ContractingTypeId;
use contracts::domain::a005_roster::aggregate::RosterId;
use leptos::prelude::*;

/// Renders the screen of tab `key`. Detail screens get an `on_close` that
/// closes their own tab.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();
    let on_close = Callback::new(move |_| tabs_store.close_tab(&key_for_close));

    match key {
        CONTRACTING_TYPES => view! { <ContractingTypeList /> }.into_any(),
        CONTRACTING_TYPE_NEW => {
            view! { <ContractingTypeDetails id=None on_close=on_close /> }.into_any()
        }
        ROSTERS => view! { <RosterList /> }.into_any(),
        SCHEDULING_REQUESTS => view! { <SchedulingRequestList /> }.into_any(),
        SCHEDULING_REQUEST_NEW => view! { <SchedulingRequestForm on_close=on_close /> }.into_any(),
        k => {
            if let Some(id) = parse_detail_id(k, CONTRACTING_TYPE_DETAIL) {
                let id = Some(ContractingTypeId::new(id));
                return view! { <ContractingTypeDetails id=id on_close=on_close /> }.into_any();
            }
            if let Some(id) = parse_detail_id(k, GENERATE_WORKING_HOURS) {
                return view! { <GenerateWorkingHoursView roster_id=RosterId::new(id) on_close=on_close /> }
                    .into_any();
            }
            log::warn!("unknown tab key: {}", k);
            view! { <NotFound on_back=on_close /> }.into_any()
        }
    }
}
