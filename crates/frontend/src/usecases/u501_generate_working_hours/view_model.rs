use super::api;
use crate::domain::a005_roster::api as roster_api;
use crate::shared::selection::HierarchicalSelection;
use contracts::domain::a001_department::aggregate::DepartmentId;
use contracts::domain::a002_shift_hours_type::aggregate::ShiftHoursTypeId;
use contracts::domain::a003_scientific_degree::aggregate::ScientificDegreeId;
use contracts::domain::a005_roster::aggregate::{Roster, RosterId};
use contracts::shared::api_response::ApiError;
use contracts::usecases::u501_generate_working_hours::{
    GenerateWorkingHoursResult, WorkingHoursTree,
};
use leptos::prelude::*;

/// ViewModel for generating the working hours of one roster
#[derive(Clone, Copy)]
pub struct GenerateWorkingHoursVm {
    pub roster_id: RosterId,
    pub roster: RwSignal<Option<Roster>>,
    pub tree: RwSignal<WorkingHoursTree>,
    pub selection: RwSignal<HierarchicalSelection>,
    pub overwrite_existing: RwSignal<bool>,
    pub result: RwSignal<Option<GenerateWorkingHoursResult>>,
    pub api_error: RwSignal<Option<ApiError>>,
    pub not_found: RwSignal<bool>,
    pub is_loading: RwSignal<bool>,
    pub is_generating: RwSignal<bool>,
}

impl GenerateWorkingHoursVm {
    pub fn new(roster_id: RosterId) -> Self {
        Self {
            roster_id,
            roster: RwSignal::new(None),
            tree: RwSignal::new(WorkingHoursTree::default()),
            selection: RwSignal::new(HierarchicalSelection::new()),
            overwrite_existing: RwSignal::new(false),
            result: RwSignal::new(None),
            api_error: RwSignal::new(None),
            not_found: RwSignal::new(false),
            is_loading: RwSignal::new(false),
            is_generating: RwSignal::new(false),
        }
    }

    /// Loads the roster header and the tree
    pub fn load(&self) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match roster_api::fetch_by_id(vm.roster_id).await {
                Ok(roster) => vm.roster.set(Some(roster)),
                Err(e) if e.is_not_found() => {
                    log::debug!("roster {} not found", vm.roster_id);
                    vm.not_found.set(true);
                    return;
                }
                Err(e) => log::warn!("roster {} header failed: {}", vm.roster_id, e),
            }
            vm.reload_tree();
        });
    }

    /// Fetches the tree again and drops selected ids it no longer contains
    pub fn reload_tree(&self) {
        let vm = *self;
        vm.is_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_tree(vm.roster_id).await {
                Ok(tree) => {
                    vm.selection.update(|s| s.reconcile_with_tree(&tree));
                    vm.tree.set(tree);
                }
                Err(e) if e.is_not_found() => vm.not_found.set(true),
                Err(e) => vm.api_error.set(Some(e)),
            }
            vm.is_loading.set(false);
        });
    }

    pub fn toggle_department(&self, dept_id: DepartmentId) {
        let tree = self.tree;
        self.selection
            .update(|s| tree.with_untracked(|t| s.toggle_department(dept_id, t)));
    }

    pub fn toggle_shift(&self, shift_id: ShiftHoursTypeId, dept_id: DepartmentId) {
        let tree = self.tree;
        self.selection
            .update(|s| tree.with_untracked(|t| s.toggle_shift(shift_id, dept_id, t)));
    }

    pub fn toggle_degree(
        &self,
        degree_id: ScientificDegreeId,
        shift_id: ShiftHoursTypeId,
        dept_id: DepartmentId,
    ) {
        self.selection
            .update(|s| s.toggle_degree(degree_id, shift_id, dept_id));
    }

    pub fn clear_selection(&self) {
        self.selection.update(HierarchicalSelection::clear);
    }

    /// Sends the current selection; an empty selection generates everything
    pub fn generate_command(&self) {
        if self.is_generating.get_untracked() {
            return;
        }
        let request = self.selection.with_untracked(|s| {
            s.build_request(self.roster_id, self.overwrite_existing.get_untracked())
        });
        log::info!(
            "generating working hours for roster {} (all: {})",
            self.roster_id,
            request.scope.is_all()
        );

        let vm = *self;
        vm.is_generating.set(true);
        vm.result.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::generate(&request).await {
                Ok(result) => {
                    log::info!(
                        "working hours generated: {} processed, {:.1}% complete",
                        result.total_processed(),
                        result.completion_percentage
                    );
                    vm.result.set(Some(result));
                    vm.reload_tree();
                }
                Err(e) => vm.api_error.set(Some(e)),
            }
            vm.is_generating.set(false);
        });
    }
}
