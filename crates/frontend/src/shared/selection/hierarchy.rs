//! Department → shift → scientific degree selection used to scope working
//! hours generation.
//!
//! Selecting a node also selects its ancestors. Deselecting a department or a
//! shift clears its descendants, taken from the tree passed to the call.
//! Deselecting a single degree leaves its ancestors selected.

use super::set_ops;
use contracts::domain::a001_department::aggregate::DepartmentId;
use contracts::domain::a002_shift_hours_type::aggregate::ShiftHoursTypeId;
use contracts::domain::a003_scientific_degree::aggregate::ScientificDegreeId;
use contracts::domain::a005_roster::aggregate::RosterId;
use contracts::usecases::u501_generate_working_hours::{
    DepartmentNode, GenerateWorkingHoursRequest, ShiftNode, WorkingHoursScope, WorkingHoursTree,
};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchicalSelection {
    departments: BTreeSet<DepartmentId>,
    shifts: BTreeSet<ShiftHoursTypeId>,
    degrees: BTreeSet<ScientificDegreeId>,
}

impl HierarchicalSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_department(&mut self, dept_id: DepartmentId, tree: &WorkingHoursTree) {
        if set_ops::toggle(&mut self.departments, dept_id) {
            return;
        }
        if let Some(dept) = tree.department(dept_id) {
            set_ops::remove_all(&mut self.shifts, dept.shift_ids());
            set_ops::remove_all(&mut self.degrees, dept.degree_ids());
        }
    }

    /// Toggling twice restores the previous state only when `dept_id` was
    /// already selected; otherwise the department stays selected.
    pub fn toggle_shift(
        &mut self,
        shift_id: ShiftHoursTypeId,
        dept_id: DepartmentId,
        tree: &WorkingHoursTree,
    ) {
        if set_ops::toggle(&mut self.shifts, shift_id) {
            self.departments.insert(dept_id);
            return;
        }
        if let Some(shift) = tree.shift(dept_id, shift_id) {
            set_ops::remove_all(&mut self.degrees, shift.degree_ids());
        }
    }

    /// Degrees have no descendants, so no tree is needed here. Toggling twice
    /// restores the previous state only when both ancestors were selected.
    pub fn toggle_degree(
        &mut self,
        degree_id: ScientificDegreeId,
        shift_id: ShiftHoursTypeId,
        dept_id: DepartmentId,
    ) {
        if set_ops::toggle(&mut self.degrees, degree_id) {
            self.shifts.insert(shift_id);
            self.departments.insert(dept_id);
        }
    }

    pub fn is_department_selected(&self, id: DepartmentId) -> bool {
        self.departments.contains(&id)
    }

    pub fn is_shift_selected(&self, id: ShiftHoursTypeId) -> bool {
        self.shifts.contains(&id)
    }

    pub fn is_degree_selected(&self, id: ScientificDegreeId) -> bool {
        self.degrees.contains(&id)
    }

    /// Selected, and every shift of the department selected
    pub fn is_department_fully_selected(&self, dept: &DepartmentNode) -> bool {
        self.is_department_selected(dept.department_id)
            && set_ops::contains_all(&self.shifts, dept.shift_ids())
    }

    /// Selected, and every degree of the shift selected
    pub fn is_shift_fully_selected(&self, shift: &ShiftNode) -> bool {
        self.is_shift_selected(shift.shift_hours_type_id)
            && set_ops::contains_all(&self.degrees, shift.degree_ids())
    }

    /// Indeterminate checkbox state
    pub fn is_department_partially_selected(&self, dept: &DepartmentNode) -> bool {
        self.is_department_selected(dept.department_id) && !self.is_department_fully_selected(dept)
    }

    pub fn is_shift_partially_selected(&self, shift: &ShiftNode) -> bool {
        self.is_shift_selected(shift.shift_hours_type_id) && !self.is_shift_fully_selected(shift)
    }

    pub fn selected_departments(&self) -> impl Iterator<Item = DepartmentId> + '_ {
        self.departments.iter().copied()
    }

    pub fn selected_shifts(&self) -> impl Iterator<Item = ShiftHoursTypeId> + '_ {
        self.shifts.iter().copied()
    }

    pub fn selected_degrees(&self) -> impl Iterator<Item = ScientificDegreeId> + '_ {
        self.degrees.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty() && self.shifts.is_empty() && self.degrees.is_empty()
    }

    pub fn clear(&mut self) {
        self.departments.clear();
        self.shifts.clear();
        self.degrees.clear();
    }

    /// Empty levels are sent as `null`, meaning "all"
    pub fn build_submission_payload(&self) -> WorkingHoursScope {
        WorkingHoursScope {
            department_ids: set_ops::to_payload(&self.departments),
            shift_hours_type_ids: set_ops::to_payload(&self.shifts),
            scientific_degree_ids: set_ops::to_payload(&self.degrees),
        }
    }

    pub fn build_request(
        &self,
        roster_id: RosterId,
        overwrite_existing: bool,
    ) -> GenerateWorkingHoursRequest {
        GenerateWorkingHoursRequest {
            roster_id,
            scope: self.build_submission_payload(),
            overwrite_existing,
        }
    }

    /// Brings the selection in line with a freshly loaded tree.
    ///
    /// Ids missing from the tree are dropped. A shift survives only if it sits
    /// under a selected department, and a degree only if it sits under a
    /// selected shift of a selected department. Nothing is ever added.
    pub fn reconcile_with_tree(&mut self, tree: &WorkingHoursTree) {
        let departments = &self.departments;
        let live_departments: Vec<&DepartmentNode> = tree
            .departments
            .iter()
            .filter(|d| departments.contains(&d.department_id))
            .collect();

        let shifts: BTreeSet<ShiftHoursTypeId> = live_departments
            .iter()
            .flat_map(|d| d.shift_ids())
            .filter(|id| self.shifts.contains(id))
            .collect();

        let degrees: BTreeSet<ScientificDegreeId> = live_departments
            .iter()
            .flat_map(|d| d.shifts.iter())
            .filter(|s| shifts.contains(&s.shift_hours_type_id))
            .flat_map(|s| s.degree_ids())
            .filter(|id| self.degrees.contains(id))
            .collect();

        let departments: BTreeSet<DepartmentId> =
            live_departments.iter().map(|d| d.department_id).collect();

        let dropped = (self.departments.len() - departments.len())
            + (self.shifts.len() - shifts.len())
            + (self.degrees.len() - degrees.len());
        if dropped > 0 {
            log::debug!("selection reconciled with reloaded tree, {} ids dropped", dropped);
        }

        self.departments = departments;
        self.shifts = shifts;
        self.degrees = degrees;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u501_generate_working_hours::DegreeNode;

    fn degree(id: i64) -> DegreeNode {
        DegreeNode {
            scientific_degree_id: ScientificDegreeId::new(id),
            name_en: format!("Degree {id}"),
            name_ar: String::new(),
            has_working_hours: false,
            generated_days: 0,
            total_days: 30,
        }
    }

    fn shift(id: i64, degrees: &[i64]) -> ShiftNode {
        ShiftNode {
            shift_hours_type_id: ShiftHoursTypeId::new(id),
            name_en: format!("Shift {id}"),
            name_ar: String::new(),
            scientific_degrees: degrees.iter().map(|&d| degree(d)).collect(),
        }
    }

    fn department(id: i64, shifts: Vec<ShiftNode>) -> DepartmentNode {
        DepartmentNode {
            department_id: DepartmentId::new(id),
            name_en: format!("Department {id}"),
            name_ar: String::new(),
            shifts,
        }
    }

    /// Department 1 with shifts 10 (degrees 100, 101) and 11 (no degrees)
    fn sample_tree() -> WorkingHoursTree {
        WorkingHoursTree::new(vec![department(
            1,
            vec![shift(10, &[100, 101]), shift(11, &[])],
        )])
    }

    const D1: DepartmentId = DepartmentId(1);
    const S10: ShiftHoursTypeId = ShiftHoursTypeId(10);
    const S11: ShiftHoursTypeId = ShiftHoursTypeId(11);
    const G100: ScientificDegreeId = ScientificDegreeId(100);
    const G101: ScientificDegreeId = ScientificDegreeId(101);

    fn sets(
        sel: &HierarchicalSelection,
    ) -> (Vec<DepartmentId>, Vec<ShiftHoursTypeId>, Vec<ScientificDegreeId>) {
        (
            sel.selected_departments().collect(),
            sel.selected_shifts().collect(),
            sel.selected_degrees().collect(),
        )
    }

    #[test]
    fn test_select_degree_then_clear_department() {
        let tree = sample_tree();
        let mut sel = HierarchicalSelection::new();

        sel.toggle_degree(G100, S10, D1);
        assert_eq!(sets(&sel), (vec![D1], vec![S10], vec![G100]));

        sel.toggle_department(D1, &tree);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_degree_selection_selects_ancestors() {
        let mut sel = HierarchicalSelection::new();
        for (g, s, d) in [(100, 10, 1), (7, 3, 2), (101, 10, 1)] {
            let (g, s, d) = (
                ScientificDegreeId::new(g),
                ShiftHoursTypeId::new(s),
                DepartmentId::new(d),
            );
            sel.toggle_degree(g, s, d);
            assert!(sel.is_degree_selected(g));
            assert!(sel.is_shift_selected(s));
            assert!(sel.is_department_selected(d));
        }
    }

    #[test]
    fn test_department_deselect_clears_descendants() {
        let tree = WorkingHoursTree::new(vec![
            department(1, vec![shift(10, &[100, 101]), shift(11, &[])]),
            department(2, vec![shift(20, &[200])]),
        ]);
        let mut sel = HierarchicalSelection::new();
        sel.toggle_degree(G100, S10, D1);
        sel.toggle_degree(G101, S10, D1);
        sel.toggle_shift(S11, D1, &tree);
        sel.toggle_degree(ScientificDegreeId::new(200), ShiftHoursTypeId::new(20), DepartmentId::new(2));

        sel.toggle_department(D1, &tree);

        let (depts, shifts, degrees) = sets(&sel);
        assert_eq!(depts, vec![DepartmentId::new(2)]);
        assert_eq!(shifts, vec![ShiftHoursTypeId::new(20)]);
        assert_eq!(degrees, vec![ScientificDegreeId::new(200)]);
    }

    #[test]
    fn test_shift_deselect_clears_its_degrees_only() {
        let tree = sample_tree();
        let mut sel = HierarchicalSelection::new();
        sel.toggle_degree(G100, S10, D1);
        sel.toggle_shift(S11, D1, &tree);

        sel.toggle_shift(S10, D1, &tree);

        assert_eq!(sets(&sel), (vec![D1], vec![S11], vec![]));
    }

    #[test]
    fn test_shift_select_selects_department() {
        let tree = sample_tree();
        let mut sel = HierarchicalSelection::new();
        sel.toggle_shift(S11, D1, &tree);
        assert!(sel.is_department_selected(D1));
        assert!(!sel.is_degree_selected(G100));
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let tree = sample_tree();

        let mut sel = HierarchicalSelection::new();
        sel.toggle_department(D1, &tree);
        sel.toggle_department(D1, &tree);
        assert_eq!(sel, HierarchicalSelection::new());

        let mut sel = HierarchicalSelection::new();
        sel.toggle_department(D1, &tree);
        let before = sel.clone();
        sel.toggle_shift(S10, D1, &tree);
        sel.toggle_shift(S10, D1, &tree);
        assert_eq!(sel, before);

        sel.toggle_shift(S10, D1, &tree);
        let before = sel.clone();
        sel.toggle_degree(G101, S10, D1);
        sel.toggle_degree(G101, S10, D1);
        assert_eq!(sel, before);
    }

    #[test]
    fn test_double_toggle_from_empty_keeps_ancestors() {
        let tree = sample_tree();

        let mut sel = HierarchicalSelection::new();
        sel.toggle_degree(G101, S10, D1);
        sel.toggle_degree(G101, S10, D1);
        assert!(!sel.is_degree_selected(G101));
        assert!(sel.is_shift_selected(S10));
        assert!(sel.is_department_selected(D1));

        let mut sel = HierarchicalSelection::new();
        sel.toggle_shift(S10, D1, &tree);
        sel.toggle_shift(S10, D1, &tree);
        assert!(!sel.is_shift_selected(S10));
        assert!(sel.is_department_selected(D1));
    }

    #[test]
    fn test_degree_deselect_keeps_ancestors() {
        let mut sel = HierarchicalSelection::new();
        sel.toggle_degree(G100, S10, D1);
        sel.toggle_degree(G100, S10, D1);
        assert_eq!(sets(&sel), (vec![D1], vec![S10], vec![]));
    }

    #[test]
    fn test_fully_selected_department() {
        let tree = sample_tree();
        let dept = tree.department(D1).unwrap();
        let mut sel = HierarchicalSelection::new();

        sel.toggle_department(D1, &tree);
        sel.toggle_shift(S10, D1, &tree);
        assert!(!sel.is_department_fully_selected(dept));
        assert!(sel.is_department_partially_selected(dept));

        sel.toggle_shift(S11, D1, &tree);
        assert!(sel.is_department_fully_selected(dept));
        assert!(!sel.is_department_partially_selected(dept));
    }

    #[test]
    fn test_fully_selected_shift() {
        let tree = sample_tree();
        let s10 = tree.shift(D1, S10).unwrap();
        let s11 = tree.shift(D1, S11).unwrap();
        let mut sel = HierarchicalSelection::new();

        sel.toggle_degree(G100, S10, D1);
        assert!(sel.is_shift_partially_selected(s10));
        sel.toggle_degree(G101, S10, D1);
        assert!(sel.is_shift_fully_selected(s10));

        // no degrees: selected alone is enough
        assert!(!sel.is_shift_fully_selected(s11));
        sel.toggle_shift(S11, D1, &tree);
        assert!(sel.is_shift_fully_selected(s11));
    }

    #[test]
    fn test_empty_selection_means_all() {
        let payload = HierarchicalSelection::new().build_submission_payload();
        assert_eq!(payload.department_ids, None);
        assert_eq!(payload.shift_hours_type_ids, None);
        assert_eq!(payload.scientific_degree_ids, None);
        assert!(payload.is_all());
    }

    #[test]
    fn test_request_carries_sorted_ids() {
        let mut sel = HierarchicalSelection::new();
        sel.toggle_degree(G101, S10, D1);
        sel.toggle_degree(G100, S10, D1);

        let req = sel.build_request(RosterId::new(4), true);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "rosterId": 4,
                "departmentIds": [1],
                "shiftHoursTypeIds": [10],
                "scientificDegreeIds": [100, 101],
                "overwriteExisting": true
            })
        );
    }

    #[test]
    fn test_unknown_ids_are_tolerated() {
        let tree = sample_tree();
        let mut sel = HierarchicalSelection::new();
        sel.toggle_department(DepartmentId::new(99), &tree);
        sel.toggle_department(DepartmentId::new(99), &tree);
        sel.toggle_shift(ShiftHoursTypeId::new(98), DepartmentId::new(99), &tree);
        sel.toggle_shift(ShiftHoursTypeId::new(98), DepartmentId::new(99), &tree);
        assert_eq!(sets(&sel), (vec![DepartmentId::new(99)], vec![], vec![]));
    }

    #[test]
    fn test_reconcile_drops_vanished_nodes() {
        let tree = sample_tree();
        let mut sel = HierarchicalSelection::new();
        sel.toggle_degree(G100, S10, D1);
        sel.toggle_degree(G101, S10, D1);
        sel.toggle_shift(S11, D1, &tree);

        // reload: degree 101 and shift 11 are gone
        let reloaded = WorkingHoursTree::new(vec![department(1, vec![shift(10, &[100])])]);
        sel.reconcile_with_tree(&reloaded);
        assert_eq!(sets(&sel), (vec![D1], vec![S10], vec![G100]));

        // reload: department removed entirely
        sel.reconcile_with_tree(&WorkingHoursTree::default());
        assert!(sel.is_empty());
    }

    #[test]
    fn test_reconcile_drops_orphans_after_move() {
        let mut sel = HierarchicalSelection::new();
        sel.toggle_degree(G100, S10, D1);

        // shift 10 moved to department 2, which is not selected
        let reloaded = WorkingHoursTree::new(vec![
            department(1, vec![shift(11, &[])]),
            department(2, vec![shift(10, &[100])]),
        ]);
        sel.reconcile_with_tree(&reloaded);
        assert_eq!(sets(&sel), (vec![D1], vec![], vec![]));
    }
}
