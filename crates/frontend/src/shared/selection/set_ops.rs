use std::collections::BTreeSet;

/// Flips membership of `id`, returning `true` if it is now a member
pub fn toggle<T: Ord>(set: &mut BTreeSet<T>, id: T) -> bool {
    if set.remove(&id) {
        false
    } else {
        set.insert(id);
        true
    }
}

pub fn remove_all<T: Ord>(set: &mut BTreeSet<T>, ids: impl IntoIterator<Item = T>) {
    for id in ids {
        set.remove(&id);
    }
}

/// `true` when every id is a member. Vacuously true for no ids.
pub fn contains_all<T: Ord>(set: &BTreeSet<T>, ids: impl IntoIterator<Item = T>) -> bool {
    ids.into_iter().all(|id| set.contains(&id))
}

/// Submission form of a selection level: `None` when nothing is selected
pub fn to_payload<T: Ord + Copy>(set: &BTreeSet<T>) -> Option<Vec<T>> {
    if set.is_empty() {
        None
    } else {
        Some(set.iter().copied().collect())
    }
}
