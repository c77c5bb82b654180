//! Label rows by the rare-variant group they belong to.
use definitions::{GroupId, MISSING_MARKER};
use std::collections::HashMap;

/// Assign a group ID to each pairing key. Equal keys share an ID,
/// and each `NA` opens a new singleton group.
/// IDs are dense and numbered by first appearance.
pub fn assign_groups<S: AsRef<str>>(keys: &[S]) -> Vec<GroupId> {
    assign_groups_by(keys, |key| key == MISSING_MARKER)
}

/// Same as [assign_groups](assign_groups), with an explicit predicate for the missing marker.
pub fn assign_groups_by<S, F>(keys: &[S], is_missing: F) -> Vec<GroupId>
where
    S: AsRef<str>,
    F: Fn(&str) -> bool,
{
    let mut pair_to_group: HashMap<&str, GroupId> = HashMap::new();
    let mut next_id = 0;
    keys.iter()
        .map(|key| {
            let key = key.as_ref();
            if is_missing(key) {
                next_id += 1;
                next_id - 1
            } else {
                *pair_to_group.entry(key).or_insert_with(|| {
                    next_id += 1;
                    next_id - 1
                })
            }
        })
        .collect()
}

/// The number of groups in an assignment.
pub fn group_num(group_ids: &[GroupId]) -> usize {
    group_ids.iter().max().map(|&max| max + 1).unwrap_or(0)
}

/// Row indices of each group. The i-th element lists the rows of group i, in row order.
/// Every ID is expected to be smaller than `group_ids.len()`, as in any assignment of [assign_groups](assign_groups).
/// IDs that never occur get an empty list.
pub fn group_members(group_ids: &[GroupId]) -> Vec<Vec<usize>> {
    let mut members = vec![vec![]; group_num(group_ids)];
    for (row, &group) in group_ids.iter().enumerate() {
        members[group].push(row);
    }
    members
}
