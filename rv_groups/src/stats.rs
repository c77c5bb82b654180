use crate::assign_groups::group_members;
use definitions::GroupId;
use serde::{Deserialize, Serialize};

/// Summary of a group assignment. IDs without any row are not counted as groups.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GroupSummary {
    pub rows: usize,
    pub groups: usize,
    /// Groups with exactly one row.
    pub singletons: usize,
    /// Groups with two or more rows.
    pub shared_groups: usize,
    /// Rows belonging to some shared group.
    pub rows_in_shared_groups: usize,
    pub max_group_size: usize,
}

pub fn summarize(group_ids: &[GroupId]) -> GroupSummary {
    let sizes = group_sizes(group_ids);
    let shared = sizes.iter().filter(|&&size| 1 < size);
    GroupSummary {
        rows: group_ids.len(),
        groups: sizes.len(),
        singletons: sizes.iter().filter(|&&size| size == 1).count(),
        shared_groups: shared.clone().count(),
        rows_in_shared_groups: shared.sum(),
        max_group_size: sizes.iter().copied().max().unwrap_or(0),
    }
}

fn group_sizes(group_ids: &[GroupId]) -> Vec<usize> {
    group_members(group_ids)
        .iter()
        .map(|m| m.len())
        .filter(|&size| 0 < size)
        .collect()
}

pub trait Stats {
    fn stats<W: std::io::Write>(&self, wtr: W) -> std::io::Result<()>;
}

impl Stats for [GroupId] {
    fn stats<W: std::io::Write>(&self, mut wtr: W) -> std::io::Result<()> {
        let summary = summarize(self);
        writeln!(&mut wtr, "Groups")?;
        writeln!(
            &mut wtr,
            "# of Rows:{}\n# of Groups:{}\n# of Singletons:{}",
            summary.rows, summary.groups, summary.singletons
        )?;
        writeln!(
            &mut wtr,
            "# of Shared Groups:{}\nRows in Shared Groups:{}\nMax Group Size:{}",
            summary.shared_groups, summary.rows_in_shared_groups, summary.max_group_size
        )?;
        if !self.is_empty() {
            let sizes = group_sizes(self);
            let hist = histgram_viz::Histgram::new(&sizes);
            writeln!(&mut wtr, "Group Size Histgram\n{}", hist.format(20, 20))?;
        }
        Ok(())
    }
}
