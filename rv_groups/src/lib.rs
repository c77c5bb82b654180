//! Rare-variant groups of (individual, gene) expression outliers.
pub mod annotate;
pub mod assign_groups;
pub mod entry;
pub mod extract;
pub mod group_outliers;
pub mod stats;
#[macro_use]
extern crate log;

pub use annotate::{AnnotateConfig, AnnotateGroups};
pub use assign_groups::{assign_groups, assign_groups_by, group_members};
pub use entry::Entry;
pub use extract::Extract;
pub use group_outliers::{group_outliers, grouped_outlier_table, OutlierMatrix};
pub use stats::{summarize, GroupSummary, Stats};
