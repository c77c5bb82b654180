use crate::assign_groups::assign_groups;
use definitions::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnotateConfig {
    /// The column holding the pairing keys.
    pair_column: String,
    /// The column to be created.
    group_column: String,
    /// If set, a column telling whether each row has a partner.
    membership_column: Option<String>,
    keep_pair_column: bool,
    missing_policy: MissingPolicy,
}

impl AnnotateConfig {
    pub fn new(
        pair_column: &str,
        group_column: &str,
        membership_column: Option<&str>,
        keep_pair_column: bool,
        missing_policy: MissingPolicy,
    ) -> Self {
        Self {
            pair_column: pair_column.to_string(),
            group_column: group_column.to_string(),
            membership_column: membership_column.map(|x| x.to_string()),
            keep_pair_column,
            missing_policy,
        }
    }
    pub fn group_column(&self) -> &str {
        &self.group_column
    }
}

impl std::default::Default for AnnotateConfig {
    fn default() -> Self {
        Self::new(PAIR_COLUMN, GROUP_COLUMN, None, false, MissingPolicy::Textual)
    }
}

pub trait AnnotateGroups {
    /// Replace the pairing keys by rare-variant group IDs. Returns the assigned IDs in row order.
    fn annotate_groups(&mut self, config: &AnnotateConfig) -> Result<Vec<GroupId>, TableError>;
}

impl AnnotateGroups for AnnotationTable {
    fn annotate_groups(&mut self, config: &AnnotateConfig) -> Result<Vec<GroupId>, TableError> {
        let keys: Vec<&str> = self
            .column(&config.pair_column)?
            .into_iter()
            .map(|key| config.missing_policy.normalize(key))
            .collect();
        let group_ids = assign_groups(&keys);
        let membership: Option<Vec<String>> = config.membership_column.as_ref().map(|_| {
            keys.iter()
                .map(|&key| if key == MISSING_MARKER { "False" } else { "True" })
                .map(|x| x.to_string())
                .collect()
        });
        if config.membership_column.as_ref() == Some(&config.group_column) {
            return Err(TableError::ColumnExists(config.group_column.clone()));
        }
        let new_columns = std::iter::once(&config.group_column).chain(&config.membership_column);
        for name in new_columns {
            let replaced = !config.keep_pair_column && name == &config.pair_column;
            if self.column_index(name).is_some() && !replaced {
                return Err(TableError::ColumnExists(name.clone()));
            }
        }
        if !config.keep_pair_column {
            self.drop_column(&config.pair_column)?;
        }
        let ids = group_ids.iter().map(|id| id.to_string()).collect();
        self.push_column(&config.group_column, ids)?;
        if let (Some(name), Some(values)) = (config.membership_column.as_ref(), membership) {
            self.push_column(name, values)?;
        }
        debug!("Annotate\tRows\t{}", group_ids.len());
        debug!(
            "Annotate\tGroups\t{}",
            crate::assign_groups::group_num(&group_ids)
        );
        Ok(group_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;
    use crate::extract::Extract;
    const INPUT: &str = "ind\tgene\tN2pair\tzscore
GTEX-1\tENSG1\tp1\t3.1
GTEX-2\tENSG1\tNA\t-2.5
GTEX-3\tENSG2\tp1\t4.0
GTEX-4\tENSG3\t\t1.0
GTEX-5\tENSG3\t\t1.5
";
    #[test]
    fn annotate_default() {
        let mut table = AnnotationTable::entry(INPUT.as_bytes()).unwrap();
        let ids = table.annotate_groups(&AnnotateConfig::default()).unwrap();
        // Empty cells are one ordinary key under the textual policy.
        assert_eq!(ids, vec![0, 1, 0, 2, 2]);
        let mut output = vec![];
        table.extract(&mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        let expected = "ind\tgene\tzscore\tgroup_ID
GTEX-1\tENSG1\t3.1\t0
GTEX-2\tENSG1\t-2.5\t1
GTEX-3\tENSG2\t4.0\t0
GTEX-4\tENSG3\t1.0\t2
GTEX-5\tENSG3\t1.5\t2
";
        assert_eq!(output, expected);
    }
    #[test]
    fn annotate_with_membership() {
        let mut table = AnnotationTable::entry(INPUT.as_bytes()).unwrap();
        let config = AnnotateConfig::new(
            PAIR_COLUMN,
            GROUP_COLUMN,
            Some(MEMBERSHIP_COLUMN),
            true,
            MissingPolicy::EmptyAsMissing,
        );
        let ids = table.annotate_groups(&config).unwrap();
        assert_eq!(ids, vec![0, 1, 0, 2, 3]);
        assert_eq!(
            table.header,
            vec!["ind", "gene", "N2pair", "zscore", "group_ID", "is_in_group"]
        );
        let membership = table.column(MEMBERSHIP_COLUMN).unwrap();
        assert_eq!(membership, vec!["True", "False", "True", "False", "False"]);
        // Cells of the kept column are left untouched.
        assert_eq!(table.column(PAIR_COLUMN).unwrap()[3], "");
    }
    #[test]
    fn missing_pair_column() {
        let mut table = AnnotationTable::entry("a\tb\n1\t2\n".as_bytes()).unwrap();
        let result = table.annotate_groups(&AnnotateConfig::default());
        assert!(matches!(result, Err(TableError::MissingColumn(_))));
        // Nothing changed.
        assert_eq!(table.header, vec!["a", "b"]);
    }
    #[test]
    fn existing_group_column() {
        let input = "N2pair\tgroup_ID\np1\t7\n";
        let mut table = AnnotationTable::entry(input.as_bytes()).unwrap();
        let result = table.annotate_groups(&AnnotateConfig::default());
        assert!(matches!(result, Err(TableError::ColumnExists(_))));
        assert_eq!(table.header, vec!["N2pair", "group_ID"]);
    }
    #[test]
    fn same_name_for_group_and_membership() {
        let mut table = AnnotationTable::entry("a\tN2pair\n1\tp1\n2\tNA\n".as_bytes()).unwrap();
        let original = table.clone();
        let config = AnnotateConfig::new("N2pair", "x", Some("x"), false, MissingPolicy::Textual);
        match table.annotate_groups(&config) {
            Err(TableError::ColumnExists(name)) => assert_eq!(name, "x"),
            other => panic!("{:?}", other),
        }
        assert_eq!(table, original);
    }
    #[test]
    fn group_column_replaces_pair_column() {
        let input = "N2pair\nNA\nNA\n";
        let mut table = AnnotationTable::entry(input.as_bytes()).unwrap();
        let config = AnnotateConfig::new("N2pair", "N2pair", None, false, MissingPolicy::Textual);
        table.annotate_groups(&config).unwrap();
        assert_eq!(table.header, vec!["N2pair"]);
        assert_eq!(table.column("N2pair").unwrap(), vec!["0", "1"]);
    }
}
