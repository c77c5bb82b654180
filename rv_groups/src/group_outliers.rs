//! Collect the outlier values of each rare-variant group into one row.
use crate::assign_groups::{group_members, group_num};
use definitions::*;
use nalgebra::DMatrix;

/// Lay the outlier vectors of the members of each group side by side.
/// `outliers` is an (rows x d) matrix. The result has one row per group, and `d * max_group_size` columns.
/// The k-th member of group g occupies the columns `d*k..d*(k+1)` of the g-th row.
/// Slots without a member are 0.
pub fn group_outliers(
    group_ids: &[GroupId],
    outliers: &DMatrix<f64>,
) -> Result<DMatrix<f64>, TableError> {
    if group_ids.len() != outliers.nrows() {
        return Err(TableError::LengthMismatch {
            expected: outliers.nrows(),
            found: group_ids.len(),
        });
    }
    let row_num = group_ids.len();
    if let Some(&id) = group_ids.iter().find(|&&id| row_num <= id) {
        return Err(TableError::GroupOutOfRange { id, rows: row_num });
    }
    let dim = outliers.ncols();
    let members = group_members(group_ids);
    let max_group_size = members.iter().map(|m| m.len()).max().unwrap_or(0);
    let mut grouped = DMatrix::zeros(group_num(group_ids), dim * max_group_size);
    for (group, rows) in members.iter().enumerate() {
        for (k, &row) in rows.iter().enumerate() {
            for j in 0..dim {
                grouped[(group, dim * k + j)] = outliers[(row, j)];
            }
        }
    }
    debug!(
        "GroupOutliers\t{}\t{}\t{}",
        grouped.nrows(),
        grouped.ncols(),
        max_group_size
    );
    Ok(grouped)
}

pub trait OutlierMatrix {
    /// Parse the named columns as floats, one row per record. `NA` and empty cells become NaN.
    fn outlier_matrix<S: AsRef<str>>(&self, columns: &[S]) -> Result<DMatrix<f64>, TableError>;
    /// Parse a column of group IDs. An ID must be smaller than the number of rows.
    fn group_ids(&self, column: &str) -> Result<Vec<GroupId>, TableError>;
}

impl OutlierMatrix for AnnotationTable {
    fn outlier_matrix<S: AsRef<str>>(&self, columns: &[S]) -> Result<DMatrix<f64>, TableError> {
        let mut values = Vec::with_capacity(self.len() * columns.len());
        let columns: Vec<(&str, Vec<&str>)> = columns
            .iter()
            .map(|name| self.column(name.as_ref()).map(|cells| (name.as_ref(), cells)))
            .collect::<Result<_, _>>()?;
        for row in 0..self.len() {
            for (name, cells) in columns.iter() {
                values.push(parse_cell(name, row, cells[row])?);
            }
        }
        Ok(DMatrix::from_row_slice(self.len(), columns.len(), &values))
    }
    fn group_ids(&self, column: &str) -> Result<Vec<GroupId>, TableError> {
        let rows = self.len();
        self.column(column)?
            .into_iter()
            .enumerate()
            .map(|(row, cell)| match cell.parse::<GroupId>() {
                Ok(id) if id < rows => Ok(id),
                _ => Err(TableError::BadNumber {
                    column: column.to_string(),
                    line: AnnotationTable::line_of(row),
                    value: cell.to_string(),
                }),
            })
            .collect()
    }
}

fn parse_cell(column: &str, row: usize, cell: &str) -> Result<f64, TableError> {
    if cell.is_empty() || cell == MISSING_MARKER {
        return Ok(f64::NAN);
    }
    cell.parse().map_err(|_| TableError::BadNumber {
        column: column.to_string(),
        line: AnnotationTable::line_of(row),
        value: cell.to_string(),
    })
}

/// Render the grouped matrix as a table. The first column is the group ID,
/// followed by `{column}_{k}` for the k-th member.
pub fn grouped_outlier_table<S: AsRef<str>>(
    group_column: &str,
    columns: &[S],
    grouped: &DMatrix<f64>,
) -> Result<AnnotationTable, TableError> {
    let dim = columns.len();
    if dim == 0 || grouped.ncols() % dim != 0 {
        return Err(TableError::LengthMismatch {
            expected: dim,
            found: grouped.ncols(),
        });
    }
    let slots = grouped.ncols() / dim;
    let header: Vec<String> = std::iter::once(group_column.to_string())
        .chain((0..slots).flat_map(move |k| {
            columns
                .iter()
                .map(move |c| format!("{}_{}", c.as_ref(), k))
        }))
        .collect();
    let rows: Vec<Vec<String>> = grouped
        .row_iter()
        .enumerate()
        .map(|(group, row)| {
            let values = row.iter().map(|x| {
                if x.is_nan() {
                    MISSING_MARKER.to_string()
                } else {
                    format!("{}", x)
                }
            });
            std::iter::once(group.to_string()).chain(values).collect()
        })
        .collect();
    AnnotationTable::new(header, rows)
}
