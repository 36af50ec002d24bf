use {
    crate::{
        error::{self, Result},
        table::Table,
    },
    def::{ColumnRef, ResultSet, Value, ID_COLUMN},
    snafu::prelude::*,
};

/// Nested loop equi-join of two tables.
///
/// A pair of rows matches when the rendered values of the two attributes are
/// identical, no numeric coercion takes place. Joined rows get fresh ids
/// counting from 1 and the columns are prefixed with their table name.
pub fn join(
    left: &Table,
    left_attribute: &str,
    right: &Table,
    right_attribute: &str,
) -> Result<ResultSet> {
    let left_column = resolve(left, left_attribute)?;
    let right_column = resolve(right, right_attribute)?;

    let mut header = vec![ID_COLUMN.to_string()];
    for table in [left, right] {
        header.extend(
            table.schema().columns()[1..]
                .iter()
                .map(|column| format!("{}.{}", table.name(), column)),
        );
    }
    let mut result = ResultSet::new(header);

    let right_keys: Vec<_> = right
        .rows()
        .iter()
        .map(|row| row.get(right_column).to_string())
        .collect();

    let mut next_id = 1;
    for left_row in left.rows() {
        let key = left_row.get(left_column).to_string();

        for (right_row, right_key) in right.rows().iter().zip(&right_keys) {
            if key != *right_key {
                continue;
            }

            let mut row = Vec::with_capacity(1 + left_row.fields.len() + right_row.fields.len());
            row.push(Value::Integer(next_id));
            row.extend(left_row.fields.iter().cloned());
            row.extend(right_row.fields.iter().cloned());
            result.push(row);
            next_id += 1;
        }
    }

    Ok(result)
}

fn resolve(table: &Table, attribute: &str) -> Result<ColumnRef> {
    table
        .schema()
        .column_ref(attribute)
        .context(error::JoinColumnNotFoundSnafu {
            column: attribute,
            table: table.name(),
        })
}
