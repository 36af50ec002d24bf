use {
    crate::{Output, Result, Session},
    parser::ast::{Assignment, UpdateStmt},
};

impl Session {
    pub(crate) fn update(&mut self, stmt: UpdateStmt) -> Result<Output> {
        let UpdateStmt {
            table,
            assignments,
            condition,
        } = stmt;

        let assignments = assignments
            .into_iter()
            .map(|Assignment { column, value }| (column, value))
            .collect();
        let count = self
            .database_mut()?
            .table_mut(&table)?
            .update(assignments, &condition)?;

        Ok(Output::Message(format!(
            "{} record(s) updated in {}",
            count, table
        )))
    }
}
