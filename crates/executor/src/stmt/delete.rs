use {
    crate::{Output, Result, Session},
    parser::ast::DeleteStmt,
};

impl Session {
    pub(crate) fn delete(&mut self, stmt: DeleteStmt) -> Result<Output> {
        let DeleteStmt { table, condition } = stmt;
        let count = self.database_mut()?.table_mut(&table)?.delete(&condition)?;

        Ok(Output::Message(format!(
            "{} record(s) deleted from {}",
            count, table
        )))
    }
}
