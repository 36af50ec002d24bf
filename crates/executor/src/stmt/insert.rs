use {
    crate::{Output, Result, Session},
    parser::ast::InsertStmt,
};

impl Session {
    pub(crate) fn insert(&mut self, stmt: InsertStmt) -> Result<Output> {
        let InsertStmt { table, values } = stmt;
        self.database_mut()?.table_mut(&table)?.insert(values)?;

        Ok(Output::Message(format!("Record inserted into {}", table)))
    }
}
