use {
    crate::{Output, Result, Session},
    parser::ast::{JoinStmt, Projection, SelectStmt},
};

impl Session {
    pub(crate) fn select(&self, stmt: SelectStmt) -> Result<Output> {
        let SelectStmt {
            table,
            projection,
            condition,
        } = stmt;

        let columns = match &projection {
            Projection::All => None,
            Projection::Columns(columns) => Some(columns.as_slice()),
        };
        let rows = self
            .database()?
            .table(&table)?
            .select(columns, condition.as_ref())?;

        Ok(Output::Rows(rows))
    }

    pub(crate) fn join(&self, stmt: JoinStmt) -> Result<Output> {
        let JoinStmt { left, right } = stmt;
        let database = self.database()?;

        let rows = storage::join(
            database.table(&left.table)?,
            &left.attribute,
            database.table(&right.table)?,
            &right.attribute,
        )?;

        Ok(Output::Rows(rows))
    }
}
