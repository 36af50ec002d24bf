use {
    crate::{Output, Result, Session},
    parser::ast::{AlterAction, AlterTableStmt, CreateTableStmt},
    tracing::info,
};

impl Session {
    pub(crate) fn use_database(&mut self, name: String) -> Result<Output> {
        let database = self.data_dir.open_database(&name)?;
        self.current = Some(database);

        Ok(Output::Message(format!("Switched to database {}", name)))
    }

    pub(crate) fn create_database(&mut self, name: String) -> Result<Output> {
        self.data_dir.create_database(&name)?;

        Ok(Output::Message(format!("Database {} created", name)))
    }

    /// Needs a selected database like every verb but USE and CREATE
    /// DATABASE. Dropping the selected one deselects it.
    pub(crate) fn drop_database(&mut self, name: String) -> Result<Output> {
        let selected = self.database()?.name() == name;
        self.data_dir.drop_database(&name)?;

        if selected {
            info!(database = %name, "deselected dropped database");
            self.current = None;
        }

        Ok(Output::Message(format!("Database {} dropped", name)))
    }

    pub(crate) fn create_table(&mut self, stmt: CreateTableStmt) -> Result<Output> {
        let CreateTableStmt { name, columns } = stmt;
        self.database_mut()?.create_table(&name, columns)?;

        Ok(Output::Message(format!("Table {} created", name)))
    }

    pub(crate) fn drop_table(&mut self, name: String) -> Result<Output> {
        self.database_mut()?.drop_table(&name)?;

        Ok(Output::Message(format!("Table {} dropped", name)))
    }

    pub(crate) fn alter_table(&mut self, stmt: AlterTableStmt) -> Result<Output> {
        let AlterTableStmt { table, action } = stmt;
        let target = self.database_mut()?.table_mut(&table)?;

        let message = match action {
            AlterAction::Add(column) => {
                target.add_column(&column)?;
                format!("Column {} added to {}", column, table)
            }
            AlterAction::Drop(column) => {
                target.drop_column(&column)?;
                format!("Column {} dropped from {}", column, table)
            }
        };

        Ok(Output::Message(message))
    }
}
