//! Runs commands against a data directory.
//!
//! A [`Session`] owns the data directory handle and the database selected by
//! `USE`. Every command is parsed, applied and persisted before its response
//! is returned.

mod output;
mod stmt;

pub use self::output::Output;

use {
    parser::{ast::Statement, Parser},
    snafu::prelude::*,
    storage::{DataDir, Database},
    tracing::debug,
};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("no database selected, run USE <dbname> first"))]
    NoDatabaseSelected,

    #[snafu(context(false), display("{}", source))]
    Parse { source: parser::Error },

    #[snafu(context(false), display("{}", source))]
    Storage { source: storage::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

pub struct Session {
    data_dir: DataDir,
    current: Option<Database>,
}

impl Session {
    pub fn new(data_dir: DataDir) -> Self {
        Self {
            data_dir,
            current: None,
        }
    }

    /// The name of the database selected by `USE`.
    pub fn current_database(&self) -> Option<&str> {
        self.current.as_ref().map(Database::name)
    }

    /// Runs one command and renders its response, `[OK] ...` or a single
    /// `[ERROR] ...` line.
    pub fn execute(&mut self, command: &str) -> String {
        match self.run(command) {
            Ok(output) => output.to_string(),
            Err(error) => {
                debug!(%error, "command failed");
                format!("[ERROR] {}", error.to_string().replace('\n', " "))
            }
        }
    }

    pub fn run(&mut self, command: &str) -> Result<Output> {
        let stmt = Parser::parse(command)?;
        debug!(verb = stmt.verb(), "dispatching statement");

        match stmt {
            Statement::Use { database } => self.use_database(database),
            Statement::CreateDatabase { name } => self.create_database(name),
            Statement::DropDatabase { name } => self.drop_database(name),
            Statement::CreateTable(stmt) => self.create_table(stmt),
            Statement::DropTable { name } => self.drop_table(name),
            Statement::AlterTable(stmt) => self.alter_table(stmt),
            Statement::Insert(stmt) => self.insert(stmt),
            Statement::Select(stmt) => self.select(stmt),
            Statement::Update(stmt) => self.update(stmt),
            Statement::Delete(stmt) => self.delete(stmt),
            Statement::Join(stmt) => self.join(stmt),
        }
    }

    fn database(&self) -> Result<&Database> {
        self.current.as_ref().context(NoDatabaseSelectedSnafu)
    }

    fn database_mut(&mut self) -> Result<&mut Database> {
        self.current.as_mut().context(NoDatabaseSelectedSnafu)
    }
}
