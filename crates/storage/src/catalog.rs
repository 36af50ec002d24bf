use {
    crate::{
        error::{self, Result},
        file::EXTENSION,
        table::Table,
    },
    snafu::prelude::*,
    std::{
        collections::HashMap,
        fs,
        path::{Path, PathBuf},
    },
    tracing::{info, warn},
};

/// The root directory holding one sub-directory per database.
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn create_database(&self, name: &str) -> Result<()> {
        let path = self.root.join(name);
        ensure!(!path.exists(), error::DatabaseExistsSnafu { name });

        fs::create_dir_all(&path).context(error::WriteSnafu { path: &path })?;
        info!(database = name, path = %path.display(), "created database");

        Ok(())
    }

    /// Removes the database directory and everything in it.
    pub fn drop_database(&self, name: &str) -> Result<()> {
        let path = self.existing(name)?;

        fs::remove_dir_all(&path).context(error::RemoveSnafu { path: &path })?;
        info!(database = name, "dropped database");

        Ok(())
    }

    /// Loads every table of the database.
    pub fn open_database(&self, name: &str) -> Result<Database> {
        let path = self.existing(name)?;

        Database::load(name, path)
    }

    fn existing(&self, name: &str) -> Result<PathBuf> {
        let path = self.root.join(name);
        ensure!(path.is_dir(), error::DatabaseNotFoundSnafu { name });

        Ok(path)
    }
}

/// An opened database with all of its tables in memory.
#[derive(Debug)]
pub struct Database {
    name: String,
    dir: PathBuf,
    tables: HashMap<String, Table>,
}

impl Database {
    fn load(name: &str, dir: PathBuf) -> Result<Self> {
        let mut tables = HashMap::new();

        let entries = fs::read_dir(&dir).context(error::ReadSnafu { path: &dir })?;
        for entry in entries {
            let path = entry.context(error::ReadSnafu { path: &dir })?.path();
            if !path.is_file() || path.extension().map_or(true, |ext| ext != EXTENSION) {
                continue;
            }

            let table = match path.file_stem().and_then(|stem| stem.to_str()) {
                Some(stem) if is_table_name(stem) => stem,
                _ => {
                    warn!(path = %path.display(), "skipped file with an invalid table name");
                    continue;
                }
            };

            tables.insert(table.to_string(), Table::load(&dir, table)?);
        }

        info!(database = name, tables = tables.len(), "loaded database");

        Ok(Self {
            name: name.to_string(),
            dir,
            tables,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn create_table(&mut self, name: &str, columns: Vec<String>) -> Result<&Table> {
        ensure!(
            !self.tables.contains_key(name),
            error::TableExistsSnafu { name }
        );

        let table = Table::create(&self.dir, name, columns)?;
        info!(database = %self.name, table = name, "created table");

        Ok(self.tables.entry(name.to_string()).or_insert(table))
    }

    pub fn table(&self, name: &str) -> Result<&Table> {
        self.tables
            .get(name)
            .context(error::TableNotFoundSnafu { name })
    }

    pub fn table_mut(&mut self, name: &str) -> Result<&mut Table> {
        self.tables
            .get_mut(name)
            .context(error::TableNotFoundSnafu { name })
    }

    /// Forgets the table and removes its file.
    pub fn drop_table(&mut self, name: &str) -> Result<()> {
        let table = self
            .tables
            .remove(name)
            .context(error::TableNotFoundSnafu { name })?;

        table.remove_file()?;
        info!(database = %self.name, table = name, "dropped table");

        Ok(())
    }
}

fn is_table_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
