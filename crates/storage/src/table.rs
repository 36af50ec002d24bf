use {
    crate::{
        error::{self, Result},
        file::TableFile,
    },
    def::{ColumnRef, Condition, ResultSet, Row, Schema, Value},
    snafu::prelude::*,
    std::path::Path,
    tracing::{debug, warn},
};

/// A table held in memory and mirrored to its `.tab` file after every
/// mutation.
#[derive(Debug)]
pub struct Table {
    name: String,
    schema: Schema,
    rows: Vec<Row>,
    next_id: u64,
    file: TableFile,
}

impl Table {
    /// Creates a table with `id` followed by `columns` and writes its file.
    pub(crate) fn create(dir: &Path, name: &str, columns: Vec<String>) -> Result<Self> {
        let table = Self {
            name: name.to_string(),
            schema: Schema::new(columns)?,
            rows: vec![],
            next_id: 1,
            file: TableFile::new(dir, name),
        };
        table.save()?;

        Ok(table)
    }

    pub(crate) fn load(dir: &Path, name: &str) -> Result<Self> {
        let file = TableFile::new(dir, name);
        let (schema, rows) = file.read()?;

        Ok(Self {
            name: name.to_string(),
            next_id: next_id(&rows),
            schema,
            rows,
            file,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The id the next inserted row will get.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Projects the rows matching `condition`. `None` columns select the
    /// whole schema. Every column is resolved before any row is read.
    pub fn select(
        &self,
        columns: Option<&[String]>,
        condition: Option<&Condition>,
    ) -> Result<ResultSet> {
        let columns: Vec<ColumnRef> = match columns {
            None => (0..self.schema.columns().len())
                .map(|i| match i {
                    0 => ColumnRef::Id,
                    i => ColumnRef::Field(i - 1),
                })
                .collect(),
            Some(names) => names
                .iter()
                .map(|name| self.schema.resolve(name))
                .collect::<def::Result<Vec<_>>>()?,
        };
        let predicate = condition.map(|c| c.bind(&self.schema)).transpose()?;

        let header = columns
            .iter()
            .map(|&column| self.schema.name_of(column).to_string())
            .collect();
        let mut result = ResultSet::new(header);

        for row in &self.rows {
            if predicate.map_or(true, |p| p.matches(row)) {
                result.push(columns.iter().map(|&c| row.get(c).into_owned()).collect());
            }
        }

        Ok(result)
    }

    /// Appends a row and returns its id.
    pub fn insert(&mut self, values: Vec<Value>) -> Result<u64> {
        ensure!(
            values.len() == self.schema.field_count(),
            error::AritySnafu {
                expected: self.schema.field_count(),
                found: values.len(),
            }
        );

        let id = self.next_id;
        ensure!(id <= Row::MAX_ID, error::IdsExhaustedSnafu { name: &self.name });
        self.rows.push(Row::new(id, values));
        self.next_id = id + 1;
        debug!(table = %self.name, id, "inserted row");
        self.save()?;

        Ok(id)
    }

    /// Sets columns on every matching row and returns how many matched.
    /// Nothing is modified unless every column and the condition resolve.
    pub fn update(
        &mut self,
        assignments: Vec<(String, Value)>,
        condition: &Condition,
    ) -> Result<usize> {
        let assignments = assignments
            .into_iter()
            .map(|(column, value)| {
                self.schema
                    .resolve_field(&column)
                    .map(|field| (field, value))
            })
            .collect::<def::Result<Vec<_>>>()?;
        let predicate = condition.bind(&self.schema)?;

        let mut count = 0;
        for row in self.rows.iter_mut().filter(|row| predicate.matches(row)) {
            for (field, value) in &assignments {
                row.fields[*field] = value.clone();
            }
            count += 1;
        }
        self.save()?;

        Ok(count)
    }

    /// Removes every matching row and returns how many were removed.
    pub fn delete(&mut self, condition: &Condition) -> Result<usize> {
        let predicate = condition.bind(&self.schema)?;

        let before = self.rows.len();
        self.rows.retain(|row| !predicate.matches(row));
        self.next_id = next_id(&self.rows);
        self.save()?;

        Ok(before - self.rows.len())
    }

    /// Appends a column, existing rows get an empty string.
    pub fn add_column(&mut self, name: &str) -> Result<()> {
        self.schema.push(name.to_string())?;
        for row in &mut self.rows {
            row.fields.push(Value::String(String::new()));
        }

        self.save()
    }

    pub fn drop_column(&mut self, name: &str) -> Result<()> {
        let field = self.schema.remove(name)?;
        for row in &mut self.rows {
            row.fields.remove(field);
        }

        self.save()
    }

    pub(crate) fn remove_file(&self) -> Result<()> {
        self.file.remove()
    }

    /// A failed save leaves the in-memory table as it is.
    fn save(&self) -> Result<()> {
        self.file.write(&self.schema, &self.rows).map_err(|error| {
            warn!(
                table = %self.name,
                path = %self.file.path().display(),
                %error,
                "failed to save table"
            );
            error
        })
    }
}

/// One past the largest id, or 1 for an empty table. Saturates so that
/// `insert` reports the table as full instead of wrapping.
fn next_id(rows: &[Row]) -> u64 {
    rows.iter()
        .map(Row::id)
        .max()
        .map_or(1, |max| max.saturating_add(1))
}
