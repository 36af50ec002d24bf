use {
    crate::{
        error::{self, Result},
        row::ColumnRef,
    },
    snafu::prelude::*,
};

pub const ID_COLUMN: &str = "id";

/// Ordered column names of a table. The first column is always `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    columns: Vec<String>,
}

impl Schema {
    /// Builds a schema from user supplied column names, `id` is prepended.
    pub fn new<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut schema = Self::default();
        for column in columns {
            let column = column.into();
            validate_name(&column)?;
            ensure!(
                schema.index_of(&column).is_none(),
                error::DuplicateColumnSnafu { name: column }
            );
            schema.columns.push(column);
        }

        Ok(schema)
    }

    /// Rebuilds a schema from a persisted header line.
    pub fn from_header<I, S>(header: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut header = header.into_iter().map(Into::into);
        match header.next() {
            Some(first) if is_id(&first) => Self::new(header),
            Some(first) => error::InvalidColumnNameSnafu { name: first }.fail(),
            None => error::EmptyColumnNameSnafu.fail(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of non-id columns, which is the field count of every row.
    pub fn field_count(&self) -> usize {
        self.columns.len() - 1
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.eq_ignore_ascii_case(name))
    }

    pub fn column_ref(&self, name: &str) -> Option<ColumnRef> {
        self.index_of(name).map(ColumnRef::from_index)
    }

    /// The stored spelling of a resolved column.
    pub fn name_of(&self, column: ColumnRef) -> &str {
        match column {
            ColumnRef::Id => &self.columns[0],
            ColumnRef::Field(i) => &self.columns[i + 1],
        }
    }

    /// Resolves `name`, failing with a column-not-found error.
    pub fn resolve(&self, name: &str) -> Result<ColumnRef> {
        self.column_ref(name)
            .context(error::ColumnNotFoundSnafu { name })
    }

    /// Resolves a column that may be written to.
    pub fn resolve_field(&self, name: &str) -> Result<usize> {
        match self.resolve(name)? {
            ColumnRef::Id => error::ImmutableKeySnafu.fail(),
            ColumnRef::Field(i) => Ok(i),
        }
    }

    /// Appends a column and returns the index of its field.
    pub fn push(&mut self, name: String) -> Result<usize> {
        ensure!(!is_id(&name), error::ImmutableKeySnafu);
        validate_name(&name)?;
        ensure!(
            self.index_of(&name).is_none(),
            error::ColumnExistsSnafu { name }
        );
        self.columns.push(name);

        Ok(self.field_count() - 1)
    }

    /// Removes a column and returns the index of the field it held.
    pub fn remove(&mut self, name: &str) -> Result<usize> {
        let field = self.resolve_field(name)?;
        self.columns.remove(field + 1);

        Ok(field)
    }
}

impl Default for Schema {
    /// The schema of an id-only table.
    fn default() -> Self {
        Self {
            columns: vec![ID_COLUMN.to_string()],
        }
    }
}

pub(crate) fn is_id(name: &str) -> bool {
    name.eq_ignore_ascii_case(ID_COLUMN)
}

fn validate_name(name: &str) -> Result<()> {
    ensure!(!name.is_empty(), error::EmptyColumnNameSnafu);
    ensure!(
        name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
        error::InvalidColumnNameSnafu { name }
    );

    Ok(())
}
