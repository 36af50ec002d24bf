use {
    crate::value::Value,
    std::borrow::Cow,
};

/// Where a named column lives in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRef {
    Id,
    Field(usize),
}

impl ColumnRef {
    /// Maps a schema position to a row position, `fields[i]` holds `columns[i + 1]`.
    pub(crate) fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Id,
            i => Self::Field(i - 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    id: u64,
    pub fields: Vec<Value>,
}

impl Row {
    /// Largest id a table hands out, ids stay readable as an `Integer`.
    pub const MAX_ID: u64 = i64::MAX as u64;

    pub fn new(id: u64, fields: Vec<Value>) -> Self {
        Self { id, fields }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn get(&self, column: ColumnRef) -> Cow<'_, Value> {
        match column {
            ColumnRef::Id => Cow::Owned(match i64::try_from(self.id) {
                Ok(id) => Value::Integer(id),
                Err(_) => Value::String(self.id.to_string()),
            }),
            ColumnRef::Field(i) => Cow::Borrowed(&self.fields[i]),
        }
    }
}
