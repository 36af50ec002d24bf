//! Single comparison conditions of WHERE clauses.
//!
//! Comparisons are numeric when both sides have a numeric reading, see
//! [`Value::as_number`]. Otherwise `==` and `!=` compare the rendered text
//! exactly and the ordering comparators never match. `LIKE` is a case
//! insensitive substring test on the rendered text regardless of types.

use {
    crate::{
        error::{self, Result},
        row::{ColumnRef, Row},
        schema::Schema,
        value::Value,
    },
    core::fmt,
    snafu::OptionExt,
    std::{borrow::Cow, cmp::Ordering},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
    Like,
}

impl Comparator {
    pub fn compare(self, cell: &Value, operand: &Value) -> bool {
        if self == Self::Like {
            return text(cell)
                .to_lowercase()
                .contains(&text(operand).to_lowercase());
        }

        let ordering = match (cell.as_number(), operand.as_number()) {
            (Some(a), Some(b)) => a.partial_cmp(&b),
            _ => {
                return match self {
                    Self::Equal => text(cell) == text(operand),
                    Self::NotEqual => text(cell) != text(operand),
                    _ => false,
                }
            }
        };

        match (self, ordering) {
            (Self::Equal, Some(o)) => o == Ordering::Equal,
            (Self::NotEqual, Some(o)) => o != Ordering::Equal,
            (Self::GreaterThan, Some(o)) => o == Ordering::Greater,
            (Self::LessThan, Some(o)) => o == Ordering::Less,
            (Self::GreaterThanOrEqual, Some(o)) => o != Ordering::Less,
            (Self::LessThanOrEqual, Some(o)) => o != Ordering::Greater,
            _ => false,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThanOrEqual => "<=",
            Self::Like => "LIKE",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// `attribute comparator value`
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub attribute: String,
    pub comparator: Comparator,
    pub value: Value,
}

impl Condition {
    /// Resolves the attribute against `schema`. This is the only step that
    /// can fail, so an unknown attribute is reported even for empty tables.
    pub fn bind(&self, schema: &Schema) -> Result<Predicate<'_>> {
        let column = schema
            .column_ref(&self.attribute)
            .context(error::ConditionColumnNotFoundSnafu {
                name: &self.attribute,
            })?;

        Ok(Predicate {
            column,
            comparator: self.comparator,
            value: &self.value,
        })
    }
}

/// A condition bound to a schema.
#[derive(Debug, Clone, Copy)]
pub struct Predicate<'a> {
    column: ColumnRef,
    comparator: Comparator,
    value: &'a Value,
}

impl Predicate<'_> {
    pub fn matches(&self, row: &Row) -> bool {
        self.comparator.compare(&row.get(self.column), self.value)
    }
}

fn text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}
