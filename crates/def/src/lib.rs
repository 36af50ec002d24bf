pub mod condition;
pub mod error;
mod result_set;
mod row;
mod schema;
mod value;

pub use {
    condition::{Comparator, Condition, Predicate},
    error::{Error, Result},
    result_set::ResultSet,
    row::{ColumnRef, Row},
    schema::{Schema, ID_COLUMN},
    value::Value,
};
