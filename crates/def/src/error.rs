use snafu::prelude::*;

#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display(r#"column "{}" does not exist"#, name))]
    ColumnNotFound { name: String },

    #[snafu(display(r#"column "{}" in WHERE clause does not exist"#, name))]
    ConditionColumnNotFound { name: String },

    #[snafu(display(r#"column "{}" already exists"#, name))]
    ColumnExists { name: String },

    #[snafu(display(r#"duplicate column name "{}""#, name))]
    DuplicateColumn { name: String },

    #[snafu(display("empty column name"))]
    EmptyColumnName,

    #[snafu(display(r#"invalid column name "{}""#, name))]
    InvalidColumnName { name: String },

    #[snafu(display(r#"column "id" cannot be added, dropped or updated"#))]
    ImmutableKey,

    #[snafu(display(
        "invalid value {}, expected a quoted string, a number, TRUE, FALSE or NULL",
        literal
    ))]
    InvalidLiteral { literal: String },
}

pub type Result<T> = std::result::Result<T, Error>;
