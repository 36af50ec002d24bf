use {
    snafu::prelude::*,
    std::{io, path::PathBuf},
};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display(r#"database "{}" already exists"#, name))]
    DatabaseExists { name: String },

    #[snafu(display(r#"database "{}" does not exist"#, name))]
    DatabaseNotFound { name: String },

    #[snafu(display(r#"table "{}" already exists"#, name))]
    TableExists { name: String },

    #[snafu(display(r#"table "{}" does not exist"#, name))]
    TableNotFound { name: String },

    #[snafu(display(r#"column "{}" does not exist in table "{}""#, column, table))]
    JoinColumnNotFound { column: String, table: String },

    #[snafu(display(r#"table "{}" has no ids left"#, name))]
    IdsExhausted { name: String },

    #[snafu(display("expected {} values but found {}", expected, found))]
    Arity { expected: usize, found: usize },

    #[snafu(context(false), display("{}", source))]
    Definition { source: def::Error },

    #[snafu(display("failed to read {}: {}", path.display(), source))]
    Read { path: PathBuf, source: io::Error },

    #[snafu(display("failed to write {}: {}", path.display(), source))]
    Write { path: PathBuf, source: io::Error },

    #[snafu(display("failed to remove {}: {}", path.display(), source))]
    Remove { path: PathBuf, source: io::Error },

    #[snafu(display("corrupt table file {} at line {}", path.display(), line))]
    CorruptFile { path: PathBuf, line: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
