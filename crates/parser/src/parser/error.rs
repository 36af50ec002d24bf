use snafu::prelude::*;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("syntax error: {}", details))]
    Syntax { details: String },

    #[snafu(display("unsupported command: {}", verb))]
    UnsupportedCommand { verb: String },

    #[snafu(display(r#"invalid identifier "{}""#, name))]
    InvalidIdentifier { name: String },

    #[snafu(display("invalid WHERE condition: {}", clause))]
    WhereSyntax { clause: String },

    #[snafu(display(
        "invalid JOIN syntax, expected JOIN <table> AND <table> ON <attribute> AND <attribute>"
    ))]
    JoinShape,

    #[snafu(context(false), display("{}", source))]
    Definition { source: def::Error },
}
