use {
    super::{
        common::split_list,
        error::{Result, SyntaxSnafu},
        Parser,
    },
    crate::{
        ast::{InsertStmt, Statement},
        lexer::Keyword,
    },
    def::Value,
    snafu::prelude::*,
};

const VALUES: &str = "VALUES";

impl<'a> Parser<'a> {
    /// `INSERT INTO table VALUES (v1, ...)`. `VALUES` may touch the list.
    pub(super) fn parse_insert(&self) -> Result<Statement> {
        self.expect_keyword(1, Keyword::INTO)?;
        let table = self.identifier(2, "table name")?;

        let values_at = self
            .word(3)
            .filter(|word| {
                word.get(..VALUES.len())
                    .map_or(false, |prefix| prefix.eq_ignore_ascii_case(VALUES))
            })
            .map(|_| self.tokens[3].1.start + VALUES.len())
            .context(SyntaxSnafu {
                details: "expected VALUES",
            })?;

        let list = self.src[values_at..]
            .trim()
            .strip_prefix('(')
            .and_then(|list| list.strip_suffix(')'))
            .context(SyntaxSnafu {
                details: "expected a parenthesized VALUES list",
            })?;

        let values = split_list(list)?
            .into_iter()
            .map(Value::parse_literal)
            .collect::<def::Result<_>>()?;

        Ok(Statement::Insert(InsertStmt { table, values }))
    }
}
