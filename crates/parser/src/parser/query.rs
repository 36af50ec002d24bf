use {
    super::{
        condition::parse_condition,
        error::{JoinShapeSnafu, Result, SyntaxSnafu},
        Parser,
    },
    crate::{
        ast::{JoinSide, JoinStmt, Projection, SelectStmt, Statement},
        lexer::Keyword,
    },
    snafu::prelude::*,
};

impl<'a> Parser<'a> {
    /// `SELECT (* | col, ...) FROM table [WHERE cond]`
    pub(super) fn parse_select(&self) -> Result<Statement> {
        let from = self.find_keyword(1, Keyword::FROM).context(SyntaxSnafu {
            details: "expected FROM",
        })?;
        ensure!(
            from > 1,
            SyntaxSnafu {
                details: "missing column list",
            }
        );

        let projection = match self.between(0, from) {
            "*" => Projection::All,
            list => Projection::Columns(
                list.split(',')
                    .map(|column| -> Result<String> {
                        let column = column.trim();
                        ensure!(
                            !column.is_empty(),
                            SyntaxSnafu {
                                details: "empty column name in SELECT list",
                            }
                        );
                        Ok(column.to_string())
                    })
                    .collect::<Result<_>>()?,
            ),
        };

        let table = self.identifier(from + 1, "table name")?;

        let condition = match self.word(from + 2) {
            None => None,
            Some(_) => {
                self.expect_keyword(from + 2, Keyword::WHERE)?;
                Some(parse_condition(self.after(from + 2), false)?)
            }
        };

        Ok(Statement::Select(SelectStmt {
            table,
            projection,
            condition,
        }))
    }

    /// `JOIN t1 AND t2 ON a1 AND a2`, exactly eight words.
    pub(super) fn parse_join(&self) -> Result<Statement> {
        ensure!(
            self.tokens.len() == 8
                && self.is_keyword(2, Keyword::AND)
                && self.is_keyword(4, Keyword::ON)
                && self.is_keyword(6, Keyword::AND),
            JoinShapeSnafu
        );

        let side = |table: usize, attribute: usize| -> Result<JoinSide> {
            Ok(JoinSide {
                table: self.identifier(table, "table name")?,
                attribute: self.word(attribute).unwrap_or_default().to_string(),
            })
        };

        Ok(Statement::Join(JoinStmt {
            left: side(1, 5)?,
            right: side(3, 7)?,
        }))
    }
}
