use {
    super::{
        common::split_list,
        condition::parse_condition,
        error::{Result, SyntaxSnafu},
        Parser,
    },
    crate::{
        ast::{Assignment, DeleteStmt, Statement, UpdateStmt},
        lexer::Keyword,
    },
    def::{Value, ID_COLUMN},
    snafu::prelude::*,
};

impl<'a> Parser<'a> {
    /// `UPDATE table SET col=val[, ...] WHERE cond`
    pub(super) fn parse_update(&self) -> Result<Statement> {
        let table = self.identifier(1, "table name")?;
        self.expect_keyword(2, Keyword::SET)?;

        let r#where = self.find_keyword(3, Keyword::WHERE).context(SyntaxSnafu {
            details: "UPDATE requires a WHERE clause",
        })?;

        let assignments = parse_assignments(self.between(2, r#where))?;
        let condition = parse_condition(self.after(r#where), true)?;

        Ok(Statement::Update(UpdateStmt {
            table,
            assignments,
            condition,
        }))
    }

    /// `DELETE FROM table WHERE cond`
    pub(super) fn parse_delete(&self) -> Result<Statement> {
        self.expect_keyword(1, Keyword::FROM)?;
        let table = self.identifier(2, "table name")?;

        ensure!(
            self.tokens.len() > 3,
            SyntaxSnafu {
                details: "DELETE requires a WHERE clause",
            }
        );
        self.expect_keyword(3, Keyword::WHERE)?;

        Ok(Statement::Delete(DeleteStmt {
            table,
            condition: parse_condition(self.after(3), false)?,
        }))
    }
}

fn parse_assignments(list: &str) -> Result<Vec<Assignment>> {
    let items = split_list(list)?;
    ensure!(
        !items.is_empty(),
        SyntaxSnafu {
            details: "empty SET list",
        }
    );

    items
        .into_iter()
        .map(|item| -> Result<Assignment> {
            let (column, value) = item.split_once('=').context(SyntaxSnafu {
                details: format!("expected <column>=<value>, found {}", item),
            })?;

            let column = column.trim();
            ensure!(
                !column.is_empty(),
                SyntaxSnafu {
                    details: "missing column name in SET list",
                }
            );
            if column.eq_ignore_ascii_case(ID_COLUMN) {
                return Err(def::Error::ImmutableKey.into());
            }

            Ok(Assignment {
                column: column.to_string(),
                value: Value::parse_literal(value.trim())?,
            })
        })
        .collect()
}
