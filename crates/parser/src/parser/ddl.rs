use {
    super::{
        common::identifier,
        error::{Result, SyntaxSnafu},
        Parser,
    },
    crate::{
        ast::{AlterAction, AlterTableStmt, CreateTableStmt, Statement},
        lexer::Keyword,
    },
    snafu::prelude::*,
};

impl<'a> Parser<'a> {
    pub(super) fn parse_use(&self) -> Result<Statement> {
        self.expect_len(2, "USE <dbname>")?;

        Ok(Statement::Use {
            database: self.identifier(1, "database name")?,
        })
    }

    pub(super) fn parse_create(&self) -> Result<Statement> {
        match self.keyword(1) {
            Some(Keyword::DATABASE) => {
                self.expect_len(3, "CREATE DATABASE <dbname>")?;
                Ok(Statement::CreateDatabase {
                    name: self.identifier(2, "database name")?,
                })
            }
            Some(Keyword::TABLE) => self.parse_create_table(),
            _ => SyntaxSnafu {
                details: "expected DATABASE or TABLE after CREATE",
            }
            .fail(),
        }
    }

    pub(super) fn parse_drop(&self) -> Result<Statement> {
        match self.keyword(1) {
            Some(Keyword::DATABASE) => {
                self.expect_len(3, "DROP DATABASE <dbname>")?;
                Ok(Statement::DropDatabase {
                    name: self.identifier(2, "database name")?,
                })
            }
            Some(Keyword::TABLE) => {
                self.expect_len(3, "DROP TABLE <table>")?;
                Ok(Statement::DropTable {
                    name: self.identifier(2, "table name")?,
                })
            }
            _ => SyntaxSnafu {
                details: "expected DATABASE or TABLE after DROP",
            }
            .fail(),
        }
    }

    pub(super) fn parse_alter(&self) -> Result<Statement> {
        const USAGE: &str = "ALTER TABLE <table> ADD|DROP <column>";

        self.expect_len(5, USAGE)?;
        self.expect_keyword(1, Keyword::TABLE)?;
        let table = self.identifier(2, "table name")?;

        // the schema validates the column name itself
        let column = self.word(4).unwrap_or_default().to_string();
        let action = match self.keyword(3) {
            Some(Keyword::ADD) => AlterAction::Add(column),
            Some(Keyword::DROP) => AlterAction::Drop(column),
            _ => {
                return SyntaxSnafu {
                    details: format!("expected {}", USAGE),
                }
                .fail()
            }
        };

        Ok(Statement::AlterTable(AlterTableStmt { table, action }))
    }

    /// `CREATE TABLE name [(col, ...)]`, the column list may touch the name.
    fn parse_create_table(&self) -> Result<Statement> {
        let rest = match self.tokens.len() {
            0..=2 => "",
            _ => self.after(1),
        };

        let (name, columns) = match rest.split_once('(') {
            None => (rest, vec![]),
            Some((name, list)) => {
                let list = list.trim_end().strip_suffix(')').context(SyntaxSnafu {
                    details: "expected ')' at the end of the column list",
                })?;
                let columns = list.split(',').map(|c| c.trim().to_string()).collect();

                (name.trim(), columns)
            }
        };

        Ok(Statement::CreateTable(CreateTableStmt {
            name: identifier(name, "table name")?,
            columns,
        }))
    }
}
