mod common;
mod condition;
mod ddl;
mod dml;
mod error;
mod insert;
mod query;

pub use self::error::{Error, Result};

use {
    self::error::{SyntaxSnafu, UnsupportedCommandSnafu},
    crate::{
        ast::Statement,
        common::Spanned,
        lexer::{Keyword, Lexer, Token},
    },
    snafu::prelude::*,
};

pub struct Parser<'a> {
    /// The statement without its terminator.
    src: &'a str,
    tokens: Vec<Spanned<Token>>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            src,
            tokens: Lexer::new(src).collect(),
        }
    }

    /// Parses a single `;` terminated command.
    pub fn parse(command: &'a str) -> Result<Statement> {
        let command = command.trim();
        ensure!(!command.is_empty(), SyntaxSnafu { details: "empty command" });

        let body = command.strip_suffix(';').context(SyntaxSnafu {
            details: "missing statement terminator ';'",
        })?;

        Self::new(body.trim_end()).parse_statement()
    }

    fn parse_statement(&self) -> Result<Statement> {
        match self.tokens.first() {
            Some((Token::Keyword(keyword), span)) => match keyword {
                Keyword::USE => self.parse_use(),
                Keyword::CREATE => self.parse_create(),
                Keyword::DROP => self.parse_drop(),
                Keyword::ALTER => self.parse_alter(),
                Keyword::INSERT => self.parse_insert(),
                Keyword::SELECT => self.parse_select(),
                Keyword::UPDATE => self.parse_update(),
                Keyword::DELETE => self.parse_delete(),
                Keyword::JOIN => self.parse_join(),
                _ => UnsupportedCommandSnafu {
                    verb: self.src[span.clone()].to_uppercase(),
                }
                .fail(),
            },
            Some((_, span)) => UnsupportedCommandSnafu {
                verb: self.src[span.clone()].to_uppercase(),
            }
            .fail(),
            None => SyntaxSnafu {
                details: "empty command",
            }
            .fail(),
        }
    }
}
