use {
    super::{
        error::{InvalidIdentifierSnafu, Result, SyntaxSnafu},
        Parser,
    },
    crate::lexer::{Keyword, Token},
    snafu::prelude::*,
};

impl<'a> Parser<'a> {
    pub(super) fn word(&self, i: usize) -> Option<&'a str> {
        self.tokens.get(i).map(|(_, span)| &self.src[span.clone()])
    }

    pub(super) fn keyword(&self, i: usize) -> Option<Keyword> {
        match self.tokens.get(i) {
            Some((Token::Keyword(keyword), _)) => Some(*keyword),
            _ => None,
        }
    }

    pub(super) fn is_keyword(&self, i: usize, keyword: Keyword) -> bool {
        self.keyword(i) == Some(keyword)
    }

    pub(super) fn expect_keyword(&self, i: usize, keyword: Keyword) -> Result<()> {
        ensure!(
            self.is_keyword(i, keyword),
            SyntaxSnafu {
                details: format!("expected {}", keyword),
            }
        );

        Ok(())
    }

    pub(super) fn expect_len(&self, len: usize, usage: &str) -> Result<()> {
        ensure!(
            self.tokens.len() == len,
            SyntaxSnafu {
                details: format!("expected {}", usage),
            }
        );

        Ok(())
    }

    /// Position of the first `keyword` at or after `from`. Words touching a
    /// quoted literal never match.
    pub(super) fn find_keyword(&self, from: usize, keyword: Keyword) -> Option<usize> {
        (from..self.tokens.len()).find(|&i| self.is_keyword(i, keyword))
    }

    /// A database or table name, lowercased.
    pub(super) fn identifier(&self, i: usize, what: &str) -> Result<String> {
        let word = self.word(i).context(SyntaxSnafu {
            details: format!("missing {}", what),
        })?;

        identifier(word, what)
    }

    /// Raw text after token `i`.
    pub(super) fn after(&self, i: usize) -> &'a str {
        self.src[self.tokens[i].1.end..].trim()
    }

    /// Raw text between tokens `i` and `j`.
    pub(super) fn between(&self, i: usize, j: usize) -> &'a str {
        self.src[self.tokens[i].1.end..self.tokens[j].1.start].trim()
    }
}

pub(super) fn identifier(name: &str, what: &str) -> Result<String> {
    ensure!(
        !name.is_empty(),
        SyntaxSnafu {
            details: format!("missing {}", what),
        }
    );
    ensure!(
        name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
        InvalidIdentifierSnafu { name }
    );

    Ok(name.to_ascii_lowercase())
}

/// Splits a comma separated list, ignoring commas inside quoted literals.
/// Items are trimmed; blank input is an empty list.
pub(super) fn split_list(list: &str) -> Result<Vec<&str>> {
    if list.trim().is_empty() {
        return Ok(vec![]);
    }

    let mut items = vec![];
    let mut start = 0;
    let mut in_quote = false;

    for (i, c) in list.char_indices() {
        match c {
            // an escaped quote toggles twice
            '\'' => in_quote = !in_quote,
            ',' if !in_quote => {
                items.push(list[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    ensure!(
        !in_quote,
        SyntaxSnafu {
            details: "unterminated string literal",
        }
    );
    items.push(list[start..].trim());

    Ok(items)
}
