mod token;

pub(crate) use self::token::{Keyword, Token};

use {
    crate::common::Spanned,
    std::{
        iter::Peekable,
        str::{CharIndices, FromStr},
    },
};

/// Splits a statement into whitespace separated words.
///
/// Quotes do not keep a literal together, `'Simon Smith'` is two words. The
/// lexer only remembers whether a word touches a quoted region so that
/// keyword lookups can skip it.
pub(crate) struct Lexer<'a> {
    src: &'a str,
    iter: Peekable<CharIndices<'a>>,
    in_quote: bool,
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Spanned<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        // consume whitespace
        self.iter_next_while(|c| c.is_whitespace());

        let &(begin, _) = self.iter.peek()?;
        let mut quoted = self.in_quote;

        while let Some((_, c)) = self.iter.next_if(|(_, c)| !c.is_whitespace()) {
            if c == '\'' {
                self.in_quote = !self.in_quote;
                quoted = true;
            }
        }

        let end = self.iter.peek().map_or(self.src.len(), |&(i, _)| i);
        let token = if quoted {
            Token::Literal
        } else {
            Keyword::from_str(&self.src[begin..end])
                .map(Token::Keyword)
                .unwrap_or(Token::Word)
        };

        Some((token, begin..end))
    }
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            src,
            iter: src.char_indices().peekable(),
            in_quote: false,
        }
    }

    fn iter_next_while(&mut self, func: impl Fn(&char) -> bool) {
        while self.iter.next_if(|(_, c)| func(c)).is_some() {}
    }
}
