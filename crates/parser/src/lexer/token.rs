use core::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    Keyword(Keyword),
    Word,
    /// A word that starts inside a quoted literal or contains a quote.
    /// It never counts as a keyword.
    Literal,
}

macro_rules! define_keywords {
    ($($keyword:ident,)*) => {
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub(crate) enum Keyword {
            $($keyword,)*
        }

        impl Keyword {
            pub(crate) fn as_str(self) -> &'static str {
                match self {
                    $(Self::$keyword => stringify!($keyword),)*
                }
            }
        }

        impl FromStr for Keyword {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case(stringify!($keyword)) {
                        return Ok(Self::$keyword);
                    }
                )*

                Err(())
            }
        }
    };
}

define_keywords! {
    ADD,
    ALTER,
    AND,
    CREATE,
    DATABASE,
    DELETE,
    DROP,
    FROM,
    INSERT,
    INTO,
    JOIN,
    ON,
    SELECT,
    SET,
    TABLE,
    UPDATE,
    USE,
    VALUES,
    WHERE,
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
