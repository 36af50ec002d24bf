use {core::fmt, def::ResultSet};

/// A successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Message(String),
    Rows(ResultSet),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => write!(f, "[OK] {}", message),
            Self::Rows(rows) => write!(f, "[OK]\n{}", rows),
        }
    }
}
