use {
    crate::error::{self, Result},
    core::fmt,
    snafu::OptionExt,
};

/// A single cell. The variant is decided once, from the literal the value was
/// written with, and every comparison works on the tagged value afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl Value {
    /// Parses a literal as it appears in a VALUES or SET list.
    ///
    /// A literal wrapped in single quotes is a string (`''` stands for one
    /// quote). Anything else must be a numeral, `TRUE`, `FALSE` or `NULL`.
    /// A numeral whose number would render differently, like `007` or
    /// `2.50`, keeps its text as a string.
    pub fn parse_literal(literal: &str) -> Result<Self> {
        if let Some(s) = unquote(literal) {
            return Ok(Self::String(s));
        }

        Self::parse_bare(literal).context(error::InvalidLiteralSnafu { literal })
    }

    /// Like [`Value::parse_literal`], but a bare word that is not a keyword
    /// or numeral is taken as a string instead of failing. Used for the
    /// right-hand side of a condition.
    pub fn parse_operand(operand: &str) -> Self {
        unquote(operand)
            .map(Self::String)
            .or_else(|| Self::parse_bare(operand))
            .unwrap_or_else(|| Self::String(operand.to_string()))
    }

    /// Rebuilds a value from its persisted text. The cell is only typed when
    /// the typed value renders back to the very same text.
    pub fn from_cell(cell: &str) -> Self {
        Self::parse_bare(cell)
            .filter(|value| value.to_string() == cell)
            .unwrap_or_else(|| Self::String(cell.to_string()))
    }

    fn parse_bare(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "NULL" => return Some(Self::Null),
            "TRUE" => return Some(Self::Boolean(true)),
            "FALSE" => return Some(Self::Boolean(false)),
            _ => {}
        }

        if !is_numeral(s) {
            return None;
        }

        let number = if s.contains('.') {
            s.parse().ok().map(Self::Float)
        } else {
            s.parse().ok().map(Self::Integer)
        };

        // keeps `007`, `+1`, `2.50` and integers wider than i64 verbatim
        Some(
            number
                .filter(|number| number.to_string() == s)
                .unwrap_or_else(|| Self::String(s.to_string())),
        )
    }

    /// The numeric reading of the value, if it has one. Strings count when
    /// their text parses as a finite number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            Self::Null | Self::Boolean(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Boolean(true) => f.write_str("TRUE"),
            Self::Boolean(false) => f.write_str("FALSE"),
            Self::Integer(v) => write!(f, "{}", v),
            // plain decimal notation that always keeps a fractional part
            Self::Float(v) if v.fract() == 0.0 => write!(f, "{}.0", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::String(s) => f.write_str(s),
        }
    }
}

macro_rules! value_conversions {
    ($(($raw:ty, $val:ident),)*) => {
        $(
            impl From<$raw> for Value {
                fn from(raw: $raw) -> Self {
                    Value::$val(raw.into())
                }
            }
        )*
    };
}

value_conversions! {
    (bool, Boolean),
    (i64, Integer),
    (f64, Float),
    (String, String),
    (&str, String),
}

/// Strips the surrounding single quotes of a string literal.
pub(crate) fn unquote(s: &str) -> Option<String> {
    let inner = s.strip_prefix('\'')?.strip_suffix('\'')?;
    Some(inner.replace("''", "'"))
}

/// `[+-]?digits[.digits]`
fn is_numeral(s: &str) -> bool {
    let digits = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    let (int, frac) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    all_digits(int) && frac.map_or(true, all_digits)
}
