use {
    super::error::{Result, WhereSyntaxSnafu},
    def::{Comparator, Condition, Value},
    snafu::prelude::*,
};

const SYMBOLS: [(&str, Comparator); 6] = [
    ("==", Comparator::Equal),
    ("!=", Comparator::NotEqual),
    (">=", Comparator::GreaterThanOrEqual),
    ("<=", Comparator::LessThanOrEqual),
    (">", Comparator::GreaterThan),
    ("<", Comparator::LessThan),
];

/// Parses `attribute comparator value`. One pair of parentheses around the
/// whole clause is dropped. With `allow_assign`, a bare `=` means `==`.
pub(super) fn parse_condition(clause: &str, allow_assign: bool) -> Result<Condition> {
    let clause = clause.trim();
    let inner = clause
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(clause)
        .trim();

    let end = inner
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(inner.len());
    let (attribute, rest) = inner.split_at(end);

    let (comparator, operand) = split_comparator(rest.trim_start(), allow_assign)
        .filter(|(_, operand)| !attribute.is_empty() && !operand.is_empty())
        .context(WhereSyntaxSnafu { clause })?;

    Ok(Condition {
        attribute: attribute.to_string(),
        comparator,
        value: Value::parse_operand(operand),
    })
}

fn split_comparator(s: &str, allow_assign: bool) -> Option<(Comparator, &str)> {
    for (symbol, comparator) in SYMBOLS {
        if let Some(rest) = s.strip_prefix(symbol) {
            return Some((comparator, rest.trim()));
        }
    }

    if allow_assign {
        if let Some(rest) = s.strip_prefix('=') {
            return Some((Comparator::Equal, rest.trim()));
        }
    }

    let rest = s
        .get(..4)
        .filter(|word| word.eq_ignore_ascii_case("LIKE"))
        .map(|_| &s[4..])?;
    rest.starts_with(|c: char| c.is_whitespace() || c == '\'')
        .then(|| (Comparator::Like, rest.trim()))
}
