use std::str::FromStr;

use crate::common::models::Operator;

/// One calculator button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    Decimal,
    Operator(Operator),
    ClearAll,
    ClearEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown key '{0}' (expected 0-9, '.', + - * / =, AC or CE)")]
pub struct ParseKeyError(pub String);

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() {
                return Ok(Key::Digit(c));
            }
            if c == '.' {
                return Ok(Key::Decimal);
            }
        }
        if let Some(op) = Operator::from_symbol(token) {
            return Ok(Key::Operator(op));
        }
        if token.eq_ignore_ascii_case("ac") {
            return Ok(Key::ClearAll);
        }
        if token.eq_ignore_ascii_case("ce") {
            return Ok(Key::ClearEntry);
        }
        Err(ParseKeyError(token.to_string()))
    }
}

/// Parses a line of whitespace-separated button labels.
pub fn parse_keys(line: &str) -> Result<Vec<Key>, ParseKeyError> {
    line.split_whitespace().map(str::parse::<Key>).collect()
}
