use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Longest card code accepted ("A01" style, up to four characters)
pub const MAX_CODE_LEN: usize = 4;

/// Longest city name kept on a card
pub const MAX_CITY_LEN: usize = 49;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardFieldError {
    InvalidState(String),
    InvalidCode(String),
}

impl fmt::Display for CardFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardFieldError::InvalidState(s) => {
                write!(f, "invalid state '{}': expected a single letter A-H", s)
            }
            CardFieldError::InvalidCode(s) => write!(
                f,
                "invalid card code '{}': expected 1-{} letters or digits (e.g. A01)",
                s, MAX_CODE_LEN
            ),
        }
    }
}

impl std::error::Error for CardFieldError {}

/// Category letter a card belongs to, `A` through `H`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct StateCode(char);

impl StateCode {
    pub fn letter(self) -> char {
        self.0
    }
}

impl Default for StateCode {
    fn default() -> Self {
        StateCode('A')
    }
}

impl FromStr for StateCode {
    type Err = CardFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if ('A'..='H').contains(&c.to_ascii_uppercase()) => {
                Ok(StateCode(c.to_ascii_uppercase()))
            }
            _ => Err(CardFieldError::InvalidState(trimmed.to_string())),
        }
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<StateCode> for String {
    fn from(code: StateCode) -> Self {
        code.0.to_string()
    }
}

/// Short card identifier such as `A01`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CardCode(String);

impl CardCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CardCode {
    fn default() -> Self {
        CardCode("A01".to_string())
    }
}

impl FromStr for CardCode {
    type Err = CardFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let valid = !trimmed.is_empty()
            && trimmed.chars().count() <= MAX_CODE_LEN
            && trimmed.chars().all(|c| c.is_ascii_alphanumeric());
        if valid {
            Ok(CardCode(trimmed.to_ascii_uppercase()))
        } else {
            Err(CardFieldError::InvalidCode(trimmed.to_string()))
        }
    }
}

impl fmt::Display for CardCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trim a city name and cut it to `MAX_CITY_LEN` characters
pub fn normalize_city_name(name: &str) -> String {
    name.trim().chars().take(MAX_CITY_LEN).collect()
}
