use serde::{Deserialize, Serialize};

/// User configuration.
///
/// Example YAML:
/// ```yaml
/// display:
///   color: false
///   value_decimals: 2
///   score_decimals: 4
/// default_attributes: [population, density]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    /// Attribute pair `compare` uses when none is given on the command line.
    /// Entries are catalog keys ("gdp") or menu indices ("3").
    #[serde(default)]
    pub default_attributes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Force colors on or off; auto-detect the terminal when omitted
    #[serde(default)]
    pub color: Option<bool>,

    /// Decimal places for attribute values (default: 2)
    #[serde(default)]
    pub value_decimals: Option<usize>,

    /// Decimal places for aggregate scores (default: 4)
    #[serde(default)]
    pub score_decimals: Option<usize>,
}

pub const DEFAULT_VALUE_DECIMALS: usize = 2;
pub const DEFAULT_SCORE_DECIMALS: usize = 4;

impl DisplayConfig {
    pub fn value_decimals(&self) -> usize {
        self.value_decimals.unwrap_or(DEFAULT_VALUE_DECIMALS)
    }

    pub fn score_decimals(&self) -> usize {
        self.score_decimals.unwrap_or(DEFAULT_SCORE_DECIMALS)
    }
}
