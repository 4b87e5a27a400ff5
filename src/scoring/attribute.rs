use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

/// Whether a bigger raw value makes a card stronger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderingRule {
    HigherIsBetter,
    LowerIsBetter,
}

/// The six attributes a match can be played on.
///
/// Menu order matters: `index()` is what players type at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Attribute {
    Population,
    Area,
    #[serde(rename = "gdp")]
    EconomicOutput,
    PointsOfInterest,
    #[serde(rename = "density")]
    PopulationDensity,
    #[serde(rename = "gdp-per-capita")]
    OutputPerCapita,
}

/// Static metadata for one catalog entry
#[derive(Debug, Clone, Copy)]
pub struct AttributeInfo {
    pub attribute: Attribute,
    pub index: u8,
    pub key: &'static str,
    pub name: &'static str,
    pub ordering: OrderingRule,
}

static CATALOG: [AttributeInfo; 6] = [
    AttributeInfo {
        attribute: Attribute::Population,
        index: 1,
        key: "population",
        name: "Population",
        ordering: OrderingRule::HigherIsBetter,
    },
    AttributeInfo {
        attribute: Attribute::Area,
        index: 2,
        key: "area",
        name: "Area",
        ordering: OrderingRule::HigherIsBetter,
    },
    AttributeInfo {
        attribute: Attribute::EconomicOutput,
        index: 3,
        key: "gdp",
        name: "GDP",
        ordering: OrderingRule::HigherIsBetter,
    },
    AttributeInfo {
        attribute: Attribute::PointsOfInterest,
        index: 4,
        key: "points-of-interest",
        name: "Points of Interest",
        ordering: OrderingRule::HigherIsBetter,
    },
    AttributeInfo {
        attribute: Attribute::PopulationDensity,
        index: 5,
        key: "density",
        name: "Population Density",
        ordering: OrderingRule::LowerIsBetter,
    },
    AttributeInfo {
        attribute: Attribute::OutputPerCapita,
        index: 6,
        key: "gdp-per-capita",
        name: "GDP per Capita",
        ordering: OrderingRule::HigherIsBetter,
    },
];

impl Attribute {
    /// All attributes in menu order
    pub const ALL: [Attribute; 6] = [
        Attribute::Population,
        Attribute::Area,
        Attribute::EconomicOutput,
        Attribute::PointsOfInterest,
        Attribute::PopulationDensity,
        Attribute::OutputPerCapita,
    ];

    pub fn info(self) -> &'static AttributeInfo {
        // CATALOG is laid out in enum declaration order
        &CATALOG[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn key(self) -> &'static str {
        self.info().key
    }

    pub fn index(self) -> u8 {
        self.info().index
    }

    pub fn ordering(self) -> OrderingRule {
        self.info().ordering
    }

    /// Resolve a 1-based menu index
    pub fn from_index(index: u8) -> Result<Self, GameError> {
        CATALOG
            .iter()
            .find(|info| info.index == index)
            .map(|info| info.attribute)
            .ok_or_else(|| GameError::UnknownAttribute(index.to_string()))
    }
}

/// Display name for a raw menu index
pub fn display_name_for(index: u8) -> Result<&'static str, GameError> {
    Attribute::from_index(index).map(Attribute::name)
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = GameError;

    /// Accepts a catalog key ("density") or a menu index ("5")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<u8>() {
            return Attribute::from_index(index);
        }
        CATALOG
            .iter()
            .find(|info| info.key.eq_ignore_ascii_case(s))
            .map(|info| info.attribute)
            .ok_or_else(|| GameError::UnknownAttribute(s.to_string()))
    }
}
