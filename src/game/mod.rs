use serde::Serialize;

use crate::card::CityProfile;
use crate::error::GameError;
use crate::scoring::{aggregate_score, base_value, Attribute};

/// Two cards and the two attributes they are compared on
#[derive(Debug, Clone)]
pub struct MatchSelection {
    pub first: CityProfile,
    pub second: CityProfile,
    pub attributes: (Attribute, Attribute),
}

impl MatchSelection {
    /// Build a selection, rejecting a repeated attribute up front
    pub fn new(
        first: CityProfile,
        second: CityProfile,
        first_attribute: Attribute,
        second_attribute: Attribute,
    ) -> Result<Self, GameError> {
        ensure_distinct(first_attribute, second_attribute)?;
        Ok(Self {
            first,
            second,
            attributes: (first_attribute, second_attribute),
        })
    }

    /// Same selection with the two cards swapped
    pub fn swapped(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
            attributes: self.attributes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Tie,
}

impl Outcome {
    pub fn flipped(self) -> Self {
        match self {
            Outcome::FirstWins => Outcome::SecondWins,
            Outcome::SecondWins => Outcome::FirstWins,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

/// Base values of both cards for one chosen attribute
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AttributeComparison {
    pub attribute: Attribute,
    pub first: f64,
    pub second: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub first_city: String,
    pub second_city: String,
    pub comparisons: [AttributeComparison; 2],
    pub first_score: f64,
    pub second_score: f64,
    pub outcome: Outcome,
}

impl MatchResult {
    /// City name of the winner, `None` on a tie
    pub fn winner(&self) -> Option<&str> {
        match self.outcome {
            Outcome::FirstWins => Some(&self.first_city),
            Outcome::SecondWins => Some(&self.second_city),
            Outcome::Tie => None,
        }
    }
}

/// Score both cards on the selected attributes and pick a winner.
///
/// Cards without derived metrics get them computed here; nothing else in
/// the selection is modified.
pub fn evaluate(selection: &mut MatchSelection) -> Result<MatchResult, GameError> {
    let (attr1, attr2) = selection.attributes;
    ensure_distinct(attr1, attr2)?;

    selection.first.ensure_derived();
    selection.second.ensure_derived();

    let first = &selection.first;
    let second = &selection.second;

    let comparisons = [
        compare(first, second, attr1)?,
        compare(first, second, attr2)?,
    ];

    let first_score = aggregate_score(first, attr1, attr2)?;
    let second_score = aggregate_score(second, attr1, attr2)?;

    let outcome = if first_score > second_score {
        Outcome::FirstWins
    } else if second_score > first_score {
        Outcome::SecondWins
    } else {
        Outcome::Tie
    };

    tracing::debug!(
        first = first.city(),
        second = second.city(),
        attributes = %format_args!("{}, {}", attr1.key(), attr2.key()),
        first_score,
        second_score,
        ?outcome,
        "match evaluated"
    );

    Ok(MatchResult {
        first_city: first.city().to_string(),
        second_city: second.city().to_string(),
        comparisons,
        first_score,
        second_score,
        outcome,
    })
}

fn compare(
    first: &CityProfile,
    second: &CityProfile,
    attribute: Attribute,
) -> Result<AttributeComparison, GameError> {
    Ok(AttributeComparison {
        attribute,
        first: base_value(first, attribute)?,
        second: base_value(second, attribute)?,
    })
}

fn ensure_distinct(first: Attribute, second: Attribute) -> Result<(), GameError> {
    if first == second {
        Err(GameError::DuplicateAttributeSelection(first))
    } else {
        Ok(())
    }
}
