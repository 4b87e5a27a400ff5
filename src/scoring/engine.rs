use super::accessor::base_value;
use super::attribute::{Attribute, OrderingRule};
use crate::card::CityProfile;
use crate::error::GameError;

/// Score of one attribute on a card.
///
/// Higher-is-better attributes score their raw value. Lower-is-better
/// attributes score the reciprocal, and a zero value scores 0: a card with
/// zero density (zero area) gets the worst density score, not the best.
pub fn score(profile: &CityProfile, attribute: Attribute) -> Result<f64, GameError> {
    let value = base_value(profile, attribute)?;
    Ok(apply_ordering(attribute.ordering(), value))
}

/// Sum of both attribute scores.
///
/// Scores are added as-is even when the attributes have unrelated units
/// (people + km²); that is how the game is played.
pub fn aggregate_score(
    profile: &CityProfile,
    first: Attribute,
    second: Attribute,
) -> Result<f64, GameError> {
    Ok(score(profile, first)? + score(profile, second)?)
}

pub fn apply_ordering(rule: OrderingRule, value: f64) -> f64 {
    match rule {
        OrderingRule::HigherIsBetter => value,
        OrderingRule::LowerIsBetter => {
            if value > 0.0 {
                1.0 / value
            } else {
                0.0
            }
        }
    }
}
