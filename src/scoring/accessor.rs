use super::attribute::Attribute;
use crate::card::CityProfile;
use crate::error::GameError;

/// Numeric value of `attribute` on a card, before any ordering rule.
///
/// Derived attributes read the card's memoized metrics and fail with
/// `MetricsNotComputed` if `compute_derived` has not run yet.
pub fn base_value(profile: &CityProfile, attribute: Attribute) -> Result<f64, GameError> {
    let value = match attribute {
        Attribute::Population => profile.population() as f64,
        Attribute::Area => profile.area_km2(),
        Attribute::EconomicOutput => profile.gdp_billions(),
        Attribute::PointsOfInterest => f64::from(profile.points_of_interest()),
        Attribute::PopulationDensity => derived(profile)?.population_density,
        Attribute::OutputPerCapita => derived(profile)?.output_per_capita,
    };
    Ok(value)
}

fn derived(profile: &CityProfile) -> Result<&crate::card::DerivedMetrics, GameError> {
    profile.derived().ok_or(GameError::MetricsNotComputed)
}
