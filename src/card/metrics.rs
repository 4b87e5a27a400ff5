use serde::Serialize;

/// GDP is entered in billions; per-capita output is in whole currency units
pub const GDP_UNIT: f64 = 1_000_000_000.0;

/// Values derived from a card's raw fields
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedMetrics {
    /// Inhabitants per km²
    pub population_density: f64,
    /// GDP per inhabitant, in currency units
    pub output_per_capita: f64,
}

/// Derive density and per-capita output.
///
/// A zero area or zero population yields an explicit 0 for the affected
/// metric instead of an infinite or NaN value.
pub fn compute(population: u64, area_km2: f64, gdp_billions: f64) -> DerivedMetrics {
    let population = population as f64;

    let population_density = if area_km2 > 0.0 {
        population / area_km2
    } else {
        0.0
    };

    let output_per_capita = if population > 0.0 {
        (gdp_billions * GDP_UNIT) / population
    } else {
        0.0
    };

    DerivedMetrics {
        population_density,
        output_per_capita,
    }
}
