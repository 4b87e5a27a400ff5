use serde::Serialize;

use super::codes::{normalize_city_name, CardCode, StateCode};
use super::metrics::{self, DerivedMetrics};

/// One player's city card.
///
/// Raw fields are only reachable through setters. Any setter touching a
/// field the derived metrics depend on drops the memoized metrics, so
/// `derived()` never returns values computed from older raw data.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CityProfile {
    state: StateCode,
    code: CardCode,
    city: String,
    population: u64,
    area_km2: f64,
    gdp_billions: f64,
    points_of_interest: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    derived: Option<DerivedMetrics>,
}

/// Raw fields a card is built from
#[derive(Debug, Clone, Default)]
pub struct RawCard {
    pub state: StateCode,
    pub code: CardCode,
    pub city: String,
    pub population: u64,
    pub area_km2: f64,
    pub gdp_billions: f64,
    pub points_of_interest: u32,
}

impl CityProfile {
    /// Build a card from raw fields and compute its metrics right away
    pub fn new(raw: RawCard) -> Self {
        let mut profile = Self {
            state: raw.state,
            code: raw.code,
            city: normalize_city_name(&raw.city),
            population: raw.population,
            area_km2: sanitize(raw.area_km2),
            gdp_billions: sanitize(raw.gdp_billions),
            points_of_interest: raw.points_of_interest,
            derived: None,
        };
        profile.compute_derived();
        profile
    }

    pub fn state(&self) -> StateCode {
        self.state
    }

    pub fn code(&self) -> &CardCode {
        &self.code
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn area_km2(&self) -> f64 {
        self.area_km2
    }

    pub fn gdp_billions(&self) -> f64 {
        self.gdp_billions
    }

    pub fn points_of_interest(&self) -> u32 {
        self.points_of_interest
    }

    /// Memoized metrics, `None` until `compute_derived` runs
    pub fn derived(&self) -> Option<&DerivedMetrics> {
        self.derived.as_ref()
    }

    pub fn has_derived(&self) -> bool {
        self.derived.is_some()
    }

    /// (Re)compute density and per-capita output from the current raw fields
    pub fn compute_derived(&mut self) -> &DerivedMetrics {
        self.derived
            .insert(metrics::compute(self.population, self.area_km2, self.gdp_billions))
    }

    /// Compute metrics only if they are missing
    pub fn ensure_derived(&mut self) -> &DerivedMetrics {
        let (population, area, gdp) = (self.population, self.area_km2, self.gdp_billions);
        self.derived
            .get_or_insert_with(|| metrics::compute(population, area, gdp))
    }

    pub fn set_state(&mut self, state: StateCode) {
        self.state = state;
    }

    pub fn set_code(&mut self, code: CardCode) {
        self.code = code;
    }

    pub fn set_city(&mut self, city: &str) {
        self.city = normalize_city_name(city);
    }

    pub fn set_points_of_interest(&mut self, points: u32) {
        self.points_of_interest = points;
    }

    pub fn set_population(&mut self, population: u64) {
        self.population = population;
        self.derived = None;
    }

    pub fn set_area_km2(&mut self, area_km2: f64) {
        self.area_km2 = sanitize(area_km2);
        self.derived = None;
    }

    pub fn set_gdp_billions(&mut self, gdp_billions: f64) {
        self.gdp_billions = sanitize(gdp_billions);
        self.derived = None;
    }
}

// Negative, NaN and infinite inputs never reach the core from the prompt or
// deck layers; clamp anyway so metrics stay finite.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
