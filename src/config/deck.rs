use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::card::{CardCode, CityProfile, RawCard, StateCode};

/// A match's worth of cards read from YAML.
///
/// Example:
/// ```yaml
/// cards:
///   - state: A
///     code: A01
///     city: Springfield
///     population: 1000000
///     area_km2: 500
///     gdp_billions: 10
///     points_of_interest: 12
///   - state: B
///     code: B01
///     city: Shelbyville
///     population: 500000
///     area_km2: 1000
///     gdp_billions: 5
///     points_of_interest: 4
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DeckFile {
    pub cards: Vec<CardEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CardEntry {
    pub state: String,
    pub code: String,
    #[serde(default)]
    pub city: String,
    pub population: u64,
    pub area_km2: f64,
    pub gdp_billions: f64,
    #[serde(default)]
    pub points_of_interest: u32,
}

/// Read and parse a deck file. Does not validate card contents.
pub fn load_deck(path: &Path) -> Result<DeckFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read deck file at {}", path.display()))?;

    let deck: DeckFile = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse deck: invalid YAML in {}", path.display()))?;

    Ok(deck)
}

/// Validate a deck and turn it into two cards with metrics computed.
/// Returns all validation errors at once (not just the first).
pub fn validate_deck(deck: &DeckFile) -> Result<[CityProfile; 2], Vec<String>> {
    let mut errors = Vec::new();

    if deck.cards.len() != 2 {
        errors.push(format!(
            "cards: expected exactly 2 cards, found {}",
            deck.cards.len()
        ));
    }

    let mut profiles = Vec::with_capacity(deck.cards.len());
    for (i, entry) in deck.cards.iter().enumerate() {
        if let Some(profile) = validate_card(i, entry, &mut errors) {
            profiles.push(profile);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    match <[CityProfile; 2]>::try_from(profiles) {
        Ok(pair) => Ok(pair),
        Err(rest) => Err(vec![format!("cards: expected exactly 2 cards, found {}", rest.len())]),
    }
}

fn validate_card(i: usize, entry: &CardEntry, errors: &mut Vec<String>) -> Option<CityProfile> {
    let before = errors.len();

    let state = entry.state.parse::<StateCode>().map_err(|e| {
        errors.push(format!("cards[{}].state: {}", i, e));
    });
    let code = entry.code.parse::<CardCode>().map_err(|e| {
        errors.push(format!("cards[{}].code: {}", i, e));
    });

    if !entry.area_km2.is_finite() || entry.area_km2 < 0.0 {
        errors.push(format!(
            "cards[{}].area_km2: must be a non-negative number, got {}",
            i, entry.area_km2
        ));
    }
    if !entry.gdp_billions.is_finite() || entry.gdp_billions < 0.0 {
        errors.push(format!(
            "cards[{}].gdp_billions: must be a non-negative number, got {}",
            i, entry.gdp_billions
        ));
    }

    match (state, code) {
        (Ok(state), Ok(code)) if errors.len() == before => Some(CityProfile::new(RawCard {
            state,
            code,
            city: entry.city.clone(),
            population: entry.population,
            area_km2: entry.area_km2,
            gdp_billions: entry.gdp_billions,
            points_of_interest: entry.points_of_interest,
        })),
        _ => None,
    }
}
