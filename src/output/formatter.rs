use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::card::CityProfile;
use crate::config::{DisplayConfig, DEFAULT_SCORE_DECIMALS, DEFAULT_VALUE_DECIMALS};
use crate::game::{MatchResult, Outcome};
use crate::scoring::{Attribute, OrderingRule};

/// How numbers and colors are rendered
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    pub use_colors: bool,
    pub value_decimals: usize,
    pub score_decimals: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            use_colors: false,
            value_decimals: DEFAULT_VALUE_DECIMALS,
            score_decimals: DEFAULT_SCORE_DECIMALS,
        }
    }
}

impl FormatOptions {
    /// Resolve options from config, auto-detecting color when unset
    pub fn from_display(display: &DisplayConfig) -> Self {
        Self {
            use_colors: display.color.unwrap_or_else(should_use_colors),
            value_decimals: display.value_decimals(),
            score_decimals: display.score_decimals(),
        }
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Attribute menu, one numbered line per attribute
pub fn format_menu(use_colors: bool) -> String {
    let mut lines = vec!["Available attributes:".to_string()];
    for attr in Attribute::ALL {
        let hint = match attr.ordering() {
            OrderingRule::LowerIsBetter => " (lower is better)",
            OrderingRule::HigherIsBetter => "",
        };
        let line = if use_colors {
            format!("{} - {}{}", attr.index().bold(), attr.name(), hint.dimmed())
        } else {
            format!("{} - {}{}", attr.index(), attr.name(), hint)
        };
        lines.push(line);
    }
    lines.join("\n")
}

/// Multi-line card summary (for verbose mode)
pub fn format_card_detail(card: &CityProfile, opts: &FormatOptions) -> String {
    let decimals = opts.value_decimals;
    let (density, per_capita) = match card.derived() {
        Some(d) => (
            format!("{:.*}", decimals, d.population_density),
            format!("{:.*}", decimals, d.output_per_capita),
        ),
        None => ("-".to_string(), "-".to_string()),
    };
    let title = format!("{} [{}/{}]", display_city(card.city()), card.state(), card.code());
    let title = if opts.use_colors {
        title.bold().to_string()
    } else {
        title
    };

    format!(
        "{}\n  Population: {}\n  Area: {:.*} km²\n  GDP: {:.*} billion\n  Points of interest: {}\n  Density: {}/km²\n  GDP per capita: {}",
        title,
        card.population(),
        decimals,
        card.area_km2(),
        decimals,
        card.gdp_billions(),
        card.points_of_interest(),
        density,
        per_capita,
    )
}

/// Full comparison report: per-attribute values, aggregate scores, winner
pub fn format_match_result(result: &MatchResult, opts: &FormatOptions) -> String {
    let first = display_city(&result.first_city);
    let second = display_city(&result.second_city);
    let width = name_width();
    let first = truncate_name(first, width);
    let second = truncate_name(second, width);

    let mut lines = vec![format!("Comparing {} and {}", first, second)];

    for (i, cmp) in result.comparisons.iter().enumerate() {
        let heading = format!("Attribute {}: {}", i + 1, cmp.attribute.name());
        lines.push(if opts.use_colors {
            heading.cyan().to_string()
        } else {
            heading
        });
        lines.push(format!("  {}: {:.*}", first, opts.value_decimals, cmp.first));
        lines.push(format!("  {}: {:.*}", second, opts.value_decimals, cmp.second));
    }

    lines.push(String::new());
    lines.push("Final result (after per-attribute rules):".to_string());
    lines.push(format!("{}: {:.*}", first, opts.score_decimals, result.first_score));
    lines.push(format!("{}: {:.*}", second, opts.score_decimals, result.second_score));

    let verdict = match result.outcome {
        Outcome::FirstWins => format!("Winner: {}", first),
        Outcome::SecondWins => format!("Winner: {}", second),
        Outcome::Tie => "Tie!".to_string(),
    };
    lines.push(if opts.use_colors {
        verdict.green().bold().to_string()
    } else {
        verdict
    });

    lines.join("\n")
}

/// Pretty JSON for scripting
pub fn format_json(result: &MatchResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize match result")
}

fn display_city(name: &str) -> &str {
    if name.is_empty() {
        "(unnamed)"
    } else {
        name
    }
}

/// Room left for a city name on one line, `None` when not writing to a terminal
fn name_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| (w as usize).saturating_sub(20).max(10))
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: Option<usize>) -> String {
    let Some(max_width) = max_width else {
        return name.to_string();
    };
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::RawCard;
    use crate::game::AttributeComparison;

    fn sample_result(outcome: Outcome) -> MatchResult {
        MatchResult {
            first_city: "Springfield".to_string(),
            second_city: "Shelbyville".to_string(),
            comparisons: [
                AttributeComparison {
                    attribute: Attribute::Population,
                    first: 1_000_000.0,
                    second: 500_000.0,
                },
                AttributeComparison {
                    attribute: Attribute::PopulationDensity,
                    first: 2000.0,
                    second: 500.0,
                },
            ],
            first_score: 1_000_000.0005,
            second_score: 500_000.002,
            outcome,
        }
    }

    #[test]
    fn test_format_menu_lists_all() {
        let menu = format_menu(false);
        assert_eq!(menu.lines().count(), 7);
        assert!(menu.contains("1 - Population"));
        assert!(menu.contains("5 - Population Density (lower is better)"));
        assert!(menu.contains("6 - GDP per Capita"));
    }

    #[test]
    fn test_format_match_result_winner() {
        let out = format_match_result(&sample_result(Outcome::FirstWins), &FormatOptions::default());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Comparing Springfield and Shelbyville");
        assert_eq!(lines[1], "Attribute 1: Population");
        assert_eq!(lines[2], "  Springfield: 1000000.00");
        assert_eq!(lines[3], "  Shelbyville: 500000.00");
        assert_eq!(lines[4], "Attribute 2: Population Density");
        assert!(out.contains("Springfield: 1000000.0005"));
        assert!(out.contains("Shelbyville: 500000.0020"));
        assert!(out.ends_with("Winner: Springfield"));
    }

    #[test]
    fn test_format_match_result_tie() {
        let out = format_match_result(&sample_result(Outcome::Tie), &FormatOptions::default());
        assert!(out.ends_with("Tie!"));
    }

    #[test]
    fn test_format_match_result_custom_decimals() {
        let opts = FormatOptions {
            use_colors: false,
            value_decimals: 0,
            score_decimals: 1,
        };
        let out = format_match_result(&sample_result(Outcome::SecondWins), &opts);
        assert!(out.contains("  Springfield: 1000000\n"));
        assert!(out.contains("Shelbyville: 500000.0\n"));
        assert!(out.ends_with("Winner: Shelbyville"));
    }

    #[test]
    fn test_format_json() {
        let json = format_json(&sample_result(Outcome::SecondWins)).unwrap();
        assert!(json.contains("\"outcome\": \"second-wins\""));
        assert!(json.contains("\"attribute\": \"population\""));
    }

    #[test]
    fn test_format_card_detail() {
        let card = CityProfile::new(RawCard {
            state: "C".parse().unwrap(),
            code: "C07".parse().unwrap(),
            city: "Ogdenville".to_string(),
            population: 1_000,
            area_km2: 4.0,
            gdp_billions: 0.5,
            points_of_interest: 2,
        });
        let out = format_card_detail(&card, &FormatOptions::default());
        assert!(out.starts_with("Ogdenville [C/C07]"));
        assert!(out.contains("Density: 250.00/km²"));
        assert!(out.contains("GDP per capita: 500000.00"));
    }

    #[test]
    fn test_empty_city_name() {
        let mut result = sample_result(Outcome::FirstWins);
        result.first_city = String::new();
        let out = format_match_result(&result, &FormatOptions::default());
        assert!(out.ends_with("Winner: (unnamed)"));
    }

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("Short", Some(20)), "Short");
        assert_eq!(truncate_name("Llanfairpwllgwyngyll", Some(10)), "Llanfai...");
        assert_eq!(truncate_name("Anything at all", None), "Anything at all");
        assert_eq!(truncate_name("Hello", Some(3)), "Hel");
    }
}
