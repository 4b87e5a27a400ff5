use city_trumps::config::{load_deck, validate_deck};
use city_trumps::output::{format_match_result, FormatOptions};
use city_trumps::prompt::Prompter;
use city_trumps::{evaluate, Attribute, GameError, MatchSelection, Outcome};
use std::io::Cursor;

const DECK: &str = r#"
cards:
  - state: A
    code: A01
    city: Springfield
    population: 1000000
    area_km2: 500
    gdp_billions: 10
    points_of_interest: 12
  - state: B
    code: B01
    city: Shelbyville
    population: 100000
    area_km2: 1000
    gdp_billions: 5
    points_of_interest: 4
"#;

fn write_deck(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.yaml");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn deck_round_on_density_and_per_capita() {
    let (_dir, path) = write_deck(DECK);
    let deck = load_deck(&path).unwrap();
    let [first, second] = validate_deck(&deck).unwrap();

    let mut selection = MatchSelection::new(
        first,
        second,
        Attribute::PopulationDensity,
        Attribute::OutputPerCapita,
    )
    .unwrap();
    let result = evaluate(&mut selection).unwrap();

    // Springfield: 1/2000 + 10_000, Shelbyville: 1/100 + 50_000
    assert_eq!(result.comparisons[0].first, 2000.0);
    assert_eq!(result.comparisons[0].second, 100.0);
    assert_eq!(result.comparisons[1].first, 10_000.0);
    assert_eq!(result.comparisons[1].second, 50_000.0);
    assert!((result.first_score - 10_000.0005).abs() < 1e-9);
    assert!((result.second_score - 50_000.01).abs() < 1e-9);
    assert_eq!(result.outcome, Outcome::SecondWins);

    let text = format_match_result(&result, &FormatOptions::default());
    assert!(text.ends_with("Winner: Shelbyville"));
}

#[test]
fn swapping_cards_flips_winner() {
    let (_dir, path) = write_deck(DECK);
    let [first, second] = validate_deck(&load_deck(&path).unwrap()).unwrap();

    let selection =
        MatchSelection::new(first, second, Attribute::Population, Attribute::Area).unwrap();
    let forward = evaluate(&mut selection.clone()).unwrap();
    let backward = evaluate(&mut selection.swapped()).unwrap();

    assert_eq!(forward.outcome, Outcome::FirstWins);
    assert_eq!(backward.outcome, Outcome::SecondWins);
    assert_eq!(forward.winner(), backward.winner());
}

#[test]
fn duplicate_attributes_are_rejected() {
    let (_dir, path) = write_deck(DECK);
    let [first, second] = validate_deck(&load_deck(&path).unwrap()).unwrap();

    let err = MatchSelection::new(first, second, Attribute::Area, Attribute::Area).unwrap_err();
    assert_eq!(err, GameError::DuplicateAttributeSelection(Attribute::Area));
}

#[test]
fn zero_area_card_gets_worst_density_score() {
    let (_dir, path) = write_deck(&DECK.replace("area_km2: 500", "area_km2: 0"));
    let [first, second] = validate_deck(&load_deck(&path).unwrap()).unwrap();

    let mut selection = MatchSelection::new(
        first,
        second,
        Attribute::PopulationDensity,
        Attribute::PointsOfInterest,
    )
    .unwrap();
    let result = evaluate(&mut selection).unwrap();

    assert_eq!(result.comparisons[0].first, 0.0);
    assert_eq!(result.first_score, 12.0);
    assert!((result.second_score - 4.01).abs() < 1e-12);
    assert_eq!(result.outcome, Outcome::FirstWins);
}

#[test]
fn interactive_round_end_to_end() {
    let input = "\
A\nA01\nLeft\n1000\n10\n1\n5\n\
B\nB01\nRight\n1000\n10\n1\n5\n\
1\n1\n4\n";
    let mut prompter = Prompter::new(Cursor::new(input), Vec::new());

    let first = prompter.read_card("Card 1").unwrap();
    let second = prompter.read_card("Card 2").unwrap();
    let (a1, a2) = prompter.read_attribute_pair().unwrap();
    assert_eq!((a1, a2), (Attribute::Population, Attribute::PointsOfInterest));

    let mut selection = MatchSelection::new(first, second, a1, a2).unwrap();
    let result = evaluate(&mut selection).unwrap();
    assert_eq!(result.outcome, Outcome::Tie);
    assert_eq!(result.first_score, 1005.0);

    let text = format_match_result(&result, &FormatOptions::default());
    assert!(text.ends_with("Tie!"));
}
