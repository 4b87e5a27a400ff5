use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use city_trumps::config::{self, Config};
use city_trumps::output::{self, FormatOptions};
use city_trumps::prompt::Prompter;
use city_trumps::{Attribute, MatchSelection};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
enum OutputFormat {
    #[default]
    Human,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Enter two cards interactively and play one round (default)
    Play {
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Play one round from a deck file holding two cards
    Compare {
        /// YAML file with exactly two cards
        #[arg(short, long)]
        deck: PathBuf,

        /// First attribute (key like "density" or menu index 1-6)
        #[arg(long)]
        first: Option<Attribute>,

        /// Second attribute, different from the first
        #[arg(long)]
        second: Option<Attribute>,

        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// List the attributes a round can be played on
    Attributes,
}

#[derive(Parser, Debug)]
#[command(name = "city-trumps")]
#[command(about = "Two-player city card comparison game", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/city-trumps/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play {
        format: OutputFormat::Human,
    });

    if let Err(e) = city_trumps::telemetry::init(cli.verbose) {
        eprintln!("{}", e);
    }

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let opts = FormatOptions::from_display(&config.display);

    let code = match command {
        Commands::Attributes => {
            println!("{}", output::format_menu(opts.use_colors));
            EXIT_SUCCESS
        }
        Commands::Play { format } => match play(&opts, format, cli.verbose) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                EXIT_INPUT
            }
        },
        Commands::Compare {
            deck,
            first,
            second,
            format,
        } => compare(&config, &opts, &deck, first, second, format, cli.verbose),
    };

    std::process::exit(code);
}

fn play(opts: &FormatOptions, format: OutputFormat, verbose: bool) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    let first = prompter.read_card("Card 1")?;
    let second = prompter.read_card("Card 2")?;

    prompter.say("")?;
    prompter.say(&output::format_menu(opts.use_colors))?;
    let (attr1, attr2) = prompter.read_attribute_pair()?;
    prompter.say("")?;
    drop(prompter);

    let selection = MatchSelection::new(first, second, attr1, attr2)?;
    report(selection, opts, format, verbose)
}

fn compare(
    config: &Config,
    opts: &FormatOptions,
    deck_path: &std::path::Path,
    first: Option<Attribute>,
    second: Option<Attribute>,
    format: OutputFormat,
    verbose: bool,
) -> i32 {
    let deck = match config::load_deck(deck_path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Deck error: {:#}", e);
            return EXIT_CONFIG;
        }
    };

    let [card1, card2] = match config::validate_deck(&deck) {
        Ok(cards) => cards,
        Err(errors) => {
            eprintln!("Deck errors in {}:", deck_path.display());
            for error in errors {
                eprintln!("  - {}", error);
            }
            return EXIT_CONFIG;
        }
    };

    let Some((attr1, attr2)) = resolve_attributes(config, first, second) else {
        eprintln!("Choose two attributes with --first and --second,");
        eprintln!("or set default_attributes in the config file:");
        eprintln!("  default_attributes: [population, density]");
        eprintln!();
        eprintln!("{}", output::format_menu(false));
        return EXIT_INPUT;
    };

    let result = MatchSelection::new(card1, card2, attr1, attr2)
        .map_err(anyhow::Error::from)
        .and_then(|selection| report(selection, opts, format, verbose));

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            EXIT_INPUT
        }
    }
}

/// Command-line attributes first, then the configured default pair
fn resolve_attributes(
    config: &Config,
    first: Option<Attribute>,
    second: Option<Attribute>,
) -> Option<(Attribute, Attribute)> {
    match (first, second) {
        (Some(a), Some(b)) => Some((a, b)),
        (None, None) => config.default_pair(),
        _ => None,
    }
}

fn report(
    mut selection: MatchSelection,
    opts: &FormatOptions,
    format: OutputFormat,
    verbose: bool,
) -> Result<()> {
    let result = city_trumps::evaluate(&mut selection)?;

    if verbose {
        for card in [&selection.first, &selection.second] {
            eprintln!("{}", output::format_card_detail(card, opts));
        }
        eprintln!();
    }

    match format {
        OutputFormat::Human => println!("{}", output::format_match_result(&result, opts)),
        OutputFormat::Json => println!("{}", output::format_json(&result)?),
    }
    Ok(())
}
