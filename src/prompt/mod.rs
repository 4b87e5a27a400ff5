use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::card::{CardCode, CityProfile, StateCode};
use crate::scoring::Attribute;

const RETRY_MESSAGE: &str = "Invalid value. Try again: ";

/// Line-oriented question/answer session over any reader and writer.
///
/// Every numeric question re-prompts until the answer parses; running out
/// of input is an error instead of an endless loop.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line of text
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write to stdout")
    }

    /// Prompt user with a message and return their trimmed input.
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message).context("Failed to write to stdout")?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<String> {
        self.output.flush().context("Failed to flush stdout")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            bail!("Input ended before the game was set up");
        }
        Ok(line.trim().to_string())
    }

    /// Ask until the answer parses as `T` and passes `accept`
    fn prompt_parsed<T, F>(&mut self, message: &str, accept: F) -> Result<T>
    where
        T: FromStr,
        F: Fn(&T) -> bool,
    {
        let mut answer = self.prompt(message)?;
        loop {
            match answer.parse::<T>() {
                Ok(value) if accept(&value) => return Ok(value),
                _ => {
                    tracing::debug!(answer = %answer, "rejected input");
                    answer = self.prompt(RETRY_MESSAGE)?;
                }
            }
        }
    }

    fn prompt_amount(&mut self, message: &str) -> Result<f64> {
        self.prompt_parsed(message, |v: &f64| v.is_finite() && *v >= 0.0)
    }

    /// Capture one card's raw fields and compute its metrics
    pub fn read_card(&mut self, title: &str) -> Result<CityProfile> {
        self.say("")?;
        self.say(&format!("=== {} ===", title))?;

        let mut profile = CityProfile::default();

        let state: StateCode = self.prompt_parsed("State (A-H): ", |_| true)?;
        profile.set_state(state);

        let code: CardCode = self.prompt_parsed("Card code (e.g. A01): ", |_| true)?;
        profile.set_code(code);

        let city = self.prompt("City name: ")?;
        profile.set_city(&city);

        let population: u64 = self.prompt_parsed("Population: ", |_| true)?;
        profile.set_population(population);

        let area = self.prompt_amount("Area (km²): ")?;
        profile.set_area_km2(area);

        let gdp = self.prompt_amount("GDP (billions): ")?;
        profile.set_gdp_billions(gdp);

        let points: u32 = self.prompt_parsed("Number of points of interest: ", |_| true)?;
        profile.set_points_of_interest(points);

        profile.compute_derived();
        Ok(profile)
    }

    /// Ask for a menu index, refusing out-of-range values and `already_chosen`
    pub fn read_attribute(
        &mut self,
        message: &str,
        already_chosen: Option<Attribute>,
    ) -> Result<Attribute> {
        let mut answer = self.prompt(message)?;
        loop {
            let Ok(index) = answer.parse::<i64>() else {
                answer = self.prompt(RETRY_MESSAGE)?;
                continue;
            };
            match u8::try_from(index).map(Attribute::from_index) {
                Ok(Ok(attr)) if Some(attr) == already_chosen => {
                    self.say("Attribute already chosen. Select another.")?;
                }
                Ok(Ok(attr)) => return Ok(attr),
                _ => {
                    self.say(&format!(
                        "Invalid attribute. Choose between 1 and {}.",
                        Attribute::ALL.len()
                    ))?;
                }
            }
            answer = self.prompt(message)?;
        }
    }

    /// Ask for two different attributes
    pub fn read_attribute_pair(&mut self) -> Result<(Attribute, Attribute)> {
        let first = self.read_attribute("Choose the first attribute to compare: ", None)?;
        let second = self.read_attribute(
            "Choose the second attribute (different from the first): ",
            Some(first),
        )?;
        Ok((first, second))
    }
}
