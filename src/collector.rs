// 🧭 Filter Collector - Ask for city, month and day until each is valid

use crate::console::Console;
use crate::filters::{validate_city, validate_day, validate_month, FilterSpec, ValidationError};
use anyhow::{bail, Result};
use std::io::{BufRead, Write};

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
pub const CITY_PROMPT: &str = "Please enter the city (Chicago, New York City, Washington): ";
pub const MONTH_PROMPT: &str =
    "Please enter the month (January, February, March, April, May, June) or 'all': ";
pub const DAY_PROMPT: &str = "Please enter the day of week (e.g., Monday, Tuesday, ...) or 'all': ";

/// Greet the user and collect a validated `FilterSpec`
///
/// Each field is re-asked until it validates; there is no retry limit.
/// Fails only if input ends before all three fields are answered.
pub fn collect_filters<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<FilterSpec> {
    console.say(GREETING)?;

    let city = ask_until_valid(console, CITY_PROMPT, validate_city)?;
    let month = ask_until_valid(console, MONTH_PROMPT, validate_month)?;
    let day = ask_until_valid(console, DAY_PROMPT, validate_day)?;

    console.say(&"-".repeat(40))?;
    Ok(FilterSpec::new(city, month, day))
}

fn ask_until_valid<R, W, T>(
    console: &mut Console<R, W>,
    message: &str,
    validate: impl Fn(&str) -> Result<T, ValidationError>,
) -> Result<T>
where
    R: BufRead,
    W: Write,
{
    loop {
        let Some(raw) = console.prompt(message)? else {
            bail!("Input closed before filters were chosen");
        };
        match validate(&raw) {
            Ok(value) => return Ok(value),
            Err(e) => console.say(&e.to_string())?,
        }
    }
}
