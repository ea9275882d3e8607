// 🎛️ Filters - City / Month / Day selection
// Pure validation: raw user text in, typed filter out. No I/O here.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// CITY
// ============================================================================

/// City - The closed set of cities we have trip data for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lowercase name the user types
    pub fn key(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Human-readable name for display
    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// MONTH
// ============================================================================

/// Month - Only the first half of the year is covered by the datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// 1-based calendar number (January = 1)
    pub fn number(&self) -> u32 {
        match self {
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => m.number() == month,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Only(m) => f.write_str(m.key()),
        }
    }
}

// ============================================================================
// DAY OF WEEK
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    pub fn matches(&self, day: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => *d == day,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Only(d) => f.write_str(&weekday_name(*d).to_lowercase()),
        }
    }
}

/// Full English weekday name ("Monday"), the form shown in `day_of_week`
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

// ============================================================================
// FILTER SPEC
// ============================================================================

/// FilterSpec - A validated (city, month, day) selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSpec {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        FilterSpec { city, month, day }
    }

    /// No month or day restriction
    pub fn unfiltered(city: City) -> Self {
        FilterSpec::new(city, MonthFilter::All, DayFilter::All)
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    City,
    Month,
    Day,
}

impl Field {
    /// What the user may type for this field
    pub fn accepted(&self) -> &'static str {
        match self {
            Field::City => "Chicago, New York City, or Washington",
            Field::Month => "January, February, March, April, May, June, or 'all'",
            Field::Day => "Monday through Sunday, or 'all'",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::City => f.write_str("city"),
            Field::Month => f.write_str("month"),
            Field::Day => f.write_str("day"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {field} '{input}'. Please choose from {}.", .field.accepted())]
pub struct ValidationError {
    pub field: Field,
    pub input: String,
}

impl ValidationError {
    fn new(field: Field, input: &str) -> Self {
        ValidationError {
            field,
            input: input.to_string(),
        }
    }
}

fn normalize_input(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn validate_city(raw: &str) -> Result<City, ValidationError> {
    let input = normalize_input(raw);
    City::ALL
        .into_iter()
        .find(|c| c.key() == input)
        .ok_or_else(|| ValidationError::new(Field::City, raw.trim()))
}

pub fn validate_month(raw: &str) -> Result<MonthFilter, ValidationError> {
    let input = normalize_input(raw);
    if input == "all" {
        return Ok(MonthFilter::All);
    }
    Month::ALL
        .into_iter()
        .find(|m| m.key() == input)
        .map(MonthFilter::Only)
        .ok_or_else(|| ValidationError::new(Field::Month, raw.trim()))
}

pub fn validate_day(raw: &str) -> Result<DayFilter, ValidationError> {
    let input = normalize_input(raw);
    if input == "all" {
        return Ok(DayFilter::All);
    }
    WEEKDAYS
        .into_iter()
        .find(|d| weekday_name(*d).to_lowercase() == input)
        .map(DayFilter::Only)
        .ok_or_else(|| ValidationError::new(Field::Day, raw.trim()))
}

// ============================================================================
// TESTS
// ============================================================================
