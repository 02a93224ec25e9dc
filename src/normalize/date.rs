//! Release date normalization.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::config::{CANONICAL_DATE_FORMAT, DEFAULT_DATE_INPUT_FORMATS, DEFAULT_DAY_OF_MONTH};

/// Ordered input patterns plus the single output pattern.
///
/// Patterns use chrono's strftime syntax. Order matters: the first input pattern
/// that parses a string wins, there is no further disambiguation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatSpec {
    input_formats: Vec<String>,
    output_format: String,
}

impl DateFormatSpec {
    /// Creates a spec with no input patterns.
    pub fn new(output_format: impl Into<String>) -> Self {
        Self {
            input_formats: Vec::new(),
            output_format: output_format.into(),
        }
    }

    /// Appends an input pattern with the lowest priority so far.
    pub fn with_input_format(mut self, format: impl Into<String>) -> Self {
        self.input_formats.push(format.into());
        self
    }

    /// Input patterns in priority order.
    pub fn input_formats(&self) -> &[String] {
        &self.input_formats
    }

    /// Pattern used to render normalized dates.
    pub fn output_format(&self) -> &str {
        &self.output_format
    }
}

impl Default for DateFormatSpec {
    /// The nine storefront formats (month-name-first, day-first, month and year
    /// only) normalized to `%Y-%m-%d`.
    fn default() -> Self {
        DEFAULT_DATE_INPUT_FORMATS
            .iter()
            .fold(Self::new(CANONICAL_DATE_FORMAT), |spec, format| {
                spec.with_input_format(*format)
            })
    }
}

/// Converts free-form release date strings into one canonical format.
#[derive(Debug, Clone, Default)]
pub struct DateNormalizer {
    spec: DateFormatSpec,
}

impl DateNormalizer {
    /// Creates a normalizer for `spec`.
    pub fn new(spec: DateFormatSpec) -> Self {
        Self { spec }
    }

    /// The patterns this normalizer uses.
    pub fn spec(&self) -> &DateFormatSpec {
        &self.spec
    }

    /// Normalizes `raw` into the output pattern.
    ///
    /// Returns an empty string when the input is empty or no pattern matches.
    /// Patterns without a day field resolve to the first of the month.
    pub fn normalize(&self, raw: &str) -> String {
        let raw = raw.trim();
        if raw.is_empty() {
            return String::new();
        }

        for format in &self.spec.input_formats {
            if let Some(date) = parse_with_format(raw, format) {
                log::trace!("Date '{}' matched format '{}'", raw, format);
                return self.render(date);
            }
        }

        log::debug!("No date format matched '{}'", raw);
        String::new()
    }

    fn render(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        // An invalid output pattern surfaces as fmt::Error rather than a panic here
        if write!(out, "{}", date.format(&self.spec.output_format)).is_err() {
            log::warn!(
                "Invalid output date format '{}'",
                self.spec.output_format
            );
            return String::new();
        }
        out
    }
}

/// Parses `raw` with a single pattern.
///
/// chrono skips whitespace greedily and accepts short numbers, so a day-bearing
/// pattern could read "Jun 2018" as day 20 of year 18. Requiring the same number
/// of whitespace separated tokens in the input and the pattern rules that out.
fn parse_with_format(raw: &str, format: &str) -> Option<NaiveDate> {
    if raw.split_whitespace().count() != format.split_whitespace().count() {
        return None;
    }

    if has_day_field(format) {
        NaiveDate::parse_from_str(raw, format).ok()
    } else {
        NaiveDate::parse_from_str(
            &format!("{raw} {DEFAULT_DAY_OF_MONTH}"),
            &format!("{format} %d"),
        )
        .ok()
    }
}

fn has_day_field(format: &str) -> bool {
    format.contains("%d") || format.contains("%e") || format.contains("%j")
}
