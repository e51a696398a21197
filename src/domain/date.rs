use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

use super::integer_len;

/// How strictly a date is checked once its `year-month-day` shape is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateMode {
    /// Any three hyphen-separated integers are accepted, so month 13 or day 40 pass.
    #[default]
    Permissive,
    /// The triple must also name a real calendar day.
    Calendar,
}

/// The day an expense happened, as typed by the user.
///
/// The original text is kept for display; equality and ordering only look at
/// the parsed `(year, month, day)` triple, compared year first, then month,
/// then day.
#[derive(Debug, Clone)]
pub struct ExpenseDate {
    text: String,
    year: i32,
    month: i32,
    day: i32,
}

impl ExpenseDate {
    /// Parse `<int>-<int>-<int>`.
    /// Whitespace before each number and each hyphen is skipped, numbers may be
    /// signed, and anything after the day is ignored.
    /// Example: "2024-01-15" -> (2024, 1, 15), "2024-13-40" -> (2024, 13, 40)
    pub fn parse(input: &str) -> Result<Self, ParseDateError> {
        let mut scanner = Scanner::new(input);
        let year = scanner.number()?;
        scanner.hyphen()?;
        let month = scanner.number()?;
        scanner.hyphen()?;
        let day = scanner.number()?;

        Ok(Self {
            text: input.to_string(),
            year,
            month,
            day,
        })
    }

    /// Parse and then apply the checks required by `mode`.
    pub fn parse_with_mode(input: &str, mode: DateMode) -> Result<Self, ParseDateError> {
        let date = Self::parse(input)?;
        if mode == DateMode::Calendar && !date.is_calendar_day() {
            return Err(ParseDateError::NotACalendarDay);
        }
        Ok(date)
    }

    /// Returns true if the triple names a day that exists in the proleptic
    /// Gregorian calendar.
    pub fn is_calendar_day(&self) -> bool {
        let (Ok(month), Ok(day)) = (u32::try_from(self.month), u32::try_from(self.day)) else {
            return false;
        };
        NaiveDate::from_ymd_opt(self.year, month, day).is_some()
    }

    pub fn ymd(&self) -> (i32, i32, i32) {
        (self.year, self.month, self.day)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn less_or_equal(&self, other: &ExpenseDate) -> bool {
        self <= other
    }
}

impl PartialEq for ExpenseDate {
    fn eq(&self, other: &Self) -> bool {
        self.ymd() == other.ymd()
    }
}

impl Eq for ExpenseDate {}

impl PartialOrd for ExpenseDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExpenseDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ymd().cmp(&other.ymd())
    }
}

impl fmt::Display for ExpenseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Cursor over the unread part of a date string.
struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    fn number(&mut self) -> Result<i32, ParseDateError> {
        self.rest = self.rest.trim_start();
        let end = integer_len(self.rest);
        if end == 0 {
            return Err(ParseDateError::MissingNumber);
        }

        let value = self.rest[..end]
            .parse()
            .map_err(|_| ParseDateError::NumberOutOfRange)?;
        self.rest = &self.rest[end..];
        Ok(value)
    }

    fn hyphen(&mut self) -> Result<(), ParseDateError> {
        match self.rest.trim_start().strip_prefix('-') {
            Some(rest) => {
                self.rest = rest;
                Ok(())
            }
            None => Err(ParseDateError::MissingSeparator),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDateError {
    MissingNumber,
    MissingSeparator,
    NumberOutOfRange,
    NotACalendarDay,
}

impl fmt::Display for ParseDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseDateError::MissingNumber => write!(f, "expected a number"),
            ParseDateError::MissingSeparator => write!(f, "expected '-' between date parts"),
            ParseDateError::NumberOutOfRange => write!(f, "date part is too large"),
            ParseDateError::NotACalendarDay => write!(f, "not a calendar day"),
        }
    }
}

impl std::error::Error for ParseDateError {}
