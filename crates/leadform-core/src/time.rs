use chrono::{Local, NaiveDate};
use thiserror::Error;

pub const LEDGER_DATE_FORMAT: &str = "%d-%m-%Y";
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

const ACCEPTED_FORMATS: [&str; 3] = [INPUT_DATE_FORMAT, LEDGER_DATE_FORMAT, "%d/%m/%Y"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("date cannot be empty")]
    Empty,
    #[error("invalid date: {0} (expected YYYY-MM-DD, DD-MM-YYYY or today)")]
    InvalidDate(String),
}

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(input: &str) -> Result<NaiveDate, TimeParseError> {
    parse_date_with_today(input, today_local())
}

pub fn parse_date_with_today(input: &str, today: NaiveDate) -> Result<NaiveDate, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }
    if trimmed.eq_ignore_ascii_case("today") {
        return Ok(today);
    }

    for fmt in ACCEPTED_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Ok(date);
        }
    }

    Err(TimeParseError::InvalidDate(trimmed.to_string()))
}

pub fn parse_optional_date(input: &str) -> Result<Option<NaiveDate>, TimeParseError> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_date(input).map(Some)
}

pub fn format_ledger_date(date: NaiveDate) -> String {
    date.format(LEDGER_DATE_FORMAT).to_string()
}

pub fn format_input_date(date: NaiveDate) -> String {
    date.format(INPUT_DATE_FORMAT).to_string()
}
