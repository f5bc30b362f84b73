use thiserror::Error;

/// Row-level schema violations that abort the run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CleanError {
    #[error("client {client_id}: month {month:?} is not a three-letter month abbreviation")]
    UnknownMonth { client_id: i64, month: String },

    #[error("client {client_id}: day {day:?} is not a day of the month")]
    InvalidDay { client_id: i64, day: String },
}
