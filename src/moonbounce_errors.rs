use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoonbounceError {
    #[error("invalid Maidenhead locator: {0:?}")]
    InvalidLocator(String),

    #[error("invalid UTC calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("system clock unavailable: {0}")]
    SystemTime(String),
}
