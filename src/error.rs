// SPDX-License-Identifier: MPL-2.0
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Gui(String),
    Gallery(GalleryError),
}

/// Problems with the selected date range, caught before any request is sent.
/// Shown inline next to the date controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The start date field is empty or could not be parsed.
    MissingStart,

    /// The end date field is empty or could not be parsed.
    MissingEnd,

    /// The start date lies after the end date.
    StartAfterEnd { start: NaiveDate, end: NaiveDate },

    /// A date lies outside the range served by the APOD archive.
    OutOfRange {
        date: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },
}

impl ValidationError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::MissingStart => "error-validation-missing-start",
            ValidationError::MissingEnd => "error-validation-missing-end",
            ValidationError::StartAfterEnd { .. } => "error-validation-start-after-end",
            ValidationError::OutOfRange { .. } => "error-validation-out-of-range",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingStart => write!(f, "Start date is missing"),
            ValidationError::MissingEnd => write!(f, "End date is missing"),
            ValidationError::StartAfterEnd { start, end } => {
                write!(f, "Start date {start} is after end date {end}")
            }
            ValidationError::OutOfRange { date, min, max } => {
                write!(f, "Date {date} is outside {min}..={max}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Failures of the APOD request itself. Shown as the gallery error panel and
/// retryable by pressing the fetch button again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with a non-success status code.
    Http { status: u16 },

    /// The request did not complete within the configured timeout.
    Timeout,

    /// Connection, DNS or TLS failure.
    Network(String),

    /// The body was not a JSON array of APOD records.
    InvalidBody(String),

    /// A record carried a URL that cannot be requested.
    InvalidUrl(String),
}

impl FetchError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FetchError::Http { .. } => "error-fetch-http",
            FetchError::Timeout => "error-fetch-timeout",
            FetchError::Network(_) => "error-fetch-network",
            FetchError::InvalidBody(_) => "error-fetch-invalid-body",
            FetchError::InvalidUrl(_) => "error-fetch-invalid-url",
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http { status } => write!(f, "HTTP status: {status}"),
            FetchError::Timeout => write!(f, "Request timed out"),
            FetchError::Network(msg) => write!(f, "Network error: {msg}"),
            FetchError::InvalidBody(msg) => write!(f, "Malformed response: {msg}"),
            FetchError::InvalidUrl(url) => write!(f, "Invalid URL: {url}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Outcome of a failed gallery fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    Validation(ValidationError),
    Fetch(FetchError),
}

impl GalleryError {
    pub fn i18n_key(&self) -> &'static str {
        match self {
            GalleryError::Validation(err) => err.i18n_key(),
            GalleryError::Fetch(err) => err.i18n_key(),
        }
    }
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::Validation(err) => write!(f, "{err}"),
            GalleryError::Fetch(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GalleryError {}

impl From<ValidationError> for GalleryError {
    fn from(err: ValidationError) -> Self {
        GalleryError::Validation(err)
    }
}

impl From<FetchError> for GalleryError {
    fn from(err: FetchError) -> Self {
        GalleryError::Fetch(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Gui(e) => write!(f, "GUI Error: {}", e),
            Error::Gallery(e) => write!(f, "Gallery Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<GalleryError> for Error {
    fn from(err: GalleryError) -> Self {
        Error::Gallery(err)
    }
}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Gallery(GalleryError::Fetch(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::Gui(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn fetch_error_converts_into_gallery_variant() {
        let err: Error = FetchError::Timeout.into();
        assert!(matches!(
            err,
            Error::Gallery(GalleryError::Fetch(FetchError::Timeout))
        ));
    }

    #[test]
    fn validation_error_i18n_keys() {
        assert_eq!(
            ValidationError::MissingStart.i18n_key(),
            "error-validation-missing-start"
        );
        assert_eq!(
            ValidationError::StartAfterEnd {
                start: date(2024, 1, 3),
                end: date(2024, 1, 1),
            }
            .i18n_key(),
            "error-validation-start-after-end"
        );
    }

    #[test]
    fn gallery_error_forwards_i18n_key() {
        let err = GalleryError::from(FetchError::Http { status: 500 });
        assert_eq!(err.i18n_key(), "error-fetch-http");
    }

    #[test]
    fn fetch_error_display_includes_status() {
        let err = FetchError::Http { status: 503 };
        assert!(format!("{}", err).contains("503"));
    }

    #[test]
    fn start_after_end_display_names_both_dates() {
        let err = ValidationError::StartAfterEnd {
            start: date(2024, 1, 3),
            end: date(2024, 1, 1),
        };
        let text = err.to_string();
        assert!(text.contains("2024-01-03"));
        assert!(text.contains("2024-01-01"));
    }
}
