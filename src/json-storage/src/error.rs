use std::path::PathBuf;

use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to access file '{}'", path.display()))]
    Io {
        #[snafu(implicit)]
        location: Location,
        path: PathBuf,
        #[snafu(source)]
        error: std::io::Error,
    },
    #[snafu(display("Failed to (de)serialize json of '{}'", path.display()))]
    Json {
        #[snafu(implicit)]
        location: Location,
        path: PathBuf,
        #[snafu(source)]
        error: serde_json::Error,
    },
    #[snafu(display("Report number {index} is missing the '{field}' field"))]
    MissingField {
        #[snafu(implicit)]
        location: Location,
        index: usize,
        field: &'static str,
    },
    #[snafu(display("Report number {index} has an invalid timestamp"))]
    InvalidTimestamp {
        #[snafu(implicit)]
        location: Location,
        index: usize,
        source: tugwatch_core::Error,
    },
}

impl From<Error> for tugwatch_core::Error {
    #[track_caller]
    fn from(value: Error) -> Self {
        let caller = std::panic::Location::caller();
        let location = Location::new(caller.file(), caller.line(), caller.column());
        match value {
            Error::MissingField { .. } => tugwatch_core::Error::MissingData {
                location,
                reason: value.to_string(),
            },
            Error::InvalidTimestamp { source, .. } => source,
            Error::Io { .. } | Error::Json { .. } => tugwatch_core::Error::Storage {
                location,
                source: Box::new(value),
            },
        }
    }
}
