use snafu::{Location, Snafu};

pub type CoreResult<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to parse timestamp '{value}'"))]
    Format {
        #[snafu(implicit)]
        location: Location,
        value: String,
        #[snafu(source)]
        error: chrono::ParseError,
    },
    #[snafu(display("Snapshot index contains no timestamps"))]
    EmptyIndex {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("Report data is missing: '{reason}'"))]
    MissingData {
        #[snafu(implicit)]
        location: Location,
        reason: String,
    },
    #[snafu(display("Storage operation failed"))]
    Storage {
        #[snafu(implicit)]
        location: Location,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format { .. })
    }
}
