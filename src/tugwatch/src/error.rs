use snafu::{Location, Snafu};
use tokio::task::JoinError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to join tasks"))]
    Join {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: JoinError,
    },
    #[snafu(display("Failed a core operation"))]
    Core {
        #[snafu(implicit)]
        location: Location,
        source: tugwatch_core::Error,
    },
    #[snafu(display("Failed to load settings"))]
    Config {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: config::ConfigError,
    },
    #[snafu(display("Failed to serialize output"))]
    Output {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: serde_json::Error,
    },
}

impl Error {
    pub fn core(&self) -> Option<&tugwatch_core::Error> {
        match self {
            Error::Core { source, .. } => Some(source),
            Error::Join { .. } | Error::Config { .. } | Error::Output { .. } => None,
        }
    }
}

impl From<tugwatch_core::Error> for Error {
    #[track_caller]
    fn from(value: tugwatch_core::Error) -> Self {
        let caller = std::panic::Location::caller();
        Error::Core {
            location: Location::new(caller.file(), caller.line(), caller.column()),
            source: value,
        }
    }
}
