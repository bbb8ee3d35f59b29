//! Error types for data source queries

use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Reasons a data source query can fail
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` exited with {status}")]
    CommandFailed { program: String, status: String },

    #[error("`{program}` timed out after {timeout:?}")]
    Timeout { program: String, timeout: Duration },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no `{0}` lines found")]
    NoMatchingLines(&'static str),

    #[error("missing key `{0}`")]
    MissingKey(&'static str),

    #[error("could not parse {what} from {value:?}")]
    Parse { what: &'static str, value: String },

    #[error("unknown time zone {0:?}")]
    UnknownTimeZone(String),
}

impl SourceError {
    pub fn parse(what: &'static str, value: impl Into<String>) -> Self {
        SourceError::Parse {
            what,
            value: value.into(),
        }
    }
}

/// Convenience alias for query results
pub type SourceResult<T> = Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SourceError::MissingKey("MemTotal");
        assert_eq!(err.to_string(), "missing key `MemTotal`");

        let err = SourceError::CommandFailed {
            program: "pamixer".to_string(),
            status: "exit status: 1".to_string(),
        };
        assert_eq!(err.to_string(), "`pamixer` exited with exit status: 1");

        let err = SourceError::parse("volume", "abc");
        assert_eq!(err.to_string(), "could not parse volume from \"abc\"");
    }
}
