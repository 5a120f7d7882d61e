use crate::filter::InvalidThreshold;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse HCL in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    #[error("invalid pattern for {option}: {source}")]
    InvalidPattern {
        option: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    SlowThreshold(#[from] InvalidThreshold),
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn pattern(option: &'static str, source: regex::Error) -> Self {
        Self::InvalidPattern { option, source }
    }
}
