//! CLI error type.

use portfolio_core::{ConfigError, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

#[derive(Debug)]
pub enum CliError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Config(ConfigError),
    Repo(RepoError),
    InvalidNow(String),
    Logging(String),
    Output(serde_json::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read `{}`: {source}", path.display()),
            Self::Config(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InvalidNow(value) => {
                write!(f, "invalid --now value `{value}`; expected YYYY-MM-DD or RFC 3339")
            }
            Self::Logging(message) => write!(f, "logging setup failed: {message}"),
            Self::Output(err) => write!(f, "cannot render report: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Config(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Output(err) => Some(err),
            Self::InvalidNow(_) | Self::Logging(_) => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<RepoError> for CliError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Output(value)
    }
}
