use std::path::PathBuf;
use thiserror::Error;

use crate::core::pattern::Category;

/// Fatal failures raised while preparing or running a scan.
#[derive(Debug, Error)]
pub enum YaspError {
    #[error("could not read config file {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config file {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("could not read env bootstrap file {}", path.display())]
    DotEnvRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read ignore file {}", path.display())]
    IgnoreRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid {category} pattern `{expression}`")]
    InvalidPattern {
        category: Category,
        expression: String,
        #[source]
        source: regex::Error,
    },

    #[error("could not walk {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("could not read {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not resolve the current directory")]
    WorkingDir(#[source] std::io::Error),

    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
}
