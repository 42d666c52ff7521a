use thiserror::Error;

pub type Result<T> = std::result::Result<T, HatchError>;

#[derive(Error, Debug)]
pub enum HatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Fetch failed: {message}")]
    FetchFailed { message: String },

    #[error("Transfer failed: {message}")]
    TransferFailed { message: String },

    #[error("Version '{version}' not found")]
    VersionNotFound { version: String },

    #[error("No release asset found: {name}")]
    AssetNotFound { name: String },

    #[error("No releases have been published yet")]
    NoReleases,
}

impl HatchError {
    pub fn fetch_failed<S: Into<String>>(message: S) -> Self {
        HatchError::FetchFailed {
            message: message.into(),
        }
    }

    pub fn transfer_failed<S: Into<String>>(message: S) -> Self {
        HatchError::TransferFailed {
            message: message.into(),
        }
    }
}
