// SPDX-License-Identifier: MPL-2.0
use crate::toast::ToastId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// The toast body was empty or only whitespace.
    #[error("toast text must not be empty")]
    EmptyText,

    /// `show()` was called on a toast that is already attached.
    #[error("toast {0} is already shown")]
    AlreadyShown(ToastId),

    /// No attached toast carries this id.
    #[error("no toast with id {0}")]
    UnknownToast(ToastId),

    #[error("invalid toast position: {0}")]
    InvalidPosition(String),

    #[error("invalid toast type: {0}")]
    InvalidType(String),

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),
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

pub type Result<T> = std::result::Result<T, Error>;
