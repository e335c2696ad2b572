// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Application-wide error taxonomy.
///
/// Every collaborator failure is mapped onto one of these variants at the
/// call site and surfaced to the user as a notification; none of them is
/// fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The user dismissed a dialog without choosing anything.
    Cancelled,
    /// The pictures library is not writable.
    PermissionDenied,
    /// Composing the photo + sticker image failed.
    Capture(String),
    /// Writing the exported image failed.
    Save(String),
    /// A selected image could not be decoded.
    Decode(String),
    Io(String),
    Config(String),
}

impl Error {
    /// Returns the i18n message key used when surfacing this error as a
    /// notification toast.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Cancelled => "notification-export-cancelled",
            Error::PermissionDenied => "notification-permission-denied",
            Error::Capture(_) => "notification-export-capture-error",
            Error::Save(_) => "notification-export-save-error",
            Error::Decode(_) => "notification-load-error",
            Error::Io(_) => "notification-export-save-error",
            Error::Config(_) => "notification-config-load-warning",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Cancelled => write!(f, "Cancelled by user"),
            Error::PermissionDenied => write!(f, "Pictures library is not accessible"),
            Error::Capture(e) => write!(f, "Capture Error: {}", e),
            Error::Save(e) => write!(f, "Save Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
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
