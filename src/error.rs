// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

/// Reasons the memories document could not be turned into a gallery.
///
/// Always recovered locally by substituting the fallback sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataLoadError {
    /// No data source was configured or the file does not exist.
    Missing,

    /// The source exists but could not be read.
    Unreadable(String),

    /// The source is not a valid memories document.
    Malformed(String),
}

impl DataLoadError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DataLoadError::Missing => "gallery-data-missing",
            DataLoadError::Unreadable(_) => "gallery-data-unreadable",
            DataLoadError::Malformed(_) => "gallery-data-malformed",
        }
    }
}

/// An image reference could not be resolved to displayable pixels.
///
/// Recovered by substituting a placeholder; never aborts navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageResolutionError {
    /// Remote references cannot be fetched by the desktop adapter.
    Remote(String),

    /// The file could not be read.
    Io(String),

    /// The bytes are not a decodable image.
    Decode(String),
}

impl fmt::Display for DataLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataLoadError::Missing => write!(f, "memories data is missing"),
            DataLoadError::Unreadable(msg) => write!(f, "memories data is unreadable: {}", msg),
            DataLoadError::Malformed(msg) => write!(f, "memories data is malformed: {}", msg),
        }
    }
}

impl fmt::Display for ImageResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageResolutionError::Remote(url) => write!(f, "remote image not available: {}", url),
            ImageResolutionError::Io(msg) => write!(f, "I/O error: {}", msg),
            ImageResolutionError::Decode(msg) => write!(f, "decode failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
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

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for DataLoadError {
    fn from(err: serde_json::Error) -> Self {
        DataLoadError::Malformed(err.to_string())
    }
}

impl From<image_rs::ImageError> for ImageResolutionError {
    fn from(err: image_rs::ImageError) -> Self {
        ImageResolutionError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
