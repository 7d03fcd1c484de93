// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
}

/// Specific error types for catalog loading.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum CatalogError {
    /// The catalog file could not be read (missing, permission denied, ...)
    Unreadable(String),

    /// The file is not valid TOML or does not have the catalog layout
    InvalidStructure(String),
}

impl CatalogError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CatalogError::Unreadable(_) => "error-catalog-unreadable",
            CatalogError::InvalidStructure(_) => "error-catalog-invalid",
        }
    }

    /// Raw detail message, shown below the localized summary.
    pub fn detail(&self) -> &str {
        match self {
            CatalogError::Unreadable(msg) | CatalogError::InvalidStructure(msg) => msg,
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Unreadable(msg) => write!(f, "Catalog unreadable: {}", msg),
            CatalogError::InvalidStructure(msg) => write!(f, "Invalid catalog: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
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

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
