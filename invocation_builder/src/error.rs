//! Error types produced while assembling a flag registry.
//!
//! The builder itself cannot fail; only registry construction and layering
//! report errors.

use camino::Utf8PathBuf;
use figment::Error as FigmentError;
use thiserror::Error;

use crate::registry::FlagName;

/// Reasons a list of flag spellings is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasError {
    /// The list carried no spellings, so there is no primary alias.
    #[error("a flag needs at least one spelling")]
    Empty,

    /// A spelling was empty or only whitespace.
    #[error("flag spellings must not be blank")]
    Blank,

    /// A spelling contained whitespace and would split into several tokens.
    #[error("flag spelling '{token}' contains whitespace")]
    ContainsWhitespace {
        /// Offending spelling.
        token: String,
    },
}

/// Errors that can occur while building or layering a [`crate::FlagRegistry`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// The override file passed to [`crate::FlagRegistry::load`] is missing.
    #[error("flag registry file '{path}' does not exist")]
    NotFound {
        /// Path that was requested.
        path: Utf8PathBuf,
    },

    /// Replacement spellings for a single flag were invalid.
    #[error("invalid aliases for flag '{flag}': {source}")]
    Alias {
        /// Flag whose spellings were rejected.
        flag: FlagName,
        /// Validation failure for the spellings.
        #[source]
        source: AliasError,
    },

    /// A key did not name any known flag.
    #[error("unknown flag '{key}'")]
    UnknownFlag {
        /// Key as written by the caller.
        key: String,
    },

    /// Error while gathering or extracting layered overrides.
    #[error("failed to gather flag registry overrides: {0}")]
    Gathering(#[from] Box<FigmentError>),
}

impl From<FigmentError> for RegistryError {
    fn from(err: FigmentError) -> Self {
        Self::Gathering(Box::new(err))
    }
}

/// Result alias for registry construction.
pub type RegistryResult<T> = Result<T, RegistryError>;
