//! Layering of TOML override documents over the standard flag table.
//!
//! Overrides are keyed by [`super::FlagName::key`] and hold arrays of
//! spellings. Figment merges them over the serialised standard table, so each
//! key present in an override replaces that flag's whole alias list and every
//! other flag keeps its standard spellings.

use camino::Utf8Path;
use figment::providers::{Format, Serialized, Toml};
use figment::{Figment, Provider};
use tracing::debug;

use super::FlagRegistry;
use crate::error::{RegistryError, RegistryResult};

impl FlagRegistry {
    /// Layers the TOML document `overrides` over the standard table.
    ///
    /// ```rust
    /// use invocation_builder::{FlagName, FlagRegistry};
    ///
    /// let registry = FlagRegistry::from_toml_str(r#"shallow-cloning = ["--shallow"]"#)?;
    /// assert_eq!(registry.primary(FlagName::ShallowCloning), "--shallow");
    /// assert_eq!(registry.primary(FlagName::Help), "--help");
    /// # Ok::<(), invocation_builder::RegistryError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Gathering`] when the document is not valid
    /// TOML, names an unknown flag, or supplies an invalid alias list.
    pub fn from_toml_str(overrides: &str) -> RegistryResult<Self> {
        debug!("layering flag registry overrides from TOML text");
        Self::layered(Toml::string(overrides))
    }

    /// Layers the TOML file at `path` over the standard table.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when `path` is not a file and
    /// [`RegistryError::Gathering`] for the failures described on
    /// [`FlagRegistry::from_toml_str`].
    pub fn load(path: impl AsRef<Utf8Path>) -> RegistryResult<Self> {
        let file = path.as_ref();
        if !file.is_file() {
            return Err(RegistryError::NotFound {
                path: file.to_path_buf(),
            });
        }
        debug!(path = %file, "layering flag registry overrides from file");
        Self::layered(Toml::file(file))
    }

    fn layered(overrides: impl Provider) -> RegistryResult<Self> {
        Figment::from(Serialized::defaults(Self::standard()))
            .merge(overrides)
            .extract()
            .map_err(RegistryError::from)
    }
}
