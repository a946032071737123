//! Fluent construction of command-line invocation strings for tests.
//!
//! [`InvocationBuilder`] assembles the exact text a user would type when
//! calling the repository analysis tool, one option at a time, so test suites
//! never concatenate flag strings by hand. Flag spellings come from a
//! [`FlagRegistry`]; the builder always emits each option's primary alias.
//!
//! ```rust
//! use invocation_builder::InvocationBuilder;
//!
//! let input = InvocationBuilder::new()
//!     .add_config("config dir")
//!     .add_since_date("27/01/2017")
//!     .build();
//! assert_eq!(input, "--config \"config dir\" --since 27/01/2017 ");
//! ```
//!
//! The builder never validates what it produces. Intentionally malformed
//! invocations are how the tool's own argument parser gets negative tests.

mod builder;
mod error;
pub mod registry;

pub use builder::InvocationBuilder;
pub use error::{AliasError, RegistryError, RegistryResult};
pub use registry::{Aliases, FlagName, FlagRegistry};
