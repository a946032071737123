//! Test helpers shared across crates in the workspace.
//!
//! [`figment`] wraps `figment::Jail` for tests that write override files, and
//! [`text`] tokenises built invocation strings for assertions.

pub mod figment;
pub mod text;
