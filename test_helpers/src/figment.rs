//! Helpers for running registry tests inside a `figment::Jail`.
//!
//! The jail gives each test a scratch working directory for override files
//! and restores the process state afterwards. These wrappers hand the
//! closure's value back as an `anyhow::Result` so tests can use `?` directly.

use anyhow::{Result, anyhow};

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// The jail is torn down once the closure completes, whether or not it
/// succeeded.
///
/// # Errors
///
/// Returns an error if the jail cannot be set up or the closure returns a
/// [`figment::error::Error`].
///
/// # Examples
///
/// ```
/// use invocation_builder_test_helpers::figment::with_jail;
///
/// let contents = with_jail(|j| {
///     j.create_file("flags.toml", "help = [\"-?\"]")?;
///     Ok(std::fs::read_to_string("flags.toml").unwrap_or_default())
/// })?;
/// assert_eq!(contents, "help = [\"-?\"]");
/// # Ok::<(), anyhow::Error>(())
/// ```
#[expect(
    clippy::result_large_err,
    reason = "the closure signature is fixed by figment::Jail"
)]
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|j| {
        output = Some(f(j)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Converts any displayable error into a [`figment::Error`] so it can cross
/// the jail boundary with `?`.
#[expect(
    clippy::needless_pass_by_value,
    reason = "callers use this with map_err, which hands over ownership"
)]
pub fn figment_error<E: ToString>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}
