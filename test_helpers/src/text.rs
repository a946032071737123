//! Text helpers for asserting on built invocation strings.

use anyhow::{Result, anyhow};

/// Strips one layer of matching single or double quotes from a value.
///
/// Behavioural steps capture quoted placeholders such as `"a b"`; this yields
/// the text between the quotes.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    if let Some(stripped) = trimmed.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        return stripped;
    }
    if let Some(stripped) = trimmed
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
    {
        return stripped;
    }
    trimmed
}

/// Splits an invocation into arguments the way a POSIX shell would.
///
/// Quoted path arguments come back as single tokens without their quotes.
///
/// # Errors
///
/// Returns an error when the input has unbalanced quotes.
pub fn split_invocation(input: &str) -> Result<Vec<String>> {
    shlex::split(input).ok_or_else(|| anyhow!("invocation has unbalanced quotes: {input:?}"))
}

/// Collects the arguments that follow `flag` up to the next option token.
///
/// Returns `None` when `flag` does not occur in `tokens`.
#[must_use]
pub fn values_after<'a>(tokens: &'a [String], flag: &str) -> Option<Vec<&'a str>> {
    let mut rest = tokens.iter().skip_while(|token| token.as_str() != flag);
    rest.next()?;
    Some(
        rest.take_while(|token| !token.starts_with('-'))
            .map(String::as_str)
            .collect(),
    )
}
