//! Ordered spellings accepted for a single flag.

use serde::{Deserialize, Serialize};

use crate::error::AliasError;

/// Non-empty, ordered list of spellings accepted for one flag.
///
/// The first spelling is the primary alias; builders always emit it. The list
/// deserialises from, and serialises to, a plain array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Aliases {
    primary: String,
    others: Vec<String>,
}

impl Aliases {
    /// Validates `spellings` and wraps them, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`AliasError::Empty`] when no spelling is given,
    /// [`AliasError::Blank`] for an empty spelling, and
    /// [`AliasError::ContainsWhitespace`] when a spelling would split into
    /// several tokens.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use invocation_builder::Aliases;
    ///
    /// let aliases = Aliases::new(["--repos", "-r"])?;
    /// assert_eq!(aliases.primary(), "--repos");
    /// # Ok::<(), invocation_builder::AliasError>(())
    /// ```
    pub fn new<I, S>(spellings: I) -> Result<Self, AliasError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut iter = spellings.into_iter().map(Into::into);
        let primary = iter.next().ok_or(AliasError::Empty)?;
        let others: Vec<String> = iter.collect();
        for token in std::iter::once(&primary).chain(&others) {
            validate_token(token)?;
        }
        Ok(Self { primary, others })
    }

    /// Builds aliases from spellings known to be valid at compile time.
    pub(crate) fn trusted(primary: &'static str, others: &[&'static str]) -> Self {
        Self {
            primary: primary.to_owned(),
            others: others.iter().map(|&token| token.to_owned()).collect(),
        }
    }

    /// The canonical spelling.
    #[must_use]
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Iterates every spelling, primary first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str()).chain(self.others.iter().map(String::as_str))
    }

    /// Reports whether `token` is one of the accepted spellings.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.iter().any(|candidate| candidate == token)
    }
}

fn validate_token(token: &str) -> Result<(), AliasError> {
    if token.trim().is_empty() {
        return Err(AliasError::Blank);
    }
    if token.chars().any(char::is_whitespace) {
        return Err(AliasError::ContainsWhitespace {
            token: token.to_owned(),
        });
    }
    Ok(())
}

impl TryFrom<Vec<String>> for Aliases {
    type Error = AliasError;

    fn try_from(spellings: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(spellings)
    }
}

impl From<Aliases> for Vec<String> {
    fn from(aliases: Aliases) -> Self {
        let mut spellings = Self::with_capacity(aliases.others.len() + 1);
        spellings.push(aliases.primary);
        spellings.extend(aliases.others);
        spellings
    }
}
