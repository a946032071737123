//! Chainable construction of a single invocation string.

use std::fmt;
use std::iter;

use camino::Utf8Path;
use tracing::trace;

use crate::registry::{FlagName, FlagRegistry};

const WHITESPACE: char = ' ';

/// Accumulates the command-line input for one call to the analysis tool.
///
/// Every `add_*` method appends the option's primary alias from the
/// [`FlagRegistry`], then its argument if it takes one, each followed by a
/// single space. Path arguments are wrapped in double quotes; every other
/// argument is appended as written. Nothing already appended is ever
/// rewritten.
///
/// The option methods are meant to be called at most once per build. Calling
/// one twice repeats its flag, which is occasionally what a negative test
/// wants.
///
/// # Examples
///
/// ```rust
/// use invocation_builder::InvocationBuilder;
///
/// let mut builder = InvocationBuilder::new();
/// let input = builder.add_repos(["a", "b"]).add_shallow_cloning().build();
/// assert_eq!(input, "--repos \"a\" \"b\" --shallow-cloning ");
/// assert!(builder.is_shallow_cloning());
///
/// assert_eq!(builder.reset().add_help().build(), "--help ");
/// assert!(!builder.is_shallow_cloning());
/// ```
#[derive(Debug, Clone)]
pub struct InvocationBuilder<'r> {
    registry: &'r FlagRegistry,
    input: String,
    shallow_cloning: bool,
}

impl InvocationBuilder<'static> {
    /// Creates an empty builder backed by [`FlagRegistry::standard`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(FlagRegistry::standard())
    }
}

impl Default for InvocationBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> InvocationBuilder<'r> {
    /// Creates an empty builder that takes its spellings from `registry`.
    #[must_use]
    pub const fn with_registry(registry: &'r FlagRegistry) -> Self {
        Self {
            registry,
            input: String::new(),
            shallow_cloning: false,
        }
    }

    /// Registry consulted for flag spellings.
    #[must_use]
    pub const fn registry(&self) -> &'r FlagRegistry {
        self.registry
    }

    /// Returns the input accumulated so far.
    ///
    /// The builder is left untouched, so repeated calls return the same text
    /// until something else is appended.
    #[must_use]
    pub fn build(&self) -> String {
        self.input.clone()
    }

    /// Adds the help flag.
    pub fn add_help(&mut self) -> &mut Self {
        self.push_flag(FlagName::Help)
    }

    /// Adds the config flag with `path` as its quoted argument.
    pub fn add_config(&mut self, path: impl AsRef<Utf8Path>) -> &mut Self {
        self.push_flag(FlagName::Config).push_path(path.as_ref())
    }

    /// Adds the repos flag followed by every path in `paths`, each quoted.
    pub fn add_repos<I, P>(&mut self, paths: I) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Utf8Path>,
    {
        self.push_flag(FlagName::Repos);
        for path in paths {
            self.push_path(path.as_ref());
        }
        self
    }

    /// Adds the view flag with the report folder `path` as its argument.
    pub fn add_view(&mut self, path: impl AsRef<Utf8Path>) -> &mut Self {
        self.push_flag(FlagName::View).push_path(path.as_ref())
    }

    /// Adds the view flag without an argument.
    pub fn add_view_flag(&mut self) -> &mut Self {
        self.push_flag(FlagName::View)
    }

    /// Adds the output flag with the output folder `path` as its argument.
    pub fn add_output(&mut self, path: impl AsRef<Utf8Path>) -> &mut Self {
        self.push_flag(FlagName::Output).push_path(path.as_ref())
    }

    /// Adds the since flag. `date` is appended verbatim.
    pub fn add_since_date(&mut self, date: &str) -> &mut Self {
        self.push_flag(FlagName::Since).push_plain(date)
    }

    /// Adds the until flag. `date` is appended verbatim.
    pub fn add_until_date(&mut self, date: &str) -> &mut Self {
        self.push_flag(FlagName::Until).push_plain(date)
    }

    /// Adds the period flag, for example with `"30d"` or `"2w"`.
    pub fn add_period(&mut self, period: &str) -> &mut Self {
        self.push_flag(FlagName::Period).push_plain(period)
    }

    /// Adds the formats flag with the space-separated `formats` list.
    pub fn add_formats(&mut self, formats: &str) -> &mut Self {
        self.push_flag(FlagName::Formats).push_plain(formats)
    }

    /// Adds the flag that ignores standalone repository config files.
    pub fn add_ignore_standalone_config(&mut self) -> &mut Self {
        self.push_flag(FlagName::IgnoreStandaloneConfig)
    }

    /// Adds the flag that lifts the file size limit.
    pub fn add_ignore_filesize_limit(&mut self) -> &mut Self {
        self.push_flag(FlagName::IgnoreFilesizeLimit)
    }

    /// Adds the timezone flag with `zone_id`, such as `"UTC+08"`.
    pub fn add_timezone(&mut self, zone_id: &str) -> &mut Self {
        self.push_flag(FlagName::Timezone).push_plain(zone_id)
    }

    /// Adds the cloning threads flag.
    pub fn add_num_cloning_threads(&mut self, threads: i32) -> &mut Self {
        self.push_flag(FlagName::CloningThreads)
            .push_plain(&threads.to_string())
    }

    /// Adds the analysis threads flag.
    pub fn add_num_analysis_threads(&mut self, threads: i32) -> &mut Self {
        self.push_flag(FlagName::AnalysisThreads)
            .push_plain(&threads.to_string())
    }

    /// Adds the shallow cloning flag and records that it was requested.
    ///
    /// The record survives until [`InvocationBuilder::reset`]; see
    /// [`InvocationBuilder::is_shallow_cloning`].
    pub fn add_shallow_cloning(&mut self) -> &mut Self {
        self.shallow_cloning = true;
        self.push_flag(FlagName::ShallowCloning)
    }

    /// Adds the flag that attributes lines to previous authors.
    pub fn add_find_previous_authors(&mut self) -> &mut Self {
        self.push_flag(FlagName::FindPreviousAuthors)
    }

    /// Adds the flag that records each line's last modified date.
    pub fn add_last_modified_date(&mut self) -> &mut Self {
        self.push_flag(FlagName::LastModifiedDate)
    }

    /// Adds the fresh cloning flag.
    pub fn add_fresh_cloning(&mut self) -> &mut Self {
        self.push_flag(FlagName::FreshCloning)
    }

    /// Adds the authorship analysis flag.
    pub fn add_analyze_authorship(&mut self) -> &mut Self {
        self.push_flag(FlagName::AnalyzeAuthorship)
    }

    /// Adds the originality threshold flag.
    ///
    /// The threshold uses Rust's `Debug` form, so `1.0` is written as `1.0`
    /// rather than `1`. At extreme magnitudes this differs from printers that
    /// switch to a `1.0E-5` / `1.0E7` scientific form: `1e-5` is written as
    /// `1e-5` and `1e7` as `10000000.0`. Both still parse as doubles.
    pub fn add_originality_threshold(&mut self, threshold: f64) -> &mut Self {
        self.push_flag(FlagName::OriginalityThreshold)
            .push_plain(&format!("{threshold:?}"))
    }

    /// Adds the portfolio view flag.
    pub fn add_portfolio(&mut self) -> &mut Self {
        self.push_flag(FlagName::Portfolio)
    }

    /// Adds the flag that refreshes only the textual report.
    pub fn add_only_text_refreshed(&mut self) -> &mut Self {
        self.push_flag(FlagName::RefreshOnlyText)
    }

    /// Adds `content` verbatim, followed by a space.
    ///
    /// Covers fragments no named option produces, including deliberately
    /// malformed input.
    pub fn add(&mut self, content: &str) -> &mut Self {
        self.push_plain(content)
    }

    /// Adds exactly `count` spaces and nothing else.
    pub fn add_white_space(&mut self, count: usize) -> &mut Self {
        self.input.extend(iter::repeat_n(WHITESPACE, count));
        self
    }

    /// Clears the accumulated input and the shallow cloning record.
    pub fn reset(&mut self) -> &mut Self {
        trace!(discarded = self.input.len(), "resetting invocation builder");
        self.input.clear();
        self.shallow_cloning = false;
        self
    }

    /// Whether [`InvocationBuilder::add_shallow_cloning`] was called since
    /// construction or the last reset.
    #[must_use]
    pub const fn is_shallow_cloning(&self) -> bool {
        self.shallow_cloning
    }

    fn push_flag(&mut self, flag: FlagName) -> &mut Self {
        let registry = self.registry;
        let token = registry.primary(flag);
        trace!(%flag, token, "appending option");
        self.push_plain(token)
    }

    fn push_path(&mut self, path: &Utf8Path) -> &mut Self {
        self.input.push('"');
        self.input.push_str(path.as_str());
        self.input.push('"');
        self.input.push(WHITESPACE);
        self
    }

    fn push_plain(&mut self, value: &str) -> &mut Self {
        self.input.push_str(value);
        self.input.push(WHITESPACE);
        self
    }
}

impl fmt::Display for InvocationBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.input)
    }
}
