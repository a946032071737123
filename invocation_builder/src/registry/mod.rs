//! Canonical flag spellings consumed by [`crate::InvocationBuilder`].
//!
//! A [`FlagRegistry`] maps every [`FlagName`] to its accepted [`Aliases`].
//! The table is complete by construction, so looking up a primary alias never
//! fails. The [`FlagRegistry::standard`] table mirrors the analysis tool's
//! argument parser; override documents can replace individual entries (see
//! [`FlagRegistry::from_toml_str`] and [`FlagRegistry::load`]).

mod aliases;
mod flag;
mod layer;

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, RegistryResult};

pub use aliases::Aliases;
pub use flag::FlagName;

static STANDARD: LazyLock<FlagRegistry> = LazyLock::new(FlagRegistry::standard_table);

/// Read-only table of spellings for every flag the builder can emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FlagRegistry {
    help: Aliases,
    config: Aliases,
    repos: Aliases,
    view: Aliases,
    output: Aliases,
    since: Aliases,
    until: Aliases,
    period: Aliases,
    formats: Aliases,
    ignore_standalone_config: Aliases,
    ignore_filesize_limit: Aliases,
    timezone: Aliases,
    cloning_threads: Aliases,
    analysis_threads: Aliases,
    shallow_cloning: Aliases,
    find_previous_authors: Aliases,
    last_modified_date: Aliases,
    fresh_cloning: Aliases,
    analyze_authorship: Aliases,
    originality_threshold: Aliases,
    portfolio: Aliases,
    refresh_only_text: Aliases,
}

impl FlagRegistry {
    /// Process-wide table matching the analysis tool's own parser.
    ///
    /// ```rust
    /// use invocation_builder::{FlagName, FlagRegistry};
    ///
    /// let registry = FlagRegistry::standard();
    /// assert_eq!(registry.primary(FlagName::Since), "--since");
    /// assert!(registry.aliases(FlagName::Since).contains("-s"));
    /// ```
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    fn standard_table() -> Self {
        Self {
            help: Aliases::trusted("--help", &["-h"]),
            config: Aliases::trusted("--config", &["-c"]),
            repos: Aliases::trusted("--repos", &["--repo", "-r"]),
            view: Aliases::trusted("--view", &["-v"]),
            output: Aliases::trusted("--output", &["-o"]),
            since: Aliases::trusted("--since", &["-s"]),
            until: Aliases::trusted("--until", &["-u"]),
            period: Aliases::trusted("--period", &["-p"]),
            formats: Aliases::trusted("--formats", &["-f"]),
            ignore_standalone_config: Aliases::trusted("--ignore-standalone-config", &["-i"]),
            ignore_filesize_limit: Aliases::trusted("--ignore-filesize-limit", &["-I"]),
            timezone: Aliases::trusted("--timezone", &["-t"]),
            cloning_threads: Aliases::trusted("--cloning-threads", &[]),
            analysis_threads: Aliases::trusted("--analysis-threads", &[]),
            shallow_cloning: Aliases::trusted("--shallow-cloning", &["-S"]),
            find_previous_authors: Aliases::trusted("--find-previous-authors", &["-F"]),
            last_modified_date: Aliases::trusted("--last-modified-date", &["-l"]),
            fresh_cloning: Aliases::trusted("--fresh-cloning", &[]),
            analyze_authorship: Aliases::trusted("--analyze-authorship", &["-A"]),
            originality_threshold: Aliases::trusted("--originality-threshold", &["-ot"]),
            portfolio: Aliases::trusted("--portfolio", &[]),
            refresh_only_text: Aliases::trusted("--refresh-only-text", &[]),
        }
    }

    /// Every accepted spelling of `flag`, primary first.
    #[must_use]
    pub const fn aliases(&self, flag: FlagName) -> &Aliases {
        match flag {
            FlagName::Help => &self.help,
            FlagName::Config => &self.config,
            FlagName::Repos => &self.repos,
            FlagName::View => &self.view,
            FlagName::Output => &self.output,
            FlagName::Since => &self.since,
            FlagName::Until => &self.until,
            FlagName::Period => &self.period,
            FlagName::Formats => &self.formats,
            FlagName::IgnoreStandaloneConfig => &self.ignore_standalone_config,
            FlagName::IgnoreFilesizeLimit => &self.ignore_filesize_limit,
            FlagName::Timezone => &self.timezone,
            FlagName::CloningThreads => &self.cloning_threads,
            FlagName::AnalysisThreads => &self.analysis_threads,
            FlagName::ShallowCloning => &self.shallow_cloning,
            FlagName::FindPreviousAuthors => &self.find_previous_authors,
            FlagName::LastModifiedDate => &self.last_modified_date,
            FlagName::FreshCloning => &self.fresh_cloning,
            FlagName::AnalyzeAuthorship => &self.analyze_authorship,
            FlagName::OriginalityThreshold => &self.originality_threshold,
            FlagName::Portfolio => &self.portfolio,
            FlagName::RefreshOnlyText => &self.refresh_only_text,
        }
    }

    const fn aliases_mut(&mut self, flag: FlagName) -> &mut Aliases {
        match flag {
            FlagName::Help => &mut self.help,
            FlagName::Config => &mut self.config,
            FlagName::Repos => &mut self.repos,
            FlagName::View => &mut self.view,
            FlagName::Output => &mut self.output,
            FlagName::Since => &mut self.since,
            FlagName::Until => &mut self.until,
            FlagName::Period => &mut self.period,
            FlagName::Formats => &mut self.formats,
            FlagName::IgnoreStandaloneConfig => &mut self.ignore_standalone_config,
            FlagName::IgnoreFilesizeLimit => &mut self.ignore_filesize_limit,
            FlagName::Timezone => &mut self.timezone,
            FlagName::CloningThreads => &mut self.cloning_threads,
            FlagName::AnalysisThreads => &mut self.analysis_threads,
            FlagName::ShallowCloning => &mut self.shallow_cloning,
            FlagName::FindPreviousAuthors => &mut self.find_previous_authors,
            FlagName::LastModifiedDate => &mut self.last_modified_date,
            FlagName::FreshCloning => &mut self.fresh_cloning,
            FlagName::AnalyzeAuthorship => &mut self.analyze_authorship,
            FlagName::OriginalityThreshold => &mut self.originality_threshold,
            FlagName::Portfolio => &mut self.portfolio,
            FlagName::RefreshOnlyText => &mut self.refresh_only_text,
        }
    }

    /// The canonical spelling of `flag`.
    #[must_use]
    pub fn primary(&self, flag: FlagName) -> &str {
        self.aliases(flag).primary()
    }

    /// Returns a copy of this registry with the spellings of `flag` replaced.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Alias`] when `spellings` is empty or contains
    /// a blank or whitespace-bearing spelling.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use invocation_builder::{FlagName, FlagRegistry};
    ///
    /// let registry = FlagRegistry::standard()
    ///     .clone()
    ///     .with_aliases(FlagName::Repos, ["--repo", "-r"])?;
    /// assert_eq!(registry.primary(FlagName::Repos), "--repo");
    /// # Ok::<(), invocation_builder::RegistryError>(())
    /// ```
    pub fn with_aliases<I, S>(mut self, flag: FlagName, spellings: I) -> RegistryResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let aliases =
            Aliases::new(spellings).map_err(|source| RegistryError::Alias { flag, source })?;
        *self.aliases_mut(flag) = aliases;
        Ok(self)
    }
}

impl Default for FlagRegistry {
    fn default() -> Self {
        Self::standard().clone()
    }
}
