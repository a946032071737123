//! Logical names for the options the analysis tool accepts.

use std::fmt;
use std::str::FromStr;

use crate::error::RegistryError;

/// Logical option understood by the analysis tool's argument parser.
///
/// Each variant maps to a stable kebab-case key used in registry override
/// files and in log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FlagName {
    /// Print usage and exit.
    Help,
    /// Folder holding the repository configuration CSV files.
    Config,
    /// One or more repository locations to analyse.
    Repos,
    /// Report folder to open in the viewer.
    View,
    /// Folder the report is written to.
    Output,
    /// Start date of the analysed window.
    Since,
    /// End date of the analysed window.
    Until,
    /// Length of the analysed window, such as `30d` or `2w`.
    Period,
    /// File formats included in the analysis.
    Formats,
    /// Ignore configuration files stored inside the repositories.
    IgnoreStandaloneConfig,
    /// Analyse files regardless of their size.
    IgnoreFilesizeLimit,
    /// Zone identifier applied to dates.
    Timezone,
    /// Worker count for cloning repositories.
    CloningThreads,
    /// Worker count for analysing repositories.
    AnalysisThreads,
    /// Clone repositories without full history.
    ShallowCloning,
    /// Attribute lines to earlier authors through renames.
    FindPreviousAuthors,
    /// Record the last modified date of each line.
    LastModifiedDate,
    /// Discard previously cloned repositories before cloning.
    FreshCloning,
    /// Run authorship analysis.
    AnalyzeAuthorship,
    /// Threshold above which code counts as original.
    OriginalityThreshold,
    /// Render the report in portfolio layout.
    Portfolio,
    /// Regenerate only the textual report content.
    RefreshOnlyText,
}

impl FlagName {
    /// Every flag, in declaration order.
    pub const ALL: [Self; 22] = [
        Self::Help,
        Self::Config,
        Self::Repos,
        Self::View,
        Self::Output,
        Self::Since,
        Self::Until,
        Self::Period,
        Self::Formats,
        Self::IgnoreStandaloneConfig,
        Self::IgnoreFilesizeLimit,
        Self::Timezone,
        Self::CloningThreads,
        Self::AnalysisThreads,
        Self::ShallowCloning,
        Self::FindPreviousAuthors,
        Self::LastModifiedDate,
        Self::FreshCloning,
        Self::AnalyzeAuthorship,
        Self::OriginalityThreshold,
        Self::Portfolio,
        Self::RefreshOnlyText,
    ];

    /// Stable kebab-case key for this flag.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Config => "config",
            Self::Repos => "repos",
            Self::View => "view",
            Self::Output => "output",
            Self::Since => "since",
            Self::Until => "until",
            Self::Period => "period",
            Self::Formats => "formats",
            Self::IgnoreStandaloneConfig => "ignore-standalone-config",
            Self::IgnoreFilesizeLimit => "ignore-filesize-limit",
            Self::Timezone => "timezone",
            Self::CloningThreads => "cloning-threads",
            Self::AnalysisThreads => "analysis-threads",
            Self::ShallowCloning => "shallow-cloning",
            Self::FindPreviousAuthors => "find-previous-authors",
            Self::LastModifiedDate => "last-modified-date",
            Self::FreshCloning => "fresh-cloning",
            Self::AnalyzeAuthorship => "analyze-authorship",
            Self::OriginalityThreshold => "originality-threshold",
            Self::Portfolio => "portfolio",
            Self::RefreshOnlyText => "refresh-only-text",
        }
    }
}

impl fmt::Display for FlagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FlagName {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|flag| flag.key() == key)
            .ok_or_else(|| RegistryError::UnknownFlag {
                key: key.to_owned(),
            })
    }
}
