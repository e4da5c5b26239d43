//! Removal of remote pager prompts such as `--More--`.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

/// Built-in continuation prompt: optional CR, dashes, spaces, the word
/// "more" in any case, spaces, dashes.
pub const DEFAULT_PAGER_PATTERN: &str = r"(?i)\r?-* *\bmore\b *-*";

fn default_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(DEFAULT_PAGER_PATTERN).expect("built-in pager pattern"))
}

/// Result of a pager scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerScan {
    /// Text with every prompt removed.
    pub text: String,
    /// Whether at least one prompt was found.
    pub saw_pager: bool,
}

/// Pager prompt stripper.
#[derive(Debug, Clone)]
pub struct PagerStripper {
    pattern: Regex,
}

impl PagerStripper {
    /// Stripper using the built-in `--More--` pattern.
    pub fn new() -> Self {
        Self {
            pattern: default_regex().clone(),
        }
    }

    /// Stripper using a custom prompt pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// The prompt pattern in use.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Remove every prompt from `text`.
    ///
    /// The text is returned unchanged when no prompt is present.
    pub fn strip(&self, text: &str) -> PagerScan {
        let matches = self.pattern.find_iter(text).count();
        if matches == 0 {
            return PagerScan {
                text: text.to_string(),
                saw_pager: false,
            };
        }

        debug!(matches, "stripped pager prompt");
        PagerScan {
            text: self.pattern.replace_all(text, "").into_owned(),
            saw_pager: true,
        }
    }
}

impl Default for PagerStripper {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove pager prompts using the built-in pattern.
pub fn strip_pager_artifacts(text: &str) -> PagerScan {
    PagerStripper::new().strip(text)
}

/// Remove the `CR spaces CR` left by dismissing a paused pager.
///
/// Only a single artifact at the very start of the text is removed.
pub fn strip_pager_dismissal_artifacts(text: &str) -> String {
    strip_dismissal_prefix(text).unwrap_or(text).to_string()
}

/// Dismissal stripping for a possibly-absent string; `None` passes through.
pub fn strip_pager_dismissal_artifacts_opt(text: Option<&str>) -> Option<String> {
    text.map(strip_pager_dismissal_artifacts)
}

fn strip_dismissal_prefix(text: &str) -> Option<&str> {
    text.strip_prefix('\r')?
        .trim_start_matches(' ')
        .strip_prefix('\r')
}
