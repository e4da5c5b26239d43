//! Ordered composition of the output passes.

use tracing::debug;

use super::normalizer::Normalizer;
use super::pager::{strip_pager_dismissal_artifacts, PagerStripper};
use super::sanitizer::OutputSanitizer;

/// Keystroke that advances a paused pager by one page.
pub const DEFAULT_DISMISS_KEY: &str = " ";

/// Clean text produced from one captured chunk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessedOutput {
    /// Rendered text.
    pub text: String,
    /// Whether a pager prompt was found and removed.
    pub saw_pager: bool,
}

/// Output processing pipeline.
///
/// Runs, in order: dismissal-artifact removal on the raw chunk, rendering,
/// sanitization and pager prompt removal. Each optional pass can be turned
/// off.
#[derive(Debug, Clone)]
pub struct OutputPipeline {
    normalizer: Normalizer,
    sanitize: bool,
    pager: Option<PagerStripper>,
    strip_dismissal: bool,
    dismiss_key: String,
}

impl OutputPipeline {
    /// Create a pipeline with every pass enabled and a tab width of 8.
    pub fn new() -> Self {
        Self {
            normalizer: Normalizer::new(),
            sanitize: true,
            pager: Some(PagerStripper::new()),
            strip_dismissal: true,
            dismiss_key: DEFAULT_DISMISS_KEY.to_string(),
        }
    }

    /// Set the tab stop width.
    pub fn tab_size(mut self, tab_size: usize) -> Self {
        self.normalizer = Normalizer::with_tab_size(tab_size);
        self
    }

    /// Enable or disable the sanitizer pass.
    pub fn sanitize(mut self, enabled: bool) -> Self {
        self.sanitize = enabled;
        self
    }

    /// Use a specific pager stripper.
    pub fn pager(mut self, stripper: PagerStripper) -> Self {
        self.pager = Some(stripper);
        self
    }

    /// Disable pager prompt removal.
    pub fn without_pager(mut self) -> Self {
        self.pager = None;
        self
    }

    /// Enable or disable dismissal-artifact removal.
    pub fn strip_dismissal(mut self, enabled: bool) -> Self {
        self.strip_dismissal = enabled;
        self
    }

    /// Set the keystroke reported by [`OutputPipeline::dismissal_key`].
    pub fn dismiss_key(mut self, key: impl Into<String>) -> Self {
        self.dismiss_key = key.into();
        self
    }

    /// The normalizer used for rendering.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Process one captured chunk.
    pub fn process(&self, raw: &str) -> ProcessedOutput {
        let rendered = if self.strip_dismissal {
            self.normalizer
                .normalize(&strip_pager_dismissal_artifacts(raw))
        } else {
            self.normalizer.normalize(raw)
        };

        let text = if self.sanitize {
            OutputSanitizer::sanitize(&rendered)
        } else {
            rendered
        };

        match &self.pager {
            Some(stripper) => {
                let scan = stripper.strip(&text);
                ProcessedOutput {
                    text: scan.text,
                    saw_pager: scan.saw_pager,
                }
            }
            None => ProcessedOutput {
                text,
                saw_pager: false,
            },
        }
    }

    /// Process a possibly-absent chunk; `None` passes through.
    pub fn process_opt(&self, raw: Option<&str>) -> Option<ProcessedOutput> {
        raw.map(|text| self.process(text))
    }

    /// Keystroke to send back to the session, if the output paused a pager.
    pub fn dismissal_key(&self, output: &ProcessedOutput) -> Option<&str> {
        if output.saw_pager {
            debug!(key = ?self.dismiss_key, "pager paused, dismissal required");
            Some(self.dismiss_key.as_str())
        } else {
            None
        }
    }
}

impl Default for OutputPipeline {
    fn default() -> Self {
        Self::new()
    }
}
