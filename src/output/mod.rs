//! Output rendering and cleanup.
//!
//! This module turns raw captured shell output into display-ready text:
//! - Terminal rendering of CR, BS, TAB and CSI cursor/erase sequences
//! - Removal of unsafe control bytes
//! - Removal of remote pager prompts
//!
//! # Example
//!
//! ```
//! use shell_render::output::{OutputPipeline, OutputSanitizer, Normalizer};
//!
//! // Render overwrite-style progress output
//! let text = Normalizer::new().normalize("10%\r100%\n\x1b[32mdone\x1b[0m");
//! assert_eq!(text, "100%\r\ndone");
//!
//! // Drop bell and form feed
//! assert_eq!(OutputSanitizer::sanitize("a\x07b\x0c"), "ab");
//!
//! // All passes at once
//! let out = OutputPipeline::new().process("line\n--More--");
//! assert!(out.saw_pager);
//! assert_eq!(out.text, "line\r\n");
//! ```

mod escape;
mod line;
mod normalizer;
mod pager;
mod pipeline;
mod sanitizer;

pub use escape::{scan_escape, CsiCommand, EraseMode, EscapeSpan};
pub use line::{LineBuffer, DEFAULT_TAB_SIZE};
pub use normalizer::{normalize, Normalizer, LINE_ENDING};
pub use pager::{
    strip_pager_artifacts, strip_pager_dismissal_artifacts, strip_pager_dismissal_artifacts_opt,
    PagerScan, PagerStripper, DEFAULT_PAGER_PATTERN,
};
pub use pipeline::{OutputPipeline, ProcessedOutput, DEFAULT_DISMISS_KEY};
pub use sanitizer::OutputSanitizer;
