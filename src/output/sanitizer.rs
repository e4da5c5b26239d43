//! Removal of control bytes that are unsafe to persist or display.

/// C0 controls that survive sanitization: BS, TAB, LF, CR and ESC.
const ALLOWED_CONTROLS: [char; 5] = ['\x08', '\t', '\n', '\r', '\x1b'];

/// Output sanitizer for rendered or raw text.
pub struct OutputSanitizer;

impl OutputSanitizer {
    /// Remove every C0 control character outside the allow-list.
    ///
    /// Printable and non-ASCII characters pass through unchanged.
    pub fn sanitize(input: &str) -> String {
        input.chars().filter(|&c| Self::is_kept(c)).collect()
    }

    /// Sanitize a possibly-absent string; `None` passes through.
    pub fn sanitize_opt(input: Option<&str>) -> Option<String> {
        input.map(Self::sanitize)
    }

    /// Check whether a character survives sanitization.
    pub fn is_kept(c: char) -> bool {
        !matches!(c, '\x00'..='\x1f') || ALLOWED_CONTROLS.contains(&c)
    }
}
