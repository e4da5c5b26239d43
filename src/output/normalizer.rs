//! Render raw captured output into the text a terminal would display.

use tracing::trace;
use vte::{Params, Parser, Perform};

use super::escape::{scan_escape, CsiCommand, EscapeSpan};
use super::line::{LineBuffer, DEFAULT_TAB_SIZE};

/// Line terminator used to join rendered segments.
pub const LINE_ENDING: &str = "\r\n";

/// Output normalizer.
///
/// Splits input on line feeds and replays each segment through its own
/// [`LineBuffer`], so carriage-return overwrites, backspaces, tabs and
/// cursor sequences resolve to their final visible text.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    tab_size: usize,
}

impl Normalizer {
    /// Create a normalizer with the default tab width of 8.
    pub fn new() -> Self {
        Self::with_tab_size(DEFAULT_TAB_SIZE)
    }

    /// Create a normalizer with a custom tab width (clamped to at least 1).
    pub fn with_tab_size(tab_size: usize) -> Self {
        Self {
            tab_size: tab_size.max(1),
        }
    }

    /// Tab stop width in use.
    pub fn tab_size(&self) -> usize {
        self.tab_size
    }

    /// Render `input`, joining lines with CR LF.
    pub fn normalize(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        for (index, segment) in input.split('\n').enumerate() {
            if index > 0 {
                output.push_str(LINE_ENDING);
            }
            output.push_str(&self.render_segment(segment));
        }
        output
    }

    /// Render a possibly-absent chunk; `None` passes through.
    pub fn normalize_opt(&self, input: Option<&str>) -> Option<String> {
        input.map(|text| self.normalize(text))
    }

    fn render_segment(&self, segment: &str) -> String {
        let mut renderer = SegmentRenderer::new(self.tab_size);
        let mut parser = Parser::new();
        let mut bytes = segment.as_bytes();

        // The parser only ever sees plain text and complete sequences.
        while !bytes.is_empty() {
            let text_len = bytes.iter().position(|&b| b == 0x1b).unwrap_or(bytes.len());
            if text_len > 0 {
                parser.advance(&mut renderer, &bytes[..text_len]);
                bytes = &bytes[text_len..];
                continue;
            }

            let span = scan_escape(bytes);
            match span {
                EscapeSpan::Sequence(len) => parser.advance(&mut renderer, &bytes[..len]),
                EscapeSpan::Skip(_) => {}
                EscapeSpan::Drop(len) => trace!(len, "dropping incomplete escape"),
            }
            bytes = &bytes[span.byte_len()..];
        }

        renderer.line.render()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// VTE performer that replays one segment into a line buffer.
struct SegmentRenderer {
    line: LineBuffer,
    tab_size: usize,
}

impl SegmentRenderer {
    fn new(tab_size: usize) -> Self {
        Self {
            line: LineBuffer::new(),
            tab_size,
        }
    }
}

impl Perform for SegmentRenderer {
    fn print(&mut self, c: char) {
        self.line.write(c);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            b'\r' => self.line.carriage_return(),
            0x08 => self.line.backspace(),
            b'\t' => self.line.tab(self.tab_size),
            // Segments never contain line feeds.
            b'\n' => {}
            // Other C0 bytes are left for the sanitizer.
            _ => self.line.write(char::from(byte)),
        }
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], ignore: bool, action: char) {
        if ignore {
            return;
        }
        CsiCommand::parse(params, intermediates, action).apply(&mut self.line);
    }

    fn esc_dispatch(&mut self, intermediates: &[u8], _ignore: bool, byte: u8) {
        // DEC save/restore cursor share the CSI s/u slot.
        match (intermediates, byte) {
            ([], b'7') => self.line.save_cursor(),
            ([], b'8') => self.line.restore_cursor(),
            _ => {}
        }
    }

}

/// Render `input` with the given tab width.
pub fn normalize(input: &str, tab_size: usize) -> String {
    Normalizer::with_tab_size(tab_size).normalize(input)
}
