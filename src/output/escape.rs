//! Escape run classification, and CSI command decoding and dispatch onto a
//! [`LineBuffer`].
//!
//! Only commands with a visible effect on a single line are modelled. Row
//! addressing is parsed and dropped, and style codes are discarded.

use tracing::trace;
use vte::Params;

use super::line::LineBuffer;

const ESC: u8 = 0x1b;
const BEL: u8 = 0x07;

/// How a run starting at an ESC byte is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeSpan {
    /// A complete sequence of this many bytes, handed to the parser.
    Sequence(usize),
    /// A complete control string with no visible effect, skipped whole.
    Skip(usize),
    /// Not a recognized sequence. Only these bytes are dropped; the rest
    /// is rendered as ordinary text.
    Drop(usize),
}

impl EscapeSpan {
    /// Number of input bytes the span covers. Always at least one.
    pub fn byte_len(self) -> usize {
        match self {
            Self::Sequence(n) | Self::Skip(n) | Self::Drop(n) => n,
        }
    }
}

/// Classify the escape run at the start of `bytes`, which must begin with ESC.
///
/// Printable bytes are consumed only as part of a terminated sequence. A stray
/// ESC, or one opening a control string that never terminates, drops just
/// the ESC itself.
pub fn scan_escape(bytes: &[u8]) -> EscapeSpan {
    debug_assert_eq!(bytes.first(), Some(&ESC));

    match bytes.get(1) {
        Some(b'[') => scan_csi(bytes),
        // OSC ends on BEL or ST; DCS, SOS, PM and APC on ST only.
        Some(b']') => scan_string(bytes, true),
        Some(b'P' | b'X' | b'^' | b'_') => scan_string(bytes, false),
        // Charset designation takes one more printable byte.
        Some(b'(' | b')' | b'*' | b'+') => match bytes.get(2) {
            Some(0x20..=0x7e) => EscapeSpan::Sequence(3),
            _ => EscapeSpan::Drop(1),
        },
        // DEC save/restore, keypad modes, string terminator.
        Some(b'7' | b'8' | b'=' | b'>' | b'\\') => EscapeSpan::Sequence(2),
        _ => EscapeSpan::Drop(1),
    }
}

fn scan_csi(bytes: &[u8]) -> EscapeSpan {
    for (offset, &byte) in bytes.iter().enumerate().skip(2) {
        match byte {
            // Parameters and intermediates.
            0x20..=0x3f | 0x7f => {}
            0x40..=0x7e => return EscapeSpan::Sequence(offset + 1),
            // CAN, SUB and ESC abort the sequence.
            0x18 | 0x1a | ESC => return EscapeSpan::Drop(csi_prefix_len(bytes)),
            // Other C0 controls execute inside the sequence.
            0x00..=0x1f => {}
            _ => return EscapeSpan::Drop(csi_prefix_len(bytes)),
        }
    }
    EscapeSpan::Drop(csi_prefix_len(bytes))
}

/// `ESC [` plus the parameter bytes directly after it.
fn csi_prefix_len(bytes: &[u8]) -> usize {
    2 + bytes[2..]
        .iter()
        .take_while(|&&b| matches!(b, 0x20..=0x3f))
        .count()
}

fn scan_string(bytes: &[u8], bell_terminates: bool) -> EscapeSpan {
    for (offset, &byte) in bytes.iter().enumerate().skip(2) {
        match byte {
            BEL if bell_terminates => return EscapeSpan::Skip(offset + 1),
            ESC if bytes.get(offset + 1) == Some(&b'\\') => return EscapeSpan::Skip(offset + 2),
            ESC => break,
            _ => {}
        }
    }
    EscapeSpan::Drop(1)
}

/// Erase-in-line mode (`CSI Ps K`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseMode {
    /// Cursor to end of line.
    ToEnd,
    /// Start of line through cursor.
    ToStart,
    /// Entire line.
    All,
}

/// A decoded control sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsiCommand {
    /// `CSI n C`
    CursorForward(usize),
    /// `CSI n D`
    CursorBackward(usize),
    /// `CSI n G`, 1-based column.
    CursorColumn(usize),
    /// `CSI row ; col H` and `CSI row ; col f`. The row is ignored.
    CursorPosition { row: usize, column: usize },
    /// `CSI n K`
    EraseInLine(EraseMode),
    /// `CSI n @`
    InsertBlanks(usize),
    /// `CSI n P`
    DeleteChars(usize),
    /// `CSI s`
    SaveCursor,
    /// `CSI u`
    RestoreCursor,
    /// `CSI ... m`
    SelectGraphicRendition,
    /// Recognized or not, nothing to do on a single line.
    Ignored(char),
}

impl CsiCommand {
    /// Decode a CSI from its parameters and final byte.
    ///
    /// Sequences carrying intermediates or private markers (`CSI ? 25 l`) are
    /// never line operations and decode as [`CsiCommand::Ignored`].
    pub fn parse(params: &Params, intermediates: &[u8], action: char) -> Self {
        if !intermediates.is_empty() {
            return Self::Ignored(action);
        }

        let values: Vec<u16> = params
            .iter()
            .map(|param| param.first().copied().unwrap_or(0))
            .collect();
        Self::from_values(&values, action)
    }

    /// Decode from already-split numeric parameters. Omitted parameters are 0.
    pub fn from_values(values: &[u16], action: char) -> Self {
        let raw = |index: usize| values.get(index).copied().map_or(0, usize::from);
        // Zero and omitted both mean "use the default of 1".
        let count = |index: usize| raw(index).max(1);

        match action {
            'C' => Self::CursorForward(count(0)),
            'D' => Self::CursorBackward(count(0)),
            'G' => Self::CursorColumn(count(0)),
            'H' | 'f' => Self::CursorPosition {
                row: count(0),
                column: count(1),
            },
            'K' => match raw(0) {
                0 => Self::EraseInLine(EraseMode::ToEnd),
                1 => Self::EraseInLine(EraseMode::ToStart),
                2 => Self::EraseInLine(EraseMode::All),
                _ => Self::Ignored(action),
            },
            '@' => Self::InsertBlanks(count(0)),
            'P' => Self::DeleteChars(count(0)),
            's' => Self::SaveCursor,
            'u' => Self::RestoreCursor,
            'm' => Self::SelectGraphicRendition,
            _ => Self::Ignored(action),
        }
    }

    /// Apply the command to a line buffer.
    pub fn apply(self, line: &mut LineBuffer) {
        match self {
            Self::CursorForward(n) => line.cursor_forward(n),
            Self::CursorBackward(n) => line.cursor_backward(n),
            Self::CursorColumn(column) | Self::CursorPosition { column, .. } => {
                line.set_column(column)
            }
            Self::EraseInLine(EraseMode::ToEnd) => line.erase_to_end(),
            Self::EraseInLine(EraseMode::ToStart) => line.erase_to_start(),
            Self::EraseInLine(EraseMode::All) => line.erase_line(),
            Self::InsertBlanks(n) => line.insert_blanks(n),
            Self::DeleteChars(n) => line.delete_chars(n),
            Self::SaveCursor => line.save_cursor(),
            Self::RestoreCursor => line.restore_cursor(),
            Self::SelectGraphicRendition => {}
            Self::Ignored(action) => trace!(action = %action, "ignoring CSI sequence"),
        }
    }
}
