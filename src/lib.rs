//! # shell-render
//!
//! Render raw output captured from interactive remote shell sessions into
//! the text a human would see on a real terminal.
//!
//! Captured output is full of carriage-return overwrites, backspaces, tabs,
//! cursor-movement and erase sequences, colour codes and pager prompts. This
//! crate resolves all of that into plain, display-safe text.
//!
//! ## Features
//!
//! - **Terminal rendering**: per-line cursor model with overwrite semantics
//! - **Sanitization**: removal of unsafe C0 control bytes
//! - **Pager cleanup**: `--More--` prompt detection and removal
//! - **Pure**: no I/O, no shared state; safe to call from any thread
//!
//! ## Quick Start
//!
//! ```
//! use shell_render::{OutputPipeline, Normalizer};
//!
//! let text = Normalizer::new().normalize("Hello World\rGoodbye");
//! assert_eq!(text, "Goodbyeorld");
//!
//! let pipeline = OutputPipeline::new();
//! let out = pipeline.process("\x1b[1mport status\x1b[0m\n --More-- ");
//! assert!(out.saw_pager);
//! assert_eq!(pipeline.dismissal_key(&out), Some(" "));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

// Re-export commonly used types
pub use error::{Result, ShellRenderError};
pub use output::{
    normalize, strip_pager_artifacts, strip_pager_dismissal_artifacts, Normalizer, OutputPipeline,
    OutputSanitizer, PagerScan, PagerStripper, ProcessedOutput,
};
