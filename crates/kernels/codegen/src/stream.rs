//! Indenting text sink for generated kernel source.
//!
//! [`KernelStream`] accepts formatted text through [`std::fmt::Write`] and
//! keeps it in a pending fragment until a line is complete or [`flush`] is
//! called. Every committed fragment is prefixed with the current
//! indentation, so generator code never tracks column positions itself:
//!
//! ```
//! use std::fmt::Write;
//! use lagen_codegen::KernelStream;
//!
//! let mut out = KernelStream::new();
//! out.open_block("__kernel void scale(__global float* x, float a)");
//! writeln!(out, "x[get_global_id(0)] *= a;").unwrap();
//! out.close_block();
//!
//! assert_eq!(
//!     out.into_contents(),
//!     "__kernel void scale(__global float* x, float a) {\n    x[get_global_id(0)] *= a;\n}\n"
//! );
//! ```
//!
//! [`flush`]: KernelStream::flush

use std::fmt;

use tracing::{debug, trace, warn};

use crate::config::StreamConfig;
use crate::error::ConfigError;

/// Buffered, indentation-aware writer for kernel source text.
#[derive(Debug, Clone)]
pub struct KernelStream {
    config: StreamConfig,
    committed: String,
    pending: String,
    indent: usize,
    /// Whether the last committed fragment ended a line.
    at_line_start: bool,
}

impl KernelStream {
    /// Stream with the default four-space indent.
    pub fn new() -> Self {
        Self {
            config: StreamConfig::default(),
            committed: String::new(),
            pending: String::new(),
            indent: 0,
            at_line_start: true,
        }
    }

    /// Stream with a validated custom configuration.
    pub fn with_config(config: StreamConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    pub fn indent_level(&self) -> usize {
        self.indent
    }

    pub fn increase_indent(&mut self) {
        self.indent += 1;
        debug!(level = self.indent, "indent increased");
    }

    /// Decrease the indent by one level. Saturates at zero.
    pub fn decrease_indent(&mut self) {
        match self.indent.checked_sub(1) {
            Some(level) => {
                self.indent = level;
                debug!(level, "indent decreased");
            }
            None => warn!("indent decreased below zero, staying at zero"),
        }
    }

    /// Commit the pending fragment behind the current indentation.
    ///
    /// Each flush indents what it commits, so a line built from several
    /// explicitly flushed fragments carries one indent per fragment.
    pub fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let fragment = std::mem::take(&mut self.pending);
        self.commit(&fragment);
    }

    /// Committed text followed by the pending fragment as it would be
    /// flushed right now.
    pub fn contents(&self) -> String {
        let mut out = self.committed.clone();
        self.render(&self.pending, &mut out);
        out
    }

    /// Flush and return the finished text.
    pub fn into_contents(mut self) -> String {
        self.flush();
        self.committed
    }

    /// Write `header {` on its own line and indent what follows.
    pub fn open_block(&mut self, header: &str) {
        self.end_partial_line();
        if header.is_empty() {
            self.push_line("{");
        } else {
            self.push_line(&format!("{header} {{"));
        }
        self.increase_indent();
    }

    /// Dedent and write the closing brace of the innermost block.
    pub fn close_block(&mut self) {
        self.end_partial_line();
        self.decrease_indent();
        self.push_line("}");
    }

    fn end_partial_line(&mut self) {
        if !self.pending.is_empty() || !self.at_line_start {
            self.push_text("\n");
        }
    }

    fn push_line(&mut self, line: &str) {
        self.push_text(line);
        self.push_text("\n");
    }

    fn push_text(&mut self, text: &str) {
        for piece in text.split_inclusive('\n') {
            self.pending.push_str(piece);
            if piece.ends_with('\n') {
                self.flush();
            }
        }
    }

    fn commit(&mut self, fragment: &str) {
        let mut committed = std::mem::take(&mut self.committed);
        self.render(fragment, &mut committed);
        self.committed = committed;
        self.at_line_start = fragment.ends_with('\n');
        trace!(
            bytes = fragment.len(),
            line_complete = self.at_line_start,
            "fragment committed"
        );
    }

    /// Append `fragment` to `out` behind the current indentation.
    ///
    /// A bare line terminator is left unindented, unless it forms a blank
    /// line and `indent_blank_lines` is set.
    fn render(&self, fragment: &str, out: &mut String) {
        if fragment.is_empty() {
            return;
        }
        let blank = fragment.trim_end_matches('\n').is_empty();
        if !blank || (self.at_line_start && self.config.indent_blank_lines) {
            for _ in 0..self.indent {
                out.push_str(&self.config.indent_unit);
            }
        }
        out.push_str(fragment);
    }
}

impl Default for KernelStream {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for KernelStream {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_text(s);
        Ok(())
    }
}
