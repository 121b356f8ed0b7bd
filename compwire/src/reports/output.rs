//! Where reports are rendered.

use std::io::{self, Write};

/// Semantic output operations used by reports.
///
/// Reports say *what* to show; implementations decide how it looks.
pub trait Output {
    /// Heading for a group of items, e.g. `Written:`.
    fn section(&mut self, name: &str);

    fn key_value(&mut self, key: &str, value: &str);

    /// Key-value pair nested under a heading.
    fn key_value_indented(&mut self, key: &str, value: &str);

    fn list_item(&mut self, text: &str);

    /// A file that was created or changed.
    fn added_item(&mut self, text: &str);

    /// Labelled separator, used between previewed files.
    fn divider(&mut self, label: &str);

    /// Text emitted as-is.
    fn preformatted(&mut self, text: &str);

    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Plain-text output, written to stdout by default. Write errors are ignored.
pub struct TerminalOutput<W: Write = io::Stdout> {
    writer: W,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalOutput<W> {
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    fn emit(&mut self, line: std::fmt::Arguments<'_>) {
        let _ = writeln!(self.writer, "{}", line);
    }
}

impl<W: Write> Output for TerminalOutput<W> {
    fn section(&mut self, name: &str) {
        self.emit(format_args!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.emit(format_args!("{}: {}", key, value));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.emit(format_args!("  {}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.emit(format_args!("  - {}", text));
    }

    fn added_item(&mut self, text: &str) {
        self.emit(format_args!("  + {}", text));
    }

    fn divider(&mut self, label: &str) {
        self.emit(format_args!("── {} ──", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.emit(format_args!("{}", text));
    }

    fn newline(&mut self) {
        self.emit(format_args!(""));
    }
}

/// Render a report to a string, as it would appear on the terminal.
#[cfg(test)]
pub fn render_to_string(report: &impl Report) -> String {
    let mut out = TerminalOutput::with_writer(Vec::new());
    report.render(&mut out);
    String::from_utf8(out.writer).unwrap()
}
