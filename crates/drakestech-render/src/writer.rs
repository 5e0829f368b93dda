//! Minimal indented text writer for the content document.
//!
//! The document layout is fixed, so it is written line by line rather than
//! through a serializer: comments, blank separator lines and key order all
//! have to come out exactly as the game plugin's config loader expects.

use std::fmt::Display;

/// Single-quote `text` as a YAML scalar, doubling embedded quotes.
pub fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

#[derive(Debug, Default)]
pub struct Writer {
    out: String,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `text` on its own line, indented by `indent` spaces.
    pub fn line(&mut self, indent: usize, text: impl Display) {
        self.out.push_str(&format!("{:indent$}{text}\n", ""));
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    pub fn comment(&mut self, indent: usize, text: &str) {
        self.line(indent, format_args!("# {text}"));
    }

    /// `key:` opening a nested block.
    pub fn section(&mut self, indent: usize, key: &str) {
        self.line(indent, format_args!("{key}:"));
    }

    /// `key: value` with the value written as-is.
    pub fn plain(&mut self, indent: usize, key: &str, value: impl Display) {
        self.line(indent, format_args!("{key}: {value}"));
    }

    /// `key: 'value'`.
    pub fn quoted(&mut self, indent: usize, key: &str, value: &str) {
        self.plain(indent, key, quote(value));
    }

    /// `key:` followed by one quoted list item per entry.
    pub fn quoted_list<I, S>(&mut self, indent: usize, key: &str, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.section(indent, key);
        for item in items {
            self.line(indent + 2, format_args!("- {}", quote(item.as_ref())));
        }
    }

    /// The finished document: trailing whitespace removed, one final newline.
    pub fn finish(self) -> String {
        let mut out = self.out.trim_end().to_string();
        out.push('\n');
        out
    }
}
