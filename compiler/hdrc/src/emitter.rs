//! Output emitter.
//!
//! Renderers write through an [`Emitter`], so the same code fills a string
//! or streams to any [`std::io::Write`].

use std::io::{self, Write};

/// Destination for rendered text.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self);

    /// Emit `columns` spaces.
    fn emit_indent(&mut self, columns: usize);
}

/// String-based emitter for in-memory rendering.
#[derive(Debug, Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the rendered output.
    pub fn output(self) -> String {
        self.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_indent(&mut self, columns: usize) {
        self.buffer.extend(std::iter::repeat(' ').take(columns));
    }
}

/// Emitter over any writer.
///
/// Writes after the first failure are skipped; [`IoEmitter::finish`]
/// reports that failure.
pub struct IoEmitter<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> IoEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Flush and return the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write(&mut self, bytes: &[u8]) {
        if self.error.is_none() {
            if let Err(err) = self.writer.write_all(bytes) {
                self.error = Some(err);
            }
        }
    }
}

impl<W: Write> Emitter for IoEmitter<W> {
    fn emit(&mut self, text: &str) {
        self.write(text.as_bytes());
    }

    fn emit_newline(&mut self) {
        self.write(b"\n");
    }

    fn emit_indent(&mut self, columns: usize) {
        for _ in 0..columns {
            self.write(b" ");
        }
    }
}

#[cfg(test)]
mod tests;
