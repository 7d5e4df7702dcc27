//! Suppressible output sinks
//!
//! The launcher and every tool write through a `Sink`, which wraps an
//! optional writer. An absent writer turns all writes into no-ops, so a
//! caller can silence standard output or standard error independently.

use std::io::{self, Write};

/// A writer that may be absent. Writes to an absent sink succeed and
/// discard the data; write errors against a present sink are swallowed by
/// the line-oriented helpers, matching ordinary console semantics.
pub struct Sink<'a> {
    inner: Option<&'a mut dyn Write>,
}

impl<'a> Sink<'a> {
    pub fn new(inner: Option<&'a mut dyn Write>) -> Self {
        Sink { inner }
    }

    /// A sink that discards everything.
    pub fn null() -> Self {
        Sink { inner: None }
    }

    /// Write a single line followed by a newline. Errors are ignored.
    pub fn line(&mut self, text: &str) {
        if let Some(writer) = self.inner.as_mut() {
            let _ = writeln!(writer, "{}", text);
        }
    }
}

impl Write for Sink<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.inner.as_mut() {
            Some(writer) => writer.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.inner.as_mut() {
            Some(writer) => writer.flush(),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_sink_collects_lines() {
        let mut buffer = Vec::new();
        {
            let mut sink = Sink::new(Some(&mut buffer));
            sink.line("one");
            sink.line("two");
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_absent_sink_discards_writes() {
        let mut sink = Sink::null();
        sink.line("ignored");
        assert_eq!(sink.write(b"ignored").unwrap(), 7);
        assert!(sink.flush().is_ok());
    }
}
