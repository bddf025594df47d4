//! Buffered line writer for generated candidates

use std::fs::File;
use std::io::{self, BufWriter, IntoInnerError, Write};
use std::path::Path;

/// Append-only, newline-terminated output
#[derive(Debug)]
pub struct OutputSink<W: Write> {
    writer: BufWriter<W>,
}

impl OutputSink<File> {
    /// Create (or truncate) the output file
    ///
    /// # Errors
    /// Returns the I/O error if the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        File::create(path).map(Self::new)
    }
}

impl<W: Write> OutputSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: BufWriter::new(inner),
        }
    }

    /// Write one candidate followed by a newline
    ///
    /// # Errors
    /// Propagates write failures.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")
    }

    /// # Errors
    /// Propagates flush failures.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Flush and return the underlying writer
    ///
    /// # Errors
    /// Returns the error from the final flush.
    pub fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(IntoInnerError::into_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_newline_terminated() {
        let mut sink = OutputSink::new(Vec::new());
        sink.write_line("alpha").unwrap();
        sink.write_line("").unwrap();
        sink.write_line("beta").unwrap();
        assert_eq!(sink.into_inner().unwrap(), b"alpha\n\nbeta\n");
    }

    #[test]
    fn create_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let mut sink = OutputSink::create(&path).unwrap();
        sink.write_line("x").unwrap();
        sink.flush().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "x\n");
    }
}
