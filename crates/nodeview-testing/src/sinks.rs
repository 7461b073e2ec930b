//! `io::Write` doubles for exercising renderer sink handling.

use std::io;

/// Sink that accepts `budget` bytes and then fails every write with
/// `BrokenPipe`, like stdout piped into an exited `head`.
#[derive(Debug, Default)]
pub struct FailingSink {
    pub written: Vec<u8>,
    budget: usize,
}

impl FailingSink {
    /// Fails on the very first write.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `budget` bytes before failing.
    pub fn after(budget: usize) -> Self {
        Self {
            written: Vec::new(),
            budget,
        }
    }
}

impl io::Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.budget == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        let n = buf.len().min(self.budget);
        self.written.extend_from_slice(&buf[..n]);
        self.budget -= n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
