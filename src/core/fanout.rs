//! Fan-out writing over an ordered sink set

use super::error::Result;
use super::sink::Sink;

/// An ordered, fixed-after-construction collection of sinks.
///
/// Fan-out is all-or-first-failure: each sink's `write` is invoked exactly
/// once in declaration order, and the first failure propagates immediately
/// without attempting the remaining sinks.
#[derive(Default)]
pub struct SinkSet {
    sinks: Vec<Box<dyn Sink>>,
}

impl SinkSet {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn push(&mut self, sink: Box<dyn Sink>) {
        self.sinks.push(sink);
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Write one record to every sink in declaration order.
    pub fn write_all(&mut self, record: &[u8]) -> Result<()> {
        for sink in &mut self.sinks {
            sink.write(record)?;
        }
        Ok(())
    }

    /// Finalize every sink in declaration order, stopping on first failure.
    pub fn finalize_all(&mut self) -> Result<()> {
        for sink in &mut self.sinks {
            sink.finalize()?;
        }
        Ok(())
    }
}
