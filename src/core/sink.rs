//! Sink trait for log record destinations

use super::error::Result;

/// A consumer capable of durably writing one finished log record.
///
/// `record` is the assembled line without its trailing newline; the sink
/// appends exactly one newline. Delivery is all-or-fail: a partial write
/// must surface as an error, never as success. Log loss is a systemic
/// fault here, not acceptable degradation.
///
/// Sinks provide no cross-thread synchronization of their own; callers
/// writing one sink from multiple threads must serialize externally.
pub trait Sink: Send {
    /// Deliver one record plus a trailing newline.
    fn write(&mut self, record: &[u8]) -> Result<()>;

    /// Release the backing resource, flushing pending data.
    ///
    /// Writing after finalize, or finalizing twice, is a caller bug:
    /// it asserts in debug builds and errors in release builds.
    fn finalize(&mut self) -> Result<()> {
        Ok(())
    }

    /// Diagnostic identity of this sink.
    fn name(&self) -> &str;
}
