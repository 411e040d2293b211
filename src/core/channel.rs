//! Channel: a named logging endpoint with its own severity ceiling,
//! runtime threshold, and sink set.

use super::error::{LogError, Result};
use super::fanout::SinkSet;
use super::record;
use super::severity::Severity;
use super::sink::Sink;
use std::fmt;

/// A named logging endpoint, intended to be instantiated once per subsystem.
///
/// `CEILING` is the highest severity code this channel can ever emit, fixed
/// at the type level so that call sites above it compile down to nothing.
/// The runtime threshold starts at the ceiling and can be lowered (or raised
/// back) at any time to mute a subsystem without recompiling.
///
/// A record is emitted only when `level <= ceiling && level <= threshold`;
/// filtered-out calls perform no formatting work at all.
///
/// Channels hold no locks. A channel shared across threads must be
/// serialized by the caller, e.g. behind one mutex per channel.
///
/// # Example
///
/// ```
/// use chanlog::{Channel, Severity, severity::code};
///
/// let mut net = Channel::<{ code::INFO }>::builder("NET").build();
/// net.info(format_args!("listener bound to port {}", 8080)).unwrap();
/// net.set_threshold(Severity::Warning);
/// net.info(format_args!("now suppressed")).unwrap();
/// ```
pub struct Channel<const CEILING: u8> {
    name: String,
    threshold: Severity,
    sinks: SinkSet,
    finalized: bool,
}

impl<const CEILING: u8> Channel<CEILING> {
    /// Create a builder for a channel named `name`.
    pub fn builder(name: impl Into<String>) -> ChannelBuilder<CEILING> {
        ChannelBuilder::new(name)
    }

    /// The build-time ceiling of this channel type.
    pub const fn ceiling() -> Severity {
        match Severity::from_code(CEILING) {
            Some(level) => level,
            None => panic!("channel ceiling is not a valid severity code"),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current runtime threshold.
    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Adjust the runtime threshold. Calls above the new threshold stop
    /// emitting immediately; the build ceiling still applies on top.
    pub fn set_threshold(&mut self, level: Severity) {
        self.threshold = level;
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Log a message at an arbitrary severity.
    ///
    /// Filtering happens before any formatting: calls above the ceiling
    /// fold away at build time when `level` is a constant, and calls above
    /// the runtime threshold return without touching the arguments.
    pub fn log_at_level(&mut self, level: Severity, args: fmt::Arguments<'_>) -> Result<()> {
        if level.code() > CEILING || level == Severity::None {
            return Ok(());
        }
        if level > self.threshold {
            return Ok(());
        }
        debug_assert!(
            !self.finalized,
            "channel '{}' logged after finalize",
            self.name
        );
        if self.finalized {
            return Err(LogError::ChannelFinalized(self.name.clone()));
        }

        let message = record::render_message(args);
        let line = record::assemble(&self.name, level, &message);
        self.sinks.write_all(line.as_bytes())
    }

    #[inline]
    pub fn critical(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log_at_level(Severity::Critical, args)
    }

    #[inline]
    pub fn error(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log_at_level(Severity::Error, args)
    }

    #[inline]
    pub fn warning(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log_at_level(Severity::Warning, args)
    }

    #[inline]
    pub fn print(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log_at_level(Severity::Print, args)
    }

    #[inline]
    pub fn fuss(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log_at_level(Severity::Fuss, args)
    }

    #[inline]
    pub fn info(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log_at_level(Severity::Info, args)
    }

    #[inline]
    pub fn detail(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log_at_level(Severity::Detail, args)
    }

    #[inline]
    pub fn debug(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log_at_level(Severity::Debug, args)
    }

    #[inline]
    pub fn debug2(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log_at_level(Severity::Debug2, args)
    }

    /// Release every sink's resource, in declaration order.
    ///
    /// The channel accepts no further logging calls afterwards; finalizing
    /// twice is a caller bug (asserts in debug builds, errors in release).
    pub fn finalize(&mut self) -> Result<()> {
        debug_assert!(
            !self.finalized,
            "channel '{}' finalized twice",
            self.name
        );
        if self.finalized {
            return Err(LogError::ChannelFinalized(self.name.clone()));
        }
        self.finalized = true;
        self.sinks.finalize_all()
    }
}

/// Builder for [`Channel`].
///
/// The threshold defaults to the build ceiling, so a freshly built channel
/// emits everything its type allows.
///
/// # Example
///
/// ```no_run
/// use chanlog::{Channel, FileSink, severity::code};
///
/// # fn main() -> chanlog::Result<()> {
/// let net = Channel::<{ code::DETAIL }>::builder("NET")
///     .sink(FileSink::create("/var/log/net.log")?)
///     .sink(FileSink::stderr())
///     .build();
/// # let _ = net;
/// # Ok(())
/// # }
/// ```
pub struct ChannelBuilder<const CEILING: u8> {
    name: String,
    threshold: Severity,
    sinks: SinkSet,
}

impl<const CEILING: u8> ChannelBuilder<CEILING> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            threshold: Channel::<CEILING>::ceiling(),
            sinks: SinkSet::new(),
        }
    }

    /// Set the initial runtime threshold.
    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, level: Severity) -> Self {
        self.threshold = level;
        self
    }

    /// Append a sink; fan-out follows the order sinks were added.
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Append an already-boxed sink.
    #[must_use = "builder methods return a new value"]
    pub fn boxed_sink(mut self, sink: Box<dyn Sink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn build(self) -> Channel<CEILING> {
        Channel {
            name: self.name,
            threshold: self.threshold,
            sinks: self.sinks,
            finalized: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::severity::code;
    use std::sync::{Arc, Mutex};

    struct MemorySink {
        records: Arc<Mutex<Vec<String>>>,
    }

    impl MemorySink {
        fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
            let records = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    records: Arc::clone(&records),
                },
                records,
            )
        }
    }

    impl Sink for MemorySink {
        fn write(&mut self, record: &[u8]) -> Result<()> {
            let line = String::from_utf8(record.to_vec()).expect("records are UTF-8");
            self.records.lock().unwrap().push(line);
            Ok(())
        }

        fn name(&self) -> &str {
            "memory"
        }
    }

    #[test]
    fn test_ceiling_constant() {
        assert_eq!(Channel::<{ code::INFO }>::ceiling(), Severity::Info);
        assert_eq!(Channel::<{ code::NONE }>::ceiling(), Severity::None);
        assert_eq!(Channel::<{ code::DEBUG2 }>::ceiling(), Severity::Debug2);
    }

    #[test]
    fn test_threshold_defaults_to_ceiling() {
        let chan = Channel::<{ code::DETAIL }>::builder("APP").build();
        assert_eq!(chan.threshold(), Severity::Detail);
        assert_eq!(chan.name(), "APP");
        assert_eq!(chan.sink_count(), 0);
    }

    #[test]
    fn test_over_ceiling_never_emits() {
        let (sink, records) = MemorySink::new();
        let mut chan = Channel::<{ code::WARNING }>::builder("APP")
            .threshold(Severity::Debug2)
            .sink(sink)
            .build();

        chan.debug(format_args!("unreachable")).unwrap();
        chan.info(format_args!("unreachable")).unwrap();
        assert!(records.lock().unwrap().is_empty());

        chan.warning(format_args!("reachable")).unwrap();
        assert_eq!(records.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_threshold_mutes_within_ceiling() {
        let (sink, records) = MemorySink::new();
        let mut chan = Channel::<{ code::DETAIL }>::builder("APP").sink(sink).build();

        chan.info(format_args!("emitted")).unwrap();
        chan.set_threshold(Severity::Warning);
        chan.info(format_args!("muted")).unwrap();
        chan.warning(format_args!("emitted")).unwrap();

        let records = records.lock().unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].ends_with("emitted"));
        assert!(records[1].ends_with("emitted"));
    }

    #[test]
    fn test_none_level_never_emits() {
        let (sink, records) = MemorySink::new();
        let mut chan = Channel::<{ code::DEBUG2 }>::builder("APP").sink(sink).build();

        chan.log_at_level(Severity::None, format_args!("never")).unwrap();
        assert!(records.lock().unwrap().is_empty());
    }

    #[test]
    fn test_record_embeds_name_and_code() {
        let (sink, records) = MemorySink::new();
        let mut chan = Channel::<{ code::INFO }>::builder("NET")
            .boxed_sink(Box::new(sink))
            .build();

        chan.error(format_args!("x={}", 5)).unwrap();

        let records = records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].contains("[NET-2] x=5"));
    }

    #[test]
    fn test_finalized_channel_rejects_logging() {
        let (sink, _records) = MemorySink::new();
        let mut chan = Channel::<{ code::INFO }>::builder("APP").sink(sink).build();
        chan.finalize().unwrap();

        // Filtered-out calls stay no-ops even after finalize.
        chan.debug2(format_args!("over ceiling")).unwrap();

        if cfg!(debug_assertions) {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                let _ = chan.info(format_args!("too late"));
            }));
            assert!(result.is_err(), "debug builds assert on use after finalize");
        } else {
            assert!(matches!(
                chan.info(format_args!("too late")),
                Err(LogError::ChannelFinalized(_))
            ));
        }
    }
}
