//! # chanlog
//!
//! Per-subsystem logging channels with build-time severity ceilings,
//! runtime thresholds, and fan-out sinks.
//!
//! Each subsystem owns a named [`Channel`] whose maximum verbosity is part
//! of its type, so call sites above the ceiling compile down to nothing.
//! Within the ceiling, a runtime threshold can mute or un-mute the channel
//! without recompiling. Emitted records carry a monotonic timestamp, the
//! channel name, and the numeric severity, and are fanned out to every
//! configured sink in order.
//!
//! ## Quick start
//!
//! ```no_run
//! use chanlog::{info, Channel, FileSink, Severity, severity::code};
//!
//! fn main() -> chanlog::Result<()> {
//!     let mut net = Channel::<{ code::INFO }>::builder("NET")
//!         .sink(FileSink::create("net.log")?)
//!         .sink(FileSink::stderr())
//!         .build();
//!
//!     info!(net, "listener bound to port {}", 8080)?;
//!
//!     // Mute everything below warnings at runtime.
//!     net.set_threshold(Severity::Warning);
//!
//!     net.finalize()
//! }
//! ```
//!
//! ## What this crate does not do
//!
//! Channels are passive and synchronous: no background threads, no queues,
//! no internal locking. A channel shared across threads must be serialized
//! by the caller.

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Channel, ChannelBuilder, LogError, Result, Severity, Sink, SinkSet, MAX_MESSAGE_LEN,
    };
    pub use crate::sinks::FileSink;
}

pub use crate::core::severity;
pub use crate::core::{
    Channel, ChannelBuilder, LogError, Result, Severity, Sink, SinkSet, MAX_MESSAGE_LEN,
};
pub use crate::sinks::FileSink;
