//! Logging macros for ergonomic message formatting.
//!
//! Each macro expands to a `format_args!` call handed to the channel, so a
//! filtered-out call never renders its arguments. Every macro returns the
//! channel's `Result`; a sink failure surfaces at the call site.
//!
//! # Examples
//!
//! ```
//! use chanlog::{info, warning, Channel, severity::code};
//!
//! let mut net = Channel::<{ code::INFO }>::builder("NET").build();
//!
//! info!(net, "listener bound to port {}", 8080).unwrap();
//! warning!(net, "retry {} of {}", 2, 5).unwrap();
//! ```

/// Log at an arbitrary severity with automatic formatting.
///
/// # Examples
///
/// ```
/// # use chanlog::{Channel, Severity, severity::code};
/// # let mut chan = Channel::<{ code::DEBUG2 }>::builder("APP").build();
/// chanlog::log_at!(chan, Severity::Info, "simple message").unwrap();
/// chanlog::log_at!(chan, Severity::Error, "error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log_at {
    ($channel:expr, $level:expr, $($arg:tt)+) => {
        $channel.log_at_level($level, format_args!($($arg)+))
    };
}

/// Log a critical-severity message.
///
/// ```
/// # use chanlog::{Channel, severity::code};
/// # let mut chan = Channel::<{ code::DEBUG2 }>::builder("APP").build();
/// chanlog::critical!(chan, "state jeopardized: {}", "disk full").unwrap();
/// ```
#[macro_export]
macro_rules! critical {
    ($channel:expr, $($arg:tt)+) => {
        $crate::log_at!($channel, $crate::Severity::Critical, $($arg)+)
    };
}

/// Log an error-severity message.
///
/// ```
/// # use chanlog::{Channel, severity::code};
/// # let mut chan = Channel::<{ code::DEBUG2 }>::builder("APP").build();
/// chanlog::error!(chan, "x={}", 5).unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($channel:expr, $($arg:tt)+) => {
        $crate::log_at!($channel, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a warning-severity message.
///
/// ```
/// # use chanlog::{Channel, severity::code};
/// # let mut chan = Channel::<{ code::DEBUG2 }>::builder("APP").build();
/// chanlog::warning!(chan, "retry {} of {}", 3, 5).unwrap();
/// ```
#[macro_export]
macro_rules! warning {
    ($channel:expr, $($arg:tt)+) => {
        $crate::log_at!($channel, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log a print-severity status message.
///
/// Shadows the std `print!` macro when imported; invoke it path-qualified
/// (`chanlog::print!`) where that matters.
///
/// ```
/// # use chanlog::{Channel, severity::code};
/// # let mut chan = Channel::<{ code::DEBUG2 }>::builder("APP").build();
/// chanlog::print!(chan, "loaded {} rules", 12).unwrap();
/// ```
#[macro_export]
macro_rules! print {
    ($channel:expr, $($arg:tt)+) => {
        $crate::log_at!($channel, $crate::Severity::Print, $($arg)+)
    };
}

/// Log a fuss-severity message: valid but suspicious conditions.
///
/// ```
/// # use chanlog::{Channel, severity::code};
/// # let mut chan = Channel::<{ code::DEBUG2 }>::builder("APP").build();
/// chanlog::fuss!(chan, "config key '{}' is deprecated", "timeout_ms").unwrap();
/// ```
#[macro_export]
macro_rules! fuss {
    ($channel:expr, $($arg:tt)+) => {
        $crate::log_at!($channel, $crate::Severity::Fuss, $($arg)+)
    };
}

/// Log an info-severity message.
///
/// ```
/// # use chanlog::{Channel, severity::code};
/// # let mut chan = Channel::<{ code::DEBUG2 }>::builder("APP").build();
/// chanlog::info!(chan, "processing {} items", 100).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($channel:expr, $($arg:tt)+) => {
        $crate::log_at!($channel, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a detail-severity message: voluminous in proportion to input.
///
/// ```
/// # use chanlog::{Channel, severity::code};
/// # let mut chan = Channel::<{ code::DEBUG2 }>::builder("APP").build();
/// chanlog::detail!(chan, "row {} parsed", 48213).unwrap();
/// ```
#[macro_export]
macro_rules! detail {
    ($channel:expr, $($arg:tt)+) => {
        $crate::log_at!($channel, $crate::Severity::Detail, $($arg)+)
    };
}

/// Log a debug-severity message.
///
/// ```
/// # use chanlog::{Channel, severity::code};
/// # let mut chan = Channel::<{ code::DEBUG2 }>::builder("APP").build();
/// chanlog::debug!(chan, "counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($channel:expr, $($arg:tt)+) => {
        $crate::log_at!($channel, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log a debug2-severity message: the firehose.
///
/// ```
/// # use chanlog::{Channel, severity::code};
/// # let mut chan = Channel::<{ code::DEBUG2 }>::builder("APP").build();
/// chanlog::debug2!(chan, "byte {:#04x} consumed", 0x7f).unwrap();
/// ```
#[macro_export]
macro_rules! debug2 {
    ($channel:expr, $($arg:tt)+) => {
        $crate::log_at!($channel, $crate::Severity::Debug2, $($arg)+)
    };
}
