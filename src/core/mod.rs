//! Core logging types and traits

pub mod channel;
pub mod error;
pub mod fanout;
pub mod record;
pub mod severity;
pub mod sink;

pub use channel::{Channel, ChannelBuilder};
pub use error::{LogError, Result};
pub use fanout::SinkSet;
pub use record::MAX_MESSAGE_LEN;
pub use severity::Severity;
pub use sink::Sink;
