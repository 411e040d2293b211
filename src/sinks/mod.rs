//! Sink implementations

pub mod file;

pub use file::FileSink;

// Re-export the trait next to its implementations.
pub use crate::core::Sink;
