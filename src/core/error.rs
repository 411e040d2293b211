//! Error types for the logging core

pub type Result<T> = std::result::Result<T, LogError>;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// IO error with operation context
    #[error("IO error while {operation} '{path}': {source}")]
    Io {
        operation: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Sink used after its resource was released
    #[error("sink '{0}' used after finalize")]
    SinkFinalized(String),

    /// Channel used after finalize
    #[error("channel '{0}' used after finalize")]
    ChannelFinalized(String),
}

impl LogError {
    /// Create an IO error with operation context
    pub fn io(
        operation: impl Into<String>,
        path: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LogError::Io {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }
}
