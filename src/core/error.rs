//! Error types for the protolog client

pub type Result<T> = std::result::Result<T, ClientError>;

/// Every failure is synchronous and raised at the call site that triggered
/// it; nothing is retried or swallowed internally.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Level string that did not resolve to a known severity
    #[error("Unknown log level string: '{level}'")]
    InvalidLevel { level: String },

    /// Raw-byte payload supplied without a schema type name
    #[error("type_name is required when the payload is raw bytes; otherwise pass a protobuf message")]
    MissingTypeName,

    /// Operation attempted on a closed client; closing is one-way
    #[error("Client is closed")]
    ClientClosed,

    /// Send attempted after the socket was released
    #[error("Publish socket is closed")]
    SocketClosed,

    /// Global convenience accessor used before `global::init`
    #[error("Global client is not initialized")]
    NotInitialized,

    /// Transport-level failure (socket create, bind, connect, or send)
    #[error("Transport error: {0}")]
    Transport(#[from] zmq::Error),

    /// IO error (hostname lookup)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Create an invalid level error from the original caller input
    pub fn invalid_level(level: impl Into<String>) -> Self {
        ClientError::InvalidLevel {
            level: level.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ClientError::invalid_level("VERBOSE");
        assert!(matches!(err, ClientError::InvalidLevel { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = ClientError::invalid_level("VERBOSE");
        assert_eq!(err.to_string(), "Unknown log level string: 'VERBOSE'");

        assert_eq!(ClientError::ClientClosed.to_string(), "Client is closed");
        assert_eq!(
            ClientError::NotInitialized.to_string(),
            "Global client is not initialized"
        );
    }
}
