//! Log envelope construction
//!
//! Builds one fully-populated [`LogEnvelope`] per `log()` call from the
//! client defaults, the per-call overrides, and the payload. Pure apart from
//! reading the clock at build time.

use super::client::ClientConfig;
use super::error::{ClientError, Result};
use super::level::LevelSpec;
use crate::proto::LogEnvelope;
use chrono::Utc;
use prost::{Message, Name};

/// The payload of one log call, resolved by the caller at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Payload {
    /// A typed schema object, pre-encoded with its fully-qualified name
    Message { type_name: String, bytes: Vec<u8> },
    /// Opaque bytes; the call must supply `type_name` in its options
    Raw(Vec<u8>),
    /// No payload
    #[default]
    Empty,
}

impl Payload {
    /// Encode a protobuf message and capture its fully-qualified schema name.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let msg = demo::Message { text: "Hello".into(), count: 42 };
    /// client.log("INFO", Payload::from_message(&msg), LogOptions::new())?;
    /// ```
    pub fn from_message<M: Message + Name>(message: &M) -> Self {
        Payload::Message {
            type_name: M::full_name(),
            bytes: message.encode_to_vec(),
        }
    }

    /// Wrap already-serialized bytes. The log call must name their schema
    /// via [`LogOptions::type_name`] or it fails with `MissingTypeName`.
    pub fn raw(bytes: impl Into<Vec<u8>>) -> Self {
        Payload::Raw(bytes.into())
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Payload::Raw(bytes)
    }
}

impl From<&[u8]> for Payload {
    fn from(bytes: &[u8]) -> Self {
        Payload::Raw(bytes.to_vec())
    }
}

/// Per-call overrides for a single `log()` invocation.
///
/// Each field overrides the corresponding client default for that call only.
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub summary: Option<String>,
    pub topic: Option<String>,
    pub type_name: Option<String>,
    pub host: Option<String>,
    pub service: Option<String>,
}

impl LogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Human-readable description (default: empty)
    #[must_use = "builder methods return a new value"]
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Routing topic for this call only
    #[must_use = "builder methods return a new value"]
    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    /// Fully-qualified schema name of the payload; required for raw bytes
    #[must_use = "builder methods return a new value"]
    pub fn type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Originating host for this call only
    #[must_use = "builder methods return a new value"]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Originating service for this call only
    #[must_use = "builder methods return a new value"]
    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }
}

/// Build one envelope from client defaults, per-call overrides, and payload.
///
/// The timestamp is captured here, at build time, not at send time. Raw-byte
/// payloads without a `type_name` override fail with
/// [`ClientError::MissingTypeName`]; an unresolvable level propagates as
/// [`ClientError::InvalidLevel`] and nothing is sent.
pub fn build_envelope(
    config: &ClientConfig,
    level: LevelSpec,
    payload: Payload,
    options: LogOptions,
) -> Result<LogEnvelope> {
    let level = level.resolve()?;
    let now = Utc::now();

    let mut envelope = LogEnvelope {
        topic: options
            .topic
            .unwrap_or_else(|| config.default_topic.clone()),
        timestamp: Some(prost_types::Timestamp {
            seconds: now.timestamp(),
            nanos: now.timestamp_subsec_nanos() as i32,
        }),
        level,
        host: options.host.unwrap_or_else(|| config.host.clone()),
        service: options.service.unwrap_or_else(|| config.service.clone()),
        pid: config.pid,
        summary: options.summary.unwrap_or_default(),
        ..Default::default()
    };

    match payload {
        Payload::Message { type_name, bytes } => {
            envelope.r#type = options.type_name.unwrap_or(type_name);
            envelope.payload = bytes;
        }
        Payload::Raw(bytes) => {
            envelope.r#type = options.type_name.ok_or(ClientError::MissingTypeName)?;
            envelope.payload = bytes;
        }
        Payload::Empty => {
            // A type name with no payload is legal; payload stays empty.
            if let Some(type_name) = options.type_name {
                envelope.r#type = type_name;
            }
        }
    }

    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::socket::{SocketMode, DEFAULT_SEND_HWM};
    use crate::proto::LogLevel;

    fn test_config() -> ClientConfig {
        ClientConfig {
            endpoint: "tcp://127.0.0.1:5556".to_string(),
            service: "svc-a".to_string(),
            default_topic: "demo".to_string(),
            host: "test-host".to_string(),
            pid: 4242,
            mode: SocketMode::Connect,
            send_hwm: DEFAULT_SEND_HWM,
        }
    }

    #[test]
    fn test_defaults_fill_the_envelope() {
        let env = build_envelope(
            &test_config(),
            "INFO".into(),
            Payload::Empty,
            LogOptions::new().summary("hello"),
        )
        .unwrap();

        assert_eq!(env.level, LogLevel::Info as i32);
        assert_eq!(env.topic, "demo");
        assert_eq!(env.host, "test-host");
        assert_eq!(env.service, "svc-a");
        assert_eq!(env.pid, 4242);
        assert_eq!(env.summary, "hello");
        assert_eq!(env.r#type, "");
        assert!(env.payload.is_empty());
        assert!(env.timestamp.is_some());
    }

    #[test]
    fn test_overrides_win_for_one_call() {
        let env = build_envelope(
            &test_config(),
            LogLevel::Warn.into(),
            Payload::Empty,
            LogOptions::new()
                .topic("alerts")
                .host("node-b")
                .service("svc-b"),
        )
        .unwrap();

        assert_eq!(env.topic, "alerts");
        assert_eq!(env.host, "node-b");
        assert_eq!(env.service, "svc-b");
    }

    #[test]
    fn test_raw_payload_requires_type_name() {
        let err = build_envelope(
            &test_config(),
            "INFO".into(),
            Payload::raw(vec![1, 2, 3]),
            LogOptions::new(),
        )
        .unwrap_err();
        assert!(matches!(err, ClientError::MissingTypeName));

        let env = build_envelope(
            &test_config(),
            "INFO".into(),
            Payload::raw(vec![1, 2, 3]),
            LogOptions::new().type_name("demo.Blob"),
        )
        .unwrap();
        assert_eq!(env.r#type, "demo.Blob");
        assert_eq!(env.payload, vec![1, 2, 3]);
    }

    #[test]
    fn test_typed_payload_infers_full_name() {
        let inner = LogEnvelope {
            summary: "inner".to_string(),
            ..Default::default()
        };

        let env = build_envelope(
            &test_config(),
            "DEBUG".into(),
            Payload::from_message(&inner),
            LogOptions::new(),
        )
        .unwrap();

        assert_eq!(env.r#type, "protolog.logging.LogEnvelope");
        let decoded = LogEnvelope::decode(env.payload.as_slice()).unwrap();
        assert_eq!(decoded, inner);
    }

    #[test]
    fn test_type_name_override_beats_inference() {
        let inner = LogEnvelope::default();
        let env = build_envelope(
            &test_config(),
            "DEBUG".into(),
            Payload::from_message(&inner),
            LogOptions::new().type_name("custom.Alias"),
        )
        .unwrap();
        assert_eq!(env.r#type, "custom.Alias");
    }

    #[test]
    fn test_type_name_without_payload_is_legal() {
        let env = build_envelope(
            &test_config(),
            "INFO".into(),
            Payload::Empty,
            LogOptions::new().type_name("demo.Marker"),
        )
        .unwrap();
        assert_eq!(env.r#type, "demo.Marker");
        assert!(env.payload.is_empty());
    }

    #[test]
    fn test_invalid_level_propagates() {
        let err = build_envelope(
            &test_config(),
            "VERBOSE".into(),
            Payload::Empty,
            LogOptions::new(),
        )
        .unwrap_err();
        assert!(matches!(err, ClientError::InvalidLevel { .. }));
    }

    #[test]
    fn test_nonempty_payload_implies_nonempty_type() {
        let env = build_envelope(
            &test_config(),
            "ERROR".into(),
            Payload::raw(b"blob".to_vec()),
            LogOptions::new().type_name("demo.Blob"),
        )
        .unwrap();
        assert!(!env.payload.is_empty());
        assert!(!env.r#type.is_empty());
    }
}
