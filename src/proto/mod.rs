//! Wire-schema types for the log envelope contract
//!
//! These types mirror `logging/log_envelope.proto`, the schema shared with the
//! log collector. Field numbers and the numeric severity values are a wire
//! contract and must never be changed.

use std::fmt;
use std::str::FromStr;

/// Canonical severity code carried in [`LogEnvelope::level`].
///
/// The numeric values are shared with the collector; renumbering them would
/// silently corrupt every stored record's severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl LogLevel {
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

/// One structured log record, transmitted as a single transport frame.
///
/// The routing `topic` lives inside the record; the transport layer carries no
/// topic sub-frame. A non-empty `payload` always travels with a non-empty
/// `r#type` naming its schema (enforced by the envelope builder).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogEnvelope {
    /// Routing key matched by subscribers.
    #[prost(string, tag = "1")]
    pub topic: ::prost::alloc::string::String,
    /// Wall-clock capture time at envelope construction.
    #[prost(message, optional, tag = "2")]
    pub timestamp: ::core::option::Option<::prost_types::Timestamp>,
    /// Severity code; see [`LogLevel`]. Out-of-range values are forwarded
    /// untouched, the collector decides what to do with them.
    #[prost(enumeration = "LogLevel", tag = "3")]
    pub level: i32,
    /// Originating hostname.
    #[prost(string, tag = "4")]
    pub host: ::prost::alloc::string::String,
    /// Originating service name.
    #[prost(string, tag = "5")]
    pub service: ::prost::alloc::string::String,
    /// Originating process id.
    #[prost(int32, tag = "6")]
    pub pid: i32,
    /// Fully-qualified schema name of `payload`; empty when no payload.
    #[prost(string, tag = "7")]
    pub r#type: ::prost::alloc::string::String,
    /// Opaque serialized payload bytes; empty when the call carried none.
    #[prost(bytes = "vec", tag = "8")]
    pub payload: ::prost::alloc::vec::Vec<u8>,
    /// Free-text human-readable description.
    #[prost(string, tag = "9")]
    pub summary: ::prost::alloc::string::String,
}

impl ::prost::Name for LogEnvelope {
    const NAME: &'static str = "LogEnvelope";
    const PACKAGE: &'static str = "protolog.logging";

    fn full_name() -> ::prost::alloc::string::String {
        "protolog.logging.LogEnvelope".into()
    }

    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/protolog.logging.LogEnvelope".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_level_values_are_wire_contract() {
        assert_eq!(LogLevel::Debug as i32, 0);
        assert_eq!(LogLevel::Info as i32, 1);
        assert_eq!(LogLevel::Warn as i32, 2);
        assert_eq!(LogLevel::Error as i32, 3);
    }

    #[test]
    fn test_level_parse_accepts_warning_alias() {
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("FATAL".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_level_display_matches_to_str() {
        assert_eq!(format!("{}", LogLevel::Error), "ERROR");
        assert_eq!(LogLevel::Info.to_str(), "INFO");
    }

    #[test]
    fn test_envelope_encoding_roundtrip() {
        let env = LogEnvelope {
            topic: "demo".to_string(),
            timestamp: Some(prost_types::Timestamp {
                seconds: 1_700_000_000,
                nanos: 42,
            }),
            level: LogLevel::Warn as i32,
            host: "node-a".to_string(),
            service: "svc".to_string(),
            pid: 1234,
            r#type: "demo.Message".to_string(),
            payload: vec![1, 2, 3],
            summary: "something happened".to_string(),
        };

        let bytes = env.encode_to_vec();
        let decoded = LogEnvelope::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded, env);
    }

    #[test]
    fn test_envelope_full_name() {
        use prost::Name;
        assert_eq!(LogEnvelope::full_name(), "protolog.logging.LogEnvelope");
    }
}
