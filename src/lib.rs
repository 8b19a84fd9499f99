//! # Protolog Client
//!
//! Client library for publishing structured, schema-defined log records over
//! a ZeroMQ PUB socket, for consumption by a downstream log collector.
//!
//! ## Features
//!
//! - **Structured Records**: one protobuf [`LogEnvelope`] per call, carrying
//!   topic, timestamp, severity, provenance, and an optional typed payload
//! - **Thread Safe**: concurrent `log()` calls never interleave frames
//! - **Fire-and-Forget**: bounded outbound queue, no buffering or retries;
//!   record loss under backpressure is the transport's documented policy
//! - **Easy to Use**: one builder, one `log()` call
//!
//! ## Quick start
//!
//! ```no_run
//! use protolog_client::prelude::*;
//!
//! let client = Client::builder("tcp://127.0.0.1:5556", "my-service")
//!     .build()
//!     .expect("failed to open publish socket");
//!
//! client.log("INFO", Payload::Empty, LogOptions::new().summary("demo hello"))?;
//! # Ok::<(), protolog_client::ClientError>(())
//! ```

pub mod core;
pub mod proto;

pub use crate::core::global;

pub mod prelude {
    pub use crate::core::{
        build_envelope, Client, ClientBuilder, ClientConfig, ClientError, LevelSpec, LogOptions,
        Payload, PubSocket, Result, SocketMode, DEFAULT_SEND_HWM,
    };
    pub use crate::proto::{LogEnvelope, LogLevel};
}

pub use crate::core::{
    build_envelope, Client, ClientBuilder, ClientConfig, ClientError, LevelSpec, LogOptions,
    Payload, PubSocket, Result, SocketMode, DEFAULT_SEND_HWM,
};
pub use crate::proto::{LogEnvelope, LogLevel};
