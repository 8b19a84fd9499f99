//! Core client types

pub mod client;
pub mod envelope;
pub mod error;
pub mod global;
pub mod level;
pub mod socket;

pub use client::{Client, ClientBuilder, ClientConfig};
pub use envelope::{build_envelope, LogOptions, Payload};
pub use error::{ClientError, Result};
pub use level::LevelSpec;
pub use socket::{PubSocket, SocketMode, DEFAULT_SEND_HWM};
