//! Outbound ZeroMQ PUB socket
//!
//! One socket per client, opened once in either bind or connect mode and
//! released exactly once. Delivery is fire-and-forget: past the send
//! high-water mark, ZeroMQ drops messages for slow or absent subscribers.
//! This client never buffers or retries on top of that.

use super::error::{ClientError, Result};

/// Default bound on the outbound queue depth (ZMQ `SNDHWM`).
///
/// Keeps memory bounded when no subscriber is draining; matches the
/// collector deployment default.
pub const DEFAULT_SEND_HWM: i32 = 1000;

/// Which side of the endpoint this publisher owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketMode {
    /// The producer owns the endpoint; subscribers connect to it
    Bind,
    /// An already-bound collector owns the endpoint
    Connect,
}

/// Wrapper around one ZMQ PUB socket. Mode is fixed at open time.
pub struct PubSocket {
    socket: Option<zmq::Socket>,
    endpoint: String,
    mode: SocketMode,
}

impl PubSocket {
    /// Create the socket, apply the send high-water mark and zero linger,
    /// then bind or connect according to `mode`.
    pub fn open(endpoint: &str, mode: SocketMode, send_hwm: i32) -> Result<Self> {
        let context = zmq::Context::new();
        let socket = context.socket(zmq::PUB)?;
        socket.set_sndhwm(send_hwm)?;
        // Drop unsent frames immediately on close instead of lingering.
        socket.set_linger(0)?;

        match mode {
            SocketMode::Bind => socket.bind(endpoint)?,
            SocketMode::Connect => socket.connect(endpoint)?,
        }

        Ok(Self {
            socket: Some(socket),
            endpoint: endpoint.to_string(),
            mode,
        })
    }

    /// Transmit one single-part frame.
    ///
    /// There is no topic sub-frame; the routing topic travels inside the
    /// serialized record. Best-effort: a full outbound queue means the
    /// transport drops the frame, not an error here.
    pub fn send(&self, frame: &[u8]) -> Result<()> {
        let socket = self.socket.as_ref().ok_or(ClientError::SocketClosed)?;
        socket.send(frame, 0)?;
        Ok(())
    }

    /// Release the socket. Idempotent; a second call is a no-op.
    pub fn close(&mut self) {
        self.socket = None;
    }

    pub fn is_open(&self) -> bool {
        self.socket.is_some()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn mode(&self) -> SocketMode {
        self.mode
    }
}
