//! Client handle: lifecycle and the concurrency gate
//!
//! A [`Client`] binds one set of envelope defaults to one [`PubSocket`]. A
//! single mutex serializes the closed-check, envelope build, serialization,
//! and socket send, so concurrent `log()` calls never interleave frames on
//! the shared socket.

use super::envelope::{build_envelope, LogOptions, Payload};
use super::error::{ClientError, Result};
use super::level::LevelSpec;
use super::socket::{PubSocket, SocketMode, DEFAULT_SEND_HWM};
use crate::proto::LogLevel;
use parking_lot::Mutex;
use prost::Message;

/// Immutable per-client defaults, fixed at build time.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub service: String,
    pub default_topic: String,
    pub host: String,
    pub pid: i32,
    pub mode: SocketMode,
    pub send_hwm: i32,
}

struct Inner {
    socket: PubSocket,
    closed: bool,
}

/// One logical log producer owning one outbound PUB socket.
///
/// # Example
///
/// ```no_run
/// use protolog_client::prelude::*;
///
/// let client = Client::builder("tcp://127.0.0.1:5556", "my-service")
///     .topic("demo")
///     .build()
///     .expect("failed to open publish socket");
///
/// client.log("INFO", Payload::Empty, LogOptions::new().summary("hello"))?;
/// client.close();
/// # Ok::<(), protolog_client::ClientError>(())
/// ```
pub struct Client {
    config: ClientConfig,
    inner: Mutex<Inner>,
}

impl Client {
    /// Start building a client for `endpoint`, logging as `service`.
    pub fn builder(endpoint: impl Into<String>, service: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(endpoint, service)
    }

    /// Build one envelope and publish it as a single frame.
    ///
    /// Runs entirely under the client lock: the closed-check, envelope
    /// construction, serialization, and send form one atomic unit. Delivery
    /// is fire-and-forget; a frame dropped by the transport under
    /// backpressure is not an error.
    ///
    /// # Errors
    ///
    /// [`ClientError::ClientClosed`] after [`close`](Self::close),
    /// [`ClientError::InvalidLevel`] for an unrecognized level string,
    /// [`ClientError::MissingTypeName`] for raw bytes without a type name,
    /// [`ClientError::Transport`] when the socket send itself fails.
    pub fn log(
        &self,
        level: impl Into<LevelSpec>,
        payload: impl Into<Payload>,
        options: LogOptions,
    ) -> Result<()> {
        let inner = self.inner.lock();
        if inner.closed {
            return Err(ClientError::ClientClosed);
        }

        let envelope = build_envelope(&self.config, level.into(), payload.into(), options)?;
        let frame = envelope.encode_to_vec();
        inner.socket.send(&frame)
    }

    /// Log a payload-free record at DEBUG with the given summary.
    pub fn debug(&self, summary: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Debug, Payload::Empty, LogOptions::new().summary(summary))
    }

    /// Log a payload-free record at INFO with the given summary.
    pub fn info(&self, summary: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Info, Payload::Empty, LogOptions::new().summary(summary))
    }

    /// Log a payload-free record at WARN with the given summary.
    pub fn warn(&self, summary: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Warn, Payload::Empty, LogOptions::new().summary(summary))
    }

    /// Log a payload-free record at ERROR with the given summary.
    pub fn error(&self, summary: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Error, Payload::Empty, LogOptions::new().summary(summary))
    }

    /// Mark the client closed and release the socket.
    ///
    /// One-way and idempotent: a second call (including a concurrent one) is
    /// a no-op. Every `log()` after this fails with `ClientClosed`.
    pub fn close(&self) {
        let mut inner = self.inner.lock();
        if inner.closed {
            return;
        }
        inner.closed = true;
        inner.socket.close();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.lock().closed
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Drop for Client {
    fn drop(&mut self) {
        self.close();
    }
}

/// Builder for [`Client`] with a fluent API
///
/// # Example
///
/// ```no_run
/// use protolog_client::prelude::*;
///
/// let client = Client::builder("tcp://127.0.0.1:5556", "ingest")
///     .topic("audit")
///     .host("node-a.internal")
///     .bind(true)
///     .send_hwm(500)
///     .build()
///     .unwrap();
/// ```
pub struct ClientBuilder {
    endpoint: String,
    service: String,
    default_topic: String,
    host: Option<String>,
    pid: Option<i32>,
    bind: bool,
    send_hwm: i32,
}

impl ClientBuilder {
    pub fn new(endpoint: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            service: service.into(),
            default_topic: "demo".to_string(),
            host: None,
            pid: None,
            bind: false,
            send_hwm: DEFAULT_SEND_HWM,
        }
    }

    /// Default routing topic (default: "demo")
    #[must_use = "builder methods return a new value"]
    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.default_topic = topic.into();
        self
    }

    /// Default host field (default: the local hostname)
    #[must_use = "builder methods return a new value"]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Process id recorded in each envelope (default: the current pid)
    #[must_use = "builder methods return a new value"]
    pub fn pid(mut self, pid: i32) -> Self {
        self.pid = Some(pid);
        self
    }

    /// Bind the endpoint instead of connecting to it (default: connect)
    #[must_use = "builder methods return a new value"]
    pub fn bind(mut self, bind: bool) -> Self {
        self.bind = bind;
        self
    }

    /// Outbound queue bound (default: [`DEFAULT_SEND_HWM`])
    #[must_use = "builder methods return a new value"]
    pub fn send_hwm(mut self, send_hwm: i32) -> Self {
        self.send_hwm = send_hwm;
        self
    }

    /// Open the socket and return the finished client.
    pub fn build(self) -> Result<Client> {
        let host = match self.host {
            Some(host) => host,
            None => local_hostname()?,
        };
        let pid = self.pid.unwrap_or_else(|| std::process::id() as i32);
        let mode = if self.bind {
            SocketMode::Bind
        } else {
            SocketMode::Connect
        };

        let config = ClientConfig {
            endpoint: self.endpoint,
            service: self.service,
            default_topic: self.default_topic,
            host,
            pid,
            mode,
            send_hwm: self.send_hwm,
        };

        let socket = PubSocket::open(&config.endpoint, config.mode, config.send_hwm)?;
        Ok(Client {
            config,
            inner: Mutex::new(Inner {
                socket,
                closed: false,
            }),
        })
    }
}

fn local_hostname() -> Result<String> {
    let name = hostname::get()?;
    Ok(name.to_string_lossy().into_owned())
}
