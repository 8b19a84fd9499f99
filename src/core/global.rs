//! Process-wide convenience registry
//!
//! A thin slot holding at most one [`Client`] for call sites that do not want
//! to thread a handle through explicitly. Re-initializing closes the prior
//! instance first, so this path never holds two live sockets at once.

use super::client::{Client, ClientBuilder};
use super::error::{ClientError, Result};
use parking_lot::Mutex;
use std::sync::Arc;

static GLOBAL_CLIENT: Mutex<Option<Arc<Client>>> = Mutex::new(None);

/// Build a client from `builder` and install it as the process-wide one.
///
/// Any previously installed client is closed before the new socket opens, so
/// a bind-mode re-init on the same endpoint does not race its predecessor.
pub fn init(builder: ClientBuilder) -> Result<Arc<Client>> {
    let mut slot = GLOBAL_CLIENT.lock();
    if let Some(previous) = slot.take() {
        previous.close();
    }
    let client = Arc::new(builder.build()?);
    *slot = Some(Arc::clone(&client));
    Ok(client)
}

/// Install an explicitly built handle, returning the previous one un-closed.
///
/// Unlike [`init`], the caller decides the old handle's fate.
pub fn replace(client: Arc<Client>) -> Option<Arc<Client>> {
    GLOBAL_CLIENT.lock().replace(client)
}

/// Fetch the process-wide client.
///
/// # Errors
///
/// [`ClientError::NotInitialized`] when no client has been installed.
pub fn get() -> Result<Arc<Client>> {
    GLOBAL_CLIENT.lock().clone().ok_or(ClientError::NotInitialized)
}

/// Close and clear the process-wide client. No-op when the slot is empty.
pub fn shutdown() {
    if let Some(client) = GLOBAL_CLIENT.lock().take() {
        client.close();
    }
}
