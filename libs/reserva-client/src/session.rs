use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// Slot holding the bearer credential.
const CREDENTIAL_SLOT: &str = "credential";
/// Slot holding the cached identity payload.
const IDENTITY_SLOT: &str = "identity";

/// Keyed string storage backing a session.
///
/// Implementations wrap whatever the host platform provides for persistence
/// (browser storage, a keychain, a plain file). The gateway only ever touches
/// the credential and identity slots.
pub trait SessionStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove the value stored under `key`. Removing an absent key is a
    /// no-op.
    fn remove(&self, key: &str);
}

/// Handle to the session state shared by the gateway and the host.
///
/// The host writes the credential at login; the gateway reads it before
/// every request and clears the whole session when the server reports an
/// expired credential. Cloning is cheap and every clone observes the same
/// underlying store.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
}

impl SessionContext {
    /// Wrap a host-provided store.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Context backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionStore::default()))
    }

    /// Current bearer credential, if a session is active.
    pub fn credential(&self) -> Option<String> {
        self.store.get(CREDENTIAL_SLOT)
    }

    /// Store the bearer credential obtained at login.
    pub fn set_credential(&self, credential: &str) {
        self.store.set(CREDENTIAL_SLOT, credential);
    }

    /// Cached identity payload, if any.
    pub fn identity(&self) -> Option<String> {
        self.store.get(IDENTITY_SLOT)
    }

    /// Cache the identity payload alongside the credential.
    pub fn set_identity(&self, identity: &str) {
        self.store.set(IDENTITY_SLOT, identity);
    }

    /// Tear the session down: credential and identity are both removed.
    pub fn clear(&self) {
        self.store.remove(CREDENTIAL_SLOT);
        self.store.remove(IDENTITY_SLOT);
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The credential never reaches logs.
        f.debug_struct("SessionContext")
            .field("credential", &self.credential().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// In-memory [`SessionStore`] for native hosts and tests.
#[derive(Default)]
pub struct MemorySessionStore {
    slots: RwLock<HashMap<String, String>>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.slots.write().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.slots.write().remove(key);
    }
}
