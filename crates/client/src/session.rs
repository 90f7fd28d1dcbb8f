use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use shared_types::{AuthView, ServiceCategory, SessionState, ACCOUNT_KEY, SIGN_OUT_KEY};

/// Synchronous string key/value storage holding the persisted session.
///
/// Reads and writes are unguarded; the last writer wins.
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// In-process storage, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
    }
}

/// `window.localStorage`. A missing or blocked storage behaves as empty.
#[cfg(feature = "web")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(feature = "web")]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage is not available");
        }
        storage
    }
}

#[cfg(feature = "web")]
impl SessionStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            storage_accepted(storage.set_item(key, value), key, "write");
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            storage_accepted(storage.remove_item(key), key, "removal");
        }
    }
}

/// Log a storage call the browser refused. Returns whether it went through.
#[cfg_attr(not(feature = "web"), allow(dead_code))]
fn storage_accepted<E>(result: Result<(), E>, key: &str, action: &'static str) -> bool {
    if result.is_err() {
        tracing::warn!(key, "localStorage {} rejected", action);
        return false;
    }
    true
}

/// The shared cart/session context as seen by the menu.
///
/// In-memory only; the UI implements it over signals.
pub trait CartSession {
    fn signed_out(&self) -> bool;
    fn set_sign_out(&mut self, signed_out: bool);
    fn set_search_by_category(&mut self, category: ServiceCategory);
}

/// Plain-value [`CartSession`] for use outside a UI runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CartSnapshot {
    pub signed_out: bool,
    pub active_category: Option<ServiceCategory>,
}

impl CartSession for CartSnapshot {
    fn signed_out(&self) -> bool {
        self.signed_out
    }

    fn set_sign_out(&mut self, signed_out: bool) {
        self.signed_out = signed_out;
    }

    fn set_search_by_category(&mut self, category: ServiceCategory) {
        self.active_category = Some(category);
    }
}

/// Read both persisted session entries. Unreadable values are logged and
/// treated as absent.
pub fn read_session<S: SessionStorage + ?Sized>(storage: &S) -> SessionState {
    let account = storage.get_item(ACCOUNT_KEY);
    let sign_out = storage.get_item(SIGN_OUT_KEY);
    let (state, ignored) = SessionState::from_raw(account.as_deref(), sign_out.as_deref());
    for entry in ignored {
        tracing::warn!(key = entry.key, reason = %entry.reason, "ignoring unreadable session value");
    }
    state
}

/// Which session links to show right now.
pub fn current_auth_view<S, C>(storage: &S, cart: &C) -> AuthView
where
    S: SessionStorage + ?Sized,
    C: CartSession + ?Sized,
{
    AuthView::resolve(&read_session(storage), cart.signed_out())
}

/// Sign out locally: persist the flag, drop the account record, then set
/// the in-memory flag, in that order. No server session is touched.
pub fn sign_out<S, C>(storage: &S, cart: &mut C)
where
    S: SessionStorage + ?Sized,
    C: CartSession + ?Sized,
{
    let flag = serde_json::Value::Bool(true).to_string();
    storage.set_item(SIGN_OUT_KEY, &flag);
    storage.remove_item(ACCOUNT_KEY);
    cart.set_sign_out(true);
    tracing::debug!("signed out");
}
