use std::rc::Rc;

use client::session::{current_auth_view, SessionStorage};
use dioxus::prelude::*;
use shared_types::AuthView;

use crate::cart::use_cart;

/// Handle to the persisted session storage, provided as context so every
/// consumer goes through explicit reads and writes.
#[derive(Clone)]
pub struct SessionHandle(Rc<dyn SessionStorage>);

impl SessionHandle {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self(Rc::new(storage))
    }

    /// `localStorage` in the browser, an in-process map elsewhere.
    pub fn platform() -> Self {
        #[cfg(feature = "web")]
        {
            Self::new(client::session::BrowserStorage)
        }
        #[cfg(not(feature = "web"))]
        {
            Self::new(client::session::MemoryStorage::new())
        }
    }

    pub fn storage(&self) -> &dyn SessionStorage {
        self.0.as_ref()
    }
}

/// Hook to access the session storage handle.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Resolve which session links to show. Re-reads storage on every render
/// and subscribes the caller to the in-memory signed-out flag.
pub fn use_auth_view() -> AuthView {
    let session = use_session();
    let cart = use_cart();
    current_auth_view(session.storage(), &cart)
}
