use client::session::CartSession;
use dioxus::prelude::*;
use shared_types::ServiceCategory;

/// In-memory cart/session state shared across routes for the lifetime of
/// the app. Nothing here is persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CartContext {
    pub sign_out: Signal<bool>,
    pub search_by_category: Signal<Option<ServiceCategory>>,
}

impl CartContext {
    pub fn new() -> Self {
        Self {
            sign_out: Signal::new(false),
            search_by_category: Signal::new(None),
        }
    }

    /// Active category filter, `All` when nothing was picked yet.
    pub fn active_category(&self) -> ServiceCategory {
        self.search_by_category.read().unwrap_or_default()
    }
}

impl CartSession for CartContext {
    fn signed_out(&self) -> bool {
        *self.sign_out.read()
    }

    fn set_sign_out(&mut self, signed_out: bool) {
        self.sign_out.set(signed_out);
    }

    fn set_search_by_category(&mut self, category: ServiceCategory) {
        self.search_by_category.set(Some(category));
    }
}

/// Hook to access the shared cart context.
pub fn use_cart() -> CartContext {
    use_context::<CartContext>()
}
