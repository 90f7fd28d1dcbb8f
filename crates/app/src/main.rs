use dioxus::prelude::*;
use tracing::Level;

mod auth;
mod cart;
mod components;
mod format_helpers;
mod routes;
use auth::SessionHandle;
use cart::CartContext;
use routes::Route;

/// Outbound link settings read by the case views.
#[derive(Clone, Debug, PartialEq)]
pub struct PortalLinks {
    pub messaging_base_url: String,
}

impl Default for PortalLinks {
    fn default() -> Self {
        Self {
            messaging_base_url: shared_types::DEFAULT_MESSAGING_BASE_URL.to_string(),
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let _ = dioxus::logger::init(Level::INFO);
    client::config::load_client_config();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = client::config::client_config();

    use_context_provider(client::api::HttpCaseClient::from_config);
    use_context_provider(|| PortalLinks {
        messaging_base_url: config.links.messaging_base_url.clone(),
    });
    use_context_provider(SessionHandle::platform);
    use_context_provider(CartContext::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
