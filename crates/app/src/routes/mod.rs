pub mod cases;
pub mod not_found;
pub mod pages;

use dioxus::prelude::*;

use crate::components::menu::NavigationMenu;
use cases::detail::CaseDetail;
use not_found::NotFound;
use pages::{Account, Cart, CartCategory, Contact, Help, Home, Login};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/cuenta")]
    Account {},
    #[route("/cuenta/casos/:caso_id")]
    CaseDetail { caso_id: String },
    // ── Service listing (filtered by the menu's category) ──
    #[route("/carrito")]
    Cart {},
    #[route("/carrito/:category")]
    CartCategory { category: String },
    #[route("/contacto")]
    Contact {},
    #[route("/ayuda")]
    Help {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Main layout: navigation menu above the routed page.
#[component]
fn AppLayout() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            NavigationMenu {}
            main { class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
