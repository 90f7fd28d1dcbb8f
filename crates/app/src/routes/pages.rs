//! Pages reached from the navigation menu. Their content is owned by other
//! parts of the site; these render the shell the menu links into.

use dioxus::prelude::*;
use shared_types::ServiceCategory;
use shared_ui::{Card, CardContent, CardTitle};

use crate::cart::use_cart;

#[component]
fn SimplePage(#[props(into)] title: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        div { class: "simple-page",
            Card {
                CardTitle { "{title}" }
                CardContent { {children} }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        SimplePage { title: "Inicio",
            p { "Consulta el estado de tus casos desde tu cuenta." }
        }
    }
}

#[component]
pub fn Login() -> Element {
    rsx! {
        SimplePage { title: "Login",
            p { "Ingresa con tu cuenta para ver tus casos." }
        }
    }
}

#[component]
pub fn Account() -> Element {
    rsx! {
        SimplePage { title: "Cuenta",
            p { "Selecciona un caso para ver su detalle." }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        SimplePage { title: "Contacto",
            p { "Escríbenos y te responderemos a la brevedad." }
        }
    }
}

#[component]
pub fn Help() -> Element {
    rsx! {
        SimplePage { title: "Ayuda",
            p { "Preguntas frecuentes sobre el uso del portal." }
        }
    }
}

/// Unfiltered service listing.
#[component]
pub fn Cart() -> Element {
    rsx! { ServiceListing { category: ServiceCategory::All } }
}

/// Listing for one category key taken from the URL. Unknown keys fall
/// back to the category picked in the menu.
#[component]
pub fn CartCategory(category: String) -> Element {
    let cart = use_cart();
    let category = ServiceCategory::from_key(&category).unwrap_or_else(|| cart.active_category());
    rsx! { ServiceListing { category } }
}

#[component]
fn ServiceListing(category: ServiceCategory) -> Element {
    rsx! {
        SimplePage { title: "Servicios",
            p { class: "service-filter", "Filtro: {category.label()}" }
        }
    }
}
