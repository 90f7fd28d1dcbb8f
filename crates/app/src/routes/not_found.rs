use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardTitle};

use crate::routes::Route;

/// Fallback for any path outside the route table. Points the visitor
/// back to the places the menu also offers.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let requested = format!("/{}", route.join("/"));
    tracing::debug!(path = %requested, "unknown route");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        Card { class: "not-found",
            CardTitle { "Página no encontrada" }
            CardContent {
                p { class: "not-found-path",
                    "No existe ninguna página en "
                    code { "{requested}" }
                }
                ul { class: "not-found-suggestions",
                    li { Link { to: Route::Home {}, "Volver al inicio" } }
                    li { Link { to: Route::Account {}, "Ver mis casos" } }
                    li { Link { to: Route::Help {}, "Centro de ayuda" } }
                }
            }
        }
    }
}
