use client::menu::{select_category, MenuToggles};
use client::session::sign_out;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdMenu;
use dioxus_free_icons::Icon;
use shared_types::{AuthView, ServiceCategory, ALL_CATEGORIES};

use crate::auth::{use_auth_view, use_session};
use crate::cart::use_cart;
use crate::routes::Route;

const ACTIVE_CLASS: &str = "nav-link-active";

/// Attribute text for an open/closed toggle.
fn flag(open: bool) -> &'static str {
    if open {
        "true"
    } else {
        "false"
    }
}

/// Listing route for a dropdown category.
fn category_route(category: ServiceCategory) -> Route {
    match category.path_segment() {
        Some(segment) => Route::CartCategory {
            category: segment.to_string(),
        },
        None => Route::Cart {},
    }
}

/// Site navigation bar with the services dropdown and session links.
///
/// The session links are recomputed from storage on every render.
#[component]
pub fn NavigationMenu() -> Element {
    let session = use_session();
    let cart = use_cart();
    let auth_view = use_auth_view();
    let mut toggles = use_signal(MenuToggles::default);

    let MenuToggles {
        menu_open,
        dropdown_open,
    } = toggles();

    let handle_sign_out = move |_: MouseEvent| {
        let mut cart = cart;
        sign_out(session.storage(), &mut cart);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./menu.css") }

        header { class: "site-header",
            div { class: "site-header-inner",
                Link { to: Route::Home {}, class: "site-brand", "Inicio" }

                button {
                    class: "menu-toggle",
                    r#type: "button",
                    "aria-label": "Abrir menú",
                    onclick: move |_| toggles.write().toggle_menu(),
                    Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                }

                nav {
                    class: "site-nav",
                    "data-open": flag(menu_open),

                    div {
                        class: "nav-dropdown",
                        onmouseenter: move |_| toggles.write().open_dropdown(),
                        onmouseleave: move |_| toggles.write().close_dropdown(),
                        button {
                            class: "nav-dropdown-trigger",
                            r#type: "button",
                            "aria-haspopup": "true",
                            "aria-expanded": flag(dropdown_open),
                            "Servicios"
                        }
                        div {
                            class: "nav-dropdown-panel",
                            "data-visible": flag(dropdown_open),
                            for category in ALL_CATEGORIES.iter().copied() {
                                Link {
                                    key: "{category.as_str()}",
                                    to: category_route(category),
                                    class: "nav-dropdown-item",
                                    onclick: move |_| {
                                        let mut cart = cart;
                                        select_category(&mut toggles.write(), &mut cart, category);
                                    },
                                    "{category.label()}"
                                }
                            }
                        }
                    }

                    Link { to: Route::Contact {}, class: "nav-link", active_class: ACTIVE_CLASS, "Contacto" }
                    Link { to: Route::Help {}, class: "nav-link", active_class: ACTIVE_CLASS, "Ayuda" }

                    match auth_view {
                        AuthView::Authenticated => rsx! {
                            Link { to: Route::Account {}, class: "nav-link", active_class: ACTIVE_CLASS, "Cuenta" }
                            Link {
                                to: Route::Home {},
                                class: "nav-link",
                                onclick: handle_sign_out,
                                "Cerrar sesión"
                            }
                        },
                        AuthView::Anonymous => rsx! {
                            Link { to: Route::Login {}, class: "nav-link", active_class: ACTIVE_CLASS, "Login" }
                        },
                    }
                }
            }
        }
    }
}
