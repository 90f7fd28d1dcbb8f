use dioxus::prelude::*;

use crate::components::button::ButtonVariant;

/// `rel` applied to every link that opens a new browsing context.
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// Anchor that opens in a new browsing context.
///
/// `href` is used verbatim. `None` renders an anchor with no target at
/// all, which the browser treats as inert.
#[component]
pub fn ExternalLink(
    href: Option<String>,
    variant: Option<ButtonVariant>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut base = Vec::new();
    if let Some(variant) = variant {
        base.push(Attribute::new("class", "button-link", None, false));
        base.push(Attribute::new("data-style", variant.class(), None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        a {
            href,
            target: "_blank",
            rel: EXTERNAL_REL,
            ..merged,
            {children}
        }
    }
}
