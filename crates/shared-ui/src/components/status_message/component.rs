use dioxus::prelude::*;

/// Tone of a [`StatusMessage`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StatusTone {
    #[default]
    Info,
    Error,
}

impl StatusTone {
    fn class(&self) -> &'static str {
        match self {
            StatusTone::Info => "info",
            StatusTone::Error => "error",
        }
    }
}

/// A single centered line that replaces a whole view (loading, failure,
/// not found).
#[component]
pub fn StatusMessage(
    #[props(default)] tone: StatusTone,
    #[props(into)] message: String,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "status-message",
            role: "status",
            "data-tone": tone.class(),
            "{message}"
        }
    }
}
