use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdFileText;
use dioxus_free_icons::Icon;
use shared_types::{CaseDocument, CaseEvent};
use shared_ui::ExternalLink;

use crate::format_helpers::format_event_timestamp;

/// List key for a row: its id, or its position when the id is blank.
pub fn row_key(id: &str, index: usize) -> String {
    if id.trim().is_empty() {
        format!("#{index}")
    } else {
        id.to_string()
    }
}

/// One entry of the history timeline.
#[component]
pub fn TimelineEntry(event: CaseEvent) -> Element {
    let when = format_event_timestamp(&event);

    rsx! {
        div { class: "timeline-entry",
            div { class: "timeline-dot" }
            div { class: "timeline-body",
                p { class: "timeline-time", "{when}" }
                p { class: "timeline-description", "{event.description}" }
            }
        }
    }
}

/// One attached document with a download link opened in a new tab.
#[component]
pub fn DocumentEntry(document: CaseDocument) -> Element {
    rsx! {
        ExternalLink {
            href: Some(document.storage_url.clone()),
            class: "document-entry",
            span { class: "document-name",
                Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                "{document.filename}"
            }
            span { class: "document-download", "Descargar" }
        }
    }
}
