use client::api::HttpCaseClient;
use client::lifecycle::{load_case, CaseLoader, CaseView};
use dioxus::core::Task;
use dioxus::prelude::*;
use shared_types::Case;
use shared_ui::{Card, CardContent, CardField, CardHeader, CardTitle, StatusMessage, StatusTone};

use super::entries::{row_key, DocumentEntry, TimelineEntry};
use super::panels::{QuickActions, UploadCard};
use crate::PortalLinks;

const EMPTY_TIMELINE_MESSAGE: &str = "No hay eventos registrados.";
const EMPTY_DOCUMENTS_MESSAGE: &str = "No hay documentos adjuntos.";

/// Case detail route. Fetches the case once per identifier.
///
/// A change of `caso_id` cancels the previous task and starts a new
/// ticket, so a late response for the old id is discarded. The task is
/// owned by this scope and dies with it on unmount.
#[component]
pub fn CaseDetail(caso_id: String) -> Element {
    let client = use_context::<HttpCaseClient>();
    let mut loader = use_signal(CaseLoader::new);
    let mut inflight = use_signal(|| Option::<Task>::None);

    use_effect(use_reactive((&caso_id,), move |(caso_id,)| {
        if let Some(task) = inflight.take() {
            task.cancel();
        }
        let ticket = loader.write().begin(caso_id);
        let client = client.clone();
        let task = spawn(async move {
            let outcome = load_case(&client, &ticket).await;
            loader.write().settle(&ticket, outcome);
        });
        inflight.set(Some(task));
    }));

    let view = loader.read().view().clone();

    rsx! {
        CaseDetailView { view }
    }
}

/// Renders exactly one of: loading, error, not found, or the full case.
#[component]
pub fn CaseDetailView(view: CaseView) -> Element {
    let links = try_use_context::<PortalLinks>().unwrap_or_default();

    match view {
        CaseView::Loaded(case) => rsx! {
            CaseLayout { case, messaging_base_url: links.messaging_base_url }
        },
        other => {
            let tone = match other {
                CaseView::Error => StatusTone::Error,
                _ => StatusTone::Info,
            };
            let message = other.status_message().unwrap_or_default();
            rsx! {
                StatusMessage { tone, message }
            }
        }
    }
}

#[component]
fn CaseLayout(case: Case, messaging_base_url: String) -> Element {
    let representative = case.representative_display().to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./cases.css") }

        div { class: "case-page",
            Card { class: "case-summary",
                CardHeader {
                    h1 { class: "case-title", "{case.title}" }
                    p { class: "case-id", "{case.id}" }
                }
                div { class: "case-summary-fields",
                    CardField { label: "Estado", value: case.status.clone() }
                    CardField { label: "Abogado Asignado", value: representative }
                }
            }

            div { class: "case-grid",
                div { class: "case-column",
                    Card {
                        CardTitle { "Historial del Caso" }
                        div { class: "timeline",
                            if case.timeline.is_empty() {
                                p { class: "empty-state", "{EMPTY_TIMELINE_MESSAGE}" }
                            } else {
                                for (index, event) in case.timeline.iter().cloned().enumerate() {
                                    TimelineEntry { key: "{row_key(&event.id, index)}", event }
                                }
                            }
                        }
                    }

                    Card {
                        CardTitle { "Documentos" }
                        CardContent {
                            if case.documents.is_empty() {
                                p { class: "empty-state", "{EMPTY_DOCUMENTS_MESSAGE}" }
                            } else {
                                for (index, document) in case.documents.iter().cloned().enumerate() {
                                    DocumentEntry { key: "{row_key(&document.id, index)}", document }
                                }
                            }
                        }
                    }
                }

                div { class: "case-column",
                    UploadCard {}
                    QuickActions { case: case.clone(), messaging_base_url }
                }
            }
        }
    }
}
