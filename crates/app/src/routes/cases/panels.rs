use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdMessageCircle};
use dioxus_free_icons::Icon;
use shared_types::Case;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardTitle, ExternalLink};

const UPLOAD_INPUT_ID: &str = "file-upload";

/// File picker plus a submit button.
///
/// Submission is not wired to any endpoint; the button only renders.
#[component]
pub fn UploadCard() -> Element {
    rsx! {
        Card { class: "upload-card",
            CardTitle { "Adjuntar Nuevo Documento" }
            div { class: "upload-dropzone",
                p { class: "upload-hint", "Arrastra un archivo aquí o selecciónalo" }
                input { r#type: "file", class: "upload-input", id: UPLOAD_INPUT_ID }
                label {
                    r#for: UPLOAD_INPUT_ID,
                    class: "button-link",
                    "data-style": ButtonVariant::Accent.class(),
                    "Seleccionar Archivo"
                }
            }
            Button { variant: ButtonVariant::Primary, class: "upload-submit", "Subir Documento" }
        }
    }
}

/// Messaging and scheduling shortcuts to the assigned representative.
#[component]
pub fn QuickActions(case: Case, #[props(into)] messaging_base_url: String) -> Element {
    let messaging_href = case.messaging_link(&messaging_base_url);

    rsx! {
        Card { class: "quick-actions-card",
            CardTitle { "Acciones Rápidas" }
            CardContent {
                ExternalLink {
                    href: Some(messaging_href),
                    variant: Some(ButtonVariant::Messaging),
                    Icon::<LdMessageCircle> { icon: LdMessageCircle, width: 24, height: 24 }
                    "Contactar a mi Abogado"
                }
                ExternalLink {
                    href: case.scheduling_url.clone(),
                    variant: Some(ButtonVariant::Neutral),
                    Icon::<LdCalendar> { icon: LdCalendar, width: 24, height: 24 }
                    "Agendar Reunión"
                }
            }
        }
    }
}
