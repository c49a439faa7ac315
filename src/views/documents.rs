use dioxus::prelude::*;

use crate::agents::AgentId;
use crate::api::AgentApi;
use crate::session::SessionController;
use crate::views::shared::markdown_to_html;

/// Standalone contract analysis page. Uses the contract analyzer agent under
/// a session of its own, independent from the chat view.
#[component]
pub fn DocumentAnalysisView() -> Element {
    let api = use_signal(AgentApi::from_env);
    let controller = use_signal(|| {
        let mut c = SessionController::new();
        c.initialize(Some(AgentId::ContractAnalyzer.as_str()));
        c
    });
    let mut contract_text = use_signal(String::new);
    let mut analysis = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut pending = use_signal(|| false);

    let mut analyze = move || {
        let text = contract_text().trim().to_string();
        if text.is_empty() {
            error.set(Some("Por favor, cole o texto do contrato antes de analisar.".to_string()));
            return;
        }
        if pending() {
            return;
        }
        let Some(session_id) = controller.with(|c| c.session().map(|s| s.id.clone())) else {
            return;
        };
        error.set(None);
        pending.set(true);

        spawn(async move {
            let result = api()
                .send(AgentId::ContractAnalyzer, &session_id, &text)
                .await;
            match result {
                Ok(reply) => analysis.set(Some(markdown_to_html(&reply))),
                Err(err) => error.set(Some(err.user_message())),
            }
            pending.set(false);
        });
    };

    rsx! {
        div { class: "main-container document-analysis",
            header { class: "page-header",
                h2 { "Análise de Documentos" }
                p { class: "text-muted",
                    "Cole o texto de um contrato para receber uma análise de riscos e cláusulas."
                }
            }
            textarea {
                class: "document-input",
                rows: "12",
                placeholder: "Cole aqui o texto do contrato...",
                value: "{contract_text}",
                disabled: pending(),
                oninput: move |ev| contract_text.set(ev.value()),
            }
            div { class: "document-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: pending(),
                    onclick: move |_| analyze(),
                    if pending() { "Analisando..." } else { "Analisar contrato" }
                }
            }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
            if let Some(result) = analysis() {
                section { class: "analysis-result",
                    h3 { "Resultado da análise" }
                    div { class: "md", dangerous_inner_html: "{result}" }
                }
            }
        }
    }
}
