use dioxus::prelude::*;

use crate::settings::Preferences;
use crate::storage;

struct TutorialStep {
    title: &'static str,
    content: &'static str,
}

const STEPS: [TutorialStep; 5] = [
    TutorialStep {
        title: "Bem-vindo ao M&M Direito!",
        content: "Esta é a plataforma de agentes jurídicos inteligentes que irá auxiliar você em suas necessidades legais.",
    },
    TutorialStep {
        title: "Agentes Especializados",
        content: "Na aba Chat você encontra os agentes disponíveis. Cada um é especializado em uma área específica do direito.",
    },
    TutorialStep {
        title: "Analisador de Contratos",
        content: "Este agente analisa contratos, identifica riscos e sugere melhorias com base no Código Civil brasileiro.",
    },
    TutorialStep {
        title: "Envie Mensagens",
        content: "Digite suas perguntas no campo de mensagem. Trocar de agente inicia uma nova conversa.",
    },
    TutorialStep {
        title: "Anotações",
        content: "Salve trechos importantes das respostas na barra de anotações; elas ficam guardadas neste dispositivo.",
    },
];

fn dismiss(mut visible: Signal<bool>) {
    Preferences::new(storage::app_store()).set_tutorial_seen();
    visible.set(false);
}

/// First-run walkthrough. Dismissing or finishing it records the
/// `hasSeenTutorial` flag so it never comes back on its own.
#[component]
pub fn TutorialOverlay(visible: Signal<bool>) -> Element {
    let mut step = use_signal(|| 0usize);

    if !visible() {
        return rsx! {};
    }

    let current = step();
    let entry = &STEPS[current.min(STEPS.len() - 1)];
    let is_last = current + 1 >= STEPS.len();

    rsx! {
        div { class: "tutorial-overlay",
            div { class: "tutorial-card",
                span { class: "tutorial-progress", "{current + 1} / {STEPS.len()}" }
                h3 { "{entry.title}" }
                p { "{entry.content}" }
                div { class: "tutorial-actions",
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| dismiss(visible),
                        "Pular tutorial"
                    }
                    if current > 0 {
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| step.set(current - 1),
                            "Voltar"
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| {
                            if is_last {
                                dismiss(visible);
                            } else {
                                step.set(current + 1);
                            }
                        },
                        if is_last { "Concluir" } else { "Próximo" }
                    }
                }
            }
        }
    }
}
