use dioxus::prelude::*;

use crate::views::shared::is_valid_email;

struct FaqEntry {
    question: &'static str,
    answer: &'static str,
}

const FAQ: [FaqEntry; 4] = [
    FaqEntry {
        question: "As respostas dos agentes substituem um advogado?",
        answer: "Não. Os agentes são ferramentas de apoio à pesquisa e à redação; toda peça ou decisão deve ser revisada por um profissional habilitado.",
    },
    FaqEntry {
        question: "Meus documentos ficam armazenados?",
        answer: "As conversas existem apenas durante a sessão. Somente as anotações que você salva ficam guardadas, e apenas neste dispositivo.",
    },
    FaqEntry {
        question: "Quais áreas do direito são cobertas?",
        answer: "Análise de contratos, Direito Civil e Direito Penal brasileiro, além do modo Advogado do Diabo para testar teses.",
    },
    FaqEntry {
        question: "Preciso de conexão com a internet?",
        answer: "Sim. As respostas são geradas por um servidor; sem conexão, o aplicativo informa que o backend está indisponível.",
    },
];

#[component]
pub fn AboutView() -> Element {
    let mut expanded = use_signal(|| Option::<usize>::None);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut sent = use_signal(|| false);

    let mut submit_contact = move || {
        if name().trim().is_empty()
            || email().trim().is_empty()
            || subject().trim().is_empty()
            || message().trim().is_empty()
        {
            form_error.set(Some("Por favor, preencha todos os campos.".to_string()));
            return;
        }
        if !is_valid_email(email().trim()) {
            form_error.set(Some("Por favor, insira um e-mail válido.".to_string()));
            return;
        }
        form_error.set(None);
        sent.set(true);
        name.set(String::new());
        email.set(String::new());
        subject.set(String::new());
        message.set(String::new());
    };

    rsx! {
        div { class: "main-container about-page",
            header { class: "page-header",
                h2 { "Sobre o M&M Direito" }
                p { class: "text-muted",
                    "Uma plataforma de agentes jurídicos inteligentes para análise de contratos, pesquisa em Direito Civil e Penal e teste de teses."
                }
            }

            section { class: "faq-section",
                h3 { "Perguntas frequentes" }
                for (index, entry) in FAQ.iter().enumerate() {
                    div {
                        class: format_args!(
                            "faq-item {}",
                            if expanded() == Some(index) { "expanded" } else { "" }
                        ),
                        div {
                            class: "faq-question",
                            onclick: move |_| {
                                let next = if expanded() == Some(index) { None } else { Some(index) };
                                expanded.set(next);
                            },
                            "{entry.question}"
                        }
                        if expanded() == Some(index) {
                            div { class: "faq-answer", "{entry.answer}" }
                        }
                    }
                }
            }

            section { class: "contact-section",
                h3 { "Fale conosco" }
                if sent() {
                    div { class: "success-message",
                        h4 { "Mensagem Enviada!" }
                        p { "Agradecemos seu contato. Responderemos em breve." }
                    }
                } else {
                    form { class: "contact-form",
                        onsubmit: move |ev: FormEvent| {
                            ev.prevent_default();
                            submit_contact();
                        },
                        input {
                            r#type: "text",
                            placeholder: "Nome",
                            value: "{name}",
                            oninput: move |ev| name.set(ev.value()),
                        }
                        input {
                            r#type: "email",
                            placeholder: "E-mail",
                            value: "{email}",
                            oninput: move |ev| email.set(ev.value()),
                        }
                        input {
                            r#type: "text",
                            placeholder: "Assunto",
                            value: "{subject}",
                            oninput: move |ev| subject.set(ev.value()),
                        }
                        textarea {
                            rows: "5",
                            placeholder: "Mensagem",
                            value: "{message}",
                            oninput: move |ev| message.set(ev.value()),
                        }
                        if let Some(error) = form_error() {
                            p { class: "form-error", "{error}" }
                        }
                        button { class: "btn btn-primary", r#type: "submit", "Enviar mensagem" }
                    }
                }
            }
        }
    }
}
