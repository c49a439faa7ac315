use dioxus::events::Key;
use dioxus::prelude::*;

use crate::agents::{AgentId, DEFAULT_AGENT};
use crate::api::{AgentApi, ApiError};
use crate::messages::{MessageId, MessageLog};
use crate::notes::{Note, NotesStore};
use crate::session::{SessionController, SwitchOutcome};
use crate::storage;
use crate::types::Role;
use crate::views::notes::NotesSidebar;
use crate::views::shared::markdown_to_html;

fn scroll_chat_to_bottom() {
    let _ = document::eval(
        "const el = document.getElementById('chat-window'); if (el) { el.scrollTop = el.scrollHeight; }",
    );
}

fn start_session(
    mut controller: Signal<SessionController>,
    mut log: Signal<MessageLog>,
    mut sending: Signal<bool>,
    agent: AgentId,
) {
    let outcome = controller.with_mut(|c| c.switch_agent(agent));
    if let SwitchOutcome::Switched(session) = outcome {
        log.with_mut(|l| {
            l.clear();
            l.push(Role::Agent, session.agent.descriptor().welcome_message, true);
        });
        // A request still in flight belongs to the old session now; its reply
        // will be discarded, so the composer must not stay locked.
        sending.set(false);
    }
}

/// Fold a transport result back into the display list. A reply tagged with a
/// session id that is no longer live is discarded outright and the composer
/// stays as-is; otherwise the loading entry is removed, the reply (or error
/// wording) is appended, and the caller re-enables the composer.
fn apply_transport_result(
    controller: &SessionController,
    log: &mut MessageLog,
    loading_id: MessageId,
    session_id: &str,
    result: &Result<String, ApiError>,
) -> bool {
    let still_active = controller
        .session()
        .map(|s| s.id == session_id)
        .unwrap_or(false);
    if !still_active {
        return false;
    }
    log.remove(loading_id);
    match result {
        Ok(reply) => log.push(Role::Agent, markdown_to_html(reply), true),
        Err(err) => log.push(Role::Agent, err.user_message(), false),
    };
    true
}

#[component]
pub fn ChatView(requested_agent: Signal<Option<AgentId>>, notes: Signal<Vec<Note>>) -> Element {
    let api = use_signal(AgentApi::from_env);
    let controller = use_signal(|| {
        let mut c = SessionController::new();
        c.initialize(None);
        c
    });
    let log = use_signal(|| {
        let mut log = MessageLog::new();
        log.push(Role::Agent, DEFAULT_AGENT.descriptor().welcome_message, true);
        log
    });
    let mut input = use_signal(String::new);
    let sending = use_signal(|| false);

    // The dashboard routes here with a requested agent.
    {
        let mut requested_agent = requested_agent;
        use_effect(move || {
            if let Some(agent) = requested_agent() {
                requested_agent.set(None);
                start_session(controller, log, sending, agent);
            }
        });
    }

    let mut send_message = {
        let mut input_signal = input;
        let mut log = log;
        let mut sending_signal = sending;
        move |text: String| {
            let trimmed = text.trim().to_string();
            if trimmed.is_empty() || sending_signal() {
                return;
            }
            let Some((session_id, agent)) =
                controller.with(|c| c.session().map(|s| (s.id.clone(), s.agent)))
            else {
                return;
            };

            log.with_mut(|l| {
                l.push(Role::User, trimmed.clone(), false);
            });
            input_signal.set(String::new());
            let loading_id = log.with_mut(|l| l.push_loading());
            sending_signal.set(true);
            scroll_chat_to_bottom();

            let mut log = log;
            let mut sending_signal = sending_signal;
            spawn(async move {
                let result = api().send(agent, &session_id, &trimmed).await;

                let applied = controller.with(|c| {
                    log.with_mut(|l| {
                        apply_transport_result(c, l, loading_id, &session_id, &result)
                    })
                });
                if applied {
                    sending_signal.set(false);
                    scroll_chat_to_bottom();
                }
            });
        }
    };

    let active_agent = controller
        .with(|c| c.session().map(|s| s.agent))
        .unwrap_or(DEFAULT_AGENT);
    let descriptor = active_agent.descriptor();
    let log_snapshot = log();

    rsx! {
        div { class: "app-container", "data-active-agent": descriptor.id.as_str(),
            aside { class: "sidebar",
                h2 { class: "sidebar-title", "Agentes" }
                div { class: "agent-list",
                    for agent in AgentId::ALL {
                        AgentListItem {
                            agent,
                            is_active: agent == active_agent,
                            on_select: move |agent| start_session(controller, log, sending, agent),
                        }
                    }
                }
            }

            main { class: "chat-area",
                header { class: "chat-header",
                    h2 { id: "current-agent-name", "{descriptor.name}" }
                    p { id: "current-agent-description", class: "text-muted", "{descriptor.description}" }
                }
                div { id: "chat-window", class: "chat-window",
                    for msg in log_snapshot.entries().iter() {
                        if msg.role == Role::Loading {
                            div { class: "message loading", key: "{msg.id}",
                                span { class: "loading-text", "Pensando..." }
                                div { class: "loading-dots", span {} span {} span {} }
                            }
                        } else if msg.role == Role::User {
                            div { class: "message user", key: "{msg.id}", "{msg.content}" }
                        } else {
                            AgentBubble {
                                key: "{msg.id}",
                                content: msg.content.clone(),
                                is_markup: msg.is_markup,
                                notes,
                            }
                        }
                    }
                }

                form { class: "chat-form",
                    onsubmit: move |ev: FormEvent| {
                        ev.prevent_default();
                        let text = input();
                        send_message(text);
                    },
                    if descriptor.has_file_upload {
                        FileAttachButton { log, disabled: sending() }
                    }
                    textarea {
                        id: "message-input",
                        rows: "1",
                        placeholder: "Digite sua mensagem...",
                        value: "{input}",
                        disabled: sending(),
                        autofocus: true,
                        oninput: move |ev| input.set(ev.value()),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                ev.prevent_default();
                                let text = input();
                                send_message(text);
                            }
                        },
                    }
                    button {
                        id: "send-btn",
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: sending() || input().trim().is_empty(),
                        "Enviar"
                    }
                }
            }

            NotesSidebar { notes }
        }
    }
}

#[component]
fn AgentListItem(agent: AgentId, is_active: bool, on_select: EventHandler<AgentId>) -> Element {
    let descriptor = agent.descriptor();
    rsx! {
        div {
            class: format_args!("agent-item {}", if is_active { "active" } else { "" }),
            onclick: move |_| on_select.call(agent),
            span { class: "agent-name", "{descriptor.name}" }
            span { class: "agent-description", "{descriptor.description}" }
        }
    }
}

/// Attach affordance shown only for agents with file upload. The upload
/// pipeline itself lives server-side; selecting a file only acknowledges it
/// in the conversation.
#[component]
fn FileAttachButton(log: Signal<MessageLog>, disabled: bool) -> Element {
    let mut log = log;
    rsx! {
        label { class: "btn attach-btn", title: "Anexar contrato (PDF ou DOCX)",
            "+"
            input {
                r#type: "file",
                accept: ".pdf,.docx",
                style: "display: none;",
                disabled,
                onchange: move |ev: FormEvent| {
                    if let Some(engine) = ev.files() {
                        if let Some(name) = engine.files().first() {
                            let notice = format!(
                                "Arquivo \"{name}\" selecionado. A lógica de upload seria acionada aqui."
                            );
                            log.with_mut(|l| {
                                l.push(Role::Agent, notice, false);
                            });
                            scroll_chat_to_bottom();
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn AgentBubble(content: String, is_markup: bool, notes: Signal<Vec<Note>>) -> Element {
    let copy_payload = content.clone();
    let on_copy = move |_| {
        #[cfg(any(feature = "desktop", feature = "mobile"))]
        {
            if let Ok(mut cb) = arboard::Clipboard::new() {
                let _ = cb.set_text(copy_payload.clone());
            }
        }
        #[cfg(not(any(feature = "desktop", feature = "mobile")))]
        let _ = &copy_payload;
    };

    let save_payload = content.clone();
    let save_is_markup = is_markup;
    let mut notes = notes;
    let on_save = move |_| {
        let store = NotesStore::new(storage::app_store());
        notes.with_mut(|list| {
            if save_is_markup {
                store.add_markup(list, &save_payload);
            } else {
                store.add(list, &save_payload);
            }
        });
    };

    rsx! {
        div { class: "message agent",
            if is_markup {
                div { class: "md", dangerous_inner_html: "{content}" }
            } else {
                "{content}"
            }
            div { class: "bubble-actions",
                button { class: "action-btn", r#type: "button", title: "Copiar", onclick: on_copy, "Copiar" }
                button { class: "action-btn", r#type: "button", title: "Salvar anotação", onclick: on_save, "Salvar anotação" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_exchange() -> (SessionController, MessageLog, MessageId, String) {
        let mut controller = SessionController::new();
        let session_id = controller.initialize(None).id.clone();
        let mut log = MessageLog::new();
        log.push(Role::Agent, DEFAULT_AGENT.descriptor().welcome_message, true);
        log.push(Role::User, "Olá", false);
        let loading_id = log.push_loading();
        (controller, log, loading_id, session_id)
    }

    #[test]
    fn reply_for_the_live_session_is_applied() {
        let (controller, mut log, loading_id, session_id) = pending_exchange();
        let result = Ok("A cláusula é **nula**.".to_string());

        let applied =
            apply_transport_result(&controller, &mut log, loading_id, &session_id, &result);

        assert!(applied, "a live reply must re-enable the composer");
        assert!(log.entries().iter().all(|m| m.role != Role::Loading));
        let last = log.entries().last().unwrap();
        assert_eq!(last.role, Role::Agent);
        assert!(last.is_markup);
        assert!(last.content.contains("<strong>nula</strong>"));
    }

    #[test]
    fn reply_for_a_stale_session_is_dropped() {
        let (mut controller, mut log, loading_id, old_session_id) = pending_exchange();
        controller.switch_agent(AgentId::AgenteCivil);
        let len_before = log.len();

        let result = Ok("resposta atrasada".to_string());
        let applied =
            apply_transport_result(&controller, &mut log, loading_id, &old_session_id, &result);

        assert!(!applied, "a stale reply must not re-enable or touch the log");
        assert_eq!(log.len(), len_before);
        assert!(log.entries().iter().all(|m| m.content != "resposta atrasada"));
    }

    #[test]
    fn transport_error_is_rendered_as_plain_text() {
        let (controller, mut log, loading_id, session_id) = pending_exchange();
        let result = Err(ApiError::Backend("Erro X".to_string()));

        let applied =
            apply_transport_result(&controller, &mut log, loading_id, &session_id, &result);

        assert!(applied);
        assert!(log.entries().iter().all(|m| m.role != Role::Loading));
        let last = log.entries().last().unwrap();
        assert_eq!(last.role, Role::Agent);
        assert!(!last.is_markup);
        assert!(last.content.contains("Erro X"));
    }
}
