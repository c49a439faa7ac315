use dioxus::prelude::*;

use crate::notes::{Note, NotesStore};
use crate::storage;

/// Collapsible sidebar listing the user's saved notes. The collapsed flag and
/// the notes themselves persist across restarts.
#[component]
pub fn NotesSidebar(notes: Signal<Vec<Note>>) -> Element {
    let mut collapsed = use_signal(|| NotesStore::new(storage::app_store()).sidebar_collapsed());
    let mut draft = use_signal(String::new);
    let mut notes = notes;

    let mut toggle_sidebar = move || {
        let next = !collapsed();
        collapsed.set(next);
        NotesStore::new(storage::app_store()).set_sidebar_collapsed(next);
    };

    let mut add_draft = move || {
        let text = draft();
        if text.trim().is_empty() {
            return;
        }
        let store = NotesStore::new(storage::app_store());
        notes.with_mut(|list| store.add(list, &text));
        draft.set(String::new());
    };

    let snapshot = notes();

    rsx! {
        aside {
            class: format_args!("notes-sidebar {}", if collapsed() { "collapsed" } else { "" }),
            div { class: "notes-header",
                h3 { "Anotações" }
                button {
                    class: "btn toggle-notes-btn",
                    r#type: "button",
                    title: if collapsed() { "Abrir Anotações" } else { "Recolher Anotações" },
                    onclick: move |_| toggle_sidebar(),
                    if collapsed() { "‹" } else { "›" }
                }
            }
            if !collapsed() {
                div { id: "notes-content", class: "notes-content",
                    if snapshot.is_empty() {
                        p { class: "empty-notes-placeholder",
                            "Nenhuma anotação salva. Selecione \"Salvar anotação\" em uma resposta para guardá-la aqui."
                        }
                    }
                    for (index, note) in snapshot.iter().enumerate() {
                        div { class: "note-item", key: "{index}-{note.html.len()}",
                            div { dangerous_inner_html: "{note.html}" }
                            button {
                                class: "btn delete-note-btn",
                                r#type: "button",
                                title: "Excluir anotação",
                                onclick: move |_| {
                                    let store = NotesStore::new(storage::app_store());
                                    notes.with_mut(|list| store.delete(list, index));
                                },
                                "×"
                            }
                        }
                    }
                }
                form { class: "note-form",
                    onsubmit: move |ev: FormEvent| {
                        ev.prevent_default();
                        add_draft();
                    },
                    input {
                        r#type: "text",
                        placeholder: "Nova anotação...",
                        value: "{draft}",
                        oninput: move |ev| draft.set(ev.value()),
                    }
                    button { class: "btn", r#type: "submit", "Salvar" }
                }
            }
        }
    }
}
