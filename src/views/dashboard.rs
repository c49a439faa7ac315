use dioxus::prelude::*;

use crate::agents::AgentId;

/// Landing page: one card per agent with a shortcut into the chat.
#[component]
pub fn DashboardView(on_start_chat: EventHandler<AgentId>) -> Element {
    rsx! {
        div { class: "main-container dashboard",
            header { class: "dashboard-header",
                h2 { "Bem-vindo ao M&M Direito" }
                p { class: "text-muted",
                    "Escolha um agente jurídico para começar uma conversa."
                }
            }
            div { class: "agent-cards",
                for agent in AgentId::ALL {
                    AgentCard { agent, on_start_chat }
                }
            }
        }
    }
}

#[component]
fn AgentCard(agent: AgentId, on_start_chat: EventHandler<AgentId>) -> Element {
    let descriptor = agent.descriptor();
    rsx! {
        div { class: "agent-card", "data-agent": descriptor.id.as_str(),
            h3 { "{descriptor.name}" }
            p { class: "text-muted", "{descriptor.description}" }
            button {
                class: "btn btn-primary start-chat-btn",
                r#type: "button",
                onclick: move |_| on_start_chat.call(agent),
                "Iniciar conversa"
            }
        }
    }
}
