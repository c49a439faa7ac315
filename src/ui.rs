use dioxus::prelude::*;

use crate::agents::AgentId;
use crate::notes::NotesStore;
use crate::settings::{Preferences, font_size_px};
use crate::storage;
use crate::theme::theme_css;
use crate::types::{Density, ThemeMode};
use crate::views::{
    AboutView, ChatView, DashboardView, DocumentAnalysisView, SettingsView, TutorialOverlay,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AppTab {
    Dashboard,
    Chat,
    Documents,
    Settings,
    About,
}

impl AppTab {
    const ALL: [AppTab; 5] = [
        AppTab::Dashboard,
        AppTab::Chat,
        AppTab::Documents,
        AppTab::Settings,
        AppTab::About,
    ];

    fn label(self) -> &'static str {
        match self {
            AppTab::Dashboard => "Início",
            AppTab::Chat => "Chat",
            AppTab::Documents => "Documentos",
            AppTab::Settings => "Configurações",
            AppTab::About => "Sobre",
        }
    }
}

#[component]
pub fn App() -> Element {
    let prefs = Preferences::new(storage::app_store());

    let active_tab = use_signal(|| AppTab::Dashboard);
    let theme = use_signal(|| prefs.theme());
    let font_level = use_signal(|| prefs.font_size_level());
    let density = use_signal(|| prefs.density());
    let notes = use_signal(|| NotesStore::new(storage::app_store()).load_all());
    let requested_agent = use_signal(|| Option::<AgentId>::None);
    let show_tutorial = use_signal(|| !prefs.has_seen_tutorial());

    let mut tab_signal = active_tab;
    let mut requested_signal = requested_agent;
    let start_chat = move |agent: AgentId| {
        requested_signal.set(Some(agent));
        tab_signal.set(AppTab::Chat);
    };

    rsx! {
        ThemeStyles { theme, font_level, density }
        TutorialOverlay { visible: show_tutorial }
        AppHeader { active_tab }
        div { class: "tab-panels",
            TabPanel {
                active_tab,
                tab: AppTab::Dashboard,
                children: rsx!( DashboardView { on_start_chat: start_chat } ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Chat,
                children: rsx!( ChatView { requested_agent, notes } ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Documents,
                children: rsx!( DocumentAnalysisView {} ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Settings,
                children: rsx!( SettingsView { theme, font_level, density } ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::About,
                children: rsx!( AboutView {} ),
            }
        }
    }
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>, font_level: Signal<u8>, density: Signal<Density>) -> Element {
    let root_style = format!(
        ":root {{ --font-size-base: {}px; --spacing-multiplier: {}; }}",
        font_size_px(font_level()),
        density().spacing_multiplier(),
    );
    let palette = theme_css(theme());
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        style { dangerous_inner_html: "{root_style}" }
        style { dangerous_inner_html: "{palette}" }
    }
}

#[component]
fn AppHeader(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "header",
            div { class: "header-content",
                span { class: "logo", "M&M Direito" }
                div { class: "tabs",
                    for tab in AppTab::ALL {
                        TabButton { active_tab, tab }
                    }
                }
            }
        }
    }
}

#[component]
fn TabPanel(active_tab: Signal<AppTab>, tab: AppTab, children: Element) -> Element {
    let is_active = active_tab() == tab;
    let class_suffix = if is_active { "active" } else { "" };
    rsx! {
        div {
            class: format_args!("tab-panel {}", class_suffix),
            aria_hidden: (!is_active).to_string(),
            {children}
        }
    }
}

#[component]
fn TabButton(active_tab: Signal<AppTab>, tab: AppTab) -> Element {
    let mut active_tab = active_tab;
    let class = if active_tab() == tab { "tab active" } else { "tab" };
    rsx! {
        h1 {
            class: class,
            onclick: move |_| active_tab.set(tab),
            "{tab.label()}"
        }
    }
}
