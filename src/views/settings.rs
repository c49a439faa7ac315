use dioxus::prelude::*;

use crate::settings::{
    MAX_FONT_LEVEL, MIN_FONT_LEVEL, NOTIFICATION_OPTIONS, PRIVACY_OPTIONS, Preferences,
    font_size_px,
};
use crate::storage;
use crate::types::{Density, ThemeMode};

fn prefs() -> Preferences {
    Preferences::new(storage::app_store())
}

#[component]
pub fn SettingsView(
    theme: Signal<ThemeMode>,
    font_level: Signal<u8>,
    density: Signal<Density>,
) -> Element {
    let mut theme = theme;
    let mut font_level = font_level;
    let mut density = density;
    let mut notifications = use_signal(|| prefs().notification_flags());
    let mut privacy = use_signal(|| prefs().privacy_flags());

    let notification_snapshot = notifications();
    let privacy_snapshot = privacy();

    rsx! {
        div { class: "main-container settings-page",
            div { class: "settings-section",
                h3 { class: "section-title", "Aparência" }
                div { class: "theme-toggle",
                    for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
                        button {
                            class: format_args!(
                                "theme-option {}",
                                if theme() == mode { "active" } else { "" }
                            ),
                            r#type: "button",
                            onclick: move |_| {
                                theme.set(mode);
                                prefs().set_theme(mode);
                            },
                            {theme_label(mode)}
                        }
                    }
                }
            }
            div { class: "settings-section",
                h3 { class: "section-title", "Tamanho da fonte" }
                div { class: "font-size-row",
                    input {
                        id: "font-size-slider",
                        r#type: "range",
                        min: "{MIN_FONT_LEVEL}",
                        max: "{MAX_FONT_LEVEL}",
                        step: "1",
                        value: "{font_level}",
                        oninput: move |ev| {
                            if let Ok(level) = ev.value().parse::<u8>() {
                                let level = level.clamp(MIN_FONT_LEVEL, MAX_FONT_LEVEL);
                                font_level.set(level);
                                prefs().set_font_size_level(level);
                            }
                        },
                    }
                    span { class: "text-muted", "{font_size_px(font_level())}px" }
                }
            }
            div { class: "settings-section",
                h3 { class: "section-title", "Densidade" }
                div { class: "density-toggle",
                    for option in [Density::Compact, Density::Normal, Density::Comfortable] {
                        button {
                            class: format_args!(
                                "density-option {}",
                                if density() == option { "active" } else { "" }
                            ),
                            r#type: "button",
                            onclick: move |_| {
                                density.set(option);
                                prefs().set_density(option);
                            },
                            {density_label(option)}
                        }
                    }
                }
            }
            div { class: "settings-section",
                h3 { class: "section-title", "Notificações" }
                for name in NOTIFICATION_OPTIONS {
                    label { class: "toggle-row",
                        input {
                            r#type: "checkbox",
                            checked: notification_snapshot.get(name).copied().unwrap_or(false),
                            onchange: move |ev: FormEvent| {
                                let enabled = ev.checked();
                                prefs().set_notification_flag(name, enabled);
                                notifications.set(prefs().notification_flags());
                            },
                        }
                        span { "{name}" }
                    }
                }
            }
            div { class: "settings-section",
                h3 { class: "section-title", "Privacidade" }
                for name in PRIVACY_OPTIONS {
                    label { class: "toggle-row",
                        input {
                            r#type: "checkbox",
                            checked: privacy_snapshot.get(name).copied().unwrap_or(false),
                            onchange: move |ev: FormEvent| {
                                let enabled = ev.checked();
                                prefs().set_privacy_flag(name, enabled);
                                privacy.set(prefs().privacy_flags());
                            },
                        }
                        span { "{name}" }
                    }
                }
            }
        }
    }
}

fn theme_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "Claro",
        ThemeMode::Dark => "Escuro",
        ThemeMode::System => "Sistema",
    }
}

fn density_label(density: Density) -> &'static str {
    match density {
        Density::Compact => "Compacta",
        Density::Normal => "Normal",
        Density::Comfortable => "Confortável",
    }
}
