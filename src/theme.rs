use crate::types::ThemeMode;

/// CSS variable block for the chosen mode. `System` is resolved at apply time
/// by the webview through the `prefers-color-scheme` media blocks below, not
/// reactively.
pub fn theme_css(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => LIGHT_THEME,
        ThemeMode::Dark => DARK_THEME,
        ThemeMode::System => SYSTEM_THEME,
    }
}

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #f7f7f5;
    --color-bg-sidebar: #ffffff;
    --color-bg-overlay: rgba(255, 255, 255, 0.92);
    --color-text-primary: #1c1c1c;
    --color-text-muted: #5c5c5c;
    --color-border: #d8d4cc;
    --color-surface-muted: #eceae5;
    --color-input-bg: #ffffff;
    --color-input-border: #c6c2ba;
    --color-chat-user-bg: #27374d;
    --color-chat-user-text: #ffffff;
    --color-chat-agent-bg: #ffffff;
    --color-chat-agent-text: #1c1c1c;
    --color-accent: #8d6e3a;
    --color-note-bg: #fdf6e3;
    --color-danger: #b04a3a;
}
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #14161a;
    --color-bg-sidebar: #1b1e24;
    --color-bg-overlay: rgba(10, 10, 12, 0.9);
    --color-text-primary: #ececec;
    --color-text-muted: #a2a2a2;
    --color-border: #2e333b;
    --color-surface-muted: #23272f;
    --color-input-bg: #1b1e24;
    --color-input-border: #3a404a;
    --color-chat-user-bg: #dde6f2;
    --color-chat-user-text: #14161a;
    --color-chat-agent-bg: #1f232a;
    --color-chat-agent-text: #ececec;
    --color-accent: #c9a45c;
    --color-note-bg: #2a2619;
    --color-danger: #d4715f;
}
"#;

const SYSTEM_THEME: &str = r#"
@media (prefers-color-scheme: light) {
    :root {
        --color-bg-primary: #f7f7f5;
        --color-bg-sidebar: #ffffff;
        --color-bg-overlay: rgba(255, 255, 255, 0.92);
        --color-text-primary: #1c1c1c;
        --color-text-muted: #5c5c5c;
        --color-border: #d8d4cc;
        --color-surface-muted: #eceae5;
        --color-input-bg: #ffffff;
        --color-input-border: #c6c2ba;
        --color-chat-user-bg: #27374d;
        --color-chat-user-text: #ffffff;
        --color-chat-agent-bg: #ffffff;
        --color-chat-agent-text: #1c1c1c;
        --color-accent: #8d6e3a;
        --color-note-bg: #fdf6e3;
        --color-danger: #b04a3a;
    }
}
@media (prefers-color-scheme: dark) {
    :root {
        --color-bg-primary: #14161a;
        --color-bg-sidebar: #1b1e24;
        --color-bg-overlay: rgba(10, 10, 12, 0.9);
        --color-text-primary: #ececec;
        --color-text-muted: #a2a2a2;
        --color-border: #2e333b;
        --color-surface-muted: #23272f;
        --color-input-bg: #1b1e24;
        --color-input-border: #3a404a;
        --color-chat-user-bg: #dde6f2;
        --color-chat-user-text: #14161a;
        --color-chat-agent-bg: #1f232a;
        --color-chat-agent-text: #ececec;
        --color-accent: #c9a45c;
        --color-note-bg: #2a2619;
        --color-danger: #d4715f;
    }
}
"#;
