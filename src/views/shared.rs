use comrak::plugins::syntect::SyntectAdapter;
use comrak::{ComrakOptions, ComrakPlugins, markdown_to_html_with_plugins};
use once_cell::sync::Lazy;

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.footnotes = true;
    options.extension.strikethrough = true;
    options.extension.tasklist = true;
    options.render.unsafe_ = true;
    options
});

/// Agent replies may contain Markdown; render them to markup for the chat
/// window.
pub fn markdown_to_html(md: &str) -> String {
    let adapter = SyntectAdapter::new(Some("base16-ocean.dark"));
    let mut plugins = ComrakPlugins::default();
    plugins.render.codefence_syntax_highlighter = Some(&adapter);
    markdown_to_html_with_plugins(md, &MARKDOWN_OPTIONS, &plugins)
}

/// Minimal shape check used by the contact form. Mirrors the lenient
/// `something@something.tld` rule the product has always used.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    let mut domain_parts = domain.rsplitn(2, '.');
    let (Some(tld), Some(host)) = (domain_parts.next(), domain_parts.next()) else {
        return false;
    };
    !tld.is_empty()
        && !host.is_empty()
        && !domain.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_renders_basic_structure() {
        let html = markdown_to_html("# Título\n\n- item um\n- item dois");
        assert!(html.contains("<h1>"));
        assert!(html.contains("<li>"));
    }

    #[test]
    fn email_validation_accepts_plain_addresses() {
        assert!(is_valid_email("advogada@escritorio.com.br"));
        assert!(is_valid_email("a@b.co"));
    }

    #[test]
    fn email_validation_rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("sem-arroba.com"));
        assert!(!is_valid_email("dois@@arrobas.com"));
        assert!(!is_valid_email("espaco em@dominio.com"));
        assert!(!is_valid_email("semtld@dominio"));
    }
}
