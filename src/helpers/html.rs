//! HTML helper functions

use super::url::{is_external, url_for};
use crate::config::SiteConfig;
use crate::content::Inline;

/// Generate a CSS link tag
///
/// # Examples
/// ```ignore
/// css(&config, "pages") // -> <link rel="stylesheet" href="/css/pages.css">
/// ```
pub fn css(config: &SiteConfig, path: &str) -> String {
    let path = if is_external(path) {
        path.to_string()
    } else {
        let path = if path.ends_with(".css") {
            path.to_string()
        } else {
            format!("{}.css", path)
        };
        url_for(config, &format!("css/{}", path.trim_start_matches('/')))
    };

    format!(r#"<link rel="stylesheet" href="{}">"#, html_escape(&path))
}

/// Generate an anchor tag
///
/// Site-relative paths are resolved against the configured root; external
/// targets are kept as-is.
pub fn link_to(config: &SiteConfig, path: &str, text: &str, class: Option<&str>) -> String {
    let href = if is_external(path) {
        path.to_string()
    } else {
        url_for(config, path)
    };

    let class_attr = class
        .map(|c| format!(r#" class="{}""#, html_escape(c)))
        .unwrap_or_default();

    format!(
        r#"<a href="{}"{}>{}</a>"#,
        html_escape(&href),
        class_attr,
        html_escape(text)
    )
}

/// Render one inline run as HTML
pub fn render_inline(config: &SiteConfig, inline: &Inline, link_class: Option<&str>) -> String {
    match inline {
        Inline::Text(text) => html_escape(text),
        Inline::Link(link) => link_to(config, link.href, link.label, link_class),
    }
}

/// Render a run of inlines as a single HTML fragment
pub fn render_inlines(config: &SiteConfig, inlines: &[Inline], link_class: Option<&str>) -> String {
    inlines
        .iter()
        .map(|inline| render_inline(config, inline, link_class))
        .collect()
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
