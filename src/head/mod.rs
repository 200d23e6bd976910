//! Document head metadata for the mounted page
//!
//! One page owns the head at a time. Applying metadata replaces whatever the
//! previous page set, so re-mounting a page never accumulates tags.

use crate::content::PageMetadata;
use crate::helpers::html_escape;

/// Metadata slot of the active document
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocumentHead {
    active: Option<PageMetadata>,
}

impl DocumentHead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a page's metadata, replacing the previous page's
    pub fn apply(&mut self, metadata: &PageMetadata) {
        if self.active.as_ref() != Some(metadata) {
            tracing::debug!("Head metadata set: {}", metadata.title);
        }
        self.active = Some(*metadata);
    }

    /// Revert the head on unmount
    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Emit `<title>`, `description` and `og:title` tags
    pub fn render(&self) -> String {
        let Some(meta) = &self.active else {
            return String::new();
        };

        [
            format!("<title>{}</title>", html_escape(meta.title)),
            format!(
                r#"<meta name="description" content="{}">"#,
                html_escape(meta.description)
            ),
            format!(
                r#"<meta property="og:title" content="{}">"#,
                html_escape(meta.social_title)
            ),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABOUT: PageMetadata = PageMetadata {
        title: "About the project",
        description: "Foodgram - About the project",
        social_title: "About the project",
    };

    const TECH: PageMetadata = PageMetadata {
        title: "About the project",
        description: "Foodgram - Technologies",
        social_title: "About the project",
    };

    #[test]
    fn test_render_tags() {
        let mut head = DocumentHead::new();
        head.apply(&ABOUT);
        let html = head.render();
        assert_eq!(html.matches("<title>").count(), 1);
        assert!(html.contains(r#"<meta name="description" content="Foodgram - About the project">"#));
        assert!(html.contains(r#"<meta property="og:title" content="About the project">"#));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut head = DocumentHead::new();
        head.apply(&ABOUT);
        let first = head.render();
        head.apply(&ABOUT);
        assert_eq!(head.render(), first);
        assert_eq!(head.render().matches("<meta").count(), 2);
    }

    #[test]
    fn test_apply_replaces_previous_page() {
        let mut head = DocumentHead::new();
        head.apply(&ABOUT);
        head.apply(&TECH);
        let html = head.render();
        assert!(html.contains("Foodgram - Technologies"));
        assert!(!html.contains("Foodgram - About the project"));
    }

    #[test]
    fn test_clear() {
        let mut head = DocumentHead::new();
        head.apply(&ABOUT);
        head.clear();
        assert_eq!(head, DocumentHead::new());
        assert_eq!(head.render(), "");
    }

    #[test]
    fn test_escapes_values() {
        let mut head = DocumentHead::new();
        head.apply(&PageMetadata {
            title: "Fish & \"Chips\"",
            description: "<b>",
            social_title: "Fish & \"Chips\"",
        });
        let html = head.render();
        assert!(html.contains("<title>Fish &amp; &quot;Chips&quot;</title>"));
        assert!(html.contains(r#"content="&lt;b&gt;""#));
    }
}
