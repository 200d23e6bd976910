//! Page rendering - the About and Technologies pages
//!
//! A page is rendered by mounting its metadata into a fresh [`DocumentHead`],
//! turning its static content into view data and handing both to the shell
//! template. Nothing outside the [`PageId`] feeds into the page text or
//! metadata; the config only decides where the stylesheet link points.

use serde::Serialize;
use tera::Context;

use crate::config::SiteConfig;
use crate::content::{self, PageContent, PageId, PageMetadata, Section, SectionBody, LANG};
use crate::error::Result;
use crate::head::DocumentHead;
use crate::helpers::{css, html_escape, render_inlines};
use crate::templates::{PageView, SectionData, ShellData, TemplateRenderer};

/// A page rendered to a full HTML document
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPage {
    pub page: PageId,
    pub metadata: PageMetadata,
    pub html: String,
}

/// Renders pages with the site configuration
pub struct Renderer {
    config: SiteConfig,
    templates: TemplateRenderer,
}

impl Renderer {
    /// Create a renderer; fails only if the embedded templates are broken
    pub fn new(config: &SiteConfig) -> Result<Self> {
        Ok(Self {
            config: config.clone(),
            templates: TemplateRenderer::new()?,
        })
    }

    /// Static content of a page
    pub fn content(&self, page: PageId) -> &'static PageContent {
        content::page_content(page)
    }

    /// Render the "About the project" page
    pub fn render_about(&self) -> Result<RenderedPage> {
        self.render(PageId::About)
    }

    /// Render the "Technologies" page
    pub fn render_technologies(&self) -> Result<RenderedPage> {
        self.render(PageId::Technologies)
    }

    /// Render a page to a full HTML document
    pub fn render(&self, page: PageId) -> Result<RenderedPage> {
        let content = self.content(page);

        let mut head = DocumentHead::new();
        head.apply(&content.metadata);

        let shell = ShellData {
            lang: LANG.to_string(),
            head: head.render(),
            stylesheet: self
                .config
                .stylesheet
                .then(|| css(&self.config, "pages")),
        };

        let view = PageView {
            heading: html_escape(content.heading),
            main: self.section_data(&content.main, "subtitle"),
            aside: content
                .aside
                .as_ref()
                .map(|aside| self.section_data(aside, "additionalTitle")),
        };

        let mut context = Context::new();
        context.insert("shell", &shell);
        context.insert("page", &view);

        let html = self.templates.render(page.template(), &context)?;
        tracing::debug!("Rendered {} ({} bytes)", page, html.len());

        Ok(RenderedPage {
            page,
            metadata: content.metadata,
            html,
        })
    }

    fn section_data(&self, section: &Section, title_class: &'static str) -> SectionData {
        let (paragraphs, items) = match section.body {
            SectionBody::Text(block) => (
                block
                    .paragraphs
                    .iter()
                    .map(|p| render_inlines(&self.config, p.0, Some("textLink")))
                    .collect(),
                Vec::new(),
            ),
            SectionBody::List(list) => (
                Vec::new(),
                list.iter()
                    .map(|item| render_inlines(&self.config, std::slice::from_ref(item), None))
                    .collect(),
            ),
        };

        SectionData {
            title: html_escape(section.title),
            title_class,
            paragraphs,
            items,
        }
    }
}
