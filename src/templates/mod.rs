//! Built-in page templates using the Tera template engine
//!
//! `layout.html` is the page shell (document, head slot, main container);
//! each page template extends it. All templates and the page stylesheet are
//! embedded in the binary.

use serde::Serialize;
use tera::{Context, Tera};

use crate::error::Result;

/// Page-local stylesheet defining the style-class contract
pub const STYLESHEET: &str = include_str!("shell/pages.css");

/// Output path of the stylesheet, relative to the public dir
pub const STYLESHEET_PATH: &str = "css/pages.css";

/// Template renderer with the embedded page shell
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // View data is escaped by the helpers before it reaches a template
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("shell/layout.html")),
            ("about.html", include_str!("shell/about.html")),
            ("technologies.html", include_str!("shell/technologies.html")),
            (
                "partials/section.html",
                include_str!("shell/partials/section.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Data for the page shell
#[derive(Debug, Clone, Serialize)]
pub struct ShellData {
    pub lang: String,
    /// Pre-rendered head metadata tags
    pub head: String,
    /// Pre-rendered stylesheet link, if enabled
    pub stylesheet: Option<String>,
}

/// A titled section, with its body rendered to HTML fragments
#[derive(Debug, Clone, Serialize)]
pub struct SectionData {
    pub title: String,
    /// `subtitle` for the main column, `additionalTitle` for the aside
    pub title_class: &'static str,
    pub paragraphs: Vec<String>,
    pub items: Vec<String>,
}

/// Page body data
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub heading: String,
    pub main: SectionData,
    pub aside: Option<SectionData>,
}
