//! Content module - static page data for the informational pages
//!
//! Every page is a pure function of its [`PageId`]. The text lives in
//! `about.rs` and `technologies.rs`; layout lives in the templates.

mod about;
mod technologies;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Identifier of a renderable page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    About,
    Technologies,
}

impl PageId {
    /// All pages, in routing order
    pub const ALL: [PageId; 2] = [PageId::About, PageId::Technologies];

    /// URL slug of the page
    pub fn slug(self) -> &'static str {
        match self {
            PageId::About => "about",
            PageId::Technologies => "technologies",
        }
    }

    /// Template used to render the page
    pub fn template(self) -> &'static str {
        match self {
            PageId::About => "about.html",
            PageId::Technologies => "technologies.html",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for PageId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().trim_matches('/');
        PageId::ALL
            .into_iter()
            .find(|page| page.slug().eq_ignore_ascii_case(slug))
            .ok_or_else(|| Error::UnknownPage(s.to_string()))
    }
}

/// Language the page text is authored in
pub const LANG: &str = "ru";

/// Document metadata handed to the head injector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub social_title: &'static str,
}

/// An outbound hyperlink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkReference {
    pub label: &'static str,
    pub href: &'static str,
}

/// A run of paragraph or list-item content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inline {
    Text(&'static str),
    Link(LinkReference),
}

/// A list item is a single link or a plain label
pub type ListItem = Inline;

/// One paragraph, as an ordered run of inlines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paragraph(pub &'static [Inline]);

/// Ordered, static sequence of paragraphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBlock {
    pub paragraphs: &'static [Paragraph],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionBody {
    Text(ContentBlock),
    List(&'static [ListItem]),
}

/// A titled section of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub body: SectionBody,
}

/// Everything a page renders, minus layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContent {
    pub metadata: PageMetadata,
    pub heading: &'static str,
    pub main: Section,
    pub aside: Option<Section>,
}

impl PageContent {
    /// All outbound links in document order
    pub fn links(&self) -> Vec<LinkReference> {
        std::iter::once(&self.main)
            .chain(self.aside.as_ref())
            .flat_map(|section| section.inlines())
            .filter_map(|inline| match inline {
                Inline::Link(link) => Some(*link),
                Inline::Text(_) => None,
            })
            .collect()
    }
}

impl Section {
    fn inlines(&self) -> Vec<&'static Inline> {
        match self.body {
            SectionBody::Text(block) => block.paragraphs.iter().flat_map(|p| p.0).collect(),
            SectionBody::List(items) => items.iter().collect(),
        }
    }
}

/// Look up the static content of a page
pub fn page_content(page: PageId) -> &'static PageContent {
    match page {
        PageId::About => &about::PAGE,
        PageId::Technologies => &technologies::PAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph_count(section: &Section) -> usize {
        match section.body {
            SectionBody::Text(block) => block.paragraphs.len(),
            SectionBody::List(_) => 0,
        }
    }

    #[test]
    fn test_page_id_parse() {
        assert_eq!("about".parse::<PageId>().unwrap(), PageId::About);
        assert_eq!("/Technologies/".parse::<PageId>().unwrap(), PageId::Technologies);
        assert!(matches!(
            "recipes".parse::<PageId>(),
            Err(Error::UnknownPage(_))
        ));
    }

    #[test]
    fn test_about_structure() {
        let about = page_content(PageId::About);
        assert_eq!(paragraph_count(&about.main), 2);
        let aside = about.aside.expect("about has an attribution block");
        assert_eq!(paragraph_count(&aside), 3);

        let hrefs: Vec<_> = about.links().iter().map(|l| l.href).collect();
        assert_eq!(
            hrefs,
            [
                "https://github.com/FuntikPiggy",
                "https://vk.com/FuntikPiggy",
                "https://t.me/FuntikPiggy",
            ]
        );
    }

    #[test]
    fn test_technologies_order() {
        let hosts = [
            "python.org",
            "djangoproject.com",
            "django-rest-framework.org",
            "djoser.readthedocs.io",
            "postgresql.org",
            "gunicorn.org",
            "nginx.org",
        ];

        let tech = page_content(PageId::Technologies);
        assert!(tech.aside.is_none());
        let SectionBody::List(items) = tech.main.body else {
            panic!("technologies renders a list");
        };
        assert_eq!(items.len(), 8);

        for (item, host) in items.iter().zip(hosts) {
            match item {
                Inline::Link(link) => assert!(link.href.contains(host), "{}", link.href),
                Inline::Text(text) => panic!("expected a link to {}, got {}", host, text),
            }
        }
        assert!(matches!(items[7], Inline::Text(_)));
    }

    #[test]
    fn test_social_title_matches_title() {
        for page in PageId::ALL {
            let meta = page_content(page).metadata;
            assert_eq!(meta.social_title, meta.title);
            assert_eq!(meta.title, "О проекте");
        }
        assert_eq!(
            page_content(PageId::Technologies).metadata.description,
            "Фудграм - Технологии"
        );
    }

    #[test]
    fn test_lookup_is_stable() {
        for page in PageId::ALL {
            assert!(std::ptr::eq(page_content(page), page_content(page)));
        }
    }
}
