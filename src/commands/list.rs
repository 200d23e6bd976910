//! List the site's pages

use anyhow::Result;
use serde::Serialize;

use crate::content::{PageId, PageMetadata};
use crate::helpers::{full_url_for, url_for};
use crate::render::Renderer;
use crate::Site;

/// One row of the page listing
#[derive(Debug, Serialize)]
pub struct PageEntry {
    pub site: String,
    pub page: PageId,
    pub path: String,
    pub url: String,
    pub metadata: PageMetadata,
    pub links: usize,
}

/// Collect the listing for every page
pub fn entries(site: &Site) -> Result<Vec<PageEntry>> {
    let renderer = Renderer::new(&site.config)?;

    Ok(PageId::ALL
        .into_iter()
        .map(|page| {
            let content = renderer.content(page);
            let path = format!("{}/", page.slug());
            PageEntry {
                site: site.config.title.clone(),
                page,
                url: full_url_for(&site.config, &path),
                path: url_for(&site.config, &path),
                metadata: content.metadata,
                links: content.links().len(),
            }
        })
        .collect())
}

/// Print the pages, as text or JSON
pub fn run(site: &Site, json: bool) -> Result<()> {
    let entries = entries(site)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{} pages ({}):", site.config.title, entries.len());
    for entry in entries {
        println!(
            "  {} - {} [{}] ({} links)",
            entry.path, entry.metadata.title, entry.metadata.description, entry.links
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();

        let entries = entries(&site).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].path, "/about/");
        assert_eq!(entries[0].links, 3);
        assert_eq!(entries[1].path, "/technologies/");
        assert_eq!(entries[1].links, 7);
    }

    #[test]
    fn test_entries_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("_config.yml"), "title: Фудграм\n").unwrap();
        let site = Site::new(dir.path()).unwrap();

        let json = serde_json::to_value(entries(&site).unwrap()).unwrap();
        assert_eq!(json[0]["page"], "about");
        assert_eq!(json[0]["url"], "http://localhost/about/");
        assert_eq!(json[0]["site"], "Фудграм");
        assert_eq!(json[1]["metadata"]["description"], "Фудграм - Технологии");
        assert_eq!(json[1]["metadata"]["social_title"], "О проекте");
    }
}
