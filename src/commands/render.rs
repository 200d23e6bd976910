//! Print a single page

use anyhow::Result;
use std::io::Write;

use crate::content::PageId;
use crate::render::Renderer;
use crate::Site;

/// Render one page and write its HTML to stdout
pub fn run(site: &Site, page: &str) -> Result<()> {
    let page: PageId = page.parse()?;
    let rendered = Renderer::new(&site.config)?.render(page)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.html.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
