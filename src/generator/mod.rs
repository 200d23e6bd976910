//! Generator module - writes the rendered pages into the public directory

use std::fs;
use std::path::{Path, PathBuf};

use crate::content::PageId;
use crate::error::Result;
use crate::render::Renderer;
use crate::templates::{STYLESHEET, STYLESHEET_PATH};
use crate::Site;

/// Static site generator for the informational pages
pub struct Generator {
    public_dir: PathBuf,
    stylesheet: bool,
    renderer: Renderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        Ok(Self {
            public_dir: site.public_dir.clone(),
            stylesheet: site.config.stylesheet,
            renderer: Renderer::new(&site.config)?,
        })
    }

    /// Generate every page; returns the written files
    pub fn generate(&self) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.public_dir)?;

        let mut written = Vec::new();

        for page in PageId::ALL {
            let rendered = self.renderer.render(page)?;
            let path = self.public_dir.join(page.slug()).join("index.html");
            write_file(&path, &rendered.html)?;
            written.push(path);

            // The landing page of this fragment is the About page
            if page == PageId::About {
                let index = self.public_dir.join("index.html");
                write_file(&index, &rendered.html)?;
                written.push(index);
            }
        }

        if self.stylesheet {
            let path = self.public_dir.join(STYLESHEET_PATH);
            write_file(&path, STYLESHEET)?;
            written.push(path);
        }

        Ok(written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    tracing::debug!("Generated: {:?}", path);
    Ok(())
}
