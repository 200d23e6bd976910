//! Helper functions for templates
//!
//! These build the HTML fragments (links, stylesheet tags, inline text) that
//! the page templates splice in.

mod html;
mod url;

pub use html::*;
pub use url::*;
