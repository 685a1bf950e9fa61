//! Turns page records into HTML markup.

mod html;

pub use html::HtmlRenderer;

use std::fmt;
use thiserror::Error;

/// Identifies which page layout a record is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Listing of every artist. Record: a sequence of artists.
    Index,
    /// Detail page for one artist. Record: an `ArtistView`.
    Artist,
}

impl Template {
    pub fn name(&self) -> &'static str {
        match self {
            Template::Index => "index",
            Template::Artist => "artist",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Record does not fit template {template}: {source}")]
    RecordShape {
        template: Template,
        #[source]
        source: serde_json::Error,
    },
}

pub trait Renderer: Send + Sync {
    fn render(&self, template: Template, record: &serde_json::Value)
        -> Result<String, RenderError>;
}
