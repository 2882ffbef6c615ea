use crate::errors::RenderError;
use serde_json::Value;
use std::path::Path;

/// Rendered form of one reaction file: an ordered mapping from declaration id
/// to a mapping of state reference (`"<backend>.<function>"`) to parameters.
pub type RawDeclaration = serde_json::Map<String, Value>;

/// Context handed to the renderer for each reaction file.
///
/// The tag is passed through to templates untouched; `data` is the event
/// payload and becomes the template's `data` variable.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub tag: &'a str,
    pub data: &'a Value,
}

/// Template-render collaborator seam.
///
/// Rendering runs synchronously on the thread handling the event; it never
/// awaits, so this seam stays a plain trait rather than an async one.
pub trait Renderer: Send + Sync {
    fn render(&self, path: &Path, ctx: &RenderContext) -> Result<RawDeclaration, RenderError>;
}
