//! Splice HTML - a minimal HTML templating helper
//!
//! Templates are captured as literal segments interleaved with values, then
//! rendered to a single string. Plain text is HTML-escaped, values marked
//! with [`mark_unsafe`] are emitted verbatim, and nested templates and
//! sequences are flattened recursively.
//!
//! # Example
//!
//! ```rust
//! use splice_html::{mark_unsafe, render_to_string, t};
//!
//! let name = "<Bob>";
//! let count = mark_unsafe("<b>5</b>");
//! let html = render_to_string(&t!("Hello, " {name} "! You have " {count} " items."));
//! assert_eq!(html, "Hello, &lt;Bob&gt;! You have <b>5</b> items.");
//! ```

pub mod document;
pub mod error;
pub mod renderer;
pub mod template;

pub use document::{Document, DocumentError};
pub use error::{RenderError, TemplateError};
pub use renderer::{
    escape_html, render_to_string, render_with_config, stringify, ConfigError, HtmlRenderer,
    RenderConfig,
};
pub use template::{capture, mark_unsafe, Content, Number, Opaque, Renderable, Sequence, Unsafe};

/// Parse a TOML template document and render it with its own configuration
///
/// # Example
///
/// ```rust
/// use splice_html::render_document;
///
/// let html = render_document(r#"
///     segments = ["<h1>", "</h1>"]
///     values = ["Fish & Chips"]
/// "#).unwrap();
///
/// assert_eq!(html, "<h1>Fish &amp; Chips</h1>");
/// ```
pub fn render_document(source: &str) -> Result<String, DocumentError> {
    render_document_with_config(source, None)
}

/// Parse a TOML template document, optionally overriding its configuration
pub fn render_document_with_config(
    source: &str,
    config: Option<RenderConfig>,
) -> Result<String, DocumentError> {
    let mut doc = Document::from_str(source)?;
    if let Some(config) = config {
        doc = doc.with_config(config);
    }
    Ok(doc.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_document() {
        let html = render_document(r#"segments = ["<p>", "</p>"]
values = ["<script>"]"#)
        .unwrap();
        assert_eq!(html, "<p>&lt;script&gt;</p>");
    }

    #[test]
    fn test_render_document_override() {
        let source = r#"segments = ["a", "b"]
values = [1]

[render]
strict = true
"#;
        let html = render_document_with_config(source, Some(RenderConfig::default())).unwrap();
        assert_eq!(html, "a1b");
    }

    #[test]
    fn test_render_document_shape_error() {
        let err = render_document(r#"segments = ["a"]
values = [1]"#)
        .unwrap_err();
        assert!(matches!(err, DocumentError::Template(_)));
        assert_eq!(
            err.to_string(),
            "invalid template shape: 1 segment(s) for 1 value(s), expected 2"
        );
    }
}
