//! HTML string generation from captured templates

use tracing::{debug, trace, warn};

use crate::error::RenderError;
use crate::template::{Content, Renderable};

use super::escape::escape_html_into;
use super::RenderConfig;

/// Build the rendered output incrementally
///
/// The walk is depth-first and strictly left to right, so lazy sequences
/// are pulled in a single deterministic pass.
pub struct HtmlRenderer {
    config: RenderConfig,
    output: String,
    depth: usize,
}

impl HtmlRenderer {
    /// Create a new renderer
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            output: String::new(),
            depth: 0,
        }
    }

    /// Append a rendered template
    pub fn push_renderable(&mut self, renderable: &Renderable<'_>) -> Result<(), RenderError> {
        let strings = renderable.strings();
        let values = renderable.values();

        if values.is_empty() {
            for segment in strings {
                self.output.push_str(segment);
            }
            return Ok(());
        }

        for (segment, value) in strings.iter().zip(values) {
            self.output.push_str(segment);
            self.push_content(value)?;
        }
        if let Some(last) = strings.last() {
            self.output.push_str(last);
        }
        Ok(())
    }

    /// Append one stringified value
    pub fn push_content(&mut self, content: &Content<'_>) -> Result<(), RenderError> {
        match content {
            Content::Text(text) => escape_html_into(&mut self.output, text),
            Content::Unsafe(raw) => self.output.push_str(raw.value()),
            Content::Nested(inner) => {
                self.depth += 1;
                trace!(depth = self.depth, "rendering nested template");
                let result = self.push_renderable(inner);
                self.depth -= 1;
                result?;
            }
            Content::Sequence(seq) => {
                let visited = seq.try_for_each(|item| self.push_content(item))?;
                if !visited {
                    warn!(
                        depth = self.depth,
                        "lazy sequence was already consumed, rendering it as empty"
                    );
                }
            }
            Content::Number(n) => self.output.push_str(&n.to_string()),
            Content::Boolean(b) => self.output.push_str(if *b { "true" } else { "false" }),
            Content::Display(value) => {
                if self.config.strict {
                    debug!(type_name = value.type_name(), "rejecting unsupported content");
                    return Err(RenderError::UnsupportedContentType {
                        type_name: value.type_name(),
                    });
                }
                self.output.push_str(&value.to_string());
            }
        }
        Ok(())
    }

    /// Consume the renderer and return the output
    pub fn finish(self) -> String {
        self.output
    }
}

/// Render a template to an HTML string
///
/// Plain text is escaped, [`Unsafe`](crate::Unsafe) values are emitted
/// verbatim, and nested templates and sequences are flattened. Values outside
/// the known content kinds are emitted through their `Display` form.
pub fn render_to_string(renderable: &Renderable<'_>) -> String {
    match render_with_config(renderable, &RenderConfig::default()) {
        Ok(html) => html,
        Err(err) => unreachable!("permissive rendering cannot fail: {}", err),
    }
}

/// Render a template with custom configuration
///
/// # Example
///
/// ```rust
/// use splice_html::{render_with_config, t, Content, RenderConfig, RenderError};
///
/// let page = t!("<p>" {Content::display('x')} "</p>");
/// let strict = RenderConfig::new().with_strict(true);
/// assert_eq!(
///     render_with_config(&page, &strict),
///     Err(RenderError::UnsupportedContentType { type_name: "char" })
/// );
/// ```
pub fn render_with_config(
    renderable: &Renderable<'_>,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    debug!(
        segments = renderable.strings().len(),
        values = renderable.values().len(),
        strict = config.strict,
        "rendering template"
    );
    let mut renderer = HtmlRenderer::new(config.clone());
    renderer.push_renderable(renderable)?;
    Ok(renderer.finish())
}

/// Stringify a single value the way the renderer would
pub fn stringify(content: &Content<'_>) -> String {
    let mut renderer = HtmlRenderer::new(RenderConfig::default());
    match renderer.push_content(content) {
        Ok(()) => renderer.finish(),
        Err(err) => unreachable!("permissive rendering cannot fail: {}", err),
    }
}
