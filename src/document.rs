//! Template documents loaded from TOML
//!
//! A document lists the literal segments of a template, the values spliced
//! between them, and optionally a `[render]` table:
//!
//! ```toml
//! segments = ["<p>Hello, ", "! You have ", " items.</p>"]
//! values = ["<Bob>", { unsafe = "<b>5</b>" }]
//!
//! [render]
//! strict = true
//! ```
//!
//! Values may be booleans, numbers, strings (escaped on output), arrays
//! (flattened), `{ unsafe = "..." }` tables (emitted verbatim), or
//! `{ template = { segments = [...], values = [...] } }` tables (nested).
//! Datetimes are not a content kind: they render through their TOML form,
//! or fail the render when `strict` is set.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use toml::value::Datetime;

use crate::error::{RenderError, TemplateError};
use crate::renderer::{render_with_config, RenderConfig};
use crate::template::{capture, mark_unsafe, Content, Renderable, Sequence};

/// Errors that can occur when loading or rendering a document
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read template document: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse template document TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// A template document with its render configuration
#[derive(Debug)]
pub struct Document {
    /// Configuration from the `[render]` table
    pub config: RenderConfig,
    /// The captured template
    pub template: Renderable<'static>,
}

/// TOML structure for deserializing documents
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlDocument {
    segments: Vec<String>,
    #[serde(default)]
    values: Vec<TomlValue>,
    #[serde(default)]
    render: RenderConfig,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlTemplate {
    segments: Vec<String>,
    #[serde(default)]
    values: Vec<TomlValue>,
}

#[derive(Deserialize)]
#[serde(
    untagged,
    expecting = "a boolean, number, string, datetime, array, \
                 `{ unsafe = \"...\" }` or `{ template = { segments = [...], values = [...] } }`"
)]
enum TomlValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Datetime(Datetime),
    List(Vec<TomlValue>),
    Marked(TomlMarked),
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum TomlMarked {
    Unsafe(String),
    Template(TomlTemplate),
}

impl TomlTemplate {
    fn into_renderable(self) -> Result<Renderable<'static>, TemplateError> {
        build(self.segments, self.values)
    }
}

fn build(
    segments: Vec<String>,
    values: Vec<TomlValue>,
) -> Result<Renderable<'static>, TemplateError> {
    let values = values
        .into_iter()
        .map(TomlValue::into_content)
        .collect::<Result<Vec<_>, _>>()?;
    capture(segments, values)
}

impl TomlValue {
    fn into_content(self) -> Result<Content<'static>, TemplateError> {
        Ok(match self {
            TomlValue::Boolean(b) => b.into(),
            TomlValue::Integer(n) => n.into(),
            TomlValue::Float(x) => x.into(),
            TomlValue::Text(s) => s.into(),
            TomlValue::Datetime(dt) => Content::display(dt),
            TomlValue::List(items) => items
                .into_iter()
                .map(TomlValue::into_content)
                .collect::<Result<Sequence<'static>, _>>()?
                .into(),
            TomlValue::Marked(TomlMarked::Unsafe(raw)) => mark_unsafe(raw).into(),
            TomlValue::Marked(TomlMarked::Template(t)) => t.into_renderable()?.into(),
        })
    }
}

impl Document {
    /// Load a document from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a document from a TOML string
    pub fn from_str(content: &str) -> Result<Self, DocumentError> {
        let parsed: TomlDocument = toml::from_str(content)?;
        Ok(Document {
            config: parsed.render,
            template: build(parsed.segments, parsed.values)?,
        })
    }

    /// Replace the render configuration
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Render the template with the document's configuration
    pub fn render(&self) -> Result<String, RenderError> {
        render_with_config(&self.template, &self.config)
    }
}
