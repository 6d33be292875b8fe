//! HTML renderer for captured templates
//!
//! This module walks a Renderable and produces a single string,
//! escaping plain text and passing trusted content through verbatim.

pub mod config;
pub mod escape;
pub mod html;

pub use config::{ConfigError, RenderConfig};
pub use escape::{escape_html, escape_html_into};
pub use html::{render_to_string, render_with_config, stringify, HtmlRenderer};
