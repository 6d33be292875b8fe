//! Error types for template capture and rendering

use thiserror::Error;

/// Errors raised while capturing a template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The literal segments do not bracket the interpolated values
    #[error(
        "invalid template shape: {segments} segment(s) for {values} value(s), expected {}",
        .values + 1
    )]
    InvalidTemplateShape { segments: usize, values: usize },
}

impl TemplateError {
    /// Check the `segments == values + 1` invariant
    pub fn check_shape(segments: usize, values: usize) -> Result<(), TemplateError> {
        if segments == values + 1 {
            Ok(())
        } else {
            Err(TemplateError::InvalidTemplateShape { segments, values })
        }
    }
}

/// Errors raised while rendering a captured template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Strict mode refused a value outside the content union
    #[error("unsupported content type: {type_name}")]
    UnsupportedContentType { type_name: &'static str },
}
