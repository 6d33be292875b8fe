//! Captured templates

use std::borrow::Cow;
use std::fmt;

use crate::error::TemplateError;

use super::Content;

/// An immutable template: literal segments interleaved with values
///
/// Segment `i` is emitted before value `i`, and the final segment after the
/// last value, so there is always exactly one more segment than values.
#[derive(Debug)]
pub struct Renderable<'a> {
    strings: Vec<Cow<'a, str>>,
    values: Vec<Content<'a>>,
}

impl<'a> Renderable<'a> {
    /// Literal segments, one more than [`Renderable::values`]
    pub fn strings(&self) -> &[Cow<'a, str>] {
        &self.strings
    }

    /// Interpolated values
    pub fn values(&self) -> &[Content<'a>] {
        &self.values
    }

    /// Whether the template has no interpolated values
    pub fn is_static(&self) -> bool {
        self.values.is_empty()
    }

    /// Build from parts whose shape is guaranteed by the `t!` macro grammar
    ///
    /// # Panics
    ///
    /// Panics when there is not exactly one more segment than values.
    #[doc(hidden)]
    pub fn from_parts(strings: Vec<Cow<'a, str>>, values: Vec<Content<'a>>) -> Self {
        assert_eq!(
            strings.len(),
            values.len() + 1,
            "template needs exactly one more segment than values"
        );
        Renderable { strings, values }
    }
}

/// Renders permissively, escaping plain text
impl fmt::Display for Renderable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::renderer::render_to_string(self))
    }
}

/// Capture literal segments and interpolated values into a [`Renderable`]
///
/// Fails with [`TemplateError::InvalidTemplateShape`] unless there is
/// exactly one more segment than values.
///
/// # Example
///
/// ```rust
/// use splice_html::{capture, mark_unsafe, render_to_string, Content};
///
/// let page = capture(
///     ["Hello, ", "! You have ", " items."],
///     [Content::from("<Bob>"), mark_unsafe("<b>5</b>").into()],
/// )
/// .unwrap();
///
/// assert_eq!(
///     render_to_string(&page),
///     "Hello, &lt;Bob&gt;! You have <b>5</b> items."
/// );
/// ```
pub fn capture<'a, S, V>(
    strings: impl IntoIterator<Item = S>,
    values: impl IntoIterator<Item = V>,
) -> Result<Renderable<'a>, TemplateError>
where
    S: Into<Cow<'a, str>>,
    V: Into<Content<'a>>,
{
    let strings: Vec<Cow<'a, str>> = strings.into_iter().map(Into::into).collect();
    let values: Vec<Content<'a>> = values.into_iter().map(Into::into).collect();
    TemplateError::check_shape(strings.len(), values.len())?;
    Ok(Renderable { strings, values })
}

/// Capture a template from alternating literals and `{expr}` values
///
/// The macro grammar starts and ends with a literal, so the segment count is
/// always one more than the value count and no shape check is needed.
///
/// # Example
///
/// ```rust
/// use splice_html::{render_to_string, t};
///
/// let name = "<Bob>";
/// let page = t!("Hello, " {name} "! You have " {3} " items.");
/// assert_eq!(
///     render_to_string(&page),
///     "Hello, &lt;Bob&gt;! You have 3 items."
/// );
/// ```
#[macro_export]
macro_rules! t {
    ($first:literal $( { $value:expr } $segment:literal )*) => {
        $crate::Renderable::from_parts(
            ::std::vec![
                ::std::borrow::Cow::Borrowed($first)
                $(, ::std::borrow::Cow::Borrowed($segment))*
            ],
            ::std::vec![$($crate::Content::from($value)),*],
        )
    };
}
