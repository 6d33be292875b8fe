//! Values that can be interpolated into a template
//!
//! [`Content`] is the closed set of value kinds the renderer understands.
//! Every variant is classified by a single exhaustive match in the renderer,
//! so adding a kind here forces the renderer to decide how to emit it.

use std::borrow::Cow;
use std::cell::Cell;
use std::fmt;

use super::Renderable;

/// A value spliced between two literal segments
pub enum Content<'a> {
    /// Numbers are emitted verbatim; they cannot contain markup
    Number(Number),
    /// Booleans are emitted as `true` / `false`
    Boolean(bool),
    /// Plain text, HTML-escaped on output
    Text(Cow<'a, str>),
    /// Text the caller vouches for, emitted without escaping
    Unsafe(Unsafe<Cow<'a, str>>),
    /// A nested template, rendered recursively
    Nested(Box<Renderable<'a>>),
    /// A sequence of content, flattened with no separator
    Sequence(Sequence<'a>),
    /// Any other displayable value, emitted through its `Display` impl
    Display(Opaque<'a>),
}

impl<'a> Content<'a> {
    /// Wrap an arbitrary displayable value.
    ///
    /// The value is emitted verbatim by a permissive renderer and rejected
    /// by a strict one.
    pub fn display<T>(value: T) -> Self
    where
        T: fmt::Display + 'a,
    {
        Content::Display(Opaque {
            type_name: std::any::type_name::<T>(),
            value: Box::new(value),
        })
    }

    /// Short name of the variant, used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            Content::Number(_) => "number",
            Content::Boolean(_) => "boolean",
            Content::Text(_) => "text",
            Content::Unsafe(_) => "unsafe",
            Content::Nested(_) => "nested",
            Content::Sequence(_) => "sequence",
            Content::Display(_) => "display",
        }
    }
}

impl fmt::Debug for Content<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Content::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Content::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Content::Unsafe(u) => f.debug_tuple("Unsafe").field(u).finish(),
            Content::Nested(r) => f.debug_tuple("Nested").field(r).finish(),
            Content::Sequence(s) => f.debug_tuple("Sequence").field(s).finish(),
            Content::Display(o) => f.debug_tuple("Display").field(o).finish(),
        }
    }
}

/// Numeric content
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(n) => write!(f, "{}", n),
            Number::UInt(n) => write!(f, "{}", n),
            Number::Float(x) if x.is_nan() => f.write_str("NaN"),
            Number::Float(x) if x.is_infinite() => {
                f.write_str(if x > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // -0 prints as 0
            Number::Float(x) if x == 0.0 => f.write_str("0"),
            Number::Float(x) if x.abs() >= 1e21 || x.abs() < 1e-6 => write_exponent(f, x),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

/// Exponent form with an explicit sign on the exponent, e.g. `1e+21`, `1.5e-7`
fn write_exponent(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let formatted = format!("{:e}", x);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, exponent)
        }
        _ => f.write_str(&formatted),
    }
}

/// Marks a value as trusted HTML that must not be escaped
///
/// Wrapping a value is an assertion by the caller that its string form is
/// safe to emit verbatim, e.g. pre-rendered markup or an inline JSON blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unsafe<A>(A);

impl<A> Unsafe<A> {
    pub fn new(value: A) -> Self {
        Unsafe(value)
    }

    pub fn value(&self) -> &A {
        &self.0
    }

    pub fn into_inner(self) -> A {
        self.0
    }
}

/// Mark a value as safe to emit without HTML escaping
///
/// # Example
///
/// ```rust
/// use splice_html::{mark_unsafe, render_to_string, t};
///
/// let html = render_to_string(&t!("<p>" {mark_unsafe("<b>hi</b>")} "</p>"));
/// assert_eq!(html, "<p><b>hi</b></p>");
/// ```
pub fn mark_unsafe<A>(value: A) -> Unsafe<A> {
    Unsafe(value)
}

/// A displayable value outside the known content kinds
pub struct Opaque<'a> {
    type_name: &'static str,
    value: Box<dyn fmt::Display + 'a>,
}

impl Opaque<'_> {
    /// Type name of the wrapped value
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Display for Opaque<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl fmt::Debug for Opaque<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opaque")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

type LazyItems<'a> = Box<dyn Iterator<Item = Content<'a>> + 'a>;

/// A forward, finite sequence of content
///
/// An eager sequence holds its items and can be rendered any number of
/// times. A lazy sequence wraps an iterator and is single-pass: the first
/// render consumes it, and every later render sees it as empty. A lazy
/// sequence is not `Sync`, so two threads can never race on consuming it:
///
/// ```compile_fail
/// use splice_html::Sequence;
///
/// fn share<T: Sync>(_: &T) {}
///
/// let rows = Sequence::lazy(vec![1, 2, 3]);
/// share(&rows);
/// ```
pub struct Sequence<'a> {
    items: SequenceItems<'a>,
}

enum SequenceItems<'a> {
    Eager(Vec<Content<'a>>),
    Lazy(Cell<Option<LazyItems<'a>>>),
}

impl<'a> Sequence<'a> {
    /// Create an eager sequence from a list of items
    pub fn new<T>(items: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<Content<'a>>,
    {
        items.into_iter().collect()
    }

    /// Create a single-pass sequence that pulls items from `iter` during rendering
    ///
    /// # Example
    ///
    /// ```rust
    /// use splice_html::{render_to_string, t, Sequence};
    ///
    /// let rows = Sequence::lazy((1..=3).map(|n| t!("<li>" {n} "</li>")));
    /// let html = render_to_string(&t!("<ul>" {rows} "</ul>"));
    /// assert_eq!(html, "<ul><li>1</li><li>2</li><li>3</li></ul>");
    /// ```
    pub fn lazy<I>(iter: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Content<'a>> + 'a,
        I::IntoIter: 'a,
    {
        let items: LazyItems<'a> = Box::new(iter.into_iter().map(Into::into));
        Sequence {
            items: SequenceItems::Lazy(Cell::new(Some(items))),
        }
    }

    /// Create an empty sequence
    pub fn empty() -> Self {
        Sequence {
            items: SequenceItems::Eager(Vec::new()),
        }
    }

    /// Whether this sequence is single-pass
    pub fn is_lazy(&self) -> bool {
        matches!(self.items, SequenceItems::Lazy(_))
    }

    /// Visit every item in order.
    ///
    /// Returns `Ok(false)` when a lazy sequence was already consumed by an
    /// earlier pass. A lazy sequence is consumed even when `visit` fails.
    pub(crate) fn try_for_each<E>(
        &self,
        mut visit: impl FnMut(&Content<'a>) -> Result<(), E>,
    ) -> Result<bool, E> {
        match &self.items {
            SequenceItems::Eager(items) => {
                for item in items {
                    visit(item)?;
                }
                Ok(true)
            }
            SequenceItems::Lazy(cell) => {
                let Some(iter) = cell.take() else {
                    return Ok(false);
                };
                for item in iter {
                    visit(&item)?;
                }
                Ok(true)
            }
        }
    }
}

impl fmt::Debug for Sequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.items {
            SequenceItems::Eager(items) => f.debug_list().entries(items).finish(),
            SequenceItems::Lazy(_) => f.write_str("Sequence(<lazy>)"),
        }
    }
}

impl<'a, T> FromIterator<T> for Sequence<'a>
where
    T: Into<Content<'a>>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence {
            items: SequenceItems::Eager(iter.into_iter().map(Into::into).collect()),
        }
    }
}

macro_rules! impl_from_number {
    ($variant:ident as $target:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for Content<'_> {
                fn from(n: $ty) -> Self {
                    Content::Number(Number::$variant(n as $target))
                }
            }
        )*
    };
}

impl_from_number!(Int as i64: i8, i16, i32, i64, isize);
impl_from_number!(UInt as u64: u8, u16, u32, u64, usize);
impl_from_number!(Float as f64: f64);

/// Widens through the shortest decimal form, so `0.1f32` prints as `0.1`
impl From<f32> for Content<'_> {
    fn from(x: f32) -> Self {
        let widened = x.to_string().parse::<f64>().unwrap_or(f64::from(x));
        Content::Number(Number::Float(widened))
    }
}

impl From<Number> for Content<'_> {
    fn from(n: Number) -> Self {
        Content::Number(n)
    }
}

impl From<bool> for Content<'_> {
    fn from(b: bool) -> Self {
        Content::Boolean(b)
    }
}

impl<'a> From<&'a str> for Content<'a> {
    fn from(s: &'a str) -> Self {
        Content::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Content<'a> {
    fn from(s: &'a String) -> Self {
        Content::Text(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for Content<'_> {
    fn from(s: String) -> Self {
        Content::Text(Cow::Owned(s))
    }
}

impl<'a> From<Cow<'a, str>> for Content<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        Content::Text(s)
    }
}

impl<A: fmt::Display> From<Unsafe<A>> for Content<'_> {
    fn from(u: Unsafe<A>) -> Self {
        Content::Unsafe(Unsafe(Cow::Owned(u.0.to_string())))
    }
}

impl<'a> From<Renderable<'a>> for Content<'a> {
    fn from(r: Renderable<'a>) -> Self {
        Content::Nested(Box::new(r))
    }
}

impl<'a> From<Sequence<'a>> for Content<'a> {
    fn from(s: Sequence<'a>) -> Self {
        Content::Sequence(s)
    }
}

impl<'a, T: Into<Content<'a>>> From<Vec<T>> for Content<'a> {
    fn from(items: Vec<T>) -> Self {
        Content::Sequence(items.into_iter().collect())
    }
}

impl<'a, T: Into<Content<'a>>, const N: usize> From<[T; N]> for Content<'a> {
    fn from(items: [T; N]) -> Self {
        Content::Sequence(items.into_iter().collect())
    }
}

/// `None` renders as nothing
impl<'a, T: Into<Content<'a>>> From<Option<T>> for Content<'a> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Content::Sequence(Sequence::empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display() {
        assert_eq!(Number::Int(-42).to_string(), "-42");
        assert_eq!(Number::UInt(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(Number::Float(2.5).to_string(), "2.5");
        assert_eq!(Number::Float(1.0).to_string(), "1");
        assert_eq!(Number::Float(-0.0).to_string(), "0");
        assert_eq!(Number::Float(f64::NAN).to_string(), "NaN");
        assert_eq!(Number::Float(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Number::Float(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn test_number_display_exponent_thresholds() {
        assert_eq!(Number::Float(1e21).to_string(), "1e+21");
        assert_eq!(Number::Float(-2.5e22).to_string(), "-2.5e+22");
        assert_eq!(Number::Float(1e20).to_string(), "100000000000000000000");
        assert_eq!(Number::Float(1e-7).to_string(), "1e-7");
        assert_eq!(Number::Float(-1.5e-7).to_string(), "-1.5e-7");
        assert_eq!(Number::Float(1e-6).to_string(), "0.000001");
    }

    #[test]
    fn test_f32_keeps_shortest_decimal() {
        let rendered = |x: f32| match Content::from(x) {
            Content::Number(n) => n.to_string(),
            other => panic!("expected number content, got {:?}", other),
        };
        assert_eq!(rendered(0.1), "0.1");
        assert_eq!(rendered(0.3), "0.3");
        assert_eq!(rendered(1e-7), "1e-7");
        assert_eq!(rendered(f32::NAN), "NaN");
        assert_eq!(rendered(f32::INFINITY), "Infinity");
    }

    #[test]
    fn test_conversions_pick_variant() {
        assert_eq!(Content::from(3u8).kind(), "number");
        assert_eq!(Content::from(3.5f32).kind(), "number");
        assert_eq!(Content::from(true).kind(), "boolean");
        assert_eq!(Content::from("x").kind(), "text");
        assert_eq!(Content::from(String::from("x")).kind(), "text");
        assert_eq!(Content::from(mark_unsafe("<b>")).kind(), "unsafe");
        assert_eq!(Content::from(vec![1, 2]).kind(), "sequence");
        assert_eq!(Content::from(["a", "b"]).kind(), "sequence");
        assert_eq!(Content::from(None::<&str>).kind(), "sequence");
        assert_eq!(Content::from(Some("a")).kind(), "text");
        assert_eq!(Content::display('c').kind(), "display");
    }

    #[test]
    fn test_unsafe_keeps_display_form() {
        match Content::from(mark_unsafe(7)) {
            Content::Unsafe(u) => assert_eq!(u.value(), "7"),
            other => panic!("expected unsafe content, got {:?}", other),
        }
    }

    #[test]
    fn test_opaque_records_type_name() {
        match Content::display('c') {
            Content::Display(o) => {
                assert_eq!(o.type_name(), "char");
                assert_eq!(o.to_string(), "c");
            }
            other => panic!("expected display content, got {:?}", other),
        }
    }

    #[test]
    fn test_eager_sequence_is_repeatable() {
        let seq = Sequence::new(["a", "b"]);
        assert!(!seq.is_lazy());
        for _ in 0..2 {
            let mut seen = Vec::new();
            let visited = seq
                .try_for_each(|c| {
                    seen.push(c.kind());
                    Ok::<_, ()>(())
                })
                .unwrap();
            assert!(visited);
            assert_eq!(seen, vec!["text", "text"]);
        }
    }

    #[test]
    fn test_lazy_sequence_is_single_pass() {
        let pulled = Cell::new(0);
        let seq = Sequence::lazy((0..3).inspect(|_| pulled.set(pulled.get() + 1)));
        assert!(seq.is_lazy());

        let mut count = 0;
        assert!(seq
            .try_for_each(|_| {
                count += 1;
                Ok::<_, ()>(())
            })
            .unwrap());
        assert_eq!(count, 3);
        assert_eq!(pulled.get(), 3);

        assert!(!seq.try_for_each(|_| Ok::<_, ()>(())).unwrap());
        assert_eq!(pulled.get(), 3);
    }

    #[test]
    fn test_lazy_sequence_consumed_on_error() {
        let seq = Sequence::lazy(vec![1, 2, 3]);
        let result = seq.try_for_each(|_| Err("stop"));
        assert_eq!(result, Err("stop"));
        assert_eq!(seq.try_for_each(|_| Ok::<_, &str>(())), Ok(false));
    }

    #[test]
    fn test_sequence_debug() {
        assert_eq!(format!("{:?}", Sequence::lazy(vec![1])), "Sequence(<lazy>)");
        assert_eq!(
            format!("{:?}", Sequence::new(vec![true])),
            "[Boolean(true)]"
        );
    }
}
