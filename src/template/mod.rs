//! Template capture
//!
//! This module holds the immutable [`Renderable`] record and the [`Content`]
//! values that can be spliced into it. Templates are built either with
//! [`capture`], which checks the segment/value shape at runtime, or with the
//! [`t!`](crate::t) macro, whose grammar makes a malformed shape impossible.
//!
//! # Example
//!
//! ```rust
//! use splice_html::{render_to_string, t};
//!
//! let items = vec!["apples", "pears & plums"];
//! let list = t!("<ul>" {items.iter().map(|i| t!("<li>" {*i} "</li>")).collect::<Vec<_>>()} "</ul>");
//! assert_eq!(
//!     render_to_string(&list),
//!     "<ul><li>apples</li><li>pears &amp; plums</li></ul>"
//! );
//! ```

mod content;
mod renderable;

pub use content::{mark_unsafe, Content, Number, Opaque, Sequence, Unsafe};
pub use renderable::{capture, Renderable};
