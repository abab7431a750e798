//! HTML to Markdown conversion over the owned node tree.
//!
//! - [`tag`]: closed set of element kinds and name resolution
//! - `main`: the recursive dispatcher and the per-tag rule table
//! - `list` / `table`: structured sub-renderers for lists and pipe tables
//! - `text`: whitespace normalization for text nodes

mod list;
pub(crate) mod main;
mod table;
pub mod tag;
mod text;

pub use tag::Tag;
