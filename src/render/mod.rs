//! Serializing rendered trees to markup.
//!
//! [`HtmlRenderer`] turns a [`Node`](crate::Node) tree into an HTML string
//! using a MiniJinja environment with HTML auto-escaping, so text content
//! can never become structure.

mod error;
mod html;

pub use error::RenderError;
pub use html::HtmlRenderer;
