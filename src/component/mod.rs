//! Components: functions from typed input to a [`Node`] tree.
//!
//! - [`Component`]: The common render interface
//! - [`BaseTemplate`]: A styled container holding one piece of text
//! - [`TemplateInput`]: The input record for [`BaseTemplate`]

mod base;

pub use base::{BaseTemplate, TemplateInput};

use crate::node::Node;

/// A presentational unit that renders its input into a node tree.
///
/// Rendering must be pure: the same input and the same style mapping always
/// produce the same tree.
pub trait Component {
    /// The input record consumed by one render.
    type Input;

    /// Renders `input` into a tree.
    fn render(&self, input: &Self::Input) -> Node;
}
