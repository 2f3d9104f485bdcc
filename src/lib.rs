//! # Base Template
//!
//! A presentational container component: it takes one piece of text content
//! and places it inside a `div` whose class name comes from a style lookup.
//!
//! The class lookup is an explicit dependency. Components are built with a
//! [`StyleResolver`] (usually a [`ClassMap`]) instead of reaching into a
//! global style module, which keeps rendering a pure function of its input.
//!
//! ## Quick Start
//!
//! ```rust
//! use base_template::{BaseTemplate, ClassMap, HtmlRenderer, TemplateInput};
//!
//! let classes = ClassMap::new().add("container", "layout-box");
//! let template = BaseTemplate::new(&classes);
//!
//! let node = template.render(&TemplateInput::new("Hello"));
//! assert_eq!(node.class(), Some("layout-box"));
//!
//! let html = HtmlRenderer::new().unwrap().render(&node).unwrap();
//! assert_eq!(html, r#"<div class="layout-box">Hello</div>"#);
//! ```
//!
//! ## Missing styles
//!
//! An unregistered style key never blocks rendering. The container is emitted
//! without a `class` attribute and a `tracing` debug event is recorded.
//! Call [`ClassMap::validate`] up front to catch broken aliases as errors.
//!
//! ## Class maps from configuration
//!
//! ```rust
//! use base_template::ClassMap;
//!
//! let yaml = r#"
//! surface: "relative flex min-h-screen flex-col"
//! container:
//!   alias: surface
//! "#;
//! let classes = ClassMap::from_yaml(yaml).unwrap();
//! assert!(classes.validate().is_ok());
//! ```

pub mod component;
pub mod node;
pub mod render;
pub mod style;

pub use component::{BaseTemplate, Component, TemplateInput};
pub use node::{Element, Node};
pub use render::{HtmlRenderer, RenderError};
pub use style::{
    ClassMap, ClassMapError, ClassValue, ResolvedClass, StyleKey, StyleResolver,
    StyleValidationError,
};
