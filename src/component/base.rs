//! The base container template.

use serde::Deserialize;

use super::Component;
use crate::node::{Element, Node};
use crate::style::{StyleKey, StyleResolver};

/// Input for [`BaseTemplate`].
///
/// Deserializes from a props object. The legacy prop name `sampleTextProp`
/// is accepted as an alias of `content`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TemplateInput {
    #[serde(alias = "sampleTextProp")]
    pub content: String,
}

impl TemplateInput {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// A `div` container styled by a fixed key, holding the caller's text.
///
/// The class name comes from the resolver the template was built with,
/// looked up under [`BaseTemplate::STYLE_KEY`]. If the key is not registered
/// the container is rendered without a `class` attribute.
///
/// # Example
///
/// ```rust
/// use base_template::{BaseTemplate, ClassMap, TemplateInput};
///
/// let classes = ClassMap::new().add("container", "layout-box");
/// let template = BaseTemplate::new(classes);
///
/// let node = template.render(&TemplateInput::new("Hello"));
/// assert_eq!(node.class(), Some("layout-box"));
/// assert_eq!(node.text_content(), "Hello");
/// ```
#[derive(Debug, Clone)]
pub struct BaseTemplate<R> {
    resolver: R,
}

impl<R: StyleResolver> BaseTemplate<R> {
    /// The key the container's class is looked up under.
    pub const STYLE_KEY: StyleKey = StyleKey::from_static("container");

    /// Tag of the container element.
    pub const TAG: &'static str = "div";

    /// Creates a template that resolves its class through `resolver`.
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Returns the resolver this template was built with.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Renders `input.content` inside the styled container.
    pub fn render(&self, input: &TemplateInput) -> Node {
        let key = Self::STYLE_KEY;
        let class = self.resolver.resolve(&key);
        if class.is_none() {
            tracing::debug!(key = %key, "style key not registered, rendering unstyled");
        }

        Element::new(Self::TAG)
            .class_opt(class)
            .child(Node::text(input.content.as_str()))
            .into()
    }
}

impl<R: StyleResolver> Component for BaseTemplate<R> {
    type Input = TemplateInput;

    fn render(&self, input: &TemplateInput) -> Node {
        BaseTemplate::render(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{ClassMap, ClassValue, ResolvedClass};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tracing_test::traced_test;

    fn classes() -> ClassMap {
        ClassMap::new().add("container", "layout-box")
    }

    fn container(node: &Node) -> &Element {
        node.as_element().expect("root should be an element")
    }

    #[test]
    fn test_render_hello() {
        let node = BaseTemplate::new(classes()).render(&TemplateInput::new("Hello"));
        let root = container(&node);

        assert_eq!(root.tag(), "div");
        assert_eq!(root.class(), Some("layout-box"));
        assert_eq!(root.children(), &[Node::text("Hello")]);
    }

    #[test]
    fn test_render_empty_content() {
        let node = BaseTemplate::new(classes()).render(&TemplateInput::new(""));
        let root = container(&node);

        assert_eq!(root.class(), Some("layout-box"));
        assert_eq!(root.children(), &[Node::text("")]);
    }

    #[test]
    #[traced_test]
    fn test_render_unresolved_key_is_unstyled() {
        let node = BaseTemplate::new(ClassMap::new()).render(&TemplateInput::new("Hi"));
        let root = container(&node);

        assert_eq!(root.class(), None);
        assert!(root.attributes().is_empty());
        assert_eq!(root.children(), &[Node::text("Hi")]);
        assert!(logs_contain("style key not registered"));
    }

    #[test]
    fn test_render_follows_aliases() {
        let map = ClassMap::new()
            .add("surface", "relative flex")
            .add("container", ClassValue::alias("surface"));
        let node = BaseTemplate::new(&map).render(&TemplateInput::new("x"));
        assert_eq!(node.class(), Some("relative flex"));
    }

    #[test]
    fn test_render_broken_alias_is_unstyled() {
        let map = ClassMap::new().add("container", ClassValue::alias("missing"));
        let node = BaseTemplate::new(map).render(&TemplateInput::new("x"));
        assert_eq!(node.class(), None);
    }

    #[test]
    fn test_render_with_pre_resolved_class() {
        let template = BaseTemplate::new(ResolvedClass::new("card"));
        assert_eq!(template.render(&TemplateInput::new("x")).class(), Some("card"));

        let template = BaseTemplate::new(ResolvedClass::none());
        assert_eq!(template.render(&TemplateInput::new("x")).class(), None);
    }

    #[test]
    fn test_resolver_accessor_returns_shared_map() {
        let shared = Arc::new(classes());
        let template = BaseTemplate::new(Arc::clone(&shared));

        assert!(Arc::ptr_eq(template.resolver(), &shared));
        assert!(template.resolver().has("container"));
    }

    #[test]
    fn test_render_with_hashmap_resolver() {
        let map = HashMap::from([("container".to_string(), "grid".to_string())]);
        let node = BaseTemplate::new(map).render(&TemplateInput::new("x"));
        assert_eq!(node.class(), Some("grid"));
    }

    #[test]
    fn test_content_is_not_parsed() {
        let node =
            BaseTemplate::new(classes()).render(&TemplateInput::new("<b>bold</b> & co"));
        let root = container(&node);
        assert_eq!(root.children(), &[Node::text("<b>bold</b> & co")]);
    }

    #[test]
    fn test_component_trait_matches_inherent_render() {
        fn via_trait<C: Component<Input = TemplateInput>>(c: &C, input: &TemplateInput) -> Node {
            c.render(input)
        }
        let template = BaseTemplate::new(classes());
        let input = TemplateInput::new("same");
        assert_eq!(via_trait(&template, &input), template.render(&input));
    }

    #[test]
    fn test_input_deserializes_legacy_prop_name() {
        let input: TemplateInput =
            serde_json::from_str(r#"{"sampleTextProp": "legacy"}"#).unwrap();
        assert_eq!(input, TemplateInput::new("legacy"));

        let input: TemplateInput = serde_json::from_str(r#"{"content": "new"}"#).unwrap();
        assert_eq!(input, TemplateInput::new("new"));
    }

    #[test]
    fn test_input_missing_content_is_rejected() {
        let result: Result<TemplateInput, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_shared_resolver_across_threads() {
        let template = Arc::new(BaseTemplate::new(Arc::new(classes())));

        std::thread::scope(|scope| {
            for i in 0..4 {
                let template = Arc::clone(&template);
                scope.spawn(move || {
                    let node = template.render(&TemplateInput::new(format!("item {i}")));
                    assert_eq!(node.class(), Some("layout-box"));
                    assert_eq!(node.text_content(), format!("item {i}"));
                });
            }
        });
    }
}
