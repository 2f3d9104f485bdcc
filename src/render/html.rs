//! MiniJinja-backed HTML serializer.

use minijinja::{context, Environment, Value};

use super::error::RenderError;
use crate::component::Component;
use crate::node::{Element, Node};

const ELEMENT_TEMPLATE: &str = r#"<{{ tag }}{% for name, value in attributes %} {{ name }}="{{ value }}"{% endfor %}>{{ children }}</{{ tag }}>"#;
const TEXT_TEMPLATE: &str = "{{ text }}";

/// Serializes [`Node`] trees to HTML.
///
/// Templates are compiled once when the renderer is created. Text and
/// attribute values are HTML-escaped; tag and attribute names are checked
/// against a conservative character set instead.
///
/// Escaping follows MiniJinja's HTML rules, which also encode `/` as `&#x2f;`
/// and `'` as `&#x27;`. A class such as `w-1/2` is emitted as
/// `class="w-1&#x2f;2"`. Browsers decode it to the same value, but hosts
/// comparing output strings should expect the encoded form.
///
/// # Example
///
/// ```rust
/// use base_template::{Element, HtmlRenderer, Node};
///
/// let node: Node = Element::new("div")
///     .attr("class", "layout-box")
///     .child(Node::text("a < b"))
///     .into();
///
/// let html = HtmlRenderer::new().unwrap().render(&node).unwrap();
/// assert_eq!(html, r#"<div class="layout-box">a &lt; b</div>"#);
/// ```
pub struct HtmlRenderer {
    env: Environment<'static>,
}

impl HtmlRenderer {
    /// Creates a renderer with the element and text templates registered.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if a built-in template fails to compile.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        // `.html` names turn on HTML auto-escaping.
        env.add_template("element.html", ELEMENT_TEMPLATE)?;
        env.add_template("text.html", TEXT_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Renders a tree to an HTML string.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidName`] if a tag or attribute name is not
    /// a plain markup identifier, or [`RenderError::Template`] if MiniJinja
    /// fails.
    pub fn render(&self, node: &Node) -> Result<String, RenderError> {
        match node {
            Node::Text { text } => {
                let tmpl = self.env.get_template("text.html")?;
                Ok(tmpl.render(context! { text => text })?)
            }
            Node::Element(element) => self.render_element(element),
        }
    }

    /// Renders a component with `input` and serializes the result.
    ///
    /// # Errors
    ///
    /// See [`render`](HtmlRenderer::render).
    pub fn render_component<C: Component>(
        &self,
        component: &C,
        input: &C::Input,
    ) -> Result<String, RenderError> {
        self.render(&component.render(input))
    }

    fn render_element(&self, element: &Element) -> Result<String, RenderError> {
        check_name(element.tag())?;
        for (name, _) in element.attributes() {
            check_name(name)?;
        }

        let mut children = String::new();
        for child in element.children() {
            children.push_str(&self.render(child)?);
        }

        let tmpl = self.env.get_template("element.html")?;
        Ok(tmpl.render(context! {
            tag => element.tag(),
            attributes => element.attributes(),
            children => Value::from_safe_string(children),
        })?)
    }
}

fn check_name(name: &str) -> Result<(), RenderError> {
    let valid = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'));
    if valid {
        Ok(())
    } else {
        Err(RenderError::InvalidName {
            name: name.to_string(),
        })
    }
}
