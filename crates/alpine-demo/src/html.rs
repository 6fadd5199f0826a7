//! A small HTML builder that accepts Alpine attribute pairs.

use alpine_attrs::AttributePair;
use indexmap::IndexMap;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A node in the document tree.
#[derive(Debug, Clone)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// Text, escaped on render.
    Text(String),
    /// Markup written as-is (inline CSS).
    Raw(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An HTML element.
#[derive(Debug, Clone)]
pub struct Element {
    tag: &'static str,
    /// Setting a key twice keeps its first position and the last value.
    attrs: IndexMap<String, String>,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Set a plain attribute. An empty value renders as a bare name.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Set an Alpine directive attribute.
    pub fn alpine(self, pair: AttributePair) -> Self {
        let (key, value): (String, String) = pair.into();
        self.attr(key, value)
    }

    /// Shorthand for the `class` attribute.
    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    /// Append a child node.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append escaped text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Append unescaped markup.
    pub fn raw(mut self, markup: impl Into<String>) -> Self {
        self.children.push(Node::Raw(markup.into()));
        self
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag)
    }

    /// Render this element and its subtree.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (key, value) in &self.attrs {
            out.push(' ');
            out.push_str(key);
            if !value.is_empty() {
                out.push_str("=\"");
                escape_into(value, true, out);
                out.push('"');
            }
        }
        out.push('>');

        if self.is_void() {
            return;
        }

        for child in &self.children {
            match child {
                Node::Element(element) => element.write_to(out),
                Node::Text(text) => escape_into(text, false, out),
                Node::Raw(markup) => out.push_str(markup),
            }
        }

        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

/// Render a full document with a doctype.
pub fn document(root: Element) -> String {
    format!("<!DOCTYPE html>{}", root.render())
}

fn escape_into(s: &str, in_attribute: bool, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alpine_attrs::{at_click, x_cloak, x_data, x_show};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_alpine_attributes() {
        let html = Element::new("div")
            .alpine(x_data("{ open: false }"))
            .child(
                Element::new("button")
                    .alpine(at_click("open = !open"))
                    .text("Toggle"),
            )
            .child(Element::new("p").alpine(x_show("open")).alpine(x_cloak()).text("Hi"))
            .render();
        insta::assert_snapshot!(html, @r#"<div x-data="{ open: false }"><button @click="open = !open">Toggle</button><p x-show="open" x-cloak>Hi</p></div>"#);
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let html = Element::new("span")
            .attr("title", "a \"b\" & <c>")
            .text("x < y && 'z'")
            .render();
        assert_eq!(
            html,
            "<span title=\"a &quot;b&quot; &amp; &lt;c&gt;\">x &lt; y &amp;&amp; 'z'</span>"
        );
    }

    #[test]
    fn test_raw_is_not_escaped() {
        let html = Element::new("style").raw("a > b { color: red; }").render();
        assert_eq!(html, "<style>a > b { color: red; }</style>");
    }

    #[test]
    fn test_void_element() {
        let html = Element::new("input")
            .attr("type", "text")
            .text("ignored")
            .render();
        assert_eq!(html, "<input type=\"text\">");
    }

    #[test]
    fn test_repeated_attribute_keeps_position() {
        let el = Element::new("div")
            .class("a")
            .attr("id", "x")
            .class("b");
        assert_eq!(el.render(), "<div class=\"b\" id=\"x\"></div>");
    }

    #[test]
    fn test_document_has_doctype() {
        let out = document(Element::new("html"));
        assert_eq!(out, "<!DOCTYPE html><html></html>");
    }
}
