//! `@` and `:` shorthand syntax.

use crate::AttributePair;
use smol_str::format_smolstr;

/// Event listener in `@` syntax: `at("click", "open = !open")` is
/// `@click="open = !open"`.
pub fn at(event: &str, handler: impl Into<String>) -> AttributePair {
    AttributePair::new(format_smolstr!("@{event}"), handler)
}

/// `@click`
pub fn at_click(handler: impl Into<String>) -> AttributePair {
    AttributePair::fixed("@click", handler)
}

/// `@submit`
pub fn at_submit(handler: impl Into<String>) -> AttributePair {
    AttributePair::fixed("@submit", handler)
}

/// `@change`
pub fn at_change(handler: impl Into<String>) -> AttributePair {
    AttributePair::fixed("@change", handler)
}

/// `@input`
pub fn at_input(handler: impl Into<String>) -> AttributePair {
    AttributePair::fixed("@input", handler)
}

/// `@keydown`
pub fn at_keydown(handler: impl Into<String>) -> AttributePair {
    AttributePair::fixed("@keydown", handler)
}

/// `@keyup`
pub fn at_keyup(handler: impl Into<String>) -> AttributePair {
    AttributePair::fixed("@keyup", handler)
}

/// `@mouseenter`
pub fn at_mouseenter(handler: impl Into<String>) -> AttributePair {
    AttributePair::fixed("@mouseenter", handler)
}

/// `@mouseleave`
pub fn at_mouseleave(handler: impl Into<String>) -> AttributePair {
    AttributePair::fixed("@mouseleave", handler)
}

/// Attribute binding in `:` syntax: `colon("class", "{ 'hidden': !open }")`
/// is `:class="{ 'hidden': !open }"`.
pub fn colon(attribute: &str, expression: impl Into<String>) -> AttributePair {
    AttributePair::new(format_smolstr!(":{attribute}"), expression)
}

/// `:class`
pub fn colon_class(expression: impl Into<String>) -> AttributePair {
    AttributePair::fixed(":class", expression)
}

/// `:style`
pub fn colon_style(expression: impl Into<String>) -> AttributePair {
    AttributePair::fixed(":style", expression)
}

/// `:disabled`
pub fn colon_disabled(expression: impl Into<String>) -> AttributePair {
    AttributePair::fixed(":disabled", expression)
}

/// `:value`
pub fn colon_value(expression: impl Into<String>) -> AttributePair {
    AttributePair::fixed(":value", expression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_at_generic() {
        let pair = at("click", "open = !open");
        assert_eq!(pair.key(), "@click");
        assert_eq!(pair.value(), "open = !open");

        assert_eq!(at("scroll.window", "y = scrollY").key(), "@scroll.window");
    }

    #[test]
    fn test_at_fixed_events() {
        let cases = [
            (at_click("h"), "click"),
            (at_submit("h"), "submit"),
            (at_change("h"), "change"),
            (at_input("h"), "input"),
            (at_keydown("h"), "keydown"),
            (at_keyup("h"), "keyup"),
            (at_mouseenter("h"), "mouseenter"),
            (at_mouseleave("h"), "mouseleave"),
        ];
        for (pair, event) in cases {
            assert_eq!(pair, at(event, "h"));
        }
    }

    #[test]
    fn test_colon_generic() {
        let pair = colon("class", "{ 'hidden': !open }");
        assert_eq!(pair.key(), ":class");
        assert_eq!(pair.value(), "{ 'hidden': !open }");
    }

    #[test]
    fn test_colon_fixed_attributes() {
        let cases = [
            (colon_class("e"), "class"),
            (colon_style("e"), "style"),
            (colon_disabled("e"), "disabled"),
            (colon_value("e"), "value"),
        ];
        for (pair, attribute) in cases {
            assert_eq!(pair, colon(attribute, "e"));
        }
    }
}
