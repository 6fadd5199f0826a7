//! Directives with common modifiers already applied.

use crate::AttributePair;
use smol_str::format_smolstr;

/// Fire when a click lands outside the element (`@click.away`).
pub fn at_click_away(handler: impl Into<String>) -> AttributePair {
    AttributePair::fixed("@click.away", handler)
}

/// Alias of [`at_click_away`] using the newer `.outside` modifier.
pub fn at_click_outside(handler: impl Into<String>) -> AttributePair {
    AttributePair::fixed("@click.outside", handler)
}

/// Click listener that calls `preventDefault()`.
pub fn at_click_prevent(handler: impl Into<String>) -> AttributePair {
    AttributePair::fixed("@click.prevent", handler)
}

/// Click listener that stops propagation.
pub fn at_click_stop(handler: impl Into<String>) -> AttributePair {
    AttributePair::fixed("@click.stop", handler)
}

/// Submit listener that prevents the browser's form submission.
pub fn at_submit_prevent(handler: impl Into<String>) -> AttributePair {
    AttributePair::fixed("@submit.prevent", handler)
}

/// `@keydown.escape`
pub fn at_keydown_escape(handler: impl Into<String>) -> AttributePair {
    AttributePair::fixed("@keydown.escape", handler)
}

/// `@keydown.enter`
pub fn at_keydown_enter(handler: impl Into<String>) -> AttributePair {
    AttributePair::fixed("@keydown.enter", handler)
}

/// Keydown listener attached to `window`.
pub fn at_keydown_window(handler: impl Into<String>) -> AttributePair {
    AttributePair::fixed("@keydown.window", handler)
}

/// Sync the model on `change` instead of `input`.
pub fn x_model_lazy(expression: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-model.lazy", expression)
}

/// Cast the input value to a number.
pub fn x_model_number(expression: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-model.number", expression)
}

/// Debounce model updates: `x_model_debounce("search", "500ms")` is
/// `x-model.debounce.500ms="search"`.
pub fn x_model_debounce(expression: impl Into<String>, delay: &str) -> AttributePair {
    AttributePair::new(format_smolstr!("x-model.debounce.{delay}"), expression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_event_modifiers() {
        let cases = [
            (at_click_away("close()"), "@click.away"),
            (at_click_outside("close()"), "@click.outside"),
            (at_click_prevent("close()"), "@click.prevent"),
            (at_click_stop("close()"), "@click.stop"),
            (at_submit_prevent("close()"), "@submit.prevent"),
            (at_keydown_escape("close()"), "@keydown.escape"),
            (at_keydown_enter("close()"), "@keydown.enter"),
            (at_keydown_window("close()"), "@keydown.window"),
        ];
        for (pair, key) in cases {
            assert_eq!(pair.key(), key);
            assert_eq!(pair.value(), "close()");
        }
    }

    #[test]
    fn test_model_modifiers() {
        assert_eq!(x_model_lazy("q").key(), "x-model.lazy");
        assert_eq!(x_model_number("qty").key(), "x-model.number");
        assert_eq!(x_model_number("qty").value(), "qty");
    }

    #[test]
    fn test_debounce_uses_delay_as_suffix() {
        let pair = x_model_debounce("searchQuery", "500ms");
        assert_eq!(pair.key(), "x-model.debounce.500ms");
        assert_eq!(pair.value(), "searchQuery");

        assert_eq!(x_model_debounce("q", "").key(), "x-model.debounce.");
    }
}
