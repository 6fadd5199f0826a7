//! Long-form `x-*` directives.
//!
//! Each helper maps one Alpine directive to its attribute name and passes the
//! expression through untouched.

use crate::AttributePair;
use smol_str::format_smolstr;

// Component state

/// Declare a component and its data, e.g. `x_data("{open: false}")`.
pub fn x_data(data: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-data", data)
}

/// Run code when the component initializes.
pub fn x_init(code: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-init", code)
}

// Display and rendering

/// Toggle visibility based on an expression.
pub fn x_show(expression: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-show", expression)
}

/// Conditionally render a block. Alpine requires this on a `<template>` tag.
pub fn x_if(expression: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-if", expression)
}

/// Repeat a block for each item, e.g. `x_for("item in items")`.
/// Alpine requires this on a `<template>` tag.
pub fn x_for(expression: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-for", expression)
}

/// Set the inner HTML of an element.
pub fn x_html(expression: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-html", expression)
}

/// Set the text content of an element.
pub fn x_text(expression: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-text", expression)
}

/// Hide an element until Alpine has initialized.
///
/// Pair with `[x-cloak] { display: none !important; }` in the page CSS.
pub fn x_cloak() -> AttributePair {
    AttributePair::marker("x-cloak")
}

// Events

/// Listen for a browser event: `x-on:{event}`.
pub fn x_on(event: &str, handler: impl Into<String>) -> AttributePair {
    AttributePair::new(format_smolstr!("x-on:{event}"), handler)
}

/// `x-on:click`
pub fn x_on_click(handler: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-on:click", handler)
}

/// `x-on:submit`
pub fn x_on_submit(handler: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-on:submit", handler)
}

/// `x-on:change`
pub fn x_on_change(handler: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-on:change", handler)
}

/// `x-on:input`
pub fn x_on_input(handler: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-on:input", handler)
}

/// `x-on:keydown`
pub fn x_on_keydown(handler: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-on:keydown", handler)
}

/// `x-on:keyup`
pub fn x_on_keyup(handler: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-on:keyup", handler)
}

/// `x-on:mouseenter`
pub fn x_on_mouseenter(handler: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-on:mouseenter", handler)
}

/// `x-on:mouseleave`
pub fn x_on_mouseleave(handler: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-on:mouseleave", handler)
}

// Attribute binding

/// Bind an HTML attribute to an expression: `x-bind:{attribute}`.
pub fn x_bind(attribute: &str, expression: impl Into<String>) -> AttributePair {
    AttributePair::new(format_smolstr!("x-bind:{attribute}"), expression)
}

/// `x-bind:class`
pub fn x_bind_class(expression: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-bind:class", expression)
}

/// `x-bind:style`
pub fn x_bind_style(expression: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-bind:style", expression)
}

/// `x-bind:disabled`
pub fn x_bind_disabled(expression: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-bind:disabled", expression)
}

/// `x-bind:value`
pub fn x_bind_value(expression: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-bind:value", expression)
}

// Two-way binding

/// Two-way bind a form input to a data property.
pub fn x_model(expression: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-model", expression)
}

/// Expose a property so a parent can bind it with `x-model`.
pub fn x_modelable(expression: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-modelable", expression)
}

// Transitions

/// Apply Alpine's default transition.
pub fn x_transition() -> AttributePair {
    AttributePair::marker("x-transition")
}

/// Classes applied during the whole enter phase.
pub fn x_transition_enter(classes: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-transition:enter", classes)
}

/// Classes applied before the element is inserted.
pub fn x_transition_enter_start(classes: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-transition:enter-start", classes)
}

/// Classes applied one frame after insertion.
pub fn x_transition_enter_end(classes: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-transition:enter-end", classes)
}

/// Classes applied during the whole leave phase.
pub fn x_transition_leave(classes: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-transition:leave", classes)
}

/// Classes applied when the leave phase starts.
pub fn x_transition_leave_start(classes: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-transition:leave-start", classes)
}

/// Classes applied one frame after the leave phase starts.
pub fn x_transition_leave_end(classes: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-transition:leave-end", classes)
}

// Everything else

/// Re-run an expression whenever its dependencies change.
pub fn x_effect(expression: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-effect", expression)
}

/// Register the element under `$refs.{name}`.
pub fn x_ref(name: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-ref", name)
}

/// Move the template content to the element matching `selector`.
pub fn x_teleport(selector: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-teleport", selector)
}

/// Tell Alpine to skip this subtree.
pub fn x_ignore() -> AttributePair {
    AttributePair::marker("x-ignore")
}

/// Scope `$id()` generation, e.g. `x_id("['input', 'label']")`.
pub fn x_id(expression: impl Into<String>) -> AttributePair {
    AttributePair::fixed("x-id", expression)
}
