//! Alpine.js attribute helpers.
//!
//! This crate maps Alpine.js directives to HTML attribute pairs and ships a
//! copy of the Alpine.js runtime:
//! - [`directives`]: the long `x-*` forms (`x-data`, `x-on:click`, ...)
//! - [`shorthand`]: the `@event` and `:attribute` forms
//! - [`modifiers`]: common directives with modifiers applied (`@click.away`, ...)
//! - [`asset`]: the embedded `alpine.min.js`
//!
//! Expressions are never parsed or escaped. Whatever renders the pairs into
//! HTML is responsible for escaping.

pub mod asset;
pub mod attribute;
pub mod directives;
pub mod modifiers;
pub mod shorthand;

pub use asset::{javascript, ASSET_PATH, MIME_TYPE};
pub use attribute::AttributePair;
pub use directives::*;
pub use modifiers::*;
pub use shorthand::*;
