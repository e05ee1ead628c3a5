//! Template module - literal placeholder substitution and verification
//!
//! ## Syntax
//!
//! - Plain placeholders: `{{NAME}}`, replaced with the raw value
//! - Encoded placeholders: `{{||NAME||}}`, replaced with the HTML-escaped value
//! - `NAME` matches `[0-9a-zA-Z-]+`
//!
//! There are no loops, conditionals or includes. Anything that still looks
//! like a placeholder after rendering is reported by [`RenderVerifier`].

pub mod grammar;
pub mod render;
pub mod verify;

pub use grammar::{DelimiterPair, Delimiters, PlaceholderGrammar, PlaceholderToken, TokenVariant};
pub use render::{escape_html, render, TemplateRenderer};
pub use verify::RenderVerifier;
