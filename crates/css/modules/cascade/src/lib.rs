//! Rules and style sheets: the units the cascade merges.
//!
//! A [`Rule`] pairs a [`Selector`](css_selectors::Selector) with a shared
//! [`PropertyList`](css_properties::PropertyList). A [`StyleSheet`] is an
//! append-only sequence of rules applied in declaration order, so on
//! conflicting names the later rule wins.

#![forbid(unsafe_code)]

mod rules;
mod stylesheet;

pub use rules::Rule;
pub use stylesheet::StyleSheet;
