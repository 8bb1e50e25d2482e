//! Core module of the CSS engine: the cascade context.
//!
//! A [`CssContext`] stores author and user rules by [`PrimaryOrder`] band and
//! merges them, together with the process-wide [`BuiltinSheets`], into the
//! property list for the element at the current tree position.

#![forbid(unsafe_code)]

mod bands;
mod config;
mod style;
mod values;

pub use bands::{Origin, PrimaryOrder};
pub use config::{Preferences, Rgb, UserRule};
pub use style::{BuiltinSheets, ua_stylesheet, user_stylesheet};

use css_cascade::{Rule, StyleSheet};
use css_properties::PropertyList;
use css_selectors::Selector;
use doctree::Doctree;
use log::{debug, trace};
use std::sync::Arc;

/// Rule storage for one document, keyed by precedence band.
#[derive(Clone, Debug)]
pub struct CssContext {
    builtin: Arc<BuiltinSheets>,
    sheets: [Option<StyleSheet>; PrimaryOrder::COUNT],
}

impl Default for CssContext {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl CssContext {
    /// Context over the shared default built-in sheets.
    #[inline]
    pub fn new() -> Self {
        Self::with_builtin(BuiltinSheets::shared())
    }

    /// Context over explicitly built built-in sheets, e.g. from custom
    /// [`Preferences`].
    pub fn with_builtin(builtin: Arc<BuiltinSheets>) -> Self {
        Self {
            builtin,
            sheets: Default::default(),
        }
    }

    /// Append `rule` to the sheet for `order`, creating the sheet on first use.
    pub fn add_rule(&mut self, rule: Rule, order: PrimaryOrder) {
        debug!("adding {order} rule {rule}");
        self.sheets[order.index()]
            .get_or_insert_with(StyleSheet::new)
            .add_rule(rule);
    }

    pub fn add(&mut self, selector: Selector, props: Arc<PropertyList>, order: PrimaryOrder) {
        self.add_rule(Rule::new(selector, props), order);
    }

    /// Merge every matching declaration for the element at `tree`'s current
    /// position into `props`.
    ///
    /// Bands are applied in ascending precedence; within a band the built-in
    /// sheet goes first, then this context's sheet. `tag_style` (inline
    /// style) follows all bands and `non_css` (presentational hints) is merged
    /// last, so it overrides everything else.
    pub fn apply(
        &self,
        props: &mut PropertyList,
        tree: &dyn Doctree,
        tag_style: Option<&PropertyList>,
        non_css: Option<&PropertyList>,
    ) {
        for order in PrimaryOrder::ALL {
            let builtin = self
                .builtin
                .sheet(order)
                .map_or(0, |sheet| sheet.apply(props, tree));
            let own = self.sheet(order).map_or(0, |sheet| sheet.apply(props, tree));
            if builtin + own > 0 {
                trace!("{order}: {builtin} built-in and {own} document rules matched");
            }
        }
        if let Some(style) = tag_style {
            props.apply(style);
        }
        if let Some(style) = non_css {
            props.apply(style);
        }
    }

    /// This context's own sheet for `order`, if any rule was added to it.
    #[inline]
    pub fn sheet(&self, order: PrimaryOrder) -> Option<&StyleSheet> {
        self.sheets[order.index()].as_ref()
    }

    #[inline]
    pub const fn builtin(&self) -> &Arc<BuiltinSheets> {
        &self.builtin
    }
}
