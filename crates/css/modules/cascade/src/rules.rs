use core::fmt;
use css_properties::PropertyList;
use css_selectors::Selector;
use doctree::Doctree;
use log::trace;
use std::sync::Arc;

/// A selector and the declarations it contributes when it matches.
///
/// The declaration list is shared with any other rule built from the same
/// declaration block and is never mutated through the rule.
#[derive(Clone, Debug)]
pub struct Rule {
    selector: Selector,
    props: Arc<PropertyList>,
}

impl Rule {
    pub fn new(selector: Selector, props: Arc<PropertyList>) -> Self {
        Self { selector, props }
    }

    /// Merge this rule's declarations into `props` if the selector matches the
    /// current position of `tree`. Returns whether it matched.
    pub fn apply(&self, props: &mut PropertyList, tree: &dyn Doctree) -> bool {
        if !self.selector.matches(tree) {
            return false;
        }
        trace!("rule {} matched, merging {}", self.selector, self.props);
        props.apply(&self.props);
        true
    }

    #[inline]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }

    #[inline]
    pub const fn properties(&self) -> &Arc<PropertyList> {
        &self.props
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} {}", self.selector, self.props)
    }
}
