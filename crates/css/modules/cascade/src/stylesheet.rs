use core::fmt;
use core::slice::Iter;
use css_properties::PropertyList;
use css_selectors::Selector;
use doctree::Doctree;
use std::sync::Arc;

use crate::Rule;

/// Ordered rules from one origin band.
///
/// Sheets are built once and then treated as immutable input: applying a
/// sheet touches nothing but the output list it is given.
#[derive(Clone, Debug, Default)]
pub struct StyleSheet {
    rules: Vec<Rule>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `rule`; it takes precedence over every rule already in the sheet.
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Append a rule built from `selector` and `props`.
    pub fn add(&mut self, selector: Selector, props: Arc<PropertyList>) {
        self.add_rule(Rule::new(selector, props));
    }

    /// Apply every rule in declaration order. Returns how many rules matched.
    pub fn apply(&self, props: &mut PropertyList, tree: &dyn Doctree) -> usize {
        let mut matched = 0;
        for rule in &self.rules {
            if rule.apply(props, tree) {
                matched += 1;
            }
        }
        matched
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'sheet> IntoIterator for &'sheet StyleSheet {
    type Item = &'sheet Rule;
    type IntoIter = Iter<'sheet, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Rule> for StyleSheet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in self {
            writeln!(formatter, "{rule}")?;
        }
        Ok(())
    }
}
