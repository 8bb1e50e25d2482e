//! User style sheets derived from [`Preferences`].

use css_cascade::StyleSheet;
use css_properties::keywords::text_decoration;
use css_properties::{Length, PropertyList, PropertyName};
use css_selectors::Selector;
use log::debug;
use std::sync::Arc;

use crate::Preferences;

const MONOSPACE_ELEMENTS: &[&str] = &["code", "tt", "kbd", "samp", "pre"];

fn add_font_rules(sheet: &mut StyleSheet, prefs: &Preferences) {
    let mut body = PropertyList::new();
    body.set(PropertyName::FontFamily, prefs.font_sans_serif.as_str());
    body.set(PropertyName::FontSize, Length::px(prefs.font_size));
    sheet.add(Selector::tag("body"), body.into_shared());

    let mut mono = PropertyList::new();
    mono.set(PropertyName::FontFamily, prefs.font_monospace.as_str());
    let mono = mono.into_shared();
    for tag in MONOSPACE_ELEMENTS {
        sheet.add(Selector::tag(tag), Arc::clone(&mono));
    }
}

fn add_color_rules(sheet: &mut StyleSheet, prefs: &Preferences) {
    let mut body = PropertyList::new();
    body.set(PropertyName::Color, prefs.text_color);
    body.set(PropertyName::BackgroundColor, prefs.bg_color);
    sheet.add(Selector::tag("body"), body.into_shared());

    let mut link = PropertyList::new();
    link.set(PropertyName::Color, prefs.link_color);
    sheet.add(Selector::universal().with_pseudo("link"), link.into_shared());

    let mut visited = PropertyList::new();
    visited.set(PropertyName::Color, prefs.visited_color);
    sheet.add(Selector::universal().with_pseudo("visited"), visited.into_shared());
}

fn add_link_decoration(sheet: &mut StyleSheet) {
    let mut underline = PropertyList::new();
    underline.set(PropertyName::TextDecoration, text_decoration::UNDERLINE);
    let underline = underline.into_shared();
    sheet.add(Selector::universal().with_pseudo("link"), Arc::clone(&underline));
    sheet.add(Selector::universal().with_pseudo("visited"), underline);
}

/// Build the `(user, user !important)` sheets for `prefs`.
///
/// Colour rules land in the important sheet when `force_my_colors` is set.
/// Rules from `prefs.user_rules` follow the generated ones in the sheet their
/// importance selects.
pub fn build_user_style(prefs: &Preferences) -> (StyleSheet, StyleSheet) {
    let mut user = StyleSheet::new();
    let mut important = StyleSheet::new();

    add_font_rules(&mut user, prefs);
    if prefs.force_my_colors {
        add_color_rules(&mut important, prefs);
    } else {
        add_color_rules(&mut user, prefs);
    }
    if prefs.underline_links {
        add_link_decoration(&mut user);
    }

    for extra in &prefs.user_rules {
        let sheet = if extra.is_important() {
            &mut important
        } else {
            &mut user
        };
        sheet.add_rule(extra.rule().clone());
    }

    debug!(
        "user style: {} rules, {} !important rules",
        user.len(),
        important.len()
    );
    (user, important)
}
