//! User-agent stylesheet implementation.
//!
//! Provides the default look of HTML elements. Elements that share a
//! declaration block share a single `Arc<PropertyList>`.

use css_cascade::{Rule, StyleSheet};
use css_properties::keywords::{
    BorderCollapse, BorderStyle, Cursor, Display, FontStyle, ListStyleType, TextAlign,
    VerticalAlign, WhiteSpace, text_decoration,
};
use css_properties::{Length, PropertyList, PropertyName, PropertyValue, font_weight};
use css_selectors::Selector;
use std::sync::Arc;

/// Metadata elements that are never rendered.
const HIDDEN_ELEMENTS: &[&str] = &[
    "head", "meta", "title", "link", "style", "script", "base", "template", "noscript",
];

/// Block-level HTML elements.
const BLOCK_LEVEL_ELEMENTS: &[&str] = &[
    "html", "body", "div", "p", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "dl", "dt",
    "dd", "dir", "menu", "blockquote", "pre", "form", "fieldset", "legend", "address",
    "center", "hr", "section", "article", "aside", "header", "footer", "main", "nav",
    "figure", "figcaption", "details", "summary",
];

/// `(tag, font-size in em, vertical margin in em)` for each heading level.
const HEADINGS: &[(&str, f64, f64)] = &[
    ("h1", 2.0, 0.67),
    ("h2", 1.5, 0.83),
    ("h3", 1.17, 1.0),
    ("h4", 1.0, 1.33),
    ("h5", 0.83, 1.67),
    ("h6", 0.67, 2.33),
];

fn declarations(props: &[(PropertyName, PropertyValue)]) -> Arc<PropertyList> {
    props.iter().cloned().collect::<PropertyList>().into_shared()
}

/// Helper to create a UA rule with given selector and declarations.
fn make_ua_rule(selector: Selector, props: &[(PropertyName, PropertyValue)]) -> Rule {
    Rule::new(selector, declarations(props))
}

/// One rule per tag, all pointing at the same declaration block.
fn add_shared_rules(sheet: &mut StyleSheet, tags: &[&str], props: &Arc<PropertyList>) {
    for tag in tags {
        sheet.add(Selector::tag(tag), Arc::clone(props));
    }
}

fn add_display_rules(sheet: &mut StyleSheet) {
    let hidden = declarations(&[(PropertyName::Display, Display::None.into())]);
    add_shared_rules(sheet, HIDDEN_ELEMENTS, &hidden);

    let block = declarations(&[(PropertyName::Display, Display::Block.into())]);
    add_shared_rules(sheet, BLOCK_LEVEL_ELEMENTS, &block);

    sheet.add_rule(make_ua_rule(
        Selector::tag("li"),
        &[(PropertyName::Display, Display::ListItem.into())],
    ));
}

fn add_table_rules(sheet: &mut StyleSheet) {
    sheet.add_rule(make_ua_rule(
        Selector::tag("table"),
        &[
            (PropertyName::Display, Display::Table.into()),
            (PropertyName::BorderSpacing, Length::px(2.0).into()),
            (PropertyName::BorderCollapse, BorderCollapse::Separate.into()),
        ],
    ));
    for (tag, display) in [
        ("caption", Display::Block),
        ("thead", Display::TableHeaderGroup),
        ("tbody", Display::TableRowGroup),
        ("tfoot", Display::TableFooterGroup),
        ("tr", Display::TableRow),
    ] {
        sheet.add_rule(make_ua_rule(
            Selector::tag(tag),
            &[(PropertyName::Display, display.into())],
        ));
    }
    let cell = declarations(&[
        (PropertyName::Display, Display::TableCell.into()),
        (PropertyName::Padding, Length::px(2.0).into()),
        (PropertyName::VerticalAlign, VerticalAlign::Middle.into()),
    ]);
    add_shared_rules(sheet, &["td", "th"], &cell);
    sheet.add_rule(make_ua_rule(
        Selector::tag("th"),
        &[
            (PropertyName::FontWeight, font_weight::BOLDER.into()),
            (PropertyName::TextAlign, TextAlign::Center.into()),
        ],
    ));
}

fn add_heading_rules(sheet: &mut StyleSheet) {
    for &(tag, size, margin) in HEADINGS {
        sheet.add_rule(make_ua_rule(
            Selector::tag(tag),
            &[
                (PropertyName::FontSize, Length::em(size).into()),
                (PropertyName::FontWeight, font_weight::BOLDER.into()),
                (PropertyName::MarginTop, Length::em(margin).into()),
                (PropertyName::MarginBottom, Length::em(margin).into()),
            ],
        ));
    }
}

fn add_phrase_rules(sheet: &mut StyleSheet) {
    let bold = declarations(&[(PropertyName::FontWeight, font_weight::BOLDER.into())]);
    add_shared_rules(sheet, &["b", "strong"], &bold);

    let italic = declarations(&[(PropertyName::FontStyle, FontStyle::Italic.into())]);
    add_shared_rules(sheet, &["i", "em", "cite", "var", "dfn", "address"], &italic);

    let monospace = declarations(&[(PropertyName::FontFamily, "monospace".into())]);
    add_shared_rules(sheet, &["code", "tt", "kbd", "samp", "pre"], &monospace);

    let underline = declarations(&[(
        PropertyName::TextDecoration,
        text_decoration::UNDERLINE.into(),
    )]);
    add_shared_rules(sheet, &["u", "ins"], &underline);

    let strike = declarations(&[(
        PropertyName::TextDecoration,
        text_decoration::LINE_THROUGH.into(),
    )]);
    add_shared_rules(sheet, &["s", "strike", "del"], &strike);

    sheet.add_rule(make_ua_rule(
        Selector::tag("sub"),
        &[
            (PropertyName::VerticalAlign, VerticalAlign::Sub.into()),
            (PropertyName::FontSize, Length::em(0.83).into()),
        ],
    ));
    sheet.add_rule(make_ua_rule(
        Selector::tag("sup"),
        &[
            (PropertyName::VerticalAlign, VerticalAlign::Super.into()),
            (PropertyName::FontSize, Length::em(0.83).into()),
        ],
    ));
    sheet.add_rule(make_ua_rule(
        Selector::tag("small"),
        &[(PropertyName::FontSize, Length::em(0.83).into())],
    ));
    sheet.add_rule(make_ua_rule(
        Selector::tag("big"),
        &[(PropertyName::FontSize, Length::em(1.17).into())],
    ));
}

fn add_block_rules(sheet: &mut StyleSheet) {
    sheet.add_rule(make_ua_rule(
        Selector::tag("body"),
        &[(PropertyName::Margin, Length::px(5.0).into())],
    ));
    let paragraph = declarations(&[
        (PropertyName::MarginTop, Length::em(1.0).into()),
        (PropertyName::MarginBottom, Length::em(1.0).into()),
    ]);
    add_shared_rules(sheet, &["p", "dl", "pre"], &paragraph);
    sheet.add_rule(make_ua_rule(
        Selector::tag("pre"),
        &[(PropertyName::WhiteSpace, WhiteSpace::Pre.into())],
    ));
    sheet.add_rule(make_ua_rule(
        Selector::tag("blockquote"),
        &[
            (PropertyName::MarginLeft, Length::px(40.0).into()),
            (PropertyName::MarginRight, Length::px(40.0).into()),
        ],
    ));
    sheet.add_rule(make_ua_rule(
        Selector::tag("dd"),
        &[(PropertyName::MarginLeft, Length::px(40.0).into())],
    ));
    sheet.add_rule(make_ua_rule(
        Selector::tag("center"),
        &[(PropertyName::TextAlign, TextAlign::Center.into())],
    ));
    sheet.add_rule(make_ua_rule(
        Selector::tag("hr"),
        &[
            (PropertyName::BorderStyle, BorderStyle::Inset.into()),
            (PropertyName::BorderWidth, Length::px(1.0).into()),
            (PropertyName::MarginTop, Length::px(5.0).into()),
            (PropertyName::MarginBottom, Length::px(5.0).into()),
        ],
    ));
}

fn add_list_rules(sheet: &mut StyleSheet) {
    let indent = declarations(&[(PropertyName::PaddingLeft, Length::px(40.0).into())]);
    add_shared_rules(sheet, &["ul", "ol", "dir", "menu"], &indent);

    let disc = declarations(&[(PropertyName::ListStyleType, ListStyleType::Disc.into())]);
    add_shared_rules(sheet, &["ul", "dir", "menu"], &disc);
    sheet.add_rule(make_ua_rule(
        Selector::tag("ol"),
        &[(PropertyName::ListStyleType, ListStyleType::Decimal.into())],
    ));
}

fn add_link_rules(sheet: &mut StyleSheet) {
    sheet.add_rule(make_ua_rule(
        Selector::tag("a").with_pseudo("link"),
        &[
            (PropertyName::Color, 0x0000_00ffi64.into()),
            (PropertyName::Cursor, Cursor::Pointer.into()),
        ],
    ));
    sheet.add_rule(make_ua_rule(
        Selector::tag("a").with_pseudo("visited"),
        &[
            (PropertyName::Color, 0x0080_0080i64.into()),
            (PropertyName::Cursor, Cursor::Pointer.into()),
        ],
    ));
}

/// Build the default user-agent stylesheet.
pub fn build_user_agent_style() -> StyleSheet {
    let mut sheet = StyleSheet::new();
    add_display_rules(&mut sheet);
    add_table_rules(&mut sheet);
    add_block_rules(&mut sheet);
    add_heading_rules(&mut sheet);
    add_phrase_rules(&mut sheet);
    add_list_rules(&mut sheet);
    add_link_rules(&mut sheet);
    sheet
}
