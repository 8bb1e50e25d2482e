#![cfg(test)]

use core::error::Error;
use css_orchestrator::{BuiltinSheets, CssContext, Preferences, PrimaryOrder, Rgb, UserRule};
use css_properties::keywords::{Display, text_decoration};
use css_properties::{Length, PropertyList, PropertyName, font_weight};
use css_selectors::Selector;
use doctree::{DoctreeNode, DocumentTree};
use std::fs;
use std::sync::Arc;

fn init_logger() {
    let _logger = env_logger::builder().is_test(true).try_init();
}

fn body() -> DocumentTree {
    let mut tree = DocumentTree::new();
    tree.push(DoctreeNode::for_tag("html"));
    tree.push(DoctreeNode::for_tag("body"));
    tree
}

fn context_for(prefs: &Preferences) -> CssContext {
    CssContext::with_builtin(Arc::new(BuiltinSheets::new(prefs)))
}

fn cascade(context: &CssContext, tree: &DocumentTree) -> PropertyList {
    let mut props = PropertyList::new();
    context.apply(&mut props, tree, None, None);
    props
}

fn author_red_body(context: &mut CssContext) {
    let mut red = PropertyList::new();
    red.set(PropertyName::Color, 0x00ff_0000i64);
    context.add(Selector::tag("body"), red.into_shared(), PrimaryOrder::Author);
}

#[test]
fn missing_fields_keep_defaults() -> Result<(), Box<dyn Error>> {
    let prefs = Preferences::from_json(r#"{ "font_size": 18, "text_color": "navy" }"#)?;
    let defaults = Preferences::default();
    assert!((prefs.font_size - 18.0).abs() < f64::EPSILON);
    assert_eq!(prefs.text_color, Rgb::new(0, 0, 128));
    assert_eq!(prefs.link_color, defaults.link_color);
    assert_eq!(prefs.font_sans_serif, defaults.font_sans_serif);
    assert!(prefs.user_rules.is_empty());
    Ok(())
}

#[test]
fn user_sheet_sets_body_font_and_colours() {
    init_logger();
    let prefs = Preferences {
        font_sans_serif: "Helvetica".to_owned(),
        font_size: 16.0,
        ..Preferences::default()
    };
    let props = cascade(&context_for(&prefs), &body());
    assert_eq!(props.get_str(PropertyName::FontFamily), Some("Helvetica"));
    assert_eq!(
        props.get_int(PropertyName::FontSize),
        Some(Length::px(16.0).raw())
    );
    assert_eq!(
        props.get_int(PropertyName::BackgroundColor),
        Some(i64::from(prefs.bg_color.hex()))
    );
}

#[test]
fn author_colours_win_unless_forced() {
    init_logger();
    let tree = body();

    let mut relaxed = context_for(&Preferences::default());
    author_red_body(&mut relaxed);
    assert_eq!(cascade(&relaxed, &tree).get_int(PropertyName::Color), Some(0x00ff_0000i64));

    let forced_prefs = Preferences {
        force_my_colors: true,
        text_color: Rgb::from_hex(0x0012_3456),
        ..Preferences::default()
    };
    let mut forced = context_for(&forced_prefs);
    author_red_body(&mut forced);
    assert_eq!(cascade(&forced, &tree).get_int(PropertyName::Color), Some(0x0012_3456i64));
    assert!(
        forced
            .builtin()
            .sheet(PrimaryOrder::UserImportant)
            .is_some_and(|sheet| !sheet.is_empty())
    );
}

#[test]
fn link_underlining_follows_preference() {
    let mut tree = DocumentTree::new();
    tree.push(DoctreeNode::for_tag("a").with_pseudo("link"));

    let underlined = cascade(&context_for(&Preferences::default()), &tree);
    assert_eq!(
        underlined.get_int(PropertyName::TextDecoration),
        Some(text_decoration::UNDERLINE)
    );

    let plain_prefs = Preferences {
        underline_links: false,
        ..Preferences::default()
    };
    let plain = cascade(&context_for(&plain_prefs), &tree);
    assert!(!plain.contains(PropertyName::TextDecoration));
}

#[test]
fn user_rules_land_in_their_band() -> Result<(), Box<dyn Error>> {
    init_logger();
    let prefs = Preferences::from_json(
        r##"{
            "user_rules": [
                { "element": "div", "properties": { "color": "#00ff00", "font-family": "serif" } },
                { "class": "ad", "important": true, "properties": { "display": 4 } }
            ]
        }"##,
    )?;
    assert_eq!(prefs.user_rules.len(), 2);
    assert!(prefs.user_rules.iter().any(UserRule::is_important));

    let mut tree = DocumentTree::new();
    tree.push(DoctreeNode::for_tag("div").with_class_attribute("ad"));
    let mut context = context_for(&prefs);
    let mut shown = PropertyList::new();
    shown.set(PropertyName::Display, 0i64);
    shown.set(PropertyName::FontFamily, "sans-serif");
    context.add(Selector::tag("div"), shown.into_shared(), PrimaryOrder::Author);

    let props = cascade(&context, &tree);
    assert_eq!(props.get_int(PropertyName::Color), Some(0x0000_ff00i64));
    assert_eq!(props.get_str(PropertyName::FontFamily), Some("sans-serif"));
    assert_eq!(props.get_int(PropertyName::Display), Some(4i64));
    Ok(())
}

fn rule_error(properties: &str) -> Option<String> {
    Preferences::from_json(&format!(r#"{{ "user_rules": [ {{ "properties": {properties} }} ] }}"#))
        .err()
        .map(|err| format!("{err:#}"))
}

#[test]
fn user_rule_values_use_their_property_syntax() -> Result<(), Box<dyn Error>> {
    let prefs = Preferences::from_json(
        r##"{
            "user_rules": [
                { "element": "p", "properties": {
                    "display": "none",
                    "font-size": "16px",
                    "margin-left": "50%",
                    "color": "#00ff00",
                    "font-weight": "bold",
                    "text-decoration": "overline"
                } }
            ]
        }"##,
    )?;
    let mut tree = DocumentTree::new();
    tree.push(DoctreeNode::for_tag("p"));
    let props = cascade(&context_for(&prefs), &tree);
    assert_eq!(props.get_int(PropertyName::Display), Some(Display::None as i64));
    assert_eq!(props.get_int(PropertyName::FontSize), Some(Length::px(16.0).raw()));
    assert_eq!(
        props.get_int(PropertyName::MarginLeft),
        Some(Length::percentage(0.5).raw())
    );
    assert_eq!(props.get_int(PropertyName::Color), Some(0x0000_ff00i64));
    assert_eq!(props.get_int(PropertyName::FontWeight), Some(font_weight::BOLD));
    assert_eq!(
        props.get_int(PropertyName::TextDecoration),
        Some(text_decoration::OVERLINE)
    );
    Ok(())
}

#[test]
fn colour_on_a_keyword_property_is_reported() {
    let err = rule_error(r#"{ "display": "red" }"#);
    assert!(
        err.as_deref().is_some_and(|text| text.contains("display") && text.contains("red")),
        "unexpected result: {err:?}"
    );
}

#[test]
fn unitless_length_is_reported() {
    for properties in [r#"{ "font-size": 16 }"#, r#"{ "width": "12" }"#, r#"{ "color": "16px" }"#] {
        let err = rule_error(properties);
        assert!(err.is_some(), "accepted {properties}");
    }
}

#[test]
fn wildcard_element_matches_any_tag() -> Result<(), Box<dyn Error>> {
    let prefs = Preferences::from_json(
        r#"{ "user_rules": [ { "element": "*", "properties": { "z-index": 7 } } ] }"#,
    )?;
    let selector = prefs.user_rules.first().map(|rule| rule.rule().selector().to_string());
    assert_eq!(selector.as_deref(), Some("*"));
    for tag in ["div", "span"] {
        let mut tree = DocumentTree::new();
        tree.push(DoctreeNode::for_tag(tag));
        let props = cascade(&context_for(&prefs), &tree);
        assert_eq!(props.get_int(PropertyName::ZIndex), Some(7i64), "on {tag}");
    }
    Ok(())
}

#[test]
fn unusable_font_sizes_are_reported() {
    for size in ["1e300", "-4", "0"] {
        let err = Preferences::from_json(&format!(r#"{{ "font_size": {size} }}"#))
            .err()
            .map(|err| format!("{err:#}"));
        assert!(
            err.as_deref().is_some_and(|text| text.contains("font_size")),
            "font_size {size}: {err:?}"
        );
    }
}

#[test]
fn bad_colour_is_reported() {
    let err = Preferences::from_json(r#"{ "bg_color": "no-such-colour" }"#)
        .err()
        .map(|err| format!("{err:#}"));
    assert!(
        err.as_deref().is_some_and(|text| text.contains("no-such-colour")),
        "unexpected result: {err:?}"
    );
}

#[test]
fn unknown_property_in_user_rule_is_reported() {
    let err = Preferences::from_json(
        r#"{ "user_rules": [ { "properties": { "colour": 1 } } ] }"#,
    )
    .err()
    .map(|err| format!("{err:#}"));
    assert!(
        err.as_deref().is_some_and(|text| text.contains("colour")),
        "unexpected result: {err:?}"
    );
}

#[test]
fn wrong_value_kind_is_reported() {
    let err = Preferences::from_json(
        r#"{ "user_rules": [ { "properties": { "font-family": 12 } } ] }"#,
    )
    .err()
    .map(|err| format!("{err:#}"));
    assert!(
        err.as_deref().is_some_and(|text| text.contains("font-family")),
        "unexpected result: {err:?}"
    );
}

#[test]
fn preferences_load_from_file() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("prefs.json");
    fs::write(&path, r#"{ "underline_links": false, "link_color": "rgb(1, 2, 3)" }"#)?;

    let prefs = Preferences::from_path(&path)?;
    assert!(!prefs.underline_links);
    assert_eq!(prefs.link_color, Rgb::new(1, 2, 3));

    let missing = Preferences::from_path(&dir.path().join("absent.json"))
        .err()
        .map(|err| format!("{err}"));
    assert!(
        missing.as_deref().is_some_and(|text| text.contains("absent.json")),
        "unexpected result: {missing:?}"
    );
    Ok(())
}
