#![cfg(test)]

use css_properties::{
    Length, LengthUnit, PropertyList, PropertyName, PropertyValue, ValueKind, font_weight,
};
use std::sync::Arc;

#[test]
fn merged_strings_point_at_the_same_text() {
    let family: Arc<str> = Arc::from("DejaVu Sans Mono");
    let mut source = PropertyList::new();
    source.set(PropertyName::FontFamily, Arc::clone(&family));
    let shared = source.into_shared();

    let mut first = PropertyList::new();
    let mut second = PropertyList::new();
    first.apply(&shared);
    second.apply(&shared);

    for out in [&first, &second] {
        assert!(matches!(
            out.get(PropertyName::FontFamily),
            Some(PropertyValue::Str(text)) if Arc::ptr_eq(text, &family)
        ));
    }
}

#[test]
fn value_kinds_follow_the_name() {
    assert_eq!(PropertyName::Color.value_kind(), ValueKind::Int);
    assert_eq!(PropertyName::FontFamily.value_kind(), ValueKind::Str);
    assert_eq!(PropertyName::InternalTooltip.value_kind(), ValueKind::Str);
    assert!(PropertyName::InternalLink.is_internal());
    assert!(!PropertyName::XLink.is_internal());

    let str_names = PropertyName::ALL
        .iter()
        .filter(|name| name.value_kind() == ValueKind::Str)
        .count();
    assert_eq!(str_names, 11);
}

#[test]
fn config_names_parse_case_insensitively() {
    assert_eq!("Font-Weight".parse::<PropertyName>().ok(), Some(PropertyName::FontWeight));
    assert!("-x-img".parse::<PropertyName>().ok().is_none());
    assert!("colour".parse::<PropertyName>().ok().is_none());
}

#[test]
fn relative_weights_survive_a_merge() {
    let mut rule = PropertyList::new();
    rule.set(PropertyName::FontWeight, font_weight::LIGHTER);
    let mut out = PropertyList::new();
    out.set(PropertyName::FontWeight, font_weight::BOLD);
    out.apply(&rule);

    let weight = out.get_int(PropertyName::FontWeight);
    assert_eq!(weight, Some(font_weight::LIGHTER));
    assert_eq!(
        weight.map(|value| font_weight::resolve(value, font_weight::BOLD)),
        Some(font_weight::NORMAL)
    );
    assert_eq!(font_weight::resolve(font_weight::BOLDER, font_weight::MAX), font_weight::MAX);
}

#[test]
fn lengths_are_stored_as_integers() {
    let mut list = PropertyList::new();
    list.set(PropertyName::MarginTop, Length::em(1.5));
    let stored = list.get_int(PropertyName::MarginTop).map(Length::from_raw);
    assert_eq!(stored, Some(Length::em(1.5)));
    assert_eq!(stored.map(Length::unit), Some(LengthUnit::Em));
}
