//! Typed declaration values written in user rules.
//!
//! Each property accepts the syntax of its CSS grammar: colours for the
//! colour properties, lengths with units for box and font sizes, keyword names
//! for keyword properties. Raw integers are only taken where they already mean
//! something in the engine's encoding.

use anyhow::{Result, anyhow, bail, ensure};
use core::fmt;
use css_properties::keywords::{
    BorderCollapse, BorderStyle, Cursor, Display, FontStyle, FontVariant, ListStyleType, TextAlign,
    VerticalAlign, WhiteSpace, text_decoration,
};
use css_properties::{Length, LengthUnit, PropertyName, PropertyValue, ValueKind, font_weight};
use serde::Deserialize;

use crate::Rgb;

/// A declaration value as it appears in JSON.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for RawValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(number) => write!(formatter, "{number}"),
            Self::Float(number) => write!(formatter, "{number}"),
            Self::Text(text) => write!(formatter, "\"{text}\""),
        }
    }
}

#[derive(Clone, Copy)]
enum Syntax {
    Text,
    Integer,
    Color,
    Length,
    LineHeight,
    FontWeight,
    TextDecoration,
    Keyword {
        parse: fn(&str) -> Option<PropertyValue>,
        count: usize,
    },
}

macro_rules! keyword {
    ($kind:ty) => {
        Syntax::Keyword {
            parse: |text| <$kind>::from_css_name(text).map(PropertyValue::from),
            count: <$kind>::ALL.len(),
        }
    };
}

fn syntax(name: PropertyName) -> Syntax {
    use PropertyName as Name;
    match name {
        Name::Color
        | Name::BackgroundColor
        | Name::BorderColor
        | Name::BorderTopColor
        | Name::BorderRightColor
        | Name::BorderBottomColor
        | Name::BorderLeftColor
        | Name::OutlineColor => Syntax::Color,
        Name::FontSize
        | Name::Width
        | Name::Height
        | Name::MinWidth
        | Name::MinHeight
        | Name::MaxWidth
        | Name::MaxHeight
        | Name::Top
        | Name::Right
        | Name::Bottom
        | Name::Left
        | Name::Margin
        | Name::MarginTop
        | Name::MarginRight
        | Name::MarginBottom
        | Name::MarginLeft
        | Name::Padding
        | Name::PaddingTop
        | Name::PaddingRight
        | Name::PaddingBottom
        | Name::PaddingLeft
        | Name::BorderWidth
        | Name::BorderTopWidth
        | Name::BorderRightWidth
        | Name::BorderBottomWidth
        | Name::BorderLeftWidth
        | Name::OutlineWidth
        | Name::BorderSpacing
        | Name::LetterSpacing
        | Name::WordSpacing
        | Name::TextIndent
        | Name::MarkerOffset => Syntax::Length,
        Name::LineHeight => Syntax::LineHeight,
        Name::FontWeight => Syntax::FontWeight,
        Name::TextDecoration => Syntax::TextDecoration,
        Name::Display => keyword!(Display),
        Name::FontStyle => keyword!(FontStyle),
        Name::FontVariant => keyword!(FontVariant),
        Name::WhiteSpace => keyword!(WhiteSpace),
        Name::TextAlign => keyword!(TextAlign),
        Name::VerticalAlign => keyword!(VerticalAlign),
        Name::ListStyleType => keyword!(ListStyleType),
        Name::BorderStyle
        | Name::BorderTopStyle
        | Name::BorderRightStyle
        | Name::BorderBottomStyle
        | Name::BorderLeftStyle
        | Name::OutlineStyle => keyword!(BorderStyle),
        Name::BorderCollapse => keyword!(BorderCollapse),
        Name::Cursor => keyword!(Cursor),
        _ => match name.value_kind() {
            ValueKind::Str => Syntax::Text,
            ValueKind::Int => Syntax::Integer,
        },
    }
}

/// Convert `value` into the engine encoding of `name`.
///
/// # Errors
/// Returns an error if `value` is not valid syntax for `name`.
pub fn parse_value(name: PropertyName, value: RawValue) -> Result<PropertyValue> {
    match (syntax(name), value) {
        (Syntax::Text, RawValue::Text(text)) => Ok(text.into()),
        (Syntax::Integer, RawValue::Int(number)) => Ok(number.into()),
        (Syntax::Color, RawValue::Text(text)) => Ok(Rgb::parse(&text)?.into()),
        (Syntax::Color, RawValue::Int(number)) => u32::try_from(number)
            .ok()
            .filter(|hex| *hex <= 0x00ff_ffff)
            .map(|hex| Rgb::from_hex(hex).into())
            .ok_or_else(|| anyhow!("`{name}`: {number} is not a 0xRRGGBB colour")),
        (Syntax::Length | Syntax::LineHeight, RawValue::Int(0)) => Ok(Length::px(0.0).into()),
        (Syntax::Length, RawValue::Text(text)) => Ok(text.parse::<Length>()?.into()),
        (Syntax::LineHeight, RawValue::Text(text)) => line_height_text(&text),
        (Syntax::LineHeight, RawValue::Int(number)) => multiplier(number as f64),
        (Syntax::LineHeight, RawValue::Float(number)) => multiplier(number),
        (Syntax::FontWeight, RawValue::Text(text)) => font_weight_text(&text),
        (Syntax::FontWeight, RawValue::Int(number)) => absolute_weight(number),
        (Syntax::TextDecoration, RawValue::Text(text)) => text_decoration_flags(&text),
        (Syntax::Keyword { parse, .. }, RawValue::Text(text)) => parse(text.trim())
            .ok_or_else(|| anyhow!("`{name}` does not accept the keyword `{text}`")),
        (Syntax::Keyword { count, .. }, RawValue::Int(number)) => usize::try_from(number)
            .ok()
            .filter(|index| *index < count)
            .map(|_| number.into())
            .ok_or_else(|| anyhow!("`{name}` has no keyword numbered {number}")),
        (Syntax::Text, other) => bail!("`{name}` expects a string, found {other}"),
        (Syntax::Length, other) => bail!("`{name}` expects a length with a unit, found {other}"),
        (_, other) => bail!("`{name}` does not accept {other}"),
    }
}

fn multiplier(value: f64) -> Result<PropertyValue> {
    Length::checked(value, LengthUnit::Relative)
        .map(PropertyValue::from)
        .ok_or_else(|| anyhow!("line-height multiplier {value} is out of range"))
}

/// `line-height` takes a length or a bare multiplier.
fn line_height_text(text: &str) -> Result<PropertyValue> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => multiplier(value),
        _ => Ok(text.parse::<Length>()?.into()),
    }
}

fn absolute_weight(weight: i64) -> Result<PropertyValue> {
    ensure!(
        (font_weight::MIN..=font_weight::MAX).contains(&weight) && weight % 100 == 0,
        "font weight {weight} is not one of 100, 200, ... 900"
    );
    Ok(weight.into())
}

fn font_weight_text(text: &str) -> Result<PropertyValue> {
    let keyword = text.trim().to_ascii_lowercase();
    match keyword.as_str() {
        "normal" => Ok(font_weight::NORMAL.into()),
        "bold" => Ok(font_weight::BOLD.into()),
        "bolder" => Ok(font_weight::BOLDER.into()),
        "lighter" => Ok(font_weight::LIGHTER.into()),
        _ => keyword
            .parse::<i64>()
            .map_err(|_| anyhow!("invalid font weight `{text}`"))
            .and_then(absolute_weight),
    }
}

fn text_decoration_flags(text: &str) -> Result<PropertyValue> {
    let mut flags = text_decoration::NONE;
    for token in text.split_ascii_whitespace() {
        flags |= match token.to_ascii_lowercase().as_str() {
            "none" => text_decoration::NONE,
            "underline" => text_decoration::UNDERLINE,
            "overline" => text_decoration::OVERLINE,
            "line-through" => text_decoration::LINE_THROUGH,
            "blink" => text_decoration::BLINK,
            _ => bail!("unknown text decoration `{token}`"),
        };
    }
    Ok(flags.into())
}
