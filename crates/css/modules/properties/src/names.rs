//! The closed set of property names.

use anyhow::{Error, anyhow};
use core::fmt;
use core::str::FromStr;

use crate::ValueKind;

macro_rules! property_names {
    ($($variant:ident => $css:literal : $kind:ident,)+) => {
        /// Name of a style property.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum PropertyName {
            $(
                #[doc = concat!("`", $css, "`")]
                $variant,
            )+
        }

        impl PropertyName {
            /// Every name in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Name as written in style sheets.
            pub const fn css_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $css,)+
                }
            }

            /// Which [`PropertyValue`](crate::PropertyValue) variant values of this property use.
            pub const fn value_kind(self) -> ValueKind {
                match self {
                    $(Self::$variant => ValueKind::$kind,)+
                }
            }
        }
    };
}

property_names! {
    BackgroundAttachment => "background-attachment": Int,
    BackgroundColor => "background-color": Int,
    BackgroundImage => "background-image": Str,
    BackgroundPosition => "background-position": Str,
    BackgroundRepeat => "background-repeat": Int,
    BorderBottomColor => "border-bottom-color": Int,
    BorderBottomStyle => "border-bottom-style": Int,
    BorderBottomWidth => "border-bottom-width": Int,
    BorderCollapse => "border-collapse": Int,
    BorderColor => "border-color": Int,
    BorderLeftColor => "border-left-color": Int,
    BorderLeftStyle => "border-left-style": Int,
    BorderLeftWidth => "border-left-width": Int,
    BorderRightColor => "border-right-color": Int,
    BorderRightStyle => "border-right-style": Int,
    BorderRightWidth => "border-right-width": Int,
    BorderSpacing => "border-spacing": Int,
    BorderStyle => "border-style": Int,
    BorderTopColor => "border-top-color": Int,
    BorderTopStyle => "border-top-style": Int,
    BorderTopWidth => "border-top-width": Int,
    BorderWidth => "border-width": Int,
    Bottom => "bottom": Int,
    CaptionSide => "caption-side": Int,
    Clear => "clear": Int,
    Clip => "clip": Str,
    Color => "color": Int,
    Content => "content": Str,
    CounterIncrement => "counter-increment": Str,
    CounterReset => "counter-reset": Str,
    Cursor => "cursor": Int,
    Direction => "direction": Int,
    Display => "display": Int,
    EmptyCells => "empty-cells": Int,
    Float => "float": Int,
    FontFamily => "font-family": Str,
    FontSize => "font-size": Int,
    FontSizeAdjust => "font-size-adjust": Int,
    FontStretch => "font-stretch": Int,
    FontStyle => "font-style": Int,
    FontVariant => "font-variant": Int,
    FontWeight => "font-weight": Int,
    Height => "height": Int,
    Left => "left": Int,
    LetterSpacing => "letter-spacing": Int,
    LineHeight => "line-height": Int,
    ListStyleImage => "list-style-image": Str,
    ListStylePosition => "list-style-position": Int,
    ListStyleType => "list-style-type": Int,
    Margin => "margin": Int,
    MarginBottom => "margin-bottom": Int,
    MarginLeft => "margin-left": Int,
    MarginRight => "margin-right": Int,
    MarginTop => "margin-top": Int,
    MarkerOffset => "marker-offset": Int,
    Marks => "marks": Int,
    MaxHeight => "max-height": Int,
    MaxWidth => "max-width": Int,
    MinHeight => "min-height": Int,
    MinWidth => "min-width": Int,
    OutlineColor => "outline-color": Int,
    OutlineStyle => "outline-style": Int,
    OutlineWidth => "outline-width": Int,
    Overflow => "overflow": Int,
    Padding => "padding": Int,
    PaddingBottom => "padding-bottom": Int,
    PaddingLeft => "padding-left": Int,
    PaddingRight => "padding-right": Int,
    PaddingTop => "padding-top": Int,
    Position => "position": Int,
    Quotes => "quotes": Str,
    Right => "right": Int,
    TextAlign => "text-align": Int,
    TextDecoration => "text-decoration": Int,
    TextShadow => "text-shadow": Str,
    TextTransform => "text-transform": Int,
    Top => "top": Int,
    UnicodeBidi => "unicode-bidi": Int,
    VerticalAlign => "vertical-align": Int,
    Visibility => "visibility": Int,
    WhiteSpace => "white-space": Int,
    TextIndent => "text-indent": Int,
    Width => "width": Int,
    WordSpacing => "word-spacing": Int,
    ZIndex => "z-index": Int,
    XLink => "x-link": Int,
    XColspan => "x-colspan": Int,
    XRowspan => "x-rowspan": Int,
    InternalLink => "-x-link": Int,
    InternalImage => "-x-img": Int,
    InternalTooltip => "-x-tooltip": Str,
}

impl PropertyName {
    /// Names used only between the document pipeline and layout; they never
    /// appear in style sheet text.
    pub const fn is_internal(self) -> bool {
        matches!(
            self,
            Self::InternalLink | Self::InternalImage | Self::InternalTooltip
        )
    }
}

impl FromStr for PropertyName {
    type Err = Error;

    /// Look up a style-sheet property name, ignoring ASCII case.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let wanted = text.trim();
        Self::ALL
            .iter()
            .copied()
            .filter(|name| !name.is_internal())
            .find(|name| name.css_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| anyhow!("unknown property name `{wanted}`"))
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.css_name())
    }
}

#[cfg(test)]
mod tests {
    use super::PropertyName;
    use crate::ValueKind;

    #[test]
    fn name_table_is_complete() {
        assert_eq!(PropertyName::ALL.len(), 91);
        assert_eq!(PropertyName::ALL.last(), Some(&PropertyName::InternalTooltip));
    }

    #[test]
    fn parses_css_names_case_insensitively() {
        assert_eq!(
            "Background-Color".parse::<PropertyName>().ok(),
            Some(PropertyName::BackgroundColor)
        );
        assert_eq!(
            " font-weight ".parse::<PropertyName>().ok(),
            Some(PropertyName::FontWeight)
        );
    }

    #[test]
    fn internal_names_are_not_parsable() {
        assert!("-x-tooltip".parse::<PropertyName>().ok().is_none());
        assert_eq!("x-link".parse::<PropertyName>().ok(), Some(PropertyName::XLink));
    }

    #[test]
    fn string_valued_names() {
        assert_eq!(PropertyName::FontFamily.value_kind(), ValueKind::Str);
        assert_eq!(PropertyName::Color.value_kind(), ValueKind::Int);
        assert_eq!(PropertyName::InternalTooltip.value_kind(), ValueKind::Str);
    }
}
