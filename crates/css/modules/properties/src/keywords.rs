//! Integer codes for keyword-valued properties.
//!
//! Each keyword enum converts into [`PropertyValue::Int`] holding its
//! discriminant; `from_value` maps a stored integer back.

use crate::PropertyValue;

macro_rules! keyword_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $css:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Keyword as written in style sheets.
            pub const fn css_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $css,)+
                }
            }

            /// Look up a keyword by its style sheet spelling, ignoring ASCII case.
            pub fn from_css_name(name: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|keyword| keyword.css_name().eq_ignore_ascii_case(name))
            }

            /// Decode a value previously produced from this enum.
            pub fn from_value(value: i64) -> Option<Self> {
                usize::try_from(value)
                    .ok()
                    .and_then(|index| Self::ALL.get(index))
                    .copied()
            }
        }

        impl From<$name> for PropertyValue {
            fn from(keyword: $name) -> Self {
                Self::Int(keyword as i64)
            }
        }
    };
}

keyword_enum! {
    /// Values of `display`.
    Display {
        Block => "block",
        Inline => "inline",
        InlineBlock => "inline-block",
        ListItem => "list-item",
        None => "none",
        Table => "table",
        TableRowGroup => "table-row-group",
        TableHeaderGroup => "table-header-group",
        TableFooterGroup => "table-footer-group",
        TableRow => "table-row",
        TableCell => "table-cell",
    }
}

keyword_enum! {
    /// Values of `font-style`.
    FontStyle {
        Normal => "normal",
        Italic => "italic",
        Oblique => "oblique",
    }
}

keyword_enum! {
    /// Values of `font-variant`.
    FontVariant {
        Normal => "normal",
        SmallCaps => "small-caps",
    }
}

keyword_enum! {
    /// Values of `white-space`.
    WhiteSpace {
        Normal => "normal",
        Pre => "pre",
        Nowrap => "nowrap",
        PreWrap => "pre-wrap",
        PreLine => "pre-line",
    }
}

keyword_enum! {
    /// Values of `text-align`.
    TextAlign {
        Left => "left",
        Right => "right",
        Center => "center",
        Justify => "justify",
    }
}

keyword_enum! {
    /// Values of `vertical-align`.
    VerticalAlign {
        Baseline => "baseline",
        Sub => "sub",
        Super => "super",
        Top => "top",
        TextTop => "text-top",
        Middle => "middle",
        Bottom => "bottom",
        TextBottom => "text-bottom",
    }
}

keyword_enum! {
    /// Values of `list-style-type`.
    ListStyleType {
        Disc => "disc",
        Circle => "circle",
        Square => "square",
        Decimal => "decimal",
        DecimalLeadingZero => "decimal-leading-zero",
        LowerRoman => "lower-roman",
        UpperRoman => "upper-roman",
        LowerAlpha => "lower-alpha",
        UpperAlpha => "upper-alpha",
        None => "none",
    }
}

keyword_enum! {
    /// Values of the `border-*-style` properties.
    BorderStyle {
        None => "none",
        Hidden => "hidden",
        Dotted => "dotted",
        Dashed => "dashed",
        Solid => "solid",
        Double => "double",
        Groove => "groove",
        Ridge => "ridge",
        Inset => "inset",
        Outset => "outset",
    }
}

keyword_enum! {
    /// Values of `border-collapse`.
    BorderCollapse {
        Separate => "separate",
        Collapse => "collapse",
    }
}

keyword_enum! {
    /// Values of `cursor`.
    Cursor {
        Auto => "auto",
        Default => "default",
        Pointer => "pointer",
        Text => "text",
        Wait => "wait",
        Help => "help",
        Crosshair => "crosshair",
        Move => "move",
    }
}

/// Bit flags combined into a `text-decoration` value.
pub mod text_decoration {
    pub const NONE: i64 = 0;
    pub const UNDERLINE: i64 = 1 << 0;
    pub const OVERLINE: i64 = 1 << 1;
    pub const LINE_THROUGH: i64 = 1 << 2;
    pub const BLINK: i64 = 1 << 3;
}
