//! User preferences that shape the built-in style sheets.

use anyhow::{Context as _, Result, anyhow};
use core::fmt;
use css_cascade::Rule;
use css_properties::{Length, LengthUnit, PropertyList, PropertyName, PropertyValue};
use css_selectors::Selector;
use doctree::TagId;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::values::{RawValue, parse_value};

/// An opaque `0xRRGGBB` colour, deserialised from any CSS colour string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb(u32);

impl Rgb {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self((u32::from(red) << 16) | (u32::from(green) << 8) | u32::from(blue))
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self(hex & 0x00ff_ffff)
    }

    /// Parse a CSS colour (`#rgb`, `#rrggbb`, `rgb()`, named colours, ...).
    /// Alpha is dropped.
    ///
    /// # Errors
    /// Returns an error if `text` is not a colour.
    pub fn parse(text: &str) -> Result<Self> {
        let color = csscolorparser::parse(text)
            .with_context(|| format!("invalid colour `{text}`"))?;
        let [red, green, blue, _alpha] = color.to_rgba8();
        Ok(Self::new(red, green, blue))
    }

    pub const fn hex(self) -> u32 {
        self.0
    }
}

impl From<Rgb> for PropertyValue {
    fn from(color: Rgb) -> Self {
        Self::Int(i64::from(color.0))
    }
}

impl TryFrom<String> for Rgb {
    type Error = anyhow::Error;

    fn try_from(text: String) -> Result<Self> {
        Self::parse(&text)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{:06x}", self.0)
    }
}

/// Browser preferences consulted when building the user style sheets.
///
/// Every field is optional in the JSON form; missing fields keep their
/// defaults.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Default proportional font family.
    pub font_sans_serif: String,
    /// Font family substituted for monospace elements.
    pub font_monospace: String,
    /// Default font size in pixels; positive and finite.
    #[serde(deserialize_with = "font_size")]
    pub font_size: f64,
    pub bg_color: Rgb,
    pub text_color: Rgb,
    pub link_color: Rgb,
    pub visited_color: Rgb,
    /// Move the colour rules into the user `!important` band so that author
    /// rules cannot override them.
    pub force_my_colors: bool,
    pub underline_links: bool,
    /// Additional user rules appended after the generated ones.
    pub user_rules: Vec<UserRule>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            font_sans_serif: "DejaVu Sans".to_owned(),
            font_monospace: "DejaVu Sans Mono".to_owned(),
            font_size: 14.0,
            bg_color: Rgb::from_hex(0x00dc_d1ba),
            text_color: Rgb::from_hex(0x0000_0000),
            link_color: Rgb::from_hex(0x0000_00ff),
            visited_color: Rgb::from_hex(0x0080_0080),
            force_my_colors: false,
            underline_links: true,
            user_rules: Vec::new(),
        }
    }
}

/// Check that `size` is a usable pixel font size.
///
/// # Errors
/// Returns an error for zero, negative, non-finite or unrepresentable sizes.
fn check_font_size(size: f64) -> Result<f64> {
    if size > 0.0 && Length::checked(size, LengthUnit::Px).is_some() {
        Ok(size)
    } else {
        Err(anyhow!("font_size must be a positive pixel size, got {size}"))
    }
}

fn font_size<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let size = f64::deserialize(deserializer)?;
    check_font_size(size).map_err(D::Error::custom)
}

impl Preferences {
    /// Parse preferences from a JSON document.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed, a colour does not parse, the
    /// font size is out of range, or a user rule names an unknown property or
    /// carries a value its property does not accept.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("failed to parse preferences")
    }

    /// Read and parse a JSON preferences file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not parse.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read preferences from {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }
}

/// A rule supplied through the preferences, destined for a user band.
#[derive(Clone, Debug, Deserialize)]
#[serde(try_from = "RawUserRule")]
pub struct UserRule {
    rule: Rule,
    important: bool,
}

impl UserRule {
    pub const fn new(rule: Rule, important: bool) -> Self {
        Self { rule, important }
    }

    pub const fn rule(&self) -> &Rule {
        &self.rule
    }

    pub const fn is_important(&self) -> bool {
        self.important
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawUserRule {
    #[serde(default)]
    element: Option<String>,
    #[serde(default)]
    class: Option<String>,
    #[serde(default)]
    pseudo: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    important: bool,
    properties: BTreeMap<String, RawValue>,
}

impl TryFrom<RawUserRule> for UserRule {
    type Error = anyhow::Error;

    fn try_from(raw: RawUserRule) -> Result<Self> {
        // `*` and an empty element both mean "any element".
        let element = raw
            .element
            .as_deref()
            .map(str::trim)
            .filter(|tag| !tag.is_empty() && *tag != "*");
        let selector = Selector::new(
            element.map(TagId::intern),
            raw.class.as_deref(),
            raw.pseudo.as_deref(),
            raw.id.as_deref(),
        );
        let mut props = PropertyList::new();
        for (name, value) in raw.properties {
            let property = name.parse::<PropertyName>()?;
            let converted = parse_value(property, value)
                .map_err(|err| anyhow!("{err:#} in user rule `{selector}`"))?;
            props.set(property, converted);
        }
        Ok(Self::new(Rule::new(selector, props.into_shared()), raw.important))
    }
}
