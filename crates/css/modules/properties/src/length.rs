//! Packed length values.
//!
//! A length is stored in a single integer so it fits [`PropertyValue::Int`]:
//! the low three bits hold the [`LengthUnit`], the remaining bits hold the
//! magnitude as fixed point with ten fractional bits.

use anyhow::{Context as _, Result, anyhow, ensure};
use core::fmt;
use core::str::FromStr;

use crate::PropertyValue;

const UNIT_BITS: u32 = 3;
const UNIT_MASK: i64 = (1 << UNIT_BITS) - 1;
const FRACTION: f64 = 1024.0;
/// Fixed-point magnitudes that survive the shift past the unit bits.
const MIN_FIXED: i64 = i64::MIN >> UNIT_BITS;
const MAX_FIXED: i64 = i64::MAX >> UNIT_BITS;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Px = 0,
    Mm = 1,
    Em = 2,
    Ex = 3,
    /// Fraction of the reference length; `0.5` is 50%.
    Percentage = 4,
    /// Relative multiplier (`line-height: 1.2`).
    Relative = 5,
    Auto = 6,
}

/// A length with its unit, packed into one integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Length(i64);

impl Length {
    pub const AUTO: Self = Self(LengthUnit::Auto as i64);

    /// Pack `value` with `unit`. Magnitudes beyond the representable range
    /// saturate at its ends; NaN becomes zero.
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        let fixed = ((value * FRACTION).round() as i64).clamp(MIN_FIXED, MAX_FIXED);
        Self((fixed << UNIT_BITS) | unit as i64)
    }

    /// Like [`Length::new`], but `None` for non-finite or unrepresentable values.
    pub fn checked(value: f64, unit: LengthUnit) -> Option<Self> {
        let scaled = (value * FRACTION).round();
        if !scaled.is_finite() {
            return None;
        }
        let fixed = scaled as i64;
        if !(MIN_FIXED..=MAX_FIXED).contains(&fixed) {
            return None;
        }
        fixed
            .checked_mul(1 << UNIT_BITS)
            .map(|packed| Self(packed | unit as i64))
    }

    pub fn px(value: f64) -> Self {
        Self::new(value, LengthUnit::Px)
    }

    pub fn mm(value: f64) -> Self {
        Self::new(value, LengthUnit::Mm)
    }

    pub fn em(value: f64) -> Self {
        Self::new(value, LengthUnit::Em)
    }

    pub fn ex(value: f64) -> Self {
        Self::new(value, LengthUnit::Ex)
    }

    pub fn percentage(fraction: f64) -> Self {
        Self::new(fraction, LengthUnit::Percentage)
    }

    pub fn relative(factor: f64) -> Self {
        Self::new(factor, LengthUnit::Relative)
    }

    /// Reinterpret an integer read from a length-valued property.
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> i64 {
        self.0
    }

    pub const fn unit(self) -> LengthUnit {
        match self.0 & UNIT_MASK {
            0 => LengthUnit::Px,
            1 => LengthUnit::Mm,
            2 => LengthUnit::Em,
            3 => LengthUnit::Ex,
            4 => LengthUnit::Percentage,
            5 => LengthUnit::Relative,
            _ => LengthUnit::Auto,
        }
    }

    pub fn value(self) -> f64 {
        (self.0 >> UNIT_BITS) as f64 / FRACTION
    }
}

impl From<Length> for PropertyValue {
    fn from(length: Length) -> Self {
        Self::Int(length.raw())
    }
}

const UNIT_SUFFIXES: &[(&str, LengthUnit)] = &[
    ("px", LengthUnit::Px),
    ("mm", LengthUnit::Mm),
    ("em", LengthUnit::Em),
    ("ex", LengthUnit::Ex),
    ("%", LengthUnit::Percentage),
];

/// Parses `auto`, a unitless `0`, or a number followed by `px`, `mm`, `em`,
/// `ex` or `%`.
impl FromStr for Length {
    type Err = anyhow::Error;

    fn from_str(text: &str) -> Result<Self> {
        let lower = text.trim().to_ascii_lowercase();
        if lower == "auto" {
            return Ok(Self::AUTO);
        }
        if lower == "0" {
            return Ok(Self::px(0.0));
        }
        let (number, unit) = UNIT_SUFFIXES
            .iter()
            .find_map(|&(suffix, unit)| lower.strip_suffix(suffix).map(|number| (number, unit)))
            .ok_or_else(|| anyhow!("length `{text}` has no unit"))?;
        let value: f64 = number
            .trim_end()
            .parse()
            .with_context(|| format!("invalid length `{text}`"))?;
        ensure!(value.is_finite(), "invalid length `{text}`");
        let magnitude = if unit == LengthUnit::Percentage {
            value / 100.0
        } else {
            value
        };
        Self::checked(magnitude, unit).ok_or_else(|| anyhow!("length `{text}` is out of range"))
    }
}

impl fmt::Display for Length {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value();
        match self.unit() {
            LengthUnit::Px => write!(formatter, "{value}px"),
            LengthUnit::Mm => write!(formatter, "{value}mm"),
            LengthUnit::Em => write!(formatter, "{value}em"),
            LengthUnit::Ex => write!(formatter, "{value}ex"),
            LengthUnit::Percentage => write!(formatter, "{}%", value * 100.0),
            LengthUnit::Relative => write!(formatter, "{value}"),
            LengthUnit::Auto => formatter.write_str("auto"),
        }
    }
}
