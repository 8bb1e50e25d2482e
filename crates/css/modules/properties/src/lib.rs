//! Style property representation shared by the whole cascade.
//!
//! A [`Property`] pairs a [`PropertyName`] from a closed enumeration with a
//! tagged [`PropertyValue`]. A [`PropertyList`] holds at most one entry per
//! name; merging lists is "later wins" on conflicting names.
//!
//! Integer values are engine-coded: keywords use the discriminants in
//! [`keywords`], lengths use the packed [`Length`] encoding, colours are
//! `0xRRGGBB`, and font weights may carry the relative values in
//! [`font_weight`].

#![forbid(unsafe_code)]

mod declarations;
pub mod font_weight;
pub mod keywords;
mod length;
mod names;
mod values;

pub use declarations::{Property, PropertyList};
pub use length::{Length, LengthUnit};
pub use names::PropertyName;
pub use values::{PropertyValue, ValueKind};
