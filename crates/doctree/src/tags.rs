//! Process-wide interning of element type names.

use core::fmt;
use lasso::{Spur, ThreadedRodeo};
use once_cell::sync::Lazy;

static TAG_NAMES: Lazy<ThreadedRodeo> = Lazy::new(ThreadedRodeo::default);

/// Interned element type name.
///
/// Names are folded to ASCII lower case before interning, so two ids are equal
/// exactly when the tag names are equal ignoring ASCII case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TagId(Spur);

impl TagId {
    /// Intern `name`, returning the id shared by every spelling of it.
    pub fn intern(name: &str) -> Self {
        if name.bytes().any(|byte| byte.is_ascii_uppercase()) {
            Self(TAG_NAMES.get_or_intern(name.to_ascii_lowercase()))
        } else {
            Self(TAG_NAMES.get_or_intern(name))
        }
    }

    /// Return the id of `name` if it was interned before.
    pub fn lookup(name: &str) -> Option<Self> {
        TAG_NAMES.get(name.to_ascii_lowercase()).map(Self)
    }

    /// Lower-cased element name.
    pub fn name(self) -> &'static str {
        TAG_NAMES.resolve(&self.0)
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}
