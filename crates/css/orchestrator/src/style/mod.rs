//! Built-in style sheets.
//!
//! The user-agent sheet encodes the default look of HTML elements; the user
//! sheets are derived from [`Preferences`]. Together they form the
//! [`BuiltinSheets`] every [`CssContext`](crate::CssContext) consults before
//! its own sheets in each band.

pub mod ua_stylesheet;
pub mod user_stylesheet;

use css_cascade::StyleSheet;
use log::info;
use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::{Preferences, PrimaryOrder};

static SHARED: Lazy<Arc<BuiltinSheets>> = Lazy::new(|| {
    let sheets = BuiltinSheets::new(&Preferences::default());
    info!(
        "built default style sheets: {} user-agent, {} user, {} user !important rules",
        sheets.user_agent.len(),
        sheets.user.len(),
        sheets.user_important.len()
    );
    Arc::new(sheets)
});

/// Immutable sheets for the user-agent, user and user-important bands.
#[derive(Clone, Debug, Default)]
pub struct BuiltinSheets {
    user_agent: StyleSheet,
    user: StyleSheet,
    user_important: StyleSheet,
}

impl BuiltinSheets {
    pub fn new(prefs: &Preferences) -> Self {
        let (user, user_important) = user_stylesheet::build_user_style(prefs);
        Self {
            user_agent: ua_stylesheet::build_user_agent_style(),
            user,
            user_important,
        }
    }

    /// Sheets with no rules at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Process-wide sheets built from default preferences on first use.
    pub fn shared() -> Arc<Self> {
        Arc::clone(&SHARED)
    }

    /// Built-in sheet for `order`; the author bands have none.
    pub const fn sheet(&self, order: PrimaryOrder) -> Option<&StyleSheet> {
        match order {
            PrimaryOrder::UserAgent => Some(&self.user_agent),
            PrimaryOrder::User => Some(&self.user),
            PrimaryOrder::UserImportant => Some(&self.user_important),
            PrimaryOrder::Author | PrimaryOrder::AuthorImportant => None,
        }
    }
}
