//! Precedence bands of the cascade.

use core::fmt;

/// Where a rule came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    UserAgent,
    User,
    Author,
}

/// The five cascade bands, in ascending precedence.
///
/// Any declaration from a later band overrides a same-named declaration from
/// an earlier one, whatever the selectors involved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrimaryOrder {
    UserAgent,
    User,
    Author,
    AuthorImportant,
    UserImportant,
}

impl PrimaryOrder {
    pub const COUNT: usize = 5;

    /// Every band in application order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::UserAgent,
        Self::User,
        Self::Author,
        Self::AuthorImportant,
        Self::UserImportant,
    ];

    /// Band for a declaration from `origin` with the given `!important` flag.
    ///
    /// User-agent declarations have no important band and stay in
    /// [`PrimaryOrder::UserAgent`].
    pub const fn new(origin: Origin, important: bool) -> Self {
        match (origin, important) {
            (Origin::UserAgent, _) => Self::UserAgent,
            (Origin::User, false) => Self::User,
            (Origin::User, true) => Self::UserImportant,
            (Origin::Author, false) => Self::Author,
            (Origin::Author, true) => Self::AuthorImportant,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn origin(self) -> Origin {
        match self {
            Self::UserAgent => Origin::UserAgent,
            Self::User | Self::UserImportant => Origin::User,
            Self::Author | Self::AuthorImportant => Origin::Author,
        }
    }

    pub const fn is_important(self) -> bool {
        matches!(self, Self::AuthorImportant | Self::UserImportant)
    }
}

impl fmt::Display for PrimaryOrder {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::UserAgent => "user-agent",
            Self::User => "user",
            Self::Author => "author",
            Self::AuthorImportant => "author !important",
            Self::UserImportant => "user !important",
        })
    }
}
