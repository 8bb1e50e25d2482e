//! Font-weight encoding.
//!
//! Absolute weights use the CSS 100..=900 scale. `LIGHTER` and `BOLDER` are
//! relative and pass through the cascade unchanged; layout resolves them
//! against the parent's weight with [`resolve`].

pub const LIGHTER: i64 = -1;
pub const BOLDER: i64 = -2;
pub const STEP: i64 = 300;

pub const LIGHT: i64 = 100;
pub const NORMAL: i64 = 400;
pub const BOLD: i64 = 700;
pub const MIN: i64 = 100;
pub const MAX: i64 = 900;

/// Resolve a possibly relative `value` against the parent's absolute weight.
pub const fn resolve(value: i64, parent: i64) -> i64 {
    match value {
        BOLDER => clamp(parent + STEP),
        LIGHTER => clamp(parent - STEP),
        _ => clamp(value),
    }
}

/// Whether `value` is one of the relative pseudo-values.
pub const fn is_relative(value: i64) -> bool {
    matches!(value, LIGHTER | BOLDER)
}

const fn clamp(weight: i64) -> i64 {
    if weight < MIN {
        MIN
    } else if weight > MAX {
        MAX
    } else {
        weight
    }
}
