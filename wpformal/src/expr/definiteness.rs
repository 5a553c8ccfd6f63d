//! Side-conditions that partial operations impose on an expression.
use strum::EnumIter;

use crate::locale::Locale;

/// A condition an expression needs to be well defined, independent of its truth value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DefinitenessCondition {
    /// Some division in the expression must not divide by zero.
    NonZeroDenominator,
}

impl DefinitenessCondition {
    /// Character whose presence anywhere in compound text marks a division.
    pub const DIVISION_MARKER: char = '/';

    /// Localized statement of the condition.
    pub fn describe(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (DefinitenessCondition::NonZeroDenominator, Locale::English) => "denominator ≠ 0",
            (DefinitenessCondition::NonZeroDenominator, Locale::Russian) => "знаменатель ≠ 0",
        }
    }
}

impl std::fmt::Display for DefinitenessCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe(Locale::English))
    }
}
