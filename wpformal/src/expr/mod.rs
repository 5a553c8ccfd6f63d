//! Condition expressions and the textual substitution rule.
//!
//! Role
//! - [`Expression`] is the value every predicate transformer consumes and produces: a bare
//!   variable, an opaque literal, or the verbatim text of a composite condition.
//! - [`Expression::substitute`] is the only way a rule obtains its next predicate, and
//!   [`Expression::definiteness_conditions`] reports the side-conditions a predicate
//!   implicitly requires.
//!
//! Precision
//! - Compound text is never parsed. Substitution is a plain substring replacement without
//!   identifier boundaries, so substituting `x` inside `max > x` also rewrites the `x` of
//!   `max`. Callers that need exact results must pick variable names that are not substrings
//!   of one another.
//!
//! Example
//! ```
//! use wpformal::expr::Expression;
//!
//! let post = Expression::compound("x + y > 5");
//! let pre = post.substitute("x", "z + 1");
//! assert_eq!(pre.text(), "(z + 1) + y > 5");
//! ```
pub mod definiteness;

use smallvec::SmallVec;
use strum::{EnumIs, EnumTryAs};

use crate::expr::definiteness::DefinitenessCondition;
use crate::locale::Locale;

/// A logical or arithmetic condition.
///
/// Expressions are plain values: substitution always builds a new expression and never
/// touches the receiver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs, EnumTryAs)]
pub enum Expression {
    /// A free variable referenced by name.
    Variable(String),

    /// A literal token, opaque to the engine. Constants have no free variables.
    Constant(String),

    /// Verbatim source text of a composite condition, e.g. `x + y > 5`.
    Compound(String),
}

impl Expression {
    #[inline]
    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Variable(name.into())
    }

    #[inline]
    pub fn constant(literal: impl Into<String>) -> Self {
        Expression::Constant(literal.into())
    }

    #[inline]
    pub fn compound(text: impl Into<String>) -> Self {
        Expression::Compound(text.into())
    }

    /// Serialized form of the predicate: the name, the literal, or the compound text
    /// unchanged. This is the text fed back into later substitution rounds.
    #[inline]
    pub fn text(&self) -> &str {
        match self {
            Expression::Variable(name) => name,
            Expression::Constant(literal) => literal,
            Expression::Compound(text) => text,
        }
    }

    /// Replace `variable` by `replacement` and return the resulting expression.
    ///
    /// - `Variable`: a matching name widens to `Compound(replacement)`, whatever the shape of
    ///   the replacement; any other name is returned unchanged.
    /// - `Constant`: returned unchanged.
    /// - `Compound`: every occurrence of `variable` in the text becomes `(replacement)`.
    ///
    /// An empty `variable` matches nothing.
    pub fn substitute(&self, variable: &str, replacement: &str) -> Expression {
        match self {
            Expression::Variable(name) if name == variable => {
                Expression::Compound(replacement.to_string())
            }
            Expression::Variable(_) | Expression::Constant(_) => self.clone(),
            Expression::Compound(_) if variable.is_empty() => self.clone(),
            Expression::Compound(text) => {
                Expression::Compound(text.replace(variable, &format!("({replacement})")))
            }
        }
    }

    /// Side-conditions required for this expression to be well defined, in discovery order.
    ///
    /// Only compound text can carry a division; a single `/` anywhere yields exactly one
    /// [`DefinitenessCondition::NonZeroDenominator`], and further divisions add nothing.
    pub fn definiteness_conditions(&self) -> SmallVec<DefinitenessCondition, 1> {
        let mut conditions = SmallVec::new();
        if let Expression::Compound(text) = self {
            if text.contains(DefinitenessCondition::DIVISION_MARKER) {
                conditions.push(DefinitenessCondition::NonZeroDenominator);
            }
        }
        conditions
    }

    /// Natural-language rendering of this expression in the given locale.
    pub fn to_human_readable(&self, locale: Locale) -> String {
        match self {
            Expression::Variable(name) => format!("{} {name}", locale.variable_word()),
            Expression::Constant(literal) => format!("{} {literal}", locale.value_word()),
            Expression::Compound(text) => locale.humanize(text),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

impl From<&str> for Expression {
    /// Raw condition text always enters the engine as a compound expression.
    fn from(text: &str) -> Self {
        Expression::compound(text)
    }
}

impl From<String> for Expression {
    fn from(text: String) -> Self {
        Expression::Compound(text)
    }
}
