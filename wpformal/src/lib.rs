//! Wpformal: Dijkstra-style weakest preconditions for a small imperative language.
//!
//! This crate computes, for a statement tree built from assignments, conditionals, and
//! sequences, the weakest precondition that guarantees a postcondition after execution,
//! together with a step-by-step derivation and the resulting Hoare triple.
//!
//! Shape
//!  - Predicates are [`expr::Expression`] values. Composite conditions are kept as verbatim
//!    text and rewritten by textual substitution; the engine never parses them.
//!  - [`wp::weakest_precondition`] walks the tree backwards and returns a [`wp::WpResult`]: the
//!    precondition and an ordered list of [`wp::step::DerivationStep`]s.
//!  - [`triple::HoareTriple`] and [`pretty::PrettyDoc`] turn the result into prose, in any
//!    [`locale::Locale`].
//!
//! The calculus is total and pure: no input tree makes it fail, and no state survives a call.
//!
//! Example
//! ```
//! use wpformal::prelude::*;
//!
//! let program = Statement::branch(
//!     "x > 0",
//!     [Statement::assign("y", "10")],
//!     [Statement::assign("y", "0")],
//! );
//! let post = Expression::compound("y >= 0");
//! let result = program.weakest_precondition(&post);
//! assert_eq!(
//!     result.precondition.text(),
//!     "(x > 0 ∧ (10) >= 0) ∨ (!(x > 0) ∧ (0) >= 0)"
//! );
//!
//! let triple = HoareTriple::assemble(&result.precondition, &post, Locale::English);
//! assert_eq!(triple.to_string().lines().nth(1), Some("program"));
//! ```

/// Expressions, substitution, and definiteness conditions.
pub mod expr;
/// Natural-language vocabulary for rendering.
pub mod locale;
/// Colored, width-aware rendering of predicates, derivations, and triples.
pub mod pretty;
/// Statement trees.
pub mod stmt;
/// Hoare triple assembly.
pub mod triple;
/// The weakest-precondition calculus and its derivation log.
pub mod wp;

pub mod prelude {
    //! Convenient re-exports for end users.
    pub use crate::expr::{Expression, definiteness::DefinitenessCondition};
    pub use crate::locale::Locale;
    pub use crate::pretty::PrettyDoc;
    pub use crate::stmt::Statement;
    pub use crate::triple::HoareTriple;
    pub use crate::wp::{
        WpResult,
        step::{DerivationStep, StepKind},
        weakest_precondition,
    };
}
