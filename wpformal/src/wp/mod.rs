//! Weakest-precondition calculus over [`Statement`] trees.
//!
//! Rules
//! - **Assignment**: `wp(x := E, R) = R[x := (E)]`, followed by the definiteness conditions
//!   of the substituted predicate.
//! - **Sequence**: `wp(S1; ...; Sn, R) = wp(S1, ... wp(Sn, R))`, evaluated from the last
//!   statement back to the first.
//! - **Conditional**: `wp(if B then S1 else S2, R) = (B ∧ wp(S1, R)) ∨ (!(B) ∧ wp(S2, R))`.
//!
//! The calculus is total: every well-formed tree yields a precondition, and the same inputs
//! always yield the same derivation.
//!
//! Example
//! ```
//! use wpformal::prelude::*;
//!
//! let program = Statement::sequence([
//!     Statement::assign("x", "5"),
//!     Statement::assign("y", "x + 1"),
//! ]);
//! let result = program.weakest_precondition(&Expression::compound("y == 6"));
//! assert_eq!(result.precondition.text(), "((5) + 1) == 6");
//! ```
pub mod step;

use log::trace;

use crate::expr::Expression;
use crate::locale::Locale;
use crate::stmt::Statement;
use crate::wp::step::{DerivationStep, StepKind};

/// Outcome of one WP computation: the precondition and the ordered derivation that led to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WpResult {
    pub precondition: Expression,
    pub steps: Vec<DerivationStep>,
}

impl WpResult {
    /// Rendered derivation, one line per step.
    pub fn rendered_steps(&self, locale: Locale) -> Vec<String> {
        self.steps.iter().map(|step| step.render(locale)).collect()
    }
}

/// Compute `wp(statement, postcondition)` together with its derivation.
pub fn weakest_precondition(statement: &Statement, postcondition: &Expression) -> WpResult {
    let mut derivation = Derivation::default();
    let precondition = derivation.statement(statement, postcondition, 0);
    WpResult {
        precondition,
        steps: derivation.steps,
    }
}

impl Statement {
    /// See [`weakest_precondition`].
    #[inline]
    pub fn weakest_precondition(&self, postcondition: &Expression) -> WpResult {
        weakest_precondition(self, postcondition)
    }
}

/// Append-only step log threaded through the recursive rules.
#[derive(Default)]
struct Derivation {
    steps: Vec<DerivationStep>,
}

impl Derivation {
    #[inline]
    fn log(&mut self, depth: usize, kind: StepKind) {
        self.steps.push(DerivationStep::new(depth, kind));
    }

    fn statement(&mut self, statement: &Statement, post: &Expression, depth: usize) -> Expression {
        match statement {
            Statement::Assignment { target, value } => self.assignment(target, value, post, depth),
            Statement::Conditional {
                condition,
                then_branch,
                else_branch,
            } => self.conditional(condition, then_branch, else_branch, post, depth),
            Statement::Sequence(statements) => self.sequence(statements, post, depth),
        }
    }

    fn assignment(
        &mut self,
        target: &str,
        value: &str,
        post: &Expression,
        depth: usize,
    ) -> Expression {
        let result = post.substitute(target, value);
        trace!("wp({target} := {value}, {post}) = {result}");

        self.log(
            depth,
            StepKind::Assignment {
                target: target.to_string(),
                value: value.to_string(),
            },
        );
        self.log(
            depth,
            StepKind::Replacing {
                target: target.to_string(),
                value: value.to_string(),
            },
        );
        self.log(depth, StepKind::Obtained(result.clone()));

        // Checked on the substituted text so divisions brought in by `value` are seen.
        for condition in result.definiteness_conditions() {
            self.log(depth, StepKind::Definiteness(condition));
        }

        result
    }

    fn sequence(&mut self, statements: &[Statement], post: &Expression, depth: usize) -> Expression {
        if statements.is_empty() {
            self.log(depth, StepKind::EmptySequence);
            return post.clone();
        }

        self.log(depth, StepKind::SequenceHeader);
        let mut current = post.clone();
        for statement in statements.iter().rev() {
            current = self.statement(statement, &current, depth + 1);
        }
        self.log(depth, StepKind::SequenceSummary(current.clone()));

        current
    }

    /// Statements of a conditional branch: composed back to front like a sequence, without
    /// header and summary, with separators between consecutive statements.
    fn branch(&mut self, statements: &[Statement], post: &Expression, depth: usize) -> Expression {
        if statements.is_empty() {
            self.log(depth, StepKind::EmptyBranch);
            return post.clone();
        }

        let mut current = post.clone();
        for (i, statement) in statements.iter().enumerate().rev() {
            current = self.statement(statement, &current, depth);
            if i > 0 {
                self.log(depth, StepKind::Separator);
            }
        }

        current
    }

    fn conditional(
        &mut self,
        condition: &str,
        then_branch: &[Statement],
        else_branch: &[Statement],
        post: &Expression,
        depth: usize,
    ) -> Expression {
        self.log(
            depth,
            StepKind::Branching {
                condition: condition.to_string(),
            },
        );

        let wp_then = self.branch(then_branch, post, depth + 1);
        let wp_else = self.branch(else_branch, post, depth + 1);

        let merged = Expression::Compound(format!(
            "({condition} ∧ {wp_then}) ∨ (!({condition}) ∧ {wp_else})"
        ));
        trace!("wp(if ({condition}), {post}) = {merged}");
        self.log(depth, StepKind::Merge(merged.clone()));

        merged
    }
}
