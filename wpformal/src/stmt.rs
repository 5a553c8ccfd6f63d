//! Statement trees of the toy language: assignment, conditional, and sequence.
//!
//! Trees are immutable once built; the WP engine in [`crate::wp`] only reads them.
use strum::EnumIs;

/// A statement of the toy language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs)]
pub enum Statement {
    /// `target := value`
    Assignment { target: String, value: String },

    /// `if (condition) { then_branch } else { else_branch }`; either branch may be empty.
    Conditional {
        condition: String,
        then_branch: Vec<Statement>,
        else_branch: Vec<Statement>,
    },

    /// Statements executed in textual order.
    Sequence(Vec<Statement>),
}

impl Statement {
    #[inline]
    pub fn assign(target: impl Into<String>, value: impl Into<String>) -> Self {
        Statement::Assignment {
            target: target.into(),
            value: value.into(),
        }
    }

    #[inline]
    pub fn branch(
        condition: impl Into<String>,
        then_branch: impl IntoIterator<Item = Statement>,
        else_branch: impl IntoIterator<Item = Statement>,
    ) -> Self {
        Statement::Conditional {
            condition: condition.into(),
            then_branch: then_branch.into_iter().collect(),
            else_branch: else_branch.into_iter().collect(),
        }
    }

    #[inline]
    pub fn sequence(statements: impl IntoIterator<Item = Statement>) -> Self {
        Statement::Sequence(statements.into_iter().collect())
    }

    /// Nesting depth of the tree; a lone assignment has depth 1.
    pub fn depth(&self) -> usize {
        fn max_depth(statements: &[Statement]) -> usize {
            statements.iter().map(Statement::depth).max().unwrap_or(0)
        }

        match self {
            Statement::Assignment { .. } => 1,
            Statement::Conditional {
                then_branch,
                else_branch,
                ..
            } => 1 + max_depth(then_branch).max(max_depth(else_branch)),
            Statement::Sequence(statements) => 1 + max_depth(statements),
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Assignment { target, value } => write!(f, "{target} := {value}"),
            Statement::Conditional { condition, .. } => {
                write!(f, "if ({condition}) {{ ... }} else {{ ... }}")
            }
            Statement::Sequence(statements) => {
                for (i, statement) in statements.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{statement}")?;
                }
                Ok(())
            }
        }
    }
}
