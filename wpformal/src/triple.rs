//! Hoare triple assembly: `{ P }`, a program placeholder, `{ Q }`.
use crate::expr::Expression;
use crate::locale::Locale;

/// Human-readable Hoare triple. Presentation only: building it never changes a WP result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoareTriple {
    pub precondition: String,
    pub program: &'static str,
    pub postcondition: String,
}

impl HoareTriple {
    /// Render `precondition` and `postcondition` once each in `locale` and assemble the triple.
    pub fn assemble(precondition: &Expression, postcondition: &Expression, locale: Locale) -> Self {
        Self {
            precondition: precondition.to_human_readable(locale),
            program: locale.program_word(),
            postcondition: postcondition.to_human_readable(locale),
        }
    }
}

impl std::fmt::Display for HoareTriple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ {} }}\n{}\n{{ {} }}",
            self.precondition, self.program, self.postcondition
        )
    }
}
