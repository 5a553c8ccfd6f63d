//! Calculation sessions: validate, parse, compute, and assemble the presentation.
use log::{debug, info, warn};
use wpformal::prelude::*;
use wplang::parse_program;

use crate::{
    conf::CalculatorConfig,
    error::{CalcError, CalcResult},
    validate::validate_inputs,
};

/// Everything a front end shows after a successful computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub locale: Locale,
    pub postcondition: Expression,
    pub result: WpResult,
    /// The postcondition in words.
    pub human_readable_post: String,
    pub triple: HoareTriple,
}

impl Report {
    #[inline]
    pub fn precondition(&self) -> &Expression {
        &self.result.precondition
    }

    #[inline]
    pub fn steps(&self) -> &[DerivationStep] {
        &self.result.steps
    }

    /// Derivation steps as text in the report's locale.
    pub fn rendered_steps(&self) -> Vec<String> {
        self.result.rendered_steps(self.locale)
    }
}

/// Stateless calculator bound to a configuration. Every call is independent.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Validate and parse `program`, then compute its weakest precondition for
    /// `postcondition`. The parsed statements run as one sequence.
    pub fn calculate(&self, program: &str, postcondition: &str) -> CalcResult<Report> {
        validate_inputs(program, postcondition, &self.config)?;

        let statements = parse_program(program)?;
        if statements.is_empty() {
            warn!("program text contains no assignment or conditional");
            return Err(CalcError::NoStatements);
        }
        debug!("parsed {} top-level statement(s)", statements.len());

        let root = Statement::sequence(statements);
        self.calculate_tree(&root, &Expression::compound(postcondition.trim()))
    }

    /// Compute the weakest precondition of an already built tree.
    pub fn calculate_tree(&self, root: &Statement, postcondition: &Expression) -> CalcResult<Report> {
        let depth = root.depth();
        if depth > self.config.max_depth {
            warn!("statement tree depth {depth} exceeds {}", self.config.max_depth);
            return Err(CalcError::TreeTooDeep {
                depth,
                max: self.config.max_depth,
            });
        }

        let locale = self.config.locale;
        let result = root.weakest_precondition(postcondition);
        info!(
            "computed weakest precondition in {} step(s): {}",
            result.steps.len(),
            result.precondition
        );

        Ok(Report {
            locale,
            human_readable_post: postcondition.to_human_readable(locale),
            triple: HoareTriple::assemble(&result.precondition, postcondition, locale),
            postcondition: postcondition.clone(),
            result,
        })
    }
}
