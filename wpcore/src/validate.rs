//! Input checks run before any parsing.
//!
//! Order of checks: postcondition emptiness and length, program emptiness and length, then
//! the character sets of the postcondition and of the program. The first failure wins.
//! Lengths are counted in characters.
use log::warn;

use crate::{
    conf::CalculatorConfig,
    error::{CalcError, CalcResult, InputField},
    magic::{EXPRESSION_SYMBOLS, PROGRAM_SYMBOLS},
};

fn is_allowed(c: char, extra: &str) -> bool {
    c.is_alphanumeric() || c.is_whitespace() || EXPRESSION_SYMBOLS.contains(c) || extra.contains(c)
}

/// Disallowed characters of `text`, each listed once, in order of first appearance.
pub fn disallowed_characters(text: &str, extra: &str) -> Vec<char> {
    let mut found: Vec<char> = Vec::new();
    for c in text.chars().filter(|&c| !is_allowed(c, extra)) {
        if !found.contains(&c) {
            found.push(c);
        }
    }
    found
}

fn check_size(text: &str, field: InputField, max: usize) -> CalcResult<()> {
    if text.trim().is_empty() {
        return Err(CalcError::EmptyInput(field));
    }
    let len = text.chars().count();
    if len > max {
        return Err(CalcError::InputTooLong { field, len, max });
    }
    Ok(())
}

fn check_characters(text: &str, field: InputField, extra: &str) -> CalcResult<()> {
    let chars = disallowed_characters(text, extra);
    if chars.is_empty() {
        Ok(())
    } else {
        Err(CalcError::DisallowedCharacters { field, chars })
    }
}

/// Check both inputs against the limits of `config`.
pub fn validate_inputs(
    program: &str,
    postcondition: &str,
    config: &CalculatorConfig,
) -> CalcResult<()> {
    check_size(
        postcondition,
        InputField::Postcondition,
        config.max_postcondition_len,
    )
    .and_then(|()| check_size(program, InputField::Program, config.max_program_len))
    .and_then(|()| check_characters(postcondition, InputField::Postcondition, ""))
    .and_then(|()| check_characters(program, InputField::Program, PROGRAM_SYMBOLS))
    .inspect_err(|e| warn!("rejected input: {e}"))
}
