use strum::Display;
use thiserror::Error;

/// Which user input a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InputField {
    #[strum(to_string = "Postcondition")]
    Postcondition,
    #[strum(to_string = "Program")]
    Program,
}

fn char_list(chars: &[char]) -> String {
    chars
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration file '{file}': {source}")]
    ConfigParseError {
        source: toml::de::Error,
        file: String,
    },

    #[error("Failed to serialize configuration for '{file}': {source}")]
    ConfigSerializeError {
        source: toml::ser::Error,
        file: String,
    },

    #[error("{0} cannot be empty")]
    EmptyInput(InputField),

    #[error("{field} is too long: {len} characters, at most {max} allowed")]
    InputTooLong {
        field: InputField,
        len: usize,
        max: usize,
    },

    #[error("{field} contains disallowed characters: {}", char_list(.chars))]
    DisallowedCharacters { field: InputField, chars: Vec<char> },

    #[error("Could not recognize any statement in the program; check its syntax")]
    NoStatements,

    #[error(transparent)]
    ParseErrors(#[from] wplang::ParseErrors),

    #[error("Statement tree is too deep: depth {depth}, at most {max} allowed")]
    TreeTooDeep { depth: usize, max: usize },
}

pub type CalcResult<T> = Result<T, CalcError>;
