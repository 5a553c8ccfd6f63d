//! Natural-language vocabulary used to render predicates, derivation steps, and triples.
//!
//! Operator symbols are rewritten into words by a single left-to-right scan that tries the
//! longest symbols first. `>=` therefore reads "greater or equal" and is never split into
//! "greater" followed by a stray `=`.
use strum::{Display, EnumIter, EnumString};

/// Output language for everything the engine renders as prose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Locale {
    #[default]
    #[strum(to_string = "en", serialize = "english")]
    #[cfg_attr(feature = "serde", serde(rename = "en"))]
    English,

    #[strum(to_string = "ru", serialize = "russian")]
    #[cfg_attr(feature = "serde", serde(rename = "ru"))]
    Russian,
}

/// Symbol table ordered longest symbol first, measured in characters.
type OperatorTable = &'static [(&'static str, &'static str)];

const ENGLISH_OPERATORS: OperatorTable = &[
    (">=", "greater or equal"),
    ("<=", "less or equal"),
    ("==", "equals"),
    ("!=", "not equal"),
    ("&&", "and"),
    ("||", "or"),
    ("≥", "greater or equal"),
    ("≤", "less or equal"),
    ("≠", "not equal"),
    ("∧", "and"),
    ("∨", "or"),
    ("¬", "not"),
    (">", "greater"),
    ("<", "less"),
    ("!", "not"),
];

const RUSSIAN_OPERATORS: OperatorTable = &[
    (">=", "больше или равно"),
    ("<=", "меньше или равно"),
    ("==", "равно"),
    ("!=", "не равно"),
    ("&&", "и"),
    ("||", "или"),
    ("≥", "больше или равно"),
    ("≤", "меньше или равно"),
    ("≠", "не равно"),
    ("∧", "и"),
    ("∨", "или"),
    ("¬", "не"),
    (">", "больше"),
    ("<", "меньше"),
    ("!", "не"),
];

impl Locale {
    pub(crate) fn operators(self) -> OperatorTable {
        match self {
            Locale::English => ENGLISH_OPERATORS,
            Locale::Russian => RUSSIAN_OPERATORS,
        }
    }

    /// Replace every operator symbol of `text` by its word and normalize spacing.
    pub fn humanize(self, text: &str) -> String {
        let table = self.operators();
        let mut out = String::with_capacity(text.len() * 2);
        let mut rest = text;

        'scan: while let Some(c) = rest.chars().next() {
            for (symbol, word) in table {
                if let Some(tail) = rest.strip_prefix(symbol) {
                    out.push(' ');
                    out.push_str(word);
                    out.push(' ');
                    rest = tail;
                    continue 'scan;
                }
            }
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }

        out.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .replace("( ", "(")
            .replace(" )", ")")
    }

    pub(crate) fn variable_word(self) -> &'static str {
        match self {
            Locale::English => "variable",
            Locale::Russian => "переменная",
        }
    }

    pub(crate) fn value_word(self) -> &'static str {
        match self {
            Locale::English => "value",
            Locale::Russian => "значение",
        }
    }

    /// Placeholder line standing for the program in a Hoare triple.
    pub fn program_word(self) -> &'static str {
        match self {
            Locale::English => "program",
            Locale::Russian => "программа",
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn tables_are_sorted_longest_first() {
        for locale in Locale::iter() {
            let lengths: Vec<usize> = locale
                .operators()
                .iter()
                .map(|(symbol, _)| symbol.chars().count())
                .collect();
            assert!(
                lengths.windows(2).all(|w| w[0] >= w[1]),
                "{locale} operator table is not ordered longest first"
            );
        }
    }

    #[test]
    fn parses_short_and_long_names() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!("russian".parse::<Locale>().unwrap(), Locale::Russian);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn text_without_operators_is_only_respaced() {
        assert_eq!(Locale::English.humanize("  a +  b "), "a + b");
    }
}
