//! Line-oriented program parser.
//!
//! Comments are blanked out first (same byte length, newlines kept) so every later span still
//! points into the text the user wrote. Each remaining line is then classified:
//!
//! - `if (...)` (the keyword followed by whitespace or `(`) becomes a conditional whose
//!   condition is the balanced parenthesized text and whose branches are empty;
//! - a line containing `:=` becomes an assignment, trailing `;` removed;
//! - anything else (`else`, braces, prose) is skipped.
use chumsky::prelude::*;
use log::{debug, trace};
use wpformal::stmt::Statement;

use crate::error::{ParseError, ParseErrors};

type Extra<'src> = extra::Err<Rich<'src, char>>;

/// Replace every character by spaces of the same UTF-8 width, keeping line breaks.
fn blank_out(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\n' => "\n".to_string(),
            c => " ".repeat(c.len_utf8()),
        })
        .collect()
}

/// Source text with `//` and `/* */` comments blanked. The output has the input's exact byte
/// length. An unterminated block comment is reported but still blanked.
pub fn comment_stripper<'src>() -> impl Parser<'src, &'src str, String, Extra<'src>> {
    let line_comment = just("//")
        .then(any().and_is(just('\n').not()).repeated())
        .to_slice()
        .map(blank_out)
        .labelled("line comment");

    let block_comment = just("/*")
        .then(any().and_is(just("*/").not()).repeated())
        .then(just("*/"))
        .to_slice()
        .map(blank_out)
        .labelled("block comment");

    let unterminated_block = just("/*")
        .then(any().repeated())
        .to_slice()
        .validate(|text: &str, extra, emit| {
            emit.emit(Rich::custom(
                extra.span(),
                "unterminated block comment: missing closing `*/`",
            ));
            blank_out(text)
        });

    choice((
        line_comment,
        block_comment,
        unterminated_block,
        any().map(|c: char| c.to_string()),
    ))
    .repeated()
    .collect::<Vec<String>>()
    .map(|parts| parts.concat())
    .then_ignore(end())
}

/// `if (condition)`. Whatever follows the closing parenthesis on the same line (`{`, `then`,
/// an inline body) is dropped: conditionals are built with empty branches.
pub fn conditional_header<'src>() -> impl Parser<'src, &'src str, Statement, Extra<'src>> {
    let balanced = recursive(|balanced| {
        choice((
            none_of("()").ignored(),
            balanced.delimited_by(just('('), just(')')).ignored(),
        ))
        .repeated()
    });

    just("if")
        .ignore_then(text::whitespace())
        .ignore_then(
            balanced
                .to_slice()
                .delimited_by(just('('), just(')'))
                .labelled("parenthesized condition"),
        )
        .then(any().repeated().to_slice().labelled("rest of the `if` line"))
        .try_map(|(condition, rest): (&str, &str), span| {
            let condition = condition.trim();
            if condition.is_empty() {
                return Err(Rich::custom(span, "empty condition in `if` header"));
            }
            let rest = rest.trim();
            if !rest.is_empty() {
                debug!("dropping `{rest}` after `if ({condition})`");
            }
            Ok(Statement::branch(condition, [], []))
        })
}

/// `target := expression`, with any trailing `;` dropped from the expression.
pub fn assignment<'src>() -> impl Parser<'src, &'src str, Statement, Extra<'src>> {
    let target = text::ascii::ident().padded().labelled("assignment target");
    let value = any()
        .and_is(just(":=").not())
        .repeated()
        .to_slice()
        .labelled("assigned expression");

    target
        .then_ignore(just(":="))
        .then(value)
        .then_ignore(end())
        .try_map(|(target, value): (&str, &str), span| {
            let value = value.trim().trim_end_matches(';').trim_end();
            if value.is_empty() {
                Err(Rich::custom(
                    span,
                    format!("missing expression after `{target} :=`"),
                ))
            } else {
                Ok(Statement::assign(target, value))
            }
        })
}

fn is_conditional_header(line: &str) -> bool {
    line.strip_prefix("if").is_some_and(|rest| {
        rest.is_empty() || rest.starts_with(|c: char| c == '(' || c.is_whitespace())
    })
}

/// Convert chumsky errors into located errors, shifting spans by `offset` bytes.
fn located(source: &str, offset: usize, errors: Vec<Rich<'_, char>>) -> Vec<ParseError> {
    errors
        .into_iter()
        .map(|e| {
            let start = offset + e.span().start;
            let end = offset + e.span().end;
            ParseError {
                message: e.to_string(),
                line: source[..start.min(source.len())].matches('\n').count() + 1,
                start,
                end,
            }
        })
        .collect()
}

/// Parse program text into top-level statements, in source order.
///
/// Every line is checked, so all syntax errors of a program are reported together. Blank and
/// comment-only input yields an empty list.
///
/// ```
/// use wplang::parse_program;
/// use wpformal::stmt::Statement;
///
/// let statements = parse_program("x := 5;\n// done\n").unwrap();
/// assert_eq!(statements, vec![Statement::assign("x", "5")]);
/// ```
pub fn parse_program(source: &str) -> Result<Vec<Statement>, ParseErrors> {
    let stripped = comment_stripper()
        .parse(source)
        .into_result()
        .map_err(|errors| ParseErrors(located(source, 0, errors)))?;

    let header = conditional_header();
    let assign = assignment();

    let mut statements = Vec::new();
    let mut errors = Vec::new();
    let mut offset = 0;

    for (index, raw) in stripped.split_inclusive('\n').enumerate() {
        let line_start = offset;
        offset += raw.len();

        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let start = line_start + (raw.len() - raw.trim_start().len());

        let parsed = if is_conditional_header(line) {
            header.parse(line).into_result()
        } else if line.contains(":=") {
            assign.parse(line).into_result()
        } else {
            debug!("line {}: skipping `{line}`", index + 1);
            continue;
        };

        match parsed {
            Ok(statement) => {
                trace!("line {}: {statement}", index + 1);
                statements.push(statement);
            }
            Err(e) => errors.extend(located(source, start, e)),
        }
    }

    if errors.is_empty() {
        Ok(statements)
    } else {
        Err(ParseErrors(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stripping_preserves_byte_length() {
        let source = "x := 1; // ≠ here\n/* é\n */ y := 2";
        let stripped = comment_stripper().parse(source).into_result().unwrap();
        assert_eq!(stripped.len(), source.len());
        assert_eq!(stripped.lines().count(), source.lines().count());
        assert!(stripped.starts_with("x := 1; "));
        assert!(stripped.ends_with(" y := 2"));
    }

    #[test]
    fn keyword_needs_a_boundary() {
        assert!(is_conditional_header("if (x)"));
        assert!(is_conditional_header("if(x)"));
        assert!(is_conditional_header("if"));
        assert!(!is_conditional_header("iffy := 1"));
    }

    #[test]
    fn nested_parentheses_stay_in_condition() {
        let statement = conditional_header()
            .parse("if ((a + b) > 0) {")
            .into_result()
            .unwrap();
        assert_eq!(statement, Statement::branch("(a + b) > 0", [], []));
    }

    #[test]
    fn missing_parenthesis_names_the_condition() {
        let errors = conditional_header().parse("if x > 0").into_result().unwrap_err();
        assert!(errors[0].to_string().contains("parenthesized condition"));
    }
}
