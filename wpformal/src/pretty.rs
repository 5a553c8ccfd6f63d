//! RcDoc-based pretty-printer with termcolor annotations for predicates, derivations, and
//! Hoare triples.
//!
//! Role
//! - Convert engine output into an annotated document suitable for width-aware rendering.
//! - Provide colored output for terminals (TTY-aware) and plain strings for logs/tests.
//!
//! Predicate text is never parsed; the printer only splits it into operator symbols,
//! parentheses, and identifier runs to color them. Parentheses are colored by nesting depth so
//! matching pairs share a color.

use pretty::{RcDoc, RenderAnnotated};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::expr::Expression;
use crate::locale::Locale;
use crate::triple::HoareTriple;
use crate::wp::WpResult;
use crate::wp::step::{DerivationStep, StepKind};

/// Styles used to annotate parts of the pretty-printed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Punct, // braces, separators
    /// Parentheses are colored by nesting depth so matching pairs share a color.
    Paren(u8),
    Keyword,   // section headers, "program"
    Operator,  // ∧, ∨, !, ==, >=, :=
    Ident,     // variables and literals
    Index,     // step numbers
    Condition, // definiteness conditions
}

impl Style {
    fn to_color_spec(self) -> ColorSpec {
        let mut s = ColorSpec::new();
        match self {
            Style::Punct | Style::Index => {
                s.set_dimmed(true);
            }
            Style::Paren(depth) => {
                let fg = match depth % 6 {
                    0 => Color::Blue,
                    1 => Color::Green,
                    2 => Color::White,
                    3 => Color::Yellow,
                    4 => Color::Red,
                    5 => Color::Magenta,
                    _ => unreachable!(),
                };
                s.set_fg(Some(fg)).set_dimmed(true);
            }
            Style::Keyword => {
                s.set_fg(Some(Color::Cyan)).set_bold(true);
            }
            Style::Operator => {
                s.set_fg(Some(Color::Yellow)).set_bold(true);
            }
            Style::Ident => {
                s.set_fg(Some(Color::Green));
            }
            Style::Condition => {
                s.set_fg(Some(Color::Red)).set_bold(true);
            }
        }
        s
    }
}

fn styled(style: Style, s: impl Into<String>) -> RcDoc<'static, Style> {
    RcDoc::text(s.into()).annotate(style)
}

fn punct(s: &'static str) -> RcDoc<'static, Style> {
    styled(Style::Punct, s)
}

fn kw(s: &'static str) -> RcDoc<'static, Style> {
    styled(Style::Keyword, s)
}

/// Operator symbols highlighted inside predicate text, longest first.
const OPERATORS: &[&str] = &[
    ":=", ">=", "<=", "==", "!=", "&&", "||", "∧", "∨", "¬", "≠", "≥", "≤", ">", "<", "!", "+",
    "-", "*", "/",
];

/// Split raw predicate text into styled fragments without changing a single character.
fn predicate_doc(text: &str) -> RcDoc<'static, Style> {
    let mut doc = RcDoc::nil();
    let mut depth: u8 = 0;
    let mut rest = text;

    'scan: while let Some(c) = rest.chars().next() {
        if c == '(' {
            doc = doc.append(styled(Style::Paren(depth), "("));
            depth = depth.wrapping_add(1);
            rest = &rest[1..];
            continue;
        }
        if c == ')' {
            depth = depth.wrapping_sub(1);
            doc = doc.append(styled(Style::Paren(depth), ")"));
            rest = &rest[1..];
            continue;
        }
        for symbol in OPERATORS {
            if let Some(tail) = rest.strip_prefix(symbol) {
                doc = doc.append(styled(Style::Operator, *symbol));
                rest = tail;
                continue 'scan;
            }
        }

        let word_len = rest
            .char_indices()
            .find(|(_, ch)| !(ch.is_alphanumeric() || *ch == '_' || *ch == '.'))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        if word_len > 0 {
            doc = doc.append(styled(Style::Ident, &rest[..word_len]));
            rest = &rest[word_len..];
        } else {
            doc = doc.append(RcDoc::text(c.to_string()));
            rest = &rest[c.len_utf8()..];
        }
    }
    doc
}

fn step_doc(step: &DerivationStep, locale: Locale) -> RcDoc<'static, Style> {
    let indent = RcDoc::text(DerivationStep::INDENT.repeat(step.depth));
    let text = step.kind.render(locale);
    let body = match &step.kind {
        StepKind::SequenceHeader | StepKind::Branching { .. } => styled(Style::Keyword, text),
        StepKind::Definiteness(_) => styled(Style::Condition, text),
        StepKind::Separator | StepKind::EmptyBranch | StepKind::EmptySequence => {
            styled(Style::Punct, text)
        }
        StepKind::Obtained(e) | StepKind::SequenceSummary(e) | StepKind::Merge(e) => {
            // Label up to and including the colon, then the colored predicate.
            let label_len = text.len() - e.text().len();
            RcDoc::text(text[..label_len].to_string()).append(predicate_doc(e.text()))
        }
        StepKind::Assignment { .. } | StepKind::Replacing { .. } => RcDoc::text(text),
    };
    indent.append(body)
}

// A writer that maps Style annotations to termcolor ColorSpec on a WriteColor sink.
struct ColorWriter<'w, W: WriteColor + Write> {
    out: &'w mut W,
}

impl<'a, 'w, W: WriteColor + Write> RenderAnnotated<'a, Style> for ColorWriter<'w, W> {
    fn push_annotation(&mut self, ann: &'a Style) -> io::Result<()> {
        self.out.set_color(&ann.to_color_spec())
    }
    fn pop_annotation(&mut self) -> io::Result<()> {
        self.out.reset()
    }
}

impl<'w, W: WriteColor + Write> pretty::Render for ColorWriter<'w, W> {
    type Error = io::Error;
    fn write_str(&mut self, s: &str) -> io::Result<usize> {
        self.out.write_all(s.as_bytes())?;
        Ok(s.len())
    }
    fn write_str_all(&mut self, s: &str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())
    }
    fn fail_doc(&self) -> Self::Error {
        io::Error::other("render failed")
    }
}

/// Render a document to a `termcolor::WriteColor` with width-aware layout.
fn render_to<W: WriteColor + Write>(
    doc: &RcDoc<'_, Style>,
    width: usize,
    out: &mut W,
) -> io::Result<()> {
    let mut cw = ColorWriter { out };
    doc.render_raw(width, &mut cw)
}

/// Convenience: retrieve the width of the terminal, or 80 if it cannot be determined.
pub fn terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

// ======================== Trait impls =========================
/// Pretty-printing conveniences for engine output.
pub trait PrettyDoc {
    /// Build an RcDoc representation with style annotations.
    fn pretty_doc(&self, locale: Locale) -> RcDoc<'static, Style>;

    /// Render with colors to any termcolor writer at the given width.
    fn pretty_render_to<W: WriteColor + Write>(
        &self,
        locale: Locale,
        width: usize,
        out: &mut W,
    ) -> io::Result<()> {
        render_to(&self.pretty_doc(locale), width, out)
    }

    /// Print to stdout with colors (TTY-aware), at auto-detected width (or 80 if not a TTY).
    fn pretty_print(&self, locale: Locale) -> io::Result<()> {
        let stdout = StandardStream::stdout(ColorChoice::Auto);
        let mut stdout = stdout.lock();
        self.pretty_render_to(locale, terminal_width(), &mut stdout)
    }

    /// Format into a plain string (no colors).
    fn pretty_string(&self, locale: Locale) -> String {
        let mut buf = String::new();
        let _ = self.pretty_doc(locale).render_fmt(80, &mut buf);
        buf
    }
}

impl PrettyDoc for Expression {
    fn pretty_doc(&self, _locale: Locale) -> RcDoc<'static, Style> {
        match self {
            Expression::Variable(name) | Expression::Constant(name) => {
                styled(Style::Ident, name.as_str())
            }
            Expression::Compound(text) => predicate_doc(text),
        }
    }
}

impl PrettyDoc for HoareTriple {
    fn pretty_doc(&self, _locale: Locale) -> RcDoc<'static, Style> {
        let braced = |inner: &str| {
            punct("{")
                .append(RcDoc::space())
                .append(RcDoc::text(inner.to_string()))
                .append(RcDoc::space())
                .append(punct("}"))
                .group()
        };

        braced(&self.precondition)
            .append(RcDoc::hardline())
            .append(kw(self.program))
            .append(RcDoc::hardline())
            .append(braced(&self.postcondition))
    }
}

impl PrettyDoc for WpResult {
    /// Numbered derivation followed by the final precondition.
    fn pretty_doc(&self, locale: Locale) -> RcDoc<'static, Style> {
        let width = self.steps.len().to_string().len();
        let mut doc = RcDoc::nil();
        for (i, step) in self.steps.iter().enumerate() {
            doc = doc
                .append(styled(Style::Index, format!("{:>width$}.", i + 1)))
                .append(RcDoc::space())
                .append(step_doc(step, locale))
                .append(RcDoc::hardline());
        }
        doc.append(kw("wp"))
            .append(punct(" = "))
            .append(self.precondition.pretty_doc(locale))
    }
}
