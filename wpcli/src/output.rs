//! Report and diagnostic printing.
use std::io::{self, Write};

use ariadne::{ColorGenerator, Config, IndexType, Label, Report as Diagnostic, ReportKind, Source};
use termcolor::{Color, ColorSpec, WriteColor};
use wpcore::Report;
use wpformal::prelude::*;
use wplang::ParseErrors;

#[derive(Debug, Clone, Copy)]
enum Section {
    Derivation,
    Postcondition,
    Triple,
}

impl Section {
    fn title(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::English, Section::Derivation) => "Derivation",
            (Locale::English, Section::Postcondition) => "Postcondition in words",
            (Locale::English, Section::Triple) => "Hoare triple",
            (Locale::Russian, Section::Derivation) => "Вывод",
            (Locale::Russian, Section::Postcondition) => "Постусловие словами",
            (Locale::Russian, Section::Triple) => "Триада Хоара",
        }
    }
}

fn heading<W: WriteColor + Write>(out: &mut W, section: Section, locale: Locale) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(out, "{}", section.title(locale))?;
    out.reset()?;
    writeln!(out)
}

/// Numbered derivation ending with the precondition, the postcondition in words, and the
/// Hoare triple.
pub fn write_report<W: WriteColor + Write>(
    out: &mut W,
    report: &Report,
    width: usize,
) -> io::Result<()> {
    let locale = report.locale;

    heading(out, Section::Derivation, locale)?;
    report.result.pretty_render_to(locale, width, out)?;
    writeln!(out)?;
    writeln!(out)?;

    heading(out, Section::Postcondition, locale)?;
    writeln!(out, "{}", report.human_readable_post)?;
    writeln!(out)?;

    heading(out, Section::Triple, locale)?;
    report.triple.pretty_render_to(locale, width, out)?;
    writeln!(out)
}

/// One ariadne report per syntax error, pointing into `source`.
pub fn print_parse_errors(
    name: &str,
    source: &str,
    errors: &ParseErrors,
    color: bool,
) -> io::Result<()> {
    let mut colors = ColorGenerator::new();
    let a = colors.next();
    let config = Config::default()
        .with_index_type(IndexType::Byte)
        .with_color(color);

    for error in errors.iter() {
        let span = (name.to_string(), error.start..error.end);
        Diagnostic::build(ReportKind::Error, span.clone())
            .with_config(config)
            .with_message(&error.message)
            .with_label(
                Label::new(span)
                    .with_message("The error occurred here")
                    .with_color(a),
            )
            .finish()
            .eprint((name.to_string(), Source::from(source)))?;
    }
    Ok(())
}
