mod args;
mod logger;
mod output;

use clap::Parser as ClapParser;
use log::error;
use termcolor::{ColorChoice, StandardStream};
use wpcore::{CalcError, Calculator};
use wpformal::pretty::terminal_width;

use crate::args::Arguments;

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

fn main() {
    let args = Arguments::parse();
    let choice = if args.plain {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    if let Err(e) = logger::init(args.verbose, choice) {
        eprintln!("Warning: logging disabled: {e}");
    }

    let config = args.load_config().unwrap_or_else(|e| fail(e));
    let (name, source) = args.read_program().unwrap_or_else(|e| fail(e));
    let width = config.render_width.unwrap_or_else(terminal_width);

    let calculator = Calculator::new(config);
    match calculator.calculate(&source, &args.post) {
        Ok(report) => {
            let stdout = StandardStream::stdout(choice);
            let mut stdout = stdout.lock();
            if let Err(e) = output::write_report(&mut stdout, &report, width) {
                fail(e);
            }
        }
        Err(CalcError::ParseErrors(errors)) => {
            eprintln!("Failed to parse program from {name}:");
            if let Err(e) = output::print_parse_errors(&name, &source, &errors, !args.plain) {
                error!("could not render diagnostics: {e}");
            }
            std::process::exit(1);
        }
        Err(e) => fail(e),
    }
}
