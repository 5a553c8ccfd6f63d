//! Terminal sink for the `log` facade: local timestamp, colored level, module path.
use std::io::{self, Write};

use chrono::NaiveDateTime;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

struct TermLogger {
    level: LevelFilter,
    choice: ColorChoice,
}

fn level_spec(level: Level) -> ColorSpec {
    let mut s = ColorSpec::new();
    match level {
        Level::Error => s.set_fg(Some(Color::Red)).set_bold(true),
        Level::Warn => s.set_fg(Some(Color::Yellow)).set_bold(true),
        Level::Info => s.set_fg(Some(Color::Green)),
        Level::Debug => s.set_fg(Some(Color::Blue)),
        Level::Trace => s.set_dimmed(true),
    };
    s
}

fn write_record<W: WriteColor + Write>(
    out: &mut W,
    record: &Record<'_>,
    timepoint: NaiveDateTime,
) -> io::Result<()> {
    write!(out, "{} ", timepoint.format("%H:%M:%S%.3f"))?;
    out.set_color(&level_spec(record.level()))?;
    write!(out, "{:<5}", record.level())?;
    out.reset()?;
    writeln!(
        out,
        " [{}] {}",
        record.module_path().unwrap_or("?"),
        record.args()
    )
}

impl Log for TermLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let stderr = StandardStream::stderr(self.choice);
        let mut stderr = stderr.lock();
        // Nowhere left to report a failing stderr.
        let _ = write_record(&mut stderr, record, chrono::Local::now().naive_local());
    }

    fn flush(&self) {}
}

pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the terminal logger as the global `log` sink.
pub fn init(verbosity: u8, choice: ColorChoice) -> Result<(), SetLoggerError> {
    let level = level_for(verbosity);
    log::set_boxed_logger(Box::new(TermLogger { level, choice }))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use termcolor::Buffer;

    use super::*;

    #[test]
    fn record_line_layout() {
        let timepoint = NaiveDate::from_ymd_opt(2026, 1, 2)
            .unwrap()
            .and_hms_milli_opt(3, 4, 5, 6)
            .unwrap();
        let mut buf = Buffer::no_color();
        write_record(
            &mut buf,
            &Record::builder()
                .args(format_args!("computed"))
                .level(Level::Info)
                .module_path(Some("wpcore::session"))
                .build(),
            timepoint,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(buf.into_inner()).unwrap(),
            "03:04:05.006 INFO  [wpcore::session] computed\n"
        );
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }
}
