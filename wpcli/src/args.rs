use std::path::PathBuf;

use clap::{ArgAction, Parser as ClapParser};
use wpcore::{CalcResult, CalculatorConfig};
use wpformal::locale::Locale;

/// Compute the weakest precondition of a program for a postcondition.
#[derive(ClapParser, Debug)]
#[command(name = "wpcalc", version)]
pub struct Arguments {
    /// Path to the program file
    #[arg(short, long, value_name = "FILE", required_unless_present = "source")]
    pub program: Option<PathBuf>,

    /// Program text given inline
    #[arg(short, long, value_name = "TEXT", conflicts_with = "program")]
    pub source: Option<String>,

    /// Postcondition that must hold after the program
    #[arg(long, value_name = "TEXT")]
    pub post: String,

    /// Configuration file (defaults to the per-user location)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output language: en or ru
    #[arg(short, long)]
    pub locale: Option<Locale>,

    /// Disable colored output
    #[arg(long)]
    pub plain: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Arguments {
    /// Display name and text of the program.
    pub fn read_program(&self) -> CalcResult<(String, String)> {
        match (&self.program, &self.source) {
            (Some(path), _) => Ok((path.display().to_string(), std::fs::read_to_string(path)?)),
            (None, Some(source)) => Ok(("<source>".to_string(), source.clone())),
            (None, None) => Ok(("<source>".to_string(), String::new())),
        }
    }

    /// An explicit `--config` file must exist; the default location may be absent.
    pub fn load_config(&self) -> CalcResult<CalculatorConfig> {
        let mut config = match &self.config {
            Some(path) => CalculatorConfig::load_from_toml(path)?,
            None => CalculatorConfig::load_or_default(&CalculatorConfig::default_path())?,
        };
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        Ok(config)
    }
}
