/// Name of the environment variable containing the path to the calculator configuration file.
/// If not set, defaults to
///  (1) on Linux and macOS: `$XDG_CONFIG_HOME/wpcalc/config.toml` or `$HOME/.config/wpcalc/config.toml`
///  (2) on Windows: `%APPDATA%\wpcalc\config.toml`
pub const ENV_CONFIG_PATH: &str = "WP_CONFIG_PATH";

/// Directory and file name of the default configuration location.
pub const CONFIG_DIR_NAME: &str = "wpcalc";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default input limits, in characters.
pub const DEFAULT_MAX_POSTCONDITION_LEN: usize = 500;
pub const DEFAULT_MAX_PROGRAM_LEN: usize = 2000;

/// Default bound on the nesting depth of statement trees handed to the engine.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Symbols allowed in postconditions and programs besides letters, digits and whitespace.
pub const EXPRESSION_SYMBOLS: &str = "><=!&|+-*/()[]{},.∧∨¬≠≥≤";

/// Symbols allowed in programs only.
pub const PROGRAM_SYMBOLS: &str = ":;";
