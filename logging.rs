//! Logger setup. Logs go to stderr so stdout carries only the report.

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Install the terminal logger for the binary.
///
/// Debug builds log at info level, release builds only warnings.
pub fn initialize() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .build();

    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

/// Logger for tests; no-ops if one is already installed.
pub fn initialize_for_tests() {
    let _ = TermLogger::init(
        LevelFilter::Debug,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Never,
    );
}
