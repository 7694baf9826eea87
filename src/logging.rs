use std::io::IsTerminal;

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Install a terminal logger that always writes to stderr.
///
/// Stdout is reserved for the generated source when `-` is the output.
pub fn init(level: LevelFilter) {
    let mut config = ConfigBuilder::new();
    config.set_time_level(LevelFilter::Off);
    config.set_thread_level(LevelFilter::Off);
    config.set_target_level(LevelFilter::Off);

    let colors = color_choice(std::io::stderr().is_terminal());
    if TermLogger::init(level, config.build(), TerminalMode::Stderr, colors).is_err() {
        eprintln!("icongen: logger already initialised");
    }
}

// termcolor's Auto only looks at TERM, so piped stderr would still get escapes
fn color_choice(stderr_is_terminal: bool) -> ColorChoice {
    if stderr_is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}
