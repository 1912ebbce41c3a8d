use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// What the attached terminal can show, fixed once per process.
#[derive(Clone, Copy, Debug, Default)]
pub struct Terminal {
    pub color: bool,
    pub progress: bool,
    pub width: Option<usize>,
}

const NARROWEST: usize = 40;

static TERMINAL: OnceLock<Terminal> = OnceLock::new();

impl Terminal {
    fn detect(flags: &GlobalFlags) -> Self {
        let tabular = flags.format == OutputFormat::Table;
        let color = tabular
            && match flags.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => {
                    !flags.quiet && std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
                }
            };
        // Progress is drawn on stderr and never mixed into JSON consumers.
        let progress = !flags.quiet && flags.format != OutputFormat::Json && std::io::stderr().is_terminal();
        let width = std::env::var("COLUMNS")
            .ok()
            .and_then(|columns| columns.trim().parse().ok())
            .filter(|columns| *columns >= NARROWEST);

        Self { color, progress, width }
    }
}

pub fn configure(flags: &GlobalFlags) {
    TERMINAL.get_or_init(|| Terminal::detect(flags));
}

/// Detected capabilities; everything off before [`configure`] runs.
#[must_use]
pub fn terminal() -> Terminal {
    TERMINAL.get().copied().unwrap_or_default()
}
