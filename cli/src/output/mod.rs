//! Output formatting module

pub mod reporter;
pub mod styles;

use console::Term;
use owo_colors::OwoColorize as _;
pub use reporter::TerminalReporter;
pub use styles::Styles;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool) -> Self {
        let use_colors =
            !no_color && Term::stderr().is_term() && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self { styles }
    }

    /// Print a plain informational line to stdout.
    pub fn info(&self, msg: &str) {
        println!("{msg}");
    }

    /// Print a `[warn]`-tagged message to stderr.
    pub fn warn(&self, msg: &str) {
        eprintln!("{} {msg}", "[warn]".style(self.styles.warning));
    }

    /// Print an `[error]`-tagged message to stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {msg}", "[error]".style(self.styles.error));
    }
}
