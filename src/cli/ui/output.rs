use console::style;

/// Status lines for command feedback
pub struct Output {
    quiet: bool,
}

impl Output {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// Suppress everything except errors
    pub fn quiet(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✓").green(), message);
        }
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("ℹ").blue(), message);
        }
    }

    /// Indented `label: value` line under a status message
    pub fn detail(&self, label: &str, value: &str) {
        if !self.quiet {
            println!("  {} {}", style(format!("{}:", label)).dim(), value);
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
