use crate::change::Drift;
use colored::Colorize;

/// Prints one status line per managed requirements file
pub struct StatusReporter {
    show_colors: bool,
    quiet: bool,
}

impl StatusReporter {
    pub fn new(show_colors: bool) -> Self {
        Self {
            show_colors,
            quiet: false,
        }
    }

    /// Suppress status lines entirely
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Report whether the target of `drift` needed an update
    pub fn report(&self, drift: &Drift) {
        if !self.quiet {
            println!("{}", self.status_line(drift));
        }
    }

    /// Print the unified diff for a drifted file
    pub fn report_diff(&self, drift: &Drift) {
        if self.quiet || !drift.needs_update {
            return;
        }

        for line in drift.unified_diff().lines() {
            println!("{}", self.colorize_diff_line(line));
        }
    }

    pub fn status_line(&self, drift: &Drift) -> String {
        let path = drift.path.display();
        if drift.needs_update {
            let status = "needs to be updated";
            if self.show_colors {
                format!("{path} {}", status.yellow())
            } else {
                format!("{path} {status}")
            }
        } else {
            let status = "is updated";
            if self.show_colors {
                format!("{path} {}", status.green())
            } else {
                format!("{path} {status}")
            }
        }
    }

    fn colorize_diff_line(&self, line: &str) -> String {
        if !self.show_colors {
            return line.to_string();
        }

        if line.starts_with("+++") || line.starts_with("---") || line.starts_with("@@") {
            line.cyan().to_string()
        } else if line.starts_with('+') {
            line.green().to_string()
        } else if line.starts_with('-') {
            line.red().to_string()
        } else {
            line.dimmed().to_string()
        }
    }
}
