use colored::Colorize;

/// Status lines on stderr, tagged the same way as the banner warnings.
#[derive(Clone, Copy, Debug, Default)]
pub struct Console {
    verbosity: u8,
}

impl Console {
    pub fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    pub fn verbosity(&self) -> u8 {
        self.verbosity
    }

    pub fn info(&self, message: impl AsRef<str>) {
        eprintln!(
            "{}{}{} {}",
            "[".bold().white(),
            "INF".bold().blue(),
            "]".bold().white(),
            message.as_ref()
        );
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        eprintln!(
            "{}{}{} {}",
            "[".bold().white(),
            "WRN".bold().yellow(),
            "]".bold().white(),
            message.as_ref().bold().white()
        );
    }

    pub fn error(&self, message: impl AsRef<str>) {
        eprintln!(
            "{}{}{} {}",
            "[".bold().white(),
            "ERR".bold().red(),
            "]".bold().white(),
            message.as_ref()
        );
    }

    pub fn debug(&self, message: impl AsRef<str>) {
        if self.verbosity == 0 {
            return;
        }
        eprintln!(
            "{}{}{} {}",
            "[".bold().white(),
            "DBG".bold().purple(),
            "]".bold().white(),
            message.as_ref().dimmed()
        );
    }

    pub fn kv(&self, label: &str, value: &str) {
        eprintln!(":: {:<10}: {}", label, value);
    }
}

/// `colored` reads the environment on its own; these flags take precedence.
pub fn apply_color_choice(force_color: bool, no_color: bool) {
    if force_color {
        colored::control::set_override(true);
    } else if no_color {
        colored::control::set_override(false);
    } else {
        colored::control::unset_override();
    }
}
