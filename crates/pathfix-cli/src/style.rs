use std::env;

use color_eyre::owo_colors::OwoColorize;

pub struct Style {
    enabled: bool,
}

impl Style {
    pub fn new(force_no_color: bool, is_tty: bool) -> Self {
        let env_no_color = env::var_os("NO_COLOR").is_some();
        Self {
            enabled: !(force_no_color || env_no_color) && is_tty,
        }
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, Tone::Error)
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(text, Tone::Warning)
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match tone {
            Tone::Warning => text.yellow().to_string(),
            Tone::Error => text.red().bold().to_string(),
        }
    }
}

enum Tone {
    Warning,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_when_not_a_tty() {
        let style = Style::new(false, false);
        assert_eq!(style.error("a.py: cannot open"), "a.py: cannot open");
        assert_eq!(style.warning("a.py: warning"), "a.py: warning");
    }

    #[test]
    fn no_color_flag_wins_over_tty() {
        let style = Style::new(true, true);
        assert_eq!(style.error("boom"), "boom");
    }

    #[test]
    fn errors_are_painted_on_a_tty() {
        if env::var_os("NO_COLOR").is_some() {
            return;
        }
        let style = Style::new(false, true);
        let painted = style.error("boom");
        assert!(painted.contains("boom"));
        assert_ne!(painted, "boom");
    }
}
