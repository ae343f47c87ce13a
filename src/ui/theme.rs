use crate::app::ThemeMode;

/// ANSI styling for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub title: &'static str,
    pub accent: &'static str,
    pub muted: &'static str,
    pub error: &'static str,
    pub reset: &'static str,
}

const LIGHT: Palette = Palette {
    title: "\x1b[1;30m",
    accent: "\x1b[34m",
    muted: "\x1b[90m",
    error: "\x1b[31m",
    reset: "\x1b[0m",
};

const DARK: Palette = Palette {
    title: "\x1b[1;97m",
    accent: "\x1b[93m",
    muted: "\x1b[37m",
    error: "\x1b[91m",
    reset: "\x1b[0m",
};

/// Styling that leaves text untouched, for tests and piped output.
pub const PLAIN: Palette = Palette {
    title: "",
    accent: "",
    muted: "",
    error: "",
    reset: "",
};

pub fn palette_for(theme: ThemeMode) -> Palette {
    match theme {
        ThemeMode::Light => LIGHT,
        ThemeMode::Dark => DARK,
    }
}

impl Palette {
    pub fn title(&self, text: &str) -> String {
        format!("{}{}{}", self.title, text, self.reset)
    }

    pub fn accent(&self, text: &str) -> String {
        format!("{}{}{}", self.accent, text, self.reset)
    }

    pub fn muted(&self, text: &str) -> String {
        format!("{}{}{}", self.muted, text, self.reset)
    }

    pub fn error(&self, text: &str) -> String {
        format!("{}{}{}", self.error, text, self.reset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        assert_ne!(palette_for(ThemeMode::Light), palette_for(ThemeMode::Dark));
    }

    #[test]
    fn test_plain_is_passthrough() {
        assert_eq!(PLAIN.title("Hola"), "Hola");
        assert_eq!(PLAIN.error("x"), "x");
    }
}
