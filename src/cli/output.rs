use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub pretty: bool,
    pub use_color: bool,
    pub verbose: bool,
}

pub fn detect_color(color_flag: bool) -> bool {
    if !color_flag {
        return false;
    }
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_flag_wins_over_everything() {
        assert!(!detect_color(false));
    }

    #[test]
    fn no_color_env_disables() {
        std::env::set_var("NO_COLOR", "1");
        let result = detect_color(true);
        std::env::remove_var("NO_COLOR");
        assert!(!result);
    }
}
